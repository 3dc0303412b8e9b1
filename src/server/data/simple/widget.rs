use rust_decimal::Decimal;
use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait, Select,
};

use crate::server::{
    form::simple::WidgetInput,
    model::kind::EntityKind,
    util::{links::EntityLinks, pagination::Pagination},
};

pub struct WidgetRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> WidgetRepository<'a, C> {
    /// Creates a new instance of [`WidgetRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a widget owned by `user_id` and stores the links derived from its id.
    pub async fn create(
        &self,
        user_id: i32,
        input: WidgetInput,
    ) -> Result<entity::simple_widget::Model, DbErr> {
        let widget = entity::simple_widget::ActiveModel {
            created_by: ActiveValue::Set(user_id),
            name: ActiveValue::Set(input.name),
            sku: ActiveValue::Set(input.sku),
            cost: ActiveValue::Set(input.cost),
            deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let links = EntityLinks::new(EntityKind::Widget, widget.id);
        let mut widget_am = widget.into_active_model();
        widget_am.link = ActiveValue::Set(Some(links.link));
        widget_am.ulink = ActiveValue::Set(Some(links.ulink));
        widget_am.dlink = ActiveValue::Set(Some(links.dlink));

        widget_am.update(self.db).await
    }

    pub async fn get_active(
        &self,
        user_id: i32,
        widget_id: i32,
    ) -> Result<Option<entity::simple_widget::Model>, DbErr> {
        active(user_id)
            .filter(entity::simple_widget::Column::Id.eq(widget_id))
            .one(self.db)
            .await
    }

    /// One page of the user's active widgets; the aggregate sums over the same slice.
    pub async fn get_page(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<entity::simple_widget::Model>, DbErr> {
        let Some(offset) = pagination.offset() else {
            return Ok(Vec::new());
        };

        active(user_id)
            .order_by_asc(entity::simple_widget::Column::Id)
            .offset(offset)
            .limit(pagination.limit())
            .all(self.db)
            .await
    }

    /// Total `cost` of the widgets on one page, summed by the database.
    pub async fn sum_cost(&self, user_id: i32, pagination: Pagination) -> Result<Decimal, DbErr> {
        let Some(offset) = pagination.offset() else {
            return Ok(Decimal::ZERO);
        };

        let page_ids = active(user_id)
            .select_only()
            .column(entity::simple_widget::Column::Id)
            .order_by_asc(entity::simple_widget::Column::Id)
            .offset(offset)
            .limit(pagination.limit())
            .into_query();

        let sum = entity::prelude::SimpleWidget::find()
            .select_only()
            .column_as(Expr::col(entity::simple_widget::Column::Cost).sum(), "total")
            .filter(entity::simple_widget::Column::Id.in_subquery(page_ids))
            .into_tuple::<Option<Decimal>>()
            .one(self.db)
            .await?;

        Ok(sum.flatten().unwrap_or(Decimal::ZERO))
    }

    pub async fn count_active(&self, user_id: i32) -> Result<u64, DbErr> {
        active(user_id).count(self.db).await
    }

    pub async fn update(
        &self,
        user_id: i32,
        widget_id: i32,
        input: WidgetInput,
    ) -> Result<Option<entity::simple_widget::Model>, DbErr> {
        let Some(widget) = self.get_active(user_id, widget_id).await? else {
            return Ok(None);
        };

        let mut widget_am = widget.into_active_model();
        widget_am.name = ActiveValue::Set(input.name);
        widget_am.sku = ActiveValue::Set(input.sku);
        widget_am.cost = ActiveValue::Set(input.cost);

        Ok(Some(widget_am.update(self.db).await?))
    }

    pub async fn soft_delete(
        &self,
        user_id: i32,
        widget_id: i32,
    ) -> Result<Option<entity::simple_widget::Model>, DbErr> {
        let Some(widget) = self.get_active(user_id, widget_id).await? else {
            return Ok(None);
        };

        let mut widget_am = widget.into_active_model();
        widget_am.deleted = ActiveValue::Set(true);

        Ok(Some(widget_am.update(self.db).await?))
    }
}

fn active(user_id: i32) -> Select<entity::simple_widget::Entity> {
    entity::prelude::SimpleWidget::find()
        .filter(entity::simple_widget::Column::CreatedBy.eq(user_id))
        .filter(entity::simple_widget::Column::Deleted.eq(false))
}

#[cfg(test)]
mod tests {
    mod create {
        use popular_test_utils::prelude::*;
        use rust_decimal::Decimal;

        use crate::server::{data::simple::widget::WidgetRepository, form::simple::WidgetInput};

        #[tokio::test]
        async fn creates_widget_with_links() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_simple_tables().build().await?;
            let user = test.user().insert_user("qa").await?;

            let widget = WidgetRepository::new(&test.db)
                .create(
                    user.id,
                    WidgetInput {
                        name: "myWidget".to_string(),
                        sku: "111-111-11".to_string(),
                        cost: Decimal::new(1250, 2),
                    },
                )
                .await?;

            assert_eq!(widget.cost, Decimal::new(1250, 2));
            assert_eq!(widget.link, Some(format!("/simple/widgets/{}/", widget.id)));

            Ok(())
        }

        /// Expect Error when the SKU is already used, even by another user
        #[tokio::test]
        async fn fails_for_duplicate_sku() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_simple_tables().build().await?;
            let owner = test.user().insert_user("owner").await?;
            let other = test.user().insert_user("other").await?;
            test.simple()
                .insert_widget(owner.id, "first", "111-111-11", Decimal::ZERO)
                .await?;

            let result = WidgetRepository::new(&test.db)
                .create(
                    other.id,
                    WidgetInput {
                        name: "second".to_string(),
                        sku: "111-111-11".to_string(),
                        cost: Decimal::ZERO,
                    },
                )
                .await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod soft_delete {
        use popular_test_utils::prelude::*;
        use rust_decimal::Decimal;

        use crate::server::{data::simple::widget::WidgetRepository, util::pagination::Pagination};

        /// Expect deleted widgets to drop out of pages
        #[tokio::test]
        async fn deleted_widget_leaves_page() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_simple_tables().build().await?;
            let user = test.user().insert_user("qa").await?;
            let kept = test
                .simple()
                .insert_widget(user.id, "kept", "111-111-11", Decimal::ONE)
                .await?;
            let dropped = test
                .simple()
                .insert_widget(user.id, "dropped", "222-222-22", Decimal::ONE)
                .await?;
            let repo = WidgetRepository::new(&test.db);

            repo.soft_delete(user.id, dropped.id).await?;
            let page = repo.get_page(user.id, Pagination::new(0, 10)).await?;

            assert_eq!(page.len(), 1);
            assert_eq!(page[0].id, kept.id);

            Ok(())
        }
    }

    mod sum_cost {
        use popular_test_utils::prelude::*;
        use rust_decimal::Decimal;

        use crate::server::{data::simple::widget::WidgetRepository, util::pagination::Pagination};

        /// Expect only the active widgets of the requested page to be summed
        #[tokio::test]
        async fn sums_page_slice() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_simple_tables().build().await?;
            let user = test.user().insert_user("qa").await?;
            let dropped = test
                .simple()
                .insert_widget(user.id, "dropped", "111-111-10", Decimal::new(9900, 2))
                .await?;
            for (i, cents) in [150, 225, 1000].into_iter().enumerate() {
                let sku = format!("111-111-1{}", i + 1);
                test.simple()
                    .insert_widget(user.id, &format!("w{}", i), &sku, Decimal::new(cents, 2))
                    .await?;
            }
            let repo = WidgetRepository::new(&test.db);
            repo.soft_delete(user.id, dropped.id).await?;

            assert_eq!(
                repo.sum_cost(user.id, Pagination::new(0, 2)).await?,
                Decimal::new(375, 2)
            );
            assert_eq!(
                repo.sum_cost(user.id, Pagination::new(1, 2)).await?,
                Decimal::new(10, 0)
            );
            assert!(repo.sum_cost(user.id, Pagination::new(5, 2)).await?.is_zero());
            assert!(repo
                .sum_cost(user.id, Pagination::new(u64::MAX, 2))
                .await?
                .is_zero());

            Ok(())
        }
    }
}

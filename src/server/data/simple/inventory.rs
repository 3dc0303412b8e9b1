use sea_orm::{
    sea_query::{Expr, ExprTrait},
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, QueryTrait, Select,
};

use crate::server::{
    form::simple::InventoryInput,
    model::kind::EntityKind,
    util::{links::EntityLinks, pagination::Pagination},
};

pub struct InventoryRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> InventoryRepository<'a, C> {
    /// Creates a new instance of [`InventoryRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts an inventory owned by `user_id` and stores the links derived from its id.
    ///
    /// The caller is responsible for checking that the store and widget are the user's own.
    pub async fn create(
        &self,
        user_id: i32,
        input: InventoryInput,
    ) -> Result<entity::simple_inventory::Model, DbErr> {
        let inventory = entity::simple_inventory::ActiveModel {
            created_by: ActiveValue::Set(user_id),
            store_id: ActiveValue::Set(input.store_id),
            widget_id: ActiveValue::Set(input.widget_id),
            quantity: ActiveValue::Set(input.quantity),
            deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let links = EntityLinks::new(EntityKind::Inventory, inventory.id);
        let mut inventory_am = inventory.into_active_model();
        inventory_am.link = ActiveValue::Set(Some(links.link));
        inventory_am.ulink = ActiveValue::Set(Some(links.ulink));
        inventory_am.dlink = ActiveValue::Set(Some(links.dlink));

        inventory_am.update(self.db).await
    }

    pub async fn get_active(
        &self,
        user_id: i32,
        inventory_id: i32,
    ) -> Result<Option<entity::simple_inventory::Model>, DbErr> {
        active(user_id)
            .filter(entity::simple_inventory::Column::Id.eq(inventory_id))
            .one(self.db)
            .await
    }

    pub async fn get_page(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<entity::simple_inventory::Model>, DbErr> {
        let Some(offset) = pagination.offset() else {
            return Ok(Vec::new());
        };

        active(user_id)
            .order_by_asc(entity::simple_inventory::Column::Id)
            .offset(offset)
            .limit(pagination.limit())
            .all(self.db)
            .await
    }

    /// Total `quantity` of the inventories on one page.
    pub async fn sum_quantity(&self, user_id: i32, pagination: Pagination) -> Result<i64, DbErr> {
        let Some(offset) = pagination.offset() else {
            return Ok(0);
        };

        let page_ids = active(user_id)
            .select_only()
            .column(entity::simple_inventory::Column::Id)
            .order_by_asc(entity::simple_inventory::Column::Id)
            .offset(offset)
            .limit(pagination.limit())
            .into_query();

        let sum = entity::prelude::SimpleInventory::find()
            .select_only()
            .column_as(Expr::col(entity::simple_inventory::Column::Quantity).sum(), "total")
            .filter(entity::simple_inventory::Column::Id.in_subquery(page_ids))
            .into_tuple::<Option<i64>>()
            .one(self.db)
            .await?;

        Ok(sum.flatten().unwrap_or(0))
    }

    pub async fn count_active(&self, user_id: i32) -> Result<u64, DbErr> {
        active(user_id).count(self.db).await
    }

    pub async fn update(
        &self,
        user_id: i32,
        inventory_id: i32,
        input: InventoryInput,
    ) -> Result<Option<entity::simple_inventory::Model>, DbErr> {
        let Some(inventory) = self.get_active(user_id, inventory_id).await? else {
            return Ok(None);
        };

        let mut inventory_am = inventory.into_active_model();
        inventory_am.store_id = ActiveValue::Set(input.store_id);
        inventory_am.widget_id = ActiveValue::Set(input.widget_id);
        inventory_am.quantity = ActiveValue::Set(input.quantity);

        Ok(Some(inventory_am.update(self.db).await?))
    }

    pub async fn soft_delete(
        &self,
        user_id: i32,
        inventory_id: i32,
    ) -> Result<Option<entity::simple_inventory::Model>, DbErr> {
        let Some(inventory) = self.get_active(user_id, inventory_id).await? else {
            return Ok(None);
        };

        let mut inventory_am = inventory.into_active_model();
        inventory_am.deleted = ActiveValue::Set(true);

        Ok(Some(inventory_am.update(self.db).await?))
    }
}

fn active(user_id: i32) -> Select<entity::simple_inventory::Entity> {
    entity::prelude::SimpleInventory::find()
        .filter(entity::simple_inventory::Column::CreatedBy.eq(user_id))
        .filter(entity::simple_inventory::Column::Deleted.eq(false))
}

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::PageDto,
        simple::{WidgetAggrDto, WidgetDto},
    },
    server::{
        data::simple::widget::WidgetRepository,
        error::Error,
        form::simple::WidgetInput,
        model::kind::EntityKind,
        service::{not_found, nothing_to_list, page_dto, write_error},
        util::pagination::Pagination,
    },
};

const KIND: EntityKind = EntityKind::Widget;
const UNIQUE_FIELDS: [&str; 2] = ["name", "sku"];

impl From<entity::simple_widget::Model> for WidgetDto {
    fn from(widget: entity::simple_widget::Model) -> Self {
        Self {
            id: widget.id,
            name: widget.name,
            sku: widget.sku,
            cost: widget.cost,
            link: widget.link,
            ulink: widget.ulink,
            dlink: widget.dlink,
        }
    }
}

pub struct WidgetService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> WidgetService<'a> {
    /// Creates a new instance of [`WidgetService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a widget and its links in one transaction.
    ///
    /// # Returns
    /// - `Ok(WidgetDto)` - The new widget
    /// - `Err(Error::FormError)` - Name or SKU already taken
    /// - `Err(Error::DbErr)` - Any other database failure
    pub async fn create(&self, user_id: i32, input: WidgetInput) -> Result<WidgetDto, Error> {
        let txn = self.db.begin().await?;

        let widget = WidgetRepository::new(&txn)
            .create(user_id, input)
            .await
            .map_err(|e| write_error(e, &UNIQUE_FIELDS))?;

        txn.commit().await?;

        tracing::debug!(user_id = %user_id, widget_id = %widget.id, "Created widget");

        Ok(widget.into())
    }

    pub async fn get(&self, user_id: i32, widget_id: i32) -> Result<Option<WidgetDto>, Error> {
        let widget = WidgetRepository::new(self.db)
            .get_active(user_id, widget_id)
            .await?;

        Ok(widget.map(WidgetDto::from))
    }

    pub async fn get_model(
        &self,
        user_id: i32,
        widget_id: i32,
    ) -> Result<entity::simple_widget::Model, Error> {
        WidgetRepository::new(self.db)
            .get_active(user_id, widget_id)
            .await?
            .ok_or_else(|| not_found(KIND, widget_id))
    }

    pub async fn list(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<PageDto<WidgetDto>, Error> {
        let repo = WidgetRepository::new(self.db);

        if repo.count_active(user_id).await? == 0 {
            return Err(nothing_to_list(KIND));
        }

        let widgets = repo.get_page(user_id, pagination).await?;

        Ok(page_dto(
            KIND,
            pagination,
            widgets.into_iter().map(WidgetDto::from).collect(),
        ))
    }

    /// Sum of `cost` over one page of the user's active widgets, `0.00` for an empty page.
    pub async fn aggregate(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<WidgetAggrDto, Error> {
        let mut cost_sum = WidgetRepository::new(self.db)
            .sum_cost(user_id, pagination)
            .await?;
        cost_sum.rescale(2);

        Ok(WidgetAggrDto {
            title: format!("{}: Total Widget Cost", KIND.app().title()),
            page: pagination.page,
            cost_sum,
        })
    }

    pub async fn update(
        &self,
        user_id: i32,
        widget_id: i32,
        input: WidgetInput,
    ) -> Result<WidgetDto, Error> {
        let widget = WidgetRepository::new(self.db)
            .update(user_id, widget_id, input)
            .await
            .map_err(|e| write_error(e, &UNIQUE_FIELDS))?
            .ok_or_else(|| not_found(KIND, widget_id))?;

        Ok(widget.into())
    }

    pub async fn delete(&self, user_id: i32, widget_id: i32) -> Result<WidgetDto, Error> {
        let widget = WidgetRepository::new(self.db)
            .soft_delete(user_id, widget_id)
            .await?
            .ok_or_else(|| not_found(KIND, widget_id))?;

        tracing::debug!(user_id = %user_id, widget_id = %widget.id, "Deleted widget");

        Ok(widget.into())
    }
}

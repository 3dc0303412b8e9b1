use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{
        api::PageDto,
        simple::{InventoryAggrDto, InventoryDto},
    },
    server::{
        data::simple::{
            inventory::InventoryRepository, store::StoreRepository, widget::WidgetRepository,
        },
        error::{form::FormErrors, Error},
        form::{simple::InventoryInput, INVALID_REFERENCE},
        model::kind::EntityKind,
        service::{not_found, nothing_to_list, page_dto},
        util::pagination::Pagination,
    },
};

const KIND: EntityKind = EntityKind::Inventory;

impl From<entity::simple_inventory::Model> for InventoryDto {
    fn from(inventory: entity::simple_inventory::Model) -> Self {
        Self {
            id: inventory.id,
            store_id: inventory.store_id,
            widget_id: inventory.widget_id,
            quantity: inventory.quantity,
            link: inventory.link,
            ulink: inventory.ulink,
            dlink: inventory.dlink,
        }
    }
}

/// Rejects a store or widget that isn't one of the user's active records.
async fn check_references<C: ConnectionTrait>(
    db: &C,
    user_id: i32,
    input: &InventoryInput,
) -> Result<(), Error> {
    let mut errors = FormErrors::new();

    if StoreRepository::new(db)
        .get_active(user_id, input.store_id)
        .await?
        .is_none()
    {
        errors.add("store", INVALID_REFERENCE);
    }
    if WidgetRepository::new(db)
        .get_active(user_id, input.widget_id)
        .await?
        .is_none()
    {
        errors.add("widget", INVALID_REFERENCE);
    }

    Ok(errors.into_result()?)
}

pub struct InventoryService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> InventoryService<'a> {
    /// Creates a new instance of [`InventoryService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates an inventory for one of the user's stores and widgets.
    ///
    /// # Returns
    /// - `Ok(InventoryDto)` - The new inventory
    /// - `Err(Error::FormError)` - Store or widget is missing, deleted or someone else's
    /// - `Err(Error::DbErr)` - Database failure
    pub async fn create(
        &self,
        user_id: i32,
        input: InventoryInput,
    ) -> Result<InventoryDto, Error> {
        let txn = self.db.begin().await?;

        check_references(&txn, user_id, &input).await?;
        let inventory = InventoryRepository::new(&txn).create(user_id, input).await?;

        txn.commit().await?;

        tracing::debug!(user_id = %user_id, inventory_id = %inventory.id, "Created inventory");

        Ok(inventory.into())
    }

    pub async fn get(
        &self,
        user_id: i32,
        inventory_id: i32,
    ) -> Result<Option<InventoryDto>, Error> {
        let inventory = InventoryRepository::new(self.db)
            .get_active(user_id, inventory_id)
            .await?;

        Ok(inventory.map(InventoryDto::from))
    }

    pub async fn get_model(
        &self,
        user_id: i32,
        inventory_id: i32,
    ) -> Result<entity::simple_inventory::Model, Error> {
        InventoryRepository::new(self.db)
            .get_active(user_id, inventory_id)
            .await?
            .ok_or_else(|| not_found(KIND, inventory_id))
    }

    pub async fn list(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<PageDto<InventoryDto>, Error> {
        let repo = InventoryRepository::new(self.db);

        if repo.count_active(user_id).await? == 0 {
            return Err(nothing_to_list(KIND));
        }

        let inventories = repo.get_page(user_id, pagination).await?;

        Ok(page_dto(
            KIND,
            pagination,
            inventories.into_iter().map(InventoryDto::from).collect(),
        ))
    }

    /// Sum of `quantity` over one page of the user's active inventories.
    pub async fn aggregate(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<InventoryAggrDto, Error> {
        let quantity_sum = InventoryRepository::new(self.db)
            .sum_quantity(user_id, pagination)
            .await?;

        Ok(InventoryAggrDto {
            title: format!("{}: Total Inventory Quantities", KIND.app().title()),
            page: pagination.page,
            quantity_sum,
        })
    }

    pub async fn update(
        &self,
        user_id: i32,
        inventory_id: i32,
        input: InventoryInput,
    ) -> Result<InventoryDto, Error> {
        let txn = self.db.begin().await?;

        let repo = InventoryRepository::new(&txn);
        if repo.get_active(user_id, inventory_id).await?.is_none() {
            return Err(not_found(KIND, inventory_id));
        }

        check_references(&txn, user_id, &input).await?;
        let inventory = repo
            .update(user_id, inventory_id, input)
            .await?
            .ok_or_else(|| not_found(KIND, inventory_id))?;

        txn.commit().await?;

        Ok(inventory.into())
    }

    pub async fn delete(&self, user_id: i32, inventory_id: i32) -> Result<InventoryDto, Error> {
        let inventory = InventoryRepository::new(self.db)
            .soft_delete(user_id, inventory_id)
            .await?
            .ok_or_else(|| not_found(KIND, inventory_id))?;

        tracing::debug!(user_id = %user_id, inventory_id = %inventory.id, "Deleted inventory");

        Ok(inventory.into())
    }
}

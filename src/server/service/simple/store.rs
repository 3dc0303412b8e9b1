use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{api::PageDto, simple::StoreDto},
    server::{
        data::simple::store::StoreRepository,
        error::Error,
        form::simple::StoreInput,
        model::kind::EntityKind,
        service::{not_found, nothing_to_list, page_dto, write_error},
        util::pagination::Pagination,
    },
};

const KIND: EntityKind = EntityKind::Store;
const UNIQUE_FIELDS: [&str; 2] = ["name", "location"];

impl From<entity::simple_store::Model> for StoreDto {
    fn from(store: entity::simple_store::Model) -> Self {
        Self {
            id: store.id,
            name: store.name,
            location: store.location,
            link: store.link,
            ulink: store.ulink,
            dlink: store.dlink,
        }
    }
}

pub struct StoreService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> StoreService<'a> {
    /// Creates a new instance of [`StoreService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a store and its links in one transaction.
    ///
    /// # Returns
    /// - `Ok(StoreDto)` - The new store
    /// - `Err(Error::FormError)` - Name or location already taken
    /// - `Err(Error::DbErr)` - Any other database failure
    pub async fn create(&self, user_id: i32, input: StoreInput) -> Result<StoreDto, Error> {
        let txn = self.db.begin().await?;

        let store = StoreRepository::new(&txn)
            .create(user_id, input)
            .await
            .map_err(|e| write_error(e, &UNIQUE_FIELDS))?;

        txn.commit().await?;

        tracing::debug!(user_id = %user_id, store_id = %store.id, "Created store");

        Ok(store.into())
    }

    pub async fn get(&self, user_id: i32, store_id: i32) -> Result<Option<StoreDto>, Error> {
        let store = StoreRepository::new(self.db)
            .get_active(user_id, store_id)
            .await?;

        Ok(store.map(StoreDto::from))
    }

    /// Raw row for prefilling the update and delete forms
    pub async fn get_model(
        &self,
        user_id: i32,
        store_id: i32,
    ) -> Result<entity::simple_store::Model, Error> {
        StoreRepository::new(self.db)
            .get_active(user_id, store_id)
            .await?
            .ok_or_else(|| not_found(KIND, store_id))
    }

    /// One page of the user's stores
    ///
    /// # Returns
    /// - `Err(Error::NotFound)` - The user has no active stores at all
    pub async fn list(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<PageDto<StoreDto>, Error> {
        let repo = StoreRepository::new(self.db);

        if repo.count_active(user_id).await? == 0 {
            return Err(nothing_to_list(KIND));
        }

        let stores = repo.get_page(user_id, pagination).await?;

        Ok(page_dto(
            KIND,
            pagination,
            stores.into_iter().map(StoreDto::from).collect(),
        ))
    }

    pub async fn update(
        &self,
        user_id: i32,
        store_id: i32,
        input: StoreInput,
    ) -> Result<StoreDto, Error> {
        let store = StoreRepository::new(self.db)
            .update(user_id, store_id, input)
            .await
            .map_err(|e| write_error(e, &UNIQUE_FIELDS))?
            .ok_or_else(|| not_found(KIND, store_id))?;

        Ok(store.into())
    }

    pub async fn delete(&self, user_id: i32, store_id: i32) -> Result<StoreDto, Error> {
        let store = StoreRepository::new(self.db)
            .soft_delete(user_id, store_id)
            .await?
            .ok_or_else(|| not_found(KIND, store_id))?;

        tracing::debug!(user_id = %user_id, store_id = %store.id, "Deleted store");

        Ok(store.into())
    }
}

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    form::simple::StoreInput,
    model::kind::EntityKind,
    util::{links::EntityLinks, pagination::Pagination},
};

pub struct StoreRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> StoreRepository<'a, C> {
    /// Creates a new instance of [`StoreRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a store owned by `user_id` and stores the links derived from its id.
    ///
    /// Run inside a transaction so the row is never visible without links.
    pub async fn create(
        &self,
        user_id: i32,
        input: StoreInput,
    ) -> Result<entity::simple_store::Model, DbErr> {
        let store = entity::simple_store::ActiveModel {
            created_by: ActiveValue::Set(user_id),
            name: ActiveValue::Set(input.name),
            location: ActiveValue::Set(input.location),
            deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let links = EntityLinks::new(EntityKind::Store, store.id);
        let mut store_am = store.into_active_model();
        store_am.link = ActiveValue::Set(Some(links.link));
        store_am.ulink = ActiveValue::Set(Some(links.ulink));
        store_am.dlink = ActiveValue::Set(Some(links.dlink));

        store_am.update(self.db).await
    }

    /// Gets a store owned by `user_id` that hasn't been deleted
    pub async fn get_active(
        &self,
        user_id: i32,
        store_id: i32,
    ) -> Result<Option<entity::simple_store::Model>, DbErr> {
        active(user_id)
            .filter(entity::simple_store::Column::Id.eq(store_id))
            .one(self.db)
            .await
    }

    /// One page of the user's active stores in insertion order
    pub async fn get_page(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<entity::simple_store::Model>, DbErr> {
        let Some(offset) = pagination.offset() else {
            return Ok(Vec::new());
        };

        active(user_id)
            .order_by_asc(entity::simple_store::Column::Id)
            .offset(offset)
            .limit(pagination.limit())
            .all(self.db)
            .await
    }

    pub async fn count_active(&self, user_id: i32) -> Result<u64, DbErr> {
        active(user_id).count(self.db).await
    }

    /// Returns `Ok(None)` when the store doesn't exist, belongs to another user or was
    /// deleted.
    pub async fn update(
        &self,
        user_id: i32,
        store_id: i32,
        input: StoreInput,
    ) -> Result<Option<entity::simple_store::Model>, DbErr> {
        let Some(store) = self.get_active(user_id, store_id).await? else {
            return Ok(None);
        };

        let mut store_am = store.into_active_model();
        store_am.name = ActiveValue::Set(input.name);
        store_am.location = ActiveValue::Set(input.location);

        Ok(Some(store_am.update(self.db).await?))
    }

    /// Flags the store as deleted; the row is kept.
    pub async fn soft_delete(
        &self,
        user_id: i32,
        store_id: i32,
    ) -> Result<Option<entity::simple_store::Model>, DbErr> {
        let Some(store) = self.get_active(user_id, store_id).await? else {
            return Ok(None);
        };

        let mut store_am = store.into_active_model();
        store_am.deleted = ActiveValue::Set(true);

        Ok(Some(store_am.update(self.db).await?))
    }
}

fn active(user_id: i32) -> Select<entity::simple_store::Entity> {
    entity::prelude::SimpleStore::find()
        .filter(entity::simple_store::Column::CreatedBy.eq(user_id))
        .filter(entity::simple_store::Column::Deleted.eq(false))
}

use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    form::complex::DeviceInput,
    model::kind::EntityKind,
    util::{links::EntityLinks, pagination::Pagination},
};

pub struct DeviceRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DeviceRepository<'a, C> {
    /// Creates a new instance of [`DeviceRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        input: DeviceInput,
    ) -> Result<entity::complex_device::Model, DbErr> {
        let device = entity::complex_device::ActiveModel {
            created_by: ActiveValue::Set(user_id),
            name: ActiveValue::Set(input.name),
            sku: ActiveValue::Set(input.sku),
            night_vision: ActiveValue::Set(input.night_vision),
            weather: ActiveValue::Set(input.weather),
            deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let links = EntityLinks::new(EntityKind::Device, device.id);
        let mut device_am = device.into_active_model();
        device_am.link = ActiveValue::Set(Some(links.link));
        device_am.ulink = ActiveValue::Set(Some(links.ulink));
        device_am.dlink = ActiveValue::Set(Some(links.dlink));

        device_am.update(self.db).await
    }

    pub async fn get_active(
        &self,
        user_id: i32,
        device_id: i32,
    ) -> Result<Option<entity::complex_device::Model>, DbErr> {
        active(user_id)
            .filter(entity::complex_device::Column::Id.eq(device_id))
            .one(self.db)
            .await
    }

    pub async fn get_page(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<entity::complex_device::Model>, DbErr> {
        let Some(offset) = pagination.offset() else {
            return Ok(Vec::new());
        };

        active(user_id)
            .order_by_asc(entity::complex_device::Column::Id)
            .offset(offset)
            .limit(pagination.limit())
            .all(self.db)
            .await
    }

    pub async fn count_active(&self, user_id: i32) -> Result<u64, DbErr> {
        active(user_id).count(self.db).await
    }

    pub async fn update(
        &self,
        user_id: i32,
        device_id: i32,
        input: DeviceInput,
    ) -> Result<Option<entity::complex_device::Model>, DbErr> {
        let Some(device) = self.get_active(user_id, device_id).await? else {
            return Ok(None);
        };

        let mut device_am = device.into_active_model();
        device_am.name = ActiveValue::Set(input.name);
        device_am.sku = ActiveValue::Set(input.sku);
        device_am.night_vision = ActiveValue::Set(input.night_vision);
        device_am.weather = ActiveValue::Set(input.weather);

        Ok(Some(device_am.update(self.db).await?))
    }

    pub async fn soft_delete(
        &self,
        user_id: i32,
        device_id: i32,
    ) -> Result<Option<entity::complex_device::Model>, DbErr> {
        let Some(device) = self.get_active(user_id, device_id).await? else {
            return Ok(None);
        };

        let mut device_am = device.into_active_model();
        device_am.deleted = ActiveValue::Set(true);

        Ok(Some(device_am.update(self.db).await?))
    }
}

fn active(user_id: i32) -> Select<entity::complex_device::Entity> {
    entity::prelude::ComplexDevice::find()
        .filter(entity::complex_device::Column::CreatedBy.eq(user_id))
        .filter(entity::complex_device::Column::Deleted.eq(false))
}

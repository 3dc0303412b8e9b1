use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{api::PageDto, complex::DeviceDto},
    server::{
        data::complex::device::DeviceRepository,
        error::Error,
        form::complex::DeviceInput,
        model::kind::EntityKind,
        service::{not_found, nothing_to_list, page_dto, write_error},
        util::pagination::Pagination,
    },
};

const KIND: EntityKind = EntityKind::Device;
const UNIQUE_FIELDS: [&str; 2] = ["name", "sku"];

impl From<entity::complex_device::Model> for DeviceDto {
    fn from(device: entity::complex_device::Model) -> Self {
        Self {
            id: device.id,
            name: device.name,
            sku: device.sku,
            night_vision: device.night_vision,
            weather: device.weather,
            link: device.link,
            ulink: device.ulink,
            dlink: device.dlink,
        }
    }
}

pub struct DeviceService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> DeviceService<'a> {
    /// Creates a new instance of [`DeviceService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    pub async fn create(&self, user_id: i32, input: DeviceInput) -> Result<DeviceDto, Error> {
        let txn = self.db.begin().await?;

        let device = DeviceRepository::new(&txn)
            .create(user_id, input)
            .await
            .map_err(|e| write_error(e, &UNIQUE_FIELDS))?;

        txn.commit().await?;

        tracing::debug!(user_id = %user_id, device_id = %device.id, "Created device");

        Ok(device.into())
    }

    pub async fn get(&self, user_id: i32, device_id: i32) -> Result<Option<DeviceDto>, Error> {
        let device = DeviceRepository::new(self.db)
            .get_active(user_id, device_id)
            .await?;

        Ok(device.map(DeviceDto::from))
    }

    pub async fn get_model(
        &self,
        user_id: i32,
        device_id: i32,
    ) -> Result<entity::complex_device::Model, Error> {
        DeviceRepository::new(self.db)
            .get_active(user_id, device_id)
            .await?
            .ok_or_else(|| not_found(KIND, device_id))
    }

    pub async fn list(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<PageDto<DeviceDto>, Error> {
        let repo = DeviceRepository::new(self.db);

        if repo.count_active(user_id).await? == 0 {
            return Err(nothing_to_list(KIND));
        }

        let devices = repo.get_page(user_id, pagination).await?;

        Ok(page_dto(
            KIND,
            pagination,
            devices.into_iter().map(DeviceDto::from).collect(),
        ))
    }

    pub async fn update(
        &self,
        user_id: i32,
        device_id: i32,
        input: DeviceInput,
    ) -> Result<DeviceDto, Error> {
        let device = DeviceRepository::new(self.db)
            .update(user_id, device_id, input)
            .await
            .map_err(|e| write_error(e, &UNIQUE_FIELDS))?
            .ok_or_else(|| not_found(KIND, device_id))?;

        Ok(device.into())
    }

    pub async fn delete(&self, user_id: i32, device_id: i32) -> Result<DeviceDto, Error> {
        let device = DeviceRepository::new(self.db)
            .soft_delete(user_id, device_id)
            .await?
            .ok_or_else(|| not_found(KIND, device_id))?;

        tracing::debug!(user_id = %user_id, device_id = %device.id, "Deleted device");

        Ok(device.into())
    }
}

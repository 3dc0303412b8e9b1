use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::{
    model::{api::PageDto, complex::SensorDto},
    server::{
        data::complex::sensor::SensorRepository,
        error::Error,
        form::complex::{NewSensor, SensorInput},
        model::kind::EntityKind,
        service::{complex::choice, not_found, nothing_to_list, page_dto, write_error},
        util::pagination::Pagination,
    },
};

const KIND: EntityKind = EntityKind::Sensor;
const UNIQUE_FIELDS: [&str; 1] = ["serial_no"];

impl From<entity::complex_sensor::Model> for SensorDto {
    fn from(sensor: entity::complex_sensor::Model) -> Self {
        Self {
            id: sensor.id,
            name: sensor.name,
            sku: sensor.sku,
            serial_no: sensor.serial_no,
            temp_units: choice(sensor.temp_units),
            pressure_units: choice(sensor.pressure_units),
            alt_units: choice(sensor.alt_units),
            ws_units: choice(sensor.ws_units),
            installed: sensor.installed,
            climate: sensor.climate,
            camera: sensor.camera,
            link: sensor.link,
            ulink: sensor.ulink,
            dlink: sensor.dlink,
        }
    }
}

pub struct SensorService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SensorService<'a> {
    /// Creates a new instance of [`SensorService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Creates a sensor and its links in one transaction.
    ///
    /// # Returns
    /// - `Ok(SensorDto)` - The new sensor
    /// - `Err(Error::FormError)` - Serial number already registered
    /// - `Err(Error::DbErr)` - Any other database failure
    pub async fn create(&self, user_id: i32, new: NewSensor) -> Result<SensorDto, Error> {
        let txn = self.db.begin().await?;

        let sensor = SensorRepository::new(&txn)
            .create(user_id, new)
            .await
            .map_err(|e| write_error(e, &UNIQUE_FIELDS))?;

        txn.commit().await?;

        tracing::debug!(user_id = %user_id, sensor_id = %sensor.id, "Created sensor");

        Ok(sensor.into())
    }

    pub async fn get(&self, user_id: i32, sensor_id: i32) -> Result<Option<SensorDto>, Error> {
        let sensor = SensorRepository::new(self.db)
            .get_active(user_id, sensor_id)
            .await?;

        Ok(sensor.map(SensorDto::from))
    }

    pub async fn get_model(
        &self,
        user_id: i32,
        sensor_id: i32,
    ) -> Result<entity::complex_sensor::Model, Error> {
        SensorRepository::new(self.db)
            .get_active(user_id, sensor_id)
            .await?
            .ok_or_else(|| not_found(KIND, sensor_id))
    }

    pub async fn list(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<PageDto<SensorDto>, Error> {
        let repo = SensorRepository::new(self.db);

        if repo.count_active(user_id).await? == 0 {
            return Err(nothing_to_list(KIND));
        }

        let sensors = repo.get_page(user_id, pagination).await?;

        Ok(page_dto(
            KIND,
            pagination,
            sensors.into_iter().map(SensorDto::from).collect(),
        ))
    }

    /// Updates a sensor; the serial number is kept as registered.
    pub async fn update(
        &self,
        user_id: i32,
        sensor_id: i32,
        input: SensorInput,
    ) -> Result<SensorDto, Error> {
        let sensor = SensorRepository::new(self.db)
            .update(user_id, sensor_id, input)
            .await?
            .ok_or_else(|| not_found(KIND, sensor_id))?;

        Ok(sensor.into())
    }

    pub async fn delete(&self, user_id: i32, sensor_id: i32) -> Result<SensorDto, Error> {
        let sensor = SensorRepository::new(self.db)
            .soft_delete(user_id, sensor_id)
            .await?
            .ok_or_else(|| not_found(KIND, sensor_id))?;

        tracing::debug!(user_id = %user_id, sensor_id = %sensor.id, "Deleted sensor");

        Ok(sensor.into())
    }
}

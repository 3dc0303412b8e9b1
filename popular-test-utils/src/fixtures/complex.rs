use chrono::Utc;
use entity::sea_orm_active_enums::{
    AltUnits, CameraStatus, Location, PressureUnits, Status, TempUnits, WsUnits,
};
use rust_decimal::Decimal;
use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, TestContext};

impl TestContext {
    pub fn complex<'a>(&'a mut self) -> ComplexFixtures<'a> {
        ComplexFixtures { setup: self }
    }
}

pub struct ComplexFixtures<'a> {
    setup: &'a mut TestContext,
}

impl<'a> ComplexFixtures<'a> {
    /// Insert a sensor using the column defaults for every unit choice.
    pub async fn insert_sensor(
        &self,
        user_id: i32,
        serial_no: &str,
    ) -> Result<entity::complex_sensor::Model, TestError> {
        Ok(
            entity::prelude::ComplexSensor::insert(entity::complex_sensor::ActiveModel {
                created_by: ActiveValue::Set(user_id),
                name: ActiveValue::Set("mySensor".to_string()),
                sku: ActiveValue::Set("SKU-001".to_string()),
                serial_no: ActiveValue::Set(serial_no.to_string()),
                temp_units: ActiveValue::Set(TempUnits::Celsius),
                pressure_units: ActiveValue::Set(PressureUnits::Atm),
                alt_units: ActiveValue::Set(AltUnits::Kilometers),
                ws_units: ActiveValue::Set(WsUnits::KilometersPerHour),
                installed: ActiveValue::Set(Utc::now().date_naive()),
                climate: ActiveValue::Set(true),
                camera: ActiveValue::Set(false),
                deleted: ActiveValue::Set(false),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_event(
        &self,
        user_id: i32,
        sensor_id: i32,
    ) -> Result<entity::complex_event::Model, TestError> {
        Ok(
            entity::prelude::ComplexEvent::insert(entity::complex_event::ActiveModel {
                created_by: ActiveValue::Set(user_id),
                sensor_id: ActiveValue::Set(sensor_id),
                timestamp: ActiveValue::Set(Utc::now().naive_utc()),
                location: ActiveValue::Set(Location::Cockpit),
                status: ActiveValue::Set(Status::Online),
                camera: ActiveValue::Set(CameraStatus::NotApplicable),
                avg_temp: ActiveValue::Set(Decimal::new(2150, 2)),
                avg_pressure: ActiveValue::Set(Decimal::new(101, 2)),
                pct_humidity: ActiveValue::Set(40),
                altitude: ActiveValue::Set(10),
                windspeed: ActiveValue::Set(5),
                deleted: ActiveValue::Set(false),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_device(
        &self,
        user_id: i32,
        name: &str,
        sku: &str,
    ) -> Result<entity::complex_device::Model, TestError> {
        Ok(
            entity::prelude::ComplexDevice::insert(entity::complex_device::ActiveModel {
                created_by: ActiveValue::Set(user_id),
                name: ActiveValue::Set(name.to_string()),
                sku: ActiveValue::Set(sku.to_string()),
                night_vision: ActiveValue::Set(false),
                weather: ActiveValue::Set(true),
                deleted: ActiveValue::Set(false),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_meter(
        &self,
        user_id: i32,
        device_id: i32,
    ) -> Result<entity::complex_meter::Model, TestError> {
        Ok(
            entity::prelude::ComplexMeter::insert(entity::complex_meter::ActiveModel {
                created_by: ActiveValue::Set(user_id),
                device_id: ActiveValue::Set(device_id),
                location: ActiveValue::Set(Location::Cockpit),
                installed: ActiveValue::Set(Utc::now().date_naive()),
                deleted: ActiveValue::Set(false),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }
}

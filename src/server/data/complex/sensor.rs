use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    form::complex::{NewSensor, SensorInput},
    model::kind::EntityKind,
    util::{links::EntityLinks, pagination::Pagination},
};

pub struct SensorRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> SensorRepository<'a, C> {
    /// Creates a new instance of [`SensorRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a sensor installed today and stores the links derived from its id.
    pub async fn create(
        &self,
        user_id: i32,
        new: NewSensor,
    ) -> Result<entity::complex_sensor::Model, DbErr> {
        let NewSensor { serial_no, sensor } = new;

        let sensor = entity::complex_sensor::ActiveModel {
            created_by: ActiveValue::Set(user_id),
            name: ActiveValue::Set(sensor.name),
            sku: ActiveValue::Set(sensor.sku),
            serial_no: ActiveValue::Set(serial_no),
            temp_units: ActiveValue::Set(sensor.temp_units),
            pressure_units: ActiveValue::Set(sensor.pressure_units),
            alt_units: ActiveValue::Set(sensor.alt_units),
            ws_units: ActiveValue::Set(sensor.ws_units),
            installed: ActiveValue::Set(Utc::now().date_naive()),
            climate: ActiveValue::Set(sensor.climate),
            camera: ActiveValue::Set(sensor.camera),
            deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let links = EntityLinks::new(EntityKind::Sensor, sensor.id);
        let mut sensor_am = sensor.into_active_model();
        sensor_am.link = ActiveValue::Set(Some(links.link));
        sensor_am.ulink = ActiveValue::Set(Some(links.ulink));
        sensor_am.dlink = ActiveValue::Set(Some(links.dlink));

        sensor_am.update(self.db).await
    }

    pub async fn get_active(
        &self,
        user_id: i32,
        sensor_id: i32,
    ) -> Result<Option<entity::complex_sensor::Model>, DbErr> {
        active(user_id)
            .filter(entity::complex_sensor::Column::Id.eq(sensor_id))
            .one(self.db)
            .await
    }

    pub async fn get_page(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<entity::complex_sensor::Model>, DbErr> {
        let Some(offset) = pagination.offset() else {
            return Ok(Vec::new());
        };

        active(user_id)
            .order_by_asc(entity::complex_sensor::Column::Id)
            .offset(offset)
            .limit(pagination.limit())
            .all(self.db)
            .await
    }

    pub async fn count_active(&self, user_id: i32) -> Result<u64, DbErr> {
        active(user_id).count(self.db).await
    }

    /// Updates everything but the serial number and install date.
    pub async fn update(
        &self,
        user_id: i32,
        sensor_id: i32,
        input: SensorInput,
    ) -> Result<Option<entity::complex_sensor::Model>, DbErr> {
        let Some(sensor) = self.get_active(user_id, sensor_id).await? else {
            return Ok(None);
        };

        let mut sensor_am = sensor.into_active_model();
        sensor_am.name = ActiveValue::Set(input.name);
        sensor_am.sku = ActiveValue::Set(input.sku);
        sensor_am.temp_units = ActiveValue::Set(input.temp_units);
        sensor_am.pressure_units = ActiveValue::Set(input.pressure_units);
        sensor_am.alt_units = ActiveValue::Set(input.alt_units);
        sensor_am.ws_units = ActiveValue::Set(input.ws_units);
        sensor_am.climate = ActiveValue::Set(input.climate);
        sensor_am.camera = ActiveValue::Set(input.camera);

        Ok(Some(sensor_am.update(self.db).await?))
    }

    pub async fn soft_delete(
        &self,
        user_id: i32,
        sensor_id: i32,
    ) -> Result<Option<entity::complex_sensor::Model>, DbErr> {
        let Some(sensor) = self.get_active(user_id, sensor_id).await? else {
            return Ok(None);
        };

        let mut sensor_am = sensor.into_active_model();
        sensor_am.deleted = ActiveValue::Set(true);

        Ok(Some(sensor_am.update(self.db).await?))
    }
}

fn active(user_id: i32) -> Select<entity::complex_sensor::Entity> {
    entity::prelude::ComplexSensor::find()
        .filter(entity::complex_sensor::Column::CreatedBy.eq(user_id))
        .filter(entity::complex_sensor::Column::Deleted.eq(false))
}

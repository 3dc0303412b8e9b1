use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    form::complex::EventInput,
    model::kind::EntityKind,
    util::{links::EntityLinks, pagination::Pagination},
};

pub struct EventRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> EventRepository<'a, C> {
    /// Creates a new instance of [`EventRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    pub async fn create(
        &self,
        user_id: i32,
        input: EventInput,
    ) -> Result<entity::complex_event::Model, DbErr> {
        let event = entity::complex_event::ActiveModel {
            created_by: ActiveValue::Set(user_id),
            sensor_id: ActiveValue::Set(input.sensor_id),
            timestamp: ActiveValue::Set(input.timestamp),
            location: ActiveValue::Set(input.location),
            status: ActiveValue::Set(input.status),
            camera: ActiveValue::Set(input.camera),
            avg_temp: ActiveValue::Set(input.avg_temp),
            avg_pressure: ActiveValue::Set(input.avg_pressure),
            pct_humidity: ActiveValue::Set(input.pct_humidity),
            altitude: ActiveValue::Set(input.altitude),
            windspeed: ActiveValue::Set(input.windspeed),
            deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let links = EntityLinks::new(EntityKind::Event, event.id);
        let mut event_am = event.into_active_model();
        event_am.link = ActiveValue::Set(Some(links.link));
        event_am.ulink = ActiveValue::Set(Some(links.ulink));
        event_am.dlink = ActiveValue::Set(Some(links.dlink));

        event_am.update(self.db).await
    }

    pub async fn get_active(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<Option<entity::complex_event::Model>, DbErr> {
        active(user_id)
            .filter(entity::complex_event::Column::Id.eq(event_id))
            .one(self.db)
            .await
    }

    pub async fn get_page(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<entity::complex_event::Model>, DbErr> {
        let Some(offset) = pagination.offset() else {
            return Ok(Vec::new());
        };

        active(user_id)
            .order_by_asc(entity::complex_event::Column::Id)
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
        event_id: i32,
        input: EventInput,
    ) -> Result<Option<entity::complex_event::Model>, DbErr> {
        let Some(event) = self.get_active(user_id, event_id).await? else {
            return Ok(None);
        };

        let mut event_am = event.into_active_model();
        event_am.sensor_id = ActiveValue::Set(input.sensor_id);
        event_am.timestamp = ActiveValue::Set(input.timestamp);
        event_am.location = ActiveValue::Set(input.location);
        event_am.status = ActiveValue::Set(input.status);
        event_am.camera = ActiveValue::Set(input.camera);
        event_am.avg_temp = ActiveValue::Set(input.avg_temp);
        event_am.avg_pressure = ActiveValue::Set(input.avg_pressure);
        event_am.pct_humidity = ActiveValue::Set(input.pct_humidity);
        event_am.altitude = ActiveValue::Set(input.altitude);
        event_am.windspeed = ActiveValue::Set(input.windspeed);

        Ok(Some(event_am.update(self.db).await?))
    }

    pub async fn soft_delete(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<Option<entity::complex_event::Model>, DbErr> {
        let Some(event) = self.get_active(user_id, event_id).await? else {
            return Ok(None);
        };

        let mut event_am = event.into_active_model();
        event_am.deleted = ActiveValue::Set(true);

        Ok(Some(event_am.update(self.db).await?))
    }
}

fn active(user_id: i32) -> Select<entity::complex_event::Entity> {
    entity::prelude::ComplexEvent::find()
        .filter(entity::complex_event::Column::CreatedBy.eq(user_id))
        .filter(entity::complex_event::Column::Deleted.eq(false))
}

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{api::PageDto, complex::EventDto},
    server::{
        data::complex::{event::EventRepository, sensor::SensorRepository},
        error::{form::FormErrors, Error},
        form::{complex::EventInput, INVALID_REFERENCE},
        model::kind::EntityKind,
        service::{complex::choice, not_found, nothing_to_list, page_dto},
        util::pagination::Pagination,
    },
};

const KIND: EntityKind = EntityKind::Event;

impl From<entity::complex_event::Model> for EventDto {
    fn from(event: entity::complex_event::Model) -> Self {
        Self {
            id: event.id,
            sensor_id: event.sensor_id,
            timestamp: event.timestamp,
            location: choice(event.location),
            status: choice(event.status),
            camera: choice(event.camera),
            avg_temp: event.avg_temp,
            avg_pressure: event.avg_pressure,
            pct_humidity: event.pct_humidity,
            altitude: event.altitude,
            windspeed: event.windspeed,
            link: event.link,
            ulink: event.ulink,
            dlink: event.dlink,
        }
    }
}

async fn check_sensor<C: ConnectionTrait>(db: &C, user_id: i32, sensor_id: i32) -> Result<(), Error> {
    if SensorRepository::new(db)
        .get_active(user_id, sensor_id)
        .await?
        .is_none()
    {
        let mut errors = FormErrors::new();
        errors.add("sensor", INVALID_REFERENCE);
        return Err(errors.into());
    }

    Ok(())
}

pub struct EventService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EventService<'a> {
    /// Creates a new instance of [`EventService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Records an event against one of the user's sensors.
    ///
    /// # Returns
    /// - `Ok(EventDto)` - The new event
    /// - `Err(Error::FormError)` - Sensor is missing, deleted or someone else's
    /// - `Err(Error::DbErr)` - Database failure
    pub async fn create(&self, user_id: i32, input: EventInput) -> Result<EventDto, Error> {
        let txn = self.db.begin().await?;

        check_sensor(&txn, user_id, input.sensor_id).await?;
        let event = EventRepository::new(&txn).create(user_id, input).await?;

        txn.commit().await?;

        tracing::debug!(user_id = %user_id, event_id = %event.id, "Created event");

        Ok(event.into())
    }

    pub async fn get(&self, user_id: i32, event_id: i32) -> Result<Option<EventDto>, Error> {
        let event = EventRepository::new(self.db)
            .get_active(user_id, event_id)
            .await?;

        Ok(event.map(EventDto::from))
    }

    pub async fn get_model(
        &self,
        user_id: i32,
        event_id: i32,
    ) -> Result<entity::complex_event::Model, Error> {
        EventRepository::new(self.db)
            .get_active(user_id, event_id)
            .await?
            .ok_or_else(|| not_found(KIND, event_id))
    }

    pub async fn list(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<PageDto<EventDto>, Error> {
        let repo = EventRepository::new(self.db);

        if repo.count_active(user_id).await? == 0 {
            return Err(nothing_to_list(KIND));
        }

        let events = repo.get_page(user_id, pagination).await?;

        Ok(page_dto(
            KIND,
            pagination,
            events.into_iter().map(EventDto::from).collect(),
        ))
    }

    pub async fn update(
        &self,
        user_id: i32,
        event_id: i32,
        input: EventInput,
    ) -> Result<EventDto, Error> {
        let txn = self.db.begin().await?;

        let repo = EventRepository::new(&txn);
        if repo.get_active(user_id, event_id).await?.is_none() {
            return Err(not_found(KIND, event_id));
        }

        check_sensor(&txn, user_id, input.sensor_id).await?;
        let event = repo
            .update(user_id, event_id, input)
            .await?
            .ok_or_else(|| not_found(KIND, event_id))?;

        txn.commit().await?;

        Ok(event.into())
    }

    pub async fn delete(&self, user_id: i32, event_id: i32) -> Result<EventDto, Error> {
        let event = EventRepository::new(self.db)
            .soft_delete(user_id, event_id)
            .await?
            .ok_or_else(|| not_found(KIND, event_id))?;

        tracing::debug!(user_id = %user_id, event_id = %event.id, "Deleted event");

        Ok(event.into())
    }
}

use sea_orm::{ConnectionTrait, DatabaseConnection, TransactionTrait};

use crate::{
    model::{api::PageDto, complex::MeterDto},
    server::{
        data::complex::{device::DeviceRepository, meter::MeterRepository},
        error::{form::FormErrors, Error},
        form::{complex::MeterInput, INVALID_REFERENCE},
        model::kind::EntityKind,
        service::{complex::choice, not_found, nothing_to_list, page_dto},
        util::pagination::Pagination,
    },
};

const KIND: EntityKind = EntityKind::Meter;

impl From<entity::complex_meter::Model> for MeterDto {
    fn from(meter: entity::complex_meter::Model) -> Self {
        Self {
            id: meter.id,
            device_id: meter.device_id,
            location: choice(meter.location),
            installed: meter.installed,
            link: meter.link,
            ulink: meter.ulink,
            dlink: meter.dlink,
        }
    }
}

async fn check_device<C: ConnectionTrait>(db: &C, user_id: i32, device_id: i32) -> Result<(), Error> {
    if DeviceRepository::new(db)
        .get_active(user_id, device_id)
        .await?
        .is_none()
    {
        let mut errors = FormErrors::new();
        errors.add("device", INVALID_REFERENCE);
        return Err(errors.into());
    }

    Ok(())
}

pub struct MeterService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> MeterService<'a> {
    /// Creates a new instance of [`MeterService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Installs a meter today on one of the user's devices.
    pub async fn create(&self, user_id: i32, input: MeterInput) -> Result<MeterDto, Error> {
        let txn = self.db.begin().await?;

        check_device(&txn, user_id, input.device_id).await?;
        let meter = MeterRepository::new(&txn).create(user_id, input).await?;

        txn.commit().await?;

        tracing::debug!(user_id = %user_id, meter_id = %meter.id, "Created meter");

        Ok(meter.into())
    }

    pub async fn get(&self, user_id: i32, meter_id: i32) -> Result<Option<MeterDto>, Error> {
        let meter = MeterRepository::new(self.db)
            .get_active(user_id, meter_id)
            .await?;

        Ok(meter.map(MeterDto::from))
    }

    pub async fn get_model(
        &self,
        user_id: i32,
        meter_id: i32,
    ) -> Result<entity::complex_meter::Model, Error> {
        MeterRepository::new(self.db)
            .get_active(user_id, meter_id)
            .await?
            .ok_or_else(|| not_found(KIND, meter_id))
    }

    pub async fn list(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<PageDto<MeterDto>, Error> {
        let repo = MeterRepository::new(self.db);

        if repo.count_active(user_id).await? == 0 {
            return Err(nothing_to_list(KIND));
        }

        let meters = repo.get_page(user_id, pagination).await?;

        Ok(page_dto(
            KIND,
            pagination,
            meters.into_iter().map(MeterDto::from).collect(),
        ))
    }

    pub async fn update(
        &self,
        user_id: i32,
        meter_id: i32,
        input: MeterInput,
    ) -> Result<MeterDto, Error> {
        let txn = self.db.begin().await?;

        let repo = MeterRepository::new(&txn);
        if repo.get_active(user_id, meter_id).await?.is_none() {
            return Err(not_found(KIND, meter_id));
        }

        check_device(&txn, user_id, input.device_id).await?;
        let meter = repo
            .update(user_id, meter_id, input)
            .await?
            .ok_or_else(|| not_found(KIND, meter_id))?;

        txn.commit().await?;

        Ok(meter.into())
    }

    pub async fn delete(&self, user_id: i32, meter_id: i32) -> Result<MeterDto, Error> {
        let meter = MeterRepository::new(self.db)
            .soft_delete(user_id, meter_id)
            .await?
            .ok_or_else(|| not_found(KIND, meter_id))?;

        tracing::debug!(user_id = %user_id, meter_id = %meter.id, "Deleted meter");

        Ok(meter.into())
    }
}

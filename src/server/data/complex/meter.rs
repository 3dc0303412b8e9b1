use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, Select,
};

use crate::server::{
    form::complex::MeterInput,
    model::kind::EntityKind,
    util::{links::EntityLinks, pagination::Pagination},
};

pub struct MeterRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> MeterRepository<'a, C> {
    /// Creates a new instance of [`MeterRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a meter installed today and stores the links derived from its id.
    pub async fn create(
        &self,
        user_id: i32,
        input: MeterInput,
    ) -> Result<entity::complex_meter::Model, DbErr> {
        let meter = entity::complex_meter::ActiveModel {
            created_by: ActiveValue::Set(user_id),
            device_id: ActiveValue::Set(input.device_id),
            location: ActiveValue::Set(input.location),
            installed: ActiveValue::Set(Utc::now().date_naive()),
            deleted: ActiveValue::Set(false),
            ..Default::default()
        }
        .insert(self.db)
        .await?;

        let links = EntityLinks::new(EntityKind::Meter, meter.id);
        let mut meter_am = meter.into_active_model();
        meter_am.link = ActiveValue::Set(Some(links.link));
        meter_am.ulink = ActiveValue::Set(Some(links.ulink));
        meter_am.dlink = ActiveValue::Set(Some(links.dlink));

        meter_am.update(self.db).await
    }

    pub async fn get_active(
        &self,
        user_id: i32,
        meter_id: i32,
    ) -> Result<Option<entity::complex_meter::Model>, DbErr> {
        active(user_id)
            .filter(entity::complex_meter::Column::Id.eq(meter_id))
            .one(self.db)
            .await
    }

    pub async fn get_page(
        &self,
        user_id: i32,
        pagination: Pagination,
    ) -> Result<Vec<entity::complex_meter::Model>, DbErr> {
        let Some(offset) = pagination.offset() else {
            return Ok(Vec::new());
        };

        active(user_id)
            .order_by_asc(entity::complex_meter::Column::Id)
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
        meter_id: i32,
        input: MeterInput,
    ) -> Result<Option<entity::complex_meter::Model>, DbErr> {
        let Some(meter) = self.get_active(user_id, meter_id).await? else {
            return Ok(None);
        };

        let mut meter_am = meter.into_active_model();
        meter_am.device_id = ActiveValue::Set(input.device_id);
        meter_am.location = ActiveValue::Set(input.location);

        Ok(Some(meter_am.update(self.db).await?))
    }

    pub async fn soft_delete(
        &self,
        user_id: i32,
        meter_id: i32,
    ) -> Result<Option<entity::complex_meter::Model>, DbErr> {
        let Some(meter) = self.get_active(user_id, meter_id).await? else {
            return Ok(None);
        };

        let mut meter_am = meter.into_active_model();
        meter_am.deleted = ActiveValue::Set(true);

        Ok(Some(meter_am.update(self.db).await?))
    }
}

fn active(user_id: i32) -> Select<entity::complex_meter::Entity> {
    entity::prelude::ComplexMeter::find()
        .filter(entity::complex_meter::Column::CreatedBy.eq(user_id))
        .filter(entity::complex_meter::Column::Deleted.eq(false))
}

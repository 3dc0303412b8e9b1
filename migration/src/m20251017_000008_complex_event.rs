use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000001_auth_user::AuthUser, m20251017_000007_complex_sensor::ComplexSensor,
};

static IDX_EVENT_CREATED_BY: &str = "idx-complex_event-created_by";
static IDX_EVENT_SENSOR_ID: &str = "idx-complex_event-sensor_id";
static FK_EVENT_CREATED_BY: &str = "fk-complex_event-created_by";
static FK_EVENT_SENSOR_ID: &str = "fk-complex_event-sensor_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ComplexEvent::Table)
                    .if_not_exists()
                    .col(pk_auto(ComplexEvent::Id))
                    .col(integer(ComplexEvent::CreatedBy))
                    .col(integer(ComplexEvent::SensorId))
                    .col(date_time(ComplexEvent::Timestamp))
                    .col(small_integer(ComplexEvent::Location).default(1))
                    .col(small_integer(ComplexEvent::Status).default(100))
                    .col(small_integer(ComplexEvent::Camera).default(200))
                    .col(decimal_len(ComplexEvent::AvgTemp, 5, 2))
                    .col(decimal_len(ComplexEvent::AvgPressure, 5, 2))
                    .col(integer(ComplexEvent::PctHumidity))
                    .col(integer(ComplexEvent::Altitude))
                    .col(integer(ComplexEvent::Windspeed))
                    .col(boolean(ComplexEvent::Deleted).default(false))
                    .col(string_null(ComplexEvent::Link))
                    .col(string_null(ComplexEvent::Ulink))
                    .col(string_null(ComplexEvent::Dlink))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_CREATED_BY)
                            .from(ComplexEvent::Table, ComplexEvent::CreatedBy)
                            .to(AuthUser::Table, AuthUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_EVENT_SENSOR_ID)
                            .from(ComplexEvent::Table, ComplexEvent::SensorId)
                            .to(ComplexSensor::Table, ComplexSensor::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_CREATED_BY)
                    .table(ComplexEvent::Table)
                    .col(ComplexEvent::CreatedBy)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_EVENT_SENSOR_ID)
                    .table(ComplexEvent::Table)
                    .col(ComplexEvent::SensorId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_SENSOR_ID)
                    .table(ComplexEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_EVENT_CREATED_BY)
                    .table(ComplexEvent::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ComplexEvent::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ComplexEvent {
    Table,
    Id,
    CreatedBy,
    SensorId,
    Timestamp,
    Location,
    Status,
    Camera,
    AvgTemp,
    AvgPressure,
    PctHumidity,
    Altitude,
    Windspeed,
    Deleted,
    Link,
    Ulink,
    Dlink,
}

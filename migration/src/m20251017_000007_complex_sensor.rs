use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_auth_user::AuthUser;

static IDX_SENSOR_CREATED_BY: &str = "idx-complex_sensor-created_by";
static FK_SENSOR_CREATED_BY: &str = "fk-complex_sensor-created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ComplexSensor::Table)
                    .if_not_exists()
                    .col(pk_auto(ComplexSensor::Id))
                    .col(integer(ComplexSensor::CreatedBy))
                    .col(string_len(ComplexSensor::Name, 20))
                    .col(string_len(ComplexSensor::Sku, 20))
                    .col(string_len_uniq(ComplexSensor::SerialNo, 20))
                    .col(small_integer(ComplexSensor::TempUnits).default(1))
                    .col(small_integer(ComplexSensor::PressureUnits).default(3))
                    .col(small_integer(ComplexSensor::AltUnits).default(5))
                    .col(small_integer(ComplexSensor::WsUnits).default(7))
                    .col(date(ComplexSensor::Installed))
                    .col(boolean(ComplexSensor::Climate).default(true))
                    .col(boolean(ComplexSensor::Camera).default(false))
                    .col(boolean(ComplexSensor::Deleted).default(false))
                    .col(string_null(ComplexSensor::Link))
                    .col(string_null(ComplexSensor::Ulink))
                    .col(string_null(ComplexSensor::Dlink))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_SENSOR_CREATED_BY)
                            .from(ComplexSensor::Table, ComplexSensor::CreatedBy)
                            .to(AuthUser::Table, AuthUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_SENSOR_CREATED_BY)
                    .table(ComplexSensor::Table)
                    .col(ComplexSensor::CreatedBy)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_SENSOR_CREATED_BY)
                    .table(ComplexSensor::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ComplexSensor::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ComplexSensor {
    Table,
    Id,
    CreatedBy,
    Name,
    Sku,
    SerialNo,
    TempUnits,
    PressureUnits,
    AltUnits,
    WsUnits,
    Installed,
    Climate,
    Camera,
    Deleted,
    Link,
    Ulink,
    Dlink,
}

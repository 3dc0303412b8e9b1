use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000001_auth_user::AuthUser, m20251017_000009_complex_device::ComplexDevice,
};

static IDX_METER_CREATED_BY: &str = "idx-complex_meter-created_by";
static FK_METER_CREATED_BY: &str = "fk-complex_meter-created_by";
static FK_METER_DEVICE_ID: &str = "fk-complex_meter-device_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ComplexMeter::Table)
                    .if_not_exists()
                    .col(pk_auto(ComplexMeter::Id))
                    .col(integer(ComplexMeter::CreatedBy))
                    .col(integer(ComplexMeter::DeviceId))
                    .col(small_integer(ComplexMeter::Location).default(1))
                    .col(date(ComplexMeter::Installed))
                    .col(boolean(ComplexMeter::Deleted).default(false))
                    .col(string_null(ComplexMeter::Link))
                    .col(string_null(ComplexMeter::Ulink))
                    .col(string_null(ComplexMeter::Dlink))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_METER_CREATED_BY)
                            .from(ComplexMeter::Table, ComplexMeter::CreatedBy)
                            .to(AuthUser::Table, AuthUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_METER_DEVICE_ID)
                            .from(ComplexMeter::Table, ComplexMeter::DeviceId)
                            .to(ComplexDevice::Table, ComplexDevice::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_METER_CREATED_BY)
                    .table(ComplexMeter::Table)
                    .col(ComplexMeter::CreatedBy)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_METER_CREATED_BY)
                    .table(ComplexMeter::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ComplexMeter::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum ComplexMeter {
    Table,
    Id,
    CreatedBy,
    DeviceId,
    Location,
    Installed,
    Deleted,
    Link,
    Ulink,
    Dlink,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_auth_user::AuthUser;

static IDX_DEVICE_CREATED_BY: &str = "idx-complex_device-created_by";
static FK_DEVICE_CREATED_BY: &str = "fk-complex_device-created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(ComplexDevice::Table)
                    .if_not_exists()
                    .col(pk_auto(ComplexDevice::Id))
                    .col(integer(ComplexDevice::CreatedBy))
                    .col(string_len_uniq(ComplexDevice::Name, 20))
                    .col(string_len_uniq(ComplexDevice::Sku, 20))
                    .col(boolean(ComplexDevice::NightVision).default(false))
                    .col(boolean(ComplexDevice::Weather).default(false))
                    .col(boolean(ComplexDevice::Deleted).default(false))
                    .col(string_null(ComplexDevice::Link))
                    .col(string_null(ComplexDevice::Ulink))
                    .col(string_null(ComplexDevice::Dlink))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_DEVICE_CREATED_BY)
                            .from(ComplexDevice::Table, ComplexDevice::CreatedBy)
                            .to(AuthUser::Table, AuthUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_DEVICE_CREATED_BY)
                    .table(ComplexDevice::Table)
                    .col(ComplexDevice::CreatedBy)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DEVICE_CREATED_BY)
                    .table(ComplexDevice::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(ComplexDevice::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum ComplexDevice {
    Table,
    Id,
    CreatedBy,
    Name,
    Sku,
    NightVision,
    Weather,
    Deleted,
    Link,
    Ulink,
    Dlink,
}

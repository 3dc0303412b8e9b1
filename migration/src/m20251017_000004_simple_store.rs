use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_auth_user::AuthUser;

static IDX_STORE_CREATED_BY: &str = "idx-simple_store-created_by";
static FK_STORE_CREATED_BY: &str = "fk-simple_store-created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SimpleStore::Table)
                    .if_not_exists()
                    .col(pk_auto(SimpleStore::Id))
                    .col(integer(SimpleStore::CreatedBy))
                    .col(string_len_uniq(SimpleStore::Name, 20))
                    .col(string_len_uniq(SimpleStore::Location, 20))
                    .col(boolean(SimpleStore::Deleted).default(false))
                    .col(string_null(SimpleStore::Link))
                    .col(string_null(SimpleStore::Ulink))
                    .col(string_null(SimpleStore::Dlink))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_STORE_CREATED_BY)
                            .from(SimpleStore::Table, SimpleStore::CreatedBy)
                            .to(AuthUser::Table, AuthUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_STORE_CREATED_BY)
                    .table(SimpleStore::Table)
                    .col(SimpleStore::CreatedBy)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_STORE_CREATED_BY)
                    .table(SimpleStore::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SimpleStore::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SimpleStore {
    Table,
    Id,
    CreatedBy,
    Name,
    Location,
    Deleted,
    Link,
    Ulink,
    Dlink,
}

use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(AuthGroup::Id))
                    .col(string_len_uniq(AuthGroup::Name, 150))
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AuthPermission::Table)
                    .if_not_exists()
                    .col(pk_auto(AuthPermission::Id))
                    .col(string_len(AuthPermission::AppLabel, 100))
                    .col(string_len_uniq(AuthPermission::Codename, 100))
                    .col(string(AuthPermission::Name))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthPermission::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AuthGroup::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AuthGroup {
    Table,
    Id,
    Name,
}

#[derive(DeriveIden)]
pub enum AuthPermission {
    Table,
    Id,
    AppLabel,
    Codename,
    Name,
}

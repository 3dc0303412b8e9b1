use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthUser::Table)
                    .if_not_exists()
                    .col(pk_auto(AuthUser::Id))
                    .col(string_len_uniq(AuthUser::Username, 150))
                    .col(string(AuthUser::Password))
                    .col(string(AuthUser::Email).default(""))
                    .col(boolean(AuthUser::IsStaff).default(false))
                    .col(boolean(AuthUser::IsSuperuser).default(false))
                    .col(boolean(AuthUser::IsActive).default(true))
                    .col(timestamp(AuthUser::CreatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthUser::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum AuthUser {
    Table,
    Id,
    Username,
    Password,
    Email,
    IsStaff,
    IsSuperuser,
    IsActive,
    CreatedAt,
}

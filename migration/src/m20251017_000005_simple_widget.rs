use sea_orm_migration::{prelude::*, schema::*};

use crate::m20251017_000001_auth_user::AuthUser;

static IDX_WIDGET_CREATED_BY: &str = "idx-simple_widget-created_by";
static FK_WIDGET_CREATED_BY: &str = "fk-simple_widget-created_by";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SimpleWidget::Table)
                    .if_not_exists()
                    .col(pk_auto(SimpleWidget::Id))
                    .col(integer(SimpleWidget::CreatedBy))
                    .col(string_len_uniq(SimpleWidget::Name, 20))
                    .col(string_len_uniq(SimpleWidget::Sku, 10))
                    .col(decimal_len(SimpleWidget::Cost, 6, 2).default(0))
                    .col(boolean(SimpleWidget::Deleted).default(false))
                    .col(string_null(SimpleWidget::Link))
                    .col(string_null(SimpleWidget::Ulink))
                    .col(string_null(SimpleWidget::Dlink))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_WIDGET_CREATED_BY)
                            .from(SimpleWidget::Table, SimpleWidget::CreatedBy)
                            .to(AuthUser::Table, AuthUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_WIDGET_CREATED_BY)
                    .table(SimpleWidget::Table)
                    .col(SimpleWidget::CreatedBy)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_WIDGET_CREATED_BY)
                    .table(SimpleWidget::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SimpleWidget::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum SimpleWidget {
    Table,
    Id,
    CreatedBy,
    Name,
    Sku,
    Cost,
    Deleted,
    Link,
    Ulink,
    Dlink,
}

use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000001_auth_user::AuthUser, m20251017_000004_simple_store::SimpleStore,
    m20251017_000005_simple_widget::SimpleWidget,
};

static IDX_INVENTORY_CREATED_BY: &str = "idx-simple_inventory-created_by";
static FK_INVENTORY_CREATED_BY: &str = "fk-simple_inventory-created_by";
static FK_INVENTORY_STORE_ID: &str = "fk-simple_inventory-store_id";
static FK_INVENTORY_WIDGET_ID: &str = "fk-simple_inventory-widget_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(SimpleInventory::Table)
                    .if_not_exists()
                    .col(pk_auto(SimpleInventory::Id))
                    .col(integer(SimpleInventory::CreatedBy))
                    .col(integer(SimpleInventory::StoreId))
                    .col(integer(SimpleInventory::WidgetId))
                    .col(integer(SimpleInventory::Quantity).default(0))
                    .col(boolean(SimpleInventory::Deleted).default(false))
                    .col(string_null(SimpleInventory::Link))
                    .col(string_null(SimpleInventory::Ulink))
                    .col(string_null(SimpleInventory::Dlink))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INVENTORY_CREATED_BY)
                            .from(SimpleInventory::Table, SimpleInventory::CreatedBy)
                            .to(AuthUser::Table, AuthUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INVENTORY_STORE_ID)
                            .from(SimpleInventory::Table, SimpleInventory::StoreId)
                            .to(SimpleStore::Table, SimpleStore::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_INVENTORY_WIDGET_ID)
                            .from(SimpleInventory::Table, SimpleInventory::WidgetId)
                            .to(SimpleWidget::Table, SimpleWidget::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_INVENTORY_CREATED_BY)
                    .table(SimpleInventory::Table)
                    .col(SimpleInventory::CreatedBy)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_INVENTORY_CREATED_BY)
                    .table(SimpleInventory::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(SimpleInventory::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum SimpleInventory {
    Table,
    Id,
    CreatedBy,
    StoreId,
    WidgetId,
    Quantity,
    Deleted,
    Link,
    Ulink,
    Dlink,
}

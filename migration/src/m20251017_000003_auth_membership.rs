use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20251017_000001_auth_user::AuthUser,
    m20251017_000002_auth_group::{AuthGroup, AuthPermission},
};

static FK_USER_GROUP_USER_ID: &str = "fk-auth_user_group-user_id";
static FK_USER_GROUP_GROUP_ID: &str = "fk-auth_user_group-group_id";
static FK_GROUP_PERMISSION_GROUP_ID: &str = "fk-auth_group_permission-group_id";
static FK_GROUP_PERMISSION_PERMISSION_ID: &str = "fk-auth_group_permission-permission_id";
static FK_USER_PERMISSION_USER_ID: &str = "fk-auth_user_permission-user_id";
static FK_USER_PERMISSION_PERMISSION_ID: &str = "fk-auth_user_permission-permission_id";
static IDX_USER_GROUP_UNIQUE: &str = "idx-auth_user_group-user_id-group_id";
static IDX_GROUP_PERMISSION_UNIQUE: &str = "idx-auth_group_permission-group_id-permission_id";
static IDX_USER_PERMISSION_UNIQUE: &str = "idx-auth_user_permission-user_id-permission_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AuthUserGroup::Table)
                    .if_not_exists()
                    .col(pk_auto(AuthUserGroup::Id))
                    .col(integer(AuthUserGroup::UserId))
                    .col(integer(AuthUserGroup::GroupId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_GROUP_USER_ID)
                            .from(AuthUserGroup::Table, AuthUserGroup::UserId)
                            .to(AuthUser::Table, AuthUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_GROUP_GROUP_ID)
                            .from(AuthUserGroup::Table, AuthUserGroup::GroupId)
                            .to(AuthGroup::Table, AuthGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_GROUP_UNIQUE)
                    .table(AuthUserGroup::Table)
                    .col(AuthUserGroup::UserId)
                    .col(AuthUserGroup::GroupId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AuthGroupPermission::Table)
                    .if_not_exists()
                    .col(pk_auto(AuthGroupPermission::Id))
                    .col(integer(AuthGroupPermission::GroupId))
                    .col(integer(AuthGroupPermission::PermissionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GROUP_PERMISSION_GROUP_ID)
                            .from(AuthGroupPermission::Table, AuthGroupPermission::GroupId)
                            .to(AuthGroup::Table, AuthGroup::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_GROUP_PERMISSION_PERMISSION_ID)
                            .from(
                                AuthGroupPermission::Table,
                                AuthGroupPermission::PermissionId,
                            )
                            .to(AuthPermission::Table, AuthPermission::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_GROUP_PERMISSION_UNIQUE)
                    .table(AuthGroupPermission::Table)
                    .col(AuthGroupPermission::GroupId)
                    .col(AuthGroupPermission::PermissionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(AuthUserPermission::Table)
                    .if_not_exists()
                    .col(pk_auto(AuthUserPermission::Id))
                    .col(integer(AuthUserPermission::UserId))
                    .col(integer(AuthUserPermission::PermissionId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_PERMISSION_USER_ID)
                            .from(AuthUserPermission::Table, AuthUserPermission::UserId)
                            .to(AuthUser::Table, AuthUser::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_USER_PERMISSION_PERMISSION_ID)
                            .from(
                                AuthUserPermission::Table,
                                AuthUserPermission::PermissionId,
                            )
                            .to(AuthPermission::Table, AuthPermission::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_USER_PERMISSION_UNIQUE)
                    .table(AuthUserPermission::Table)
                    .col(AuthUserPermission::UserId)
                    .col(AuthUserPermission::PermissionId)
                    .unique()
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AuthUserPermission::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AuthGroupPermission::Table).to_owned())
            .await?;

        manager
            .drop_table(Table::drop().table(AuthUserGroup::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum AuthUserGroup {
    Table,
    Id,
    UserId,
    GroupId,
}

#[derive(DeriveIden)]
enum AuthGroupPermission {
    Table,
    Id,
    GroupId,
    PermissionId,
}

#[derive(DeriveIden)]
enum AuthUserPermission {
    Table,
    Id,
    UserId,
    PermissionId,
}

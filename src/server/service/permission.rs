//! Permission checks and the default group layout.
//!
//! Permissions are addressed as `<app>.<action>_<entity>` (e.g. `simple.add_store`) plus
//! `<app>.<entity>.full_access`, which implies add, change and delete for that entity.

use sea_orm::{DatabaseConnection, TransactionTrait};

use crate::server::{
    config::AdminCredentials,
    data::{
        permission::PermissionRepository,
        user::{NewUser, UserRepository},
    },
    error::Error,
    model::kind::{Action, EntityKind},
    util::password::hash_password,
};

/// Groups seeded at startup. `view` carries no permissions since reading only needs a login.
pub const DEFAULT_GROUPS: [&str; 5] = ["view", "add", "change", "delete", "full_access"];

pub struct PermissionService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> PermissionService<'a> {
    /// Creates a new instance of [`PermissionService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Whether `user` holds `permission`.
    ///
    /// Inactive users hold nothing, superusers hold everything and everyone else holds the
    /// union of their own and their groups' permissions.
    pub async fn has_perm(
        &self,
        user: &entity::auth_user::Model,
        permission: &str,
    ) -> Result<bool, Error> {
        if !user.is_active {
            return Ok(false);
        }
        if user.is_superuser {
            return Ok(true);
        }

        let held = PermissionRepository::new(self.db)
            .get_user_permissions(user.id)
            .await?;

        Ok(held.contains(permission))
    }

    /// Whether `user` may perform `action` on `kind`, directly or through full access.
    pub async fn has_entity_perm(
        &self,
        user: &entity::auth_user::Model,
        kind: EntityKind,
        action: Action,
    ) -> Result<bool, Error> {
        if self.has_perm(user, &kind.permission(action)).await? {
            return Ok(true);
        }

        self.has_perm(user, &kind.full_access_permission()).await
    }

    /// Creates the default groups and their permissions. Safe to run on every startup.
    pub async fn seed_default_groups(&self) -> Result<(), Error> {
        let txn = self.db.begin().await?;
        let repo = PermissionRepository::new(&txn);

        for group in DEFAULT_GROUPS {
            repo.get_or_create_group(group).await?;
        }

        for kind in EntityKind::ALL {
            let app_label = kind.app().label();

            for action in Action::ALL {
                let permission = repo
                    .get_or_create_permission(
                        app_label,
                        &kind.codename(action),
                        &format!("Can {} {}", action.label(), kind.name()),
                    )
                    .await?;
                let group = repo.get_or_create_group(action.label()).await?;
                repo.grant_group_permission(group.id, permission.id).await?;
            }

            let full_access = repo
                .get_or_create_permission(
                    app_label,
                    &kind.full_access_codename(),
                    &format!("Full access to {}", kind.name()),
                )
                .await?;
            let group = repo.get_or_create_group("full_access").await?;
            repo.grant_group_permission(group.id, full_access.id).await?;
        }

        txn.commit().await?;

        tracing::info!("Seeded default groups: {}", DEFAULT_GROUPS.join(", "));

        Ok(())
    }

    /// Creates the configured superuser, or promotes the existing account of that name.
    ///
    /// An existing account keeps its password.
    pub async fn bootstrap_superuser(&self, admin: &AdminCredentials) -> Result<i32, Error> {
        let repo = UserRepository::new(self.db);

        if let Some(user) = repo.get_by_username(&admin.username).await? {
            if !user.is_superuser || !user.is_active {
                repo.promote_to_superuser(user.id).await?;
                tracing::info!(user_id = %user.id, "Promoted {} to superuser", admin.username);
            }

            return Ok(user.id);
        }

        let user = repo
            .create(NewUser {
                username: &admin.username,
                password_hash: hash_password(&admin.password)?,
                email: "",
                is_staff: true,
                is_superuser: true,
            })
            .await?;

        tracing::info!(user_id = %user.id, "Created superuser {}", admin.username);

        Ok(user.id)
    }
}

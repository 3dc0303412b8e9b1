use argon2::{
    password_hash::{rand_core::OsRng, PasswordHasher, SaltString},
    Algorithm, Argon2, Params, Version,
};
use chrono::Utc;
use sea_orm::{ActiveValue, ColumnTrait, EntityTrait, QueryFilter};

use crate::{
    constant::{TEST_EMAIL_DOMAIN, TEST_PASSWORD},
    error::TestError,
    TestContext,
};

impl TestContext {
    pub fn user<'a>(&'a mut self) -> UserFixtures<'a> {
        UserFixtures { setup: self }
    }
}

pub struct UserFixtures<'a> {
    setup: &'a mut TestContext,
}

/// Hash `TEST_PASSWORD` with minimal Argon2id cost.
///
/// Verification reads the parameters back out of the PHC string, so these hashes verify
/// with the server's default hasher.
pub fn hash_test_password() -> Result<String, TestError> {
    let params =
        Params::new(1024, 1, 1, None).map_err(|e| TestError::PasswordHash(e.to_string()))?;
    let argon2 = Argon2::new(Algorithm::Argon2id, Version::V0x13, params);
    let salt = SaltString::generate(&mut OsRng);

    argon2
        .hash_password(TEST_PASSWORD.as_bytes(), &salt)
        .map(|hash| hash.to_string())
        .map_err(|e| TestError::PasswordHash(e.to_string()))
}

impl<'a> UserFixtures<'a> {
    /// Insert an active, non-staff user whose password is `TEST_PASSWORD`.
    pub async fn insert_user(&self, username: &str) -> Result<entity::auth_user::Model, TestError> {
        self.insert_user_with_flags(username, true, false, false)
            .await
    }

    /// Insert an active superuser.
    pub async fn insert_superuser(
        &self,
        username: &str,
    ) -> Result<entity::auth_user::Model, TestError> {
        self.insert_user_with_flags(username, true, true, true).await
    }

    /// Insert a user that has been deactivated.
    pub async fn insert_inactive_user(
        &self,
        username: &str,
    ) -> Result<entity::auth_user::Model, TestError> {
        self.insert_user_with_flags(username, false, false, false)
            .await
    }

    pub async fn insert_user_with_flags(
        &self,
        username: &str,
        is_active: bool,
        is_staff: bool,
        is_superuser: bool,
    ) -> Result<entity::auth_user::Model, TestError> {
        Ok(
            entity::prelude::AuthUser::insert(entity::auth_user::ActiveModel {
                username: ActiveValue::Set(username.to_string()),
                password: ActiveValue::Set(hash_test_password()?),
                email: ActiveValue::Set(format!("{}@{}", username, TEST_EMAIL_DOMAIN)),
                is_staff: ActiveValue::Set(is_staff),
                is_superuser: ActiveValue::Set(is_superuser),
                is_active: ActiveValue::Set(is_active),
                created_at: ActiveValue::Set(Utc::now().naive_utc()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    /// Return the permission `<app_label>.<codename>`, inserting it when missing.
    pub async fn insert_permission(
        &self,
        app_label: &str,
        codename: &str,
    ) -> Result<entity::auth_permission::Model, TestError> {
        if let Some(permission) = entity::prelude::AuthPermission::find()
            .filter(entity::auth_permission::Column::Codename.eq(codename))
            .one(&self.setup.db)
            .await?
        {
            return Ok(permission);
        }

        Ok(
            entity::prelude::AuthPermission::insert(entity::auth_permission::ActiveModel {
                app_label: ActiveValue::Set(app_label.to_string()),
                codename: ActiveValue::Set(codename.to_string()),
                name: ActiveValue::Set(format!("Can {}", codename.replace('_', " "))),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn insert_group(&self, name: &str) -> Result<entity::auth_group::Model, TestError> {
        Ok(
            entity::prelude::AuthGroup::insert(entity::auth_group::ActiveModel {
                name: ActiveValue::Set(name.to_string()),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn add_user_to_group(
        &self,
        user_id: i32,
        group_id: i32,
    ) -> Result<entity::auth_user_group::Model, TestError> {
        Ok(
            entity::prelude::AuthUserGroup::insert(entity::auth_user_group::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                group_id: ActiveValue::Set(group_id),
                ..Default::default()
            })
            .exec_with_returning(&self.setup.db)
            .await?,
        )
    }

    pub async fn grant_group_permission(
        &self,
        group_id: i32,
        permission_id: i32,
    ) -> Result<entity::auth_group_permission::Model, TestError> {
        Ok(entity::prelude::AuthGroupPermission::insert(
            entity::auth_group_permission::ActiveModel {
                group_id: ActiveValue::Set(group_id),
                permission_id: ActiveValue::Set(permission_id),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    pub async fn grant_user_permission(
        &self,
        user_id: i32,
        permission_id: i32,
    ) -> Result<entity::auth_user_permission::Model, TestError> {
        Ok(entity::prelude::AuthUserPermission::insert(
            entity::auth_user_permission::ActiveModel {
                user_id: ActiveValue::Set(user_id),
                permission_id: ActiveValue::Set(permission_id),
                ..Default::default()
            },
        )
        .exec_with_returning(&self.setup.db)
        .await?)
    }

    /// Insert an active user holding each `(app_label, codename)` permission directly.
    pub async fn insert_user_with_permissions(
        &self,
        username: &str,
        permissions: &[(&str, &str)],
    ) -> Result<entity::auth_user::Model, TestError> {
        let user = self.insert_user(username).await?;

        for (app_label, codename) in permissions {
            let permission = self.insert_permission(app_label, codename).await?;
            self.grant_user_permission(user.id, permission.id).await?;
        }

        Ok(user)
    }
}

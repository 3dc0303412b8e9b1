use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait,
    IntoActiveModel, QueryFilter,
};

/// Account fields set when a user is created.
#[derive(Debug, Clone)]
pub struct NewUser<'s> {
    pub username: &'s str,
    pub password_hash: String,
    pub email: &'s str,
    pub is_staff: bool,
    pub is_superuser: bool,
}

pub struct UserRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> UserRepository<'a, C> {
    /// Creates a new instance of [`UserRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a new active user
    pub async fn create(&self, user: NewUser<'_>) -> Result<entity::auth_user::Model, DbErr> {
        let user = entity::auth_user::ActiveModel {
            username: ActiveValue::Set(user.username.to_string()),
            password: ActiveValue::Set(user.password_hash),
            email: ActiveValue::Set(user.email.to_string()),
            is_staff: ActiveValue::Set(user.is_staff),
            is_superuser: ActiveValue::Set(user.is_superuser),
            is_active: ActiveValue::Set(true),
            created_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        user.insert(self.db).await
    }

    pub async fn get(&self, user_id: i32) -> Result<Option<entity::auth_user::Model>, DbErr> {
        entity::prelude::AuthUser::find_by_id(user_id)
            .one(self.db)
            .await
    }

    pub async fn get_by_username(
        &self,
        username: &str,
    ) -> Result<Option<entity::auth_user::Model>, DbErr> {
        entity::prelude::AuthUser::find()
            .filter(entity::auth_user::Column::Username.eq(username))
            .one(self.db)
            .await
    }

    /// Grant staff and superuser status, reactivating the account if needed.
    ///
    /// Returns `Ok(None)` when the user doesn't exist.
    pub async fn promote_to_superuser(
        &self,
        user_id: i32,
    ) -> Result<Option<entity::auth_user::Model>, DbErr> {
        let Some(user) = self.get(user_id).await? else {
            return Ok(None);
        };

        let mut user_am = user.into_active_model();
        user_am.is_staff = ActiveValue::Set(true);
        user_am.is_superuser = ActiveValue::Set(true);
        user_am.is_active = ActiveValue::Set(true);

        Ok(Some(user_am.update(self.db).await?))
    }
}

#[cfg(test)]
mod tests {
    mod create {
        use popular_test_utils::prelude::*;

        use crate::server::data::user::{NewUser, UserRepository};

        fn new_user(username: &str) -> NewUser<'_> {
            NewUser {
                username,
                password_hash: "hash".to_string(),
                email: "qa@example.com",
                is_staff: false,
                is_superuser: false,
            }
        }

        /// Expect new users to be active
        #[tokio::test]
        async fn creates_active_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_auth_tables().build().await?;

            let user = UserRepository::new(&test.db).create(new_user("qa")).await?;

            assert_eq!(user.username, "qa");
            assert!(user.is_active);
            assert!(!user.is_superuser);

            Ok(())
        }

        /// Expect Error for a username that is already taken
        #[tokio::test]
        async fn fails_for_duplicate_username() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_auth_tables()
                .with_user("qa")
                .build()
                .await?;

            let result = UserRepository::new(&test.db).create(new_user("qa")).await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod get_by_username {
        use popular_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        #[tokio::test]
        async fn finds_existing_user() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_auth_tables()
                .with_user("qa")
                .build()
                .await?;

            let result = UserRepository::new(&test.db).get_by_username("qa").await?;

            assert!(result.is_some());

            Ok(())
        }

        /// Expect usernames to be matched exactly
        #[tokio::test]
        async fn returns_none_for_unknown_username() -> Result<(), TestError> {
            let test = TestBuilder::new()
                .with_auth_tables()
                .with_user("qa")
                .build()
                .await?;

            let result = UserRepository::new(&test.db).get_by_username("QA2").await?;

            assert!(result.is_none());

            Ok(())
        }

        /// Expect Error when required database tables are not present
        #[tokio::test]
        async fn fails_when_tables_missing() -> Result<(), TestError> {
            let test = TestBuilder::new().build().await?;

            let result = UserRepository::new(&test.db).get_by_username("qa").await;

            assert!(result.is_err());

            Ok(())
        }
    }

    mod promote_to_superuser {
        use popular_test_utils::prelude::*;

        use crate::server::data::user::UserRepository;

        #[tokio::test]
        async fn promotes_inactive_user() -> Result<(), TestError> {
            let mut test = TestBuilder::new().with_auth_tables().build().await?;
            let user = test.user().insert_inactive_user("admin").await?;

            let promoted = UserRepository::new(&test.db)
                .promote_to_superuser(user.id)
                .await?
                .unwrap();

            assert!(promoted.is_active);
            assert!(promoted.is_staff);
            assert!(promoted.is_superuser);

            Ok(())
        }

        #[tokio::test]
        async fn returns_none_for_nonexistent_user() -> Result<(), TestError> {
            let test = TestBuilder::new().with_auth_tables().build().await?;

            let result = UserRepository::new(&test.db).promote_to_superuser(1).await?;

            assert!(result.is_none());

            Ok(())
        }
    }
}

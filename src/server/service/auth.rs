use sea_orm::DatabaseConnection;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    util::password::verify_password,
};

pub struct AuthService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> AuthService<'a> {
    /// Creates a new instance of [`AuthService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Checks a username and password.
    ///
    /// Unknown users, wrong passwords and inactive accounts all yield
    /// `AuthError::InvalidCredentials` so the response doesn't reveal which one it was.
    pub async fn authenticate(
        &self,
        username: &str,
        password: &str,
    ) -> Result<entity::auth_user::Model, Error> {
        let Some(user) = UserRepository::new(self.db)
            .get_by_username(username)
            .await?
        else {
            tracing::debug!(%username, "Login attempt for unknown user");

            return Err(AuthError::InvalidCredentials.into());
        };

        if !verify_password(password, &user.password)? {
            tracing::debug!(user_id = %user.id, "Login attempt with wrong password");

            return Err(AuthError::InvalidCredentials.into());
        }

        if !user.is_active {
            tracing::debug!(user_id = %user.id, "Login attempt for inactive user");

            return Err(AuthError::InvalidCredentials.into());
        }

        Ok(user)
    }
}

use axum::{extract::FromRequestParts, http::request::Parts};
use tower_sessions::Session;

use crate::server::{
    data::user::UserRepository,
    error::{auth::AuthError, Error},
    model::{
        app::AppState,
        kind::{Action, EntityKind},
        session::user::SessionUserId,
    },
    service::permission::PermissionService,
};

/// The logged in user, resolved from the session on every request.
///
/// Extracting it is the login check: an anonymous request is rejected with
/// `AuthError::LoginRequired` and redirected to the login page with `next` set to the
/// requested path.
pub struct CurrentUser {
    pub user: entity::auth_user::Model,
    /// Path and query of the request, used as `next` when a check fails
    pub path: String,
}

impl CurrentUser {
    /// Retrieves the user whose id is stored in the session.
    ///
    /// # Returns
    /// - `Ok(CurrentUser)` - User found
    /// - `Err(AuthError::LoginRequired)` - No user id in the session, or the account has been
    ///   deactivated since login; the session is cleared in the latter case
    /// - `Err(AuthError::UserNotInDatabase)` - User id in the session but not in the database;
    ///   the session is cleared
    /// - `Err(Error)` - Session or database failure
    pub async fn from_session(
        state: &AppState,
        session: &Session,
        path: String,
    ) -> Result<Self, Error> {
        let Some(user_id) = SessionUserId::get(session).await? else {
            return Err(AuthError::LoginRequired { next: path }.into());
        };

        let Some(user) = UserRepository::new(&state.db).get(user_id).await? else {
            session.clear().await;

            tracing::debug!(
                "Session cleared for user ID {} with active session but was not found in database",
                user_id
            );

            return Err(AuthError::UserNotInDatabase {
                user_id,
                next: path,
            }
            .into());
        };

        if !user.is_active {
            session.clear().await;

            tracing::debug!(user_id = %user.id, "Session cleared for deactivated user");

            return Err(AuthError::LoginRequired { next: path }.into());
        }

        Ok(Self { user, path })
    }

    pub fn id(&self) -> i32 {
        self.user.id
    }

    /// Requires permission for `action` on `kind`, granted directly or through full access.
    pub async fn require(
        &self,
        state: &AppState,
        kind: EntityKind,
        action: Action,
    ) -> Result<(), Error> {
        if PermissionService::new(&state.db)
            .has_entity_perm(&self.user, kind, action)
            .await?
        {
            return Ok(());
        }

        Err(AuthError::PermissionDenied {
            user_id: self.user.id,
            permission: kind.permission(action),
            next: self.path.clone(),
        }
        .into())
    }
}

impl FromRequestParts<AppState> for CurrentUser {
    type Rejection = Error;

    async fn from_request_parts(parts: &mut Parts, state: &AppState) -> Result<Self, Error> {
        let session = Session::from_request_parts(parts, state)
            .await
            .map_err(|(_, message)| Error::InternalError(message.to_string()))?;

        let path = parts
            .uri
            .path_and_query()
            .map(|pq| pq.as_str().to_string())
            .unwrap_or_else(|| parts.uri.path().to_string());

        Self::from_session(state, &session, path).await
    }
}

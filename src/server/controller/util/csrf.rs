use tower_sessions::Session;

use crate::server::{
    error::{auth::AuthError, Error},
    model::session::csrf::SessionCsrfToken,
};

/// Validate that `submitted` matches the CSRF token issued to this session.
///
/// The token is kept after a successful check so several forms can be posted from one session.
pub async fn validate_csrf(session: &Session, submitted: Option<&str>) -> Result<(), Error> {
    let stored = SessionCsrfToken::get(session).await?;

    match (stored, submitted) {
        (Some(stored), Some(submitted)) if stored == submitted => Ok(()),
        _ => Err(Error::AuthError(AuthError::CsrfValidationFailed)),
    }
}

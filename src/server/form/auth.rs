use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::server::{
    error::form::FormErrors,
    form::{normalize, required},
};

#[derive(Debug, Default, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginForm {
    pub username: Option<String>,
    pub password: Option<String>,
    pub next: Option<String>,
    pub csrfmiddlewaretoken: Option<String>,
}

pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl LoginForm {
    /// Username is trimmed, the password is taken as typed.
    pub fn clean(self) -> Result<Credentials, FormErrors> {
        let mut errors = FormErrors::new();

        let username = required(&mut errors, "username", normalize(self.username));
        let password = required(
            &mut errors,
            "password",
            self.password.filter(|p| !p.is_empty()),
        );

        match (username, password) {
            (Some(username), Some(password)) => Ok(Credentials { username, password }),
            _ => Err(errors),
        }
    }
}

/// Redirect target after login; anything but a local absolute path falls back to `/`.
///
/// Browsers drop tabs and newlines from URLs, so `/\t/host` would still leave the site.
pub fn safe_next(next: Option<&str>) -> String {
    match next.map(str::trim) {
        Some(path)
            if path.starts_with('/')
                && !path.starts_with("//")
                && !path.contains('\\')
                && !path.chars().any(char::is_control) =>
        {
            path.to_string()
        }
        _ => "/".to_string(),
    }
}

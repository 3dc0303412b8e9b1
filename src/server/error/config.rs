//! Startup failures while reading the environment.

use axum::response::{IntoResponse, Response};
use thiserror::Error;

use crate::server::error::InternalServerError;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Missing required environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid value for environment variable {var}: {reason}")]
    InvalidEnvValue { var: String, reason: String },
    /// Only one half of the bootstrap superuser was configured
    #[error("{set} is set but {missing} is not; set both to bootstrap a superuser, or neither")]
    PartialAdminCredentials {
        set: &'static str,
        missing: &'static str,
    },
}

impl IntoResponse for ConfigError {
    fn into_response(self) -> Response {
        InternalServerError(self).into_response()
    }
}

//! Error types for the server application.
//!
//! Domain errors (authentication, configuration, form validation) are defined in their own
//! modules and aggregated into [`Error`]. Every error implements `IntoResponse`; anything
//! without a dedicated mapping becomes a logged 500 with a generic body.

pub mod auth;
pub mod config;
pub mod form;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{auth::AuthError, config::ConfigError, form::FormErrors},
};

/// Main error type for the server application.
///
/// Uses `thiserror`'s `#[from]` attribute so the `?` operator converts underlying errors,
/// and maps each category to an HTTP response in its `IntoResponse` implementation.
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Authentication or authorization failure.
    #[error(transparent)]
    AuthError(#[from] AuthError),
    /// Submitted form failed validation or violated a unique constraint.
    #[error(transparent)]
    FormError(#[from] FormErrors),
    /// Requested record does not exist, belongs to another user, or was deleted.
    #[error("{0}")]
    NotFound(String),
    /// Parse error (failed to parse a value from string or other format).
    #[error("Failed to parse value: {0:?}")]
    ParseError(String),
    /// Password hashing or hash parsing failed.
    #[error("Password hash error: {0}")]
    PasswordHashError(String),
    /// Internal error indicating a bug.
    #[error("Internal error, this indicates a bug: {0:?}")]
    InternalError(String),
    /// Database error (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// Session error (session retrieval, storage, serialization).
    #[error(transparent)]
    SessionError(#[from] tower_sessions::session::Error),
    /// Redis session store error (connection, command execution).
    #[error(transparent)]
    SessionRedisError(#[from] tower_sessions_redis_store::fred::prelude::Error),
    /// Failed to bind or serve the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

impl From<argon2::password_hash::Error> for Error {
    fn from(err: argon2::password_hash::Error) -> Self {
        Self::PasswordHashError(err.to_string())
    }
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 303 See Other - Login required or permission denied, redirect to the login page
/// - 400 Bad Request - Form validation errors
/// - 401 Unauthorized - Wrong username or password
/// - 403 Forbidden - CSRF verification failed
/// - 404 Not Found - Missing, foreign or deleted records
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::ConfigError(err) => err.into_response(),
            Self::AuthError(err) => err.into_response(),
            Self::FormError(err) => err.into_response(),
            Self::NotFound(message) => {
                tracing::debug!(%message, "Record not found");

                (StatusCode::NOT_FOUND, Json(ErrorDto { error: message })).into_response()
            }
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the client
/// to avoid leaking implementation details.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

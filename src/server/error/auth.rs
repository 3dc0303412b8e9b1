use axum::{
    http::StatusCode,
    response::{IntoResponse, Redirect, Response},
    Json,
};
use thiserror::Error;

use crate::{model::api::ErrorDto, server::util::links::login_redirect_path};

#[derive(Error, Debug)]
pub enum AuthError {
    #[error("Login required to access {next}")]
    LoginRequired { next: String },
    #[error("User ID {user_id} lacks permission {permission} required for {next}")]
    PermissionDenied {
        user_id: i32,
        permission: String,
        next: String,
    },
    #[error("User ID {user_id:?} not found in database despite having an active session")]
    UserNotInDatabase { user_id: i32, next: String },
    #[error("CSRF token missing or incorrect")]
    CsrfValidationFailed,
    #[error("Invalid username or password")]
    InvalidCredentials,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        match self {
            Self::LoginRequired { ref next } => {
                tracing::debug!("{}", self);

                Redirect::to(&login_redirect_path(next)).into_response()
            }
            Self::PermissionDenied {
                user_id,
                ref permission,
                ref next,
            } => {
                tracing::debug!(user_id = %user_id, permission = %permission, "{}", self);

                Redirect::to(&login_redirect_path(next)).into_response()
            }
            Self::UserNotInDatabase { user_id, ref next } => {
                tracing::debug!(user_id = %user_id, "{}", self);

                Redirect::to(&login_redirect_path(next)).into_response()
            }
            Self::CsrfValidationFailed => {
                tracing::debug!("{}", self);

                (
                    StatusCode::FORBIDDEN,
                    Json(ErrorDto {
                        error: "CSRF verification failed. Request aborted.".to_string(),
                    }),
                )
                    .into_response()
            }
            Self::InvalidCredentials => {
                tracing::debug!("{}", self);

                (
                    StatusCode::UNAUTHORIZED,
                    Json(ErrorDto {
                        error: "Please enter a correct username and password. Note that both fields may be case-sensitive.".to_string(),
                    }),
                )
                    .into_response()
            }
        }
    }
}

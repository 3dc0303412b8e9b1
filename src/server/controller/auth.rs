use axum::{
    extract::{Query, State},
    response::{IntoResponse, Redirect},
    Form, Json,
};
use serde::Deserialize;
use tower_sessions::Session;
use utoipa::IntoParams;

use crate::{
    model::{
        api::ErrorDto,
        user::{LoginDto, UserDto},
    },
    server::{
        controller::util::{csrf::validate_csrf, current_user::CurrentUser},
        error::Error,
        form::auth::{safe_next, LoginForm},
        model::{
            app::AppState,
            session::{csrf::SessionCsrfToken, user::SessionUserId},
        },
        service::{auth::AuthService, user::UserService},
    },
};

pub static AUTH_TAG: &str = "auth";

pub const LOGIN_PATH: &str = "/auth/login/";

#[derive(Deserialize, IntoParams)]
pub struct NextParams {
    /// Local path to return to after logging in
    pub next: Option<String>,
}

/// Login form document
///
/// Issues the session's CSRF token for the login form.
///
/// # Responses
/// - 200 (Success): CSRF token and the path a successful login returns to
/// - 500 (Internal Server Error): Session failure
#[utoipa::path(
    get,
    path = "/auth/login/",
    tag = AUTH_TAG,
    params(NextParams),
    responses(
        (status = 200, description = "Login form document", body = LoginDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login_form(
    session: Session,
    Query(params): Query<NextParams>,
) -> Result<impl IntoResponse, Error> {
    let csrf_token = SessionCsrfToken::get_or_create(&session).await?;

    Ok(Json(LoginDto {
        csrf_token,
        next: safe_next(params.next.as_deref()),
    }))
}

/// Logs a user in with username and password
///
/// The session id is cycled on success so a session fixed before login can't be reused.
///
/// # Responses
/// - 303 (See Other): Logged in, redirect to `next` or `/`
/// - 400 (Bad Request): Username or password missing
/// - 401 (Unauthorized): Wrong username or password, or the account is inactive
/// - 403 (Forbidden): CSRF token missing or incorrect
/// - 500 (Internal Server Error): Session or database failure
#[utoipa::path(
    post,
    path = "/auth/login/",
    tag = AUTH_TAG,
    params(NextParams),
    request_body(content = LoginForm, content_type = "application/x-www-form-urlencoded"),
    responses(
        (status = 303, description = "Logged in"),
        (status = 400, description = "Missing fields", body = crate::model::api::FormErrorDto),
        (status = 401, description = "Invalid credentials", body = ErrorDto),
        (status = 403, description = "CSRF verification failed", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn login(
    State(state): State<AppState>,
    session: Session,
    Query(params): Query<NextParams>,
    Form(form): Form<LoginForm>,
) -> Result<impl IntoResponse, Error> {
    validate_csrf(&session, form.csrfmiddlewaretoken.as_deref()).await?;

    let next = safe_next(form.next.as_deref().or(params.next.as_deref()));
    let credentials = form.clean()?;

    let user = AuthService::new(&state.db)
        .authenticate(&credentials.username, &credentials.password)
        .await?;

    session.cycle_id().await?;
    SessionUserId::insert(&session, user.id).await?;

    tracing::info!(user_id = %user.id, "User logged in");

    Ok(Redirect::to(&next))
}

/// Logs the user out by clearing their session
///
/// # Responses
/// - 303 (See Other): Logged out, redirect to the login page
/// - 500 (Internal Server Error): There was an issue reading the session
#[utoipa::path(
    get,
    path = "/auth/logout/",
    tag = AUTH_TAG,
    responses(
        (status = 303, description = "Logged out"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn logout(session: Session) -> Result<impl IntoResponse, Error> {
    let maybe_user_id = SessionUserId::get(&session).await?;

    // Clearing a session that was never stored fails, so only clear a logged in one
    if maybe_user_id.is_some() {
        session.clear().await;
    }

    Ok(Redirect::to(LOGIN_PATH))
}

/// Information on the logged in user
///
/// # Responses
/// - 200 (Success): The user
/// - 303 (See Other): Not logged in, redirect to the login page
#[utoipa::path(
    get,
    path = "/auth/user/",
    tag = AUTH_TAG,
    responses(
        (status = 200, description = "Logged in user", body = UserDto),
        (status = 303, description = "Login required"),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user(
    State(state): State<AppState>,
    current: CurrentUser,
) -> Result<impl IntoResponse, Error> {
    let user = UserService::new(&state.db)
        .get_user(current.id())
        .await?
        .ok_or_else(|| Error::NotFound(format!("User {} not found", current.id())))?;

    Ok(Json(user))
}

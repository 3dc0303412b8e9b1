use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Form,
};
use popular::server::{
    controller::auth::{login, login_form, NextParams},
    error::{auth::AuthError, Error},
    form::auth::LoginForm,
    model::{app::AppState, session::user::SessionUserId},
};

use super::*;

fn form(username: &str, password: &str, csrf: Option<String>) -> LoginForm {
    LoginForm {
        username: Some(username.to_string()),
        password: Some(password.to_string()),
        next: None,
        csrfmiddlewaretoken: csrf,
    }
}

fn no_next() -> Query<NextParams> {
    Query(NextParams { next: None })
}

#[tokio::test]
/// Expect 303 to the requested page and the user stored in session
async fn redirects_to_next_on_success() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await?;
    let user = test.user().insert_user("qa").await?;
    let csrf = test.csrf_token().await;

    let mut login_form = form("qa", TEST_PASSWORD, csrf);
    login_form.next = Some("/simple/stores/".to_string());

    let resp = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        no_next(),
        Form(login_form),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/simple/stores/");
    assert_eq!(
        SessionUserId::get(&test.session).await.unwrap(),
        Some(user.id)
    );

    Ok(())
}

#[tokio::test]
/// Expect `next` from the query string when the form has none, and `/` without either
async fn falls_back_to_query_then_home() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await?;
    test.user().insert_user("qa").await?;
    let state = test.to_app_state::<AppState>();

    let resp = login(
        State(state.clone()),
        test.session.clone(),
        Query(NextParams {
            next: Some("/complex/".to_string()),
        }),
        Form(form("qa", TEST_PASSWORD, test.csrf_token().await)),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(location(&resp), "/complex/");

    let resp = login(
        State(state),
        test.session.clone(),
        no_next(),
        Form(form("qa", TEST_PASSWORD, test.csrf_token().await)),
    )
    .await
    .unwrap()
    .into_response();
    assert_eq!(location(&resp), "/");

    Ok(())
}

#[tokio::test]
/// Expect 401 for a wrong password and nothing stored in session
async fn rejects_wrong_password() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await?;
    test.user().insert_user("qa").await?;
    let csrf = test.csrf_token().await;

    let result = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        no_next(),
        Form(form("qa", "not the password", csrf)),
    )
    .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));
    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect an inactive account to be refused even with the right password
async fn rejects_inactive_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await?;
    test.user().insert_inactive_user("gone").await?;
    let csrf = test.csrf_token().await;

    let result = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        no_next(),
        Form(form("gone", TEST_PASSWORD, csrf)),
    )
    .await;

    assert!(matches!(
        result,
        Err(Error::AuthError(AuthError::InvalidCredentials))
    ));

    Ok(())
}

#[tokio::test]
/// Expect 403 when the CSRF token doesn't match the session
async fn rejects_forged_csrf_token() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await?;
    test.user().insert_user("qa").await?;
    test.csrf_token().await;

    let result = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        no_next(),
        Form(form("qa", TEST_PASSWORD, Some("forged".to_string()))),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::FORBIDDEN);

    Ok(())
}

#[tokio::test]
/// Expect 400 with both field errors for an empty submission
async fn requires_both_fields() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;
    let csrf = test.csrf_token().await;

    let result = login(
        State(test.to_app_state::<AppState>()),
        test.session.clone(),
        no_next(),
        Form(LoginForm {
            csrfmiddlewaretoken: csrf,
            ..Default::default()
        }),
    )
    .await;

    let resp = result.err().unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = json_body(resp).await;
    assert_eq!(body["errors"]["username"][0], "This field is required.");
    assert_eq!(body["errors"]["password"][0], "This field is required.");

    Ok(())
}

#[tokio::test]
/// Expect the login form document to carry the session token and a safe `next`
async fn login_form_issues_token() -> Result<(), TestError> {
    let test = TestBuilder::new().with_auth_tables().build().await?;

    let resp = login_form(
        test.session.clone(),
        Query(NextParams {
            next: Some("https://elsewhere.example/".to_string()),
        }),
    )
    .await
    .unwrap()
    .into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["csrf_token"], test.csrf_token().await.unwrap());
    assert_eq!(body["next"], "/");

    Ok(())
}

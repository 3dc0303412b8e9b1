//! Requests through the full router with an in-memory session store.

use axum::{
    body::Body,
    http::{header, Method, Request, StatusCode},
    Router,
};
use popular::server::{model::app::AppState, router};
use popular_test_utils::prelude::*;
use sea_orm::{ActiveModelTrait, ActiveValue, IntoActiveModel};
use tower::ServiceExt;
use tower_sessions::{MemoryStore, SessionManagerLayer};

use crate::util::{json_body, location};

fn app(test: &TestContext) -> Router {
    router::routes()
        .with_state(test.to_app_state::<AppState>())
        .layer(SessionManagerLayer::new(MemoryStore::default()))
}

fn get(uri: &str, cookie: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(cookie) = cookie {
        builder = builder.header(header::COOKIE, cookie);
    }

    builder.body(Body::empty()).unwrap()
}

/// `name=value` of the session cookie set by a response.
fn session_cookie(resp: &axum::response::Response) -> Option<String> {
    resp.headers()
        .get(header::SET_COOKIE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(str::to_string)
}

#[tokio::test]
/// Expect anonymous requests to be sent to login with the requested path
async fn anonymous_request_redirects_to_login() -> Result<(), TestError> {
    let test = TestBuilder::new().with_simple_tables().build().await?;

    let resp = app(&test)
        .oneshot(get("/simple/stores/", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/auth/login/?next=/simple/stores/");

    Ok(())
}

#[tokio::test]
/// Expect 405 for a method the route doesn't register
async fn unsupported_method_is_405() -> Result<(), TestError> {
    let test = TestBuilder::new().with_simple_tables().build().await?;

    let resp = app(&test)
        .oneshot(
            Request::builder()
                .method(Method::DELETE)
                .uri("/simple/stores/1/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::METHOD_NOT_ALLOWED);

    Ok(())
}

#[tokio::test]
/// Expect confirmation pages to be served without a login
async fn record_pages_are_public() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(get("/complex/nonexistent/7/", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["title"], "Non-Existent Object");
    assert_eq!(body["pk"], 7);

    Ok(())
}

#[tokio::test]
/// Expect the OpenAPI document to describe the entity routes
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = app(&test)
        .oneshot(get("/api/docs/openapi.json", None))
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert!(body["paths"]["/simple/widgets/aggr/{page}/"].is_object());
    assert!(body["paths"]["/complex/sensors/update/{id}/"]["post"].is_object());

    Ok(())
}

/// Log `username` in through the form and return the session cookie.
async fn log_in(app: &Router, username: &str) -> String {
    let resp = app
        .clone()
        .oneshot(get("/auth/login/", None))
        .await
        .unwrap();
    let cookie = session_cookie(&resp).unwrap();
    let token = json_body(resp).await["csrf_token"]
        .as_str()
        .unwrap()
        .to_string();

    let form = format!(
        "username={}&password={}&csrfmiddlewaretoken={}",
        username, TEST_PASSWORD, token
    );
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/auth/login/")
                .header(header::COOKIE, &cookie)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    session_cookie(&resp).unwrap()
}

#[tokio::test]
/// Expect an account deactivated mid-session to lose access to login-only pages
async fn deactivated_user_is_logged_out() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_simple_tables().build().await?;
    let user = test.user().insert_user("qa").await?;
    test.simple().insert_store(user.id, "Corner", "Berkeley").await?;
    let app = app(&test);
    let cookie = log_in(&app, "qa").await;

    let resp = app
        .clone()
        .oneshot(get("/simple/stores/", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);

    let mut user = user.into_active_model();
    user.is_active = ActiveValue::Set(false);
    user.update(&test.db).await?;

    let resp = app
        .clone()
        .oneshot(get("/simple/stores/", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/auth/login/?next=/simple/stores/");

    Ok(())
}

#[tokio::test]
/// Expect a login through the form to open the app home for the same cookie
async fn login_flow_with_session_cookie() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_simple_tables().build().await?;
    test.user().insert_user("qa").await?;
    let app = app(&test);

    let resp = app
        .clone()
        .oneshot(get("/auth/login/?next=/simple/", None))
        .await
        .unwrap();
    let cookie = session_cookie(&resp).unwrap();
    let body = json_body(resp).await;
    let token = body["csrf_token"].as_str().unwrap().to_string();
    assert_eq!(body["next"], "/simple/");

    let form = format!(
        "username=qa&password={}&next=%2Fsimple%2F&csrfmiddlewaretoken={}",
        TEST_PASSWORD, token
    );
    let resp = app
        .clone()
        .oneshot(
            Request::builder()
                .method(Method::POST)
                .uri("/auth/login/")
                .header(header::COOKIE, &cookie)
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(form))
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/simple/");
    let cookie = session_cookie(&resp).unwrap();

    let resp = app
        .clone()
        .oneshot(get("/simple/", Some(&cookie)))
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["username"], "qa");
    assert_eq!(body["title"], "Simple App");

    Ok(())
}

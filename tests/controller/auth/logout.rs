use axum::{http::StatusCode, response::IntoResponse};
use popular::server::{controller::auth::logout, model::session::user::SessionUserId};

use super::*;

#[tokio::test]
/// Expect 303 to the login page and the user cleared from session
async fn clears_logged_in_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    SessionUserId::insert(&test.session, 1).await.unwrap();

    let resp = logout(test.session.clone()).await.unwrap().into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp), "/auth/login/");
    assert!(SessionUserId::get(&test.session).await.unwrap().is_none());

    Ok(())
}

#[tokio::test]
/// Expect the same redirect for a session that never logged in
async fn redirects_without_session() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;

    let resp = logout(test.session).await.unwrap().into_response();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);

    Ok(())
}

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use popular::server::controller::auth::get_user;

use super::*;

#[tokio::test]
/// Expect the logged in user's details
async fn returns_current_user() -> Result<(), TestError> {
    let mut test = TestBuilder::new().with_auth_tables().build().await?;
    let user = test.user().insert_superuser("admin").await?;
    let (state, current) = test.login_as(user.id, "/auth/user/").await;

    let resp = get_user(State(state), current).await.unwrap().into_response();

    assert_eq!(resp.status(), StatusCode::OK);
    let body = json_body(resp).await;
    assert_eq!(body["username"], "admin");
    assert_eq!(body["is_superuser"], true);

    Ok(())
}

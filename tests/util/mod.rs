//! Helpers shared by the integration tests.

use popular::server::{
    controller::util::current_user::CurrentUser,
    model::{
        app::AppState,
        session::{csrf::SessionCsrfToken, user::SessionUserId},
    },
};
use popular_test_utils::prelude::*;

pub(crate) trait TestContextExt {
    /// Store `user_id` in the session and resolve it the way the extractor does.
    async fn login_as(&self, user_id: i32, path: &str) -> (AppState, CurrentUser);

    /// The session's CSRF token, issuing one if needed.
    async fn csrf_token(&self) -> Option<String>;
}

impl TestContextExt for TestContext {
    async fn login_as(&self, user_id: i32, path: &str) -> (AppState, CurrentUser) {
        SessionUserId::insert(&self.session, user_id).await.unwrap();

        let state = self.to_app_state::<AppState>();
        let current = CurrentUser::from_session(&state, &self.session, path.to_string())
            .await
            .unwrap();

        (state, current)
    }

    async fn csrf_token(&self) -> Option<String> {
        Some(SessionCsrfToken::get_or_create(&self.session).await.unwrap())
    }
}

/// Location header of a redirect response.
pub fn location(resp: &axum::response::Response) -> &str {
    resp.headers()
        .get(axum::http::header::LOCATION)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default()
}

/// Body of a response parsed as JSON.
pub async fn json_body(resp: axum::response::Response) -> serde_json::Value {
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();

    serde_json::from_slice(&bytes).unwrap()
}

//! Per-session CSRF token.
//!
//! A random token is generated the first time a form is requested and kept for the rest of
//! the session. Every state changing POST must echo it back as `csrfmiddlewaretoken`.

use rand::distr::{Alphanumeric, SampleString};
use serde::{Deserialize, Serialize};
use tower_sessions::Session;

use crate::server::error::Error;

pub const SESSION_CSRF_TOKEN_KEY: &str = "popular:csrf:token";

const CSRF_TOKEN_LENGTH: usize = 64;

#[derive(Default, Deserialize, Serialize, Debug)]
pub struct SessionCsrfToken(pub String);

impl SessionCsrfToken {
    /// Returns the session's token, generating and storing one if the session has none yet.
    pub async fn get_or_create(session: &Session) -> Result<String, Error> {
        if let Some(token) = Self::get(session).await? {
            return Ok(token);
        }

        let token = Alphanumeric.sample_string(&mut rand::rng(), CSRF_TOKEN_LENGTH);
        session
            .insert(SESSION_CSRF_TOKEN_KEY, SessionCsrfToken(token.clone()))
            .await?;

        Ok(token)
    }

    pub async fn get(session: &Session) -> Result<Option<String>, Error> {
        Ok(session
            .get::<SessionCsrfToken>(SESSION_CSRF_TOKEN_KEY)
            .await?
            .map(|SessionCsrfToken(token)| token))
    }
}

#[cfg(test)]
mod tests {
    use popular_test_utils::prelude::*;

    use super::{SessionCsrfToken, CSRF_TOKEN_LENGTH};

    #[tokio::test]
    /// Expect a new token of the configured length for a fresh session
    async fn creates_token() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let token = SessionCsrfToken::get_or_create(&test.session).await.unwrap();

        assert_eq!(token.len(), CSRF_TOKEN_LENGTH);
        assert!(token.chars().all(|c| c.is_ascii_alphanumeric()));

        Ok(())
    }

    #[tokio::test]
    /// Expect the same token for every request within a session
    async fn token_is_stable_within_session() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let first = SessionCsrfToken::get_or_create(&test.session).await.unwrap();
        let second = SessionCsrfToken::get_or_create(&test.session).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(
            SessionCsrfToken::get(&test.session).await.unwrap(),
            Some(first)
        );

        Ok(())
    }

    #[tokio::test]
    /// Expect None before a token has been issued
    async fn get_returns_none_before_issue() -> Result<(), TestError> {
        let test = TestBuilder::new().build().await?;

        let token = SessionCsrfToken::get(&test.session).await.unwrap();

        assert!(token.is_none());

        Ok(())
    }
}

//! Where the API client gets the visitor's access token from.

use std::future::Future;

use secrecy::SecretString;
use tower_sessions::Session;

use crate::models::session_keys;

/// Source of the bearer token attached to API requests.
///
/// A source that cannot produce a token (nothing stored, storage
/// unavailable) returns `None` and the request goes out unauthenticated.
pub trait TokenSource: Sync {
    /// Read the current access token, if any.
    fn access_token(&self) -> impl Future<Output = Option<SecretString>> + Send;
}

/// Never sends a token. Used for public endpoints.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoToken;

impl TokenSource for NoToken {
    async fn access_token(&self) -> Option<SecretString> {
        None
    }
}

/// A fixed token, e.g. one just returned by a login call.
impl TokenSource for SecretString {
    async fn access_token(&self) -> Option<SecretString> {
        Some(self.clone())
    }
}

/// The visitor's session, populated by the dashboard login.
impl TokenSource for Session {
    async fn access_token(&self) -> Option<SecretString> {
        match self.get::<String>(session_keys::ACCESS_TOKEN).await {
            Ok(token) => token.map(SecretString::from),
            Err(e) => {
                tracing::debug!(error = %e, "Session unreadable, sending request without token");
                None
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use std::sync::Arc;

    use secrecy::ExposeSecret;
    use tower_sessions::MemoryStore;

    use super::*;

    #[tokio::test]
    async fn test_no_token() {
        assert!(NoToken.access_token().await.is_none());
    }

    #[tokio::test]
    async fn test_fixed_token() {
        let token = SecretString::from("abc123");
        let read = token.access_token().await.unwrap();
        assert_eq!(read.expose_secret(), "abc123");
    }

    #[tokio::test]
    async fn test_empty_session_has_no_token() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        assert!(session.access_token().await.is_none());
    }

    #[tokio::test]
    async fn test_session_token() {
        let session = Session::new(None, Arc::new(MemoryStore::default()), None);
        session
            .insert(session_keys::ACCESS_TOKEN, "abc123")
            .await
            .unwrap();
        let read = session.access_token().await.unwrap();
        assert_eq!(read.expose_secret(), "abc123");
    }
}

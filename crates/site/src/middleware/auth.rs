//! Authentication extractors and session helpers for the dashboard.
//!
//! The backend owns authentication. The site only keeps the tokens the
//! login call returned in the visitor's session and forwards the access
//! token on every API request.

use axum::{
    extract::{FromRequestParts, OriginalUri},
    http::{StatusCode, request::Parts},
    response::{IntoResponse, Redirect, Response},
};
use tower_sessions::Session;

use crate::models::{CurrentUser, session_keys};

/// Where unauthenticated dashboard visitors are sent.
pub const LOGIN_PATH: &str = "/dashboard/login";

/// Extractor that requires a stored access token.
///
/// If there is none, HTML requests are redirected to the login page and
/// `/api/` requests get a 401.
///
/// # Example
///
/// ```rust,ignore
/// async fn handler(auth: RequireApiToken, State(state): State<AppState>) -> Result<_, AppError> {
///     let users = state.api().call(&auth.session, &ListUsers::default()).await?;
///     // ...
/// }
/// ```
#[derive(Debug, Clone)]
pub struct RequireApiToken {
    /// Session holding the token; pass it to the API client as the token source.
    pub session: Session,
    /// Signed-in user, when the login response included one.
    pub user: Option<CurrentUser>,
}

/// Error returned when a token is required but none is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthRejection {
    /// Redirect to login page (for HTML requests).
    RedirectToLogin,
    /// Unauthorized response (for API requests).
    Unauthorized,
}

impl IntoResponse for AuthRejection {
    fn into_response(self) -> Response {
        match self {
            Self::RedirectToLogin => Redirect::to(LOGIN_PATH).into_response(),
            Self::Unauthorized => StatusCode::UNAUTHORIZED.into_response(),
        }
    }
}

impl<S> FromRequestParts<S> for RequireApiToken
where
    S: Send + Sync,
{
    type Rejection = AuthRejection;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        // Nested routers see a stripped URI
        let path = parts
            .extensions
            .get::<OriginalUri>()
            .map_or_else(|| parts.uri.path(), |uri| uri.0.path());
        let rejection = if path.starts_with("/api/") {
            AuthRejection::Unauthorized
        } else {
            AuthRejection::RedirectToLogin
        };

        // Set by SessionManagerLayer
        let session = parts
            .extensions
            .get::<Session>()
            .cloned()
            .ok_or(AuthRejection::Unauthorized)?;

        let has_token = session
            .get::<String>(session_keys::ACCESS_TOKEN)
            .await
            .ok()
            .flatten()
            .is_some_and(|token| !token.is_empty());
        if !has_token {
            return Err(rejection);
        }

        let user = session
            .get::<CurrentUser>(session_keys::CURRENT_USER)
            .await
            .ok()
            .flatten();

        Ok(Self { session, user })
    }
}

/// Store the tokens and user returned by a successful login.
///
/// The session ID is cycled first so a pre-login session cookie cannot be
/// reused.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn store_login(
    session: &Session,
    token: &str,
    refresh_token: Option<&str>,
    user: Option<&CurrentUser>,
) -> Result<(), tower_sessions::session::Error> {
    session.cycle_id().await?;
    session.insert(session_keys::ACCESS_TOKEN, token).await?;
    if let Some(refresh_token) = refresh_token {
        session
            .insert(session_keys::REFRESH_TOKEN, refresh_token)
            .await?;
    }
    if let Some(user) = user {
        session.insert(session_keys::CURRENT_USER, user).await?;
    }
    Ok(())
}

/// Drop everything stored for the visitor (logout).
///
/// # Errors
///
/// Returns an error if the session cannot be flushed.
pub async fn clear_login(session: &Session) -> Result<(), tower_sessions::session::Error> {
    session.flush().await
}

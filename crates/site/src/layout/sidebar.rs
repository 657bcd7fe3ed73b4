//! Dashboard sidebar state.
//!
//! [`sidebar_provider`] is layered on the dashboard router only. It reads
//! the persisted state from the session and installs a [`SidebarContext`]
//! into request extensions. Handlers and templates reach it through
//! [`use_sidebar`] or the [`UseSidebar`] extractor, which fail with
//! [`SidebarError::MissingProvider`] anywhere the provider is not layered.

use axum::{
    extract::{FromRequestParts, Request},
    http::{Extensions, StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tower_sessions::Session;

use crate::models::session_keys;

/// Whether the sidebar shows labels or icons only.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SidebarState {
    #[default]
    Expanded,
    Collapsed,
}

impl SidebarState {
    /// The other state.
    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Expanded => Self::Collapsed,
            Self::Collapsed => Self::Expanded,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Expanded => "expanded",
            Self::Collapsed => "collapsed",
        }
    }
}

/// Shared sidebar state for one dashboard request.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SidebarContext {
    pub state: SidebarState,
    /// Mobile drawer open (`?sidebar=open`).
    pub mobile_open: bool,
}

impl SidebarContext {
    #[must_use]
    pub fn is_collapsed(&self) -> bool {
        self.state == SidebarState::Collapsed
    }
}

/// Errors from the sidebar accessor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SidebarError {
    #[error("useSidebar must be used within a SidebarProvider")]
    MissingProvider,
}

impl IntoResponse for SidebarError {
    fn into_response(self) -> Response {
        tracing::error!(error = %self, "Sidebar context requested outside the dashboard");
        (StatusCode::INTERNAL_SERVER_ERROR, self.to_string()).into_response()
    }
}

/// The sidebar context installed by [`sidebar_provider`].
///
/// # Errors
///
/// Returns [`SidebarError::MissingProvider`] if no provider ran for this
/// request.
pub fn use_sidebar(extensions: &Extensions) -> Result<&SidebarContext, SidebarError> {
    extensions
        .get::<SidebarContext>()
        .ok_or(SidebarError::MissingProvider)
}

/// Extractor over [`use_sidebar`]; rejects with a 500 outside the provider.
#[derive(Debug, Clone, Copy)]
pub struct UseSidebar(pub SidebarContext);

impl<S> FromRequestParts<S> for UseSidebar
where
    S: Send + Sync,
{
    type Rejection = SidebarError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        use_sidebar(&parts.extensions).copied().map(Self)
    }
}

/// Middleware that installs the [`SidebarContext`] for dashboard requests.
pub async fn sidebar_provider(session: Session, mut request: Request, next: Next) -> Response {
    let state = match session.get::<SidebarState>(session_keys::SIDEBAR).await {
        Ok(state) => state.unwrap_or_default(),
        Err(e) => {
            tracing::warn!(error = %e, "Failed to read sidebar state from session");
            SidebarState::default()
        }
    };
    let mobile_open = request
        .uri()
        .query()
        .is_some_and(|query| query.split('&').any(|pair| pair == "sidebar=open"));

    request
        .extensions_mut()
        .insert(SidebarContext { state, mobile_open });
    next.run(request).await
}

/// Persist a new sidebar state.
///
/// # Errors
///
/// Returns an error if the session cannot be modified.
pub async fn store_sidebar_state(
    session: &Session,
    state: SidebarState,
) -> Result<(), tower_sessions::session::Error> {
    session.insert(session_keys::SIDEBAR, state).await
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_provider() {
        let extensions = Extensions::new();
        let err = use_sidebar(&extensions).unwrap_err();
        assert_eq!(err, SidebarError::MissingProvider);
        assert!(err.to_string().contains("SidebarProvider"));
    }

    #[test]
    fn test_returns_the_installed_object() {
        let mut extensions = Extensions::new();
        extensions.insert(SidebarContext {
            state: SidebarState::Collapsed,
            mobile_open: true,
        });

        let first = use_sidebar(&extensions).unwrap();
        let second = use_sidebar(&extensions).unwrap();
        assert!(std::ptr::eq(first, second));
        assert!(first.is_collapsed());
        assert!(first.mobile_open);
    }

    #[test]
    fn test_toggle() {
        assert_eq!(SidebarState::Expanded.toggled(), SidebarState::Collapsed);
        assert_eq!(SidebarState::Collapsed.toggled(), SidebarState::Expanded);
    }

    #[test]
    fn test_rejection_is_server_error() {
        let response = SidebarError::MissingProvider.into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    async fn sidebar_label(UseSidebar(sidebar): UseSidebar) -> String {
        format!("{} {}", sidebar.state.as_str(), sidebar.mobile_open)
    }

    async fn send(app: axum::Router, uri: &str) -> Response {
        use tower::ServiceExt;

        app.oneshot(
            Request::builder()
                .uri(uri)
                .body(axum::body::Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
    }

    #[tokio::test]
    async fn test_extractor_without_provider_layer() {
        let app = axum::Router::new().route("/", axum::routing::get(sidebar_label));
        let response = send(app, "/").await;
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
    }

    #[tokio::test]
    async fn test_provider_layer_installs_context() {
        use tower_sessions::{MemoryStore, SessionManagerLayer};

        let app = axum::Router::new()
            .route("/", axum::routing::get(sidebar_label))
            .layer(axum::middleware::from_fn(sidebar_provider))
            .layer(SessionManagerLayer::new(MemoryStore::default()));

        let response = send(app, "/?sidebar=open").await;
        assert_eq!(response.status(), StatusCode::OK);
        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        assert_eq!(&body[..], b"expanded true");
    }
}

//! Application state shared across handlers.

use std::sync::Arc;

use axum::http::HeaderValue;

use crate::api::{ApiClient, ApiError};
use crate::config::SiteConfig;
use crate::content::{ContentError, ContentStore};
use crate::middleware::content_security_policy;

/// Error building the application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("API client: {0}")]
    Api(#[from] ApiError),
    #[error("content: {0}")]
    Content(#[from] ContentError),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`. Everything in it is
/// read-only after startup.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    api: ApiClient,
    content: ContentStore,
    csp: HeaderValue,
}

impl AppState {
    /// Create the application state, loading content from
    /// `config.content_dir`.
    ///
    /// # Errors
    ///
    /// Returns an error if the API client cannot be built or the content
    /// directory cannot be read.
    pub fn new(config: SiteConfig) -> Result<Self, StateError> {
        let content = ContentStore::load(&config.content_dir)?;
        Self::with_content(config, content)
    }

    /// Create the application state with already-loaded content.
    ///
    /// # Errors
    ///
    /// Returns an error if the API client cannot be built.
    pub fn with_content(config: SiteConfig, content: ContentStore) -> Result<Self, StateError> {
        let api = ApiClient::new(&config.api)?;
        let csp = content_security_policy(config.api.origin().as_deref());

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                api,
                content,
                csp,
            }),
        })
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the backend API client.
    #[must_use]
    pub fn api(&self) -> &ApiClient {
        &self.inner.api
    }

    /// Get a reference to the loaded markdown content.
    #[must_use]
    pub fn content(&self) -> &ContentStore {
        &self.inner.content
    }

    /// Content-Security-Policy header value.
    #[must_use]
    pub fn csp(&self) -> &HeaderValue {
        &self.inner.csp
    }

    /// Public base URL, without trailing slash.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.inner.config.base_url
    }
}

//! Client for the portfolio backend API.
//!
//! # Architecture
//!
//! - One low-level operation, [`ApiClient::request`], that attaches the
//!   bearer token (when the visitor has one), forces a JSON content type,
//!   and turns any non-2xx/3xx status into [`ApiError::Http`]
//! - A typed layer on top, [`ApiClient::call`], where each [`Endpoint`]
//!   fixes its method, path, body, and payload type
//! - No retries, no timeouts, no caching: every call is one round trip
//!
//! # Example
//!
//! ```rust,ignore
//! use portfolio_site::api::{ApiClient, endpoints::ListCategories, NoToken};
//!
//! let client = ApiClient::new(&config.api)?;
//!
//! // Raw JSON
//! let value = client.request(&NoToken, "/users", RequestOptions::default()).await?;
//!
//! // Typed, with the session's token
//! let categories = client.call(&session, &ListCategories::default()).await?;
//! ```

mod client;
pub mod endpoints;
mod token;

pub use client::{ApiClient, RequestOptions};
pub use endpoints::{Endpoint, ListQuery};
pub use token::{NoToken, TokenSource};

use thiserror::Error;

/// Errors that can occur when talking to the backend.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a status outside 2xx/3xx.
    ///
    /// Only the status is kept; whatever error body the backend sent is
    /// discarded.
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },

    /// The request never produced a response (DNS, connect, TLS, body read).
    #[error("Transport error: {0}")]
    Transport(#[from] reqwest::Error),

    /// The response body was not the expected JSON shape.
    #[error("JSON parse error: {0}")]
    Decode(#[from] serde_json::Error),

    /// A header could not be built (e.g., a token with control characters).
    #[error("Invalid header: {0}")]
    InvalidHeader(String),
}

impl ApiError {
    /// HTTP status for [`ApiError::Http`], `None` otherwise.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Http { status } => Some(*status),
            _ => None,
        }
    }

    /// Whether the backend rejected the caller's credentials.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self, Self::Http { status: 401 | 403 })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_http_error_carries_status_in_message() {
        let err = ApiError::Http { status: 404 };
        assert_eq!(err.to_string(), "HTTP error! status: 404");
        assert_eq!(err.status(), Some(404));
        assert!(!err.is_unauthorized());
    }

    #[test]
    fn test_unauthorized_statuses() {
        assert!(ApiError::Http { status: 401 }.is_unauthorized());
        assert!(ApiError::Http { status: 403 }.is_unauthorized());
        assert!(!ApiError::InvalidHeader("x".to_string()).is_unauthorized());
    }
}

//! The uniform response envelope.
//!
//! Every backend endpoint answers with the same outer shape:
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Fetched",
//!   "data": {
//!     "data": [ ... ],
//!     "pagination": { "page": 1, "limit": 10, "total": 42, "totalPages": 5 },
//!     "user": { ... },
//!     "token": "...",
//!     "refreshToken": "..."
//!   }
//! }
//! ```
//!
//! Every part is optional. The payload type `T` is fixed per endpoint by the
//! site's API client instead of being left as untyped JSON.

use serde::{Deserialize, Serialize};

use super::user::User;

/// Pagination block attached to list responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
    pub page: u32,
    pub limit: u32,
    pub total: u64,
    pub total_pages: u32,
}

impl Pagination {
    /// Whether a page follows the current one.
    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.page < self.total_pages
    }

    /// Whether a page precedes the current one.
    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.page > 1
    }
}

/// The `data` container of an [`ApiResponse`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ResponseData<T> {
    /// Endpoint payload (`data` on the wire, `items` on older endpoints).
    #[serde(
        default = "none",
        rename = "data",
        alias = "items",
        skip_serializing_if = "Option::is_none"
    )]
    pub items: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pagination: Option<Pagination>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<User>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refresh_token: Option<String>,
}

// `#[serde(default)]` on a generic field would require `T: Default`.
const fn none<T>() -> Option<T> {
    None
}

/// Response envelope returned by every backend endpoint.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    #[serde(default = "none", skip_serializing_if = "Option::is_none")]
    pub data: Option<ResponseData<T>>,
}

// Manual impl: the derive would demand `T: Default`.
impl<T> Default for ApiResponse<T> {
    fn default() -> Self {
        Self {
            success: None,
            message: None,
            data: None,
        }
    }
}

impl<T> ApiResponse<T> {
    /// The payload, if the backend sent one.
    #[must_use]
    pub fn items(&self) -> Option<&T> {
        self.data.as_ref().and_then(|d| d.items.as_ref())
    }

    /// Consume the envelope and return the payload.
    #[must_use]
    pub fn into_items(self) -> Option<T> {
        self.data.and_then(|d| d.items)
    }

    /// Pagination block, if any.
    #[must_use]
    pub fn pagination(&self) -> Option<&Pagination> {
        self.data.as_ref().and_then(|d| d.pagination.as_ref())
    }

    /// Authenticated user carried by auth responses.
    #[must_use]
    pub fn user(&self) -> Option<&User> {
        self.data.as_ref().and_then(|d| d.user.as_ref())
    }

    /// Access token carried by auth responses.
    #[must_use]
    pub fn token(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.token.as_deref())
    }

    /// Refresh token carried by auth responses.
    #[must_use]
    pub fn refresh_token(&self) -> Option<&str> {
        self.data.as_ref().and_then(|d| d.refresh_token.as_deref())
    }

    /// Whether the backend flagged the call as failed.
    ///
    /// A missing `success` flag counts as success.
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.success == Some(false)
    }
}

impl<T> ApiResponse<Vec<T>> {
    /// Total number of records: the pagination total when present,
    /// otherwise the length of the returned page.
    #[must_use]
    pub fn total(&self) -> u64 {
        self.pagination().map_or_else(
            || self.items().map_or(0, |items| items.len() as u64),
            |p| p.total,
        )
    }
}

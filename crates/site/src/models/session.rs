//! Session-related types.
//!
//! The dashboard login stores the backend's tokens and a summary of the
//! signed-in user here; the API client reads the access token back on every
//! request.

use serde::{Deserialize, Serialize};

use portfolio_core::{Role, User, UserId};

/// Session-stored user identity.
///
/// Minimal data kept in the session to greet the signed-in user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrentUser {
    /// Backend user ID.
    pub id: UserId,
    /// Email address.
    pub email: String,
    /// Display name.
    pub name: String,
    /// Role, defaulting to `USER` when the backend omits it.
    pub role: Role,
}

impl From<&User> for CurrentUser {
    fn from(user: &User) -> Self {
        Self {
            id: user.id.clone(),
            email: user.email.clone(),
            name: user.name.clone(),
            role: user.role_or_default(),
        }
    }
}

/// Session keys.
pub mod keys {
    /// Bearer token attached to API requests.
    pub const ACCESS_TOKEN: &str = "access_token";

    /// Refresh token returned by the login call.
    pub const REFRESH_TOKEN: &str = "refresh_token";

    /// Key for storing the current signed-in user.
    pub const CURRENT_USER: &str = "current_user";

    /// Dashboard sidebar state.
    pub const SIDEBAR: &str = "sidebar";
}

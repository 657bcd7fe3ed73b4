//! Users and authentication payloads.

use serde::{Deserialize, Deserializer, Serialize};

use crate::types::UserId;

/// Account role.
///
/// The backend only ever issues these two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Role {
    Admin,
    #[default]
    User,
}

impl Role {
    /// Label used in the dashboard.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::User => "User",
        }
    }
}

/// Reference to a file uploaded to the backend's media host.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadedFile {
    /// Public URL of the file.
    pub url: String,
    /// Media host identifier, used by the backend to replace or delete.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub public_id: Option<String>,
    /// Name the file was uploaded under.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub filename: Option<String>,
}

/// Social profile links shown on the about page and in the footer.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SocialLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub twitter: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// A user as returned by the backend.
///
/// The password never appears here: it is write-only and only exists on
/// [`LoginRequest`] and [`RegisterRequest`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    /// Backend identifier (`_id` on some endpoints).
    #[serde(alias = "_id")]
    pub id: UserId,
    pub email: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    /// The backend sends `null` for users who never set any links.
    #[serde(default, deserialize_with = "null_as_default")]
    pub social_links: SocialLinks,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<UploadedFile>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub resume: Option<UploadedFile>,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

impl User {
    /// Whether the user may manage content in the dashboard.
    #[must_use]
    pub fn is_admin(&self) -> bool {
        self.role == Some(Role::Admin)
    }

    /// Role shown in listings; the backend treats a missing role as `USER`.
    #[must_use]
    pub fn role_or_default(&self) -> Role {
        self.role.unwrap_or_default()
    }
}

/// Credentials for `POST /auth/login`.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

/// Payload for `POST /auth/register`.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub role: Option<Role>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_role_wire_format() {
        assert_eq!(serde_json::to_string(&Role::Admin).unwrap(), "\"ADMIN\"");
        let role: Role = serde_json::from_str("\"USER\"").unwrap();
        assert_eq!(role, Role::User);
    }

    #[test]
    fn test_role_rejects_unknown_values() {
        let result: Result<Role, _> = serde_json::from_str("\"EDITOR\"");
        assert!(result.is_err());
    }

    #[test]
    fn test_user_accepts_mongo_style_id_and_sparse_profile() {
        let user: User = serde_json::from_value(json!({
            "_id": "u1",
            "email": "me@charbelsnn.com",
            "name": "Charbel",
            "role": "ADMIN",
            "socialLinks": { "github": "https://github.com/charbelsnn" },
            "avatar": { "url": "https://cdn.example.com/a.png", "publicId": "a" }
        }))
        .unwrap();

        assert_eq!(user.id.as_str(), "u1");
        assert!(user.is_admin());
        assert_eq!(
            user.social_links.github.as_deref(),
            Some("https://github.com/charbelsnn")
        );
        assert_eq!(user.avatar.unwrap().public_id.as_deref(), Some("a"));
        assert!(user.resume.is_none());
    }

    #[test]
    fn test_null_social_links_read_as_empty() {
        let user: User = serde_json::from_value(json!({
            "id": "u3",
            "email": "new@example.com",
            "name": "New",
            "socialLinks": null
        }))
        .unwrap();
        assert_eq!(user.social_links, SocialLinks::default());
    }

    #[test]
    fn test_missing_role_defaults_to_user_for_display() {
        let user: User = serde_json::from_value(json!({
            "id": "u2",
            "email": "guest@example.com",
            "name": "Guest"
        }))
        .unwrap();
        assert_eq!(user.role_or_default(), Role::User);
        assert!(!user.is_admin());
    }

    #[test]
    fn test_register_request_omits_unset_role() {
        let body = serde_json::to_value(RegisterRequest {
            name: "A".to_string(),
            email: "a@example.com".to_string(),
            password: "hunter22".to_string(),
            role: None,
        })
        .unwrap();
        assert!(body.get("role").is_none());
        assert_eq!(body["password"], "hunter22");
    }
}

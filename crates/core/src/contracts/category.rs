//! Blog/project categories.

use serde::{Deserialize, Serialize};

use crate::types::CategoryId;

/// A category as returned by the backend.
///
/// The backend keeps `slug` unique; nothing on this side checks it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    #[serde(alias = "_id")]
    pub id: CategoryId,
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// CSS color, e.g. `#0ea5e9`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    /// Icon name from the site's icon set.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<String>,
}

/// Payload for creating or updating a category.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryInput {
    pub name: String,
    pub slug: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub icon: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_category_from_backend() {
        let category: Category = serde_json::from_value(json!({
            "_id": "c1",
            "name": "Rust",
            "slug": "rust",
            "color": "#b7410e",
            "createdAt": "2024-02-01T10:00:00.000Z"
        }))
        .unwrap();
        assert_eq!(category.slug, "rust");
        assert_eq!(category.color.as_deref(), Some("#b7410e"));
        assert!(category.description.is_none());
    }

    #[test]
    fn test_input_skips_empty_optionals() {
        let body = serde_json::to_value(CategoryInput {
            name: "Web".to_string(),
            slug: "web".to_string(),
            ..CategoryInput::default()
        })
        .unwrap();
        assert_eq!(body, json!({ "name": "Web", "slug": "web" }));
    }
}

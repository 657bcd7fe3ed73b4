//! Contact form messages.

use serde::{Deserialize, Serialize};

use crate::types::ContactId;

/// A message sent through the contact form.
///
/// Only `name`, `email` and `message` are required; the backend decides
/// what else it accepts.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub phone: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
}

/// A stored contact message, as listed in the dashboard inbox.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contact {
    #[serde(alias = "_id")]
    pub id: ContactId,
    #[serde(flatten)]
    pub message: ContactMessage,
    #[serde(default)]
    pub read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_message_requires_core_fields_only() {
        let body = serde_json::to_value(ContactMessage {
            name: "Ada".to_string(),
            email: "ada@example.com".to_string(),
            message: "Hello".to_string(),
            ..ContactMessage::default()
        })
        .unwrap();
        assert_eq!(
            body,
            json!({ "name": "Ada", "email": "ada@example.com", "message": "Hello" })
        );
    }

    #[test]
    fn test_stored_contact_flattens_message() {
        let contact: Contact = serde_json::from_value(json!({
            "_id": "m1",
            "name": "Ada",
            "email": "ada@example.com",
            "subject": "Work",
            "message": "Are you available?",
            "company": "Analytical Engines",
            "createdAt": "2025-03-04T09:00:00Z"
        }))
        .unwrap();
        assert_eq!(contact.id.as_str(), "m1");
        assert_eq!(contact.message.subject.as_deref(), Some("Work"));
        assert_eq!(contact.message.company.as_deref(), Some("Analytical Engines"));
        assert!(!contact.read);
    }
}

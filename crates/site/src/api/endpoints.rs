//! Typed backend endpoints.
//!
//! Each endpoint fixes its method, path, JSON body, and the payload type
//! carried in the response envelope's `data` slot.

use reqwest::Method;
use serde::de::{DeserializeOwned, IgnoredAny};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use url::{Url, form_urlencoded};

use portfolio_core::{
    Category, CategoryId, CategoryInput, Contact, ContactId, ContactMessage, Education,
    EducationId, EducationInput, LoginRequest, RegisterRequest, User,
};

/// A single backend endpoint.
pub trait Endpoint {
    /// Payload type of the envelope's `data` slot.
    type Data: DeserializeOwned;

    /// HTTP method.
    fn method(&self) -> Method {
        Method::GET
    }

    /// Path (plus query string) appended to the API base URL.
    fn path(&self) -> String;

    /// JSON request body.
    ///
    /// # Errors
    ///
    /// Returns error if the body cannot be serialized.
    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        Ok(None)
    }
}

/// Optional `page`/`limit` parameters for list endpoints.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct ListQuery {
    pub page: Option<u32>,
    pub limit: Option<u32>,
}

impl ListQuery {
    /// Append the query string (if any) to a path.
    fn apply(self, path: &str) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if let Some(page) = self.page {
            query.append_pair("page", &page.to_string());
        }
        if let Some(limit) = self.limit {
            query.append_pair("limit", &limit.to_string());
        }
        let query = query.finish();
        if query.is_empty() {
            path.to_string()
        } else {
            format!("{path}?{query}")
        }
    }
}

/// Encode an id for use as a single path segment.
///
/// Uses path-segment escaping (space is `%20`, not `+`). Dot segments are
/// escaped by hand since `url` drops them when pushing.
fn segment(id: &str) -> String {
    match id {
        "." => return "%2E".to_string(),
        ".." => return "%2E%2E".to_string(),
        _ => {}
    }
    let Ok(mut base) = Url::parse("http://segment.invalid/") else {
        return String::new();
    };
    if let Ok(mut segments) = base.path_segments_mut() {
        segments.pop_if_empty().push(id);
    }
    base.path().trim_start_matches('/').to_string()
}

fn json<T: Serialize>(body: &T) -> Result<Option<Value>, serde_json::Error> {
    serde_json::to_value(body).map(Some)
}

// =============================================================================
// Auth
// =============================================================================

/// `POST /auth/login`. The token and user come back in the envelope's
/// auth fields, not in `data`.
#[derive(Debug)]
pub struct Login(pub LoginRequest);

impl Endpoint for Login {
    type Data = IgnoredAny;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/auth/login".to_string()
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        json(&self.0)
    }
}

/// `POST /auth/register`.
#[derive(Debug)]
pub struct Register(pub RegisterRequest);

impl Endpoint for Register {
    type Data = IgnoredAny;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/auth/register".to_string()
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        json(&self.0)
    }
}

/// `GET /auth/me`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CurrentUser;

impl Endpoint for CurrentUser {
    type Data = User;

    fn path(&self) -> String {
        "/auth/me".to_string()
    }
}

/// `POST /auth/logout`.
#[derive(Debug, Clone, Copy, Default)]
pub struct Logout;

impl Endpoint for Logout {
    type Data = IgnoredAny;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/auth/logout".to_string()
    }
}

// =============================================================================
// Users
// =============================================================================

/// `GET /users`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListUsers(pub ListQuery);

impl Endpoint for ListUsers {
    type Data = Vec<User>;

    fn path(&self) -> String {
        self.0.apply("/users")
    }
}

// =============================================================================
// Categories
// =============================================================================

/// `GET /categories`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListCategories(pub ListQuery);

impl Endpoint for ListCategories {
    type Data = Vec<Category>;

    fn path(&self) -> String {
        self.0.apply("/categories")
    }
}

/// `POST /categories`.
#[derive(Debug)]
pub struct CreateCategory(pub CategoryInput);

impl Endpoint for CreateCategory {
    type Data = Category;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/categories".to_string()
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        json(&self.0)
    }
}

/// `DELETE /categories/{id}`.
#[derive(Debug)]
pub struct DeleteCategory(pub CategoryId);

impl Endpoint for DeleteCategory {
    type Data = IgnoredAny;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("/categories/{}", segment(self.0.as_str()))
    }
}

// =============================================================================
// Contacts
// =============================================================================

/// `POST /contacts`. Public; sent from the contact form.
#[derive(Debug)]
pub struct SendContact(pub ContactMessage);

impl Endpoint for SendContact {
    type Data = Contact;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/contacts".to_string()
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        json(&self.0)
    }
}

/// `GET /contacts`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListContacts(pub ListQuery);

impl Endpoint for ListContacts {
    type Data = Vec<Contact>;

    fn path(&self) -> String {
        self.0.apply("/contacts")
    }
}

/// `DELETE /contacts/{id}`.
#[derive(Debug)]
pub struct DeleteContact(pub ContactId);

impl Endpoint for DeleteContact {
    type Data = IgnoredAny;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("/contacts/{}", segment(self.0.as_str()))
    }
}

// =============================================================================
// Education
// =============================================================================

/// `GET /education`.
#[derive(Debug, Clone, Copy, Default)]
pub struct ListEducation(pub ListQuery);

impl Endpoint for ListEducation {
    type Data = Vec<Education>;

    fn path(&self) -> String {
        self.0.apply("/education")
    }
}

/// `POST /education`.
#[derive(Debug)]
pub struct CreateEducation(pub EducationInput);

impl Endpoint for CreateEducation {
    type Data = Education;

    fn method(&self) -> Method {
        Method::POST
    }

    fn path(&self) -> String {
        "/education".to_string()
    }

    fn body(&self) -> Result<Option<Value>, serde_json::Error> {
        json(&self.0)
    }
}

/// `DELETE /education/{id}`.
#[derive(Debug)]
pub struct DeleteEducation(pub EducationId);

impl Endpoint for DeleteEducation {
    type Data = IgnoredAny;

    fn method(&self) -> Method {
        Method::DELETE
    }

    fn path(&self) -> String {
        format!("/education/{}", segment(self.0.as_str()))
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_list_paths() {
        assert_eq!(ListCategories::default().path(), "/categories");
        assert_eq!(
            ListContacts(ListQuery {
                page: Some(2),
                limit: Some(20)
            })
            .path(),
            "/contacts?page=2&limit=20"
        );
        assert_eq!(
            ListUsers(ListQuery {
                page: None,
                limit: Some(5)
            })
            .path(),
            "/users?limit=5"
        );
    }

    #[test]
    fn test_delete_escapes_id() {
        let endpoint = DeleteCategory(CategoryId::new("a/b c"));
        assert_eq!(endpoint.method(), Method::DELETE);
        assert_eq!(endpoint.path(), "/categories/a%2Fb%20c");
    }

    #[test]
    fn test_id_segment_keeps_plus_and_escapes_dots() {
        assert_eq!(DeleteContact(ContactId::new("a+b")).path(), "/contacts/a+b");
        assert_eq!(
            DeleteEducation(EducationId::new("..")).path(),
            "/education/%2E%2E"
        );
        assert_eq!(segment("100%"), "100%25");
    }

    #[test]
    fn test_login_body() {
        let endpoint = Login(LoginRequest {
            email: "me@charbelsnn.com".to_string(),
            password: "hunter2".to_string(),
        });
        assert_eq!(endpoint.method(), Method::POST);
        assert_eq!(
            endpoint.body().unwrap().unwrap(),
            json!({ "email": "me@charbelsnn.com", "password": "hunter2" })
        );
    }

    #[test]
    fn test_get_endpoints_have_no_body() {
        assert_eq!(CurrentUser.method(), Method::GET);
        assert!(CurrentUser.body().unwrap().is_none());
        assert!(ListEducation::default().body().unwrap().is_none());
    }
}

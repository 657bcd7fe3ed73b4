//! Contact form route handlers.
//!
//! Messages are forwarded to the backend's public `POST /contacts`
//! endpoint; the form re-renders with a confirmation or an error.

use askama::Template;
use askama_web::WebTemplate;
use axum::{Form, extract::State, http::StatusCode, response::IntoResponse};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use portfolio_core::ContactMessage;

use crate::api::endpoints::SendContact;
use crate::filters;
use crate::layout::{PageContext, RouteLayout, ShellLayout};
use crate::seo::RouteKey;
use crate::state::AppState;

pub const LAYOUT: RouteLayout = RouteLayout::new(RouteKey::Contact);

/// Contact form data.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub subject: String,
    pub message: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub company: String,
    #[serde(default)]
    pub website: String,
}

impl ContactForm {
    /// Whether a required field was left blank.
    fn missing_required(&self) -> bool {
        [&self.name, &self.email, &self.message]
            .iter()
            .any(|field| field.trim().is_empty())
    }
}

impl From<&ContactForm> for ContactMessage {
    fn from(form: &ContactForm) -> Self {
        Self {
            name: form.name.trim().to_string(),
            email: form.email.trim().to_string(),
            subject: non_empty(&form.subject),
            message: form.message.trim().to_string(),
            phone: non_empty(&form.phone),
            company: non_empty(&form.company),
            website: non_empty(&form.website),
        }
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Contact page template.
#[derive(Template, WebTemplate)]
#[template(path = "contact.html")]
pub struct ContactTemplate {
    pub page: PageContext,
    /// Values to refill the form with after a failed submission.
    pub form: ContactForm,
    pub success: bool,
    pub error: Option<String>,
}

/// Display the contact form.
#[instrument(skip(state, shell))]
pub async fn show(State(state): State<AppState>, shell: ShellLayout) -> impl IntoResponse {
    ContactTemplate {
        page: LAYOUT.page(shell, state.base_url()),
        form: ContactForm::default(),
        success: false,
        error: None,
    }
}

/// Submit the contact form.
#[instrument(skip(state, session, shell, form), fields(email = %form.email))]
pub async fn submit(
    State(state): State<AppState>,
    session: Session,
    shell: ShellLayout,
    Form(form): Form<ContactForm>,
) -> impl IntoResponse {
    let page = LAYOUT.page(shell, state.base_url());

    if form.missing_required() {
        return (
            StatusCode::UNPROCESSABLE_ENTITY,
            ContactTemplate {
                page,
                form,
                success: false,
                error: Some("Name, email, and message are required.".to_string()),
            },
        );
    }

    match state
        .api()
        .call(&session, &SendContact(ContactMessage::from(&form)))
        .await
    {
        Ok(response) if !response.is_failure() => {
            tracing::info!("Contact message sent");
            (
                StatusCode::OK,
                ContactTemplate {
                    page,
                    form: ContactForm::default(),
                    success: true,
                    error: None,
                },
            )
        }
        Ok(response) => {
            tracing::warn!(message = ?response.message, "Backend refused contact message");
            (
                StatusCode::UNPROCESSABLE_ENTITY,
                ContactTemplate {
                    page,
                    form,
                    success: false,
                    error: Some(
                        response
                            .message
                            .unwrap_or_else(|| "Your message could not be sent.".to_string()),
                    ),
                },
            )
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to send contact message");
            (
                StatusCode::BAD_GATEWAY,
                ContactTemplate {
                    page,
                    form,
                    success: false,
                    error: Some("Something went wrong. Please try again later.".to_string()),
                },
            )
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_optionals_are_dropped() {
        let form = ContactForm {
            name: " Ada ".to_string(),
            email: "ada@example.com".to_string(),
            subject: "  ".to_string(),
            message: "Hello".to_string(),
            company: "Analytical Engines".to_string(),
            ..ContactForm::default()
        };
        let message = ContactMessage::from(&form);
        assert_eq!(message.name, "Ada");
        assert_eq!(message.subject, None);
        assert_eq!(message.company.as_deref(), Some("Analytical Engines"));
        assert!(!form.missing_required());
    }

    #[test]
    fn test_missing_required() {
        let form = ContactForm {
            name: "Ada".to_string(),
            email: String::new(),
            message: "Hello".to_string(),
            ..ContactForm::default()
        };
        assert!(form.missing_required());
    }
}

//! Dashboard contact message inbox.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use tracing::instrument;

use portfolio_core::{Contact, ContactId, Pagination};

use crate::api::ListQuery;
use crate::api::endpoints::{DeleteContact, ListContacts};
use crate::error::AppError;
use crate::filters;
use crate::layout::{ShellLayout, UseSidebar};
use crate::middleware::RequireApiToken;
use crate::routes::dashboard::{DashboardContext, FlashQuery, after_mutation};
use crate::state::AppState;

const PATH: &str = "/dashboard/contacts";
const PAGE_SIZE: u32 = 20;

/// Contacts page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/contacts.html")]
pub struct ContactsTemplate {
    pub dash: DashboardContext,
    pub contacts: Vec<Contact>,
    pub pagination: Option<Pagination>,
    pub previous_href: Option<String>,
    pub next_href: Option<String>,
}

fn page_href(page: u32) -> String {
    format!("{PATH}?page={page}")
}

/// List contact messages, one page at a time.
///
/// # Errors
///
/// Returns an error if the list call fails.
#[instrument(skip(state, auth, shell, sidebar, flash))]
pub async fn index(
    State(state): State<AppState>,
    auth: RequireApiToken,
    shell: ShellLayout,
    sidebar: UseSidebar,
    Query(query): Query<ListQuery>,
    Query(flash): Query<FlashQuery>,
) -> Result<impl IntoResponse, AppError> {
    let query = ListQuery {
        page: Some(query.page.unwrap_or(1).max(1)),
        limit: Some(query.limit.unwrap_or(PAGE_SIZE).clamp(1, 100)),
    };
    let response = state
        .api()
        .call(&auth.session, &ListContacts(query))
        .await?;
    let pagination = response.pagination().copied();
    let previous_href = pagination
        .filter(Pagination::has_previous)
        .map(|p| page_href(p.page - 1));
    let next_href = pagination
        .filter(Pagination::has_next)
        .map(|p| page_href(p.page + 1));

    Ok(ContactsTemplate {
        dash: DashboardContext::new(&state, shell, sidebar, &auth, "Contacts", &flash),
        contacts: response.into_items().unwrap_or_default(),
        pagination,
        previous_href,
        next_href,
    })
}

/// Delete a contact message.
///
/// # Errors
///
/// Returns an error if the backend rejects the stored token.
#[instrument(skip(state, auth))]
pub async fn delete(
    State(state): State<AppState>,
    auth: RequireApiToken,
    Path(id): Path<String>,
) -> Result<Redirect, AppError> {
    let result = state
        .api()
        .call(&auth.session, &DeleteContact(ContactId::new(id)))
        .await;
    after_mutation(PATH, result, "deleted")
}

//! Dashboard overview.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    extract::{Query, State},
    response::IntoResponse,
};
use tracing::instrument;

use crate::api::endpoints::{ListCategories, ListContacts, ListEducation};
use crate::error::AppError;
use crate::filters;
use crate::layout::{ShellLayout, UseSidebar};
use crate::middleware::RequireApiToken;
use crate::routes::dashboard::{DashboardContext, FlashQuery};
use crate::state::AppState;

/// A labelled record count linking to its section.
#[derive(Clone)]
pub struct CountCard {
    pub label: &'static str,
    pub href: &'static str,
    pub count: u64,
}

/// Overview page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/overview.html")]
pub struct OverviewTemplate {
    pub dash: DashboardContext,
    pub cards: Vec<CountCard>,
}

/// Display record counts for each section.
///
/// # Errors
///
/// Returns an error if any of the list calls fails.
#[instrument(skip_all)]
pub async fn show(
    State(state): State<AppState>,
    auth: RequireApiToken,
    shell: ShellLayout,
    sidebar: UseSidebar,
    Query(flash): Query<FlashQuery>,
) -> Result<impl IntoResponse, AppError> {
    let api = state.api();
    let categories = api.call(&auth.session, &ListCategories::default()).await?;
    let contacts = api.call(&auth.session, &ListContacts::default()).await?;
    let education = api.call(&auth.session, &ListEducation::default()).await?;

    let cards = vec![
        CountCard {
            label: "Categories",
            href: "/dashboard/categories",
            count: categories.total(),
        },
        CountCard {
            label: "Contact messages",
            href: "/dashboard/contacts",
            count: contacts.total(),
        },
        CountCard {
            label: "Education entries",
            href: "/dashboard/education",
            count: education.total(),
        },
    ];

    Ok(OverviewTemplate {
        dash: DashboardContext::new(&state, shell, sidebar, &auth, "Overview", &flash),
        cards,
    })
}

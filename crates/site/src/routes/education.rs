//! Education page route handler.
//!
//! Entries come from the backend. If it cannot be reached the page still
//! renders, with a notice instead of the timeline.

use askama::Template;
use askama_web::WebTemplate;
use axum::{extract::State, response::IntoResponse};
use tower_sessions::Session;
use tracing::instrument;

use portfolio_core::Education;

use crate::api::endpoints::ListEducation;
use crate::filters;
use crate::layout::{PageContext, RouteLayout, ShellLayout};
use crate::seo::RouteKey;
use crate::state::AppState;

pub const LAYOUT: RouteLayout = RouteLayout::new(RouteKey::Education);

/// Education entry for templates.
#[derive(Clone)]
pub struct EducationView {
    pub degree: String,
    pub school: String,
    pub field_of_study: Option<String>,
    pub location: Option<String>,
    pub description: Option<String>,
    pub grade: Option<String>,
    pub period: String,
    pub current: bool,
}

impl From<&Education> for EducationView {
    fn from(entry: &Education) -> Self {
        Self {
            degree: entry.degree.clone(),
            school: entry.school.clone(),
            field_of_study: entry.field_of_study.clone(),
            location: entry.location.clone(),
            description: entry.description.clone(),
            grade: entry.grade.clone(),
            period: entry.period(),
            current: entry.current,
        }
    }
}

/// Education page template.
#[derive(Template, WebTemplate)]
#[template(path = "education.html")]
pub struct EducationTemplate {
    pub page: PageContext,
    pub entries: Vec<EducationView>,
    /// The backend could not be reached.
    pub unavailable: bool,
}

/// Display the education timeline, newest first.
#[instrument(skip(state, session, shell))]
pub async fn show(
    State(state): State<AppState>,
    session: Session,
    shell: ShellLayout,
) -> impl IntoResponse {
    let (entries, unavailable) = match state
        .api()
        .call(&session, &ListEducation::default())
        .await
    {
        Ok(response) => {
            let mut entries = response.into_items().unwrap_or_default();
            entries.sort_by(|a, b| b.start_date.cmp(&a.start_date));
            (entries.iter().map(EducationView::from).collect(), false)
        }
        Err(e) => {
            tracing::error!(error = %e, "Failed to fetch education entries");
            (Vec::new(), true)
        }
    };

    EducationTemplate {
        page: LAYOUT.page(shell, state.base_url()),
        entries,
        unavailable,
    }
}

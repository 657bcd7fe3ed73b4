//! Dashboard education management.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use portfolio_core::{DateError, Education, EducationId, EducationInput, IsoDate};

use crate::api::endpoints::{CreateEducation, DeleteEducation, ListEducation};
use crate::error::AppError;
use crate::filters;
use crate::layout::{ShellLayout, UseSidebar};
use crate::middleware::RequireApiToken;
use crate::routes::dashboard::{DashboardContext, FlashQuery, after_mutation};
use crate::routes::education::EducationView;
use crate::state::AppState;

const PATH: &str = "/dashboard/education";

/// Education creation form.
#[derive(Debug, Default, Deserialize)]
pub struct EducationForm {
    pub degree: String,
    pub school: String,
    #[serde(default)]
    pub field_of_study: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub grade: String,
    pub start_date: String,
    #[serde(default)]
    pub end_date: String,
    /// Checkbox: present as `"on"` when ticked.
    #[serde(default)]
    pub current: Option<String>,
}

/// Why an education form could not be converted.
#[derive(Debug, PartialEq, Eq)]
pub enum FormError {
    Missing,
    Date(DateError),
}

impl FormError {
    const fn code(&self) -> &'static str {
        match self {
            Self::Missing => "missing",
            Self::Date(_) => "invalid_date",
        }
    }
}

impl EducationForm {
    fn into_input(self) -> Result<EducationInput, FormError> {
        let degree = self.degree.trim().to_string();
        let school = self.school.trim().to_string();
        if degree.is_empty() || school.is_empty() {
            return Err(FormError::Missing);
        }

        let current = self.current.is_some();
        let start_date = IsoDate::parse(&self.start_date).map_err(FormError::Date)?;
        let end_date = match self.end_date.trim() {
            _ if current => None,
            "" => None,
            end => Some(IsoDate::parse(end).map_err(FormError::Date)?),
        };

        Ok(EducationInput {
            degree,
            school,
            field_of_study: non_empty(&self.field_of_study),
            location: non_empty(&self.location),
            description: non_empty(&self.description),
            grade: non_empty(&self.grade),
            start_date,
            end_date,
            current,
        })
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Dashboard row: display fields plus the id for the delete form.
pub struct EducationRow {
    pub id: EducationId,
    pub view: EducationView,
}

/// Education page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/education.html")]
pub struct EducationTemplate {
    pub dash: DashboardContext,
    pub entries: Vec<EducationRow>,
}

/// List education entries with a create form.
///
/// # Errors
///
/// Returns an error if the list call fails.
#[instrument(skip_all)]
pub async fn index(
    State(state): State<AppState>,
    auth: RequireApiToken,
    shell: ShellLayout,
    sidebar: UseSidebar,
    Query(flash): Query<FlashQuery>,
) -> Result<impl IntoResponse, AppError> {
    let mut entries: Vec<Education> = state
        .api()
        .call(&auth.session, &ListEducation::default())
        .await?
        .into_items()
        .unwrap_or_default();
    entries.sort_by(|a, b| b.start_date.cmp(&a.start_date));

    Ok(EducationTemplate {
        dash: DashboardContext::new(&state, shell, sidebar, &auth, "Education", &flash),
        entries: entries
            .iter()
            .map(|entry| EducationRow {
                id: entry.id.clone(),
                view: EducationView::from(entry),
            })
            .collect(),
    })
}

/// Create an education entry.
///
/// # Errors
///
/// Returns an error if the backend rejects the stored token.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    auth: RequireApiToken,
    Form(form): Form<EducationForm>,
) -> Result<Redirect, AppError> {
    let input = match form.into_input() {
        Ok(input) => input,
        Err(e) => {
            tracing::debug!(error = ?e, "Invalid education form");
            return Ok(Redirect::to(&format!("{PATH}?error={}", e.code())));
        }
    };
    let result = state
        .api()
        .call(&auth.session, &CreateEducation(input))
        .await;
    after_mutation(PATH, result, "created")
}

/// Delete an education entry.
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
        .call(&auth.session, &DeleteEducation(EducationId::new(id)))
        .await;
    after_mutation(PATH, result, "deleted")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> EducationForm {
        EducationForm {
            degree: "BSc Computer Science".to_string(),
            school: "Lebanese University".to_string(),
            start_date: "2019-09-01".to_string(),
            end_date: "2022-06-30".to_string(),
            ..EducationForm::default()
        }
    }

    #[test]
    fn test_completed_entry() {
        let input = form().into_input().unwrap();
        assert!(!input.current);
        assert_eq!(input.end_date.unwrap().to_string(), "2022-06-30");
        assert!(input.grade.is_none());
    }

    #[test]
    fn test_current_checkbox_drops_end_date() {
        let input = EducationForm {
            current: Some("on".to_string()),
            ..form()
        }
        .into_input()
        .unwrap();
        assert!(input.current);
        assert!(input.end_date.is_none());
    }

    #[test]
    fn test_bad_date() {
        let err = EducationForm {
            start_date: "September 2019".to_string(),
            ..form()
        }
        .into_input()
        .unwrap_err();
        assert_eq!(err.code(), "invalid_date");
    }

    #[test]
    fn test_missing_school() {
        let err = EducationForm {
            school: " ".to_string(),
            ..form()
        }
        .into_input()
        .unwrap_err();
        assert_eq!(err, FormError::Missing);
    }
}

//! Dashboard category management.

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Form,
    extract::{Path, Query, State},
    response::{IntoResponse, Redirect},
};
use serde::Deserialize;
use tracing::instrument;

use portfolio_core::{Category, CategoryId, CategoryInput};

use crate::api::endpoints::{CreateCategory, DeleteCategory, ListCategories};
use crate::error::AppError;
use crate::filters;
use crate::layout::{ShellLayout, UseSidebar};
use crate::middleware::RequireApiToken;
use crate::routes::dashboard::{DashboardContext, FlashQuery, after_mutation};
use crate::state::AppState;

const PATH: &str = "/dashboard/categories";

/// Category creation form.
#[derive(Debug, Default, Deserialize)]
pub struct CategoryForm {
    pub name: String,
    #[serde(default)]
    pub slug: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub color: String,
}

impl CategoryForm {
    /// Convert into the backend payload. `None` when the name is blank.
    fn into_input(self) -> Option<CategoryInput> {
        let name = self.name.trim().to_string();
        if name.is_empty() {
            return None;
        }
        let slug = match self.slug.trim() {
            "" => slugify(&name),
            slug => slugify(slug),
        };
        Some(CategoryInput {
            name,
            slug,
            description: non_empty(&self.description),
            color: non_empty(&self.color),
            icon: None,
        })
    }
}

/// Lowercase ASCII alphanumerics joined by single hyphens.
fn slugify(value: &str) -> String {
    value
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|part| !part.is_empty())
        .map(str::to_ascii_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}

/// Category page template.
#[derive(Template, WebTemplate)]
#[template(path = "dashboard/categories.html")]
pub struct CategoriesTemplate {
    pub dash: DashboardContext,
    pub categories: Vec<Category>,
}

/// List categories with a create form.
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
    let categories = state
        .api()
        .call(&auth.session, &ListCategories::default())
        .await?
        .into_items()
        .unwrap_or_default();

    Ok(CategoriesTemplate {
        dash: DashboardContext::new(&state, shell, sidebar, &auth, "Categories", &flash),
        categories,
    })
}

/// Create a category.
///
/// # Errors
///
/// Returns an error if the backend rejects the stored token.
#[instrument(skip_all)]
pub async fn create(
    State(state): State<AppState>,
    auth: RequireApiToken,
    Form(form): Form<CategoryForm>,
) -> Result<Redirect, AppError> {
    let Some(input) = form.into_input() else {
        return Ok(Redirect::to(&format!("{PATH}?error=missing")));
    };
    let result = state
        .api()
        .call(&auth.session, &CreateCategory(input))
        .await;
    after_mutation(PATH, result, "created")
}

/// Delete a category.
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
        .call(&auth.session, &DeleteCategory(CategoryId::new(id)))
        .await;
    after_mutation(PATH, result, "deleted")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_slug_derived_from_name() {
        let input = CategoryForm {
            name: "  Rust & Systems ".to_string(),
            ..CategoryForm::default()
        }
        .into_input()
        .unwrap();
        assert_eq!(input.name, "Rust & Systems");
        assert_eq!(input.slug, "rust-systems");
        assert!(input.description.is_none());
    }

    #[test]
    fn test_explicit_slug_is_normalized() {
        let input = CategoryForm {
            name: "Web".to_string(),
            slug: "Front End".to_string(),
            color: "#0af".to_string(),
            ..CategoryForm::default()
        }
        .into_input()
        .unwrap();
        assert_eq!(input.slug, "front-end");
        assert_eq!(input.color.as_deref(), Some("#0af"));
    }

    #[test]
    fn test_blank_name_is_rejected() {
        let form = CategoryForm {
            name: "   ".to_string(),
            ..CategoryForm::default()
        };
        assert!(form.into_input().is_none());
    }
}

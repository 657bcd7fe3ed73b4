//! About page route handler.

use axum::{extract::State, response::IntoResponse};
use tracing::instrument;

use crate::error::AppError;
use crate::layout::{RouteLayout, ShellLayout};
use crate::routes::pages;
use crate::seo::RouteKey;
use crate::state::AppState;

pub const LAYOUT: RouteLayout = RouteLayout::new(RouteKey::About);

/// Display the about page from `content/pages/about.md`.
///
/// # Errors
///
/// Returns 404 if the markdown file is missing.
#[instrument(skip(state, shell))]
pub async fn show(
    State(state): State<AppState>,
    shell: ShellLayout,
) -> Result<impl IntoResponse, AppError> {
    pages::render(&state, LAYOUT, shell, "about")
}

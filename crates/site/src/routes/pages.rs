//! Markdown-backed content pages (about, experience, projects).

use askama::Template;
use askama_web::WebTemplate;
use chrono::NaiveDate;

use crate::error::AppError;
use crate::filters;
use crate::layout::{PageContext, RouteLayout, ShellLayout};
use crate::state::AppState;

/// Content page template.
#[derive(Template, WebTemplate)]
#[template(path = "pages/content.html")]
pub struct ContentPageTemplate {
    pub page: PageContext,
    pub heading: String,
    pub updated_at: Option<NaiveDate>,
    pub content_html: String,
}

/// Render the content page `slug` under `layout`.
///
/// # Errors
///
/// Returns 404 if no markdown file exists for `slug`.
pub fn render(
    state: &AppState,
    layout: RouteLayout,
    shell: ShellLayout,
    slug: &str,
) -> Result<ContentPageTemplate, AppError> {
    let content = state
        .content()
        .get_page(slug)
        .ok_or_else(|| AppError::NotFound(format!("page {slug}")))?;

    let mut page = layout.page(shell, state.base_url());
    if let Some(description) = &content.meta.description {
        page = page.with_description(description);
    }

    Ok(ContentPageTemplate {
        page,
        heading: content.meta.title.clone(),
        updated_at: content.meta.updated_at,
        content_html: content.content_html.clone(),
    })
}

//! Dashboard route handlers.
//!
//! Everything under `/dashboard` renders without the site header and footer
//! and draws its own sidebar. All pages except the login form require a
//! stored API token ([`RequireApiToken`]).
//!
//! # Route Structure
//!
//! ```text
//! GET  /dashboard                          - Overview with record counts
//! GET  /dashboard/login                    - Login form (posts to /api/auth/login)
//! GET  /dashboard/categories               - Category list + create form
//! POST /dashboard/categories               - Create category
//! POST /dashboard/categories/{id}/delete   - Delete category
//! GET  /dashboard/contacts                 - Contact messages (paginated)
//! POST /dashboard/contacts/{id}/delete     - Delete contact message
//! GET  /dashboard/education                - Education list + create form
//! POST /dashboard/education                - Create education entry
//! POST /dashboard/education/{id}/delete    - Delete education entry
//! GET  /dashboard/users                    - User list
//! POST /dashboard/sidebar                  - Toggle sidebar (persisted in session)
//! ```

pub mod categories;
pub mod contacts;
pub mod education;
pub mod overview;
pub mod users;

use axum::{
    Router,
    http::{HeaderMap, header::REFERER},
    middleware,
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use serde::Deserialize;
use tower_sessions::Session;
use tracing::instrument;

use portfolio_core::ApiResponse;

use crate::api::ApiError;
use crate::error::AppError;
use crate::layout::{
    PageContext, RouteLayout, ShellLayout, SidebarContext, UseSidebar, sidebar_provider,
    store_sidebar_state,
};
use crate::middleware::RequireApiToken;
use crate::models::CurrentUser;
use crate::routes::auth;
use crate::seo::RouteKey;
use crate::state::AppState;

pub const LAYOUT: RouteLayout = RouteLayout::new(RouteKey::Dashboard);

/// Sidebar navigation entries.
pub const NAV: [(&str, &str); 5] = [
    ("/dashboard", "Overview"),
    ("/dashboard/categories", "Categories"),
    ("/dashboard/contacts", "Contacts"),
    ("/dashboard/education", "Education"),
    ("/dashboard/users", "Users"),
];

/// Query parameters carrying the outcome of the last form submission.
#[derive(Debug, Default, Deserialize)]
pub struct FlashQuery {
    pub notice: Option<String>,
    pub error: Option<String>,
}

impl FlashQuery {
    fn notice_message(&self) -> Option<&'static str> {
        self.notice.as_deref().map(|code| match code {
            "created" => "Saved.",
            "deleted" => "Deleted.",
            _ => "Done.",
        })
    }

    fn error_message(&self) -> Option<&'static str> {
        self.error.as_deref().map(|code| match code {
            "rejected" => "The server rejected the request.",
            "invalid_date" => "Dates must be written as YYYY-MM-DD.",
            "missing" => "Please fill in the required fields.",
            _ => "The request failed. Please try again.",
        })
    }
}

/// Everything the dashboard layout template reads.
#[derive(Debug, Clone)]
pub struct DashboardContext {
    pub page: PageContext,
    pub sidebar: SidebarContext,
    pub user: Option<CurrentUser>,
    pub heading: &'static str,
    pub notice: Option<&'static str>,
    pub error: Option<&'static str>,
}

impl DashboardContext {
    /// Build the context for a dashboard page.
    #[must_use]
    pub fn new(
        state: &AppState,
        shell: ShellLayout,
        UseSidebar(sidebar): UseSidebar,
        auth: &RequireApiToken,
        heading: &'static str,
        flash: &FlashQuery,
    ) -> Self {
        Self {
            page: LAYOUT.page(shell, state.base_url()).with_title(heading),
            sidebar,
            user: auth.user.clone(),
            heading,
            notice: flash.notice_message(),
            error: flash.error_message(),
        }
    }

    /// Sidebar navigation entries.
    #[must_use]
    pub const fn nav(&self) -> &'static [(&'static str, &'static str)] {
        &NAV
    }

    /// Whether `href` is the current dashboard page.
    ///
    /// Unlike site navigation, `/dashboard` only matches itself.
    #[must_use]
    pub fn is_current(&self, href: &str) -> bool {
        if href == "/dashboard" {
            self.page.shell.path().trim_end_matches('/') == "/dashboard"
        } else {
            self.page.shell.is_active(href)
        }
    }
}

/// Redirect after a create/delete form, carrying the outcome in the query.
///
/// # Errors
///
/// Returns the API error when the backend rejected the credentials, so the
/// visitor is sent back to the login page.
pub fn after_mutation<T>(
    path: &str,
    result: Result<ApiResponse<T>, ApiError>,
    notice: &str,
) -> Result<Redirect, AppError> {
    match result {
        Ok(response) if !response.is_failure() => {
            Ok(Redirect::to(&format!("{path}?notice={notice}")))
        }
        Ok(response) => {
            tracing::warn!(path, message = ?response.message, "Backend refused change");
            Ok(Redirect::to(&format!("{path}?error=rejected")))
        }
        Err(e) if e.is_unauthorized() => Err(e.into()),
        Err(e) => {
            tracing::warn!(path, error = %e, "Dashboard change failed");
            Ok(Redirect::to(&format!("{path}?error=failed")))
        }
    }
}

/// Toggle the sidebar and go back to the page the form was posted from.
#[instrument(skip_all)]
pub async fn toggle_sidebar(
    UseSidebar(sidebar): UseSidebar,
    session: Session,
    headers: HeaderMap,
) -> Result<Response, AppError> {
    store_sidebar_state(&session, sidebar.state.toggled()).await?;

    // Only follow same-site dashboard referers
    let back = headers
        .get(REFERER)
        .and_then(|value| value.to_str().ok())
        .and_then(|referer| url::Url::parse(referer).ok())
        .map(|url| url.path().to_string())
        .filter(|path| path.starts_with("/dashboard"))
        .unwrap_or_else(|| "/dashboard".to_string());

    Ok(Redirect::to(&back).into_response())
}

/// Create the dashboard routes router.
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(overview::show))
        .route("/login", get(auth::login_page))
        .route(
            "/categories",
            get(categories::index).post(categories::create),
        )
        .route("/categories/{id}/delete", post(categories::delete))
        .route("/contacts", get(contacts::index))
        .route("/contacts/{id}/delete", post(contacts::delete))
        .route("/education", get(education::index).post(education::create))
        .route("/education/{id}/delete", post(education::delete))
        .route("/users", get(users::index))
        .route("/sidebar", post(toggle_sidebar))
        .layer(middleware::from_fn(sidebar_provider))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::http::{StatusCode, header::LOCATION};
    use serde::de::IgnoredAny;

    use super::*;

    fn location(redirect: Redirect) -> String {
        let response = redirect.into_response();
        assert_eq!(response.status(), StatusCode::SEE_OTHER);
        response.headers()[LOCATION].to_str().unwrap().to_string()
    }

    #[test]
    fn test_after_mutation_outcomes() {
        let ok: Result<ApiResponse<IgnoredAny>, ApiError> = Ok(ApiResponse::default());
        assert_eq!(
            location(after_mutation("/dashboard/categories", ok, "created").unwrap()),
            "/dashboard/categories?notice=created"
        );

        let refused = Ok(ApiResponse::<IgnoredAny> {
            success: Some(false),
            ..ApiResponse::default()
        });
        assert_eq!(
            location(after_mutation("/dashboard/categories", refused, "created").unwrap()),
            "/dashboard/categories?error=rejected"
        );

        let failed: Result<ApiResponse<IgnoredAny>, ApiError> =
            Err(ApiError::Http { status: 500 });
        assert_eq!(
            location(after_mutation("/dashboard/education", failed, "deleted").unwrap()),
            "/dashboard/education?error=failed"
        );
    }

    #[test]
    fn test_after_mutation_propagates_expired_token() {
        let expired: Result<ApiResponse<IgnoredAny>, ApiError> =
            Err(ApiError::Http { status: 401 });
        let err = after_mutation("/dashboard/contacts", expired, "deleted").unwrap_err();
        assert!(err.is_unauthorized());
    }

    #[test]
    fn test_flash_messages() {
        let flash = FlashQuery {
            notice: Some("deleted".to_string()),
            error: Some("invalid_date".to_string()),
        };
        assert_eq!(flash.notice_message(), Some("Deleted."));
        assert!(flash.error_message().unwrap().contains("YYYY-MM-DD"));
        assert_eq!(FlashQuery::default().notice_message(), None);
    }

    #[test]
    fn test_overview_link_only_matches_itself() {
        let context = |path: &str| DashboardContext {
            page: LAYOUT.page(ShellLayout::for_path(path), "https://charbelsnn.com"),
            sidebar: SidebarContext::default(),
            user: None,
            heading: "Test",
            notice: None,
            error: None,
        };

        assert!(context("/dashboard").is_current("/dashboard"));
        assert!(!context("/dashboard/users").is_current("/dashboard"));
        assert!(context("/dashboard/users").is_current("/dashboard/users"));
    }
}

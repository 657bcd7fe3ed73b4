//! HTTP route handlers for the portfolio site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page
//! GET  /about                  - About (markdown)
//! GET  /blog                   - Blog index
//! GET  /blog/{slug}            - Blog post
//! GET  /contact                - Contact form
//! POST /contact                - Send contact message
//! GET  /education              - Education timeline (from the API)
//! GET  /experience             - Experience (markdown)
//! GET  /github-stats           - GitHub statistics cards
//! GET  /projects               - Projects (markdown)
//!
//! # Dashboard (see `dashboard`)
//! GET  /dashboard/...
//!
//! # Auth API
//! POST /api/auth/login         - Login form target
//! POST /api/auth/logout        - Logout
//!
//! # Infrastructure
//! GET  /health                 - Liveness probe
//! GET  /robots.txt             - Crawler policy
//! GET  /sitemap.xml            - Sitemap
//! GET  /site.webmanifest       - Web app manifest
//! GET  /static/*               - Static assets
//! ```
//!
//! Anything else renders the not-found page inside the shell for its path.

pub mod about;
pub mod auth;
pub mod blog;
pub mod contact;
pub mod dashboard;
pub mod education;
pub mod experience;
pub mod github_stats;
pub mod home;
pub mod manifest;
pub mod pages;
pub mod projects;
pub mod seo;

use askama::Template;
use askama_web::WebTemplate;
use axum::{
    Router,
    extract::State,
    http::StatusCode,
    middleware,
    response::IntoResponse,
    routing::{get, post},
};
use tower_http::{services::ServeDir, trace::TraceLayer};

use crate::filters;
use crate::layout::{PageContext, ShellLayout};
use crate::middleware::{create_session_layer, security_headers_middleware};
use crate::state::AppState;

/// Create the auth API router.
pub fn auth_api_routes() -> Router<AppState> {
    Router::new()
        .route("/login", post(auth::login))
        .route("/logout", post(auth::logout))
}

/// Create the public content routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(home::home))
        .route("/about", get(about::show))
        .nest("/blog", blog::router())
        .route("/contact", get(contact::show).post(contact::submit))
        .route("/education", get(education::show))
        .route("/experience", get(experience::show))
        .route("/github-stats", get(github_stats::show))
        .route("/projects", get(projects::show))
        .nest("/dashboard", dashboard::router())
        .nest("/api/auth", auth_api_routes())
        .route("/robots.txt", get(seo::robots))
        .route("/sitemap.xml", get(seo::sitemap))
        .route("/site.webmanifest", get(manifest::webmanifest))
}

/// Build the complete application router with its middleware stack.
///
/// Sentry layers are added by the binary so tests run without them.
pub fn router(state: AppState) -> Router {
    let session_layer = create_session_layer(state.config());
    let static_dir = ServeDir::new(&state.config().static_dir);

    Router::new()
        .route("/health", get(health))
        .merge(routes())
        .nest_service("/static", static_dir)
        .fallback(not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            security_headers_middleware,
        ))
        .layer(session_layer)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check the backend.
async fn health() -> &'static str {
    "ok"
}

/// Not-found page template.
#[derive(Template, WebTemplate)]
#[template(path = "not_found.html")]
pub struct NotFoundTemplate {
    pub page: PageContext,
}

/// Fallback for unmatched paths.
async fn not_found(State(state): State<AppState>, shell: ShellLayout) -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        NotFoundTemplate {
            page: PageContext::not_found(shell, state.base_url()),
        },
    )
}

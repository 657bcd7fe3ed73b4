//! Crawler-facing documents: `robots.txt` and `sitemap.xml`.

use axum::{
    extract::State,
    http::header,
    response::{IntoResponse, Response},
};

use crate::seo::{RobotsPolicy, render_sitemap, sitemap_entries};
use crate::state::AppState;

/// Serve `robots.txt` for the configured base URL.
pub async fn robots(State(state): State<AppState>) -> Response {
    (
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        RobotsPolicy::for_site(state.base_url()).render(),
    )
        .into_response()
}

/// Serve `sitemap.xml`: every public route plus published posts.
pub async fn sitemap(State(state): State<AppState>) -> Response {
    let entries = sitemap_entries(state.base_url(), state.content());
    (
        [(header::CONTENT_TYPE, "application/xml; charset=utf-8")],
        render_sitemap(&entries),
    )
        .into_response()
}

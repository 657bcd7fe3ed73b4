//! Web app manifest route handler.

use axum::{
    http::header,
    response::{IntoResponse, Response},
};

use crate::seo::metadata::SITE_NAME;

/// Serve the web app manifest.
pub async fn webmanifest() -> Response {
    let manifest = serde_json::json!({
        "name": SITE_NAME,
        "short_name": "CS",
        "start_url": "/",
        "icons": [
            {
                "src": "/static/favicon/android-chrome-192x192.png",
                "sizes": "192x192",
                "type": "image/png"
            },
            {
                "src": "/static/favicon/android-chrome-512x512.png",
                "sizes": "512x512",
                "type": "image/png"
            }
        ],
        "theme_color": "#0f172a",
        "background_color": "#ffffff",
        "display": "standalone"
    });

    (
        [(header::CONTENT_TYPE, "application/manifest+json")],
        manifest.to_string(),
    )
        .into_response()
}

//! Integration tests for the portfolio site.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p portfolio-integration-tests
//! ```
//!
//! Nothing external is needed: the site router is driven in-process with
//! `tower::ServiceExt::oneshot`, and the backend is replaced by a
//! [`StubApi`] bound to an ephemeral localhost port.
//!
//! # Test Categories
//!
//! - `site_routes` - Router, shell, SEO, and dashboard flows
//! - `api_client` - The API client against a real socket

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::missing_panics_doc)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use axum::{
    Json, Router,
    extract::State,
    http::{HeaderMap, StatusCode, header::AUTHORIZATION},
    response::IntoResponse,
    routing::{get, post},
};
use serde_json::{Value, json};

use portfolio_site::config::{ApiConfig, SentryConfig, SiteConfig};
use portfolio_site::state::AppState;

/// Token the stub backend hands out on a successful login.
pub const STUB_TOKEN: &str = "abc123";

/// Password the stub backend accepts.
pub const STUB_PASSWORD: &str = "correct horse";

/// Login email for which the stub leaves `user` out of the login response.
pub const STUB_NO_USER_EMAIL: &str = "nouser@charbelsnn.com";

/// Site configuration pointing at `api_base_url` and the real content tree.
#[must_use]
pub fn test_config(api_base_url: &str) -> SiteConfig {
    let site_dir = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../site");
    SiteConfig {
        host: "127.0.0.1".parse().unwrap(),
        port: 0,
        base_url: "https://charbelsnn.com".to_string(),
        api: ApiConfig {
            base_url: api_base_url.to_string(),
        },
        content_dir: site_dir.join("content"),
        static_dir: site_dir.join("static"),
        github_username: "charbelsnn".to_string(),
        sentry: SentryConfig::default(),
    }
}

/// Application state for `api_base_url`.
#[must_use]
pub fn test_state(api_base_url: &str) -> AppState {
    AppState::new(test_config(api_base_url)).expect("Failed to build test state")
}

/// API base URL nothing listens on.
pub const UNREACHABLE_API: &str = "http://127.0.0.1:9";

/// Minimal stand-in for the portfolio backend.
pub struct StubApi {
    pub base_url: String,
    seen: Arc<Mutex<Vec<Option<String>>>>,
}

impl StubApi {
    /// Bind to an ephemeral port and serve in the background.
    pub async fn spawn() -> Self {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let app = Router::new()
            .route("/auth/login", post(login))
            .route("/auth/logout", post(empty))
            .route("/auth/me", get(me))
            .route("/auth/register", post(register))
            .route("/users", get(users))
            .route("/categories", get(categories))
            .route("/contacts", get(contacts).post(sent))
            .route("/education", get(education))
            .route("/empty", get(empty))
            .route("/missing", get(missing))
            .with_state(Arc::clone(&seen));

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Failed to bind stub API");
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, app).await.ok();
        });

        Self {
            base_url: format!("http://{addr}"),
            seen,
        }
    }

    /// `Authorization` header of every request recorded so far, in order.
    #[must_use]
    pub fn authorizations(&self) -> Vec<Option<String>> {
        self.seen.lock().unwrap().clone()
    }
}

type Seen = Arc<Mutex<Vec<Option<String>>>>;

fn record(seen: &Seen, headers: &HeaderMap) {
    let auth = headers
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(String::from);
    seen.lock().unwrap().push(auth);
}

fn list(items: Value) -> Json<Value> {
    Json(json!({ "success": true, "data": { "data": items } }))
}

async fn login(State(seen): State<Seen>, headers: HeaderMap, Json(body): Json<Value>) -> impl IntoResponse {
    record(&seen, &headers);
    if body["password"] != STUB_PASSWORD {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "message": "Invalid credentials" })),
        );
    }
    let mut data = json!({ "token": STUB_TOKEN, "refreshToken": "r-456" });
    if body["email"] != STUB_NO_USER_EMAIL {
        data["user"] = json!({ "_id": "u1", "email": body["email"], "name": "Charbel", "role": "ADMIN" });
    }
    (StatusCode::OK, Json(json!({ "success": true, "data": data })))
}

async fn register(
    State(seen): State<Seen>,
    headers: HeaderMap,
    Json(body): Json<Value>,
) -> Json<Value> {
    record(&seen, &headers);
    let mut user = json!({ "_id": "u9", "email": body["email"], "name": body["name"] });
    if let Some(role) = body.get("role") {
        user["role"] = role.clone();
    }
    Json(json!({ "success": true, "data": { "user": user, "token": STUB_TOKEN } }))
}

async fn me(State(seen): State<Seen>, headers: HeaderMap) -> impl IntoResponse {
    record(&seen, &headers);
    let expected = format!("Bearer {STUB_TOKEN}");
    let auth = headers.get(AUTHORIZATION).and_then(|value| value.to_str().ok());
    if auth != Some(expected.as_str()) {
        return (
            StatusCode::UNAUTHORIZED,
            Json(json!({ "success": false, "message": "Unauthorized" })),
        );
    }
    (
        StatusCode::OK,
        list(json!({
            "_id": "u1",
            "email": STUB_NO_USER_EMAIL,
            "name": "Charbel",
            "role": "ADMIN"
        })),
    )
}

async fn users(State(seen): State<Seen>, headers: HeaderMap) -> Json<Value> {
    record(&seen, &headers);
    list(json!([
        { "_id": "u1", "email": "me@charbelsnn.com", "name": "Charbel", "role": "ADMIN" },
        { "_id": "u2", "email": "guest@example.com", "name": "Guest" }
    ]))
}

async fn categories(State(seen): State<Seen>, headers: HeaderMap) -> Json<Value> {
    record(&seen, &headers);
    list(json!([
        { "_id": "c1", "name": "Rust", "slug": "rust" },
        { "_id": "c2", "name": "Web", "slug": "web" }
    ]))
}

async fn contacts(State(seen): State<Seen>, headers: HeaderMap) -> Json<Value> {
    record(&seen, &headers);
    Json(json!({
        "success": true,
        "data": {
            "data": [
                { "_id": "m1", "name": "Ada", "email": "ada@example.com", "message": "Hello" }
            ],
            "pagination": { "page": 1, "limit": 1, "total": 12, "totalPages": 12 }
        }
    }))
}

async fn sent(State(seen): State<Seen>, headers: HeaderMap) -> Json<Value> {
    record(&seen, &headers);
    Json(json!({ "success": true, "message": "Message sent" }))
}

async fn education(State(seen): State<Seen>, headers: HeaderMap) -> Json<Value> {
    record(&seen, &headers);
    list(json!([
        {
            "_id": "e1",
            "degree": "BSc Computer Science",
            "school": "Lebanese University",
            "startDate": "2016-09-01",
            "endDate": "2019-06-30"
        },
        {
            "_id": "e2",
            "degree": "MSc Software Engineering",
            "school": "EPFL",
            "startDate": "2023-09-15T00:00:00.000Z",
            "current": true
        }
    ]))
}

async fn empty(State(seen): State<Seen>, headers: HeaderMap) -> StatusCode {
    record(&seen, &headers);
    StatusCode::OK
}

async fn missing(State(seen): State<Seen>, headers: HeaderMap) -> impl IntoResponse {
    record(&seen, &headers);
    (StatusCode::NOT_FOUND, "<html>not json</html>")
}

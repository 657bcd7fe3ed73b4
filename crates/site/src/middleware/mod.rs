//! HTTP middleware stack for the site.
//!
//! # Middleware Order (outermost first)
//!
//! 1. Sentry layers (capture errors, installed by the binary)
//! 2. `TraceLayer` (request tracing)
//! 3. Security headers (CSP, frame, referrer; `X-Robots-Tag` on the dashboard)
//! 4. Session layer (tower-sessions with in-memory store)
//! 5. Sidebar provider (dashboard router only)

pub mod auth;
pub mod security_headers;
pub mod session;

pub use auth::{AuthRejection, LOGIN_PATH, RequireApiToken, clear_login, store_login};
pub use security_headers::{content_security_policy, security_headers_middleware};
pub use session::create_session_layer;

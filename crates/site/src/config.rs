//! Site configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Required
//! - `PUBLIC_API_URL` - Base URL of the backend API (e.g., <https://api.charbelsnn.com>)
//! - `PUBLIC_BASE_URL` - Public URL of this site, used for canonical links,
//!   the sitemap, and crawler directives
//!
//! ## Optional
//! - `PORTFOLIO_HOST` - Bind address (default: 127.0.0.1)
//! - `PORTFOLIO_PORT` - Listen port (default: 3000)
//! - `PORTFOLIO_CONTENT_DIR` - Markdown content directory (default: crates/site/content)
//! - `PORTFOLIO_STATIC_DIR` - Static asset directory (default: crates/site/static)
//! - `GITHUB_USERNAME` - Account shown on the GitHub stats page (default: charbelsnn)
//! - `SENTRY_DSN` - Sentry error tracking DSN
//! - `SENTRY_ENVIRONMENT` - Sentry environment tag
//! - `SENTRY_SAMPLE_RATE` - Error sample rate (default: 1.0)
//! - `SENTRY_TRACES_SAMPLE_RATE` - Transaction sample rate (default: 0.1)

use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use thiserror::Error;
use url::Url;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Site configuration.
#[derive(Debug, Clone)]
pub struct SiteConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Public base URL of the site, without trailing slash
    pub base_url: String,
    /// Backend API configuration
    pub api: ApiConfig,
    /// Markdown content directory
    pub content_dir: PathBuf,
    /// Static asset directory served under `/static`
    pub static_dir: PathBuf,
    /// GitHub account shown on the stats page
    pub github_username: String,
    /// Sentry error tracking configuration
    pub sentry: SentryConfig,
}

/// Backend API configuration.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Base URL every endpoint path is appended to, without trailing slash
    pub base_url: String,
}

impl ApiConfig {
    /// Scheme + host (+ port) of the API, for CSP source lists.
    #[must_use]
    pub fn origin(&self) -> Option<String> {
        Url::parse(&self.base_url)
            .ok()
            .map(|url| url.origin().ascii_serialization())
            .filter(|origin| origin != "null")
    }
}

/// Sentry error tracking configuration.
#[derive(Debug, Clone)]
pub struct SentryConfig {
    /// Sentry DSN; tracking is disabled when absent
    pub dsn: Option<String>,
    /// Environment tag (e.g., production, staging)
    pub environment: Option<String>,
    /// Error event sample rate
    pub sample_rate: f32,
    /// Performance transaction sample rate
    pub traces_sample_rate: f32,
}

impl Default for SentryConfig {
    fn default() -> Self {
        Self {
            dsn: None,
            environment: None,
            sample_rate: 1.0,
            traces_sample_rate: 0.1,
        }
    }
}

impl SiteConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if required variables are missing or invalid.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("PORTFOLIO_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORTFOLIO_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("PORTFOLIO_PORT", "3000")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("PORTFOLIO_PORT".to_string(), e.to_string()))?;
        let base_url = get_url("PUBLIC_BASE_URL")?;
        let api = ApiConfig {
            base_url: get_url("PUBLIC_API_URL")?,
        };

        Ok(Self {
            host,
            port,
            base_url,
            api,
            content_dir: get_env_or_default("PORTFOLIO_CONTENT_DIR", "crates/site/content").into(),
            static_dir: get_env_or_default("PORTFOLIO_STATIC_DIR", "crates/site/static").into(),
            github_username: get_env_or_default("GITHUB_USERNAME", "charbelsnn"),
            sentry: SentryConfig::from_env()?,
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Whether the site is served over HTTPS (drives the `Secure` cookie flag).
    #[must_use]
    pub fn is_secure(&self) -> bool {
        self.base_url.starts_with("https://")
    }
}

impl SentryConfig {
    fn from_env() -> Result<Self, ConfigError> {
        Ok(Self {
            dsn: get_optional_env("SENTRY_DSN"),
            environment: get_optional_env("SENTRY_ENVIRONMENT"),
            sample_rate: get_rate("SENTRY_SAMPLE_RATE", 1.0)?,
            traces_sample_rate: get_rate("SENTRY_TRACES_SAMPLE_RATE", 0.1)?,
        })
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get a required environment variable.
fn get_required_env(key: &str) -> Result<String, ConfigError> {
    std::env::var(key).map_err(|_| ConfigError::MissingEnvVar(key.to_string()))
}

/// Get an optional environment variable, treating blank values as unset.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Get a required absolute http(s) URL, normalized without trailing slash.
fn get_url(key: &str) -> Result<String, ConfigError> {
    normalize_base_url(&get_required_env(key)?)
        .map_err(|reason| ConfigError::InvalidEnvVar(key.to_string(), reason))
}

/// Get a sample rate in `0.0..=1.0`.
fn get_rate(key: &str, default: f32) -> Result<f32, ConfigError> {
    let Some(raw) = get_optional_env(key) else {
        return Ok(default);
    };
    let rate = raw
        .parse::<f32>()
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if (0.0..=1.0).contains(&rate) {
        Ok(rate)
    } else {
        Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            format!("must be between 0.0 and 1.0 (got {rate})"),
        ))
    }
}

/// Validate an absolute http(s) URL and strip trailing slashes.
///
/// Endpoint paths are appended verbatim, so `https://api.example.com/` and
/// `https://api.example.com` must behave the same.
fn normalize_base_url(raw: &str) -> Result<String, String> {
    let trimmed = raw.trim();
    let url = Url::parse(trimmed).map_err(|e| e.to_string())?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(format!("unsupported scheme '{}'", url.scheme()));
    }
    if url.host_str().is_none() {
        return Err("URL must have a host".to_string());
    }
    Ok(trimmed.trim_end_matches('/').to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn test_config() -> SiteConfig {
        SiteConfig {
            host: "127.0.0.1".parse().unwrap(),
            port: 3000,
            base_url: "https://charbelsnn.com".to_string(),
            api: ApiConfig {
                base_url: "https://api.charbelsnn.com/v1".to_string(),
            },
            content_dir: PathBuf::from("content"),
            static_dir: PathBuf::from("static"),
            github_username: "charbelsnn".to_string(),
            sentry: SentryConfig::default(),
        }
    }

    #[test]
    fn test_normalize_strips_trailing_slash() {
        assert_eq!(
            normalize_base_url("https://api.example.com/").unwrap(),
            "https://api.example.com"
        );
        assert_eq!(
            normalize_base_url(" https://api.example.com/v1// ").unwrap(),
            "https://api.example.com/v1"
        );
    }

    #[test]
    fn test_normalize_rejects_relative_and_other_schemes() {
        assert!(normalize_base_url("/api").is_err());
        assert!(normalize_base_url("ftp://files.example.com").is_err());
    }

    #[test]
    fn test_socket_addr() {
        let addr = test_config().socket_addr();
        assert_eq!(addr.ip().to_string(), "127.0.0.1");
        assert_eq!(addr.port(), 3000);
    }

    #[test]
    fn test_is_secure() {
        let mut config = test_config();
        assert!(config.is_secure());
        config.base_url = "http://localhost:3000".to_string();
        assert!(!config.is_secure());
    }

    #[test]
    fn test_api_origin_drops_path() {
        let config = test_config();
        assert_eq!(
            config.api.origin().as_deref(),
            Some("https://api.charbelsnn.com")
        );
    }
}

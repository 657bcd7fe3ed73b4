//! The authenticated JSON request wrapper.

use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderName, HeaderValue};
use reqwest::{Method, Request};
use secrecy::{ExposeSecret, SecretString};
use serde_json::Value;

use portfolio_core::ApiResponse;

use super::{ApiError, Endpoint, TokenSource};
use crate::config::ApiConfig;

/// Per-call overrides for [`ApiClient::request`].
#[derive(Debug, Clone)]
pub struct RequestOptions {
    /// HTTP method (default: GET).
    pub method: Method,
    /// JSON body, sent verbatim.
    pub body: Option<Value>,
    /// Extra headers, applied last so they override the defaults.
    pub headers: HeaderMap,
}

impl Default for RequestOptions {
    fn default() -> Self {
        Self::new(Method::GET)
    }
}

impl RequestOptions {
    /// Options for the given method, no body, no extra headers.
    #[must_use]
    pub fn new(method: Method) -> Self {
        Self {
            method,
            body: None,
            headers: HeaderMap::new(),
        }
    }

    /// Attach a JSON body.
    #[must_use]
    pub fn json(mut self, body: Value) -> Self {
        self.body = Some(body);
        self
    }

    /// Add (or override) a header.
    #[must_use]
    pub fn header(mut self, name: HeaderName, value: HeaderValue) -> Self {
        self.headers.insert(name, value);
        self
    }
}

/// Client for the portfolio backend.
///
/// Cheap to clone; the underlying connection pool is shared.
#[derive(Debug, Clone)]
pub struct ApiClient {
    client: reqwest::Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client for the configured base URL.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(config: &ApiConfig) -> Result<Self, ApiError> {
        let client = reqwest::Client::builder()
            .user_agent(concat!("portfolio-site/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url.clone(),
        })
    }

    /// The configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute URL for an endpoint path. The path is appended verbatim.
    #[must_use]
    pub fn url_for(&self, endpoint: &str) -> String {
        format!("{}{endpoint}", self.base_url)
    }

    /// Build the outgoing request without sending it.
    ///
    /// Header precedence, lowest first: `Content-Type: application/json`,
    /// `Authorization: Bearer <token>` (only when a token is given), then
    /// the caller's headers.
    ///
    /// # Errors
    ///
    /// Returns error if the token is not a valid header value or the URL
    /// cannot be parsed.
    pub fn build_request(
        &self,
        token: Option<&SecretString>,
        endpoint: &str,
        options: &RequestOptions,
    ) -> Result<Request, ApiError> {
        let mut headers = HeaderMap::new();
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        if let Some(token) = token {
            let mut value = HeaderValue::from_str(&format!("Bearer {}", token.expose_secret()))
                .map_err(|e| ApiError::InvalidHeader(format!("authorization: {e}")))?;
            value.set_sensitive(true);
            headers.insert(AUTHORIZATION, value);
        }

        headers.extend(options.headers.clone());

        let mut builder = self
            .client
            .request(options.method.clone(), self.url_for(endpoint))
            .headers(headers);

        if let Some(body) = &options.body {
            builder = builder.body(serde_json::to_vec(body)?);
        }

        Ok(builder.build()?)
    }

    /// Issue a request and return the parsed JSON body.
    ///
    /// An empty body (e.g., `204 No Content`) comes back as `Value::Null`.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Http`] for any status outside 2xx/3xx; the body is not read
    /// - [`ApiError::Transport`] if the request fails in flight
    /// - [`ApiError::Decode`] if a success body is not JSON
    pub async fn request(
        &self,
        tokens: &impl TokenSource,
        endpoint: &str,
        options: RequestOptions,
    ) -> Result<Value, ApiError> {
        let token = tokens.access_token().await;
        let request = self.build_request(token.as_ref(), endpoint, &options)?;

        tracing::debug!(
            method = %options.method,
            endpoint,
            authenticated = token.is_some(),
            "API request"
        );

        let response = self.client.execute(request).await?;
        let status = response.status();

        if !(status.is_success() || status.is_redirection()) {
            tracing::warn!(
                method = %options.method,
                endpoint,
                status = status.as_u16(),
                "API request failed"
            );
            return Err(ApiError::Http {
                status: status.as_u16(),
            });
        }

        let bytes = response.bytes().await?;
        if bytes.iter().all(u8::is_ascii_whitespace) {
            return Ok(Value::Null);
        }

        Ok(serde_json::from_slice(&bytes)?)
    }

    /// Call a typed endpoint and decode the response envelope.
    ///
    /// # Errors
    ///
    /// Same as [`ApiClient::request`], plus [`ApiError::Decode`] when the
    /// body does not match the endpoint's envelope shape.
    pub async fn call<E: Endpoint>(
        &self,
        tokens: &impl TokenSource,
        endpoint: &E,
    ) -> Result<ApiResponse<E::Data>, ApiError> {
        let mut options = RequestOptions::new(endpoint.method());
        if let Some(body) = endpoint.body()? {
            options = options.json(body);
        }

        let value = self.request(tokens, &endpoint.path(), options).await?;
        if value.is_null() {
            return Ok(ApiResponse::default());
        }

        Ok(serde_json::from_value(value)?)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    fn client(base_url: &str) -> ApiClient {
        ApiClient::new(&ApiConfig {
            base_url: base_url.to_string(),
        })
        .unwrap()
    }

    #[test]
    fn test_request_without_token() {
        let client = client("https://api.example.com");
        let request = client
            .build_request(None, "/users", &RequestOptions::default())
            .unwrap();

        assert_eq!(request.method(), Method::GET);
        assert_eq!(request.url().as_str(), "https://api.example.com/users");
        assert_eq!(
            request.headers().get(CONTENT_TYPE).unwrap(),
            "application/json"
        );
        assert!(request.headers().get(AUTHORIZATION).is_none());
        assert!(request.body().is_none());
    }

    #[test]
    fn test_request_with_token() {
        let client = client("https://api.example.com");
        let token = SecretString::from("abc123");
        let request = client
            .build_request(Some(&token), "/users", &RequestOptions::default())
            .unwrap();

        assert_eq!(request.url().as_str(), "https://api.example.com/users");
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Bearer abc123"
        );
        assert!(request.headers().get(AUTHORIZATION).unwrap().is_sensitive());
    }

    #[test]
    fn test_caller_headers_override_defaults() {
        let client = client("https://api.example.com");
        let token = SecretString::from("abc123");
        let options = RequestOptions::new(Method::POST)
            .header(CONTENT_TYPE, HeaderValue::from_static("text/plain"))
            .header(AUTHORIZATION, HeaderValue::from_static("Basic Zm9vOmJhcg=="))
            .header(
                HeaderName::from_static("x-request-source"),
                HeaderValue::from_static("dashboard"),
            );
        let request = client
            .build_request(Some(&token), "/contacts", &options)
            .unwrap();

        assert_eq!(request.headers().get(CONTENT_TYPE).unwrap(), "text/plain");
        assert_eq!(
            request.headers().get(AUTHORIZATION).unwrap(),
            "Basic Zm9vOmJhcg=="
        );
        assert_eq!(
            request.headers().get("x-request-source").unwrap(),
            "dashboard"
        );
    }

    #[test]
    fn test_json_body_is_serialized() {
        let client = client("https://api.example.com");
        let options = RequestOptions::new(Method::POST).json(json!({ "name": "Rust" }));
        let request = client.build_request(None, "/categories", &options).unwrap();

        assert_eq!(request.method(), Method::POST);
        let body = request.body().and_then(reqwest::Body::as_bytes).unwrap();
        assert_eq!(body, br#"{"name":"Rust"}"#);
    }

    #[test]
    fn test_endpoint_appended_verbatim() {
        let client = client("https://api.example.com/v1");
        assert_eq!(
            client.url_for("/categories?page=2"),
            "https://api.example.com/v1/categories?page=2"
        );
    }

    #[test]
    fn test_token_with_newline_is_rejected() {
        let client = client("https://api.example.com");
        let token = SecretString::from("abc\n123");
        let result = client.build_request(Some(&token), "/users", &RequestOptions::default());
        assert!(matches!(result, Err(ApiError::InvalidHeader(_))));
    }
}

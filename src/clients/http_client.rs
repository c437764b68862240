//! HTTP client for Blink API communication.
//!
//! This module provides the [`HttpClient`] type for making authenticated
//! JSON POST requests to the Blink GraphQL endpoint.

use std::collections::HashMap;

use crate::clients::errors::{HttpError, HttpResponseError};
use crate::clients::http_response::HttpResponse;
use crate::config::{ApiEndpoint, ApiKey, BlinkConfig};

/// SDK version from Cargo.toml.
pub const SDK_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Header carrying the Blink API key.
pub const API_KEY_HEADER: &str = "X-API-KEY";

/// HTTP client for making requests to the Blink API.
///
/// The client handles:
/// - Default headers including User-Agent, Accept and Content-Type
/// - Attaching the API key to each request
/// - Returning non-2xx responses as [`HttpResponseError`] with the raw body
///
/// There is no retry logic: every call is exactly one round trip.
///
/// # Thread Safety
///
/// `HttpClient` is `Send + Sync`, making it safe to share across async tasks.
#[derive(Debug)]
pub struct HttpClient {
    /// The internal reqwest HTTP client.
    client: reqwest::Client,
    /// The GraphQL endpoint all requests are posted to.
    endpoint: ApiEndpoint,
    /// Default headers to include in all requests.
    default_headers: HashMap<String, String>,
}

// Verify HttpClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<HttpClient>();
};

impl HttpClient {
    /// Creates a new HTTP client from the configuration.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying reqwest client cannot
    /// be created (e.g., TLS initialization failure).
    pub fn new(config: &BlinkConfig) -> Result<Self, HttpError> {
        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let rust_version = env!("CARGO_PKG_RUST_VERSION");
        let user_agent =
            format!("{user_agent_prefix}Blink Invoice Library v{SDK_VERSION} | Rust {rust_version}");

        let mut default_headers = HashMap::new();
        default_headers.insert("User-Agent".to_string(), user_agent);
        default_headers.insert("Accept".to_string(), "application/json".to_string());
        default_headers.insert("Content-Type".to_string(), "application/json".to_string());

        let mut builder = reqwest::Client::builder().use_rustls_tls();
        if let Some(timeout) = config.timeout() {
            builder = builder.timeout(timeout);
        }
        let client = builder.build()?;

        Ok(Self {
            client,
            endpoint: config.endpoint().clone(),
            default_headers,
        })
    }

    /// Returns the endpoint for this client.
    #[must_use]
    pub const fn endpoint(&self) -> &ApiEndpoint {
        &self.endpoint
    }

    /// Posts a JSON body to the endpoint, authenticated with `api_key`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Network error occurs (`Network`)
    /// - Non-2xx response received (`Response`); the body is kept verbatim
    pub async fn post_json(
        &self,
        body: &serde_json::Value,
        api_key: &ApiKey,
    ) -> Result<HttpResponse, HttpError> {
        let mut req_builder = self.client.post(self.endpoint.as_ref());
        for (key, value) in &self.default_headers {
            req_builder = req_builder.header(key, value);
        }
        req_builder = req_builder
            .header(API_KEY_HEADER, api_key.as_ref())
            .body(body.to_string());

        tracing::debug!("POST {}", self.endpoint);
        let res = req_builder.send().await?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body_text = res.text().await?;
        let response = HttpResponse::new(code, headers, body_text);

        tracing::debug!("Received HTTP {} from {}", code, self.endpoint);

        if response.is_ok() {
            return Ok(response);
        }

        let error_reference = response.request_id().map(String::from);
        tracing::warn!(
            "HTTP {} from {} (request id: {})",
            code,
            self.endpoint,
            error_reference.as_deref().unwrap_or("none")
        );

        Err(HttpError::Response(HttpResponseError {
            code,
            body: response.body,
            error_reference,
        }))
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_client(config: &BlinkConfig) -> HttpClient {
        HttpClient::new(config).unwrap()
    }

    #[test]
    fn test_client_construction_uses_configured_endpoint() {
        let config = BlinkConfig::builder()
            .endpoint(ApiEndpoint::new("http://localhost:4002/graphql").unwrap())
            .build();
        let client = create_test_client(&config);

        assert_eq!(client.endpoint().as_ref(), "http://localhost:4002/graphql");
    }

    #[test]
    fn test_user_agent_header_format() {
        let client = create_test_client(&BlinkConfig::default());

        let user_agent = client.default_headers.get("User-Agent").unwrap();
        assert!(user_agent.contains("Blink Invoice Library v"));
        assert!(user_agent.contains("Rust"));
    }

    #[test]
    fn test_user_agent_with_prefix() {
        let config = BlinkConfig::builder().user_agent_prefix("MyApp/1.0").build();
        let client = create_test_client(&config);

        let user_agent = client.default_headers.get("User-Agent").unwrap();
        assert!(user_agent.starts_with("MyApp/1.0 | "));
    }

    #[test]
    fn test_json_content_headers() {
        let client = create_test_client(&BlinkConfig::default());

        assert_eq!(
            client.default_headers.get("Content-Type"),
            Some(&"application/json".to_string())
        );
        assert_eq!(
            client.default_headers.get("Accept"),
            Some(&"application/json".to_string())
        );
    }

    #[test]
    fn test_api_key_is_not_a_default_header() {
        let config = BlinkConfig::builder().api_key("blink_secret").build();
        let client = create_test_client(&config);

        assert!(client.default_headers.get(API_KEY_HEADER).is_none());
    }

    #[test]
    fn test_client_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<HttpClient>();
    }
}

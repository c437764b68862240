//! HTTP-specific error types for the Blink invoice SDK.
//!
//! - [`HttpResponseError`]: Non-2xx HTTP responses from the API
//! - [`HttpError`]: Unified error type encompassing all transport errors
//!
//! # Example
//!
//! ```rust,ignore
//! use blink_invoice::clients::HttpError;
//!
//! match client.post_json(&body, &api_key).await {
//!     Ok(response) => println!("Success: {}", response.body),
//!     Err(HttpError::Response(e)) => println!("API error {}: {}", e.code, e.body),
//!     Err(HttpError::Network(e)) => println!("Network error: {}", e),
//! }
//! ```

use thiserror::Error;

/// Error returned when an HTTP request receives a non-successful response.
///
/// The body is kept as raw text. It is never parsed as GraphQL, even when
/// it happens to contain JSON with an `errors` field.
///
/// # Example
///
/// ```rust
/// use blink_invoice::clients::HttpResponseError;
///
/// let error = HttpResponseError {
///     code: 401,
///     body: "Unauthorized".to_string(),
///     error_reference: None,
/// };
///
/// assert_eq!(error.to_string(), "HTTP 401: Unauthorized");
/// ```
#[derive(Debug, Error)]
#[error("HTTP {code}: {body}")]
pub struct HttpResponseError {
    /// The HTTP status code of the response.
    pub code: u16,
    /// Raw response body text.
    pub body: String,
    /// Server request id from the `X-Request-Id` header, for support reports.
    pub error_reference: Option<String>,
}

/// Unified error type for all transport-level errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// An HTTP response error (non-2xx status code).
    #[error(transparent)]
    Response(#[from] HttpResponseError),

    /// Network, TLS, or timeout error.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),
}

impl HttpError {
    /// Returns the HTTP status code, if a response was received.
    #[must_use]
    pub const fn status(&self) -> Option<u16> {
        match self {
            Self::Response(e) => Some(e.code),
            Self::Network(_) => None,
        }
    }
}

//! GraphQL client implementation for the Blink API.
//!
//! This module provides the [`GraphqlClient`] type for executing GraphQL
//! queries and mutations against the Blink endpoint.

use serde::de::DeserializeOwned;

use crate::auth::CredentialResolver;
use crate::clients::graphql::{GraphqlError, GraphqlResponse};
use crate::clients::HttpClient;
use crate::config::{ApiEndpoint, BlinkConfig};

/// GraphQL API client for the Blink API.
///
/// Each call resolves the credential afresh, performs exactly one HTTP round
/// trip, and normalizes failures into a single [`GraphqlError`]:
///
/// 1. Non-2xx status: [`GraphqlError::Http`], body not parsed
/// 2. Body is not a GraphQL envelope: [`GraphqlError::Decode`]
/// 3. Any top-level `errors`: [`GraphqlError::Operation`], even alongside `data`
/// 4. Otherwise the `data` field is returned
///
/// # Thread Safety
///
/// `GraphqlClient` is `Send + Sync`, making it safe to share across async tasks.
///
/// # Example
///
/// ```rust,ignore
/// use blink_invoice::{BlinkConfig, GraphqlClient};
///
/// let config = BlinkConfig::builder().api_key("blink_abc123").build();
/// let client = GraphqlClient::new(&config)?;
///
/// let data = client
///     .send("query Me { me { defaultAccount { wallets { id walletCurrency } } } }", None)
///     .await?;
/// println!("{}", data["me"]);
/// ```
#[derive(Debug)]
pub struct GraphqlClient {
    /// The internal HTTP client for making requests.
    http_client: HttpClient,
    /// Resolves the API key before every request.
    credentials: CredentialResolver,
}

// Verify GraphqlClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<GraphqlClient>();
};

impl GraphqlClient {
    /// Creates a new GraphQL client from the configuration.
    ///
    /// No credential is resolved here; resolution happens per call.
    ///
    /// # Errors
    ///
    /// Returns [`GraphqlError::Http`] if the HTTP client cannot be built.
    pub fn new(config: &BlinkConfig) -> Result<Self, GraphqlError> {
        Ok(Self {
            http_client: HttpClient::new(config)?,
            credentials: CredentialResolver::new(config),
        })
    }

    /// Returns the endpoint this client posts to.
    #[must_use]
    pub const fn endpoint(&self) -> &ApiEndpoint {
        self.http_client.endpoint()
    }

    /// Sends a GraphQL document and returns the raw `data` value.
    ///
    /// `variables` defaults to an empty object. Returns
    /// `serde_json::Value::Null` when the response carries no `data`.
    ///
    /// # Errors
    ///
    /// - [`GraphqlError::Config`] if the credential cannot be resolved
    /// - [`GraphqlError::Http`] for network errors and non-2xx responses
    /// - [`GraphqlError::Decode`] if the body is not a GraphQL response
    /// - [`GraphqlError::Operation`] if the response lists any errors
    pub async fn send(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<serde_json::Value, GraphqlError> {
        let response = self.execute_raw(document, variables).await?;
        Ok(response.data.unwrap_or(serde_json::Value::Null))
    }

    /// Sends a GraphQL document and decodes `data` into `T`.
    ///
    /// Decoding fails closed: a missing `data` field or a shape mismatch is a
    /// [`GraphqlError::Decode`], never a panic.
    ///
    /// # Errors
    ///
    /// Same as [`send`](Self::send), plus [`GraphqlError::Decode`] when the
    /// data does not match `T`.
    pub async fn execute<T: DeserializeOwned>(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<T, GraphqlError> {
        let response = self.execute_raw(document, variables).await?;
        let data = response.data.ok_or_else(|| GraphqlError::Decode {
            message: "response carried neither data nor errors".to_string(),
        })?;
        serde_json::from_value(data).map_err(|e| GraphqlError::Decode {
            message: e.to_string(),
        })
    }

    /// Internal helper with the shared request pipeline.
    async fn execute_raw(
        &self,
        document: &str,
        variables: Option<serde_json::Value>,
    ) -> Result<GraphqlResponse, GraphqlError> {
        let api_key = self.credentials.resolve()?;

        let body = serde_json::json!({
            "query": document,
            "variables": variables.unwrap_or_else(|| serde_json::json!({})),
        });

        let response = self.http_client.post_json(&body, &api_key).await?;

        let parsed: GraphqlResponse =
            serde_json::from_str(&response.body).map_err(|e| GraphqlError::Decode {
                message: format!("invalid JSON body: {e}"),
            })?;

        if !parsed.errors().is_empty() {
            tracing::debug!(
                "GraphQL response carried {} top-level error(s)",
                parsed.errors().len()
            );
            return Err(GraphqlError::top_level(parsed.errors.unwrap_or_default()));
        }

        Ok(parsed)
    }
}

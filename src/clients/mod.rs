//! HTTP and GraphQL client types for Blink API communication.
//!
//! # Overview
//!
//! - [`HttpClient`]: The async HTTP client posting JSON to the endpoint
//! - [`HttpResponse`]: A response from the API with its raw body
//! - [`HttpError`]: Transport errors (network failure, non-2xx status)
//! - [`graphql::GraphqlClient`]: GraphQL client on top of [`HttpClient`]
//! - [`graphql::GraphqlError`]: GraphQL-specific error types

mod errors;
pub mod graphql;
mod http_client;
mod http_response;

pub use errors::{HttpError, HttpResponseError};
pub use http_client::{HttpClient, API_KEY_HEADER, SDK_VERSION};
pub use http_response::HttpResponse;

// Re-export GraphQL client types at the clients module level
pub use graphql::{GraphqlClient, GraphqlError, GraphqlErrorEntry, GraphqlResponse};

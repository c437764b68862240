//! GraphQL API client for the Blink API.
//!
//! This module provides a GraphQL client built on top of the
//! [`HttpClient`](crate::clients::HttpClient) that authenticates every call
//! with a freshly resolved API key and turns the HTTP and GraphQL error
//! surfaces into one failure channel.
//!
//! # Overview
//!
//! - [`GraphqlClient`]: The client with `send()` and typed `execute()` methods
//! - [`GraphqlError`]: Error type for GraphQL operations
//! - [`GraphqlResponse`] and [`GraphqlErrorEntry`]: The response envelope
//!
//! # Example
//!
//! ```rust,ignore
//! use blink_invoice::{BlinkConfig, GraphqlClient};
//! use serde_json::json;
//!
//! let client = GraphqlClient::new(&BlinkConfig::default())?;
//!
//! let data = client
//!     .send(
//!         "mutation LnInvoiceCreate($input: LnInvoiceCreateInput!) { lnInvoiceCreate(input: $input) { errors { message } } }",
//!         Some(json!({ "input": { "walletId": "w1", "amount": 1000 } })),
//!     )
//!     .await?;
//! ```
//!
//! # Retry Behavior
//!
//! There is none. Invoice creation is not idempotent, so a retry after an
//! ambiguous failure could mint a duplicate invoice; that decision is left
//! to the caller.

mod client;
mod errors;
mod response;

pub use client::GraphqlClient;
pub use errors::GraphqlError;
pub use response::{GraphqlErrorEntry, GraphqlResponse};

//! GraphQL-specific error types for the Blink invoice SDK.
//!
//! Unlike a bare transport wrapper, this layer treats GraphQL errors as
//! failures: any non-empty top-level `errors` list ends the call, even when
//! `data` is also present.
//!
//! - [`GraphqlError::Config`]: The credential could not be resolved
//! - [`GraphqlError::Http`]: Transport failure or non-2xx status
//! - [`GraphqlError::Operation`]: The server reported GraphQL errors
//! - [`GraphqlError::Decode`]: The response did not have the expected shape
//!
//! # Example
//!
//! ```rust,ignore
//! use blink_invoice::clients::graphql::GraphqlError;
//!
//! match client.send("query { me { id } }", None).await {
//!     Ok(data) => println!("Data: {}", data),
//!     Err(GraphqlError::Http(e)) => println!("Transport error: {}", e),
//!     Err(GraphqlError::Operation { errors, .. }) => println!("{} GraphQL errors", errors.len()),
//!     Err(e) => println!("Error: {}", e),
//! }
//! ```

use crate::clients::graphql::GraphqlErrorEntry;
use crate::clients::HttpError;
use crate::error::ConfigError;
use thiserror::Error;

/// Error type for GraphQL API operations.
#[derive(Debug, Error)]
pub enum GraphqlError {
    /// The credential could not be resolved or was malformed.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// An HTTP-level error occurred.
    ///
    /// Non-2xx responses land here without their body being parsed.
    #[error(transparent)]
    Http(#[from] HttpError),

    /// The operation reported one or more errors.
    ///
    /// `operation` is `None` for top-level GraphQL errors and names the
    /// mutation for application-level errors embedded in its payload.
    #[error("{}", describe_operation_errors(.operation.as_deref(), .errors))]
    Operation {
        /// The mutation that reported the errors, if application-level.
        operation: Option<String>,
        /// The reported errors, in server order.
        errors: Vec<GraphqlErrorEntry>,
    },

    /// The response body did not decode into the expected shape.
    #[error("Unexpected GraphQL response: {message}")]
    Decode {
        /// What was wrong with the response.
        message: String,
    },
}

impl GraphqlError {
    /// Builds an error from top-level GraphQL errors.
    #[must_use]
    pub const fn top_level(errors: Vec<GraphqlErrorEntry>) -> Self {
        Self::Operation {
            operation: None,
            errors,
        }
    }

    /// Builds an error from the error list embedded in a mutation payload.
    #[must_use]
    pub fn mutation(operation: impl Into<String>, errors: Vec<GraphqlErrorEntry>) -> Self {
        Self::Operation {
            operation: Some(operation.into()),
            errors,
        }
    }
}

fn describe_operation_errors(operation: Option<&str>, errors: &[GraphqlErrorEntry]) -> String {
    let joined = errors
        .iter()
        .map(|e| e.message.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    match operation {
        Some(name) => format!("{name} failed: {joined}"),
        None => format!("GraphQL error: {joined}"),
    }
}

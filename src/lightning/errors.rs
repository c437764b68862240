//! Error types for the wallet and invoice workflows.
//!
//! [`InvoiceError`] adds the workflow-level failures on top of
//! [`GraphqlError`], which it wraps transparently:
//!
//! - [`InvoiceError::Validation`]: The amount was not a positive integer
//! - [`InvoiceError::Authentication`]: The API key was rejected (null `me`)
//! - [`InvoiceError::NotFound`]: No wallet of the requested currency
//! - [`InvoiceError::InvariantViolation`]: Success reported with no result
//! - [`InvoiceError::Graphql`]: Configuration, transport, or GraphQL errors

use crate::clients::graphql::GraphqlError;
use crate::lightning::WalletCurrency;
use thiserror::Error;

/// Errors returned by [`resolve_wallet_id`](crate::lightning::resolve_wallet_id)
/// and [`create_invoice`](crate::lightning::create_invoice).
///
/// Every variant is terminal for the current invocation.
#[derive(Debug, Error)]
pub enum InvoiceError {
    /// The requested amount is not a positive integer.
    #[error("{field} must be a positive integer (got '{value}')")]
    Validation {
        /// The argument that was rejected (e.g. `amount_sats`).
        field: &'static str,
        /// The rejected input as given.
        value: String,
    },

    /// The transport accepted the request but the account identity was null.
    #[error("Authentication failed. Check your BLINK_API_KEY.")]
    Authentication,

    /// The account has no wallet in the requested currency.
    #[error("No {currency} wallet found on this account.")]
    NotFound {
        /// The currency that was requested.
        currency: WalletCurrency,
    },

    /// The mutation reported neither errors nor an invoice.
    #[error("{operation} returned no invoice and no errors.")]
    InvariantViolation {
        /// The mutation that misbehaved.
        operation: &'static str,
    },

    /// A configuration, transport, or GraphQL-level error.
    #[error(transparent)]
    Graphql(#[from] GraphqlError),
}

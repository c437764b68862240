//! # Blink Invoice SDK
//!
//! A Rust SDK for creating Lightning invoices on a [Blink](https://blink.sv)
//! custodial wallet through its GraphQL API.
//!
//! ## Overview
//!
//! This SDK provides:
//! - Explicit configuration via [`BlinkConfig`] and [`BlinkConfigBuilder`]
//! - Credential resolution from an override or a profile file via [`CredentialResolver`]
//! - An authenticated GraphQL client, [`GraphqlClient`], that treats any
//!   GraphQL error as a failure
//! - Wallet lookup and BTC/USD invoice creation in [`lightning`]
//! - Two command-line tools, `create-invoice` and `create-invoice-usd`
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use blink_invoice::{BlinkConfig, GraphqlClient};
//! use blink_invoice::lightning::{create_invoice, InvoiceCurrency};
//!
//! let config = BlinkConfig::builder().api_key("blink_abc123").build();
//! let client = GraphqlClient::new(&config)?;
//!
//! let invoice = create_invoice(&client, 1000, InvoiceCurrency::Btc, Some("coffee".into())).await?;
//! println!("{}", invoice.payment_request);
//! ```
//!
//! ## Error Handling
//!
//! Each layer has its own error type and wraps the one below it:
//! [`ConfigError`] in [`HttpError`] in [`GraphqlError`] in
//! [`InvoiceError`](lightning::InvoiceError). Nothing is retried.
//!
//! ## Design Principles
//!
//! - **No global state**: Configuration is instance-based and passed explicitly
//! - **Fail-fast validation**: Newtypes validate on construction
//! - **Fail closed**: Responses decode into typed schemas; surprises are errors
//! - **No hidden retries**: Invoice creation is not idempotent

pub mod auth;
pub mod cli;
pub mod clients;
pub mod config;
pub mod error;
pub mod lightning;

// Re-export public types at crate root for convenience
pub use auth::CredentialResolver;
pub use config::{ApiEndpoint, ApiKey, BlinkConfig, BlinkConfigBuilder};
pub use error::ConfigError;

// Re-export client types
pub use clients::{
    GraphqlClient, GraphqlError, GraphqlErrorEntry, HttpClient, HttpError, HttpResponse,
    HttpResponseError,
};

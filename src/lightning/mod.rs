//! Wallet and invoice workflows built on the GraphQL client.
//!
//! # Overview
//!
//! - [`list_wallets`] / [`resolve_wallet_id`]: Find the account's wallet for a currency
//! - [`create_invoice`]: Validate, resolve the wallet, and issue the invoice mutation
//! - [`InvoiceCurrency`]: Selects the BTC (satoshi) or USD (cent) flavor
//! - [`CreatedInvoice`]: The invoice annotated with wallet and requested amount
//! - [`InvoiceError`]: Workflow errors, wrapping [`GraphqlError`](crate::GraphqlError)
//!
//! # Example
//!
//! ```rust,ignore
//! use blink_invoice::{BlinkConfig, GraphqlClient};
//! use blink_invoice::lightning::{create_invoice, InvoiceCurrency};
//!
//! let client = GraphqlClient::new(&BlinkConfig::default())?;
//! let invoice = create_invoice(&client, 1000, InvoiceCurrency::Btc, Some("coffee".into())).await?;
//! println!("{}", invoice.payment_request);
//! ```

mod errors;
mod invoice;
mod wallet;

pub use errors::InvoiceError;
pub use invoice::{
    create_invoice, format_usd_cents, parse_amount, CreatedAt, CreatedInvoice, Invoice,
    InvoiceCurrency, InvoiceRequest, PaymentStatus, LN_INVOICE_CREATE, LN_USD_INVOICE_CREATE,
};
pub use wallet::{list_wallets, resolve_wallet_id, Wallet, WalletCurrency, WALLET_QUERY};

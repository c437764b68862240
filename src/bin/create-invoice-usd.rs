//! Create a USD-denominated Lightning invoice on the account's USD wallet.
//!
//! The payer sends bitcoin over Lightning, but the credited amount is locked
//! to the USD value at creation time, so these invoices expire after about
//! five minutes. Use `create-invoice` for longer-lived invoices.
//!
//! Usage: `create-invoice-usd <AMOUNT_CENTS> [MEMO]...`

use std::process::ExitCode;

use blink_invoice::lightning::InvoiceCurrency;

#[tokio::main]
async fn main() -> ExitCode {
    blink_invoice::cli::run(InvoiceCurrency::Usd).await
}

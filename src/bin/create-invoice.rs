//! Create a satoshi-denominated Lightning invoice on the account's BTC wallet.
//!
//! Usage: `create-invoice <AMOUNT_SATS> [MEMO]...`

use std::process::ExitCode;

use blink_invoice::lightning::InvoiceCurrency;

#[tokio::main]
async fn main() -> ExitCode {
    blink_invoice::cli::run(InvoiceCurrency::Btc).await
}

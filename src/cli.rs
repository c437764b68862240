//! Command-line front end shared by the `create-invoice` binaries.
//!
//! Environment variables are read here and nowhere else:
//!
//! - `BLINK_API_KEY`: credential override (falls back to `~/.profile`)
//! - `BLINK_API_URL`: endpoint override
//! - `RUST_LOG`: diagnostics filter for stderr (default `warn`)
//!
//! The created invoice is printed to stdout as JSON; diagnostics and errors
//! go to stderr, and any failure exits non-zero.

use std::process::ExitCode;
use std::time::Duration;

use clap::{CommandFactory, FromArgMatches, Parser};
use thiserror::Error;
use tracing_subscriber::EnvFilter;

use crate::config::{ApiEndpoint, BlinkConfig};
use crate::error::ConfigError;
use crate::lightning::{create_invoice, parse_amount, CreatedInvoice, InvoiceCurrency, InvoiceError};
use crate::GraphqlClient;

/// Arguments accepted by both binaries.
#[derive(Debug, Parser)]
#[command(version, arg_required_else_help(true))]
pub struct Cli {
    /// Invoice amount: satoshis for BTC invoices, cents for USD invoices
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Optional memo; multiple words are joined with spaces
    #[arg(allow_hyphen_values = true, trailing_var_arg = true)]
    pub memo: Vec<String>,

    /// Blink API key
    #[arg(long, env = "BLINK_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// GraphQL endpoint
    #[arg(long, env = "BLINK_API_URL")]
    pub api_url: Option<String>,

    /// Per-request timeout in seconds
    #[arg(long, value_name = "SECS")]
    pub timeout: Option<u64>,
}

impl Cli {
    /// Parses process arguments with currency-specific help text.
    #[must_use]
    pub fn parse_for(currency: InvoiceCurrency) -> Self {
        let (name, about, value_name, help) = match currency {
            InvoiceCurrency::Btc => (
                "create-invoice",
                "Create a Lightning invoice (BOLT-11) denominated in satoshis on the BTC wallet",
                "AMOUNT_SATS",
                "Amount in satoshis",
            ),
            InvoiceCurrency::Usd => (
                "create-invoice-usd",
                "Create a Lightning invoice denominated in USD cents on the USD wallet. \
                 USD invoices expire in about 5 minutes because they lock an exchange rate.",
                "AMOUNT_CENTS",
                "Amount in USD cents (e.g. 100 = $1.00)",
            ),
        };

        let command = Self::command()
            .name(name)
            .about(about)
            .mut_arg("amount", |arg| arg.value_name(value_name).help(help));
        let matches = command.get_matches();
        Self::from_arg_matches(&matches).unwrap_or_else(|e| e.exit())
    }

    /// Joins the memo words; an empty memo is `None`.
    #[must_use]
    pub fn memo(&self) -> Option<String> {
        let memo = self.memo.join(" ");
        if memo.is_empty() {
            None
        } else {
            Some(memo)
        }
    }

    /// Builds the SDK configuration from the arguments.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidEndpoint`] for a malformed `--api-url`.
    pub fn config(&self) -> Result<BlinkConfig, ConfigError> {
        let mut builder = BlinkConfig::builder();
        if let Some(key) = &self.api_key {
            builder = builder.api_key(key.clone());
        }
        if let Some(url) = self.api_url.as_deref().filter(|u| !u.is_empty()) {
            builder = builder.endpoint(ApiEndpoint::new(url)?);
        }
        if let Some(secs) = self.timeout {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(builder.build())
    }
}

/// Errors surfaced by the command-line tools.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The invoice workflow failed.
    #[error(transparent)]
    Invoice(#[from] InvoiceError),

    /// The result could not be rendered.
    #[error("Failed to render output: {0}")]
    Output(#[from] serde_json::Error),
}

/// Installs the stderr diagnostics subscriber.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Validates the amount, then runs the invoice workflow.
///
/// # Errors
///
/// Returns [`CliError`] for any configuration or workflow failure.
pub async fn execute(cli: &Cli, currency: InvoiceCurrency) -> Result<CreatedInvoice, CliError> {
    let amount = parse_amount(&cli.amount, currency)?;
    let config = cli.config()?;
    let client = GraphqlClient::new(&config).map_err(InvoiceError::from)?;
    Ok(create_invoice(&client, amount, currency, cli.memo()).await?)
}

/// What a finished run prints, and whether it succeeded.
#[derive(Debug, PartialEq, Eq)]
pub struct Outcome {
    /// Written to stdout: the invoice JSON on success.
    pub stdout: Option<String>,
    /// Written to stderr, one entry per line.
    pub stderr: Vec<String>,
    /// Whether the process exits successfully.
    pub success: bool,
}

impl Outcome {
    /// Renders the result of [`execute`].
    ///
    /// USD invoices get two notes on stderr: the dollar amount with the
    /// settled satoshis, and the short expiry caused by the rate lock.
    #[must_use]
    pub fn from_result(
        result: Result<CreatedInvoice, CliError>,
        currency: InvoiceCurrency,
    ) -> Self {
        let rendered = result.and_then(|invoice| {
            let json = serde_json::to_string_pretty(&invoice)?;
            Ok((invoice, json))
        });

        match rendered {
            Ok((invoice, json)) => {
                let mut stderr = Vec::new();
                if let (InvoiceCurrency::Usd, Some(usd)) = (currency, &invoice.amount_usd) {
                    stderr.push(format!(
                        "Created USD invoice for {usd} ({} sats at current rate)",
                        invoice.satoshis
                    ));
                    stderr.push(
                        "Note: USD invoices expire in ~5 minutes due to exchange rate lock."
                            .to_string(),
                    );
                }
                Self {
                    stdout: Some(json),
                    stderr,
                    success: true,
                }
            }
            Err(e) => Self {
                stdout: None,
                stderr: vec![format!("Error: {e}")],
                success: false,
            },
        }
    }

    /// Prints the outcome and returns the process exit code.
    pub fn emit(&self) -> ExitCode {
        for line in &self.stderr {
            eprintln!("{line}");
        }
        if let Some(json) = &self.stdout {
            println!("{json}");
        }
        if self.success {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        }
    }
}

/// Entry point of both binaries.
pub async fn run(currency: InvoiceCurrency) -> ExitCode {
    let cli = Cli::parse_for(currency);
    init_tracing();

    Outcome::from_result(execute(&cli, currency).await, currency).emit()
}

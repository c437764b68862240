//! Lightning invoice creation.
//!
//! Both invoice flavors share one pipeline. [`InvoiceCurrency`] supplies the
//! per-currency pieces: the wallet currency to look up, the mutation
//! document, and the name of its payload field.

use std::collections::HashMap;

use chrono::{DateTime, TimeZone, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use crate::clients::graphql::{GraphqlClient, GraphqlError, GraphqlErrorEntry};
use crate::lightning::{resolve_wallet_id, InvoiceError, WalletCurrency};

/// Creates a satoshi-denominated invoice on a BTC wallet.
pub const LN_INVOICE_CREATE: &str = r"
  mutation LnInvoiceCreate($input: LnInvoiceCreateInput!) {
    lnInvoiceCreate(input: $input) {
      invoice {
        paymentRequest
        paymentHash
        paymentSecret
        satoshis
        paymentStatus
        createdAt
      }
      errors {
        code
        message
        path
      }
    }
  }
";

/// Creates a cent-denominated invoice on a USD wallet.
pub const LN_USD_INVOICE_CREATE: &str = r"
  mutation LnUsdInvoiceCreate($input: LnUsdInvoiceCreateInput!) {
    lnUsdInvoiceCreate(input: $input) {
      invoice {
        paymentRequest
        paymentHash
        paymentSecret
        satoshis
        paymentStatus
        createdAt
      }
      errors {
        code
        message
        path
      }
    }
  }
";

/// Denomination of an invoice, selecting wallet and mutation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvoiceCurrency {
    /// Amount in satoshis, credited to the BTC wallet.
    Btc,
    /// Amount in US cents, credited to the USD wallet at the rate locked
    /// when the invoice is created.
    Usd,
}

impl InvoiceCurrency {
    /// The wallet currency this invoice is credited to.
    #[must_use]
    pub const fn wallet_currency(self) -> WalletCurrency {
        match self {
            Self::Btc => WalletCurrency::Btc,
            Self::Usd => WalletCurrency::Usd,
        }
    }

    /// The mutation document.
    #[must_use]
    pub const fn document(self) -> &'static str {
        match self {
            Self::Btc => LN_INVOICE_CREATE,
            Self::Usd => LN_USD_INVOICE_CREATE,
        }
    }

    /// The mutation field holding the payload.
    #[must_use]
    pub const fn operation(self) -> &'static str {
        match self {
            Self::Btc => "lnInvoiceCreate",
            Self::Usd => "lnUsdInvoiceCreate",
        }
    }

    /// The GraphQL input type of the mutation.
    #[must_use]
    pub const fn input_type(self) -> &'static str {
        match self {
            Self::Btc => "LnInvoiceCreateInput",
            Self::Usd => "LnUsdInvoiceCreateInput",
        }
    }

    /// Name of the amount argument, used in validation messages.
    #[must_use]
    pub const fn amount_field(self) -> &'static str {
        match self {
            Self::Btc => "amount_sats",
            Self::Usd => "amount_cents",
        }
    }
}

/// Input of the invoice-creation mutations.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceRequest {
    /// Wallet credited by the invoice.
    pub wallet_id: String,
    /// Satoshis for BTC, cents for USD. Always positive.
    pub amount: u64,
    /// Optional memo; omitted from the input when `None`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// Payment status of an invoice.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentStatus {
    /// Awaiting payment.
    Pending,
    /// Paid.
    Paid,
    /// Expired before payment.
    Expired,
    /// A status this SDK does not know.
    #[serde(other)]
    Unknown,
}

/// An invoice as returned by the server.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    /// BOLT-11 payment request.
    pub payment_request: String,
    /// Payment hash.
    pub payment_hash: String,
    /// Payment secret, when the server returns one.
    #[serde(default)]
    pub payment_secret: Option<String>,
    /// Settled satoshi amount. For USD invoices this comes from the
    /// exchange rate and is authoritative.
    pub satoshis: u64,
    /// Payment status at creation time.
    pub payment_status: PaymentStatus,
    /// Creation time, in the form the server sent it.
    pub created_at: CreatedAt,
}

/// Creation time of an invoice as the server reported it.
///
/// Blink sends Unix seconds; RFC 3339 strings are accepted as well. The
/// original form is kept so it serializes back unchanged. Values that are
/// not a valid point in time are rejected while decoding.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CreatedAt {
    /// Seconds since the Unix epoch.
    Seconds(i64),
    /// An RFC 3339 timestamp.
    Text(String),
}

impl CreatedAt {
    /// Converts the timestamp to UTC.
    #[must_use]
    pub fn to_utc(&self) -> Option<DateTime<Utc>> {
        match self {
            Self::Seconds(secs) => Utc.timestamp_opt(*secs, 0).single(),
            Self::Text(text) => DateTime::parse_from_rfc3339(text)
                .ok()
                .map(|dt| dt.with_timezone(&Utc)),
        }
    }
}

impl<'de> Deserialize<'de> for CreatedAt {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        #[serde(untagged)]
        enum RawTimestamp {
            Seconds(i64),
            Text(String),
        }

        let created_at = match RawTimestamp::deserialize(deserializer)? {
            RawTimestamp::Seconds(secs) => Self::Seconds(secs),
            RawTimestamp::Text(text) => Self::Text(text),
        };
        if created_at.to_utc().is_none() {
            return Err(serde::de::Error::custom(format!(
                "invalid createdAt timestamp: {created_at:?}"
            )));
        }
        Ok(created_at)
    }
}

#[derive(Debug, Deserialize)]
struct InvoicePayload {
    invoice: Option<Invoice>,
    #[serde(default)]
    errors: Option<Vec<GraphqlErrorEntry>>,
}

/// An invoice annotated with the wallet it was created on.
///
/// Serializes to the JSON printed by the command-line tools. The payment
/// secret is kept but not serialized.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedInvoice {
    /// BOLT-11 payment request.
    pub payment_request: String,
    /// Payment hash.
    pub payment_hash: String,
    /// Payment secret, when the server returns one.
    #[serde(skip)]
    pub payment_secret: Option<String>,
    /// Server-supplied satoshi amount.
    pub satoshis: u64,
    /// Payment status at creation time.
    pub status: PaymentStatus,
    /// Creation time, unchanged from the server.
    pub created_at: CreatedAt,
    /// Wallet credited by the invoice.
    pub wallet_id: String,
    /// Requested amount in cents (USD invoices only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_cents: Option<u64>,
    /// Requested amount formatted as dollars (USD invoices only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub amount_usd: Option<String>,
    /// Wallet currency (USD invoices only).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wallet_currency: Option<WalletCurrency>,
}

impl CreatedInvoice {
    /// Annotates a server invoice with the wallet and requested amount.
    #[must_use]
    pub fn new(invoice: Invoice, currency: InvoiceCurrency, request: &InvoiceRequest) -> Self {
        let (amount_cents, amount_usd, wallet_currency) = match currency {
            InvoiceCurrency::Btc => (None, None, None),
            InvoiceCurrency::Usd => (
                Some(request.amount),
                Some(format_usd_cents(request.amount)),
                Some(WalletCurrency::Usd),
            ),
        };

        Self {
            payment_request: invoice.payment_request,
            payment_hash: invoice.payment_hash,
            payment_secret: invoice.payment_secret,
            satoshis: invoice.satoshis,
            status: invoice.payment_status,
            created_at: invoice.created_at,
            wallet_id: request.wallet_id.clone(),
            amount_cents,
            amount_usd,
            wallet_currency,
        }
    }
}

/// Parses a command-line amount.
///
/// # Errors
///
/// Returns [`InvoiceError::Validation`] if `raw` is not a positive integer.
///
/// # Example
///
/// ```rust
/// use blink_invoice::lightning::{parse_amount, InvoiceCurrency};
///
/// assert_eq!(parse_amount(" 1500 ", InvoiceCurrency::Btc).unwrap(), 1500);
/// assert!(parse_amount("0", InvoiceCurrency::Btc).is_err());
/// assert!(parse_amount("12.5", InvoiceCurrency::Usd).is_err());
/// ```
pub fn parse_amount(raw: &str, currency: InvoiceCurrency) -> Result<u64, InvoiceError> {
    let invalid = || InvoiceError::Validation {
        field: currency.amount_field(),
        value: raw.to_string(),
    };
    let amount: u64 = raw.trim().parse().map_err(|_| invalid())?;
    if amount == 0 {
        return Err(invalid());
    }
    Ok(amount)
}

/// Formats a cent amount as dollars, e.g. `150` as `$1.50`.
#[must_use]
pub fn format_usd_cents(cents: u64) -> String {
    format!("${}.{:02}", cents / 100, cents % 100)
}

/// Creates an invoice for `amount` on the account's wallet in `currency`.
///
/// The amount is validated before any network call. The wallet id is then
/// resolved and the currency's mutation is issued with the request as its
/// single `input` variable.
///
/// Invoice creation is not idempotent: every successful call mints a new
/// invoice, so callers must not retry blindly after an ambiguous failure.
///
/// # Errors
///
/// - [`InvoiceError::Validation`] if `amount` is zero
/// - [`InvoiceError::Authentication`] / [`InvoiceError::NotFound`] from
///   wallet resolution
/// - [`InvoiceError::Graphql`] with [`GraphqlError::Operation`] when either
///   the top-level or the mutation's own error list is non-empty
/// - [`InvoiceError::InvariantViolation`] when the mutation reports neither
///   errors nor an invoice
/// - [`InvoiceError::Graphql`] for configuration and transport failures
pub async fn create_invoice(
    client: &GraphqlClient,
    amount: u64,
    currency: InvoiceCurrency,
    memo: Option<String>,
) -> Result<CreatedInvoice, InvoiceError> {
    if amount == 0 {
        return Err(InvoiceError::Validation {
            field: currency.amount_field(),
            value: amount.to_string(),
        });
    }

    let wallet_id = resolve_wallet_id(client, &currency.wallet_currency()).await?;

    let request = InvoiceRequest {
        wallet_id,
        amount,
        memo: memo.filter(|m| !m.is_empty()),
    };
    let variables = serde_json::json!({ "input": &request });

    let operation = currency.operation();
    tracing::debug!(
        "Issuing {} ({}) on wallet {}",
        operation,
        currency.input_type(),
        request.wallet_id
    );
    let mut data: HashMap<String, Option<InvoicePayload>> =
        client.execute(currency.document(), Some(variables)).await?;

    let payload = data
        .remove(operation)
        .ok_or_else(|| GraphqlError::Decode {
            message: format!("response has no {operation} field"),
        })?
        .ok_or(InvoiceError::InvariantViolation { operation })?;

    let errors = payload.errors.unwrap_or_default();
    if !errors.is_empty() {
        return Err(GraphqlError::mutation(operation, errors).into());
    }

    let invoice = payload
        .invoice
        .ok_or(InvoiceError::InvariantViolation { operation })?;

    tracing::debug!(
        "{} created invoice {} for {} sats",
        operation,
        invoice.payment_hash,
        invoice.satoshis
    );

    Ok(CreatedInvoice::new(invoice, currency, &request))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn sample_invoice() -> Invoice {
        serde_json::from_value(json!({
            "paymentRequest": "lnbc10u1p...",
            "paymentHash": "h1",
            "paymentSecret": "s1",
            "satoshis": 1000,
            "paymentStatus": "PENDING",
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap()
    }

    #[test]
    fn test_parse_amount_accepts_positive_integers() {
        assert_eq!(parse_amount("1", InvoiceCurrency::Btc).unwrap(), 1);
        assert_eq!(parse_amount(" 250 ", InvoiceCurrency::Usd).unwrap(), 250);
    }

    #[test]
    fn test_parse_amount_rejects_zero_negative_and_non_numeric() {
        for raw in ["0", "-5", "abc", "", "12abc", "1.5"] {
            match parse_amount(raw, InvoiceCurrency::Usd) {
                Err(InvoiceError::Validation { field, value }) => {
                    assert_eq!(field, "amount_cents");
                    assert_eq!(value, raw);
                }
                other => panic!("Expected Validation for {raw:?}, got: {other:?}"),
            }
        }
    }

    #[test]
    fn test_format_usd_cents() {
        assert_eq!(format_usd_cents(0), "$0.00");
        assert_eq!(format_usd_cents(5), "$0.05");
        assert_eq!(format_usd_cents(100), "$1.00");
        assert_eq!(format_usd_cents(123_456), "$1234.56");
    }

    #[test]
    fn test_currency_specific_mutations() {
        assert!(InvoiceCurrency::Btc.document().contains("lnInvoiceCreate("));
        assert!(InvoiceCurrency::Btc.document().contains(InvoiceCurrency::Btc.input_type()));
        assert!(InvoiceCurrency::Usd.document().contains("lnUsdInvoiceCreate("));
        assert!(InvoiceCurrency::Usd.document().contains(InvoiceCurrency::Usd.input_type()));
        assert_eq!(InvoiceCurrency::Usd.wallet_currency(), WalletCurrency::Usd);
    }

    #[test]
    fn test_request_omits_absent_memo() {
        let request = InvoiceRequest {
            wallet_id: "w1".to_string(),
            amount: 1000,
            memo: None,
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "walletId": "w1", "amount": 1000 })
        );

        let request = InvoiceRequest {
            memo: Some("coffee".to_string()),
            ..request
        };
        assert_eq!(
            serde_json::to_value(&request).unwrap(),
            json!({ "walletId": "w1", "amount": 1000, "memo": "coffee" })
        );
    }

    #[test]
    fn test_invoice_accepts_unix_timestamp_and_unknown_status() {
        let invoice: Invoice = serde_json::from_value(json!({
            "paymentRequest": "lnbc1...",
            "paymentHash": "h2",
            "satoshis": 21,
            "paymentStatus": "SOMETHING_NEW",
            "createdAt": 1_704_067_200
        }))
        .unwrap();
        assert_eq!(invoice.payment_status, PaymentStatus::Unknown);
        assert!(invoice.payment_secret.is_none());
        assert_eq!(invoice.created_at, CreatedAt::Seconds(1_704_067_200));
        assert_eq!(
            invoice.created_at.to_utc().unwrap().to_rfc3339(),
            "2024-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_created_at_serializes_in_server_form() {
        let seconds: CreatedAt = serde_json::from_value(json!(1_704_067_200)).unwrap();
        assert_eq!(serde_json::to_value(&seconds).unwrap(), json!(1_704_067_200));

        let text: CreatedAt = serde_json::from_value(json!("2024-01-01T00:00:00Z")).unwrap();
        assert_eq!(
            serde_json::to_value(&text).unwrap(),
            json!("2024-01-01T00:00:00Z")
        );
        assert_eq!(seconds.to_utc(), text.to_utc());
    }

    #[test]
    fn test_created_at_rejects_unparseable_values() {
        assert!(serde_json::from_value::<CreatedAt>(json!("yesterday")).is_err());
        assert!(serde_json::from_value::<CreatedAt>(json!(i64::MAX)).is_err());
        assert!(serde_json::from_value::<CreatedAt>(json!(null)).is_err());
    }

    #[test]
    fn test_btc_output_shape() {
        let request = InvoiceRequest {
            wallet_id: "w-btc".to_string(),
            amount: 1000,
            memo: None,
        };
        let created = CreatedInvoice::new(sample_invoice(), InvoiceCurrency::Btc, &request);
        let output = serde_json::to_value(&created).unwrap();

        assert_eq!(
            output,
            json!({
                "paymentRequest": "lnbc10u1p...",
                "paymentHash": "h1",
                "satoshis": 1000,
                "status": "PENDING",
                "createdAt": "2024-01-01T00:00:00Z",
                "walletId": "w-btc"
            })
        );
    }

    #[test]
    fn test_usd_output_carries_requested_cents() {
        let request = InvoiceRequest {
            wallet_id: "w-usd".to_string(),
            amount: 150,
            memo: None,
        };
        let created = CreatedInvoice::new(sample_invoice(), InvoiceCurrency::Usd, &request);

        assert_eq!(created.amount_cents, Some(150));
        assert_eq!(created.amount_usd.as_deref(), Some("$1.50"));
        assert_eq!(created.satoshis, 1000);

        let output = serde_json::to_value(&created).unwrap();
        assert_eq!(output["walletCurrency"], "USD");
        assert_eq!(output["amountCents"], 150);
        assert!(output.get("paymentSecret").is_none());
    }
}

//! Wallet listing and lookup by currency.

use std::fmt;

use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::clients::graphql::GraphqlClient;
use crate::lightning::InvoiceError;

/// Lists the wallets of the authenticated account.
pub const WALLET_QUERY: &str = r"
  query Me {
    me {
      defaultAccount {
        wallets {
          id
          walletCurrency
        }
      }
    }
  }
";

/// Currency of a Blink wallet.
///
/// Codes the SDK does not know decode as [`WalletCurrency::Other`] instead
/// of failing.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum WalletCurrency {
    /// Bitcoin, amounts in satoshis.
    Btc,
    /// US dollars, amounts in cents.
    Usd,
    /// Any other currency code reported by the server.
    Other(String),
}

impl WalletCurrency {
    /// Returns the currency code as sent by the API.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Btc => "BTC",
            Self::Usd => "USD",
            Self::Other(code) => code,
        }
    }
}

impl fmt::Display for WalletCurrency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for WalletCurrency {
    fn from(code: &str) -> Self {
        match code {
            "BTC" => Self::Btc,
            "USD" => Self::Usd,
            other => Self::Other(other.to_string()),
        }
    }
}

impl Serialize for WalletCurrency {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.as_str())
    }
}

impl<'de> Deserialize<'de> for WalletCurrency {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from(s.as_str()))
    }
}

/// A currency-denominated balance container belonging to an account.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Wallet {
    /// Opaque wallet identifier.
    pub id: String,
    /// Currency held by the wallet.
    pub wallet_currency: WalletCurrency,
}

#[derive(Debug, Deserialize)]
struct MeData {
    me: Option<Me>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Me {
    default_account: Account,
}

#[derive(Debug, Deserialize)]
struct Account {
    wallets: Vec<Wallet>,
}

/// Fetches the wallets of the authenticated account, in listing order.
///
/// # Errors
///
/// - [`InvoiceError::Authentication`] if the response's `me` is null or absent
/// - [`InvoiceError::Graphql`] for configuration, transport, GraphQL, and
///   decoding failures
pub async fn list_wallets(client: &GraphqlClient) -> Result<Vec<Wallet>, InvoiceError> {
    let data: MeData = client.execute(WALLET_QUERY, None).await?;
    let me = data.me.ok_or(InvoiceError::Authentication)?;
    Ok(me.default_account.wallets)
}

/// Resolves the id of the account's wallet in `currency`.
///
/// The first match in listing order wins; the account is assumed to hold at
/// most one wallet per currency.
///
/// # Errors
///
/// - [`InvoiceError::Authentication`] if the credential was rejected
/// - [`InvoiceError::NotFound`] if no wallet has the requested currency
/// - [`InvoiceError::Graphql`] for everything the client itself reports
pub async fn resolve_wallet_id(
    client: &GraphqlClient,
    currency: &WalletCurrency,
) -> Result<String, InvoiceError> {
    let wallets = list_wallets(client).await?;
    let wallet = find_wallet(&wallets, currency).ok_or_else(|| InvoiceError::NotFound {
        currency: currency.clone(),
    })?;
    tracing::debug!("Resolved {} wallet {}", currency, wallet.id);
    Ok(wallet.id.clone())
}

fn find_wallet<'a>(wallets: &'a [Wallet], currency: &WalletCurrency) -> Option<&'a Wallet> {
    wallets.iter().find(|w| &w.wallet_currency == currency)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn wallet(id: &str, currency: WalletCurrency) -> Wallet {
        Wallet {
            id: id.to_string(),
            wallet_currency: currency,
        }
    }

    #[test]
    fn test_currency_round_trips_known_and_unknown_codes() {
        let parsed: Vec<WalletCurrency> =
            serde_json::from_value(json!(["BTC", "USD", "EUR"])).unwrap();
        assert_eq!(
            parsed,
            vec![
                WalletCurrency::Btc,
                WalletCurrency::Usd,
                WalletCurrency::Other("EUR".to_string())
            ]
        );
        assert_eq!(serde_json::to_value(&parsed).unwrap(), json!(["BTC", "USD", "EUR"]));
    }

    #[test]
    fn test_find_wallet_picks_first_match() {
        let wallets = vec![
            wallet("usd-1", WalletCurrency::Usd),
            wallet("btc-1", WalletCurrency::Btc),
            wallet("btc-2", WalletCurrency::Btc),
        ];
        assert_eq!(
            find_wallet(&wallets, &WalletCurrency::Btc).map(|w| w.id.as_str()),
            Some("btc-1")
        );
        assert!(find_wallet(&wallets, &WalletCurrency::Other("EUR".into())).is_none());
    }

    #[test]
    fn test_me_data_decodes_null_and_missing_identity() {
        let data: MeData = serde_json::from_value(json!({ "me": null })).unwrap();
        assert!(data.me.is_none());

        let data: MeData = serde_json::from_value(json!({})).unwrap();
        assert!(data.me.is_none());
    }

    #[test]
    fn test_me_data_decodes_wallet_listing() {
        let data: MeData = serde_json::from_value(json!({
            "me": { "defaultAccount": { "wallets": [
                { "id": "w-btc", "walletCurrency": "BTC" },
                { "id": "w-usd", "walletCurrency": "USD" }
            ] } }
        }))
        .unwrap();
        let wallets = data.me.unwrap().default_account.wallets;
        assert_eq!(wallets[0], wallet("w-btc", WalletCurrency::Btc));
        assert_eq!(wallets[1], wallet("w-usd", WalletCurrency::Usd));
    }
}

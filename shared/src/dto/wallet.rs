use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::de::f64_lenient;

/// Deposit/withdraw request body
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AmountRequest {
    pub amount: f64,
}

/// Wallet balance (`GET /wallet`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Wallet {
    #[serde(deserialize_with = "f64_lenient")]
    pub balance: f64,
    #[serde(default, alias = "updated_at")]
    pub last_updated: Option<String>,
}

impl Wallet {
    /// Adopt the authoritative balance from a deposit/withdraw receipt.
    ///
    /// The new balance is never derived locally from the amount and fee.
    pub fn apply_receipt(&mut self, receipt: &WalletReceipt) {
        self.balance = receipt.new_balance;
        self.last_updated = Some(
            receipt
                .processed_at
                .clone()
                .unwrap_or_else(|| Utc::now().to_rfc3339()),
        );
    }

    pub fn last_updated_utc(&self) -> Option<DateTime<Utc>> {
        self.last_updated
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Result of a deposit or withdrawal, as computed by the server
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WalletReceipt {
    #[serde(default, deserialize_with = "f64_lenient")]
    pub amount: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub fee: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub net_amount: f64,
    #[serde(alias = "balance", alias = "wallet_balance", deserialize_with = "f64_lenient")]
    pub new_balance: f64,
    #[serde(default)]
    pub transaction_id: Option<String>,
    #[serde(default, alias = "created_at")]
    pub processed_at: Option<String>,
}

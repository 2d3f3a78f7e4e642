//! # Wallet Endpoints
//!
//! Balance queries, deposits, and withdrawals. Deposit and withdrawal
//! receipts carry the authoritative new balance and fee; callers apply
//! them with [`shared::Wallet::apply_receipt`] rather than doing the math.

use reqwest::Method;
use shared::{AmountRequest, Wallet, WalletReceipt};

use super::client::{ApiClient, Auth};
use super::envelope;
use crate::core::error::Result;
use crate::utils::validation;

const WALLET_PAYLOAD: &[&str] = &["/data/wallet", "/wallet", "/data", ""];
const RECEIPT_PAYLOAD: &[&str] = &["/data/transaction", "/transaction", "/data", ""];

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn get_wallet(&self) -> Result<Wallet> {
        let request = self.authed(Method::GET, self.url(&["wallet"]))?;
        let body = self.send(request, Auth::Bearer, "get_wallet").await?;
        envelope::extract(&body, WALLET_PAYLOAD, "get_wallet")
    }

    /// Deposit funds. Amounts below the $10.00 minimum are rejected locally.
    #[tracing::instrument(skip(self))]
    pub async fn deposit_funds(&self, amount: f64) -> Result<WalletReceipt> {
        self.move_funds("deposit", amount).await
    }

    /// Withdraw funds. Amounts below the $10.00 minimum are rejected locally.
    #[tracing::instrument(skip(self))]
    pub async fn withdraw_funds(&self, amount: f64) -> Result<WalletReceipt> {
        self.move_funds("withdraw", amount).await
    }

    async fn move_funds(&self, action: &'static str, amount: f64) -> Result<WalletReceipt> {
        validation::validate_wallet_amount(amount)?;

        let request = self
            .authed(Method::POST, self.url(&["wallet", action]))?
            .json(&AmountRequest { amount });
        let body = self.send(request, Auth::Bearer, action).await?;
        let receipt: WalletReceipt = envelope::extract(&body, RECEIPT_PAYLOAD, action)?;

        tracing::info!(
            action,
            amount = receipt.amount,
            fee = receipt.fee,
            new_balance = receipt.new_balance,
            "Wallet updated"
        );
        Ok(receipt)
    }
}

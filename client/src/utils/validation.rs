//! Client-side input checks run before a request is sent.
//!
//! The server validates everything again; these only save a round-trip on
//! input that can never succeed.

use crate::core::error::{ApiError, Result};

/// Smallest deposit or withdrawal the backend accepts
pub const MIN_WALLET_AMOUNT: f64 = 10.0;

/// Validate email format
pub fn validate_email(email: &str) -> Result<()> {
    let email = email.trim();
    if email.is_empty() {
        return Err(ApiError::validation("email", "Email is required"));
    }

    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() {
        return Err(ApiError::validation("email", "Invalid email format"));
    }

    if parts[1].is_empty() || !parts[1].contains('.') {
        return Err(ApiError::validation("email", "Invalid email domain"));
    }

    Ok(())
}

pub fn validate_password(password: &str) -> Result<()> {
    if password.is_empty() {
        return Err(ApiError::validation("password", "Password is required"));
    }
    Ok(())
}

pub fn validate_password_confirmation(password: &str, confirmation: &str) -> Result<()> {
    if password != confirmation {
        return Err(ApiError::validation("password_confirmation", "Passwords do not match"));
    }
    Ok(())
}

/// Require a finite amount greater than zero.
pub fn validate_amount(amount: f64) -> Result<()> {
    if !amount.is_finite() {
        return Err(ApiError::validation("amount", "Amount must be a number"));
    }
    if amount <= 0.0 {
        return Err(ApiError::validation("amount", "Amount must be greater than 0"));
    }
    Ok(())
}

/// Require a valid amount of at least [`MIN_WALLET_AMOUNT`].
pub fn validate_wallet_amount(amount: f64) -> Result<()> {
    validate_amount(amount)?;
    if amount < MIN_WALLET_AMOUNT {
        return Err(ApiError::validation(
            "amount",
            format!("Minimum amount is ${:.2}", MIN_WALLET_AMOUNT),
        ));
    }
    Ok(())
}

/// Parse free-text amount input (e.g. from a form field).
///
/// Accepts an optional leading `$` and surrounding whitespace.
pub fn parse_amount(input: &str) -> Result<f64> {
    let cleaned = input.trim().trim_start_matches('$').trim();
    if cleaned.is_empty() {
        return Err(ApiError::validation("amount", "Amount is required"));
    }
    let amount = cleaned
        .parse::<f64>()
        .map_err(|_| ApiError::validation("amount", "Amount must be a number"))?;
    validate_amount(amount)?;
    Ok(amount)
}

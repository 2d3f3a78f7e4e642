//! # Utilities
//!
//! - [`portfolio`]: investment return, ownership, and distribution metrics
//! - [`validation`]: input checks run before requests are sent
//!
//! Display formatting lives in [`shared::utils`] and is re-exported here.

pub mod portfolio;
pub mod validation;

pub use portfolio::{
    creator_distribution, ownership_percentage, return_percentage, InvestmentMetrics, PortfolioOverview,
};
pub use shared::utils::{format_compact_count, format_currency, format_duration, format_signed_percentage};
pub use validation::parse_amount;

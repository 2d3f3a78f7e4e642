//! # Shared Data Transfer Objects Library
//!
//! This library defines the contract between Vidvest front ends and the
//! backend REST API. All DTOs use JSON serialization via `serde`.
//!
//! ## Structure
//!
//! - **[`dto`]**: Data Transfer Objects for API communication
//!   - **[`dto::auth`]**: Login, registration, and error bodies
//!   - **[`dto::profile`]**: User/creator profiles and stats
//!   - **[`dto::investment`]**: Investments and portfolio overview
//!   - **[`dto::wallet`]**: Wallet balance and receipts
//! - **[`utils`]**: Display formatting helpers
//!   - **[`utils::format_currency`]**: `$` amounts with two decimals
//!   - **[`utils::format_compact_count`]**: `1.2K` / `3.4M` counts
//!
//! ## Wire Format
//!
//! - Field names are **snake_case** on both sides
//! - Decimal amounts may arrive as numbers or numeric strings
//! - Legacy field names are accepted through serde aliases
//!
//! ## Usage
//!
//! ```rust
//! use shared::dto::investment::Investment;
//! use shared::utils::format_currency;
//!
//! let inv: Investment = serde_json::from_str(
//!     r#"{"id": 1, "video_id": 2, "amount": "25.00", "current_value": 30}"#,
//! ).unwrap();
//! assert_eq!(format_currency(inv.current_value), "$30.00");
//! ```

pub mod dto;
pub mod utils;

pub use dto::*;
pub use utils::*;

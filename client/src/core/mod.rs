//! # Core Abstractions
//!
//! Core traits and error types for dependency injection and testability.
//!
//! ## Modules
//!
//! - **[`error`]**: The normalized error value (`ApiError`, `ErrorKind`, `Result<T>`)
//! - **[`service`]**: Service traits for dependency injection (`ApiService`)
//!
//! ## Error Handling
//!
//! ```rust
//! use vidvest_client::core::error::{ApiError, ErrorKind};
//!
//! let err = ApiError::validation("amount", "Amount must be greater than 0");
//! assert_eq!(err.kind, ErrorKind::Validation);
//! ```

pub mod error;
pub mod service;

pub use error::{ApiError, ErrorKind, Result};
pub use service::ApiService;

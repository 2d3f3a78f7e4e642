//! # Logging
//!
//! File-based `tracing` setup shared by every binary embedding the client.

pub mod logger;

pub use logger::{init, LogGuard};

//! # Vidvest Client - Library Root
//!
//! The data-access layer behind the Vidvest video-investment app: a session
//! store, a typed client for the REST API, a paginated list controller, and
//! the pure arithmetic that turns server numbers into display metrics.
//! Screens, navigation, and styling live elsewhere and call into this crate.
//!
//! ## Architecture
//!
//! ```text
//! Presentation layer
//!   │
//!   ├── app::PagedList / app::dashboard   (screen state, parallel loads)
//!   │        │
//!   ├────────┴──► services::api::ApiClient ──HTTP──► backend
//!   │                    │
//!   │                    └── session::SessionStore (token + cached profile)
//!   │
//!   └── utils::portfolio / shared::utils  (pure metrics and formatting)
//! ```
//!
//! ## Module Structure
//!
//! - **app**: paginated lists and multi-resource screen loads
//! - **config**: environment-driven client configuration
//! - **core**: error taxonomy and the `ApiService` trait
//! - **debug**: `tracing` subscriber setup
//! - **services**: the REST API client
//! - **session**: session store and durable storage
//! - **utils**: portfolio metrics and input validation
//!
//! ## Usage
//!
//! ```rust,no_run
//! use std::sync::Arc;
//! use vidvest_client::{ApiClient, ClientConfig, FileStorage, SessionStore};
//!
//! # async fn run() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ClientConfig::from_env()?;
//! let session = Arc::new(SessionStore::restore(Arc::new(FileStorage::new(&config.session_file)))?);
//! let api = ApiClient::new(&config, session);
//!
//! api.login("alice@example.com", "secret-password").await?;
//! let overview = api.get_portfolio_overview().await?;
//! println!("{}", vidvest_client::utils::format_currency(overview.current_value));
//! # Ok(())
//! # }
//! ```

pub mod app;
pub mod config;
pub mod core;
pub mod debug;
pub mod services;
pub mod session;
pub mod utils;

pub use app::{LoadStatus, PagedList};
pub use config::{ClientConfig, ConfigError};
pub use crate::core::{ApiError, ApiService, ErrorKind, Result};
pub use services::api::ApiClient;
pub use session::{FileStorage, MemoryStorage, Session, SessionStorage, SessionStore};

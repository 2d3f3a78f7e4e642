//! # Data Transfer Objects (DTOs)
//!
//! Wire types for the Vidvest REST API.
//!
//! ## Module Organization
//!
//! - [`auth`] - Login, registration, and error bodies
//! - [`profile`] - User/creator profiles and creator stats
//! - [`video`] - Videos and embedded creator summaries
//! - [`investment`] - Investments and the portfolio overview
//! - [`wallet`] - Wallet balance and deposit/withdraw receipts
//! - [`follow`] - Follow relationships
//! - [`page`] - Paginated list envelopes
//!
//! ## Serialization Format
//!
//! - **Field naming**: snake_case (default serde behavior)
//! - **Amounts**: accepted as JSON numbers or numeric strings (see [`de`])
//! - **Legacy names**: accepted through `#[serde(alias = "...")]`
//!
//! ## Example JSON Communication
//!
//! ```text
//! POST /login
//! Content-Type: application/json
//!
//! {"email": "alice@example.com", "password": "MyPassword123"}
//! ```
//!
//! ```text
//! HTTP/1.1 200 OK
//!
//! {
//!   "status": "success",
//!   "data": {
//!     "token": "12|Qk9...",
//!     "user": {"id": 1, "username": "alice", "user_type_id": 1}
//!   }
//! }
//! ```

pub mod auth;
pub mod de;
pub mod follow;
pub mod investment;
pub mod page;
pub mod profile;
pub mod video;
pub mod wallet;

pub use auth::*;
pub use follow::*;
pub use investment::*;
pub use page::*;
pub use profile::*;
pub use video::*;
pub use wallet::*;

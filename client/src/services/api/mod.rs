//! # Backend API Client Module
//!
//! HTTP client for the Vidvest REST API. One method per resource operation,
//! all `async`, all returning [`crate::core::error::Result`].
//!
//! ## Module Structure
//!
//! ```text
//! api/
//! ├── mod.rs          - Module exports and documentation
//! ├── client.rs       - ApiClient struct, request sending, status normalization
//! ├── envelope.rs     - Tolerant `{status, data}` / legacy payload decoding
//! ├── auth.rs         - login, register, logout
//! ├── profile.rs      - own profile, profile completion
//! ├── creator.rs      - creator profile and stats
//! ├── investments.rs  - invest, my investments, details, portfolio overview
//! ├── videos.rs       - videos by creator
//! ├── wallet.rs       - wallet, deposit, withdraw
//! ├── search.rs       - search by username
//! └── follow.rs       - follow, unfollow, following status
//! ```
//!
//! ## Endpoints
//!
//! | Operation | Method/Path | Auth |
//! |---|---|---|
//! | Register | POST /register | no |
//! | Login | POST /login | no |
//! | Logout | POST /logout | yes |
//! | Get profile | GET /profile | yes |
//! | Complete profile | POST /complete-profile (multipart) | yes |
//! | Creator profile | GET/PUT /creator/profile | yes |
//! | Creator stats | GET /creator/stats | yes |
//! | My investments | GET /regular/investments?per_page=N&page=P | yes |
//! | Invest | POST /regular/investments | yes |
//! | Investment details | GET /regular/investments/:id | yes |
//! | Portfolio overview | GET /regular/investments/portfolio/overview | yes |
//! | Wallet details | GET /wallet | yes |
//! | Deposit / Withdraw | POST /wallet/deposit, /wallet/withdraw | yes |
//! | Videos by creator | GET /regular/videos/by-creator/:id?per_page=N&page=P | yes |
//! | Search by username | GET /profile/username/:username | yes |
//! | Follow / Unfollow | POST /follows, DELETE /follows/:id | yes |
//! | Following status | GET /follows/check/:id | yes |

pub mod auth;
pub mod client;
pub(crate) mod envelope;
pub mod creator;
pub mod follow;
pub mod investments;
pub mod profile;
pub mod search;
pub mod videos;
pub mod wallet;

pub use client::ApiClient;

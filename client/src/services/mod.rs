//! # Services Module
//!
//! External service integrations. Today that is the backend REST API only.
//!
//! ```text
//! ┌──────────────────────────────────────────────┐
//! │            Presentation layer                │
//! │   (screens call ApiClient / PagedList)       │
//! └──────────────────────┬───────────────────────┘
//!                        │
//!          ┌─────────────▼────────────┐
//!          │ ApiClient (api/)         │──reads──► SessionStore
//!          │ bearer auth, error norm. │
//!          └─────────────┬────────────┘
//!                        │ HTTPS / JSON
//!                        ▼
//!          ┌──────────────────────────┐
//!          │  Vidvest backend         │
//!          │  /login /profile         │
//!          │  /regular/investments/*  │
//!          │  /wallet/* /follows/*    │
//!          └──────────────────────────┘
//! ```
//!
//! ## Thread Safety
//!
//! `ApiClient` wraps a `reqwest::Client` (internally pooled and thread-safe)
//! and an `Arc<SessionStore>`; share it across tasks behind an `Arc`.

pub mod api;

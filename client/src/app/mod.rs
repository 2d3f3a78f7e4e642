//! # Application Layer
//!
//! Screen-facing state built on top of the API client:
//!
//! - [`pagination`]: "load more" list controller with de-duplication
//! - [`dashboard`]: parallel multi-resource screen loads

pub mod dashboard;
pub mod pagination;

pub use dashboard::{load_creator_dashboard, load_investor_dashboard, CreatorDashboard, InvestorDashboard};
pub use pagination::{
    CreatorVideoPages, Identifiable, InvestmentPages, ListSnapshot, LoadStatus, PageSource, PagedList,
};

//! # Service Traits
//!
//! Traits for dependency injection, so screen-level logic (dashboards,
//! paginated lists) can be tested against in-memory fakes.

use async_trait::async_trait;
use shared::{
    AuthResponse, CreatorProfile, CreatorStats, FollowStatus, Investment, Paginated, UserProfile, Video, Wallet,
    WalletReceipt,
};

use crate::core::error::Result;
use crate::services::api::ApiClient;
use crate::utils::portfolio::PortfolioOverview;

/// Trait for API service operations
#[async_trait]
pub trait ApiService: Send + Sync {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse>;

    async fn register(&self, email: &str, password: &str, confirm_password: &str) -> Result<AuthResponse>;

    async fn logout(&self) -> Result<()>;

    async fn get_profile(&self) -> Result<UserProfile>;

    async fn get_creator_profile(&self) -> Result<CreatorProfile>;

    async fn get_creator_stats(&self) -> Result<CreatorStats>;

    async fn invest_in_video(&self, video_id: i64, amount: f64) -> Result<Investment>;

    async fn get_my_investments(&self, page: u32, per_page: u32) -> Result<Paginated<Investment>>;

    async fn get_investment_details(&self, investment_id: i64) -> Result<Investment>;

    async fn get_portfolio_overview(&self) -> Result<PortfolioOverview>;

    async fn get_wallet(&self) -> Result<Wallet>;

    async fn deposit_funds(&self, amount: f64) -> Result<WalletReceipt>;

    async fn withdraw_funds(&self, amount: f64) -> Result<WalletReceipt>;

    async fn get_videos_by_creator(&self, creator_id: i64, page: u32, per_page: u32) -> Result<Paginated<Video>>;

    async fn search_users(&self, query: &str) -> Result<Vec<UserProfile>>;

    async fn follow_user(&self, user_id: i64) -> Result<FollowStatus>;

    async fn unfollow_user(&self, user_id: i64) -> Result<FollowStatus>;

    async fn check_following_status(&self, user_id: i64) -> Result<FollowStatus>;
}

#[async_trait]
impl ApiService for ApiClient {
    async fn login(&self, email: &str, password: &str) -> Result<AuthResponse> {
        ApiClient::login(self, email, password).await
    }

    async fn register(&self, email: &str, password: &str, confirm_password: &str) -> Result<AuthResponse> {
        ApiClient::register(self, email, password, confirm_password).await
    }

    async fn logout(&self) -> Result<()> {
        ApiClient::logout(self).await
    }

    async fn get_profile(&self) -> Result<UserProfile> {
        ApiClient::get_profile(self).await
    }

    async fn get_creator_profile(&self) -> Result<CreatorProfile> {
        ApiClient::get_creator_profile(self).await
    }

    async fn get_creator_stats(&self) -> Result<CreatorStats> {
        ApiClient::get_creator_stats(self).await
    }

    async fn invest_in_video(&self, video_id: i64, amount: f64) -> Result<Investment> {
        ApiClient::invest_in_video(self, video_id, amount).await
    }

    async fn get_my_investments(&self, page: u32, per_page: u32) -> Result<Paginated<Investment>> {
        ApiClient::get_my_investments(self, page, per_page).await
    }

    async fn get_investment_details(&self, investment_id: i64) -> Result<Investment> {
        ApiClient::get_investment_details(self, investment_id).await
    }

    async fn get_portfolio_overview(&self) -> Result<PortfolioOverview> {
        ApiClient::get_portfolio_overview(self).await
    }

    async fn get_wallet(&self) -> Result<Wallet> {
        ApiClient::get_wallet(self).await
    }

    async fn deposit_funds(&self, amount: f64) -> Result<WalletReceipt> {
        ApiClient::deposit_funds(self, amount).await
    }

    async fn withdraw_funds(&self, amount: f64) -> Result<WalletReceipt> {
        ApiClient::withdraw_funds(self, amount).await
    }

    async fn get_videos_by_creator(&self, creator_id: i64, page: u32, per_page: u32) -> Result<Paginated<Video>> {
        ApiClient::get_videos_by_creator(self, creator_id, page, per_page).await
    }

    async fn search_users(&self, query: &str) -> Result<Vec<UserProfile>> {
        ApiClient::search_users(self, query).await
    }

    async fn follow_user(&self, user_id: i64) -> Result<FollowStatus> {
        ApiClient::follow_user(self, user_id).await
    }

    async fn unfollow_user(&self, user_id: i64) -> Result<FollowStatus> {
        ApiClient::unfollow_user(self, user_id).await
    }

    async fn check_following_status(&self, user_id: i64) -> Result<FollowStatus> {
        ApiClient::check_following_status(self, user_id).await
    }
}

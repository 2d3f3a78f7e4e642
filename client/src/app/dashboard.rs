//! # Screen Loads
//!
//! Screens that need several independent resources request them in
//! parallel and join the results. A screen load succeeds only when every
//! request does; otherwise the first failure (in the order listed below)
//! is returned. Requests are never cancelled: every branch runs to
//! completion and unused results are dropped.

use shared::{CreatorProfile, CreatorStats, Investment, Paginated, Video, Wallet};

use crate::core::error::Result;
use crate::core::service::ApiService;
use crate::utils::portfolio::PortfolioOverview;

/// Everything the creator home screen renders
#[derive(Debug, Clone)]
pub struct CreatorDashboard {
    pub profile: CreatorProfile,
    pub stats: CreatorStats,
    pub videos: Paginated<Video>,
}

/// Everything the investor home screen renders
#[derive(Debug, Clone)]
pub struct InvestorDashboard {
    pub portfolio: PortfolioOverview,
    pub wallet: Wallet,
    pub investments: Paginated<Investment>,
}

/// Load creator profile, stats, and the first page of their videos.
#[tracing::instrument(skip(service))]
pub async fn load_creator_dashboard(
    service: &dyn ApiService,
    creator_id: i64,
    per_page: u32,
) -> Result<CreatorDashboard> {
    let (profile, stats, videos) = futures::join!(
        service.get_creator_profile(),
        service.get_creator_stats(),
        service.get_videos_by_creator(creator_id, 1, per_page),
    );

    Ok(CreatorDashboard {
        profile: profile?,
        stats: stats?,
        videos: videos?,
    })
}

/// Load portfolio overview, wallet, and the first page of investments.
#[tracing::instrument(skip(service))]
pub async fn load_investor_dashboard(service: &dyn ApiService, per_page: u32) -> Result<InvestorDashboard> {
    let (portfolio, wallet, investments) = futures::join!(
        service.get_portfolio_overview(),
        service.get_wallet(),
        service.get_my_investments(1, per_page),
    );

    Ok(InvestorDashboard {
        portfolio: portfolio?,
        wallet: wallet?,
        investments: investments?,
    })
}

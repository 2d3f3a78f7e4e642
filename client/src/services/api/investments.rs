//! # Investment Endpoints
//!
//! Investing in videos and reading the resulting portfolio. The server
//! computes every number here, including the creator/video split; the
//! client only derives display percentages (see [`crate::utils::portfolio`]).

use reqwest::Method;
use shared::{InvestRequest, Investment, Paginated, PortfolioOverviewPayload};

use super::client::{ApiClient, Auth};
use super::envelope;
use crate::core::error::Result;
use crate::utils::portfolio::PortfolioOverview;
use crate::utils::validation;

const INVESTMENT_PAYLOAD: &[&str] = &["/data/investment", "/investment", "/data", ""];
// Root before /data: a bare paginator also has a `data` key.
const INVESTMENT_PAGE_PAYLOAD: &[&str] = &["/data/investments", "/investments", "", "/data"];
const OVERVIEW_PAYLOAD: &[&str] = &["/data", ""];

impl ApiClient {
    /// Invest `amount` in a video.
    ///
    /// Non-positive or non-finite amounts are rejected without a request.
    #[tracing::instrument(skip(self))]
    pub async fn invest_in_video(&self, video_id: i64, amount: f64) -> Result<Investment> {
        validation::validate_amount(amount)?;

        let request = self
            .authed(Method::POST, self.url(&["regular", "investments"]))?
            .json(&InvestRequest { video_id, amount });
        let body = self.send(request, Auth::Bearer, "invest_in_video").await?;
        let investment: Investment = envelope::extract(&body, INVESTMENT_PAYLOAD, "invest_in_video")?;

        tracing::info!(investment_id = investment.id, video_id, amount, "Investment created");
        Ok(investment)
    }

    /// One page of the signed-in user's investments.
    #[tracing::instrument(skip(self))]
    pub async fn get_my_investments(&self, page: u32, per_page: u32) -> Result<Paginated<Investment>> {
        let request = self
            .authed(Method::GET, self.url(&["regular", "investments"]))?
            .query(&[("per_page", per_page), ("page", page)]);
        let body = self.send(request, Auth::Bearer, "get_my_investments").await?;
        envelope::extract(&body, INVESTMENT_PAGE_PAYLOAD, "get_my_investments")
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_investment_details(&self, investment_id: i64) -> Result<Investment> {
        let id = investment_id.to_string();
        let request = self.authed(Method::GET, self.url(&["regular", "investments", &id]))?;
        let body = self.send(request, Auth::Bearer, "get_investment_details").await?;
        envelope::extract(&body, INVESTMENT_PAYLOAD, "get_investment_details")
    }

    /// Portfolio totals with client-derived return and creator shares.
    #[tracing::instrument(skip(self))]
    pub async fn get_portfolio_overview(&self) -> Result<PortfolioOverview> {
        let request = self.authed(
            Method::GET,
            self.url(&["regular", "investments", "portfolio", "overview"]),
        )?;
        let body = self.send(request, Auth::Bearer, "get_portfolio_overview").await?;
        let payload: PortfolioOverviewPayload =
            envelope::extract(&body, OVERVIEW_PAYLOAD, "get_portfolio_overview")?;
        Ok(PortfolioOverview::from(payload))
    }
}

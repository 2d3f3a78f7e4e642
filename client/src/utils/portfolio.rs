//! # Portfolio Metrics
//!
//! Pure derivations of display metrics from server DTOs. No I/O, no
//! panics: arithmetic that would divide by zero is defined as `0`.

use serde::Serialize;
use shared::{CreatorAggregate, Investment, PortfolioOverviewPayload};

/// Gain or loss on `amount` as a percentage. `amount <= 0` yields `0`.
pub fn return_percentage(amount: f64, current_value: f64) -> f64 {
    if !amount.is_finite() || !current_value.is_finite() || amount <= 0.0 {
        return 0.0;
    }
    (current_value - amount) / amount * 100.0
}

/// Share of a video's value owned through `my_amount`, rounded to 4 decimals.
/// `video_current_value <= 0` yields `0`.
pub fn ownership_percentage(my_amount: f64, video_current_value: f64) -> f64 {
    if !my_amount.is_finite() || !video_current_value.is_finite() || video_current_value <= 0.0 {
        return 0.0;
    }
    round_to(my_amount / video_current_value * 100.0, 4)
}

/// Fill in each creator's share of `total_invested`.
///
/// `total_invested <= 0` sets every percentage to `0`.
pub fn creator_distribution(by_creator: &[CreatorAggregate], total_invested: f64) -> Vec<CreatorAggregate> {
    let valid_total = total_invested > 0.0 && total_invested.is_finite();
    by_creator
        .iter()
        .map(|creator| {
            let percentage = if valid_total && creator.total_invested.is_finite() {
                creator.total_invested / total_invested * 100.0
            } else {
                0.0
            };
            CreatorAggregate {
                percentage,
                ..creator.clone()
            }
        })
        .collect()
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let factor = 10f64.powi(decimals);
    (value * factor).round() / factor
}

/// Portfolio with client-derived metrics
#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct PortfolioOverview {
    pub total_invested: f64,
    pub current_value: f64,
    pub return_pct: f64,
    pub investment_count: u64,
    pub by_creator: Vec<CreatorAggregate>,
}

impl From<PortfolioOverviewPayload> for PortfolioOverview {
    fn from(payload: PortfolioOverviewPayload) -> Self {
        let totals = payload.portfolio;
        Self {
            return_pct: return_percentage(totals.total_invested, totals.current_value),
            by_creator: creator_distribution(&payload.by_creator, totals.total_invested),
            total_invested: totals.total_invested,
            current_value: totals.current_value,
            investment_count: totals.investment_count,
        }
    }
}

impl PortfolioOverview {
    pub fn profit(&self) -> f64 {
        self.current_value - self.total_invested
    }
}

/// Display metrics for one investment row
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct InvestmentMetrics {
    pub return_pct: f64,
    /// Share of the underlying video, when the video payload was included
    pub ownership_pct: Option<f64>,
}

impl InvestmentMetrics {
    pub fn for_investment(investment: &Investment) -> Self {
        Self {
            return_pct: return_percentage(investment.amount, investment.current_value),
            ownership_pct: investment
                .video
                .as_ref()
                .map(|video| ownership_percentage(investment.amount, video.current_value)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_return_percentage() {
        assert_eq!(return_percentage(100.0, 150.0), 50.0);
        assert_eq!(return_percentage(100.0, 50.0), -50.0);
        for current in [0.0, 1.0, -3.0, 1e12, f64::NAN] {
            assert_eq!(return_percentage(0.0, current), 0.0);
        }
        assert_eq!(return_percentage(-10.0, 5.0), 0.0);
    }

    #[test]
    fn test_ownership_percentage() {
        assert_eq!(ownership_percentage(25.0, 0.0), 0.0);
        assert_eq!(ownership_percentage(25.0, 100.0), 25.0);
        assert_eq!(ownership_percentage(1.0, 3.0), 33.3333);
        assert_eq!(ownership_percentage(5.0, -1.0), 0.0);
    }

    fn creator(name: &str, total: f64) -> CreatorAggregate {
        CreatorAggregate {
            creator: Some(name.to_string()),
            total_invested: total,
            ..Default::default()
        }
    }

    #[test]
    fn test_creator_distribution() {
        let result = creator_distribution(&[creator("a", 150.0), creator("b", 50.0)], 200.0);
        assert_eq!(result[0].percentage, 75.0);
        assert_eq!(result[1].percentage, 25.0);
        assert_eq!(result[1].creator.as_deref(), Some("b"));
    }

    #[test]
    fn test_distribution_with_zero_total_is_all_zero() {
        let payload: PortfolioOverviewPayload = serde_json::from_value(serde_json::json!({
            "portfolio": {"total_invested": 0, "current_value": 0, "investment_count": 0},
            "by_creator": {"mira": {"total_invested": 0}, "kai": {"total_invested": 12}}
        }))
        .unwrap();

        let overview = PortfolioOverview::from(payload);
        assert_eq!(overview.return_pct, 0.0);
        assert_eq!(overview.by_creator.len(), 2);
        for c in &overview.by_creator {
            assert_eq!(c.percentage, 0.0);
            assert!(c.percentage.is_finite());
        }
    }

    #[test]
    fn test_pure_functions_are_order_independent() {
        let first = return_percentage(80.0, 100.0);
        let _ = ownership_percentage(1.0, 2.0);
        let _ = creator_distribution(&[creator("x", 1.0)], 0.0);
        assert_eq!(return_percentage(80.0, 100.0), first);
    }

    #[test]
    fn test_investment_metrics() {
        let investment: Investment = serde_json::from_value(serde_json::json!({
            "id": 1, "video_id": 2, "amount": 25, "current_value": 30,
            "video": {"id": 2, "current_value": 100}
        }))
        .unwrap();
        let metrics = InvestmentMetrics::for_investment(&investment);
        assert_eq!(metrics.return_pct, 20.0);
        assert_eq!(metrics.ownership_pct, Some(25.0));
    }
}

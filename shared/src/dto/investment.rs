//! # Investment Data Transfer Objects
//!
//! Investments, the portfolio overview, and per-creator aggregates.
//!
//! The backend splits every investment 25% to the creator and 75% to the
//! video pool. That arithmetic happens server-side only; these DTOs carry
//! the resulting numbers and nothing here recomputes them.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

use super::de::{f64_lenient, u64_lenient};
use super::video::Video;

/// Invest request (`POST /regular/investments`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InvestRequest {
    pub video_id: i64,
    pub amount: f64,
}

/// Lifecycle state of an investment
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentStatus {
    #[default]
    Active,
    Pending,
    Completed,
    Cancelled,
    #[serde(other)]
    Unknown,
}

/// A client's stake in a video
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Investment {
    pub id: i64,
    pub video_id: i64,
    #[serde(deserialize_with = "f64_lenient")]
    pub amount: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub current_value: f64,
    #[serde(default)]
    pub status: InvestmentStatus,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub video: Option<Video>,
}

impl Investment {
    /// `created_at` as a UTC timestamp, when it is RFC 3339.
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        self.created_at
            .as_deref()
            .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
            .map(|dt| dt.with_timezone(&Utc))
    }
}

/// Portfolio totals as reported by the server
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PortfolioTotals {
    #[serde(default, deserialize_with = "f64_lenient")]
    pub total_invested: f64,
    #[serde(default, alias = "total_current_value", deserialize_with = "f64_lenient")]
    pub current_value: f64,
    #[serde(default, alias = "total_investments", deserialize_with = "u64_lenient")]
    pub investment_count: u64,
}

/// Amount invested with one creator
///
/// `percentage` is never trusted from the wire; it is recomputed client-side
/// from `total_invested` and the portfolio total.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreatorAggregate {
    #[serde(default)]
    pub creator_id: Option<i64>,
    #[serde(default, alias = "creator_name", alias = "username")]
    pub creator: Option<String>,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub total_invested: f64,
    #[serde(default, alias = "count", deserialize_with = "u64_lenient")]
    pub investment_count: u64,
    #[serde(default, skip_deserializing)]
    pub percentage: f64,
}

/// Raw `GET /regular/investments/portfolio/overview` payload.
///
/// `by_creator` arrives either as an array or as an object keyed by creator
/// name; both decode to a list in the server's order.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PortfolioOverviewPayload {
    pub portfolio: PortfolioTotals,
    #[serde(default, deserialize_with = "creator_list")]
    pub by_creator: Vec<CreatorAggregate>,
}

fn creator_list<'de, D>(deserializer: D) -> Result<Vec<CreatorAggregate>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Shape {
        List(Vec<CreatorAggregate>),
        Keyed(BTreeMap<String, CreatorAggregate>),
        Empty(()),
    }

    Ok(match Shape::deserialize(deserializer)? {
        Shape::List(list) => list,
        Shape::Keyed(map) => map
            .into_iter()
            .map(|(key, mut aggregate)| {
                if aggregate.creator.is_none() {
                    aggregate.creator = Some(key);
                }
                aggregate
            })
            .collect(),
        Shape::Empty(()) => Vec::new(),
    })
}

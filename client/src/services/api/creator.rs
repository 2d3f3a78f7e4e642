//! # Creator Endpoints
//!
//! Creator profile and earnings statistics (creator accounts only; the
//! server answers 403 for regular users, surfaced as `AuthRequired`).

use reqwest::Method;
use shared::{CreatorProfile, CreatorStats, UpdateCreatorProfileRequest};

use super::client::{ApiClient, Auth};
use super::envelope;
use crate::core::error::Result;

const CREATOR_PROFILE_PAYLOAD: &[&str] = &["/data/profile", "/data/creator", "/profile", "/creator", "/data", ""];
const CREATOR_STATS_PAYLOAD: &[&str] = &["/data/stats", "/stats", "/data", ""];

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn get_creator_profile(&self) -> Result<CreatorProfile> {
        let request = self.authed(Method::GET, self.url(&["creator", "profile"]))?;
        let body = self.send(request, Auth::Bearer, "get_creator_profile").await?;
        envelope::extract(&body, CREATOR_PROFILE_PAYLOAD, "get_creator_profile")
    }

    #[tracing::instrument(skip(self, update))]
    pub async fn update_creator_profile(&self, update: &UpdateCreatorProfileRequest) -> Result<CreatorProfile> {
        let request = self
            .authed(Method::PUT, self.url(&["creator", "profile"]))?
            .json(update);
        let body = self.send(request, Auth::Bearer, "update_creator_profile").await?;
        envelope::extract(&body, CREATOR_PROFILE_PAYLOAD, "update_creator_profile")
    }

    #[tracing::instrument(skip(self))]
    pub async fn get_creator_stats(&self) -> Result<CreatorStats> {
        let request = self.authed(Method::GET, self.url(&["creator", "stats"]))?;
        let body = self.send(request, Auth::Bearer, "get_creator_stats").await?;
        envelope::extract(&body, CREATOR_STATS_PAYLOAD, "get_creator_stats")
    }
}

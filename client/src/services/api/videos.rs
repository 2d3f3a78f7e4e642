//! # Video Endpoints

use reqwest::Method;
use shared::{Paginated, Video};

use super::client::{ApiClient, Auth};
use super::envelope;
use crate::core::error::Result;

const VIDEO_PAGE_PAYLOAD: &[&str] = &["/data/videos", "/videos", "", "/data"];

impl ApiClient {
    /// One page of a creator's videos.
    #[tracing::instrument(skip(self))]
    pub async fn get_videos_by_creator(&self, creator_id: i64, page: u32, per_page: u32) -> Result<Paginated<Video>> {
        let id = creator_id.to_string();
        let request = self
            .authed(Method::GET, self.url(&["regular", "videos", "by-creator", &id]))?
            .query(&[("per_page", per_page), ("page", page)]);
        let body = self.send(request, Auth::Bearer, "get_videos_by_creator").await?;
        envelope::extract(&body, VIDEO_PAGE_PAYLOAD, "get_videos_by_creator")
    }
}

//! # Follow Endpoints
//!
//! Follow state changes are idempotent for callers: following someone
//! already followed, or unfollowing someone not followed, reports the
//! resulting state instead of an error.

use reqwest::Method;
use shared::{FollowRequest, FollowStatus};

use super::client::{ApiClient, Auth};
use super::envelope;
use crate::core::error::{ApiError, ErrorKind, Result};

const FOLLOW_STATUS_PAYLOAD: &[&str] = &["/data", ""];

impl ApiClient {
    #[tracing::instrument(skip(self))]
    pub async fn follow_user(&self, user_id: i64) -> Result<FollowStatus> {
        let request = self
            .authed(Method::POST, self.url(&["follows"]))?
            .json(&FollowRequest { following_id: user_id });

        match self.send(request, Auth::Bearer, "follow_user").await {
            Ok(_) => Ok(FollowStatus { is_following: true }),
            Err(e) if is_already_following(&e) => {
                tracing::debug!(user_id, "Already following");
                Ok(FollowStatus { is_following: true })
            }
            Err(e) => Err(e),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn unfollow_user(&self, user_id: i64) -> Result<FollowStatus> {
        let id = user_id.to_string();
        let request = self.authed(Method::DELETE, self.url(&["follows", &id]))?;

        match self.send(request, Auth::Bearer, "unfollow_user").await {
            Ok(_) => Ok(FollowStatus { is_following: false }),
            Err(e) if e.kind == ErrorKind::NotFound => {
                tracing::debug!(user_id, "Was not following");
                Ok(FollowStatus { is_following: false })
            }
            Err(e) => Err(e),
        }
    }

    #[tracing::instrument(skip(self))]
    pub async fn check_following_status(&self, user_id: i64) -> Result<FollowStatus> {
        let id = user_id.to_string();
        let request = self.authed(Method::GET, self.url(&["follows", "check", &id]))?;
        let body = self.send(request, Auth::Bearer, "check_following_status").await?;
        envelope::extract(&body, FOLLOW_STATUS_PAYLOAD, "check_following_status")
    }
}

/// A conflict, or a validation error that says the follow already exists.
fn is_already_following(err: &ApiError) -> bool {
    if err.kind != ErrorKind::Validation {
        return false;
    }
    if err.http_status == Some(409) {
        return true;
    }
    err.server_message
        .as_deref()
        .is_some_and(|m| m.to_ascii_lowercase().contains("already"))
}

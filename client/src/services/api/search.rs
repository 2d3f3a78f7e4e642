//! # User Search

use reqwest::Method;
use serde_json::Value;
use shared::UserProfile;

use super::client::{ApiClient, Auth};
use super::envelope;
use super::profile::PROFILE_PAYLOAD;
use crate::core::error::{ErrorKind, Result};

// `/data` last: it only counts when it holds an array.
const USER_LIST_PAYLOAD: &[&str] = &["/data/users", "/users", "/data/profiles", "/profiles", "/data"];

impl ApiClient {
    /// Look up users by username.
    ///
    /// A blank query returns no results without a request, and an unknown
    /// username (404) is an empty result rather than an error.
    #[tracing::instrument(skip(self))]
    pub async fn search_users(&self, query: &str) -> Result<Vec<UserProfile>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let request = self.authed(Method::GET, self.url(&["profile", "username", query]))?;
        let body = match self.send(request, Auth::Bearer, "search_users").await {
            Ok(body) => body,
            Err(e) if e.kind == ErrorKind::NotFound => {
                tracing::debug!("No user matched");
                return Ok(Vec::new());
            }
            Err(e) => return Err(e),
        };

        if has_any(&body, USER_LIST_PAYLOAD) {
            return envelope::extract(&body, USER_LIST_PAYLOAD, "search_users");
        }
        let profile: UserProfile = envelope::extract(&body, PROFILE_PAYLOAD, "search_users")?;
        Ok(vec![profile])
    }
}

fn has_any(body: &Value, pointers: &[&str]) -> bool {
    pointers
        .iter()
        .any(|p| body.pointer(p).is_some_and(Value::is_array))
}

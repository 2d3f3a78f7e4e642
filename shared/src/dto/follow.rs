use serde::{Deserialize, Serialize};

/// Follow request (`POST /follows`)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct FollowRequest {
    pub following_id: i64,
}

/// Whether the session user follows a given user
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct FollowStatus {
    #[serde(alias = "following")]
    pub is_following: bool,
}

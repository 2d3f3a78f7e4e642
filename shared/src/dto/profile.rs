//! # Profile Data Transfer Objects
//!
//! User profiles, creator profiles, and creator statistics.

use serde::{Deserialize, Serialize};

use super::de::{f64_lenient, u64_lenient};

/// Account type, carried on the wire as `user_type_id`.
///
/// Decides which navigation stack and API surface a client uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UserType {
    Regular,
    Creator,
}

impl UserType {
    pub const REGULAR_ID: i64 = 1;
    pub const CREATOR_ID: i64 = 2;

    /// Map a wire id to a user type. Unknown ids are `None`.
    pub fn from_id(id: i64) -> Option<Self> {
        match id {
            Self::REGULAR_ID => Some(UserType::Regular),
            Self::CREATOR_ID => Some(UserType::Creator),
            _ => None,
        }
    }

    pub fn id(self) -> i64 {
        match self {
            UserType::Regular => Self::REGULAR_ID,
            UserType::Creator => Self::CREATOR_ID,
        }
    }
}

/// User profile (cached in the session)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserProfile {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default)]
    pub phone: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub user_type_id: Option<i64>,
    #[serde(default, alias = "profile_photo", alias = "profile_photo_path")]
    pub profile_photo_url: Option<String>,
}

impl UserProfile {
    /// Resolved account type, if the server sent a known `user_type_id`.
    pub fn user_type(&self) -> Option<UserType> {
        self.user_type_id.and_then(UserType::from_id)
    }

    pub fn is_creator(&self) -> bool {
        self.user_type() == Some(UserType::Creator)
    }

    /// Name to show in lists: display name, then username, then `user #id`.
    pub fn display_name(&self) -> String {
        self.name
            .as_deref()
            .filter(|n| !n.trim().is_empty())
            .or(self.username.as_deref().filter(|u| !u.trim().is_empty()))
            .map(str::to_string)
            .unwrap_or_else(|| format!("user #{}", self.id))
    }
}

/// Fields submitted by the profile-completion form.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CompleteProfileRequest {
    pub name: String,
    pub username: String,
    pub bio: Option<String>,
    pub phone: Option<String>,
    pub user_type_id: i64,
    pub profile_photo: Option<ProfilePhoto>,
}

/// Image attached to a profile-completion request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProfilePhoto {
    pub file_name: String,
    pub mime_type: String,
    pub bytes: Vec<u8>,
}

/// Creator profile
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatorProfile {
    pub id: i64,
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub bio: Option<String>,
    #[serde(default, alias = "profile_photo")]
    pub profile_photo_url: Option<String>,
    #[serde(default, deserialize_with = "u64_lenient")]
    pub followers_count: u64,
    #[serde(default, deserialize_with = "u64_lenient")]
    pub following_count: u64,
    #[serde(default, deserialize_with = "u64_lenient")]
    pub videos_count: u64,
}

/// Editable creator-profile fields (`PUT /creator/profile`).
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct UpdateCreatorProfileRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub username: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub bio: Option<String>,
}

/// Creator earnings and reach (`GET /creator/stats`)
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CreatorStats {
    #[serde(default, deserialize_with = "u64_lenient")]
    pub total_videos: u64,
    #[serde(default, alias = "total_view_count", deserialize_with = "u64_lenient")]
    pub total_views: u64,
    #[serde(default, deserialize_with = "u64_lenient")]
    pub total_investors: u64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub total_invested: f64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub total_earnings: f64,
}

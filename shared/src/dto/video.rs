use serde::{Deserialize, Serialize};

use super::de::{f64_lenient, u64_lenient};

/// Creator summary embedded in video payloads
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CreatorSummary {
    pub id: i64,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default, alias = "profile_photo")]
    pub profile_photo_url: Option<String>,
}

/// Video (read-only; value and views are computed server-side)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Video {
    pub id: i64,
    #[serde(default, alias = "title")]
    pub caption: Option<String>,
    #[serde(default, alias = "thumbnail")]
    pub thumbnail_url: Option<String>,
    #[serde(default, alias = "duration", deserialize_with = "u64_lenient")]
    pub duration_sec: u64,
    #[serde(default, alias = "views", deserialize_with = "u64_lenient")]
    pub view_count: u64,
    #[serde(default, deserialize_with = "f64_lenient")]
    pub current_value: f64,
    #[serde(default, alias = "user")]
    pub creator: Option<CreatorSummary>,
}

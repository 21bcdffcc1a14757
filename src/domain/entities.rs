//! Domain entities. Pure data structures for the core business.
//!
//! No feed-rs/HTTP types here; adapters map into these.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Tag marking an item as imported from the CLI releases feed.
pub const CLI_TAG: &str = "cli";

/// The feed as fetched, before any filtering. Also the shape of the debug cache.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFeed {
    pub title: Option<String>,
    pub link: Option<String>,
    pub entries: Vec<RawFeedEntry>,
}

/// A single feed entry, newest first as given by the feed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawFeedEntry {
    pub id: String,
    pub title: Option<String>,
    pub link: Option<String>,
    /// Published timestamp, or the updated timestamp when the feed has none.
    pub pub_date: Option<DateTime<Utc>>,
    /// HTML body.
    pub content: Option<String>,
    /// Plain-text body: tags stripped, entities decoded.
    pub content_snippet: Option<String>,
}

/// A release ready to be written as a content file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FeedItem {
    pub title: String,
    pub source_url: String,
    pub excerpt: String,
    pub date: Option<DateTime<Utc>>,
    pub image_url: String,
    /// Filesystem identifier. Two items with the same slug overwrite each other.
    pub slug: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

/// Pointer to the newest release in the feed, whatever its version.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LatestRelease {
    pub version: String,
    pub source_url: String,
}

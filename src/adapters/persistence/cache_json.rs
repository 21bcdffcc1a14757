//! Implements CachePort using a JSON file.
//!
//! Keeps the last raw fetch result around for troubleshooting feed-format changes.

use crate::adapters::persistence::atomic::write_replace;
use crate::domain::{DomainError, RawFeed};
use crate::ports::CachePort;
use std::path::Path;
use tracing::info;

/// JSON file-based raw feed cache. Each save replaces the previous dump.
pub struct FeedCacheJson {
    path: std::path::PathBuf,
}

impl FeedCacheJson {
    pub fn new(path: impl AsRef<Path>) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }
}

#[async_trait::async_trait]
impl CachePort for FeedCacheJson {
    async fn save_raw_feed(&self, feed: &RawFeed) -> Result<(), DomainError> {
        let json =
            serde_json::to_string_pretty(feed).map_err(|e| DomainError::Cache(e.to_string()))?;
        write_replace(&self.path, json.as_bytes())
            .await
            .map_err(|e| DomainError::Cache(format!("write {}: {}", self.path.display(), e)))?;
        info!(
            path = %self.path.display(),
            entries = feed.entries.len(),
            "cached raw feed"
        );
        Ok(())
    }
}

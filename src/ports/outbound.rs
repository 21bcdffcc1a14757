//! Outbound ports. Application calls into infrastructure.
//!
//! Implemented by adapters.

use crate::domain::{DomainError, FeedItem, LatestRelease, RawFeed};

/// Release feed gateway. One request per call, no retries.
#[async_trait::async_trait]
pub trait FeedGateway: Send + Sync {
    /// Fetch and parse the feed. Entries keep the feed's order (newest first).
    async fn fetch_feed(&self) -> Result<RawFeed, DomainError>;
}

/// Content repository. Persists imported items and the latest-release pointer.
#[async_trait::async_trait]
pub trait ContentRepoPort: Send + Sync {
    /// Write one content file for the item, keyed by its slug. Overwrites.
    async fn save_item(&self, item: &FeedItem) -> Result<(), DomainError>;

    /// Write the latest-release pointer. Overwrites.
    async fn save_latest_release(&self, latest: &LatestRelease) -> Result<(), DomainError>;
}

/// Debug cache for the raw fetch result.
#[async_trait::async_trait]
pub trait CachePort: Send + Sync {
    /// Store the complete, unfiltered feed.
    async fn save_raw_feed(&self, feed: &RawFeed) -> Result<(), DomainError>;
}

//! Latest release = the first feed entry, whatever its version.

use crate::domain::version::version_from_link;
use crate::domain::{DomainError, LatestRelease, RawFeedEntry};

/// Take entry 0 as the newest release. Feed order is trusted; no version filter applies.
///
/// A link without a path segment records an empty version.
pub fn extract_latest_release(entries: &[RawFeedEntry]) -> Result<LatestRelease, DomainError> {
    let newest = entries.first().ok_or(DomainError::EmptyFeed)?;
    let link = newest
        .link
        .clone()
        .ok_or(DomainError::MissingEntryField("link"))?;
    let version = version_from_link(&link).unwrap_or_default();
    Ok(LatestRelease {
        version,
        source_url: link,
    })
}

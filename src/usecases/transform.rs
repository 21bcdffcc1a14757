//! Raw feed entries -> validated FeedItems.
//!
//! Only dot-zero releases (`7.2.0`) are imported; patches and pre-releases are dropped.

use crate::domain::version::{is_dot_zero, version_from_link};
use crate::domain::{CLI_TAG, DomainError, FeedItem, RawFeedEntry, validate};
use tracing::debug;

/// Preview image shared by every imported release.
pub const RELEASE_IMAGE_URL: &str = "/images/cli-release.png";

/// Map entries in feed order. The first item failing validation aborts the whole batch.
pub fn transform_entries(entries: &[RawFeedEntry]) -> Result<Vec<FeedItem>, DomainError> {
    entries
        .iter()
        .filter_map(|entry| {
            let Some(version) = entry.link.as_deref().and_then(version_from_link) else {
                debug!(id = %entry.id, "skipping entry without version tag");
                return None;
            };
            if !is_dot_zero(&version) {
                debug!(id = %entry.id, version = %version, "skipping non dot-zero release");
                return None;
            }
            Some(validate(to_feed_item(entry, &version)).map_err(DomainError::from))
        })
        .collect()
}

/// Build the candidate item. Missing pieces stay empty for the validator to report.
fn to_feed_item(entry: &RawFeedEntry, version: &str) -> FeedItem {
    let title = match entry.title.as_deref() {
        Some(title) if title == version => format!("CLI Release: {}", version),
        title => title.unwrap_or_default().to_string(),
    };
    let slug = entry
        .pub_date
        .map(|date| format!("{}-{}", date.format("%Y-%m-%d"), version_slug(version)))
        .unwrap_or_default();

    FeedItem {
        title,
        source_url: entry.link.clone().unwrap_or_default(),
        excerpt: double_newlines(entry.content_snippet.as_deref().unwrap_or_default()),
        date: entry.pub_date,
        image_url: RELEASE_IMAGE_URL.to_string(),
        slug,
        tags: vec![CLI_TAG.to_string()],
    }
}

/// `7.2.0` -> `cli-7-2-0`.
fn version_slug(version: &str) -> String {
    format!("{}-{}", CLI_TAG, version.replace('.', "-"))
}

/// Every newline becomes a paragraph break in the rendered markdown.
fn double_newlines(text: &str) -> String {
    text.replace('\n', "\n\n")
}

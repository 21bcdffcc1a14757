//! Filesystem adapters. Content files, latest-release pointer, raw feed cache.

pub mod atomic;
pub mod cache_json;
pub mod markdown_repo;

pub use cache_json::FeedCacheJson;
pub use markdown_repo::{MarkdownRepo, render_markdown};

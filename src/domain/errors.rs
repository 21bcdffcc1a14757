//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use crate::domain::validation::ValidationError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Feed fetch failed: {0}")]
    Fetch(String),

    #[error("Feed parse failed: {0}")]
    Parse(String),

    /// Position 0 of the feed is the latest release; there is none.
    #[error("Feed has no entries; cannot determine the latest release")]
    EmptyFeed,

    #[error("Latest feed entry has no {0}")]
    MissingEntryField(&'static str),

    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Repository error: {0}")]
    Repo(String),

    #[error("Cache error: {0}")]
    Cache(String),
}

//! Core domain layer. No external I/O dependencies.
//!
//! Entities and business rules live here. Dependencies flow inward.

pub mod entities;
pub mod errors;
pub mod validation;
pub mod version;

pub use entities::{CLI_TAG, FeedItem, LatestRelease, RawFeed, RawFeedEntry};
pub use errors::DomainError;
pub use validation::{RequiredField, ValidationError, validate};

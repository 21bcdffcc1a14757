//! Port traits. API boundaries for the hexagon.
//!
//! - Outbound: Called by application into infrastructure (feed, filesystem)

pub mod outbound;

pub use outbound::{CachePort, ContentRepoPort, FeedGateway};

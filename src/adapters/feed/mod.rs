//! Feed adapter. Implements FeedGateway for Atom/RSS release feeds.

pub mod http_gateway;
pub mod mapper;

pub use http_gateway::HttpFeedGateway;
pub use mapper::{html_to_snippet, parse_feed};

//! Implements FeedGateway over HTTP. One GET, no retries.

use crate::adapters::feed::mapper::parse_feed;
use crate::domain::{DomainError, RawFeed};
use crate::ports::FeedGateway;
use reqwest::Client;
use std::time::Duration;
use tracing::info;

/// Connect timeout in seconds.
const CONNECT_TIMEOUT_SECS: u64 = 10;

/// Maximum number of redirects to follow.
const MAX_REDIRECTS: usize = 5;

/// Maximum feed size in bytes (5MB).
pub const MAX_FEED_SIZE: u64 = 5 * 1024 * 1024;

const USER_AGENT: &str = concat!("release-import/", env!("CARGO_PKG_VERSION"));

/// HTTP feed gateway for a single fixed feed URL.
pub struct HttpFeedGateway {
    client: Client,
    feed_url: String,
}

impl HttpFeedGateway {
    /// Create a gateway for `feed_url`.
    ///
    /// # Arguments
    /// * `feed_url` - Atom/RSS endpoint (e.g. "https://github.com/org/repo/releases.atom")
    /// * `timeout` - Total request timeout, including reading the body
    pub fn new(feed_url: impl Into<String>, timeout: Duration) -> Result<Self, DomainError> {
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(CONNECT_TIMEOUT_SECS))
            .timeout(timeout)
            .redirect(reqwest::redirect::Policy::limited(MAX_REDIRECTS))
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DomainError::Fetch(format!("failed to create HTTP client: {}", e)))?;

        Ok(Self {
            client,
            feed_url: feed_url.into(),
        })
    }
}

#[async_trait::async_trait]
impl FeedGateway for HttpFeedGateway {
    async fn fetch_feed(&self) -> Result<RawFeed, DomainError> {
        let response = self
            .client
            .get(&self.feed_url)
            .send()
            .await
            .map_err(|e| DomainError::Fetch(format!("request failed: {}", e)))?;

        if !response.status().is_success() {
            return Err(DomainError::Fetch(format!(
                "HTTP error {} from {}",
                response.status(),
                self.feed_url
            )));
        }

        if let Some(content_length) = response.content_length() {
            if content_length > MAX_FEED_SIZE {
                return Err(DomainError::Fetch(format!(
                    "feed too large: {} bytes (max {} bytes)",
                    content_length, MAX_FEED_SIZE
                )));
            }
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| DomainError::Fetch(format!("failed to read response: {}", e)))?;

        if bytes.len() as u64 > MAX_FEED_SIZE {
            return Err(DomainError::Fetch(format!(
                "feed too large: {} bytes (max {} bytes)",
                bytes.len(),
                MAX_FEED_SIZE
            )));
        }

        let feed = parse_feed(&bytes)?;
        info!(
            url = %self.feed_url,
            bytes = bytes.len(),
            entries = feed.entries.len(),
            "fetched feed"
        );
        Ok(feed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{header_exists, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    const ATOM: &str = r#"<?xml version="1.0" encoding="UTF-8"?>
<feed xmlns="http://www.w3.org/2005/Atom">
  <id>tag:github.com,2008:https://github.com/acme/cli/releases</id>
  <title>Release notes from cli</title>
  <updated>2023-05-01T09:30:00Z</updated>
  <entry>
    <id>tag:github.com,2008:Repository/1/v7.2.0</id>
    <updated>2023-05-01T09:30:00Z</updated>
    <link rel="alternate" type="text/html" href="https://github.com/acme/cli/releases/tag/v7.2.0"/>
    <title>7.2.0</title>
    <content type="html">&lt;p&gt;Fixed bug&lt;/p&gt;</content>
  </entry>
</feed>"#;

    fn gateway(server: &MockServer) -> HttpFeedGateway {
        HttpFeedGateway::new(
            format!("{}/acme/cli/releases.atom", server.uri()),
            Duration::from_secs(5),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_fetch_feed_success() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/acme/cli/releases.atom"))
            .and(header_exists("user-agent"))
            .respond_with(
                ResponseTemplate::new(200)
                    .insert_header("Content-Type", "application/atom+xml")
                    .set_body_string(ATOM),
            )
            .expect(1)
            .mount(&mock_server)
            .await;

        let feed = gateway(&mock_server).fetch_feed().await.unwrap();

        assert_eq!(feed.entries.len(), 1);
        assert_eq!(feed.entries[0].title.as_deref(), Some("7.2.0"));
        assert_eq!(
            feed.entries[0].content_snippet.as_deref(),
            Some("Fixed bug")
        );
    }

    #[tokio::test]
    async fn test_fetch_feed_http_error_is_fetch_failure() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(503))
            .mount(&mock_server)
            .await;

        let err = gateway(&mock_server).fetch_feed().await.unwrap_err();

        assert!(matches!(err, DomainError::Fetch(_)));
        assert!(err.to_string().contains("503"));
    }

    #[tokio::test]
    async fn test_fetch_feed_unparseable_body_is_parse_failure() {
        let mock_server = MockServer::start().await;
        Mock::given(method("GET"))
            .respond_with(ResponseTemplate::new(200).set_body_string("not a feed at all"))
            .mount(&mock_server)
            .await;

        let err = gateway(&mock_server).fetch_feed().await.unwrap_err();

        assert!(matches!(err, DomainError::Parse(_)));
    }

    #[tokio::test]
    async fn test_fetch_feed_connection_refused() {
        // Port 9 (discard) is closed on test hosts.
        let gateway =
            HttpFeedGateway::new("http://127.0.0.1:9/releases.atom", Duration::from_secs(2))
                .unwrap();
        let err = gateway.fetch_feed().await.unwrap_err();

        assert!(matches!(err, DomainError::Fetch(_)));
    }
}

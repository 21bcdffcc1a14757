//! Import run: fetch -> cache raw -> transform + extract latest -> write files.
//!
//! - Every stage consumes the previous stage's output; nothing is kept between runs
//! - The raw feed is cached before transformation, so a feed-format change is debuggable
//! - First error ends the run; the caller turns it into a non-zero exit

use crate::domain::DomainError;
use crate::ports::{CachePort, ContentRepoPort, FeedGateway};
use crate::usecases::latest_release::extract_latest_release;
use crate::usecases::transform::transform_entries;
use std::fmt;
use std::sync::Arc;
use tracing::{error, info};

/// Stages of a run. `Failed` is reachable from every other stage and is final.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Fetching,
    Transforming,
    Writing,
    Done,
    Failed,
}

impl fmt::Display for RunState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            RunState::Fetching => "fetching",
            RunState::Transforming => "transforming",
            RunState::Writing => "writing",
            RunState::Done => "done",
            RunState::Failed => "failed",
        };
        f.write_str(s)
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportSummary {
    pub items_written: usize,
    pub entries_skipped: usize,
    pub latest_version: String,
}

/// Import service. Sequences the feed gateway, transformer and writers.
pub struct ImportService {
    feed: Arc<dyn FeedGateway>,
    repo: Arc<dyn ContentRepoPort>,
    cache: Arc<dyn CachePort>,
}

impl ImportService {
    pub fn new(
        feed: Arc<dyn FeedGateway>,
        repo: Arc<dyn ContentRepoPort>,
        cache: Arc<dyn CachePort>,
    ) -> Self {
        Self { feed, repo, cache }
    }

    /// Run one import. On error the stage that failed is logged and the error returned as-is.
    pub async fn run(&self) -> Result<ImportSummary, DomainError> {
        let mut state = RunState::Fetching;
        let result = self.run_stages(&mut state).await;
        match &result {
            Ok(summary) => {
                advance(&mut state, RunState::Done);
                info!(
                    items_written = summary.items_written,
                    entries_skipped = summary.entries_skipped,
                    latest_version = %summary.latest_version,
                    "import complete"
                );
            }
            Err(e) => {
                error!(stage = %state, error = %e, "import failed");
                advance(&mut state, RunState::Failed);
            }
        }
        result
    }

    async fn run_stages(&self, state: &mut RunState) -> Result<ImportSummary, DomainError> {
        info!(stage = %state, "import stage");
        let feed = self.feed.fetch_feed().await?;
        self.cache.save_raw_feed(&feed).await?;

        advance(state, RunState::Transforming);
        let items = transform_entries(&feed.entries)?;
        let latest = extract_latest_release(&feed.entries)?;

        advance(state, RunState::Writing);
        for item in &items {
            self.repo.save_item(item).await?;
        }
        self.repo.save_latest_release(&latest).await?;

        Ok(ImportSummary {
            items_written: items.len(),
            entries_skipped: feed.entries.len() - items.len(),
            latest_version: latest.version,
        })
    }
}

fn advance(state: &mut RunState, next: RunState) {
    *state = next;
    info!(stage = %state, "import stage");
}

//! Wiring & DI. Entry point: load config, bootstrap adapters, inject into ImportService, run once.
//! No business logic here. Any error ends the process with exit status 1.

use dotenv::dotenv;
use release_import::adapters::feed::HttpFeedGateway;
use release_import::adapters::persistence::{FeedCacheJson, MarkdownRepo};
use release_import::ports::{CachePort, ContentRepoPort, FeedGateway};
use release_import::shared::config::AppConfig;
use release_import::usecases::ImportService;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;
use tracing::{info, warn};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
    let env_loaded = dotenv();
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    match &env_loaded {
        Ok(path) => info!(path = %path.display(), "loaded .env"),
        Err(_) => info!(cwd = %cwd.display(), "no .env found (check CWD)"),
    }

    let cfg = AppConfig::load().map_err(|e| anyhow::anyhow!("invalid configuration: {}", e))?;

    // Content-store identifiers are consumed downstream; only report them here.
    if cfg.is_content_store_configured() {
        info!(
            project_id = cfg.project_id.as_deref().unwrap_or_default(),
            dataset = cfg.dataset.as_deref().unwrap_or_default(),
            "content store configured"
        );
    } else {
        warn!("RELEASE_IMPORT_PROJECT_ID / RELEASE_IMPORT_DATASET not set");
    }

    let feed_url = cfg.feed_url_or_default();
    let timeout_secs = cfg.http_timeout_secs_or_default();
    let paths = cfg.output_paths();
    info!(
        feed_url = %feed_url,
        timeout_secs,
        content_dir = %paths.content_dir.display(),
        latest_release = %paths.latest_release_file.display(),
        cache = %paths.cache_file.display(),
        "starting release import"
    );

    // --- Adapters ---
    let feed: Arc<dyn FeedGateway> = Arc::new(
        HttpFeedGateway::new(feed_url, Duration::from_secs(timeout_secs))
            .map_err(|e| anyhow::anyhow!("{}", e))?,
    );
    let repo: Arc<dyn ContentRepoPort> = Arc::new(MarkdownRepo::new(
        &paths.content_dir,
        &paths.latest_release_file,
    ));
    let cache: Arc<dyn CachePort> = Arc::new(FeedCacheJson::new(&paths.cache_file));

    // --- Run (fetching -> transforming -> writing -> done) ---
    let summary = ImportService::new(feed, repo, cache)
        .run()
        .await
        .map_err(|e| anyhow::anyhow!("release import failed: {}", e))?;

    println!(
        "Imported {} CLI release(s); latest release is {}",
        summary.items_written, summary.latest_version
    );

    Ok(())
}

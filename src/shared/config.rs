//! Application configuration. Feed URL, output paths, content-store identifiers.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// GitHub releases feed (Atom) imported by default.
pub const DEFAULT_FEED_URL: &str = "https://github.com/sanity-io/sanity/releases.atom";

/// Default total timeout for the feed request.
pub const DEFAULT_HTTP_TIMEOUT_SECS: u64 = 30;

const DEFAULT_CONTENT_DIR: &str = "content/cli-releases";
const DEFAULT_LATEST_RELEASE_PATH: &str = "data/latest-cli-release.json";
const DEFAULT_CACHE_PATH: &str = ".cache/cli-releases-feed.json";

#[derive(Debug, Deserialize, Default)]
pub struct AppConfig {
    /// Releases feed URL. Read from RELEASE_IMPORT_FEED_URL.
    #[serde(default)]
    pub feed_url: Option<String>,

    /// Directory all output paths are resolved against (default "."). Read from RELEASE_IMPORT_BASE_DIR.
    #[serde(default)]
    pub base_dir: Option<String>,

    /// One markdown file per release lands here. Read from RELEASE_IMPORT_CONTENT_DIR.
    #[serde(default)]
    pub content_dir: Option<String>,

    /// Pretty JSON pointer to the newest release. Read from RELEASE_IMPORT_LATEST_RELEASE_PATH.
    #[serde(default)]
    pub latest_release_path: Option<String>,

    /// Raw feed dump for debugging. Read from RELEASE_IMPORT_CACHE_PATH.
    #[serde(default)]
    pub cache_path: Option<String>,

    /// Total timeout in seconds for the feed request. Read from RELEASE_IMPORT_HTTP_TIMEOUT_SECS.
    #[serde(skip)]
    pub http_timeout_secs: Option<u64>,

    // ─────────────────────────────────────────────────────────────────────────
    // Content store (consumed downstream, not by the import itself)
    // ─────────────────────────────────────────────────────────────────────────
    /// Content-store project ID. Read from RELEASE_IMPORT_PROJECT_ID.
    #[serde(default)]
    pub project_id: Option<String>,

    /// Content-store dataset name. Read from RELEASE_IMPORT_DATASET.
    #[serde(default)]
    pub dataset: Option<String>,
}

/// Resolved locations of everything the import writes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputPaths {
    pub content_dir: PathBuf,
    pub latest_release_file: PathBuf,
    pub cache_file: PathBuf,
}

impl OutputPaths {
    /// Default layout under `base_dir`.
    pub fn under(base_dir: impl AsRef<Path>) -> Self {
        let base = base_dir.as_ref();
        Self {
            content_dir: base.join(DEFAULT_CONTENT_DIR),
            latest_release_file: base.join(DEFAULT_LATEST_RELEASE_PATH),
            cache_file: base.join(DEFAULT_CACHE_PATH),
        }
    }
}

impl AppConfig {
    pub fn load() -> Result<Self, config::ConfigError> {
        dotenv::dotenv().ok();
        let mut c = config::Config::builder();
        c = c.add_source(config::Environment::with_prefix("RELEASE_IMPORT"));
        if let Ok(path) = std::env::var("RELEASE_IMPORT_CONFIG") {
            c = c.add_source(config::File::with_name(&path));
        }
        let mut cfg: Self = c.build()?.try_deserialize()?;
        // Numeric values are parsed directly so a typo falls back to the default instead of failing the load.
        // Zero would time out every request; treat it as unset.
        cfg.http_timeout_secs = std::env::var("RELEASE_IMPORT_HTTP_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.trim().parse::<u64>().ok())
            .filter(|&secs| secs > 0);
        Ok(cfg)
    }

    /// Returns the feed URL. Defaults to DEFAULT_FEED_URL.
    pub fn feed_url_or_default(&self) -> String {
        self.feed_url
            .clone()
            .unwrap_or_else(|| DEFAULT_FEED_URL.to_string())
    }

    /// Returns the HTTP timeout in seconds. Defaults to 30 if unset, invalid or zero.
    pub fn http_timeout_secs_or_default(&self) -> u64 {
        self.http_timeout_secs
            .filter(|&secs| secs > 0)
            .unwrap_or(DEFAULT_HTTP_TIMEOUT_SECS)
    }

    /// Returns output paths, each resolved against the base directory.
    pub fn output_paths(&self) -> OutputPaths {
        let base = PathBuf::from(self.base_dir.as_deref().unwrap_or("."));
        let defaults = OutputPaths::under(&base);
        OutputPaths {
            content_dir: self
                .content_dir
                .as_deref()
                .map(|p| base.join(p))
                .unwrap_or(defaults.content_dir),
            latest_release_file: self
                .latest_release_path
                .as_deref()
                .map(|p| base.join(p))
                .unwrap_or(defaults.latest_release_file),
            cache_file: self
                .cache_path
                .as_deref()
                .map(|p| base.join(p))
                .unwrap_or(defaults.cache_file),
        }
    }

    /// Returns true if both content-store identifiers are set.
    pub fn is_content_store_configured(&self) -> bool {
        self.project_id.is_some() && self.dataset.is_some()
    }
}

//! Implements ContentRepoPort. One markdown file per release, front matter only.
//! Files: {content_dir}/{slug}.md. The latest-release pointer is a pretty JSON file.

use crate::adapters::persistence::atomic::write_replace;
use crate::domain::{DomainError, FeedItem, LatestRelease};
use crate::ports::ContentRepoPort;
use chrono::SecondsFormat;
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tracing::{debug, info};

const FRONT_MATTER_DELIMITER: &str = "---";

/// Every FeedItem field except the slug, which is the file name.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct FrontMatter<'a> {
    title: &'a str,
    source_url: &'a str,
    excerpt: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    date: Option<String>,
    image_url: &'a str,
    #[serde(skip_serializing_if = "<[String]>::is_empty")]
    tags: &'a [String],
}

impl<'a> From<&'a FeedItem> for FrontMatter<'a> {
    fn from(item: &'a FeedItem) -> Self {
        Self {
            title: &item.title,
            source_url: &item.source_url,
            excerpt: &item.excerpt,
            date: item
                .date
                .map(|d| d.to_rfc3339_opts(SecondsFormat::Millis, true)),
            image_url: &item.image_url,
            tags: &item.tags,
        }
    }
}

/// Render a content file: YAML front matter block, empty body.
pub fn render_markdown(item: &FeedItem) -> Result<String, DomainError> {
    let yaml = serde_yaml::to_string(&FrontMatter::from(item))
        .map_err(|e| DomainError::Repo(format!("serialize front matter: {}", e)))?;
    Ok(format!(
        "{delim}\n{yaml}{delim}\n",
        delim = FRONT_MATTER_DELIMITER
    ))
}

/// File-system content repository.
pub struct MarkdownRepo {
    content_dir: PathBuf,
    latest_release_path: PathBuf,
}

impl MarkdownRepo {
    pub fn new(content_dir: impl AsRef<Path>, latest_release_path: impl AsRef<Path>) -> Self {
        Self {
            content_dir: content_dir.as_ref().to_path_buf(),
            latest_release_path: latest_release_path.as_ref().to_path_buf(),
        }
    }

    fn item_path(&self, slug: &str) -> PathBuf {
        self.content_dir.join(format!("{}.md", slug))
    }
}

#[async_trait::async_trait]
impl ContentRepoPort for MarkdownRepo {
    /// Overwrites any file with the same slug. Does not read existing files.
    async fn save_item(&self, item: &FeedItem) -> Result<(), DomainError> {
        fs::create_dir_all(&self.content_dir)
            .await
            .map_err(|e| DomainError::Repo(format!("create content dir: {}", e)))?;
        let path = self.item_path(&item.slug);
        let markdown = render_markdown(item)?;
        fs::write(&path, markdown)
            .await
            .map_err(|e| DomainError::Repo(format!("write {}: {}", path.display(), e)))?;
        debug!(path = %path.display(), slug = %item.slug, "wrote content file");
        Ok(())
    }

    async fn save_latest_release(&self, latest: &LatestRelease) -> Result<(), DomainError> {
        let json = serde_json::to_string_pretty(latest)
            .map_err(|e| DomainError::Repo(e.to_string()))?;
        write_replace(&self.latest_release_path, json.as_bytes())
            .await
            .map_err(|e| {
                DomainError::Repo(format!(
                    "write {}: {}",
                    self.latest_release_path.display(),
                    e
                ))
            })?;
        info!(
            path = %self.latest_release_path.display(),
            version = %latest.version,
            "wrote latest release pointer"
        );
        Ok(())
    }
}

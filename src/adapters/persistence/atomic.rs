//! Write-replace helper shared by the file adapters.

use std::io;
use std::path::Path;
use tokio::fs;
use tokio::io::AsyncWriteExt;

/// Atomic save using the write-replace pattern.
/// 1. Create parent directories
/// 2. Write to a sibling temp file and sync_all()
/// 3. Rename over the target
///
/// Readers see either the old file or the new one, never a partial write.
pub async fn write_replace(path: &Path, contents: &[u8]) -> io::Result<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).await?;
    }

    let mut temp_name = path.file_name().unwrap_or_default().to_os_string();
    temp_name.push(".tmp");
    let temp_path = path.with_file_name(temp_name);

    let mut f = fs::File::create(&temp_path).await?;
    f.write_all(contents).await?;
    f.sync_all().await?;
    drop(f); // Close file handle before rename

    fs::rename(&temp_path, path).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_write_replace_creates_parents_and_overwrites() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/deeper/pointer.json");

        write_replace(&path, b"first").await.unwrap();
        write_replace(&path, b"second").await.unwrap();

        assert_eq!(fs::read_to_string(&path).await.unwrap(), "second");
        assert!(!dir.path().join("nested/deeper/pointer.json.tmp").exists());
    }
}

//! Remote file downloads

use crate::model::RemoteFileEntry;
use anyhow::{Context, Result};
use reqwest::StatusCode;
use std::path::{Path, PathBuf};
use std::time::Duration;
use tokio::fs;
use tokio::io::AsyncWriteExt;
use url::Url;

/// Downloads remote files below the output directory
///
/// The HTTP client is created once per run and handed in, so every
/// download shares its connection pool and user agent.
pub struct RemoteFileBuilder {
    root: PathBuf,
    client: reqwest::Client,
    timeout: Duration,
}

impl RemoteFileBuilder {
    pub fn new(root: PathBuf, client: reqwest::Client, timeout: Duration) -> Self {
        Self {
            root,
            client,
            timeout,
        }
    }

    /// Validate the entry and parse its URI
    pub fn validate(remote: &RemoteFileEntry) -> Result<Url> {
        if remote.uri.is_empty() {
            anyhow::bail!("Remote file URI cannot be empty.");
        }
        if remote.path.is_empty() {
            anyhow::bail!("Remote file path cannot be empty.");
        }

        let url = Url::parse(&remote.uri)
            .with_context(|| format!("Invalid remote file URI: {}", remote.uri))?;
        if !matches!(url.scheme(), "http" | "https") {
            anyhow::bail!(
                "Unsupported URI scheme '{}' for {}",
                url.scheme(),
                remote.uri
            );
        }

        Ok(url)
    }

    /// Download the file; a failed download leaves no partial file behind
    pub async fn build(&self, remote: &RemoteFileEntry) -> Result<PathBuf> {
        let url = Self::validate(remote)?;

        let target = self.root.join(&remote.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        if let Err(e) = self.download(url, &target).await {
            if fs::try_exists(&target).await.unwrap_or(false) {
                let _ = fs::remove_file(&target).await;
            }
            return Err(e);
        }

        Ok(target)
    }

    async fn download(&self, url: Url, target: &Path) -> Result<()> {
        let mut response = self
            .client
            .get(url.clone())
            .timeout(self.timeout)
            .send()
            .await
            .with_context(|| format!("Failed to download {}", url))?;

        if response.status() != StatusCode::OK {
            anyhow::bail!("Failed to download {}: HTTP {}", url, response.status());
        }

        let mut file = fs::File::create(target)
            .await
            .with_context(|| format!("Failed to create file: {}", target.display()))?;

        while let Some(chunk) = response
            .chunk()
            .await
            .with_context(|| format!("Failed to read response body from {}", url))?
        {
            file.write_all(&chunk)
                .await
                .with_context(|| format!("Failed to write file: {}", target.display()))?;
        }
        file.flush().await?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_accepts_http_urls() {
        let entry = RemoteFileEntry::new("https://example.com/a/b.txt?x=1", "b.txt");
        let url = RemoteFileBuilder::validate(&entry).unwrap();
        assert_eq!(url.host_str(), Some("example.com"));
    }

    #[test]
    fn test_validate_rejects_bad_entries() {
        let cases = [
            (RemoteFileEntry::new("", "a"), "URI cannot be empty"),
            (RemoteFileEntry::new("https://example.com", ""), "path cannot be empty"),
            (RemoteFileEntry::new("not a url", "a"), "Invalid remote file URI"),
            (RemoteFileEntry::new("ftp://example.com/a", "a"), "Unsupported URI scheme"),
        ];

        for (entry, expected) in cases {
            let err = RemoteFileBuilder::validate(&entry).unwrap_err();
            assert!(
                err.to_string().contains(expected),
                "{} should mention {}",
                err,
                expected
            );
        }
    }

    #[tokio::test]
    async fn test_unreachable_host_leaves_no_file() {
        let temp = tempfile::tempdir().unwrap();
        let builder = RemoteFileBuilder::new(
            temp.path().to_path_buf(),
            reqwest::Client::new(),
            Duration::from_secs(2),
        );

        // Port 9 on loopback has nothing listening
        let entry = RemoteFileEntry::new("http://127.0.0.1:9/file.txt", "vendor/file.txt");
        assert!(builder.build(&entry).await.is_err());
        assert!(!temp.path().join("vendor/file.txt").exists());
    }
}

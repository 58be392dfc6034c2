//! Directory creation

use crate::model::FolderEntry;
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;

/// Creates template folders below the output directory
pub struct FolderBuilder {
    root: PathBuf,
}

impl FolderBuilder {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create the folder and any missing parents
    pub async fn build(&self, folder: &FolderEntry) -> Result<PathBuf> {
        if folder.path.is_empty() {
            anyhow::bail!("Folder path cannot be empty.");
        }

        let directory = self.root.join(&folder.path);
        fs::create_dir_all(&directory)
            .await
            .with_context(|| format!("Failed to create directory: {}", directory.display()))?;

        Ok(directory)
    }
}

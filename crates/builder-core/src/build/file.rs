//! Text file generation

use crate::expand::expand;
use crate::model::{FileEntry, Prompt, Variable};
use crate::prompt::{PromptCollector, PromptIo};
use anyhow::{Context, Result};
use std::path::PathBuf;
use tokio::fs;

/// Writes template files below the output directory
pub struct FileBuilder {
    root: PathBuf,
}

impl FileBuilder {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Render a file's content and write it verbatim
    ///
    /// Files bound to a prompt take their content from the prompt's result,
    /// which may ask the user questions and set variables first.
    pub async fn build<I: PromptIo>(
        &self,
        file: &FileEntry,
        variables: &mut [Variable],
        prompts: &[Prompt],
        collector: &mut PromptCollector<I>,
    ) -> Result<PathBuf> {
        if file.path.is_empty() {
            anyhow::bail!("File path cannot be empty.");
        }

        let content = match file.prompt {
            Some(id) => collector
                .collect(prompts.get(id.index()), variables)
                .with_context(|| format!("Failed to collect prompt for {}", file.path))?,
            None => expand(&file.content, variables)
                .with_context(|| format!("Failed to expand content of {}", file.path))?,
        };

        let target = self.root.join(&file.path);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent)
                .await
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }

        fs::write(&target, content.as_bytes())
            .await
            .with_context(|| format!("Failed to write file: {}", target.display()))?;

        Ok(target)
    }
}

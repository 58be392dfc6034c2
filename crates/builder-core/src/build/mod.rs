//! Building a loaded template onto disk
//!
//! Folders are created first, then files in declaration order (so prompts
//! run before anything that depends on their answers), then remote files
//! are downloaded. A failing item is reported and skipped; the rest of the
//! template is still built.

pub mod file;
pub mod folder;
pub mod remote;
pub mod report;

use crate::config::BuildConfig;
use crate::model::Template;
use crate::prompt::{PromptCollector, PromptIo};

pub use file::FileBuilder;
pub use folder::FolderBuilder;
pub use remote::RemoteFileBuilder;
pub use report::{BuildReporter, ItemKind, PlainReporter};

/// Success and failure counts for one kind of item
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub succeeded: usize,
    pub failed: usize,
}

impl Tally {
    fn record<T, E>(&mut self, result: &Result<T, E>) {
        if result.is_ok() {
            self.succeeded += 1;
        } else {
            self.failed += 1;
        }
    }
}

/// Outcome of [`Builder::build_all`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildSummary {
    pub folders: Tally,
    pub files: Tally,
    pub remote_files: Tally,
}

impl BuildSummary {
    pub fn succeeded(&self) -> usize {
        self.folders.succeeded + self.files.succeeded + self.remote_files.succeeded
    }

    pub fn failed(&self) -> usize {
        self.folders.failed + self.files.failed + self.remote_files.failed
    }
}

/// Builds every folder, file and remote file of a template
pub struct Builder<R> {
    folders: FolderBuilder,
    files: FileBuilder,
    remote_files: RemoteFileBuilder,
    reporter: R,
}

impl<R: BuildReporter> Builder<R> {
    /// Create a builder; `client` is shared by every download
    pub fn new(config: &BuildConfig, client: reqwest::Client, reporter: R) -> Self {
        Self {
            folders: FolderBuilder::new(config.output_dir.clone()),
            files: FileBuilder::new(config.output_dir.clone()),
            remote_files: RemoteFileBuilder::new(
                config.output_dir.clone(),
                client,
                config.download_timeout,
            ),
            reporter,
        }
    }

    pub fn into_reporter(self) -> R {
        self.reporter
    }

    /// Build the whole template, continuing past individual failures
    pub async fn build_all<I: PromptIo>(
        &mut self,
        template: &mut Template,
        collector: &mut PromptCollector<I>,
    ) -> BuildSummary {
        let mut summary = BuildSummary::default();
        let Template {
            variables,
            prompts,
            files,
            folders,
            remote_files,
            ..
        } = template;

        for folder in folders.iter() {
            let result = self.folders.build(folder).await;
            match &result {
                Ok(_) => self.reporter.folder_created(&folder.path),
                Err(e) => self.reporter.item_failed(ItemKind::Folder, &folder.path, e),
            }
            summary.folders.record(&result);
        }

        for file in files.iter() {
            let result = self
                .files
                .build(file, variables, prompts, collector)
                .await;
            match &result {
                Ok(_) => self.reporter.file_written(&file.path),
                Err(e) => self.reporter.item_failed(ItemKind::File, &file.path, e),
            }
            summary.files.record(&result);
        }

        for remote in remote_files.iter() {
            self.reporter.download_started(&remote.path, &remote.uri);
            let result = self.remote_files.build(remote).await;
            match &result {
                Ok(_) => self.reporter.download_finished(&remote.path),
                Err(e) => self.reporter.item_failed(ItemKind::RemoteFile, &remote.path, e),
            }
            summary.remote_files.record(&result);
        }

        summary
    }
}

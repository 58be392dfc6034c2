//! Build progress through cliclack log lines and spinners

use crate::build::{BuildReporter, ItemKind};
use cliclack::ProgressBar;

/// Reports each built item as a cliclack log line
#[derive(Default)]
pub struct CliclackReporter {
    download: Option<ProgressBar>,
}

impl CliclackReporter {
    pub fn new() -> Self {
        Self::default()
    }
}

impl BuildReporter for CliclackReporter {
    fn folder_created(&mut self, path: &str) {
        let _ = cliclack::log::success(format!("Created folder {}", path));
    }

    fn file_written(&mut self, path: &str) {
        let _ = cliclack::log::success(format!("Created file {}", path));
    }

    fn download_started(&mut self, path: &str, uri: &str) {
        let spinner = cliclack::spinner();
        spinner.start(format!("Downloading {} from {}...", path, uri));
        self.download = Some(spinner);
    }

    fn download_finished(&mut self, path: &str) {
        if let Some(spinner) = self.download.take() {
            spinner.stop(format!("Downloaded {}", path));
        }
    }

    fn item_failed(&mut self, kind: ItemKind, path: &str, error: &anyhow::Error) {
        let message = format!("Error creating {} {}: {:#}", kind, path, error);
        match self.download.take() {
            Some(spinner) => spinner.error(message),
            None => {
                let _ = cliclack::log::error(message);
            }
        }
    }
}

//! Build progress reporting

use colored::Colorize;
use std::fmt;
use std::io::Write;

/// Kind of template item being built
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemKind {
    Folder,
    File,
    RemoteFile,
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ItemKind::Folder => "folder",
            ItemKind::File => "file",
            ItemKind::RemoteFile => "remote file",
        };
        write!(f, "{}", label)
    }
}

/// Receives build progress as it happens
///
/// Every method defaults to doing nothing, so `()` is a silent reporter.
pub trait BuildReporter {
    fn folder_created(&mut self, _path: &str) {}

    fn file_written(&mut self, _path: &str) {}

    fn download_started(&mut self, _path: &str, _uri: &str) {}

    fn download_finished(&mut self, _path: &str) {}

    fn item_failed(&mut self, _kind: ItemKind, _path: &str, _error: &anyhow::Error) {}
}

impl BuildReporter for () {}

/// Colored line output for non-interactive runs
#[derive(Debug, Default)]
pub struct PlainReporter {
    download_pending: bool,
}

impl PlainReporter {
    pub fn new() -> Self {
        Self::default()
    }

    fn end_pending_line(&mut self) {
        if self.download_pending {
            println!();
            self.download_pending = false;
        }
    }
}

impl BuildReporter for PlainReporter {
    fn folder_created(&mut self, path: &str) {
        println!("{} {}", "Created folder".green(), path);
    }

    fn file_written(&mut self, path: &str) {
        println!("{} {}", "Created file".green(), path);
    }

    fn download_started(&mut self, path: &str, _uri: &str) {
        print!("{} {}", "Downloading...".cyan(), path);
        let _ = std::io::stdout().flush();
        self.download_pending = true;
    }

    fn download_finished(&mut self, _path: &str) {
        println!(" {}", "<OK>".green());
        self.download_pending = false;
    }

    fn item_failed(&mut self, kind: ItemKind, path: &str, error: &anyhow::Error) {
        self.end_pending_line();
        eprintln!(
            "{} creating {} {}: {:#}",
            "Error".red().bold(),
            kind,
            path,
            error
        );
    }
}

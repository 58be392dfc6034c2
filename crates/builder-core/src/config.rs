//! Build configuration

use anyhow::Context;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the default output directory
pub const OUTPUT_DIR_ENV: &str = "TEMPLATE_BUILDER_OUTPUT_DIR";

/// Default timeout for a single remote file download
pub const DEFAULT_DOWNLOAD_TIMEOUT: Duration = Duration::from_secs(30);

/// Settings shared by every builder during a run
#[derive(Debug, Clone)]
pub struct BuildConfig {
    /// Base directory every template path is resolved against
    pub output_dir: PathBuf,
    /// User agent sent with remote file downloads
    pub user_agent: String,
    pub download_timeout: Duration,
}

impl BuildConfig {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
            user_agent: format!("template-builder/{}", env!("CARGO_PKG_VERSION")),
            download_timeout: DEFAULT_DOWNLOAD_TIMEOUT,
        }
    }

    /// Build a config where `explicit` wins over the environment, which wins
    /// over the current directory
    pub fn from_env(explicit: Option<PathBuf>) -> Self {
        let cwd = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        let dir = resolve_output_dir(explicit, std::env::var_os(OUTPUT_DIR_ENV), cwd);
        Self::new(dir)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.download_timeout = timeout;
        self
    }

    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Create the HTTP client shared by all downloads of a run
    pub fn http_client(&self) -> anyhow::Result<reqwest::Client> {
        reqwest::Client::builder()
            .user_agent(self.user_agent.as_str())
            .build()
            .context("Failed to create HTTP client")
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::from_env(None)
    }
}

/// Pick the output directory; relative paths are anchored at `cwd`
pub fn resolve_output_dir(
    explicit: Option<PathBuf>,
    from_env: Option<OsString>,
    cwd: PathBuf,
) -> PathBuf {
    let chosen = explicit.or_else(|| {
        from_env
            .filter(|value| !value.is_empty())
            .map(PathBuf::from)
    });

    match chosen {
        Some(dir) if dir.is_absolute() => dir,
        Some(dir) => cwd.join(dir),
        None => cwd,
    }
}

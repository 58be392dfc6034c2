//! Builder Core - Template expansion and project generation
//!
//! This library turns a YAML template description into folders, files and
//! downloaded resources on disk, asking the user questions along the way.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Core Operations** - The expansion engine ([`expand()`]) and the
//!   prompt collector ([`PromptCollector`]), both free of filesystem access
//! - **Layer 2: Loading and Building** - [`Template::load`], the folder, file
//!   and remote file builders, and [`Builder`] orchestrating a full run
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based front end (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables raw terminal prompt input and the cliclack front end
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use builder_core::{BuildConfig, Builder, LineIo, PlainReporter, PromptCollector, Template};
//!
//! let mut template = Template::load("template.yaml")?;
//! let config = BuildConfig::from_env(None);
//! let mut builder = Builder::new(&config, config.http_client()?, PlainReporter::new());
//! let mut collector = PromptCollector::new(LineIo::stdio());
//! let summary = builder.build_all(&mut template, &mut collector).await;
//! ```

pub mod build;
pub mod config;
pub mod error;
pub mod expand;
pub mod loader;
pub mod model;
pub mod prompt;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use build::{BuildReporter, BuildSummary, Builder, PlainReporter};
pub use config::BuildConfig;
pub use error::{ExpandError, LoadError, PromptError};
pub use expand::expand;
pub use model::{Template, Variable};
pub use prompt::{LineIo, PromptCollector, PromptIo};

#[cfg(feature = "tui")]
pub use tui::run;

//! Interactive front end using cliclack
//!
//! This module is optional and only available when the `tui` feature is enabled.

mod reporter;
mod run;

pub use reporter::CliclackReporter;
pub use run::{run, RunArgs};

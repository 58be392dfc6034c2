//! The interactive build flow

use crate::build::{BuildSummary, Builder};
use crate::config::BuildConfig;
use crate::error::LoadError;
use crate::model::Template;
use crate::prompt::{LineIo, PromptCollector, PromptIo, TerminalIo};
use anyhow::Result;
use std::path::PathBuf;
use std::time::Duration;

use super::reporter::CliclackReporter;

/// Arguments for one template build
#[derive(Debug, Clone)]
pub struct RunArgs {
    /// Template YAML file to build
    pub template_path: PathBuf,

    /// Output directory; falls back to the environment, then the current directory
    pub output_dir: Option<PathBuf>,

    /// Per-download timeout
    pub timeout: Option<Duration>,
}

/// Load and build a template with interactive prompts
///
/// Returns an error only when the template cannot be loaded. Items that
/// fail to build are reported and counted in the summary.
pub async fn run(args: RunArgs, cli_version: &str) -> Result<BuildSummary> {
    cliclack::intro(format!("Template Builder v{}", cli_version))?;

    let mut template = load_template(&args)?;

    let mut config = BuildConfig::from_env(args.output_dir.clone());
    if let Some(timeout) = args.timeout {
        config = config.with_timeout(timeout);
    }
    cliclack::log::info(format!("Output directory: {}", config.output_dir.display()))?;

    let summary = if TerminalIo::is_available() {
        build(&config, &mut template, TerminalIo::new()).await?
    } else {
        cliclack::log::info("No interactive terminal detected, using line input")?;
        build(&config, &mut template, LineIo::stdio()).await?
    };

    print_summary(&summary)?;
    Ok(summary)
}

fn load_template(args: &RunArgs) -> Result<Template> {
    let spinner = cliclack::spinner();
    spinner.start(format!("Loading {}...", args.template_path.display()));

    match Template::load(&args.template_path) {
        Ok(template) => {
            spinner.stop(format!(
                "Template loaded (version {}, {} variables, {} files)",
                template.version,
                template.variables.len(),
                template.files.len()
            ));
            Ok(template)
        }
        Err(e @ LoadError::UnsupportedVersion { .. }) => {
            spinner.error("Unsupported template version");
            cliclack::outro_cancel(e.to_string())?;
            Err(e.into())
        }
        Err(e) => {
            spinner.error("Failed to load template");
            Err(anyhow::Error::new(e).context(format!(
                "Failed to load template {}",
                args.template_path.display()
            )))
        }
    }
}

async fn build<I: PromptIo>(
    config: &BuildConfig,
    template: &mut Template,
    io: I,
) -> Result<BuildSummary> {
    let mut builder = Builder::new(config, config.http_client()?, CliclackReporter::new());
    let mut collector = PromptCollector::new(io);
    Ok(builder.build_all(template, &mut collector).await)
}

fn print_summary(summary: &BuildSummary) -> Result<()> {
    if summary.failed() > 0 {
        cliclack::log::warning(format!(
            "{} items created, {} failed",
            summary.succeeded(),
            summary.failed()
        ))?;
        cliclack::outro("Template generated with errors. Thanks for using Template Builder!")?;
    } else {
        cliclack::outro(format!(
            "Template successfully generated ({} items). Thanks for using Template Builder!",
            summary.succeeded()
        ))?;
    }
    Ok(())
}

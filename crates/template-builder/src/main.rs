//! template-builder - Generate project skeletons from YAML templates

use anyhow::{Context, Result};
use builder_core::tui::RunArgs;
use builder_core::{
    BuildConfig, BuildSummary, Builder, LineIo, PlainReporter, PromptCollector, Template,
};
use clap::Parser;
use colored::Colorize;
use std::path::PathBuf;
use std::time::Duration;

/// CLI version
pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

#[derive(Parser, Debug)]
#[command(name = "template-builder")]
#[command(about = "Generate project skeletons from YAML templates")]
#[command(version)]
pub struct Args {
    /// Template YAML file
    pub template: PathBuf,

    /// Directory the template is generated into (defaults to $TEMPLATE_BUILDER_OUTPUT_DIR, then the current directory)
    #[arg(short, long = "output-dir")]
    pub output_dir: Option<PathBuf>,

    /// Timeout in seconds for each remote file download
    #[arg(long)]
    pub timeout: Option<u64>,

    /// Plain line-based output and input, without the interactive front end
    #[arg(long)]
    pub plain: bool,
}

impl From<&Args> for RunArgs {
    fn from(args: &Args) -> Self {
        RunArgs {
            template_path: args.template.clone(),
            output_dir: args.output_dir.clone(),
            timeout: args.timeout.map(Duration::from_secs),
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let args = Args::parse();

    if args.plain {
        run_plain(&args).await.map(|_| ())
    } else {
        let result = builder_core::run(RunArgs::from(&args), CLI_VERSION).await;

        // Ensure cursor is visible on normal exit
        let _ = console::Term::stderr().show_cursor();

        result.map(|_| ())
    }
}

async fn run_plain(args: &Args) -> Result<BuildSummary> {
    print_banner();

    let mut template = Template::load(&args.template)
        .with_context(|| format!("Failed to load template {}", args.template.display()))?;

    let mut config = BuildConfig::from_env(args.output_dir.clone());
    if let Some(secs) = args.timeout {
        config = config.with_timeout(Duration::from_secs(secs));
    }

    let mut builder = Builder::new(&config, config.http_client()?, PlainReporter::new());
    let mut collector = PromptCollector::new(LineIo::stdio());
    let summary = builder.build_all(&mut template, &mut collector).await;

    println!();
    if summary.failed() > 0 {
        println!(
            "{} {} items created, {} failed",
            "Done.".yellow().bold(),
            summary.succeeded(),
            summary.failed()
        );
    } else {
        println!("{}", "Template Builder execution completed successfully.".green().bold());
    }
    println!();

    Ok(summary)
}

fn print_banner() {
    let rule = "*".repeat(51);
    println!();
    println!("{}", rule.cyan());
    let title = format!("{:<47}", format!("TEMPLATE BUILDER - VERSION {}", CLI_VERSION));
    println!("{} {} {}", "*".cyan(), title.bold(), "*".cyan());
    println!(
        "{} {:<47} {}",
        "*".cyan(),
        "Generate project templates using YAML files",
        "*".cyan()
    );
    println!("{}", rule.cyan());
    println!();
}

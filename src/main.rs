//! Layout Mockup - headless layout arrangement tool
//!
//! This binary replays scripted select / swap / hide / show actions against a
//! seed layout and exports the result, and validates or inspects layout
//! documents.

use clap::{Parser, Subcommand};
use layout_mockup::cli::{CliError, ConfigArgs, ExportArgs, InspectArgs, ValidateArgs};
use layout_mockup::config::Config;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Layout Mockup - arrange, hide and export page layout fields
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Config file to use instead of the platform default
    #[arg(long, global = true, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Enable verbose logging on stderr
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Apply actions to a seed layout and export the arrangement as JSON
    Export(ExportArgs),
    /// Validate a seed definition or exported layout document
    Validate(ValidateArgs),
    /// Show sections, fields and visibility counts of a layout
    Inspect(InspectArgs),
    /// Inspect or write the configuration file
    Config(ConfigArgs),
}

/// Loads the configuration from `--config` or the platform default.
fn load_config(path: Option<&PathBuf>) -> Result<Config, CliError> {
    let loaded = match path {
        Some(path) => Config::load_from(path),
        None => Config::load(),
    };

    loaded.map_err(|e| CliError::config(&e))
}

fn run(cli: Cli) -> Result<(), CliError> {
    match &cli.command {
        Commands::Export(args) => args.execute(&load_config(cli.config.as_ref())?),
        Commands::Validate(args) => args.execute(),
        Commands::Inspect(args) => args.execute(&load_config(cli.config.as_ref())?),
        Commands::Config(args) => args.execute(cli.config.as_deref()),
    }
}

fn main() {
    let cli = Cli::parse();

    // Logs go to stderr so `export --output -` keeps stdout clean
    let filter = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| filter.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    if let Err(err) = run(cli) {
        eprintln!("Error: {err}");
        std::process::exit(err.exit_code.code());
    }
}

//! Export command: replay scripted actions against a seed and write the result.

use crate::cli::common::{resolve_seed, CliError, CliResult};
use crate::config::Config;
use crate::services::ExportService;
use crate::store::{Action, LayoutStore};
use clap::Args;
use std::path::{Path, PathBuf};

/// Apply actions to a seed layout and export the arrangement as JSON
#[derive(Debug, Clone, Args)]
pub struct ExportArgs {
    /// Seed definition (defaults to the configured seed, then the built-in one)
    #[arg(short, long, value_name = "FILE")]
    pub seed: Option<PathBuf>,

    /// JSON array of actions to apply in order
    #[arg(short, long, value_name = "FILE")]
    pub actions: Option<PathBuf>,

    /// Output file, or `-` for stdout (defaults to the export directory)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Write single-line JSON regardless of configuration
    #[arg(long)]
    pub compact: bool,
}

impl ExportArgs {
    /// Execute the export command
    pub fn execute(&self, config: &Config) -> CliResult<()> {
        let seed = resolve_seed(self.seed.as_deref(), config)?;
        let mut store = LayoutStore::new(seed);

        if let Some(path) = &self.actions {
            for (index, action) in load_actions(path)?.iter().enumerate() {
                let outcome = store.apply(action).map_err(|e| {
                    CliError::validation(format!("Action {} failed: {e}", index + 1))
                })?;
                tracing::debug!("Action {}: {}", index + 1, outcome.message());
            }
        }

        let document = store.export();
        let pretty = config.export.pretty && !self.compact;

        match self.output.as_deref() {
            Some(path) if path == Path::new("-") => {
                let json = ExportService::render(&document, pretty)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("{json}");
            }
            Some(path) => {
                ExportService::save(&document, path, pretty)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("✓ Exported layout to {}", path.display());
            }
            None => {
                let path = ExportService::save_to_dir(&document, &config.export.output_dir, pretty)
                    .map_err(|e| CliError::io(format!("{e:#}")))?;
                println!("✓ Exported layout to {}", path.display());
            }
        }

        Ok(())
    }
}

/// Reads an action script: a JSON (or JSON5) array of actions.
fn load_actions(path: &Path) -> CliResult<Vec<Action>> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))?;

    json5::from_str(&content).map_err(|e| {
        CliError::validation(format!("Invalid action script {}: {e}", path.display()))
    })
}

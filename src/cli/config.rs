//! Configuration management CLI commands.

use crate::cli::common::{to_json, CliError, CliResult};
use crate::config::Config;
use clap::{Args, Subcommand};
use std::path::{Path, PathBuf};

/// Configuration management commands
#[derive(Args, Debug)]
pub struct ConfigArgs {
    #[command(subcommand)]
    command: ConfigCommand,
}

#[derive(Subcommand, Debug)]
enum ConfigCommand {
    /// Display current configuration
    Show(ConfigShowArgs),
    /// Print the configuration file path
    Path,
    /// Write a configuration file with default values
    Init(ConfigInitArgs),
}

/// Display current configuration
#[derive(Args, Debug)]
pub struct ConfigShowArgs {
    /// Output as JSON
    #[arg(long)]
    json: bool,
}

/// Write a configuration file with default values
#[derive(Args, Debug)]
pub struct ConfigInitArgs {
    /// Overwrite an existing file
    #[arg(long)]
    force: bool,
}

impl ConfigArgs {
    /// Execute config subcommand against `path` (the platform default if `None`)
    pub fn execute(&self, path: Option<&Path>) -> CliResult<()> {
        let path = match path {
            Some(path) => path.to_path_buf(),
            None => Config::config_file_path()
                .map_err(|e| CliError::io(format!("Failed to locate configuration: {e}")))?,
        };

        match &self.command {
            ConfigCommand::Show(args) => args.execute(&path),
            ConfigCommand::Path => {
                println!("{}", path.display());
                Ok(())
            }
            ConfigCommand::Init(args) => {
                let written = args.execute(&path)?;
                println!("✓ Wrote default configuration to {}", written.display());
                Ok(())
            }
        }
    }
}

impl ConfigShowArgs {
    /// Execute show command
    pub fn execute(&self, path: &Path) -> CliResult<()> {
        let config = Config::load_from(path).map_err(|e| CliError::config(&e))?;

        if self.json {
            println!("{}", to_json(&config)?);
        } else {
            output_human_readable(&config, path);
        }

        Ok(())
    }
}

impl ConfigInitArgs {
    /// Execute init command
    pub fn execute(&self, path: &Path) -> CliResult<PathBuf> {
        if path.exists() && !self.force {
            return Err(CliError::validation(format!(
                "Configuration already exists at {} (use --force to overwrite)",
                path.display()
            )));
        }

        Config::new()
            .save_to(path)
            .map_err(|e| CliError::io(format!("Failed to save configuration: {e:#}")))?;

        Ok(path.to_path_buf())
    }
}

/// Output configuration in human-readable format
fn output_human_readable(config: &Config, path: &Path) {
    println!("Layout Mockup Configuration");
    println!("===========================");
    println!("File: {}", path.display());
    println!();

    println!("Paths:");
    match &config.paths.seed_file {
        Some(seed) => println!("  Seed File: {}", seed.display()),
        None => println!("  Seed File: (built-in)"),
    }
    println!();

    println!("Export:");
    println!("  Output Directory: {}", config.export.output_dir.display());
    println!("  Pretty JSON: {}", config.export.pretty);
    println!();

    println!("Server:");
    println!("  Address: {}:{}", config.server.host, config.server.port);
    println!();

    println!("Sessions:");
    println!("  Max Sessions: {}", config.sessions.max_sessions);
    println!(
        "  Idle Timeout: {} min",
        config.sessions.idle_timeout_minutes
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::common::ExitCode;
    use tempfile::TempDir;

    #[test]
    fn test_init_writes_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");

        let written = ConfigInitArgs { force: false }.execute(&path).unwrap();
        assert_eq!(written, path);
        assert_eq!(Config::load_from(&path).unwrap(), Config::new());
    }

    #[test]
    fn test_init_refuses_overwrite_without_force() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[server]\nhost = \"0.0.0.0\"\nport = 9000\n").unwrap();

        let err = ConfigInitArgs { force: false }.execute(&path).unwrap_err();
        assert_eq!(err.exit_code, ExitCode::ValidationError);

        ConfigInitArgs { force: true }.execute(&path).unwrap();
        assert_eq!(Config::load_from(&path).unwrap().server.port, 3001);
    }

    #[test]
    fn test_show_rejects_invalid_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("config.toml");
        std::fs::write(&path, "[sessions]\nmax_sessions = 0\nidle_timeout_minutes = 5\n").unwrap();

        let err = ConfigShowArgs { json: true }.execute(&path).unwrap_err();
        assert!(err.message.contains("max_sessions"));
        assert_eq!(err.exit_code, ExitCode::IoError);
    }
}

//! Shared types and helpers for CLI commands.

use std::fmt;
use std::path::Path;

use crate::config::Config;
use crate::models::Layout;
use crate::parser;

/// Process exit codes used by every command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitCode {
    /// Command completed
    Success = 0,
    /// Invalid document or a failed layout operation
    ValidationError = 1,
    /// File system or usage problem
    IoError = 2,
}

impl ExitCode {
    /// Numeric code for `std::process::exit`.
    #[must_use]
    pub const fn code(self) -> i32 {
        self as i32
    }
}

/// Error returned by CLI commands, carrying its exit code.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CliError {
    /// Message printed to stderr
    pub message: String,
    /// Exit code for the process
    pub exit_code: ExitCode,
}

impl CliError {
    /// Validation or operation failure (exit code 1).
    pub fn validation(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::ValidationError,
        }
    }

    /// I/O or usage failure (exit code 2).
    pub fn io(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            exit_code: ExitCode::IoError,
        }
    }

    /// Configuration file that cannot be loaded (exit code 2).
    pub fn config(err: &anyhow::Error) -> Self {
        Self::io(format!("Failed to load configuration: {err:#}"))
    }
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for CliError {}

/// Result type for CLI commands.
pub type CliResult<T> = Result<T, CliError>;

/// Reads and validates a layout file.
///
/// Unreadable files are I/O errors; malformed or structurally invalid
/// content is a validation error.
pub fn load_layout(path: &Path) -> CliResult<Layout> {
    let content = std::fs::read_to_string(path)
        .map_err(|e| CliError::io(format!("Failed to read {}: {e}", path.display())))?;

    parser::parse_layout_str(&content)
        .map_err(|e| CliError::validation(format!("{}: {e}", path.display())))
}

/// Resolves the seed for a command: `--seed`, then the configured seed file,
/// then the built-in layout.
pub fn resolve_seed(seed: Option<&Path>, config: &Config) -> CliResult<Layout> {
    match seed.or(config.paths.seed_file.as_deref()) {
        Some(path) => load_layout(path),
        None => parser::builtin_seed()
            .map_err(|e| CliError::io(format!("Failed to load built-in seed: {e}"))),
    }
}

/// Serializes a value as pretty JSON for stdout.
pub fn to_json<T: serde::Serialize>(value: &T) -> CliResult<String> {
    serde_json::to_string_pretty(value)
        .map_err(|e| CliError::io(format!("Failed to serialize JSON: {e}")))
}

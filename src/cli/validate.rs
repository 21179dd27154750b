//! Validation command for seed definitions and exported documents.

use crate::cli::common::{to_json, CliError, CliResult};
use crate::parser;
use clap::Args;
use serde::Serialize;
use std::path::PathBuf;

/// Validate a seed definition or exported layout document
#[derive(Debug, Clone, Args)]
pub struct ValidateArgs {
    /// Path to the document
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Output results as JSON
    #[arg(long)]
    pub json: bool,
}

/// Validation result for JSON output.
#[derive(Debug, Serialize)]
pub struct ValidationResponse {
    /// Whether the document is valid
    pub valid: bool,
    /// Error message if invalid
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
    /// Number of sections (0 if invalid)
    pub sections: usize,
    /// Number of fields across all sections (0 if invalid)
    pub fields: usize,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> CliResult<()> {
        let content = std::fs::read_to_string(&self.file)
            .map_err(|e| CliError::io(format!("Failed to read {}: {e}", self.file.display())))?;

        let response = match parser::parse_layout_str(&content) {
            Ok(layout) => ValidationResponse {
                valid: true,
                error: None,
                sections: layout.sections.len(),
                fields: layout.field_count(),
            },
            Err(e) => ValidationResponse {
                valid: false,
                error: Some(e.to_string()),
                sections: 0,
                fields: 0,
            },
        };

        if self.json {
            println!("{}", to_json(&response)?);
        } else if response.valid {
            println!(
                "✓ Validation passed: {} section(s), {} field(s)",
                response.sections, response.fields
            );
        } else {
            println!("✗ Validation failed");
        }

        match response.error {
            Some(error) => Err(CliError::validation(error)),
            None => Ok(()),
        }
    }
}

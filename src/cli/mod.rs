//! CLI command handlers for Layout Mockup.
//!
//! This module provides headless, scriptable access to the layout store
//! for automation, testing, and CI/CD integration.

pub mod common;
pub mod config;
pub mod export;
pub mod inspect;
pub mod validate;

// Re-export types used by main.rs and tests
pub use common::{CliError, CliResult, ExitCode};
pub use config::ConfigArgs;
pub use export::ExportArgs;
pub use inspect::InspectArgs;
pub use validate::ValidateArgs;

//! Service layer for file and document handling.
//!
//! This module contains services shared by the CLI and the web server so
//! both surfaces write documents the same way.

pub mod export;

// Re-export commonly used types
pub use export::ExportService;

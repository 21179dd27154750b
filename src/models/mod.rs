//! Data models for page layouts, sections, and fields.
//!
//! This module contains the core data structures used throughout the application.
//! Models are designed to be independent of UI and transport concerns.

pub mod export;
pub mod field;
pub mod layout;
pub mod section;

// Re-export all model types
pub use export::{ExportDocument, ExportField, ExportSection};
pub use field::{Field, FieldKind};
pub use layout::{FieldRef, FieldSlot, Layout};
pub use section::Section;

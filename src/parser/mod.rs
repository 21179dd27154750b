//! Parsing for layout definitions.
//!
//! This module reads seed definitions and previously exported documents
//! (both JSON, with JSON5 conveniences such as comments and trailing commas
//! accepted) into validated [`Layout`](crate::models::Layout)s.

pub mod seed;

// Re-export commonly used functions
pub use seed::{builtin_seed, parse_layout_file, parse_layout_str};

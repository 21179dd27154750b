//! Layout Mockup Library
//!
//! This library provides the field arrangement engine behind Layout Mockup:
//! sections of labelled fields that a user can reorder by click-to-swap,
//! hide and restore, reset to their seed arrangement, and export as JSON.
//!
//! The [`store::LayoutStore`] is the heart of the crate. The CLI and the
//! optional web server (`web` feature) are thin surfaces over it.

// Module declarations
pub mod cli;
pub mod config;
pub mod constants;
pub mod error;
pub mod models;
pub mod parser;
pub mod services;
pub mod store;
#[cfg(feature = "web")]
pub mod web;

//! Application-wide constants.
//!
//! This module defines constants used throughout the application,
//! including the application name and version information.

/// The display name of the application (human-readable, with proper capitalization).
pub const APP_NAME: &str = "Layout Mockup";

/// The binary name of the application (used in command examples, lowercase with hyphens).
pub const APP_BINARY_NAME: &str = "layout-mockup";

/// Directory name used under the platform config directory.
pub const APP_DIR_NAME: &str = "LayoutMockup";

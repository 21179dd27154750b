//! Configuration management for the application.
//!
//! This module handles loading, validating, and saving application configuration
//! in TOML format with platform-specific directory resolution.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::constants::APP_DIR_NAME;
use crate::models::Layout;
use crate::parser;

/// Path configuration for file system locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct PathConfig {
    /// Custom seed definition used instead of the built-in layout
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed_file: Option<PathBuf>,
}

/// Export settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportConfig {
    /// Directory where exported documents are written by default
    pub output_dir: PathBuf,
    /// Pretty-print exported JSON
    #[serde(default = "default_pretty")]
    pub pretty: bool,
}

/// Default value for `pretty` (true)
const fn default_pretty() -> bool {
    true
}

impl Default for ExportConfig {
    fn default() -> Self {
        let output_dir = Self::default_output_dir().unwrap_or_else(|_| PathBuf::from("exports"));

        Self {
            output_dir,
            pretty: default_pretty(),
        }
    }
}

impl ExportConfig {
    /// Gets the default export directory path.
    ///
    /// - Linux: `~/.config/LayoutMockup/exports/`
    /// - macOS: `~/Library/Application Support/LayoutMockup/exports/`
    /// - Windows: `%APPDATA%\LayoutMockup\exports\`
    fn default_output_dir() -> Result<PathBuf> {
        Ok(Config::config_dir()?.join("exports"))
    }
}

/// Web server settings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3001,
        }
    }
}

/// Session registry settings for the web server.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SessionConfig {
    /// Maximum number of live sessions
    pub max_sessions: usize,
    /// Sessions idle longer than this are evicted
    pub idle_timeout_minutes: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            max_sessions: 64,
            idle_timeout_minutes: 60,
        }
    }
}

/// Application configuration.
///
/// # File Location
///
/// - Linux: `~/.config/LayoutMockup/config.toml`
/// - macOS: `~/Library/Application Support/LayoutMockup/config.toml`
/// - Windows: `%APPDATA%\LayoutMockup\config.toml`
///
/// # Validation
///
/// - `seed_file` must exist if set
/// - `host` must be non-empty and `port` non-zero
/// - `max_sessions` and `idle_timeout_minutes` must be at least 1
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct Config {
    /// File system paths
    #[serde(default)]
    pub paths: PathConfig,
    /// Export settings
    #[serde(default)]
    pub export: ExportConfig,
    /// Web server settings
    #[serde(default)]
    pub server: ServerConfig,
    /// Session registry settings
    #[serde(default)]
    pub sessions: SessionConfig,
}

impl Config {
    /// Creates a new Config with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Gets the platform-specific config directory path.
    pub fn config_dir() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Failed to determine config directory")?
            .join(APP_DIR_NAME);

        Ok(config_dir)
    }

    /// Gets the full path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        Ok(Self::config_dir()?.join("config.toml"))
    }

    /// Loads configuration from the platform config file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load() -> Result<Self> {
        Self::load_from(&Self::config_file_path()?)
    }

    /// Loads configuration from a specific file.
    ///
    /// If the file doesn't exist, returns default configuration.
    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::new());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        config.validate()?;
        Ok(config)
    }

    /// Saves configuration to a specific file using atomic write.
    ///
    /// Uses temp file + rename pattern for atomic writes.
    pub fn save_to(&self, path: &Path) -> Result<()> {
        self.validate()?;

        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create config directory: {}", dir.display()))?;
        }

        let content = toml::to_string_pretty(self).context("Failed to serialize configuration")?;

        let temp_path = path.with_extension("toml.tmp");
        fs::write(&temp_path, content).with_context(|| {
            format!("Failed to write temp config file: {}", temp_path.display())
        })?;

        fs::rename(&temp_path, path).with_context(|| {
            format!("Failed to rename temp config file to: {}", path.display())
        })?;

        Ok(())
    }

    /// Validates configuration values.
    pub fn validate(&self) -> Result<()> {
        if let Some(seed_file) = &self.paths.seed_file {
            if !seed_file.exists() {
                anyhow::bail!("Seed file does not exist: {}", seed_file.display());
            }
        }

        if self.server.host.trim().is_empty() {
            anyhow::bail!("Server host cannot be empty");
        }

        if self.server.port == 0 {
            anyhow::bail!("Server port must be non-zero");
        }

        if self.sessions.max_sessions == 0 {
            anyhow::bail!("sessions.max_sessions must be at least 1");
        }

        if self.sessions.idle_timeout_minutes == 0 {
            anyhow::bail!("sessions.idle_timeout_minutes must be at least 1");
        }

        Ok(())
    }

    /// Loads the seed layout: the configured seed file, or the built-in one.
    pub fn load_seed(&self) -> Result<Layout> {
        match &self.paths.seed_file {
            Some(path) => parser::parse_layout_file(path),
            None => parser::builtin_seed(),
        }
    }
}

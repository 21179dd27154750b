//! Export document I/O service.
//!
//! This module centralizes rendering and writing exported layout documents,
//! so the CLI and the web server produce byte-identical output.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use std::path::{Path, PathBuf};

use crate::models::ExportDocument;

/// File name prefix used for suggested download names.
const EXPORT_FILE_PREFIX: &str = "layout_export";

/// Service for rendering and saving exported layout documents.
pub struct ExportService;

impl ExportService {
    /// Renders an export document as JSON text.
    ///
    /// # Arguments
    ///
    /// * `document` - The document to render
    /// * `pretty` - Indent the output (two spaces) instead of a single line
    pub fn render(document: &ExportDocument, pretty: bool) -> Result<String> {
        let json = if pretty {
            serde_json::to_string_pretty(document)
        } else {
            serde_json::to_string(document)
        };

        json.context("Failed to serialize export document")
    }

    /// Suggested download name for an export made on `date`.
    ///
    /// # Examples
    ///
    /// ```
    /// # use layout_mockup::services::ExportService;
    /// let date = chrono::NaiveDate::from_ymd_opt(2024, 3, 7).unwrap();
    /// assert_eq!(ExportService::suggested_filename(date), "layout_export_20240307.json");
    /// ```
    #[must_use]
    pub fn suggested_filename(date: NaiveDate) -> String {
        format!("{EXPORT_FILE_PREFIX}_{}.json", date.format("%Y%m%d"))
    }

    /// Suggested download name for an export made today (local time).
    #[must_use]
    pub fn suggested_filename_today() -> String {
        Self::suggested_filename(chrono::Local::now().date_naive())
    }

    /// Writes an export document to a file.
    ///
    /// This performs an atomic write using a temp file + rename pattern, and
    /// creates the parent directory if needed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use std::path::Path;
    /// use layout_mockup::parser::builtin_seed;
    /// use layout_mockup::models::ExportDocument;
    /// use layout_mockup::services::ExportService;
    ///
    /// let document = ExportDocument::from(&builtin_seed()?);
    /// ExportService::save(&document, Path::new("layout.json"), true)?;
    /// # Ok::<(), anyhow::Error>(())
    /// ```
    pub fn save(document: &ExportDocument, path: &Path, pretty: bool) -> Result<()> {
        let mut content = Self::render(document, pretty)?;
        content.push('\n');

        if let Some(dir) = path.parent().filter(|dir| !dir.as_os_str().is_empty()) {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create export directory: {}", dir.display()))?;
        }

        let temp_path = path.with_extension("json.tmp");
        std::fs::write(&temp_path, content)
            .with_context(|| format!("Failed to write temporary file {}", temp_path.display()))?;

        std::fs::rename(&temp_path, path).with_context(|| {
            format!(
                "Failed to rename {} to {}",
                temp_path.display(),
                path.display()
            )
        })?;

        tracing::debug!("Export written to {}", path.display());
        Ok(())
    }

    /// Writes an export document into `dir` under today's suggested name.
    ///
    /// Returns the path that was written.
    pub fn save_to_dir(document: &ExportDocument, dir: &Path, pretty: bool) -> Result<PathBuf> {
        let path = dir.join(Self::suggested_filename_today());
        Self::save(document, &path, pretty)?;
        Ok(path)
    }
}

//! Seed definition and exported document parsing.
//!
//! # File Format
//!
//! ```json5
//! {
//!   // Sections in on-screen order
//!   sections: [
//!     {
//!       name: "Account Information",
//!       expanded: true,            // optional, default true
//!       fields: [
//!         { id: "name", label: "Name", value: "Acme", kind: "text", visible: true },
//!       ],
//!     },
//!   ],
//! }
//! ```
//!
//! Only `name`, `fields`, `id` and `label` are required, so an exported
//! document is itself a valid seed.

use std::path::Path;

use anyhow::{Context, Result};

use crate::constants::APP_BINARY_NAME;
use crate::error::SeedError;
use crate::models::Layout;

/// Parses and validates a layout definition from text.
///
/// # Errors
///
/// Returns [`SeedError::Parse`] for malformed input, or the first structural
/// problem found by [`Layout::validate`].
pub fn parse_layout_str(text: &str) -> Result<Layout, SeedError> {
    let layout: Layout = json5::from_str(text).map_err(|e| SeedError::Parse(e.to_string()))?;
    layout.validate()?;
    Ok(layout)
}

/// Reads and parses a layout definition file.
///
/// # Errors
///
/// Returns errors for:
/// - File not found or unreadable
/// - Malformed JSON / JSON5
/// - Duplicate or empty section names and field ids
pub fn parse_layout_file(path: &Path) -> Result<Layout> {
    if !path.exists() {
        anyhow::bail!(
            "Layout definition not found: {}\n\n\
             Run `{} export --output -` to print the built-in seed as a starting point.",
            path.display(),
            APP_BINARY_NAME
        );
    }

    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read layout definition: {}", path.display()))?;

    parse_layout_str(&content)
        .with_context(|| format!("Invalid layout definition: {}", path.display()))
}

/// Loads the built-in seed layout embedded in the binary.
pub fn builtin_seed() -> Result<Layout> {
    let json_data = include_str!("../data/default_seed.json");
    parse_layout_str(json_data).context("Failed to parse embedded default_seed.json")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{ExportDocument, FieldKind};
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_builtin_seed() {
        let layout = builtin_seed().expect("Failed to load built-in seed");
        let names: Vec<&str> = layout.sections.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(
            names,
            ["Account Information", "Parent Hierarchy", "Customer Success"]
        );

        let success = layout.get_section("Customer Success").unwrap();
        assert!(success.fields.iter().any(|f| f.is_spacer() && !f.visible));
        assert!(layout.sections.iter().all(|s| s.expanded));
    }

    #[test]
    fn test_parse_json5_seed() {
        let text = r#"{
            // comments and trailing commas are fine
            sections: [
                {
                    name: "Account Information",
                    fields: [
                        { id: "Name", label: "Name" },
                        { id: "Phone", label: "Phone", kind: "phone", value: "555" },
                    ],
                },
            ],
        }"#;

        let layout = parse_layout_str(text).unwrap();
        let section = layout.get_section("Account Information").unwrap();
        assert_eq!(section.fields.len(), 2);
        assert_eq!(section.fields[1].kind, FieldKind::Phone);
        assert!(section.fields.iter().all(|f| f.visible));
    }

    #[test]
    fn test_parse_exported_document() {
        let layout = builtin_seed().unwrap();
        let json = ExportDocument::from(&layout).to_json_pretty().unwrap();

        let imported = parse_layout_str(&json).unwrap();
        assert_eq!(ExportDocument::from(&imported), ExportDocument::from(&layout));
    }

    #[test]
    fn test_parse_rejects_invalid() {
        assert!(matches!(parse_layout_str("not json"), Err(SeedError::Parse(_))));
        assert_eq!(
            parse_layout_str(r#"{"sections": []}"#),
            Err(SeedError::NoSections)
        );
        assert!(matches!(
            parse_layout_str(
                r#"{"sections": [{"name": "A", "fields": [
                    {"id": "x", "label": "X"}, {"id": "x", "label": "Y"}]}]}"#
            ),
            Err(SeedError::DuplicateField { .. })
        ));
    }

    #[test]
    fn test_parse_layout_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("seed.json");
        fs::write(
            &path,
            r#"{"sections": [{"name": "A", "fields": [{"id": "x", "label": "X"}]}]}"#,
        )
        .unwrap();

        let layout = parse_layout_file(&path).unwrap();
        assert_eq!(layout.field_count(), 1);

        let missing = parse_layout_file(&temp_dir.path().join("missing.json"));
        assert!(missing.unwrap_err().to_string().contains("not found"));
    }
}

//! Shared test fixtures for integration and E2E CLI tests.
#![allow(dead_code)] // Not every test binary uses every fixture

use layout_mockup::models::{Field, FieldKind, Layout, Section};
use layout_mockup::store::Action;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

/// Section name used by the account fixtures.
pub const ACCOUNT: &str = "Account Information";

/// Creates the three-field account layout: `[Name, Phone, Email]`.
pub fn test_layout_account() -> Layout {
    let section = Section::new(ACCOUNT)
        .with_field(Field::new("Name", "Name").with_value("Acme Corp"))
        .expect("Name")
        .with_field(
            Field::new("Phone", "Phone")
                .with_value("(555) 123-4567")
                .with_kind(FieldKind::Phone),
        )
        .expect("Phone")
        .with_field(Field::new("Email", "Email").with_value("info@acme.example"))
        .expect("Email");

    Layout::new(vec![section]).expect("Failed to build account layout")
}

/// Creates a two-section layout with a hidden field and a spacer.
///
/// - "Account Information": `[Name, Phone, Email]`
/// - "Customer Success": `[sentiment, risk_status, spacer_1, risk_reason (hidden)]`
pub fn test_layout_two_sections() -> Layout {
    let mut layout = test_layout_account();

    let success = Section::new("Customer Success")
        .with_field(Field::new("sentiment", "Sentiment").with_value("Positive"))
        .expect("sentiment")
        .with_field(
            Field::new("risk_status", "Risk Status")
                .with_value("Low")
                .with_kind(FieldKind::Picklist),
        )
        .expect("risk_status")
        .with_field(Field::spacer("spacer_1"))
        .expect("spacer_1")
        .with_field(Field::new("risk_reason", "Risk Reason").with_visible(false))
        .expect("risk_reason");

    layout
        .add_section(success)
        .expect("Failed to add Customer Success");
    layout
}

/// Builds a `select` action.
pub fn select(section: &str, field: &str) -> Action {
    Action::Select {
        section: section.to_string(),
        field: field.to_string(),
    }
}

/// Builds a `hide` action.
pub fn hide(section: &str, field: &str) -> Action {
    Action::Hide {
        section: section.to_string(),
        field: field.to_string(),
    }
}

/// Builds a `show` action.
pub fn show(section: &str, field: &str) -> Action {
    Action::Show {
        section: section.to_string(),
        field: field.to_string(),
    }
}

/// Writes a layout as a JSON seed definition.
pub fn write_layout_file(layout: &Layout, path: &Path) -> std::io::Result<()> {
    let json = serde_json::to_string_pretty(layout).map_err(std::io::Error::other)?;
    fs::write(path, json)
}

/// Creates a seed file in a temp directory and returns the path.
pub fn create_temp_layout_file(layout: &Layout) -> (PathBuf, TempDir) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let layout_path = temp_dir.path().join("seed.json");
    write_layout_file(layout, &layout_path).expect("Failed to write layout file");
    (layout_path, temp_dir)
}

/// Writes an action script next to other test files.
pub fn write_actions_file(dir: &Path, actions: &[Action]) -> PathBuf {
    let path = dir.join("actions.json");
    let json = serde_json::to_string_pretty(actions).expect("Failed to serialize actions");
    fs::write(&path, json).expect("Failed to write actions file");
    path
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fixture_account_layout() {
        let layout = test_layout_account();
        assert_eq!(layout.sections.len(), 1);
        assert_eq!(layout.field_count(), 3);
    }

    #[test]
    fn test_fixture_two_sections() {
        let layout = test_layout_two_sections();
        let success = layout.get_section("Customer Success").unwrap();
        assert_eq!(success.visible_count(), 2);
        assert_eq!(success.hidden_count(), 1);
    }
}

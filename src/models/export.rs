//! Exported layout document.
//!
//! This is the only artifact that leaves the system. It carries section
//! names, field order, labels and visibility; selection state, expanded
//! flags and sample values are deliberately absent.

use crate::models::{Field, Layout, Section};
use serde::{Deserialize, Serialize};

/// Point-in-time snapshot of a layout, ready for serialization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportDocument {
    /// Sections in on-screen order
    pub sections: Vec<ExportSection>,
}

/// One section of an exported document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportSection {
    /// Section name
    pub name: String,
    /// Fields in on-screen order (hidden fields keep their slot)
    pub fields: Vec<ExportField>,
}

/// One field of an exported document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExportField {
    /// Field id
    pub id: String,
    /// Field label
    pub label: String,
    /// Visibility flag
    pub visible: bool,
}

impl From<&Field> for ExportField {
    fn from(field: &Field) -> Self {
        Self {
            id: field.id.clone(),
            label: field.label.clone(),
            visible: field.visible,
        }
    }
}

impl From<&Section> for ExportSection {
    fn from(section: &Section) -> Self {
        Self {
            name: section.name.clone(),
            fields: section.fields.iter().map(ExportField::from).collect(),
        }
    }
}

impl From<&Layout> for ExportDocument {
    fn from(layout: &Layout) -> Self {
        Self {
            sections: layout.sections.iter().map(ExportSection::from).collect(),
        }
    }
}

impl ExportDocument {
    /// Serializes the document as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }

    /// Field ids of a section in order, or `None` if the section is absent.
    #[must_use]
    pub fn field_ids(&self, section: &str) -> Option<Vec<&str>> {
        self.sections
            .iter()
            .find(|s| s.name == section)
            .map(|s| s.fields.iter().map(|f| f.id.as_str()).collect())
    }
}

//! Layout data structures and field references.

use crate::error::{LayoutError, SeedError};
use crate::models::{Field, Section};
use serde::{Deserialize, Serialize};

/// Reference to a single field: owning section name plus field id.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FieldRef {
    /// Owning section name
    pub section: String,
    /// Field id within the section
    pub field: String,
}

impl FieldRef {
    /// Creates a new field reference.
    pub fn new(section: impl Into<String>, field: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            field: field.into(),
        }
    }
}

impl std::fmt::Display for FieldRef {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}/{}", self.section, self.field)
    }
}

/// Resolved location of a field inside a [`Layout`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSlot {
    /// Index of the owning section
    pub section: usize,
    /// Index of the field within the section
    pub index: usize,
}

/// The full arrangement: every section with its ordered fields.
///
/// # Validation
///
/// - At least one section required
/// - Section names must be non-empty and unique
/// - Field ids must be non-empty and unique within their section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Layout {
    /// Ordered list of sections
    pub sections: Vec<Section>,
}

impl Layout {
    /// Creates a layout from sections, validating it.
    pub fn new(sections: Vec<Section>) -> Result<Self, SeedError> {
        let layout = Self { sections };
        layout.validate()?;
        Ok(layout)
    }

    /// Adds a section to this layout.
    pub fn add_section(&mut self, section: Section) -> Result<(), SeedError> {
        if self.get_section(&section.name).is_some() {
            return Err(SeedError::DuplicateSection(section.name));
        }
        section.validate(self.sections.len())?;
        self.sections.push(section);
        Ok(())
    }

    /// Gets a section by name.
    #[must_use]
    pub fn get_section(&self, name: &str) -> Option<&Section> {
        self.sections.iter().find(|s| s.name == name)
    }

    /// Gets a mutable section by name.
    pub fn get_section_mut(&mut self, name: &str) -> Option<&mut Section> {
        self.sections.iter_mut().find(|s| s.name == name)
    }

    /// Gets a field by reference.
    #[must_use]
    pub fn get_field(&self, field_ref: &FieldRef) -> Option<&Field> {
        self.get_section(&field_ref.section)?
            .get_field(&field_ref.field)
    }

    /// Resolves a reference to section and field indices.
    ///
    /// # Errors
    ///
    /// `SectionNotFound` or `FieldNotFound` if the reference does not resolve.
    pub fn locate(&self, field_ref: &FieldRef) -> Result<FieldSlot, LayoutError> {
        let section = self
            .sections
            .iter()
            .position(|s| s.name == field_ref.section)
            .ok_or_else(|| LayoutError::SectionNotFound {
                section: field_ref.section.clone(),
            })?;

        let index = self.sections[section]
            .position_of(&field_ref.field)
            .ok_or_else(|| LayoutError::FieldNotFound {
                section: field_ref.section.clone(),
                field: field_ref.field.clone(),
            })?;

        Ok(FieldSlot { section, index })
    }

    /// Like [`Layout::locate`], but also rejects hidden fields.
    pub fn locate_visible(&self, field_ref: &FieldRef) -> Result<FieldSlot, LayoutError> {
        let slot = self.locate(field_ref)?;
        if !self.sections[slot.section].fields[slot.index].visible {
            return Err(LayoutError::FieldHidden {
                section: field_ref.section.clone(),
                field: field_ref.field.clone(),
            });
        }
        Ok(slot)
    }

    /// Total number of fields across all sections (spacers included).
    #[must_use]
    pub fn field_count(&self) -> usize {
        self.sections.iter().map(|s| s.fields.len()).sum()
    }

    /// Validates the layout structure.
    ///
    /// Checks:
    /// - At least one section exists
    /// - Section names are non-empty and unique
    /// - Field ids are non-empty and unique per section
    pub fn validate(&self) -> Result<(), SeedError> {
        if self.sections.is_empty() {
            return Err(SeedError::NoSections);
        }

        let mut names = std::collections::HashSet::new();
        for (idx, section) in self.sections.iter().enumerate() {
            section.validate(idx)?;
            if !names.insert(section.name.as_str()) {
                return Err(SeedError::DuplicateSection(section.name.clone()));
            }
        }

        Ok(())
    }
}

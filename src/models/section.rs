//! Section data structures.

use crate::error::SeedError;
use crate::models::Field;
use serde::{Deserialize, Serialize};

/// A named, ordered group of fields.
///
/// # Validation
///
/// - `name` must be non-empty and unique within the parent Layout
/// - Field ids must be unique within the section
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Section {
    /// Unique identifier and display title (e.g., "Account Information")
    pub name: String,
    /// Ordered fields; index defines on-screen position
    pub fields: Vec<Field>,
    /// Whether the section is expanded on screen (UI-only, not exported)
    #[serde(default = "default_expanded")]
    pub expanded: bool,
}

/// Default value for `expanded` (true)
const fn default_expanded() -> bool {
    true
}

impl Section {
    /// Creates a new expanded section with no fields.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
            expanded: true,
        }
    }

    /// Adds a field at the end of the section.
    ///
    /// # Errors
    ///
    /// Returns an error if the id is empty or already used in this section.
    pub fn add_field(&mut self, field: Field) -> Result<(), SeedError> {
        if field.id.is_empty() {
            return Err(SeedError::EmptyFieldId {
                section: self.name.clone(),
                index: self.fields.len(),
            });
        }
        if self.position_of(&field.id).is_some() {
            return Err(SeedError::DuplicateField {
                section: self.name.clone(),
                field: field.id,
            });
        }
        self.fields.push(field);
        Ok(())
    }

    /// Builder-style variant of [`Section::add_field`].
    pub fn with_field(mut self, field: Field) -> Result<Self, SeedError> {
        self.add_field(field)?;
        Ok(self)
    }

    /// Returns the index of the field with the given id.
    #[must_use]
    pub fn position_of(&self, field_id: &str) -> Option<usize> {
        self.fields.iter().position(|f| f.id == field_id)
    }

    /// Gets a reference to the field with the given id.
    #[must_use]
    pub fn get_field(&self, field_id: &str) -> Option<&Field> {
        self.fields.iter().find(|f| f.id == field_id)
    }

    /// Gets a mutable reference to the field with the given id.
    pub fn get_field_mut(&mut self, field_id: &str) -> Option<&mut Field> {
        self.fields.iter_mut().find(|f| f.id == field_id)
    }

    /// Number of visible, labelled fields.
    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| f.visible && !f.is_spacer())
            .count()
    }

    /// Number of hidden, labelled fields.
    #[must_use]
    pub fn hidden_count(&self) -> usize {
        self.fields
            .iter()
            .filter(|f| !f.visible && !f.is_spacer())
            .count()
    }

    /// Flips the expanded flag and returns the new value.
    pub fn toggle_expanded(&mut self) -> bool {
        self.expanded = !self.expanded;
        self.expanded
    }

    /// Checks the section's own invariants.
    pub fn validate(&self, index: usize) -> Result<(), SeedError> {
        if self.name.is_empty() {
            return Err(SeedError::EmptySectionName { index });
        }

        let mut seen = std::collections::HashSet::new();
        for (idx, field) in self.fields.iter().enumerate() {
            if field.id.is_empty() {
                return Err(SeedError::EmptyFieldId {
                    section: self.name.clone(),
                    index: idx,
                });
            }
            if !seen.insert(field.id.as_str()) {
                return Err(SeedError::DuplicateField {
                    section: self.name.clone(),
                    field: field.id.clone(),
                });
            }
        }

        Ok(())
    }
}

//! Error types for layout operations and seed loading.
//!
//! Store operations fail with [`LayoutError`], which always maps onto one of
//! the two coarse [`ErrorKind`]s a presentation surface cares about. Problems
//! with seed definitions or imported documents are reported as [`SeedError`].

use serde::Serialize;
use thiserror::Error;

/// Coarse classification of a failed store operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// The referenced section or field does not exist (or cannot be targeted).
    NotFound,
    /// The mutation is structurally disallowed.
    InvalidOperation,
}

impl std::fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound => write!(f, "not_found"),
            Self::InvalidOperation => write!(f, "invalid_operation"),
        }
    }
}

/// Errors produced by [`LayoutStore`](crate::store::LayoutStore) operations.
///
/// A failed operation never changes field order or visibility.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LayoutError {
    /// No section with this name exists.
    #[error("Section '{section}' not found")]
    SectionNotFound {
        /// Requested section name.
        section: String,
    },

    /// The section exists but has no field with this id.
    #[error("Field '{field}' not found in section '{section}'")]
    FieldNotFound {
        /// Section that was searched.
        section: String,
        /// Requested field id.
        field: String,
    },

    /// The field exists but is hidden, so it cannot be selected or swapped.
    #[error("Field '{field}' in section '{section}' is hidden")]
    FieldHidden {
        /// Section owning the field.
        section: String,
        /// Hidden field id.
        field: String,
    },

    /// Swapping fields that live in different sections.
    #[error("Cannot swap '{first}' with '{second}': fields are in different sections")]
    CrossSectionSwap {
        /// First operand, formatted as `section/field`.
        first: String,
        /// Second operand, formatted as `section/field`.
        second: String,
    },

    /// A new field order is not a permutation of the section's visible fields.
    #[error("Invalid order for section '{section}': {reason}")]
    InvalidOrder {
        /// Section being reordered.
        section: String,
        /// What is wrong with the requested order.
        reason: String,
    },

    /// A move target lies past the last visible position.
    #[error("Position {index} is out of range for section '{section}' ({len} visible fields)")]
    PositionOutOfRange {
        /// Section being reordered.
        section: String,
        /// Requested zero-based position.
        index: usize,
        /// Number of visible fields in the section.
        len: usize,
    },
}

impl LayoutError {
    /// Returns the coarse error kind for this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::SectionNotFound { .. } | Self::FieldNotFound { .. } | Self::FieldHidden { .. } => {
                ErrorKind::NotFound
            }
            Self::CrossSectionSwap { .. }
            | Self::InvalidOrder { .. }
            | Self::PositionOutOfRange { .. } => ErrorKind::InvalidOperation,
        }
    }
}

/// Errors produced while validating a seed definition or imported document.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SeedError {
    /// The text could not be parsed as JSON / JSON5.
    #[error("Failed to parse layout definition: {0}")]
    Parse(String),

    /// The definition contains no sections.
    #[error("Layout definition must contain at least one section")]
    NoSections,

    /// A section has an empty name.
    #[error("Section at index {index} has an empty name")]
    EmptySectionName {
        /// Index of the offending section.
        index: usize,
    },

    /// Two sections share a name.
    #[error("Duplicate section name '{0}'")]
    DuplicateSection(String),

    /// A field has an empty id.
    #[error("Field at index {index} in section '{section}' has an empty id")]
    EmptyFieldId {
        /// Section owning the field.
        section: String,
        /// Index of the offending field.
        index: usize,
    },

    /// Two fields in one section share an id.
    #[error("Duplicate field id '{field}' in section '{section}'")]
    DuplicateField {
        /// Section owning the fields.
        section: String,
        /// Duplicated id.
        field: String,
    },
}

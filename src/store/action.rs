//! Serializable user actions and their outcomes.
//!
//! Every gesture a presentation surface forwards is one [`Action`]. The same
//! type is accepted by the HTTP API and read from CLI action scripts.

use crate::models::FieldRef;
use serde::{Deserialize, Serialize};

/// A single user-triggered mutation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum Action {
    /// Click on a field's handle.
    Select {
        /// Section name
        section: String,
        /// Field id
        field: String,
    },
    /// Direct swap of two fields.
    Swap {
        /// First operand
        first: FieldRef,
        /// Second operand
        second: FieldRef,
    },
    /// Rearrange a section's visible fields into the given order.
    Reorder {
        /// Section name
        section: String,
        /// Visible field ids in their new order
        fields: Vec<String>,
    },
    /// Move one field to a position among the section's visible fields.
    Move {
        /// Section name
        section: String,
        /// Field id
        field: String,
        /// Zero-based position among visible fields
        to_index: usize,
    },
    /// Hide a field.
    Hide {
        /// Section name
        section: String,
        /// Field id
        field: String,
    },
    /// Show a hidden field.
    Show {
        /// Section name
        section: String,
        /// Field id
        field: String,
    },
    /// Expand or collapse a section.
    ToggleSection {
        /// Section name
        section: String,
    },
    /// Restore the seed layout.
    Reset,
}

/// Result of a `select` call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectOutcome {
    /// The field is now pending.
    Selected(FieldRef),
    /// The pending field was clicked again and released.
    Deselected(FieldRef),
    /// The pending field and the clicked field traded places.
    Swapped {
        /// Previously pending field
        first: FieldRef,
        /// Newly clicked field
        second: FieldRef,
    },
}

/// Result of a successfully applied [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum ActionOutcome {
    /// A field became the pending selection.
    Selected {
        /// Selected field
        field: FieldRef,
    },
    /// The pending selection was cancelled.
    Deselected {
        /// Released field
        field: FieldRef,
    },
    /// Two fields traded places.
    Swapped {
        /// First operand
        first: FieldRef,
        /// Second operand
        second: FieldRef,
    },
    /// A section's visible fields were rearranged.
    Reordered {
        /// Section name
        section: String,
    },
    /// A field moved to a new visible position.
    Moved {
        /// Moved field
        field: FieldRef,
        /// Zero-based position among visible fields
        to_index: usize,
    },
    /// A field is hidden.
    Hidden {
        /// Target field
        field: FieldRef,
        /// False if it was already hidden
        changed: bool,
    },
    /// A field is visible.
    Shown {
        /// Target field
        field: FieldRef,
        /// False if it was already visible
        changed: bool,
    },
    /// A section was expanded or collapsed.
    SectionToggled {
        /// Section name
        section: String,
        /// New expanded flag
        expanded: bool,
    },
    /// The seed layout was restored.
    Reset,
}

impl From<SelectOutcome> for ActionOutcome {
    fn from(outcome: SelectOutcome) -> Self {
        match outcome {
            SelectOutcome::Selected(field) => Self::Selected { field },
            SelectOutcome::Deselected(field) => Self::Deselected { field },
            SelectOutcome::Swapped { first, second } => Self::Swapped { first, second },
        }
    }
}

impl ActionOutcome {
    /// Short human-readable notice for status bars.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Selected { field } => {
                format!("Selected {field} - click another field to swap positions")
            }
            Self::Deselected { field } => format!("Selection cancelled for {field}"),
            Self::Swapped { first, second } => format!("Swapped {first} and {second}"),
            Self::Reordered { section } => format!("Reordered {section}"),
            Self::Moved { field, to_index } => {
                format!("Moved {field} to position {}", to_index + 1)
            }
            Self::Hidden { field, changed: true } => format!("Hidden {field}"),
            Self::Hidden { field, changed: false } => format!("{field} is already hidden"),
            Self::Shown { field, changed: true } => format!("Restored {field}"),
            Self::Shown { field, changed: false } => format!("{field} is already visible"),
            Self::SectionToggled {
                section,
                expanded: true,
            } => format!("Expanded {section}"),
            Self::SectionToggled {
                section,
                expanded: false,
            } => format!("Collapsed {section}"),
            Self::Reset => "Layout reset to original".to_string(),
        }
    }
}

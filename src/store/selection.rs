//! Two-state selection machine behind the "click two handles to swap" gesture.
//!
//! The machine is either `Idle` or `Pending` with exactly one field waiting
//! for a swap partner. [`Selection::step`] decides what a click means without
//! touching the layout, so the transition table can be tested on its own.

use crate::models::FieldRef;
use serde::Serialize;

/// Pending-selection state of a store.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
#[serde(tag = "state", content = "field", rename_all = "snake_case")]
pub enum Selection {
    /// No field is waiting for a partner.
    #[default]
    Idle,
    /// This field was clicked first and awaits a swap partner.
    Pending(FieldRef),
}

/// What a click on a field's handle resolves to.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectStep {
    /// Start a selection on the target.
    Select(FieldRef),
    /// The pending field was clicked again; cancel.
    Deselect(FieldRef),
    /// A different field was clicked; swap the pair and return to idle.
    Swap {
        /// Previously selected field
        first: FieldRef,
        /// Newly clicked field
        second: FieldRef,
    },
}

impl Selection {
    /// Returns the pending field, if any.
    #[must_use]
    pub const fn pending(&self) -> Option<&FieldRef> {
        match self {
            Self::Idle => None,
            Self::Pending(field) => Some(field),
        }
    }

    /// Checks if the given field is the pending one.
    #[must_use]
    pub fn is_pending(&self, field: &FieldRef) -> bool {
        self.pending() == Some(field)
    }

    /// Decides the transition for a click on `target`.
    #[must_use]
    pub fn step(&self, target: &FieldRef) -> SelectStep {
        match self {
            Self::Idle => SelectStep::Select(target.clone()),
            Self::Pending(first) if first == target => SelectStep::Deselect(target.clone()),
            Self::Pending(first) => SelectStep::Swap {
                first: first.clone(),
                second: target.clone(),
            },
        }
    }

    /// Returns to `Idle`.
    pub fn clear(&mut self) {
        *self = Self::Idle;
    }
}

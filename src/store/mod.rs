//! The layout store: one session's arrangement and its mutations.
//!
//! A [`LayoutStore`] owns the current [`Layout`], the pending [`Selection`],
//! and a shared, immutable seed used by [`LayoutStore::reset`]. Every
//! operation either succeeds completely or leaves field order and visibility
//! untouched.
//!
//! Hidden fields keep their slot in the section's sequence, so hiding and
//! showing never moves anything: a hide-then-show round trip is an identity
//! on ordering regardless of how many fields are hidden in between.

pub mod action;
pub mod selection;
pub mod view;

pub use action::{Action, ActionOutcome, SelectOutcome};
pub use selection::{SelectStep, Selection};
pub use view::{FieldView, HiddenField, LayoutView, SectionView};

use std::sync::Arc;

use tracing::debug;

use crate::error::LayoutError;
use crate::models::{ExportDocument, FieldRef, Layout};

/// Per-session layout state.
#[derive(Debug, Clone)]
pub struct LayoutStore {
    /// Original arrangement, never mutated
    seed: Arc<Layout>,
    /// Current arrangement
    layout: Layout,
    /// Field awaiting a swap partner
    selection: Selection,
}

impl LayoutStore {
    /// Creates a store whose seed is `layout`.
    #[must_use]
    pub fn new(layout: Layout) -> Self {
        Self::from_seed(Arc::new(layout))
    }

    /// Creates a store from a seed shared with other sessions.
    #[must_use]
    pub fn from_seed(seed: Arc<Layout>) -> Self {
        Self {
            layout: (*seed).clone(),
            seed,
            selection: Selection::Idle,
        }
    }

    /// Current arrangement.
    #[must_use]
    pub const fn layout(&self) -> &Layout {
        &self.layout
    }

    /// The immutable seed arrangement.
    #[must_use]
    pub fn seed(&self) -> &Layout {
        &self.seed
    }

    /// Current selection state.
    #[must_use]
    pub const fn selection(&self) -> &Selection {
        &self.selection
    }

    /// Handles a click on a field's handle.
    ///
    /// Idle → the field becomes pending. Pending on the same field → released.
    /// Pending on another field → the two are swapped and the selection is
    /// cleared, whether or not the swap succeeds.
    ///
    /// # Errors
    ///
    /// `NotFound` if the target is missing or hidden (state unchanged);
    /// `InvalidOperation` if the redirected swap crosses sections.
    pub fn select(&mut self, section: &str, field: &str) -> Result<SelectOutcome, LayoutError> {
        let target = FieldRef::new(section, field);
        self.layout.locate_visible(&target)?;

        match self.selection.step(&target) {
            SelectStep::Select(field) => {
                debug!(field = %field, "field selected");
                self.selection = Selection::Pending(field.clone());
                Ok(SelectOutcome::Selected(field))
            }
            SelectStep::Deselect(field) => {
                debug!(field = %field, "field deselected");
                self.selection.clear();
                Ok(SelectOutcome::Deselected(field))
            }
            SelectStep::Swap { first, second } => {
                let result = self.swap(&first, &second);
                self.selection.clear();
                result.map(|()| SelectOutcome::Swapped { first, second })
            }
        }
    }

    /// Exchanges the positions of two visible fields in the same section.
    ///
    /// Swapping a field with itself is a no-op.
    ///
    /// # Errors
    ///
    /// `NotFound` if either field is missing or hidden; `InvalidOperation` if
    /// the fields live in different sections.
    pub fn swap(&mut self, first: &FieldRef, second: &FieldRef) -> Result<(), LayoutError> {
        let a = self.layout.locate_visible(first)?;
        let b = self.layout.locate_visible(second)?;

        if a.section != b.section {
            return Err(LayoutError::CrossSectionSwap {
                first: first.to_string(),
                second: second.to_string(),
            });
        }

        self.layout.sections[a.section].fields.swap(a.index, b.index);
        debug!(first = %first, second = %second, "fields swapped");
        Ok(())
    }

    /// Rearranges the visible fields of a section into `fields` order.
    ///
    /// `fields` must name every visible field of the section exactly once.
    /// Hidden fields keep their slots; the visible slots are refilled in the
    /// requested order. A pending selection is kept.
    ///
    /// # Errors
    ///
    /// `NotFound` if the section is missing or an id is unknown or hidden;
    /// `InvalidOperation` if an id repeats or a visible field is left out.
    pub fn reorder(&mut self, section: &str, fields: &[String]) -> Result<(), LayoutError> {
        let section_index = self
            .layout
            .sections
            .iter()
            .position(|s| s.name == section)
            .ok_or_else(|| LayoutError::SectionNotFound {
                section: section.to_string(),
            })?;

        let mut sources = Vec::with_capacity(fields.len());
        for id in fields {
            let slot = self.layout.locate_visible(&FieldRef::new(section, id.as_str()))?;
            if sources.contains(&slot.index) {
                return Err(LayoutError::InvalidOrder {
                    section: section.to_string(),
                    reason: format!("field '{id}' appears more than once"),
                });
            }
            sources.push(slot.index);
        }

        let entries = &mut self.layout.sections[section_index].fields;
        let targets: Vec<usize> = entries
            .iter()
            .enumerate()
            .filter(|(_, f)| f.visible)
            .map(|(i, _)| i)
            .collect();
        if sources.len() != targets.len() {
            return Err(LayoutError::InvalidOrder {
                section: section.to_string(),
                reason: format!(
                    "expected {} visible fields, got {}",
                    targets.len(),
                    sources.len()
                ),
            });
        }

        let moved: Vec<_> = sources.iter().map(|&i| entries[i].clone()).collect();
        for (slot, field) in targets.into_iter().zip(moved) {
            entries[slot] = field;
        }
        debug!(section, count = fields.len(), "section reordered");
        Ok(())
    }

    /// Moves a visible field to `to_index` among the section's visible
    /// fields, shifting the others along.
    ///
    /// # Errors
    ///
    /// `NotFound` if the field is missing or hidden; `InvalidOperation` if
    /// `to_index` is not a visible position.
    pub fn move_field(
        &mut self,
        section: &str,
        field: &str,
        to_index: usize,
    ) -> Result<(), LayoutError> {
        let slot = self.layout.locate_visible(&FieldRef::new(section, field))?;

        let mut order: Vec<String> = self.layout.sections[slot.section]
            .fields
            .iter()
            .filter(|f| f.visible && f.id != field)
            .map(|f| f.id.clone())
            .collect();
        if to_index > order.len() {
            return Err(LayoutError::PositionOutOfRange {
                section: section.to_string(),
                index: to_index,
                len: order.len() + 1,
            });
        }

        order.insert(to_index, field.to_string());
        self.reorder(section, &order)
    }

    /// Hides a field. Returns false if it was already hidden.
    ///
    /// A pending selection on this field is cleared.
    pub fn hide(&mut self, section: &str, field: &str) -> Result<bool, LayoutError> {
        let target = FieldRef::new(section, field);
        let slot = self.layout.locate(&target)?;

        if self.selection.is_pending(&target) {
            self.selection.clear();
        }

        let entry = &mut self.layout.sections[slot.section].fields[slot.index];
        let changed = entry.visible;
        entry.visible = false;
        if changed {
            debug!(field = %target, "field hidden");
        }
        Ok(changed)
    }

    /// Shows a hidden field in its original slot. Returns false if it was
    /// already visible.
    pub fn show(&mut self, section: &str, field: &str) -> Result<bool, LayoutError> {
        let target = FieldRef::new(section, field);
        let slot = self.layout.locate(&target)?;

        let entry = &mut self.layout.sections[slot.section].fields[slot.index];
        let changed = !entry.visible;
        entry.visible = true;
        if changed {
            debug!(field = %target, "field shown");
        }
        Ok(changed)
    }

    /// Expands or collapses a section. Returns the new expanded flag.
    pub fn toggle_section(&mut self, section: &str) -> Result<bool, LayoutError> {
        let entry = self
            .layout
            .get_section_mut(section)
            .ok_or_else(|| LayoutError::SectionNotFound {
                section: section.to_string(),
            })?;
        let expanded = entry.toggle_expanded();
        debug!(section, expanded, "section toggled");
        Ok(expanded)
    }

    /// Restores the seed arrangement and clears the selection.
    pub fn reset(&mut self) {
        self.layout = (*self.seed).clone();
        self.selection.clear();
        debug!("layout reset");
    }

    /// Snapshot of the current arrangement for export.
    #[must_use]
    pub fn export(&self) -> ExportDocument {
        ExportDocument::from(&self.layout)
    }

    /// Checks if the exported arrangement differs from the seed.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.export() != ExportDocument::from(self.seed.as_ref())
    }

    /// Hidden, labelled fields in layout order.
    #[must_use]
    pub fn hidden_fields(&self) -> Vec<HiddenField> {
        self.layout
            .sections
            .iter()
            .flat_map(|section| {
                section
                    .fields
                    .iter()
                    .filter(|f| !f.visible && !f.is_spacer())
                    .map(|f| HiddenField {
                        section: section.name.clone(),
                        id: f.id.clone(),
                        label: f.label.clone(),
                    })
            })
            .collect()
    }

    /// Builds the render-facing view.
    #[must_use]
    pub fn view(&self) -> LayoutView {
        let sections: Vec<SectionView> = self
            .layout
            .sections
            .iter()
            .map(|s| SectionView::build(s, &self.selection))
            .collect();
        let hidden_count = sections.iter().map(|s| s.hidden_count).sum();

        LayoutView {
            sections,
            selection: self.selection.pending().cloned(),
            hidden_count,
            modified: self.is_modified(),
        }
    }

    /// Applies one action.
    pub fn apply(&mut self, action: &Action) -> Result<ActionOutcome, LayoutError> {
        match action {
            Action::Select { section, field } => self.select(section, field).map(Into::into),
            Action::Swap { first, second } => {
                self.swap(first, second)?;
                Ok(ActionOutcome::Swapped {
                    first: first.clone(),
                    second: second.clone(),
                })
            }
            Action::Reorder { section, fields } => {
                self.reorder(section, fields)?;
                Ok(ActionOutcome::Reordered {
                    section: section.clone(),
                })
            }
            Action::Move {
                section,
                field,
                to_index,
            } => {
                self.move_field(section, field, *to_index)?;
                Ok(ActionOutcome::Moved {
                    field: FieldRef::new(section.as_str(), field.as_str()),
                    to_index: *to_index,
                })
            }
            Action::Hide { section, field } => {
                let changed = self.hide(section, field)?;
                Ok(ActionOutcome::Hidden {
                    field: FieldRef::new(section.as_str(), field.as_str()),
                    changed,
                })
            }
            Action::Show { section, field } => {
                let changed = self.show(section, field)?;
                Ok(ActionOutcome::Shown {
                    field: FieldRef::new(section.as_str(), field.as_str()),
                    changed,
                })
            }
            Action::ToggleSection { section } => {
                let expanded = self.toggle_section(section)?;
                Ok(ActionOutcome::SectionToggled {
                    section: section.clone(),
                    expanded,
                })
            }
            Action::Reset => {
                self.reset();
                Ok(ActionOutcome::Reset)
            }
        }
    }
}

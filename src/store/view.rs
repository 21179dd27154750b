//! Render-facing read model of a store.
//!
//! A presentation surface redraws entirely from a [`LayoutView`]; it never
//! reaches into the store's internals.

use crate::models::{Field, FieldKind, FieldRef, Section};
use crate::store::Selection;
use serde::Serialize;

/// Snapshot of everything a surface needs to draw the page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayoutView {
    /// Sections in on-screen order
    pub sections: Vec<SectionView>,
    /// Field awaiting a swap partner, if any
    pub selection: Option<FieldRef>,
    /// Hidden, labelled fields across all sections
    pub hidden_count: usize,
    /// Whether the arrangement differs from the seed
    pub modified: bool,
}

/// One section as drawn on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SectionView {
    /// Section name
    pub name: String,
    /// Whether the section is expanded
    pub expanded: bool,
    /// Visible labelled fields
    pub visible_count: usize,
    /// Hidden labelled fields
    pub hidden_count: usize,
    /// All fields in order, hidden ones included
    pub fields: Vec<FieldView>,
}

/// One field as drawn on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldView {
    /// Field id
    pub id: String,
    /// Field label
    pub label: String,
    /// Sample value ("--" when empty)
    pub value: String,
    /// Display kind
    pub kind: FieldKind,
    /// Visibility flag
    pub visible: bool,
    /// Whether this field is the pending selection
    pub selected: bool,
    /// Whether this field is a blank grid slot
    pub spacer: bool,
}

/// Entry of the hidden-fields panel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HiddenField {
    /// Owning section
    pub section: String,
    /// Field id
    pub id: String,
    /// Field label
    pub label: String,
}

impl SectionView {
    pub(crate) fn build(section: &Section, selection: &Selection) -> Self {
        let fields = section
            .fields
            .iter()
            .map(|field| {
                let selected = selection
                    .pending()
                    .is_some_and(|p| p.section == section.name && p.field == field.id);
                FieldView::build(field, selected)
            })
            .collect();

        Self {
            name: section.name.clone(),
            expanded: section.expanded,
            visible_count: section.visible_count(),
            hidden_count: section.hidden_count(),
            fields,
        }
    }
}

impl FieldView {
    fn build(field: &Field, selected: bool) -> Self {
        Self {
            id: field.id.clone(),
            label: field.label.clone(),
            value: field.display_value().to_string(),
            kind: field.kind,
            visible: field.visible,
            selected,
            spacer: field.is_spacer(),
        }
    }
}

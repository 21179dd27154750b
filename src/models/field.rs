//! Field data structures.

use serde::{Deserialize, Serialize};

/// Display kind of a field, used by surfaces to format the sample value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    /// Plain text (default)
    #[default]
    Text,
    /// Single-choice list
    Picklist,
    /// Phone number (rendered as a `tel:` link)
    Phone,
    /// Web address (rendered as a link)
    Url,
    /// Boolean checkbox
    Checkbox,
    /// Percentage value
    Percentage,
}

impl FieldKind {
    /// Returns true if surfaces should render the value as a link.
    #[must_use]
    pub const fn is_link(self) -> bool {
        matches!(self, Self::Phone | Self::Url)
    }
}

/// A single layout item that can be moved and hidden.
///
/// Position is implicit: a field's index within its section's `fields`.
///
/// # Validation
///
/// - `id` must be non-empty and unique within the owning section
/// - An empty `label` marks the field as a spacer (blank grid slot)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Field {
    /// Stable identifier, unique within the section (e.g., "account_name")
    pub id: String,
    /// Display name (e.g., "Account Name")
    pub label: String,
    /// Sample value shown by the surface (not exported)
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub value: String,
    /// Display kind (not exported)
    #[serde(default)]
    pub kind: FieldKind,
    /// False once hidden by the user
    #[serde(default = "default_visible")]
    pub visible: bool,
}

/// Default value for `visible` (true)
const fn default_visible() -> bool {
    true
}

impl Field {
    /// Creates a new visible text field.
    pub fn new(id: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            value: String::new(),
            kind: FieldKind::Text,
            visible: true,
        }
    }

    /// Creates a hidden spacer occupying one grid slot.
    pub fn spacer(id: impl Into<String>) -> Self {
        Self {
            visible: false,
            ..Self::new(id, "")
        }
    }

    /// Sets the sample value.
    pub fn with_value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Sets the display kind.
    #[must_use]
    pub const fn with_kind(mut self, kind: FieldKind) -> Self {
        self.kind = kind;
        self
    }

    /// Sets the initial visibility.
    #[must_use]
    pub const fn with_visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Checks if this field is a spacer (no label).
    #[must_use]
    pub fn is_spacer(&self) -> bool {
        self.label.is_empty()
    }

    /// Value to display, falling back to "--" when empty.
    #[must_use]
    pub fn display_value(&self) -> &str {
        if self.value.is_empty() {
            "--"
        } else {
            &self.value
        }
    }
}

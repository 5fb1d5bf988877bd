use serde_json::Value;

use super::ComponentBase;
use crate::coerce::{stringify, trimmed};

/// Single or multi-line text field.
///
/// The current `value` is kept verbatim (no trimming); only the placeholder
/// is trimmed like the other display strings.
#[derive(Debug, Clone, PartialEq)]
pub struct TextInput {
    pub(super) base: ComponentBase,
    pub(super) value: String,
    pub(super) placeholder: String,
    pub(super) multiline: bool,
}

impl TextInput {
    pub fn new(id: impl AsRef<str>, label: impl AsRef<str>) -> Self {
        Self {
            base: ComponentBase::new(id, label),
            value: String::new(),
            placeholder: String::new(),
            multiline: false,
        }
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the value from untrusted JSON (`null` → `""`).
    pub fn value_json(self, value: &Value) -> Self {
        self.value(stringify(value))
    }

    pub fn placeholder(mut self, placeholder: impl AsRef<str>) -> Self {
        self.placeholder = trimmed(placeholder);
        self
    }

    pub fn multiline(mut self, multiline: bool) -> Self {
        self.multiline = multiline;
        self
    }

    pub fn text(&self) -> &str {
        &self.value
    }
}

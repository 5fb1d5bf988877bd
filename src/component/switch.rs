use serde_json::Value;

use super::ComponentBase;
use crate::coerce::truthy;

/// Boolean toggle.
#[derive(Debug, Clone, PartialEq)]
pub struct Switch {
    pub(super) base: ComponentBase,
    pub(super) value: bool,
}

impl Switch {
    pub fn new(id: impl AsRef<str>, label: impl AsRef<str>) -> Self {
        Self {
            base: ComponentBase::new(id, label),
            value: false,
        }
    }

    pub fn value(mut self, value: bool) -> Self {
        self.value = value;
        self
    }

    /// Set the value from untrusted JSON using truthiness.
    pub fn value_json(self, value: &Value) -> Self {
        self.value(truthy(value))
    }

    pub fn is_on(&self) -> bool {
        self.value
    }
}

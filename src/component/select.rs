use serde_json::{Map, Value};

use super::ComponentBase;
use crate::coerce::{stringify, stringify_opt, trimmed};

/// One `{label, value}` entry of a [`Select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
    label: String,
    value: String,
}

impl SelectOption {
    /// The label is trimmed, the value is kept verbatim.
    pub fn new(label: impl AsRef<str>, value: impl Into<String>) -> Self {
        Self {
            label: trimmed(label),
            value: value.into(),
        }
    }

    /// Normalize one untrusted option entry.
    ///
    /// Objects contribute their `label` and `value` keys (missing → `""`); any
    /// other value is used as both label and value. Returns `None` when the
    /// trimmed label is empty.
    pub fn from_json(item: &Value) -> Option<Self> {
        let option = match item {
            Value::Object(map) => Self::new(
                stringify_opt(map.get("label")),
                stringify_opt(map.get("value")),
            ),
            scalar => {
                let text = stringify(scalar);
                Self::new(&text, text.clone())
            }
        };
        (!option.label.is_empty()).then_some(option)
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub(super) fn to_record(&self) -> Map<String, Value> {
        let mut record = Map::new();
        record.insert("label".into(), Value::String(self.label.clone()));
        record.insert("value".into(), Value::String(self.value.clone()));
        record
    }
}

/// Drop-down choice over an ordered list of options.
#[derive(Debug, Clone, PartialEq)]
pub struct Select {
    pub(super) base: ComponentBase,
    pub(super) options: Vec<SelectOption>,
    pub(super) value: String,
}

impl Select {
    pub fn new(id: impl AsRef<str>, label: impl AsRef<str>) -> Self {
        Self {
            base: ComponentBase::new(id, label),
            options: Vec::new(),
            value: String::new(),
        }
    }

    /// Replace the options. Entries with an empty trimmed label are skipped.
    pub fn options(mut self, options: impl IntoIterator<Item = SelectOption>) -> Self {
        self.options = options
            .into_iter()
            .filter(|option| !option.label.is_empty())
            .collect();
        self
    }

    /// Replace the options from untrusted JSON entries, see [`SelectOption::from_json`].
    pub fn options_json<'a>(self, items: impl IntoIterator<Item = &'a Value>) -> Self {
        self.options(items.into_iter().filter_map(SelectOption::from_json))
    }

    pub fn value(mut self, value: impl Into<String>) -> Self {
        self.value = value.into();
        self
    }

    /// Set the selected value from untrusted JSON (`null` → `""`).
    pub fn value_json(self, value: &Value) -> Self {
        self.value(stringify(value))
    }

    pub fn option_list(&self) -> &[SelectOption] {
        &self.options
    }

    pub fn selected(&self) -> &str {
        &self.value
    }
}

//! Component model.
//!
//! Components are the typed UI elements a page hands to the host. The set of
//! shapes is closed, so it is a sum type: every variant embeds a shared
//! [`ComponentBase`] and adds its own fields.
//!
//! # Wire form
//!
//! ```text
//! { "id", "type", "label", "description", "enabled", "visible", ...variant fields }
//! ```
//!
//! Field names are a protocol contract. Renaming any of them needs a protocol bump.
//!
//! Constructors normalize every input (trim display strings, coerce `null` and
//! non-string JSON, fall back to safe enum defaults), so a component can never
//! reach the wire unnormalized. Components are built once per render and never
//! mutated afterwards.

mod button;
mod select;
mod switch;
mod text_input;

pub use button::{Button, ButtonStyle};
pub use select::{Select, SelectOption};
pub use switch::Switch;
pub use text_input::TextInput;

use serde::{Serialize, Serializer};
use serde_json::{Map, Value};

use crate::coerce::trimmed;

/// Record produced by [`Component::to_record`].
pub type ComponentRecord = Map<String, Value>;

/// Discriminant carried in the `type` field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComponentKind {
    Button,
    TextInput,
    Switch,
    Select,
}

impl ComponentKind {
    /// Stable wire tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::TextInput => "text_input",
            Self::Switch => "switch",
            Self::Select => "select",
        }
    }
}

/// Fields shared by every component variant.
#[derive(Debug, Clone, PartialEq)]
pub struct ComponentBase {
    id: String,
    label: String,
    description: String,
    enabled: bool,
    visible: bool,
}

impl ComponentBase {
    pub(crate) fn new(id: impl AsRef<str>, label: impl AsRef<str>) -> Self {
        Self {
            id: trimmed(id),
            label: trimmed(label),
            description: String::new(),
            enabled: true,
            visible: true,
        }
    }

    /// Identifier used to correlate events with this component.
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn enabled(&self) -> bool {
        self.enabled
    }

    pub fn visible(&self) -> bool {
        self.visible
    }

    pub(crate) fn set_description(&mut self, description: impl AsRef<str>) {
        self.description = trimmed(description);
    }

    pub(crate) fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub(crate) fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    fn write_into(&self, kind: ComponentKind, record: &mut ComponentRecord) {
        record.insert("id".into(), Value::String(self.id.clone()));
        record.insert("type".into(), Value::String(kind.as_str().into()));
        record.insert("label".into(), Value::String(self.label.clone()));
        record.insert(
            "description".into(),
            Value::String(self.description.clone()),
        );
        record.insert("enabled".into(), Value::Bool(self.enabled));
        record.insert("visible".into(), Value::Bool(self.visible));
    }
}

/// Builder setters for the base fields, shared by all variants.
macro_rules! base_setters {
    ($($variant:ty),+ $(,)?) => {
        $(
            impl $variant {
                /// Secondary display text (trimmed).
                pub fn description(mut self, description: impl AsRef<str>) -> Self {
                    self.base.set_description(description);
                    self
                }

                pub fn enabled(mut self, enabled: bool) -> Self {
                    self.base.set_enabled(enabled);
                    self
                }

                pub fn visible(mut self, visible: bool) -> Self {
                    self.base.set_visible(visible);
                    self
                }

                pub fn base(&self) -> &ComponentBase {
                    &self.base
                }
            }
        )+
    };
}

base_setters!(Button, TextInput, Switch, Select);

/// A single serializable UI element.
#[derive(Debug, Clone, PartialEq)]
pub enum Component {
    Button(Button),
    TextInput(TextInput),
    Switch(Switch),
    Select(Select),
}

impl Component {
    pub fn kind(&self) -> ComponentKind {
        match self {
            Self::Button(_) => ComponentKind::Button,
            Self::TextInput(_) => ComponentKind::TextInput,
            Self::Switch(_) => ComponentKind::Switch,
            Self::Select(_) => ComponentKind::Select,
        }
    }

    pub fn base(&self) -> &ComponentBase {
        match self {
            Self::Button(c) => &c.base,
            Self::TextInput(c) => &c.base,
            Self::Switch(c) => &c.base,
            Self::Select(c) => &c.base,
        }
    }

    pub fn id(&self) -> &str {
        self.base().id()
    }

    /// Serialize into the wire record: the base fields plus the variant's own.
    pub fn to_record(&self) -> ComponentRecord {
        let mut record = ComponentRecord::new();
        self.base().write_into(self.kind(), &mut record);

        match self {
            Self::Button(button) => {
                record.insert(
                    "style".into(),
                    Value::String(button.style.as_str().into()),
                );
            }
            Self::TextInput(input) => {
                record.insert("value".into(), Value::String(input.value.clone()));
                record.insert(
                    "placeholder".into(),
                    Value::String(input.placeholder.clone()),
                );
                record.insert("multiline".into(), Value::Bool(input.multiline));
            }
            Self::Switch(switch) => {
                record.insert("value".into(), Value::Bool(switch.value));
            }
            Self::Select(select) => {
                let options = select
                    .options
                    .iter()
                    .map(SelectOption::to_record)
                    .map(Value::Object)
                    .collect();
                record.insert("options".into(), Value::Array(options));
                record.insert("value".into(), Value::String(select.value.clone()));
            }
        }

        record
    }
}

impl Serialize for Component {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.to_record().serialize(serializer)
    }
}

impl From<Button> for Component {
    fn from(c: Button) -> Self {
        Self::Button(c)
    }
}

impl From<TextInput> for Component {
    fn from(c: TextInput) -> Self {
        Self::TextInput(c)
    }
}

impl From<Switch> for Component {
    fn from(c: Switch) -> Self {
        Self::Switch(c)
    }
}

impl From<Select> for Component {
    fn from(c: Select) -> Self {
        Self::Select(c)
    }
}

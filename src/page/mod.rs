//! Page protocol.
//!
//! A page is driven by the host in two steps:
//!
//! ```text
//! build(payload) ──→ PageRecord ──→ host renders
//!                        │
//!     ┌──────────────────┘  user interacts
//!     ▼
//! on_event(Event { state: <last record.state>, .. }) ──→ PageRecord ──→ ...
//! ```
//!
//! The `state` field of the record is opaque to this layer and is echoed back
//! by the host on the next event. Pages own its shape.

mod event;
mod transition;

pub use event::{Event, EventKind};
pub use transition::{Handler, Reduction, TransitionTable};

use serde::Serialize;
use serde_json::{Map, Value};

use crate::coerce::trimmed;
use crate::component::Component;

/// Application-defined page state. Never inspected by the protocol.
pub type StateMap = Map<String, Value>;

/// Title used by [`Page::build`] when a page does not override it.
pub const DEFAULT_TITLE: &str = "插件页面";

/// Wire record returned by `build` and `on_event`.
///
/// Only [`to_page`] constructs one, so every record carries all five fields.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PageRecord {
    title: String,
    subtitle: String,
    components: Vec<Component>,
    state: StateMap,
    message: String,
}

impl PageRecord {
    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn subtitle(&self) -> &str {
        &self.subtitle
    }

    pub fn components(&self) -> &[Component] {
        &self.components
    }

    pub fn state(&self) -> &StateMap {
        &self.state
    }

    /// Notice for the host to show. Empty means nothing to show.
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn into_state(self) -> StateMap {
        self.state
    }

    /// Find a component by id.
    pub fn component(&self, id: &str) -> Option<&Component> {
        self.components.iter().find(|c| c.id() == id)
    }
}

/// Assemble a page record.
///
/// Strings are trimmed and a missing state becomes an empty map.
pub fn to_page(
    title: impl AsRef<str>,
    subtitle: impl AsRef<str>,
    components: impl IntoIterator<Item = Component>,
    state: Option<StateMap>,
    message: impl AsRef<str>,
) -> PageRecord {
    PageRecord {
        title: trimmed(title),
        subtitle: trimmed(subtitle),
        components: components.into_iter().collect(),
        state: state.unwrap_or_default(),
        message: trimmed(message),
    }
}

/// The `build` / `on_event` contract every page implements.
///
/// Both methods always return a valid record. Failures are reported through
/// [`PageRecord::message`], never by panicking or returning an error.
pub trait Page {
    /// First render of a session. Defaults to an empty page.
    fn build(&self, payload: &Value) -> PageRecord {
        let _ = payload;
        to_page(DEFAULT_TITLE, "", Vec::new(), None, "")
    }

    /// Re-render after an interaction.
    ///
    /// Defaults to a fresh `build` with the event's payload wrapped as
    /// `{"payload": ...}`.
    fn on_event(&self, event: &Event) -> PageRecord {
        let mut context = Map::new();
        context.insert("payload".into(), event.payload_or_empty());
        self.build(&Value::Object(context))
    }
}

use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

use super::StateMap;
use crate::coerce::{stringify_opt, trimmed};

/// Interaction tag carried in the event `type` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventKind {
    ButtonClick,
    InputSubmit,
    SwitchToggle,
    SelectChange,
    /// Any tag this crate does not know about. Kept so it can still be matched.
    Other(String),
}

impl EventKind {
    pub fn parse(s: &str) -> Self {
        match s.trim() {
            "button_click" => Self::ButtonClick,
            "input_submit" => Self::InputSubmit,
            "switch_toggle" => Self::SwitchToggle,
            "select_change" => Self::SelectChange,
            other => Self::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Self::ButtonClick => "button_click",
            Self::InputSubmit => "input_submit",
            Self::SwitchToggle => "switch_toggle",
            Self::SelectChange => "select_change",
            Self::Other(tag) => tag,
        }
    }
}

impl Serialize for EventKind {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A user interaction reported by the host.
///
/// Deserialization never fails on shape: every field is coerced from whatever
/// JSON the host sent. A non-object `state` is read as an empty map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(from = "Value")]
pub struct Event {
    #[serde(rename = "type")]
    pub kind: EventKind,
    #[serde(rename = "componentId")]
    pub component_id: String,
    pub value: Value,
    /// State returned by the previous render, echoed back untouched.
    pub state: StateMap,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payload: Option<Value>,
}

impl Event {
    pub fn new(kind: EventKind, component_id: impl AsRef<str>) -> Self {
        Self {
            kind,
            component_id: trimmed(component_id),
            value: Value::Null,
            state: StateMap::new(),
            payload: None,
        }
    }

    pub fn with_value(mut self, value: Value) -> Self {
        self.value = value;
        self
    }

    pub fn with_state(mut self, state: StateMap) -> Self {
        self.state = state;
        self
    }

    pub fn with_payload(mut self, payload: Value) -> Self {
        self.payload = Some(payload);
        self
    }

    /// Context payload for a fallback rebuild: the event payload, or `{}`.
    pub fn payload_or_empty(&self) -> Value {
        match &self.payload {
            Some(Value::Null) | None => Value::Object(Map::new()),
            Some(payload) => payload.clone(),
        }
    }
}

impl From<Value> for Event {
    fn from(raw: Value) -> Self {
        let Value::Object(mut fields) = raw else {
            return Event::new(EventKind::Other(String::new()), "");
        };

        let kind = EventKind::parse(&stringify_opt(fields.get("type")));
        let component_id = stringify_opt(fields.get("componentId"));
        let value = fields.remove("value").unwrap_or(Value::Null);
        let state = match fields.remove("state") {
            Some(Value::Object(state)) => state,
            _ => StateMap::new(),
        };
        let payload = fields.remove("payload");

        Event {
            kind,
            component_id: trimmed(component_id),
            value,
            state,
            payload,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parses_full_event() {
        let event: Event = serde_json::from_value(json!({
            "type": " switch_toggle ",
            "componentId": " feature_on ",
            "value": true,
            "state": {"feature_on": false},
            "payload": {"k": 1}
        }))
        .unwrap();

        assert_eq!(event.kind, EventKind::SwitchToggle);
        assert_eq!(event.component_id, "feature_on");
        assert_eq!(event.value, json!(true));
        assert_eq!(Value::Object(event.state.clone()), json!({"feature_on": false}));
        assert_eq!(event.payload, Some(json!({"k": 1})));
    }

    #[test]
    fn malformed_fields_are_coerced() {
        let event: Event = serde_json::from_value(json!({
            "type": null,
            "state": [1, 2, 3]
        }))
        .unwrap();

        assert_eq!(event.kind, EventKind::Other(String::new()));
        assert_eq!(event.component_id, "");
        assert_eq!(event.value, Value::Null);
        assert!(event.state.is_empty());
        assert!(event.payload.is_none());
    }

    #[test]
    fn non_object_event_is_empty() {
        let event: Event = serde_json::from_value(json!("nonsense")).unwrap();
        assert!(event.state.is_empty());
        assert_eq!(event.payload_or_empty(), json!({}));
    }

    #[test]
    fn unknown_kind_round_trips_its_tag() {
        assert_eq!(EventKind::parse("drag").as_str(), "drag");
    }
}

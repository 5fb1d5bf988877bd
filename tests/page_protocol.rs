use plugin_page::component::{Button, Component};
use plugin_page::page::{to_page, Event, EventKind, Page, PageRecord, DEFAULT_TITLE};
use serde_json::{json, Value};

/// Page relying entirely on the default contract.
struct BarePage;

impl Page for BarePage {}

/// Page that reports the payload it was built with.
struct EchoPage;

impl Page for EchoPage {
    fn build(&self, payload: &Value) -> PageRecord {
        let components: Vec<Component> = vec![Button::new("b", "B").into()];
        to_page("Echo", "", components, None, payload.to_string())
    }
}

#[test]
fn default_build_is_an_empty_page() {
    let record = serde_json::to_value(BarePage.build(&json!({}))).unwrap();
    assert_eq!(
        record,
        json!({
            "title": DEFAULT_TITLE,
            "subtitle": "",
            "components": [],
            "state": {},
            "message": ""
        })
    );
}

#[test]
fn default_on_event_rebuilds_with_payload() {
    let event = Event::new(EventKind::ButtonClick, "b").with_payload(json!({"k": "v"}));
    let record = EchoPage.on_event(&event);
    assert_eq!(record.message(), r#"{"payload":{"k":"v"}}"#);
}

#[test]
fn default_on_event_without_payload_uses_empty_object() {
    let event = Event::new(EventKind::ButtonClick, "b");
    let record = EchoPage.on_event(&event);
    assert_eq!(record.message(), r#"{"payload":{}}"#);
}

#[test]
fn page_record_always_has_five_fields() {
    let record = serde_json::to_value(to_page("", "", Vec::new(), None, "")).unwrap();
    let mut keys: Vec<&str> = record
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    keys.sort();
    assert_eq!(keys, ["components", "message", "state", "subtitle", "title"]);
}

#[test]
fn components_are_serialized_in_order() {
    let components: Vec<Component> = vec![Button::new("a", "A").into(), Button::new("b", "B").into()];
    let record = serde_json::to_value(to_page("T", "", components, None, "")).unwrap();
    assert_eq!(record["components"][0]["id"], json!("a"));
    assert_eq!(record["components"][1]["id"], json!("b"));
}

#[test]
fn event_deserializes_from_host_json() {
    let event: Event = serde_json::from_value(json!({
        "type": "select_change",
        "componentId": "tone",
        "value": "formal",
        "state": {"tone": "neutral"}
    }))
    .unwrap();

    assert_eq!(event.kind, EventKind::SelectChange);
    assert_eq!(event.component_id, "tone");
    assert_eq!(event.value, json!("formal"));
    assert_eq!(event.state["tone"], json!("neutral"));
}

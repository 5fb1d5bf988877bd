mod common;

use common::state_of;
use plugin_page::page::{Event, EventKind, Page};
use plugin_page::sample::{SamplePage, MSG_SAVED, MSG_SAVE_FAILED_PREFIX};
use plugin_page::storage::{JsonFileStore, StateStore, StoreError};
use serde_json::json;
use tempfile::TempDir;

#[test]
fn save_then_load_round_trips_document() {
    let temp_dir = TempDir::new().unwrap();
    let store = JsonFileStore::new(temp_dir.path().join("nested").join("config.json"));

    let state = state_of(json!({"input_text": "你好", "feature_on": true, "tone": "formal"}));
    store.save(&state).unwrap();

    assert_eq!(store.load(), Some(json!(state)));
}

#[test]
fn saved_file_is_pretty_and_keeps_unicode() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    let store = JsonFileStore::new(&path);

    store.save(&state_of(json!({"input_text": "喵"}))).unwrap();

    let content = std::fs::read_to_string(&path).unwrap();
    assert!(content.contains("喵"));
    assert!(content.contains("\n  \"input_text\""));
}

#[test]
fn malformed_file_loads_as_none() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, "{ not json").unwrap();

    let store = JsonFileStore::new(&path);
    assert!(matches!(store.read(), Err(StoreError::ParseError { .. })));
    assert!(store.load().is_none());
}

#[test]
fn page_over_malformed_file_builds_defaults() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    std::fs::write(&path, "[]").unwrap();

    let page = SamplePage::new(JsonFileStore::new(&path));
    let record = page.build(&json!({}));
    assert_eq!(
        record.state(),
        &state_of(json!({"input_text": "", "feature_on": false, "tone": "neutral"}))
    );
}

#[test]
fn page_save_writes_file() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("config.json");
    let page = SamplePage::new(JsonFileStore::new(&path));

    let state = state_of(json!({"input_text": "x", "feature_on": true, "tone": "friendly"}));
    let record = page.on_event(
        &Event::new(EventKind::ButtonClick, "save_config").with_state(state.clone()),
    );

    assert_eq!(record.message(), MSG_SAVED);
    let on_disk: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(on_disk, json!(state));
}

#[test]
fn page_save_into_directory_reports_failure() {
    let temp_dir = TempDir::new().unwrap();
    // The target path is an existing directory, so opening it for writing fails.
    let page = SamplePage::new(JsonFileStore::new(temp_dir.path()));

    let state = state_of(json!({"input_text": "x", "feature_on": false, "tone": "neutral"}));
    let record = page.on_event(
        &Event::new(EventKind::ButtonClick, "save_config").with_state(state.clone()),
    );

    assert!(record.message().starts_with(MSG_SAVE_FAILED_PREFIX));
    assert_eq!(record.state(), &state);
}

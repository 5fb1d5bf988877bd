//! Shared test utilities and mock infrastructure.

#![allow(dead_code, unused_imports)]

pub mod memory_store;

pub use memory_store::MemoryStore;

use plugin_page::page::StateMap;
use serde_json::Value;

/// Build a state map from a `json!` object literal.
pub fn state_of(value: Value) -> StateMap {
    match value {
        Value::Object(map) => map,
        other => panic!("expected a JSON object, got {other}"),
    }
}

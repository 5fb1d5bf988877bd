//! In-memory state store for exercising pages without file I/O.

#![allow(dead_code)]

use parking_lot::Mutex;
use plugin_page::page::StateMap;
use plugin_page::storage::{StateStore, StoreError};
use serde_json::Value;

/// A `StateStore` backed by a mutex-guarded document.
#[derive(Default)]
pub struct MemoryStore {
    document: Mutex<Option<Value>>,
    fail_saves: Mutex<Option<String>>,
    saves: Mutex<Vec<StateMap>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `document` already persisted.
    pub fn with_document(document: Value) -> Self {
        let store = Self::default();
        *store.document.lock() = Some(document);
        store
    }

    /// Make every subsequent save fail with `reason`.
    pub fn fail_saves_with(&self, reason: &str) {
        *self.fail_saves.lock() = Some(reason.to_string());
    }

    pub fn document(&self) -> Option<Value> {
        self.document.lock().clone()
    }

    /// Every state successfully saved, oldest first.
    pub fn saves(&self) -> Vec<StateMap> {
        self.saves.lock().clone()
    }
}

impl StateStore for MemoryStore {
    fn load(&self) -> Option<Value> {
        self.document.lock().clone()
    }

    fn save(&self, state: &StateMap) -> Result<(), StoreError> {
        if let Some(reason) = self.fail_saves.lock().clone() {
            return Err(StoreError::Unavailable(reason));
        }
        *self.document.lock() = Some(Value::Object(state.clone()));
        self.saves.lock().push(state.clone());
        Ok(())
    }
}

//! Persistence port for page state.
//!
//! Pages never touch the filesystem directly; they are handed a
//! [`StateStore`] and only ask it to load or save a whole state document.

mod file;

pub use file::JsonFileStore;

use std::path::PathBuf;
use thiserror::Error;

use serde_json::Value;

use crate::page::StateMap;

/// Errors that can occur when reading or writing persisted state.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Failed to read state file '{path}': {source}")]
    ReadError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse state file '{path}': {source}")]
    ParseError {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to write state file '{path}': {source}")]
    WriteError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to lock state file '{path}': {source}")]
    LockError {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to serialize state: {0}")]
    SerializeError(#[source] serde_json::Error),

    #[error("State store unavailable: {0}")]
    Unavailable(String),
}

/// Load/save collaborator for a page's state document.
pub trait StateStore {
    /// Read the stored document.
    ///
    /// Never fails: missing or unreadable data is `None`, and the caller falls
    /// back to defaults.
    fn load(&self) -> Option<Value>;

    /// Replace the stored document with `state`.
    fn save(&self, state: &StateMap) -> Result<(), StoreError>;
}

impl<T: StateStore + ?Sized> StateStore for &T {
    fn load(&self) -> Option<Value> {
        (**self).load()
    }

    fn save(&self, state: &StateMap) -> Result<(), StoreError> {
        (**self).save(state)
    }
}

use std::fs::{self, File, OpenOptions};
use std::io::{BufReader, Seek, SeekFrom, Write};
use std::path::{Path, PathBuf};

use fs2::FileExt;
use serde_json::Value;

use super::{StateStore, StoreError};
use crate::page::StateMap;

/// State stored as a pretty-printed JSON document at a fixed path.
///
/// Each call opens the file, holds an advisory lock for the duration of the
/// read or write, and closes it again. Nothing is kept open between calls.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Read and parse the document. A missing file is `Ok(None)`.
    pub fn read(&self) -> Result<Option<Value>, StoreError> {
        if !self.path.is_file() {
            return Ok(None);
        }

        let file = File::open(&self.path).map_err(|e| StoreError::ReadError {
            path: self.path.clone(),
            source: e,
        })?;
        FileExt::lock_shared(&file).map_err(|e| StoreError::LockError {
            path: self.path.clone(),
            source: e,
        })?;

        // Lock is released when `file` drops.
        let value = serde_json::from_reader(BufReader::new(&file)).map_err(|e| {
            StoreError::ParseError {
                path: self.path.clone(),
                source: e,
            }
        })?;
        Ok(Some(value))
    }

    /// Write the document, replacing any previous content.
    pub fn write(&self, state: &StateMap) -> Result<(), StoreError> {
        let mut content =
            serde_json::to_string_pretty(state).map_err(StoreError::SerializeError)?;
        content.push('\n');

        let write_err = |e| StoreError::WriteError {
            path: self.path.clone(),
            source: e,
        };

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&self.path)
            .map_err(write_err)?;
        FileExt::lock_exclusive(&file).map_err(|e| StoreError::LockError {
            path: self.path.clone(),
            source: e,
        })?;

        file.set_len(0).map_err(write_err)?;
        file.seek(SeekFrom::Start(0)).map_err(write_err)?;
        file.write_all(content.as_bytes()).map_err(write_err)?;
        file.flush().map_err(write_err)?;
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn load(&self) -> Option<Value> {
        match self.read() {
            Ok(value) => value,
            Err(e) => {
                tracing::warn!(error = %e, "Ignoring unreadable state file");
                None
            }
        }
    }

    fn save(&self, state: &StateMap) -> Result<(), StoreError> {
        self.write(state)?;
        tracing::info!(path = %self.path.display(), "State saved");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;
    use tempfile::TempDir;

    #[test]
    fn missing_file_reads_as_none() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("absent.json"));
        assert!(store.read().unwrap().is_none());
        assert!(store.load().is_none());
    }

    #[test]
    fn shorter_write_truncates_previous_content() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileStore::new(dir.path().join("state.json"));

        let mut long = StateMap::new();
        long.insert("input_text".into(), json!("a much longer value than the next one"));
        store.write(&long).unwrap();

        let mut short = StateMap::new();
        short.insert("input_text".into(), json!("x"));
        store.write(&short).unwrap();

        assert_eq!(store.read().unwrap(), Some(json!({"input_text": "x"})));
    }
}

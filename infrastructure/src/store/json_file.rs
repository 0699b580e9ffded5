//! JSON-file implementation of the state store port
//!
//! All keys live in one JSON object file under the platform data
//! directory. Reads tolerate a missing or corrupt file (treated as
//! empty); writes rewrite the whole file, which is fine at this size
//! (a theme string and at most ten history entries).

use council_application::ports::state_store::{StateStore, StoreError};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::warn;

/// File-backed string key/value store
///
/// Thread-safe via an internal mutex serializing read-modify-write
/// cycles; the host is effectively single-writer but the store does
/// not rely on that.
pub struct JsonFileStore {
    path: PathBuf,
    lock: Mutex<()>,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            lock: Mutex::new(()),
        }
    }

    /// Default store location under the platform data directory
    pub fn default_path() -> Option<PathBuf> {
        dirs::data_dir().map(|d| d.join("llm-council").join("state.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_all(&self) -> Map<String, Value> {
        let Ok(raw) = std::fs::read_to_string(&self.path) else {
            return Map::new();
        };

        match serde_json::from_str::<Value>(&raw) {
            Ok(Value::Object(map)) => map,
            Ok(_) | Err(_) => {
                warn!(
                    "State file {} is not a JSON object; starting empty",
                    self.path.display()
                );
                Map::new()
            }
        }
    }

    fn write_all(&self, map: &Map<String, Value>) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(map)?;
        std::fs::write(&self.path, raw)?;
        Ok(())
    }
}

impl StateStore for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        let _guard = self.lock.lock().ok()?;
        match self.read_all().get(key) {
            Some(Value::String(s)) => Some(s.clone()),
            // Values are stored as strings; anything else counts as absent
            Some(_) => None,
            None => None,
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StoreError> {
        let _guard = self.lock.lock().unwrap_or_else(|e| e.into_inner());
        let mut map = self.read_all();
        map.insert(key.to_string(), Value::String(value.to_string()));
        self.write_all(&map)
    }
}

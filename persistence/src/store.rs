//! FILENAME: persistence/src/store.rs
//! PURPOSE: Concrete settings backends.
//! CONTEXT: `MemoryStore` backs tests and embedded hosts; `JsonFileStore`
//! keeps the whole key-value record as one JSON object on disk for native
//! hosts. Both speak the same string-per-key protocol as browser local
//! storage, so the loading logic upstairs stays backend-agnostic.

use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

use crate::error::SettingsError;
use crate::SettingsBackend;

/// An in-memory key-value store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        MemoryStore::default()
    }
}

impl SettingsBackend for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// A file-backed store holding all keys in one JSON object.
///
/// Reads are forgiving: a missing or unreadable file behaves like an
/// empty store, since settings loading falls back to defaults anyway.
/// Writes rewrite the whole file and do surface IO errors.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        JsonFileStore {
            path: path.as_ref().to_path_buf(),
        }
    }

    fn read_entries(&self) -> HashMap<String, String> {
        let Ok(raw) = fs::read_to_string(&self.path) else {
            return HashMap::new();
        };
        serde_json::from_str(&raw).unwrap_or_default()
    }
}

impl SettingsBackend for JsonFileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.read_entries().get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut entries = self.read_entries();
        entries.insert(key.to_string(), value.to_string());
        let raw = serde_json::to_string_pretty(&entries)?;
        fs::write(&self.path, raw)?;
        Ok(())
    }
}

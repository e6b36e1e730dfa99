//! FILENAME: persistence/src/lib.rs
//! Settings persistence for the worksheet lookup helper.
//!
//! The search settings are one flat record stored under a versioned key
//! in a string key-value backend, mirroring the local-storage record the
//! task pane keeps in a browser host. Malformed or missing data is never
//! surfaced to the user; loading always produces a usable configuration
//! by falling back to defaults.

mod error;
mod store;

pub use error::SettingsError;
pub use store::{JsonFileStore, MemoryStore};

use engine::SearchConfig;

/// Versioned storage key. Bump the suffix when the record shape changes;
/// an old record under a new key simply falls back to defaults.
pub const SETTINGS_KEY: &str = "lookup.settings.v1";

/// A string key-value store, the shape of browser local storage.
pub trait SettingsBackend {
    /// Returns the raw value stored under `key`, if any.
    fn get(&self, key: &str) -> Option<String>;

    /// Stores `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> Result<(), SettingsError>;
}

/// Loads the settings record, substituting defaults for anything that is
/// missing or does not parse. This function cannot fail: a half-written
/// or hand-edited record must never block a search.
pub fn load_settings(backend: &dyn SettingsBackend) -> SearchConfig {
    let Some(raw) = backend.get(SETTINGS_KEY) else {
        return SearchConfig::default();
    };
    match serde_json::from_str::<SearchConfig>(&raw) {
        Ok(config) => config.sanitized(),
        Err(_) => SearchConfig::default(),
    }
}

/// Persists the settings record under the versioned key.
pub fn save_settings(
    backend: &mut dyn SettingsBackend,
    config: &SearchConfig,
) -> Result<(), SettingsError> {
    let raw = serde_json::to_string(config)?;
    backend.set(SETTINGS_KEY, &raw)
}

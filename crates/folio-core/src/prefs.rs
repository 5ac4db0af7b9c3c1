//! Durable key-value storage for the theme preference.
//!
//! Two entries are kept under fixed keys: the theme identifier and the
//! JSON-serialized dark-mode flag. Absent or malformed values fall back to
//! defaults instead of failing.

use std::collections::BTreeMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, warn};

use crate::error::PrefsError;
use crate::theme::ThemeId;

/// Key holding the selected theme identifier.
pub const THEME_KEY: &str = "portfolio-theme";

/// Key holding the dark-mode flag, serialized as JSON.
pub const DARK_MODE_KEY: &str = "portfolio-dark-mode";

/// A durable string key-value store.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError>;
    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError>;
}

impl<T: PreferenceStore + ?Sized> PreferenceStore for Box<T> {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        (**self).set(key, value)
    }
}

/// In-process store. Clones share the same entries, so a test can build a
/// second controller over the same data to simulate a reload.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<Mutex<BTreeMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }
}

impl PreferenceStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.entries.lock().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.entries.lock().insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Store backed by a single JSON object file, one per installation.
///
/// Entries are cached in memory and written through on every `set`
/// using a temp file and rename.
#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Opens the store at `path`. A missing file is an empty store; a
    /// malformed file is logged and treated as empty.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let entries = match fs::read_to_string(&path) {
            Ok(text) => match serde_json::from_str::<BTreeMap<String, String>>(&text) {
                Ok(entries) => entries,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "Discarding malformed preference file");
                    BTreeMap::new()
                }
            },
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => BTreeMap::new(),
            Err(e) => {
                warn!(path = %path.display(), error = %e, "Preference file unreadable");
                BTreeMap::new()
            }
        };
        debug!(path = %path.display(), entries = entries.len(), "Opened preference store");
        Self { path, entries }
    }

    /// `<config dir>/folio/preferences.json`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("folio").join("preferences.json"))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), PrefsError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(&self.entries)?;
        let tmp = self.path.with_extension("json.tmp");
        fs::write(&tmp, json)?;
        fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}

impl PreferenceStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, PrefsError> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), PrefsError> {
        self.entries.insert(key.to_string(), value.to_string());
        self.persist()
    }
}

/// The persisted theme choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemePreference {
    pub theme: ThemeId,
    pub dark_mode: bool,
}

impl Default for ThemePreference {
    fn default() -> Self {
        Self {
            theme: ThemeId::Dark,
            dark_mode: true,
        }
    }
}

impl ThemePreference {
    /// Reads the preference. Each entry falls back to its default
    /// independently when absent, unknown, malformed or unreadable.
    pub fn load<P: PreferenceStore + ?Sized>(store: &P) -> Self {
        let mut pref = Self::default();

        match store.get(THEME_KEY) {
            Ok(Some(raw)) => match ThemeId::from_key(&raw) {
                Some(theme) => pref.theme = theme,
                None => warn!(stored = %raw, "Ignoring unknown stored theme"),
            },
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Failed to read stored theme"),
        }

        match store.get(DARK_MODE_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<bool>(&raw) {
                Ok(dark) => pref.dark_mode = dark,
                Err(_) => warn!(stored = %raw, "Ignoring malformed dark-mode flag"),
            },
            Ok(None) => {}
            Err(e) => warn!(error = %e, "Failed to read stored dark-mode flag"),
        }

        pref
    }

    /// Writes both entries. Stops at the first failure.
    pub fn save<P: PreferenceStore + ?Sized>(&self, store: &mut P) -> Result<(), PrefsError> {
        store.set(THEME_KEY, self.theme.key())?;
        store.set(DARK_MODE_KEY, if self.dark_mode { "true" } else { "false" })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_defaults_from_empty_store() {
        let store = MemoryStore::new();
        assert_eq!(ThemePreference::load(&store), ThemePreference::default());
    }

    #[test]
    fn test_save_then_load() {
        let mut store = MemoryStore::new();
        let pref = ThemePreference {
            theme: ThemeId::Light,
            dark_mode: false,
        };
        pref.save(&mut store).unwrap();
        assert_eq!(store.get(DARK_MODE_KEY).unwrap().as_deref(), Some("false"));
        assert_eq!(ThemePreference::load(&store), pref);
    }

    #[test]
    fn test_unknown_and_malformed_values_fall_back() {
        let mut store = MemoryStore::new();
        store.set(THEME_KEY, "purple").unwrap();
        store.set(DARK_MODE_KEY, "yes please").unwrap();
        assert_eq!(ThemePreference::load(&store), ThemePreference::default());

        // A valid flag survives next to an invalid theme.
        store.set(DARK_MODE_KEY, "false").unwrap();
        let pref = ThemePreference::load(&store);
        assert_eq!(pref.theme, ThemeId::Dark);
        assert!(!pref.dark_mode);
    }

    #[test]
    fn test_file_store_persists_across_open() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("prefs.json");

        let mut store = FileStore::open(&path);
        assert!(store.get(THEME_KEY).unwrap().is_none());
        store.set(THEME_KEY, "light").unwrap();

        let reopened = FileStore::open(&path);
        assert_eq!(reopened.get(THEME_KEY).unwrap().as_deref(), Some("light"));
        assert!(!path.with_extension("json.tmp").exists());
    }

    #[test]
    fn test_file_store_discards_malformed_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("prefs.json");
        fs::write(&path, "{ not json").unwrap();

        let store = FileStore::open(&path);
        assert!(store.get(THEME_KEY).unwrap().is_none());
    }
}

//! Site configuration.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::contact::{DISMISS_DELAY, SIMULATED_SEND_DELAY};
use crate::error::ConfigError;
use crate::prefs::FileStore;

/// Runtime settings of the portfolio site.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Where the theme preference is stored. `None` uses the platform
    /// config directory.
    pub preferences_path: Option<PathBuf>,
    /// Latency of the simulated message transport.
    pub submit_delay_ms: u64,
    /// How long the success or error banner stays up.
    pub dismiss_delay_ms: u64,
    /// How long the loading screen is shown.
    pub loading_delay_ms: u64,
    /// Default log level (RUST_LOG still wins).
    pub log_level: String,
    pub window_title: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            preferences_path: None,
            submit_delay_ms: SIMULATED_SEND_DELAY.as_millis() as u64,
            dismiss_delay_ms: DISMISS_DELAY.as_millis() as u64,
            loading_delay_ms: 1200,
            log_level: "info".to_string(),
            window_title: "Richie Kosasih - Portfolio".to_string(),
        }
    }
}

impl SiteConfig {
    /// Loads a JSON config file. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(text) => {
                let config = serde_json::from_str(&text)?;
                debug!(path = %path.display(), "Loaded site config");
                Ok(config)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No site config, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(e.into()),
        }
    }

    /// The preference file, falling back to the platform default and then
    /// to the working directory.
    pub fn resolved_preferences_path(&self) -> PathBuf {
        self.preferences_path
            .clone()
            .or_else(FileStore::default_path)
            .unwrap_or_else(|| PathBuf::from("folio-preferences.json"))
    }

    pub fn submit_delay(&self) -> Duration {
        Duration::from_millis(self.submit_delay_ms)
    }

    pub fn dismiss_delay(&self) -> Duration {
        Duration::from_millis(self.dismiss_delay_ms)
    }

    pub fn loading_delay(&self) -> Duration {
        Duration::from_millis(self.loading_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.dismiss_delay(), Duration::from_secs(5));
        assert_eq!(config.submit_delay(), Duration::from_secs(2));
        assert_eq!(config.loading_delay(), Duration::from_millis(1200));
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let dir = TempDir::new().unwrap();
        let config = SiteConfig::load(&dir.path().join("absent.json")).unwrap();
        assert_eq!(config, SiteConfig::default());
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, r#"{"submit_delay_ms": 10, "preferences_path": "/tmp/p.json"}"#)
            .unwrap();
        let config = SiteConfig::load(&path).unwrap();
        assert_eq!(config.submit_delay_ms, 10);
        assert_eq!(config.dismiss_delay_ms, 5000);
        assert_eq!(config.resolved_preferences_path(), PathBuf::from("/tmp/p.json"));
    }

    #[test]
    fn test_malformed_file_is_an_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("site.json");
        std::fs::write(&path, "submit_delay_ms = 10").unwrap();
        assert!(matches!(SiteConfig::load(&path), Err(ConfigError::Parse(_))));
    }
}

//! Log output settings for the portfolio site.
//!
//! The site logs to the terminal it was launched from. `--log-dir` adds a
//! rolling JSONL file next to that, and `--dev` switches the terminal to
//! the pretty multi-line format with the folio crates at debug.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Filter used when neither the site configuration nor `RUST_LOG` names one.
pub const DEFAULT_FILTER: &str = "info";

/// Filter for `--dev`. Dioxus and the webview stay at info so theme and
/// contact events are not buried under render traces.
pub const DEV_FILTER: &str = "info,folio_core=debug,folio_site=debug,folio_logging=debug";

/// File name prefix of the JSONL logs written under `--log-dir`.
pub const LOG_FILE_PREFIX: &str = "folio-site";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// `EnvFilter` directives. `RUST_LOG` wins when it is set.
    pub filter: String,
    pub console: ConsoleConfig,
    /// Written in addition to the console when present
    pub file: Option<FileConfig>,
    pub jsonl: JsonlConfig,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self::site(DEFAULT_FILTER)
    }
}

impl LogConfig {
    /// Compact terminal output at the level from the site configuration.
    pub fn site(filter: impl Into<String>) -> Self {
        Self {
            filter: filter.into(),
            console: ConsoleConfig::default(),
            file: None,
            jsonl: JsonlConfig::default(),
        }
    }

    /// Pretty, coloured terminal output for working on the site itself.
    pub fn development() -> Self {
        Self {
            console: ConsoleConfig {
                enabled: true,
                format: ConsoleFormat::Pretty,
                ansi: true,
            },
            ..Self::site(DEV_FILTER)
        }
    }

    /// Keeps the current console settings and also writes daily JSONL files
    /// into `dir`.
    pub fn with_log_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.file = Some(FileConfig::daily(dir));
        self
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ConsoleConfig {
    pub enabled: bool,
    pub format: ConsoleFormat,
    /// Colour escapes; ignored by the JSON format
    pub ansi: bool,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            format: ConsoleFormat::Compact,
            ansi: false,
        }
    }
}

/// How events are rendered on the terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ConsoleFormat {
    /// One line per event
    #[default]
    Compact,
    /// Multi-line with span context
    Pretty,
    /// One JSON object per line, same shape as the file output
    Json,
}

/// Where the JSONL log files go
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FileConfig {
    pub directory: PathBuf,
    pub prefix: String,
    pub rotation: RotationStrategy,
}

impl FileConfig {
    /// Daily files named after the site binary.
    pub fn daily(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
            prefix: LOG_FILE_PREFIX.to_string(),
            rotation: RotationStrategy::Daily,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RotationStrategy {
    #[default]
    Daily,
    Hourly,
    /// A single `<prefix>.log`, truncated on start
    Never,
}

/// Shape of each JSON line
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct JsonlConfig {
    /// Event fields at the top level instead of under `fields`
    pub flatten_events: bool,
    pub include_spans: bool,
    /// Source file and line of the call site
    pub include_location: bool,
}

impl Default for JsonlConfig {
    fn default() -> Self {
        Self {
            flatten_events: true,
            include_spans: true,
            include_location: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_site_config_uses_given_level() {
        let config = LogConfig::site("warn");
        assert_eq!(config.filter, "warn");
        assert!(config.console.enabled);
        assert_eq!(config.console.format, ConsoleFormat::Compact);
        assert!(config.file.is_none());

        assert_eq!(LogConfig::default().filter, DEFAULT_FILTER);
    }

    #[test]
    fn test_development_raises_only_folio_crates() {
        let config = LogConfig::development();
        assert_eq!(config.console.format, ConsoleFormat::Pretty);
        assert!(config.console.ansi);
        assert!(config.filter.starts_with("info,"));
        assert!(config.filter.contains("folio_site=debug"));
        assert!(config.filter.contains("folio_core=debug"));
    }

    #[test]
    fn test_log_dir_keeps_console_settings() {
        let config = LogConfig::development().with_log_dir("/tmp/folio-logs");
        assert_eq!(config.console.format, ConsoleFormat::Pretty);
        let file = config.file.expect("log dir adds file output");
        assert_eq!(file.directory, PathBuf::from("/tmp/folio-logs"));
        assert_eq!(file.prefix, LOG_FILE_PREFIX);
        assert_eq!(file.rotation, RotationStrategy::Daily);
    }

    #[test]
    fn test_partial_config_fills_defaults() {
        let config: LogConfig =
            serde_json::from_str(r#"{"filter":"trace","console":{"format":"json"}}"#).unwrap();
        assert_eq!(config.filter, "trace");
        assert!(config.console.enabled);
        assert_eq!(config.console.format, ConsoleFormat::Json);
        assert!(config.jsonl.flatten_events);
        assert!(!config.jsonl.include_location);
    }

    #[test]
    fn test_rotation_serializes_lowercase() {
        let json = serde_json::to_string(&RotationStrategy::Hourly).unwrap();
        assert_eq!(json, "\"hourly\"");
    }
}

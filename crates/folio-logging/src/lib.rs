//! Console and JSONL file logging for the folio portfolio site
//!
//! ```ignore
//! use folio_logging::{FolioSubscriberBuilder, LogConfig};
//!
//! let _guard = FolioSubscriberBuilder::new()
//!     .with_config(LogConfig::site("info").with_log_dir("logs"))
//!     .try_init()?;
//! ```
//!
//! File output is written through a non-blocking appender. The returned
//! [`WorkerGuard`] must be held for as long as logs should be flushed.

pub mod config;

pub use config::{
    ConsoleConfig, ConsoleFormat, FileConfig, JsonlConfig, LogConfig, RotationStrategy,
    DEFAULT_FILTER, DEV_FILTER, LOG_FILE_PREFIX,
};

use std::fs::{self, File};
use std::io;

use thiserror::Error;
use tracing::Subscriber;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::layer::{Layer, SubscriberExt};
use tracing_subscriber::registry::LookupSpan;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Registry};

/// Errors raised while installing the global subscriber
#[derive(Debug, Error)]
pub enum LoggingError {
    /// The log directory or file could not be created
    #[error("failed to open log output: {0}")]
    FileOutput(#[from] io::Error),

    /// Another global subscriber is already installed
    #[error("a global tracing subscriber is already installed")]
    AlreadyInitialized,
}

type BoxedLayer<S> = Box<dyn Layer<S> + Send + Sync + 'static>;

/// Installs the site's global subscriber from a [`LogConfig`]
///
/// Starts from [`LogConfig::default`]: compact console output at info.
pub struct FolioSubscriberBuilder {
    config: LogConfig,
}

impl FolioSubscriberBuilder {
    /// Create a new subscriber builder with default configuration
    pub fn new() -> Self {
        Self {
            config: LogConfig::default(),
        }
    }

    /// Use a specific configuration
    pub fn with_config(mut self, config: LogConfig) -> Self {
        self.config = config;
        self
    }

    /// Replace the filter directives
    pub fn with_level(mut self, filter: impl Into<String>) -> Self {
        self.config.filter = filter.into();
        self
    }

    /// Enable or disable console output
    pub fn with_console(mut self, enabled: bool) -> Self {
        self.config.console.enabled = enabled;
        self
    }

    /// Configure file output
    pub fn with_file_output(mut self, config: FileConfig) -> Self {
        self.config.file = Some(config);
        self
    }

    /// Install the subscriber globally
    ///
    /// Returns the file writer's guard when file output is configured.
    pub fn try_init(self) -> Result<Option<WorkerGuard>, LoggingError> {
        let env_filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(&self.config.filter));

        let mut layers: Vec<BoxedLayer<Registry>> = Vec::new();
        let mut guard = None;

        if self.config.console.enabled {
            layers.push(console_layer(&self.config));
        }

        if let Some(file_config) = &self.config.file {
            let (writer, file_guard) = create_file_writer(file_config)?;
            guard = Some(file_guard);
            layers.push(jsonl_layer(&self.config.jsonl, writer));
        }

        Registry::default()
            .with(layers)
            .with(env_filter)
            .try_init()
            .map_err(|_| LoggingError::AlreadyInitialized)?;

        Ok(guard)
    }
}

impl Default for FolioSubscriberBuilder {
    fn default() -> Self {
        Self::new()
    }
}

fn console_layer<S>(config: &LogConfig) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    match config.console.format {
        ConsoleFormat::Compact => tracing_subscriber::fmt::layer()
            .compact()
            .with_ansi(config.console.ansi)
            .with_target(true)
            .boxed(),
        ConsoleFormat::Pretty => tracing_subscriber::fmt::layer()
            .pretty()
            .with_ansi(config.console.ansi)
            .boxed(),
        ConsoleFormat::Json => tracing_subscriber::fmt::layer()
            .json()
            .with_current_span(true)
            .with_span_list(config.jsonl.include_spans)
            .flatten_event(config.jsonl.flatten_events)
            .with_file(config.jsonl.include_location)
            .with_line_number(config.jsonl.include_location)
            .boxed(),
    }
}

fn jsonl_layer<S>(jsonl: &JsonlConfig, writer: NonBlocking) -> BoxedLayer<S>
where
    S: Subscriber + for<'a> LookupSpan<'a>,
{
    tracing_subscriber::fmt::layer()
        .json()
        .with_current_span(true)
        .with_span_list(jsonl.include_spans)
        .flatten_event(jsonl.flatten_events)
        .with_file(jsonl.include_location)
        .with_line_number(jsonl.include_location)
        .with_writer(writer)
        .boxed()
}

/// Opens the log file writer; truncates for `Never` rotation, appends for others.
fn create_file_writer(file_config: &FileConfig) -> Result<(NonBlocking, WorkerGuard), io::Error> {
    fs::create_dir_all(&file_config.directory)?;
    let rotation = match file_config.rotation {
        RotationStrategy::Never => {
            let file_path = log_file_path(file_config);
            let file = File::create(file_path)?;
            return Ok(tracing_appender::non_blocking(file));
        }
        RotationStrategy::Daily => Rotation::DAILY,
        RotationStrategy::Hourly => Rotation::HOURLY,
    };
    let appender = RollingFileAppender::new(rotation, &file_config.directory, &file_config.prefix);
    Ok(tracing_appender::non_blocking(appender))
}

/// Path of the single log file used by `RotationStrategy::Never`.
pub fn log_file_path(file_config: &FileConfig) -> std::path::PathBuf {
    file_config
        .directory
        .join(format!("{}.log", file_config.prefix))
}

//! Error types for folio-core

use thiserror::Error;

/// Errors from the durable preference store
#[derive(Debug, Error)]
pub enum PrefsError {
    /// I/O error while reading or writing the store
    #[error("I/O error: {0}")]
    Io(String),

    /// The store file could not be encoded or decoded
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// The store is not available on this platform
    #[error("Preference store unavailable: {0}")]
    Unavailable(String),
}

impl From<std::io::Error> for PrefsError {
    fn from(err: std::io::Error) -> Self {
        PrefsError::Io(err.to_string())
    }
}

impl From<serde_json::Error> for PrefsError {
    fn from(err: serde_json::Error) -> Self {
        PrefsError::Serialization(err.to_string())
    }
}

/// Errors found while loading the portfolio content
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ContentError {
    /// The content document is not valid JSON for the schema
    #[error("Content parse error: {0}")]
    Parse(String),

    /// A required text field is empty
    #[error("{kind} has an empty {field}")]
    EmptyField { kind: &'static str, field: &'static str },

    /// A list that must have at least one entry is empty
    #[error("{kind} has no {field}")]
    EmptyList { kind: &'static str, field: &'static str },

    /// Two records of the same kind share an id
    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    /// A percentage value is outside 0..=100
    #[error("{name} has level {level}, expected 0..=100")]
    LevelOutOfRange { name: String, level: u32 },

    /// A skills tab references a category that does not exist
    #[error("Unknown skill category: {category}")]
    UnknownCategory { category: String },
}

impl From<serde_json::Error> for ContentError {
    fn from(err: serde_json::Error) -> Self {
        ContentError::Parse(err.to_string())
    }
}

/// Errors from the message send collaborator
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum SendError {
    /// The transport failed before the message was accepted
    #[error("Transport error: {0}")]
    Transport(String),

    /// The receiving side refused the message
    #[error("Message rejected: {0}")]
    Rejected(String),
}

/// Errors loading the site configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The configuration file is not valid JSON
    #[error("Config parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

//! Core error types for timeai-core.
//!
//! The prompt pipeline itself never fails; these types cover the
//! construction-time checks on the catalog, the configuration file, and
//! the I/O done by front ends.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for timeai-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Key does not exist in the configuration tree
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Neither TIMEAI_HOME nor a home directory is available
    #[error("Cannot determine home directory for configuration")]
    NoHomeDir,
}

/// Validation errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    /// Time is not a 24-hour HH:MM value
    #[error("Invalid time '{value}': expected HH:MM (00-23:00-59)")]
    InvalidTime { value: String },

    /// Category slug not recognized
    #[error("Unknown category '{0}' (expected one of: housewife, employee, mechanic)")]
    UnknownCategory(String),

    /// A prompt was required but blank
    #[error("prompt is empty")]
    EmptyPrompt,
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

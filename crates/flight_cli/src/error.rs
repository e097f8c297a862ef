//! Error types for the flight CLI.

use thiserror::Error;

use crate::config::ConfigError;

/// CLI error type
#[derive(Debug, Error)]
pub enum CliError {
    /// Input file does not exist
    #[error("File not found: {0}")]
    FileNotFound(String),

    /// Command-line argument has an unsupported value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Order file is well-formed JSON but not a usable order
    #[error("Invalid order: {0}")]
    Input(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Create an order input error
    pub fn input(msg: impl Into<String>) -> Self {
        Self::Input(msg.into())
    }
}

/// Result alias used by every command
pub type Result<T> = std::result::Result<T, CliError>;

use thiserror::Error;

use title_sort_core::ConfigError;

/// Errors that can occur during CLI command execution.
#[derive(Debug, Error)]
pub(crate) enum CliError {
    /// I/O error
    #[error("{0}")]
    Io(#[from] std::io::Error),

    /// Settings file could not be read or written
    #[error("Config error: {0}")]
    Config(String),

    /// Settings were read but describe an unusable normalizer
    #[error("Invalid normalizer settings: {0}")]
    Normalizer(#[from] ConfigError),

    /// JSON output failed
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    pub(crate) fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}

//! CLI-specific error types
//!
//! All CLI errors are fatal: the process exits non-zero. Each variant
//! renders with a stable `COPSTAT_CLI_*` code prefix.

use thiserror::Error;

/// CLI result type
pub type CliResult<T> = Result<T, CliError>;

/// CLI errors
#[derive(Debug, Error)]
pub enum CliError {
    /// Configuration file unreadable, malformed, or invalid
    #[error("COPSTAT_CLI_CONFIG_ERROR: {0}")]
    Config(String),

    /// Dataset could not be loaded at startup
    #[error("COPSTAT_CLI_BOOT_FAILED: {0}")]
    Boot(String),

    /// stdout write failed
    #[error("COPSTAT_CLI_IO_ERROR: {0}")]
    Io(#[from] std::io::Error),

    /// JSON output could not be written
    #[error("COPSTAT_CLI_IO_ERROR: JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CliError {
    /// Config error
    pub fn config_error(msg: impl Into<String>) -> Self {
        CliError::Config(msg.into())
    }

    /// Boot failed
    pub fn boot_failed(msg: impl Into<String>) -> Self {
        CliError::Boot(msg.into())
    }
}

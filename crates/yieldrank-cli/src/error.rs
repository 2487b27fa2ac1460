//! CLI error types.

use thiserror::Error;
use yieldrank_analytics::AnalyticsError;

/// CLI error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Invalid date format.
    #[error("Invalid date format: {0}. Use YYYY-MM-DD.")]
    InvalidDate(String),

    /// Malformed bond description.
    #[error("Invalid bond '{input}': {reason}")]
    InvalidBond {
        /// The text that was rejected.
        input: String,
        /// What was wrong with it.
        reason: String,
    },

    /// Invalid argument value.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// Analytics failure (validation or convergence).
    #[error(transparent)]
    Analytics(#[from] AnalyticsError),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Input file could not be read or parsed.
    #[error("Cannot read {path}: {reason}")]
    InputFile {
        /// File path.
        path: String,
        /// Parse or IO failure.
        reason: String,
    },

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<yieldrank_core::CoreError> for CliError {
    fn from(err: yieldrank_core::CoreError) -> Self {
        match err {
            yieldrank_core::CoreError::InvalidDate { message } => CliError::InvalidDate(message),
            other => CliError::Analytics(other.into()),
        }
    }
}

/// CLI result type.
pub type CliResult<T> = Result<T, CliError>;

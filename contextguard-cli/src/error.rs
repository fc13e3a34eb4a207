//! Error handling for the CLI application

use std::fmt;

/// Custom error type for CLI-specific errors
#[derive(Debug)]
pub enum CliError {
    /// File not found or inaccessible
    FileNotFound(String),
    /// Configuration error
    ConfigError(String),
    /// The requested phrase does not occur in the input
    SelectionNotFound(String),
    /// The adaptation reported a failure
    AdaptationFailed(String),
    /// The adapted text could not be written back into the document
    ReplaceFailed(String),
}

impl fmt::Display for CliError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CliError::FileNotFound(path) => write!(f, "File not found: {path}"),
            CliError::ConfigError(msg) => write!(f, "Configuration error: {msg}"),
            CliError::SelectionNotFound(phrase) => {
                write!(f, "Selection not found in input: {phrase}")
            }
            CliError::AdaptationFailed(msg) => write!(f, "Adaptation failed: {msg}"),
            CliError::ReplaceFailed(msg) => write!(f, "Replace failed: {msg}"),
        }
    }
}

impl std::error::Error for CliError {}

/// Result type alias for CLI operations
pub type CliResult<T> = Result<T, anyhow::Error>;

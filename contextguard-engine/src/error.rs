//! Layered error types
//!
//! [`ErrorKind`] is the small, serialisable set callers see in an
//! [`AdaptationResult`](crate::AdaptationResult). The richer enums below it
//! describe what went wrong inside one adapter, one preference store, or
//! while constructing the engine.

use contextguard_core::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

use crate::request::Operation;

/// User-facing failure categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    /// Empty or oversized input
    InvalidInput,
    /// The locator found nothing to process
    NoContentFound,
    /// A captured selection could not be replaced
    ReplaceFailed,
    /// An adaptation algorithm failed unexpectedly
    ProcessingFailed,
    /// No native capability for the operation
    CapabilityUnavailable,
}

impl ErrorKind {
    /// Short message suitable for display
    pub fn message(&self) -> &'static str {
        match self {
            ErrorKind::InvalidInput => "Nothing to process: the text is empty or too long",
            ErrorKind::NoContentFound => "Nothing to process: no content was found",
            ErrorKind::ReplaceFailed => "The change could not be applied to the document",
            ErrorKind::ProcessingFailed => "Processing failed unexpectedly",
            ErrorKind::CapabilityUnavailable => "No native capability is available",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.message())
    }
}

impl From<&CoreError> for ErrorKind {
    fn from(err: &CoreError) -> Self {
        match err {
            CoreError::InvalidInput { .. }
            | CoreError::InvalidLanguage { .. }
            | CoreError::UnknownOption { .. } => ErrorKind::InvalidInput,
            CoreError::NoContentFound => ErrorKind::NoContentFound,
            CoreError::ReplaceFailed { .. } => ErrorKind::ReplaceFailed,
            CoreError::Configuration(_) => ErrorKind::ProcessingFailed,
        }
    }
}

/// Failure of a single adapter invocation
#[derive(Error, Debug)]
pub enum AdapterError {
    /// The adapter cannot run this operation
    #[error("capability unavailable for {operation}")]
    CapabilityUnavailable {
        /// The requested operation
        operation: Operation,
    },

    /// A native capability reported an error
    #[error("native adapter failed: {0}")]
    Native(String),

    /// A core algorithm returned an error
    #[error("core algorithm error: {0}")]
    Core(#[from] CoreError),

    /// An adapter panicked while running a task
    #[error("adapter panicked: {0}")]
    Panicked(String),
}

impl AdapterError {
    /// User-facing kind for this failure
    pub fn kind(&self) -> ErrorKind {
        match self {
            AdapterError::CapabilityUnavailable { .. } => ErrorKind::CapabilityUnavailable,
            AdapterError::Core(err) => ErrorKind::from(err),
            AdapterError::Native(_) | AdapterError::Panicked(_) => ErrorKind::ProcessingFailed,
        }
    }
}

/// Preference store failures
#[derive(Error, Debug)]
pub enum StoreError {
    /// Reading or writing the backing file failed
    #[error("preference store I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// The backing file is not valid TOML
    #[error("could not parse preferences: {0}")]
    Parse(#[from] toml::de::Error),

    /// Preferences could not be written as TOML
    #[error("could not serialize preferences: {0}")]
    Serialize(#[from] toml::ser::Error),
}

/// Errors surfaced while building or configuring the engine
#[derive(Error, Debug)]
pub enum EngineError {
    /// Core configuration or input error
    #[error("core error: {0}")]
    Core(#[from] CoreError),

    /// Invalid engine configuration
    #[error("invalid configuration: {0}")]
    ConfigError(String),

    /// Preference store error
    #[error("preference store error: {0}")]
    Store(#[from] StoreError),
}

/// Result type for engine operations
pub type Result<T> = std::result::Result<T, EngineError>;

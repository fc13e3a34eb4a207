//! Error types for content location and text adaptation

use thiserror::Error;

/// Errors raised by the core algorithms and the document model
#[derive(Debug, Error)]
pub enum CoreError {
    /// Empty or oversized input text
    #[error("invalid input: {reason}")]
    InvalidInput {
        /// Why the input was rejected
        reason: String,
    },

    /// Every content location strategy came up empty
    #[error("no content found in document")]
    NoContentFound,

    /// A captured selection could no longer be replaced
    #[error("selection replace failed: {reason}")]
    ReplaceFailed {
        /// Why the anchor was rejected
        reason: String,
    },

    /// Language code is not a two-letter ISO-639-1 code
    #[error("invalid language code '{code}'")]
    InvalidLanguage {
        /// The rejected code
        code: String,
    },

    /// Unknown value for an enumerated option (tone, reading level, ...)
    #[error("unknown {kind} '{value}'")]
    UnknownOption {
        /// Option name
        kind: &'static str,
        /// The rejected value
        value: String,
    },

    /// Invalid locator configuration
    #[error("invalid configuration: {0}")]
    Configuration(String),
}

impl CoreError {
    pub(crate) fn replace_failed(reason: impl Into<String>) -> Self {
        CoreError::ReplaceFailed {
            reason: reason.into(),
        }
    }
}

/// Result type for core operations
pub type Result<T> = std::result::Result<T, CoreError>;

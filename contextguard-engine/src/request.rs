//! Request and result shapes

use crate::error::ErrorKind;
use crate::preferences::PreferenceOverrides;
use contextguard_core::adapt::ImageContext;
use contextguard_core::{CoreError, SummaryOptions};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Adaptation operation
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Operation {
    /// Extractive summary
    Summarize,
    /// Tone rewrite
    Rewrite,
    /// Mechanical proofreading
    Proofread,
    /// Translation
    Translate,
    /// Image alternative text
    GenerateAlt,
}

impl Operation {
    /// All operations in display order
    pub const ALL: [Operation; 5] = [
        Operation::Summarize,
        Operation::Rewrite,
        Operation::Proofread,
        Operation::Translate,
        Operation::GenerateAlt,
    ];

    /// Wire name
    pub fn as_str(&self) -> &'static str {
        match self {
            Operation::Summarize => "summarize",
            Operation::Rewrite => "rewrite",
            Operation::Proofread => "proofread",
            Operation::Translate => "translate",
            Operation::GenerateAlt => "generate-alt",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Operation {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Operation::ALL
            .into_iter()
            .find(|op| op.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownOption {
                kind: "operation",
                value: s.to_string(),
            })
    }
}

/// One adaptation request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdaptationRequest {
    /// What to do
    pub operation: Operation,
    /// Input text; for [`Operation::GenerateAlt`] the optional surrounding context
    pub text: String,
    /// Preference overrides for this call
    #[serde(default)]
    pub overrides: PreferenceOverrides,
    /// Summary style, forwarded to native summarizers
    #[serde(default)]
    pub summary: SummaryOptions,
    /// Image to describe, required by [`Operation::GenerateAlt`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<ImageContext>,
}

impl AdaptationRequest {
    /// Create a request with no overrides
    pub fn new(operation: Operation, text: impl Into<String>) -> Self {
        Self {
            operation,
            text: text.into(),
            overrides: PreferenceOverrides::default(),
            summary: SummaryOptions::default(),
            image: None,
        }
    }

    /// Alt-text request for an image
    pub fn generate_alt(image: ImageContext) -> Self {
        Self {
            text: image.context.clone(),
            image: Some(image),
            ..Self::new(Operation::GenerateAlt, "")
        }
    }

    /// Set preference overrides
    pub fn with_overrides(mut self, overrides: PreferenceOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Set summary options
    pub fn with_summary(mut self, summary: SummaryOptions) -> Self {
        self.summary = summary;
        self
    }
}

/// Which implementation produced a result
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Method {
    /// A native adaptation capability
    Native,
    /// The local deterministic algorithms
    Fallback,
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Method::Native => "native",
            Method::Fallback => "fallback",
        })
    }
}

/// Uniform result of an adaptation
///
/// A successful result always carries a value and never an error; a failed
/// one carries an error and never a value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AdaptationResult {
    success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    value: Option<String>,
    method: Method,
    #[serde(skip_serializing_if = "Option::is_none")]
    error: Option<ErrorKind>,
}

impl AdaptationResult {
    /// A successful result
    pub fn completed(value: impl Into<String>, method: Method) -> Self {
        Self {
            success: true,
            value: Some(value.into()),
            method,
            error: None,
        }
    }

    /// A failed result
    pub fn failed(error: ErrorKind, method: Method) -> Self {
        Self {
            success: false,
            value: None,
            method,
            error: Some(error),
        }
    }

    /// Whether the operation succeeded
    pub fn success(&self) -> bool {
        self.success
    }

    /// The produced text, on success
    pub fn value(&self) -> Option<&str> {
        self.value.as_deref()
    }

    /// Which implementation ran
    pub fn method(&self) -> Method {
        self.method
    }

    /// The failure kind, on failure
    pub fn error(&self) -> Option<ErrorKind> {
        self.error
    }

    /// Take the produced text
    pub fn into_value(self) -> Option<String> {
        self.value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operation_names() {
        assert_eq!("generate-alt".parse::<Operation>().unwrap(), Operation::GenerateAlt);
        assert_eq!(" Summarize ".parse::<Operation>().unwrap(), Operation::Summarize);
        assert!("explain".parse::<Operation>().is_err());
        assert_eq!(Operation::GenerateAlt.to_string(), "generate-alt");
    }

    #[test]
    fn test_result_exclusivity() {
        let ok = AdaptationResult::completed("done", Method::Fallback);
        assert!(ok.success());
        assert_eq!(ok.value(), Some("done"));
        assert_eq!(ok.error(), None);

        let failed = AdaptationResult::failed(ErrorKind::InvalidInput, Method::Fallback);
        assert!(!failed.success());
        assert_eq!(failed.value(), None);
        assert_eq!(failed.error(), Some(ErrorKind::InvalidInput));
    }

    #[test]
    fn test_result_json_shape() {
        let ok = AdaptationResult::completed("hi", Method::Native);
        assert_eq!(
            serde_json::to_string(&ok).unwrap(),
            r#"{"success":true,"value":"hi","method":"native"}"#
        );
        let failed = AdaptationResult::failed(ErrorKind::ProcessingFailed, Method::Fallback);
        assert_eq!(
            serde_json::to_string(&failed).unwrap(),
            r#"{"success":false,"method":"fallback","error":"processing_failed"}"#
        );
    }

    #[test]
    fn test_generate_alt_request_uses_context_as_text() {
        let image = ImageContext::new("a.png").with_context("A chart");
        let request = AdaptationRequest::generate_alt(image);
        assert_eq!(request.operation, Operation::GenerateAlt);
        assert_eq!(request.text, "A chart");
        assert!(request.image.is_some());
    }
}

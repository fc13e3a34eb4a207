//! Content locator configuration

use crate::error::CoreError;
use serde::{Deserialize, Serialize};

/// Default configuration constants
pub mod defaults {
    /// Maximum characters returned by any extraction
    pub const MAX_CHARS: usize = 10_000;

    /// Cleaned length an article/main region must exceed
    pub const REGION_MIN_CHARS: usize = 100;

    /// Cleaned length the largest candidate block must exceed
    pub const BLOCK_MIN_CHARS: usize = 50;

    /// Prefix of the document text used as a last resort
    pub const BODY_FALLBACK_CHARS: usize = 1_000;

    /// Placeholder text when nothing can be extracted
    pub const NO_CONTENT_MESSAGE: &str = "No content found on this page.";
}

/// Thresholds used by the content locator
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LocatorConfig {
    /// Maximum characters in any extraction
    pub max_chars: usize,
    /// Minimum cleaned length (exclusive) for article and main regions
    pub region_min_chars: usize,
    /// Minimum cleaned length (exclusive) for the largest block
    pub block_min_chars: usize,
    /// Characters of document text used by the body fallback
    pub body_fallback_chars: usize,
    /// Sentinel text returned when nothing is found
    pub no_content_message: String,
}

impl Default for LocatorConfig {
    fn default() -> Self {
        Self {
            max_chars: defaults::MAX_CHARS,
            region_min_chars: defaults::REGION_MIN_CHARS,
            block_min_chars: defaults::BLOCK_MIN_CHARS,
            body_fallback_chars: defaults::BODY_FALLBACK_CHARS,
            no_content_message: defaults::NO_CONTENT_MESSAGE.to_string(),
        }
    }
}

impl LocatorConfig {
    /// Create a configuration builder
    pub fn builder() -> LocatorConfigBuilder {
        LocatorConfigBuilder::default()
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<(), CoreError> {
        if self.max_chars == 0 {
            return Err(CoreError::Configuration(
                "max_chars must be greater than 0".into(),
            ));
        }

        if self.body_fallback_chars == 0 {
            return Err(CoreError::Configuration(
                "body_fallback_chars must be greater than 0".into(),
            ));
        }

        if self.body_fallback_chars > self.max_chars {
            return Err(CoreError::Configuration(format!(
                "body_fallback_chars ({}) must not exceed max_chars ({})",
                self.body_fallback_chars, self.max_chars
            )));
        }

        if self.no_content_message.chars().count() > self.max_chars {
            return Err(CoreError::Configuration(
                "no_content_message must fit within max_chars".into(),
            ));
        }

        Ok(())
    }
}

/// Fluent builder for [`LocatorConfig`]
#[derive(Debug, Default)]
pub struct LocatorConfigBuilder {
    max_chars: Option<usize>,
    region_min_chars: Option<usize>,
    block_min_chars: Option<usize>,
    body_fallback_chars: Option<usize>,
    no_content_message: Option<String>,
}

impl LocatorConfigBuilder {
    /// Create a new builder
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the extraction clamp
    pub fn max_chars(mut self, chars: usize) -> Self {
        self.max_chars = Some(chars);
        self
    }

    /// Set the article/main threshold
    pub fn region_min_chars(mut self, chars: usize) -> Self {
        self.region_min_chars = Some(chars);
        self
    }

    /// Set the largest-block threshold
    pub fn block_min_chars(mut self, chars: usize) -> Self {
        self.block_min_chars = Some(chars);
        self
    }

    /// Set the body fallback prefix length
    pub fn body_fallback_chars(mut self, chars: usize) -> Self {
        self.body_fallback_chars = Some(chars);
        self
    }

    /// Set the sentinel returned when nothing is found
    pub fn no_content_message(mut self, message: impl Into<String>) -> Self {
        self.no_content_message = Some(message.into());
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<LocatorConfig, CoreError> {
        let mut config = LocatorConfig::default();

        if let Some(chars) = self.max_chars {
            config.max_chars = chars;
        }
        if let Some(chars) = self.region_min_chars {
            config.region_min_chars = chars;
        }
        if let Some(chars) = self.block_min_chars {
            config.block_min_chars = chars;
        }
        if let Some(chars) = self.body_fallback_chars {
            config.body_fallback_chars = chars;
        }
        if let Some(message) = self.no_content_message {
            config.no_content_message = message;
        }

        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = LocatorConfig::default();
        assert_eq!(config.max_chars, 10_000);
        assert_eq!(config.region_min_chars, 100);
        assert_eq!(config.block_min_chars, 50);
        assert_eq!(config.body_fallback_chars, 1_000);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_builder_overrides() {
        let config = LocatorConfig::builder()
            .max_chars(500)
            .body_fallback_chars(200)
            .no_content_message("nothing here")
            .build()
            .unwrap();

        assert_eq!(config.max_chars, 500);
        assert_eq!(config.body_fallback_chars, 200);
        assert_eq!(config.no_content_message, "nothing here");
        assert_eq!(config.region_min_chars, defaults::REGION_MIN_CHARS);
    }

    #[test]
    fn test_builder_rejects_invalid_limits() {
        assert!(LocatorConfig::builder().max_chars(0).build().is_err());
        assert!(LocatorConfig::builder()
            .max_chars(100)
            .body_fallback_chars(200)
            .build()
            .is_err());
        assert!(LocatorConfig::builder()
            .max_chars(5)
            .body_fallback_chars(5)
            .build()
            .is_err());
    }

    #[test]
    fn test_partial_toml_style_deserialization() {
        let config: LocatorConfig = serde_json::from_str(r#"{"max_chars": 2000}"#).unwrap();
        assert_eq!(config.max_chars, 2000);
        assert_eq!(config.block_min_chars, defaults::BLOCK_MIN_CHARS);
    }
}

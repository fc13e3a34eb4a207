//! Configuration types for the engine

use crate::error::{EngineError, Result};
use contextguard_core::LocatorConfig;
use serde::{Deserialize, Serialize};

/// Default engine limits
pub mod defaults {
    /// Longest input text accepted by [`AdaptationEngine::run`](crate::AdaptationEngine::run)
    pub const MAX_INPUT_CHARS: usize = 10_000;

    /// Whether a native adapter is tried before the fallback
    pub const PREFER_NATIVE: bool = true;
}

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Longest input text, in characters
    pub max_input_chars: usize,
    /// Try a native adapter first when one is present
    pub prefer_native: bool,
    /// Thresholds for content location
    pub locator: LocatorConfig,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            max_input_chars: defaults::MAX_INPUT_CHARS,
            prefer_native: defaults::PREFER_NATIVE,
            locator: LocatorConfig::default(),
        }
    }
}

impl EngineConfig {
    /// Create a configuration builder
    pub fn builder() -> EngineConfigBuilder {
        EngineConfigBuilder::default()
    }

    /// Configuration that never calls a native adapter
    pub fn offline() -> Self {
        Self {
            prefer_native: false,
            ..Self::default()
        }
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        if self.max_input_chars == 0 {
            return Err(EngineError::ConfigError(
                "max_input_chars must be greater than 0".into(),
            ));
        }
        self.locator.validate()?;
        Ok(())
    }
}

/// Fluent builder for [`EngineConfig`]
#[derive(Debug, Default)]
pub struct EngineConfigBuilder {
    max_input_chars: Option<usize>,
    prefer_native: Option<bool>,
    locator: Option<LocatorConfig>,
}

impl EngineConfigBuilder {
    /// Set the longest accepted input
    pub fn max_input_chars(mut self, chars: usize) -> Self {
        self.max_input_chars = Some(chars);
        self
    }

    /// Choose whether native adapters are tried first
    pub fn prefer_native(mut self, prefer: bool) -> Self {
        self.prefer_native = Some(prefer);
        self
    }

    /// Set locator thresholds
    pub fn locator(mut self, locator: LocatorConfig) -> Self {
        self.locator = Some(locator);
        self
    }

    /// Build and validate the configuration
    pub fn build(self) -> Result<EngineConfig> {
        let mut config = EngineConfig::default();

        if let Some(chars) = self.max_input_chars {
            config.max_input_chars = chars;
        }
        if let Some(prefer) = self.prefer_native {
            config.prefer_native = prefer;
        }
        if let Some(locator) = self.locator {
            config.locator = locator;
        }

        config.validate()?;
        Ok(config)
    }
}

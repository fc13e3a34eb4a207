//! Configuration module

use crate::error::CliError;
use anyhow::{Context, Result};
use contextguard_engine::{EngineConfig, Preferences};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// CLI configuration structure
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize, Default)]
pub struct CliConfig {
    /// Engine limits and locator thresholds
    #[serde(default)]
    pub engine: EngineConfig,

    /// Preferences used when no preference file is given
    #[serde(default)]
    pub preferences: Preferences,

    /// Output configuration
    #[serde(default)]
    pub output: OutputConfig,
}

/// Output-related configuration
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Default output format
    pub default_format: String,

    /// Pretty print JSON output
    pub pretty_json: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            default_format: "text".to_string(),
            pretty_json: true,
        }
    }
}

impl CliConfig {
    /// Read and validate a TOML configuration file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&contents)
    }

    /// Parse and validate TOML configuration text
    pub fn parse(contents: &str) -> Result<Self> {
        let config: CliConfig =
            toml::from_str(contents).map_err(|e| CliError::ConfigError(e.to_string()))?;
        config
            .engine
            .validate()
            .map_err(|e| CliError::ConfigError(e.to_string()))?;
        Ok(config)
    }

    /// The configuration as a commented TOML document
    pub fn to_toml(&self) -> Result<String> {
        let body = toml::to_string_pretty(self).context("Failed to serialize configuration")?;
        Ok(format!("# ContextGuard configuration\n\n{body}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use contextguard_core::Tone;

    #[test]
    fn test_empty_file_uses_defaults() {
        let config = CliConfig::parse("").unwrap();
        assert_eq!(config, CliConfig::default());
        assert_eq!(config.output.default_format, "text");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_sections_are_partial() {
        let config = CliConfig::parse(
            r#"
[engine]
max_input_chars = 500

[engine.locator]
block_min_chars = 20

[preferences]
tone = "formal"
targetLanguage = "de"

[output]
default_format = "json"
"#,
        )
        .unwrap();

        assert_eq!(config.engine.max_input_chars, 500);
        assert!(config.engine.prefer_native);
        assert_eq!(config.engine.locator.block_min_chars, 20);
        assert_eq!(config.engine.locator.region_min_chars, 100);
        assert_eq!(config.preferences.tone, Tone::Formal);
        assert_eq!(config.preferences.target_language.as_str(), "de");
        assert_eq!(config.output.default_format, "json");
        assert!(config.output.pretty_json);
    }

    #[test]
    fn test_invalid_values_are_config_errors() {
        let err = CliConfig::parse("[engine]\nmax_input_chars = 0\n").unwrap_err();
        assert!(err.to_string().starts_with("Configuration error:"));

        let err = CliConfig::parse("[preferences]\ntargetLanguage = \"french\"\n").unwrap_err();
        assert!(err.downcast_ref::<CliError>().is_some());
    }

    #[test]
    fn test_generated_config_parses_back() {
        let text = CliConfig::default().to_toml().unwrap();
        assert!(text.starts_with("# ContextGuard configuration"));
        assert_eq!(CliConfig::parse(&text).unwrap(), CliConfig::default());
    }
}

//! User preferences and per-request overrides

use contextguard_core::{LanguageCode, ReadingLevel, Tone};
use serde::{Deserialize, Serialize};

/// Store key for the tone
pub const TONE_KEY: &str = "tone";
/// Store key for the reading level
pub const READING_LEVEL_KEY: &str = "readingLevel";
/// Store key for the target language
pub const TARGET_LANGUAGE_KEY: &str = "targetLanguage";

/// Every preference key, in display order
pub const PREFERENCE_KEYS: [&str; 3] = [TONE_KEY, READING_LEVEL_KEY, TARGET_LANGUAGE_KEY];

/// Preferences applied to one request
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Preferences {
    /// Tone for rewriting
    pub tone: Tone,
    /// Reading level for native rewriting
    pub reading_level: ReadingLevel,
    /// Translation target
    pub target_language: LanguageCode,
}

impl Preferences {
    /// Apply overrides on top of these preferences; the caller wins
    pub fn merged(&self, overrides: &PreferenceOverrides) -> Preferences {
        Preferences {
            tone: overrides.tone.unwrap_or(self.tone),
            reading_level: overrides.reading_level.unwrap_or(self.reading_level),
            target_language: overrides
                .target_language
                .clone()
                .unwrap_or_else(|| self.target_language.clone()),
        }
    }
}

/// Per-call preference overrides
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct PreferenceOverrides {
    /// Override the tone
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tone: Option<Tone>,
    /// Override the reading level
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reading_level: Option<ReadingLevel>,
    /// Override the target language
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_language: Option<LanguageCode>,
}

impl PreferenceOverrides {
    /// Whether nothing is overridden
    pub fn is_empty(&self) -> bool {
        self.tone.is_none() && self.reading_level.is_none() && self.target_language.is_none()
    }

    /// Override the tone
    pub fn tone(mut self, tone: Tone) -> Self {
        self.tone = Some(tone);
        self
    }

    /// Override the reading level
    pub fn reading_level(mut self, level: ReadingLevel) -> Self {
        self.reading_level = Some(level);
        self
    }

    /// Override the target language
    pub fn target_language(mut self, language: LanguageCode) -> Self {
        self.target_language = Some(language);
        self
    }
}

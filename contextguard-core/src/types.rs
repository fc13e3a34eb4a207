//! Option types shared by the adaptation algorithms

use crate::error::CoreError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Requested tone for a rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tone {
    /// Leave the wording as it is
    #[default]
    Neutral,
    /// Expand contractions
    Formal,
    /// Contract common phrases
    Friendly,
    /// Same rules as friendly
    Casual,
    /// Shorter phrasing (native adapters only)
    Concise,
}

impl Tone {
    /// All tones in display order
    pub const ALL: [Tone; 5] = [
        Tone::Neutral,
        Tone::Formal,
        Tone::Friendly,
        Tone::Casual,
        Tone::Concise,
    ];

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            Tone::Neutral => "neutral",
            Tone::Formal => "formal",
            Tone::Friendly => "friendly",
            Tone::Casual => "casual",
            Tone::Concise => "concise",
        }
    }
}

impl fmt::Display for Tone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Tone {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tone::ALL
            .into_iter()
            .find(|tone| tone.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownOption {
                kind: "tone",
                value: s.to_string(),
            })
    }
}

/// Target reading level for a rewrite
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ReadingLevel {
    /// Short words, short sentences
    Basic,
    /// General audience
    #[default]
    Intermediate,
    /// Specialist audience
    Advanced,
}

impl ReadingLevel {
    /// All reading levels
    pub const ALL: [ReadingLevel; 3] = [
        ReadingLevel::Basic,
        ReadingLevel::Intermediate,
        ReadingLevel::Advanced,
    ];

    /// Lowercase name
    pub fn as_str(&self) -> &'static str {
        match self {
            ReadingLevel::Basic => "basic",
            ReadingLevel::Intermediate => "intermediate",
            ReadingLevel::Advanced => "advanced",
        }
    }
}

impl fmt::Display for ReadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ReadingLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ReadingLevel::ALL
            .into_iter()
            .find(|level| level.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| CoreError::UnknownOption {
                kind: "reading level",
                value: s.to_string(),
            })
    }
}

/// Two-letter ISO-639-1 language code, stored lowercase
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct LanguageCode(String);

impl LanguageCode {
    /// Parse and normalise a language code
    pub fn new(code: &str) -> Result<Self, CoreError> {
        let trimmed = code.trim();
        if trimmed.len() == 2 && trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
            Ok(Self(trimmed.to_ascii_lowercase()))
        } else {
            Err(CoreError::InvalidLanguage {
                code: code.to_string(),
            })
        }
    }

    /// The code as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// English name for well-known codes, the code itself otherwise
    pub fn name(&self) -> &str {
        language_name(&self.0)
    }
}

impl Default for LanguageCode {
    fn default() -> Self {
        Self("es".to_string())
    }
}

impl fmt::Display for LanguageCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for LanguageCode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

impl TryFrom<String> for LanguageCode {
    type Error = CoreError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(&value)
    }
}

impl From<LanguageCode> for String {
    fn from(code: LanguageCode) -> Self {
        code.0
    }
}

/// Languages with a known display name
pub const KNOWN_LANGUAGES: [(&str, &str); 10] = [
    ("es", "Spanish"),
    ("fr", "French"),
    ("de", "German"),
    ("it", "Italian"),
    ("pt", "Portuguese"),
    ("ja", "Japanese"),
    ("zh", "Chinese"),
    ("ko", "Korean"),
    ("ru", "Russian"),
    ("ar", "Arabic"),
];

/// Display name for a language code, falling back to the code
pub fn language_name(code: &str) -> &str {
    KNOWN_LANGUAGES
        .iter()
        .find(|(known, _)| *known == code)
        .map(|(_, name)| *name)
        .unwrap_or(code)
}

/// Style of summary requested from a native summarizer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SummaryKind {
    /// Bullet-style key points
    #[default]
    KeyPoints,
    /// Short overview
    Tldr,
    /// Hook for the reader
    Teaser,
    /// Single line
    Headline,
}

/// Requested summary length
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SummaryLength {
    /// Shortest output
    Short,
    /// Default length
    #[default]
    Medium,
    /// Longest output
    Long,
}

/// Summary options
///
/// The extractive fallback ignores both fields; its selection size is fixed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct SummaryOptions {
    /// Summary style
    #[serde(rename = "type", default)]
    pub kind: SummaryKind,
    /// Summary length
    #[serde(default)]
    pub length: SummaryLength,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tone_parsing() {
        assert_eq!("formal".parse::<Tone>().unwrap(), Tone::Formal);
        assert_eq!(" Casual ".parse::<Tone>().unwrap(), Tone::Casual);
        assert!("grumpy".parse::<Tone>().is_err());
        assert_eq!(Tone::default(), Tone::Neutral);
    }

    #[test]
    fn test_reading_level_parsing() {
        assert_eq!(
            "ADVANCED".parse::<ReadingLevel>().unwrap(),
            ReadingLevel::Advanced
        );
        assert_eq!(ReadingLevel::default(), ReadingLevel::Intermediate);
        assert!("expert".parse::<ReadingLevel>().is_err());
    }

    #[test]
    fn test_language_code_validation() {
        assert_eq!(LanguageCode::new("FR").unwrap().as_str(), "fr");
        assert!(LanguageCode::new("fra").is_err());
        assert!(LanguageCode::new("f1").is_err());
        assert!(LanguageCode::new("").is_err());
        assert_eq!(LanguageCode::default().as_str(), "es");
    }

    #[test]
    fn test_language_names() {
        assert_eq!(LanguageCode::new("fr").unwrap().name(), "French");
        assert_eq!(LanguageCode::new("nl").unwrap().name(), "nl");
    }

    #[test]
    fn test_serde_names() {
        let json = serde_json::to_string(&Tone::Friendly).unwrap();
        assert_eq!(json, "\"friendly\"");

        let options: SummaryOptions =
            serde_json::from_str(r#"{"type":"tldr","length":"short"}"#).unwrap();
        assert_eq!(options.kind, SummaryKind::Tldr);
        assert_eq!(options.length, SummaryLength::Short);

        let code: Result<LanguageCode, _> = serde_json::from_str("\"german\"");
        assert!(code.is_err());
    }
}

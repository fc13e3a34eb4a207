//! Text statistics, formality and style notes

use crate::normalize::{char_count, word_count};
use crate::sentence;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::sync::LazyLock;

/// Sentences longer than this get a style note
pub const LONG_SENTENCE_WORDS: usize = 30;

const FORMAL_MARKERS: &[&str] = &[
    "therefore",
    "consequently",
    "moreover",
    "furthermore",
    "thus",
    "hence",
    "however",
    "nevertheless",
    "accordingly",
    "aforementioned",
    "whereas",
    "regarding",
];

const INFORMAL_MARKERS: &[&str] = &[
    "yeah", "wanna", "gonna", "gotta", "kinda", "sorta", "cool", "hey", "okay", "ok", "stuff",
    "lol", "awesome",
];

static WORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[A-Za-z]+(?:['’][A-Za-z]+)?").expect("word pattern is valid"));

static PASSIVE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)\b(am|is|are|was|were|be|been|being)\s+\w+(ed|en|wn)\b")
        .expect("passive pattern is valid")
});

static PARAGRAPH_BREAK: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n\s*\n").expect("paragraph pattern is valid"));

/// Counts over a text
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStatistics {
    /// Whitespace-separated words
    pub word_count: usize,
    /// Sentences as split by the sentence splitter
    pub sentence_count: usize,
    /// Characters, not bytes
    pub character_count: usize,
    /// Blank-line separated blocks
    pub paragraph_count: usize,
    /// Mean words per sentence
    pub average_sentence_words: f64,
}

/// Overall register of a text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Formality {
    /// More formal connectives than informal markers
    Formal,
    /// More informal markers than formal connectives
    Informal,
    /// Balanced or no markers
    Neutral,
}

impl fmt::Display for Formality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Formality::Formal => "formal",
            Formality::Informal => "informal",
            Formality::Neutral => "neutral",
        })
    }
}

/// Result of [`analyze`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextAnalysis {
    /// Counts
    pub statistics: TextStatistics,
    /// Detected register
    pub formality: Formality,
    /// Style notes, one per finding
    pub suggestions: Vec<String>,
}

/// Compute counts for a text
pub fn statistics(text: &str) -> TextStatistics {
    let sentences = sentence::split(text);
    let words = word_count(text);
    let sentence_count = sentences.len();
    let paragraph_count = if text.trim().is_empty() {
        0
    } else {
        PARAGRAPH_BREAK
            .split(text)
            .filter(|block| !block.trim().is_empty())
            .count()
            .max(1)
    };

    TextStatistics {
        word_count: words,
        sentence_count,
        character_count: char_count(text),
        paragraph_count,
        average_sentence_words: if sentence_count == 0 {
            0.0
        } else {
            words as f64 / sentence_count as f64
        },
    }
}

/// Classify a text as formal, informal or neutral
pub fn formality(text: &str) -> Formality {
    let mut formal = 0usize;
    let mut informal = 0usize;

    for word in WORD.find_iter(text) {
        let lower = word.as_str().to_lowercase();
        if FORMAL_MARKERS.contains(&lower.as_str()) {
            formal += 1;
        } else if INFORMAL_MARKERS.contains(&lower.as_str()) || lower.contains(['\'', '’']) {
            informal += 1;
        }
    }

    match formal.cmp(&informal) {
        std::cmp::Ordering::Greater => Formality::Formal,
        std::cmp::Ordering::Less => Formality::Informal,
        std::cmp::Ordering::Equal => Formality::Neutral,
    }
}

/// Statistics, formality and style notes for a text
pub fn analyze(text: &str) -> TextAnalysis {
    let mut suggestions = Vec::new();

    let passive = PASSIVE.find_iter(text).count();
    if passive > 0 {
        suggestions.push(format!(
            "Found {passive} possible passive construction(s); consider active voice"
        ));
    }

    for sentence in sentence::split(text) {
        let words = sentence.word_count();
        if words > LONG_SENTENCE_WORDS {
            suggestions.push(format!(
                "Sentence {} has {words} words; consider splitting it",
                sentence.index + 1
            ));
        }
    }

    TextAnalysis {
        statistics: statistics(text),
        formality: formality(text),
        suggestions,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_statistics() {
        let stats = statistics("One two three. Four five!\n\nSix seven.");
        assert_eq!(stats.word_count, 7);
        assert_eq!(stats.sentence_count, 3);
        assert_eq!(stats.paragraph_count, 2);
        assert_eq!(stats.character_count, 37);
        assert!((stats.average_sentence_words - 7.0 / 3.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_paragraph_minimum() {
        assert_eq!(statistics("no breaks here").paragraph_count, 1);
        assert_eq!(statistics("   ").paragraph_count, 0);
    }

    #[test]
    fn test_formality() {
        assert_eq!(
            formality("The results were, however, inconclusive. Therefore we continue."),
            Formality::Formal
        );
        assert_eq!(
            formality("Yeah it's kinda cool stuff."),
            Formality::Informal
        );
        assert_eq!(formality("The cat sat on the mat."), Formality::Neutral);
    }

    #[test]
    fn test_passive_voice_note() {
        let analysis = analyze("The report was written by the team.");
        assert_eq!(analysis.suggestions.len(), 1);
        assert!(analysis.suggestions[0].contains("passive"));
    }

    #[test]
    fn test_long_sentence_note() {
        let text = format!("{}end.", "word ".repeat(35));
        let analysis = analyze(&text);
        assert!(analysis
            .suggestions
            .iter()
            .any(|s| s.starts_with("Sentence 1 has 36 words")));
    }

    #[test]
    fn test_clean_text_has_no_notes() {
        let analysis = analyze("We shipped the release today.");
        assert!(analysis.suggestions.is_empty());
        assert_eq!(analysis.formality, Formality::Neutral);
    }
}

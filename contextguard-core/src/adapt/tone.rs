//! Rule-based tone rewriting
//!
//! Each tone owns an ordered list of case-insensitive whole-word
//! substitutions. The rules are lossy: rewriting to formal and back to
//! friendly does not restore the original text.

use crate::types::Tone;
use regex::{NoExpand, Regex};
use std::sync::LazyLock;

/// A single whole-word substitution
#[derive(Debug)]
pub struct ToneRule {
    pattern: Regex,
    replacement: &'static str,
}

impl ToneRule {
    fn new(pattern: &str, replacement: &'static str) -> Self {
        Self {
            pattern: Regex::new(&format!(r"(?i)\b{pattern}\b")).expect("tone pattern is valid"),
            replacement,
        }
    }

    /// Apply the rule everywhere in `text`
    ///
    /// The replacement is inserted as written, whatever the case of the match.
    pub fn apply(&self, text: &str) -> String {
        self.pattern
            .replace_all(text, NoExpand(self.replacement))
            .into_owned()
    }
}

static FORMAL_RULES: LazyLock<Vec<ToneRule>> = LazyLock::new(|| {
    vec![
        ToneRule::new(r"don['’]t", "do not"),
        ToneRule::new(r"can['’]t", "cannot"),
        ToneRule::new(r"won['’]t", "will not"),
        ToneRule::new(r"it['’]s", "it is"),
        ToneRule::new(r"that['’]s", "that is"),
    ]
});

static FRIENDLY_RULES: LazyLock<Vec<ToneRule>> = LazyLock::new(|| {
    vec![
        ToneRule::new(r"do not", "don't"),
        ToneRule::new(r"cannot", "can't"),
        ToneRule::new(r"it is", "it's"),
    ]
});

/// Ordered substitution rules for a tone (empty for identity tones)
pub fn rules_for(tone: Tone) -> &'static [ToneRule] {
    match tone {
        Tone::Formal => &FORMAL_RULES,
        Tone::Friendly | Tone::Casual => &FRIENDLY_RULES,
        Tone::Neutral | Tone::Concise => &[],
    }
}

/// Rewrite text toward the requested tone
pub fn rewrite(text: &str, tone: Tone) -> String {
    rules_for(tone)
        .iter()
        .fold(text.to_string(), |acc, rule| rule.apply(&acc))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formal_expands_contractions() {
        assert_eq!(
            rewrite("I don't think that's right.", Tone::Formal),
            "I do not think that is right."
        );
        assert_eq!(
            rewrite("We can't and won't; it's done.", Tone::Formal),
            "We cannot and will not; it is done."
        );
    }

    #[test]
    fn test_replacement_is_literal() {
        assert_eq!(rewrite("Don't panic.", Tone::Formal), "do not panic.");
        assert_eq!(rewrite("DON'T panic.", Tone::Formal), "do not panic.");
        assert_eq!(rewrite("Do Not panic.", Tone::Friendly), "don't panic.");
    }

    #[test]
    fn test_typographic_apostrophe() {
        assert_eq!(rewrite("it’s late.", Tone::Formal), "it is late.");
    }

    #[test]
    fn test_friendly_and_casual_contract() {
        let text = "I do not know. Now it is fine, we cannot stay.";
        let expected = "I don't know. Now it's fine, we can't stay.";
        assert_eq!(rewrite(text, Tone::Friendly), expected);
        assert_eq!(rewrite(text, Tone::Casual), expected);
    }

    #[test]
    fn test_identity_tones() {
        let text = "I don't do not change.";
        assert_eq!(rewrite(text, Tone::Neutral), text);
        assert_eq!(rewrite(text, Tone::Concise), text);
    }

    #[test]
    fn test_whole_words_only() {
        assert_eq!(rewrite("admit is", Tone::Friendly), "admit is");
        assert_eq!(rewrite("redo nothing", Tone::Friendly), "redo nothing");
    }

    #[test]
    fn test_round_trip_is_lossy() {
        let text = "So that's what it's for.";
        let back = rewrite(&rewrite(text, Tone::Formal), Tone::Friendly);
        assert_eq!(back, "So that is what it's for.");
        assert_ne!(back, text);
    }
}

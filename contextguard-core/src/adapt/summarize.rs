//! Extractive summarization
//!
//! Sentences are scored by length and position, the best ones are selected,
//! and the selection is emitted in source order.

use crate::sentence::{self, Sentence};
use crate::types::SummaryOptions;

/// Weight of each word in a sentence
pub const WORD_WEIGHT: f64 = 0.5;

/// Weight of each position from the end of the text
pub const POSITION_WEIGHT: f64 = 0.3;

/// Share of sentences kept in a summary
pub const SELECTION_RATIO: f64 = 0.3;

/// Minimum number of sentences kept
pub const MIN_SELECTED: usize = 3;

/// A sentence with its extractive score
#[derive(Debug, Clone, PartialEq)]
pub struct ScoredSentence {
    /// The scored sentence
    pub sentence: Sentence,
    /// Higher is more important
    pub score: f64,
}

/// Number of sentences a summary of `total` sentences keeps
pub fn selection_size(total: usize) -> usize {
    let proportional = (total as f64 * SELECTION_RATIO).ceil() as usize;
    proportional.max(MIN_SELECTED).min(total)
}

/// Score each sentence as `words * 0.5 + (n - i) * 0.3`
pub fn score(sentences: &[Sentence]) -> Vec<ScoredSentence> {
    let total = sentences.len();
    sentences
        .iter()
        .enumerate()
        .map(|(i, sentence)| ScoredSentence {
            sentence: sentence.clone(),
            score: sentence.word_count() as f64 * WORD_WEIGHT
                + (total - i) as f64 * POSITION_WEIGHT,
        })
        .collect()
}

/// Pick the top-scoring sentences and return them in source order
///
/// Ties keep source order because the sort is stable.
pub fn select(sentences: &[Sentence]) -> Vec<Sentence> {
    let mut scored = score(sentences);
    scored.sort_by(|a, b| b.score.total_cmp(&a.score));
    scored.truncate(selection_size(sentences.len()));

    let mut selected: Vec<Sentence> = scored.into_iter().map(|s| s.sentence).collect();
    selected.sort_by_key(|s| s.index);
    selected
}

/// Summarize text by sentence extraction
///
/// Text without any terminator is returned unchanged.
pub fn summarize(text: &str, _options: &SummaryOptions) -> String {
    if !sentence::has_terminator(text) {
        return text.to_string();
    }

    let sentences = sentence::split(text);
    select(&sentences)
        .iter()
        .map(|s| s.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

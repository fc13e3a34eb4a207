//! Punctuation-based sentence splitting
//!
//! A sentence is a run of non-terminator characters followed by one or more
//! of `.`, `!` or `?`. Sentences keep their terminators, are trimmed, and keep
//! their ordinal position. Text after the last terminator is dropped, and text
//! with no terminator at all is a single sentence.

use regex::Regex;
use std::ops::Range;
use std::sync::LazyLock;

static SENTENCE_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[^.!?]+[.!?]+").expect("sentence pattern is valid"));

/// Sentence-ending characters
pub const TERMINATORS: [char; 3] = ['.', '!', '?'];

/// A trimmed sentence with its position in the source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sentence {
    /// Trimmed sentence text, terminator included
    pub text: String,
    /// Ordinal position among the sentences of the source
    pub index: usize,
    /// Byte range of the trimmed text in the source
    pub span: Range<usize>,
}

impl Sentence {
    /// Whitespace-separated word count
    pub fn word_count(&self) -> usize {
        crate::normalize::word_count(&self.text)
    }
}

/// Whether the text contains any sentence terminator
pub fn has_terminator(text: &str) -> bool {
    text.contains(TERMINATORS)
}

/// Split text into ordered sentences
pub fn split(text: &str) -> Vec<Sentence> {
    let mut sentences = Vec::new();
    let mut matched = false;

    for run in SENTENCE_RUN.find_iter(text) {
        push_trimmed(&mut sentences, text, run.start()..run.end());
        matched = true;
    }

    if !matched {
        push_trimmed(&mut sentences, text, 0..text.len());
    }

    sentences
}

fn push_trimmed(sentences: &mut Vec<Sentence>, text: &str, range: Range<usize>) {
    let slice = &text[range.clone()];
    let trimmed_start = slice.len() - slice.trim_start().len();
    let trimmed = slice.trim();
    if trimmed.is_empty() {
        return;
    }

    let start = range.start + trimmed_start;
    sentences.push(Sentence {
        text: trimmed.to_string(),
        index: sentences.len(),
        span: start..start + trimmed.len(),
    });
}

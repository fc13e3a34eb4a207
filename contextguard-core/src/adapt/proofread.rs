//! Mechanical proofreading
//!
//! A fixed-order pipeline of spacing, capitalisation and punctuation fixes.
//! The order is part of the contract: later steps rely on the output of
//! earlier ones, and reordering changes results.
//!
//! Every individual rewrite can be recorded as a [`Suggestion`], which gives
//! the grammar-check report its `{original, suggestion, message}` entries.

use regex::{Captures, Regex};
use serde::{Deserialize, Serialize};
use std::sync::LazyLock;

/// One correction made by the pipeline
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Suggestion {
    /// Text as found
    pub original: String,
    /// Text after the correction
    pub suggestion: String,
    /// Human-readable explanation
    pub message: String,
}

/// Grammar-check report
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GrammarReport {
    /// Corrections in pipeline order
    pub suggestions: Vec<Suggestion>,
    /// Fully corrected text
    pub corrected: String,
    /// Whether any correction was made
    pub has_issues: bool,
}

/// Proofread text plus the number of applied fixes
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Improvement {
    /// Corrected text
    pub improved: String,
    /// Number of corrections applied
    pub grammar_fixes: usize,
}

struct Step {
    pattern: Regex,
    message: &'static str,
    rewrite: fn(&Captures<'_>) -> String,
}

impl Step {
    fn new(pattern: &str, message: &'static str, rewrite: fn(&Captures<'_>) -> String) -> Self {
        Self {
            pattern: Regex::new(pattern).expect("proofread pattern is valid"),
            message,
            rewrite,
        }
    }

    fn run(&self, text: &str, sink: &mut Option<&mut Vec<Suggestion>>) -> String {
        let mut out = String::with_capacity(text.len());
        let mut last = 0;

        for caps in self.pattern.captures_iter(text) {
            let whole = caps.get(0).expect("group 0 always matches");
            let replacement = (self.rewrite)(&caps);

            if let Some(suggestions) = sink.as_deref_mut() {
                if replacement != whole.as_str() {
                    suggestions.push(Suggestion {
                        original: whole.as_str().to_string(),
                        suggestion: replacement.clone(),
                        message: self.message.to_string(),
                    });
                }
            }

            out.push_str(&text[last..whole.start()]);
            out.push_str(&replacement);
            last = whole.end();
        }

        out.push_str(&text[last..]);
        out
    }
}

// Steps 1-5 run before trimming, step 7 after it.
static PRE_TRIM_STEPS: LazyLock<[Step; 5]> = LazyLock::new(|| {
    [
        Step::new(r"\s+", "Collapse repeated whitespace", |_| " ".to_string()),
        Step::new(
            r"\s+([.,!?;:])",
            "Remove space before punctuation",
            |caps| caps[1].to_string(),
        ),
        Step::new(
            r"([.,!?;:])([A-Z])",
            "Add space after punctuation",
            |caps| format!("{} {}", &caps[1], &caps[2]),
        ),
        // Not right after punctuation, so "x,i" stays and a second pass is a no-op.
        Step::new(r"(^|[^\w.,!?;:])i\b", "Capitalize the pronoun \"I\"", |caps| {
            format!("{}I", &caps[1])
        }),
        Step::new(
            r"\b([a-z])\.([A-Z])",
            "Add space after period",
            |caps| format!("{}. {}", &caps[1], &caps[2]),
        ),
    ]
});

static CAPITALIZE_STEP: LazyLock<Step> = LazyLock::new(|| {
    Step::new(
        r"(^(?-u:\w)|[.!?]\s+(?-u:\w))",
        "Capitalize the start of a sentence",
        |caps| caps[0].to_uppercase(),
    )
});

fn pipeline(text: &str, mut sink: Option<&mut Vec<Suggestion>>) -> String {
    let spaced = PRE_TRIM_STEPS
        .iter()
        .fold(text.to_string(), |acc, step| step.run(&acc, &mut sink));
    CAPITALIZE_STEP.run(spaced.trim(), &mut sink)
}

/// Apply the proofreading pipeline
pub fn proofread(text: &str) -> String {
    pipeline(text, None)
}

/// Run the pipeline and report each correction
pub fn check(text: &str) -> GrammarReport {
    let mut suggestions = Vec::new();
    let corrected = pipeline(text, Some(&mut suggestions));
    GrammarReport {
        has_issues: !suggestions.is_empty(),
        suggestions,
        corrected,
    }
}

/// Proofread and count the applied corrections
pub fn improve(text: &str) -> Improvement {
    let report = check(text);
    Improvement {
        grammar_fixes: report.suggestions.len(),
        improved: report.corrected,
    }
}

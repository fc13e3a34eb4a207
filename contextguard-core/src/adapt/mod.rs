//! Deterministic fallback algorithms for text adaptation
//!
//! These run when no native adaptation capability is present. Each one is a
//! pure function of its input and bounded in time by the input length.

pub mod alt_text;
pub mod proofread;
pub mod summarize;
pub mod tone;
pub mod translate;

pub use alt_text::{clamp_alt_text, fallback_alt_text, ImageContext};
pub use proofread::{check, improve, proofread, GrammarReport, Improvement, Suggestion};
pub use summarize::{summarize, ScoredSentence};
pub use tone::rewrite;
pub use translate::translate;

//! Adapter abstraction
//!
//! An [`Adapter`] is one implementation of the adaptation operations. The
//! engine holds at most one native adapter, supplied by the embedding
//! application, and always holds the [`FallbackAdapter`]. Which one runs is
//! decided once per request from the native adapter's capability probe.

use crate::error::AdapterError;
use crate::request::Operation;
use async_trait::async_trait;
use contextguard_core::adapt::{self, ImageContext};
use contextguard_core::{LanguageCode, ReadingLevel, SummaryOptions, Tone};
use serde::{Deserialize, Serialize};
use std::panic::{self, AssertUnwindSafe};

/// One unit of work, with preferences already resolved
#[derive(Debug, Clone, Copy)]
pub enum Task<'a> {
    /// Summarize text
    Summarize {
        /// Input text
        text: &'a str,
        /// Summary style
        options: SummaryOptions,
    },
    /// Rewrite text toward a tone
    Rewrite {
        /// Input text
        text: &'a str,
        /// Target tone
        tone: Tone,
        /// Target reading level
        reading_level: ReadingLevel,
    },
    /// Proofread text
    Proofread {
        /// Input text
        text: &'a str,
    },
    /// Translate text
    Translate {
        /// Input text
        text: &'a str,
        /// Target language
        target: &'a LanguageCode,
    },
    /// Describe an image
    GenerateAlt {
        /// The image and its surroundings
        image: &'a ImageContext,
    },
}

impl Task<'_> {
    /// The operation this task performs
    pub fn operation(&self) -> Operation {
        match self {
            Task::Summarize { .. } => Operation::Summarize,
            Task::Rewrite { .. } => Operation::Rewrite,
            Task::Proofread { .. } => Operation::Proofread,
            Task::Translate { .. } => Operation::Translate,
            Task::GenerateAlt { .. } => Operation::GenerateAlt,
        }
    }
}

/// Which operations an adapter can perform
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Capabilities {
    /// Summaries
    pub summarizer: bool,
    /// Tone rewrites
    pub rewriter: bool,
    /// Proofreading
    pub proofreader: bool,
    /// Translation
    pub translator: bool,
    /// Image descriptions
    pub alt_text: bool,
}

impl Capabilities {
    /// Every capability present
    pub fn all() -> Self {
        Self {
            summarizer: true,
            rewriter: true,
            proofreader: true,
            translator: true,
            alt_text: true,
        }
    }

    /// Whether the operation is covered
    pub fn supports(&self, operation: Operation) -> bool {
        match operation {
            Operation::Summarize => self.summarizer,
            Operation::Rewrite => self.rewriter,
            Operation::Proofread => self.proofreader,
            Operation::Translate => self.translator,
            Operation::GenerateAlt => self.alt_text,
        }
    }

    /// Whether anything is covered
    pub fn any(&self) -> bool {
        Operation::ALL.into_iter().any(|op| self.supports(op))
    }
}

/// An implementation of the adaptation operations
#[async_trait]
pub trait Adapter: Send + Sync {
    /// Probe which operations are usable right now
    async fn capabilities(&self) -> Capabilities;

    /// Run one task
    async fn execute(&self, task: &Task<'_>) -> Result<String, AdapterError>;
}

/// The local deterministic algorithms
///
/// Each algorithm runs behind `catch_unwind`, so an unexpected panic
/// surfaces as [`AdapterError::Panicked`] instead of unwinding into the
/// caller.
#[derive(Debug, Clone, Copy, Default)]
pub struct FallbackAdapter;

impl FallbackAdapter {
    /// Create the fallback adapter
    pub fn new() -> Self {
        Self
    }

    /// Run a task synchronously
    pub fn run(&self, task: &Task<'_>) -> Result<String, AdapterError> {
        panic::catch_unwind(AssertUnwindSafe(|| match *task {
            Task::Summarize { text, options } => adapt::summarize(text, &options),
            Task::Rewrite { text, tone, .. } => adapt::rewrite(text, tone),
            Task::Proofread { text } => adapt::proofread(text),
            Task::Translate { text, target } => adapt::translate(text, target),
            Task::GenerateAlt { image } => adapt::fallback_alt_text(image),
        }))
        .map_err(|payload| AdapterError::Panicked(panic_message(payload.as_ref())))
    }
}

#[async_trait]
impl Adapter for FallbackAdapter {
    async fn capabilities(&self) -> Capabilities {
        Capabilities::all()
    }

    async fn execute(&self, task: &Task<'_>) -> Result<String, AdapterError> {
        self.run(task)
    }
}

pub(crate) fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        "unknown panic".to_string()
    }
}

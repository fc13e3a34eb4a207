//! Content location and local text adaptation for ContextGuard
//!
//! This crate holds the pure, synchronous part of the system:
//!
//! - **Content location**: pick a bounded, cleaned span of text from a
//!   document, either an explicit selection or an inferred main-content
//!   region, and write results back into a captured selection.
//! - **Fallback adaptation**: deterministic summarization, tone rewriting,
//!   proofreading and a translation placeholder, used when no native
//!   capability is available.
//! - **Analysis**: text statistics, formality and style notes.
//!
//! # Example
//!
//! ```rust
//! use contextguard_core::{ContentLocator, Document, SourceKind};
//! use contextguard_core::adapt::{proofread, summarize};
//! use contextguard_core::SummaryOptions;
//!
//! let doc = Document::parse_html(
//!     "<body><p>this text is long enough to be picked as the main block .it has two sentences</p></body>",
//! );
//! let extraction = ContentLocator::new().locate(None, &doc);
//! assert_eq!(extraction.source_kind, SourceKind::LargestBlock);
//!
//! let fixed = proofread(&extraction.text);
//! assert_eq!(
//!     fixed,
//!     "This text is long enough to be picked as the main block.it has two sentences"
//! );
//! let summary = summarize(&fixed, &SummaryOptions::default());
//! assert!(summary.starts_with("This text"));
//! ```

pub mod adapt;
pub mod analysis;
pub mod config;
pub mod document;
pub mod error;
pub mod locator;
pub mod normalize;
pub mod sentence;
pub mod types;

pub use config::LocatorConfig;
pub use document::{
    Anchor, BlockRole, Document, DocumentHandle, EditableDocument, NodeId, Selection,
    TextPosition,
};
pub use error::{CoreError, Result};
pub use locator::{ContentLocator, ExtractionResult, Origin, SourceKind};
pub use sentence::Sentence;
pub use types::{
    language_name, LanguageCode, ReadingLevel, SummaryKind, SummaryLength, SummaryOptions, Tone,
};

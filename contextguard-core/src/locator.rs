//! Content location
//!
//! Produces one bounded text extraction from a document. An explicit
//! selection always wins; otherwise the locator walks a fixed priority list
//! of regions and takes the first one with enough cleaned text:
//!
//! 1. the first `<article>`
//! 2. the first `<main>` (or `role="main"`)
//! 3. the candidate block with the longest raw text
//! 4. the start of the whole document text
//!
//! When even the document text is empty the configured sentinel message is
//! returned with [`SourceKind::None`].

use crate::config::LocatorConfig;
use crate::document::{Anchor, BlockRole, DocumentHandle, EditableDocument, NodeId, Selection};
use crate::error::{CoreError, Result};
use crate::normalize::{char_count, clamp_chars, collapse_whitespace};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Where an extraction came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum SourceKind {
    /// Text the user selected
    Selection,
    /// An article region
    Article,
    /// A main content region
    Main,
    /// The longest paragraph or content-like block
    LargestBlock,
    /// The start of the whole document text
    BodyFallback,
    /// Nothing was found
    None,
}

impl SourceKind {
    /// Wire name of the kind
    pub fn as_str(&self) -> &'static str {
        match self {
            SourceKind::Selection => "SELECTION",
            SourceKind::Article => "ARTICLE",
            SourceKind::Main => "MAIN",
            SourceKind::LargestBlock => "LARGEST_BLOCK",
            SourceKind::BodyFallback => "BODY_FALLBACK",
            SourceKind::None => "NONE",
        }
    }
}

impl fmt::Display for SourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Opaque reference back to the origin of an extraction
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Origin {
    /// A captured selection range
    Selection(Anchor),
    /// A document node
    Node(NodeId),
    /// Nothing to point at
    Nowhere,
}

/// One bounded text extraction with provenance
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExtractionResult {
    /// Extracted text, never longer than the configured maximum
    pub text: String,
    /// Which strategy produced the text
    pub source_kind: SourceKind,
    /// Whether the text came from a user selection
    pub has_selection: bool,
    /// Where the text came from
    #[serde(skip)]
    pub origin: Origin,
}

impl ExtractionResult {
    /// The extraction, or [`CoreError::NoContentFound`] for the sentinel
    pub fn into_content(self) -> Result<Self> {
        if self.source_kind == SourceKind::None {
            Err(CoreError::NoContentFound)
        } else {
            Ok(self)
        }
    }

    /// The selection anchor, if the text came from one
    pub fn anchor(&self) -> Option<&Anchor> {
        match &self.origin {
            Origin::Selection(anchor) => Some(anchor),
            _ => None,
        }
    }
}

/// Finds the text to adapt in a document
#[derive(Debug, Clone, Default)]
pub struct ContentLocator {
    config: LocatorConfig,
}

impl ContentLocator {
    /// Locator with default thresholds
    pub fn new() -> Self {
        Self::default()
    }

    /// Locator with custom thresholds
    pub fn with_config(config: LocatorConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self { config })
    }

    /// The active thresholds
    pub fn config(&self) -> &LocatorConfig {
        &self.config
    }

    /// Extract text from a selection or from the best document region
    pub fn locate<D>(&self, selection: Option<&Selection>, doc: &D) -> ExtractionResult
    where
        D: DocumentHandle + ?Sized,
    {
        if let Some(selection) = selection {
            let text = selection.text.trim();
            if !text.is_empty() {
                tracing::debug!(chars = char_count(text), "using explicit selection");
                return ExtractionResult {
                    text: clamp_chars(text, self.config.max_chars).to_string(),
                    source_kind: SourceKind::Selection,
                    has_selection: true,
                    origin: selection
                        .anchor
                        .clone()
                        .map_or(Origin::Nowhere, Origin::Selection),
                };
            }
        }

        for (role, kind) in [
            (BlockRole::Article, SourceKind::Article),
            (BlockRole::Main, SourceKind::Main),
        ] {
            if let Some(node) = doc.first_block(role) {
                let text = self.extract_clean_text(doc, node);
                let chars = char_count(&text);
                tracing::debug!(?role, chars, "checked region");
                if chars > self.config.region_min_chars {
                    return Self::found(text, kind, node);
                }
            }
        }

        if let Some(node) = Self::largest_block(doc) {
            let text = self.extract_clean_text(doc, node);
            let chars = char_count(&text);
            tracing::debug!(chars, "checked largest block");
            if chars > self.config.block_min_chars {
                return Self::found(text, SourceKind::LargestBlock, node);
            }
        }

        let body = doc.body();
        let raw = doc.raw_text(body);
        let text = clamp_chars(raw.trim(), self.config.body_fallback_chars);
        if !text.is_empty() {
            tracing::debug!(chars = char_count(text), "using body fallback");
            return Self::found(text.to_string(), SourceKind::BodyFallback, body);
        }

        tracing::debug!("no content found");
        ExtractionResult {
            text: self.config.no_content_message.clone(),
            source_kind: SourceKind::None,
            has_selection: false,
            origin: Origin::Nowhere,
        }
    }

    /// Content text of a node, whitespace collapsed and clamped
    pub fn extract_clean_text<D>(&self, doc: &D, node: NodeId) -> String
    where
        D: DocumentHandle + ?Sized,
    {
        let text = collapse_whitespace(&doc.content_text(node));
        clamp_chars(&text, self.config.max_chars).to_string()
    }

    /// Replace a captured range, reporting success as a flag
    pub fn replace_selection<D>(&self, doc: &mut D, anchor: &Anchor, new_text: &str) -> bool
    where
        D: EditableDocument + ?Sized,
    {
        match doc.replace_range(anchor, new_text) {
            Ok(()) => true,
            Err(err) => {
                tracing::warn!(error = %err, "could not replace selection");
                false
            }
        }
    }

    fn found(text: String, source_kind: SourceKind, node: NodeId) -> ExtractionResult {
        ExtractionResult {
            text,
            source_kind,
            has_selection: false,
            origin: Origin::Node(node),
        }
    }

    /// Candidate with the most raw text; the earliest wins a tie
    fn largest_block<D>(doc: &D) -> Option<NodeId>
    where
        D: DocumentHandle + ?Sized,
    {
        let mut best: Option<(NodeId, usize)> = None;
        for node in doc.blocks(BlockRole::Candidate) {
            let chars = char_count(doc.raw_text(node).trim());
            if chars > best.map_or(0, |(_, len)| len) {
                best = Some((node, chars));
            }
        }
        best.map(|(node, _)| node)
    }
}

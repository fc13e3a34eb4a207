//! Document model read by the content locator
//!
//! The locator only needs a small surface: find blocks by role, read their
//! text with or without non-content substructures, and replace a captured
//! range. [`DocumentHandle`] and [`EditableDocument`] describe that surface;
//! [`Document`] is the arena-backed implementation used throughout the
//! workspace, built from HTML or programmatically.

mod html;
mod selection;
mod tree;

pub use selection::{Anchor, Selection, TextPosition};
pub use tree::{Document, DocumentBuilder, ElementData, NodeData, NodeId};

use crate::error::Result;

/// Structural role a block can play in content location
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BlockRole {
    /// `<article>`
    Article,
    /// `<main>` or `role="main"`
    Main,
    /// Paragraphs and content-like containers
    Candidate,
}

/// Elements whose text never counts as content
pub const NON_CONTENT_TAGS: [&str; 8] = [
    "script", "style", "nav", "header", "footer", "aside", "noscript", "template",
];

/// Read access to a structured document
pub trait DocumentHandle {
    /// All blocks with the given role, in document order
    fn blocks(&self, role: BlockRole) -> Vec<NodeId>;

    /// First block with the given role
    fn first_block(&self, role: BlockRole) -> Option<NodeId> {
        self.blocks(role).into_iter().next()
    }

    /// The node holding the whole visible document
    fn body(&self) -> NodeId;

    /// Full text content of a node, non-content included
    fn raw_text(&self, node: NodeId) -> String;

    /// Text content with non-content substructures skipped
    fn content_text(&self, node: NodeId) -> String;
}

/// A document that supports the range-scoped delete and insert
pub trait EditableDocument: DocumentHandle {
    /// Replace the anchored range with `text` as a single text node
    ///
    /// Fails with [`CoreError::ReplaceFailed`](crate::CoreError::ReplaceFailed)
    /// and leaves the document untouched when the anchor is stale.
    fn replace_range(&mut self, anchor: &Anchor, text: &str) -> Result<()>;
}

//! Captured selections and atomic range replacement

use super::tree::{Document, NodeId};
use crate::error::{CoreError, Result};
use serde::{Deserialize, Serialize};

/// A byte offset inside a text node
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TextPosition {
    /// The text node
    pub node: NodeId,
    /// Byte offset into the node's text
    pub offset: usize,
}

impl TextPosition {
    /// Create a position
    pub fn new(node: NodeId, offset: usize) -> Self {
        Self { node, offset }
    }
}

/// Reference to a previously captured range of document text
///
/// An anchor stays usable while both positions still resolve to attached
/// text nodes, in document order, and the text between them is unchanged.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Anchor {
    /// First character of the range
    pub start: TextPosition,
    /// One past the last character of the range
    pub end: TextPosition,
    captured: String,
}

impl Anchor {
    /// Text the range held when it was captured
    pub fn captured(&self) -> &str {
        &self.captured
    }
}

/// Text chosen by the user, optionally tied to a document range
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selection {
    /// Selected text
    pub text: String,
    /// Where the text came from, when known
    #[serde(skip)]
    pub anchor: Option<Anchor>,
}

impl Selection {
    /// A selection with no document range behind it
    pub fn detached(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            anchor: None,
        }
    }
}

impl Document {
    fn text_node_order(&self) -> Vec<(NodeId, &str)> {
        self.text_nodes()
            .into_iter()
            .filter_map(|id| self.text(id).map(|text| (id, text)))
            .collect()
    }

    /// Text between two positions, or `None` if the range does not resolve
    pub fn text_in_range(&self, start: TextPosition, end: TextPosition) -> Option<String> {
        let nodes = self.text_node_order();
        let first = nodes.iter().position(|(id, _)| *id == start.node)?;
        let last = nodes.iter().position(|(id, _)| *id == end.node)?;

        let start_text = nodes[first].1;
        let end_text = nodes[last].1;
        if !start_text.is_char_boundary(start.offset) || !end_text.is_char_boundary(end.offset) {
            return None;
        }

        if first == last {
            return (start.offset < end.offset)
                .then(|| start_text[start.offset..end.offset].to_string());
        }
        if first > last {
            return None;
        }

        let mut out = String::from(&start_text[start.offset..]);
        for (_, text) in &nodes[first + 1..last] {
            out.push_str(text);
        }
        out.push_str(&end_text[..end.offset]);
        (!out.is_empty()).then_some(out)
    }

    /// Capture the range between two positions
    pub fn select(&self, start: TextPosition, end: TextPosition) -> Result<Selection> {
        let captured = self
            .text_in_range(start, end)
            .ok_or_else(|| CoreError::InvalidInput {
                reason: "selection range does not resolve in the document".to_string(),
            })?;
        Ok(Selection {
            text: captured.clone(),
            anchor: Some(Anchor {
                start,
                end,
                captured,
            }),
        })
    }

    /// Capture the first occurrence of `needle` across text nodes
    pub fn find_text(&self, needle: &str) -> Option<Selection> {
        if needle.is_empty() {
            return None;
        }

        let nodes: Vec<(NodeId, &str)> = self
            .text_node_order()
            .into_iter()
            .filter(|(_, text)| !text.is_empty())
            .collect();

        let mut joined = String::new();
        let mut starts = Vec::with_capacity(nodes.len());
        for (_, text) in &nodes {
            starts.push(joined.len());
            joined.push_str(text);
        }

        let found = joined.find(needle)?;
        let found_end = found + needle.len();

        let locate = |offset: usize, is_end: bool| -> Option<TextPosition> {
            nodes.iter().zip(&starts).find_map(|((id, text), &node_start)| {
                let node_end = node_start + text.len();
                let inside = if is_end {
                    node_start < offset && offset <= node_end
                } else {
                    node_start <= offset && offset < node_end
                };
                inside.then(|| TextPosition::new(*id, offset - node_start))
            })
        };

        self.select(locate(found, false)?, locate(found_end, true)?).ok()
    }

    /// Whether the anchor still matches the document
    pub fn anchor_is_valid(&self, anchor: &Anchor) -> bool {
        self.text_in_range(anchor.start, anchor.end)
            .is_some_and(|text| text == anchor.captured)
    }

    /// Delete the anchored range and insert `new_text` as one text node
    ///
    /// The anchor is validated first; once it passes, every step below is
    /// infallible, so the document is either fully edited or untouched.
    pub fn replace_selection(&mut self, anchor: &Anchor, new_text: &str) -> Result<()> {
        if !self.anchor_is_valid(anchor) {
            return Err(CoreError::replace_failed(
                "selection no longer matches the document",
            ));
        }

        let start = anchor.start;
        let end = anchor.end;
        let start_text = self.text(start.node).unwrap_or_default().to_string();

        if start.node == end.node {
            let suffix = start_text[end.offset..].to_string();
            self.set_text(start.node, start_text[..start.offset].to_string());
            let inserted = self.insert_text_after(start.node, new_text.to_string());
            if !suffix.is_empty() {
                self.insert_text_after(inserted, suffix);
            }
        } else {
            let end_text = self.text(end.node).unwrap_or_default().to_string();
            let order = self.descendants(self.root());
            let from = order.iter().position(|&id| id == start.node);
            let to = order.iter().position(|&id| id == end.node);
            let between: Vec<NodeId> = match (from, to) {
                (Some(from), Some(to)) => order[from + 1..to]
                    .iter()
                    .copied()
                    .filter(|&id| !self.is_ancestor_or_self(id, end.node))
                    .collect(),
                _ => Vec::new(),
            };

            for id in between {
                self.detach(id);
            }
            self.set_text(start.node, start_text[..start.offset].to_string());
            self.set_text(end.node, end_text[end.offset..].to_string());
            self.insert_text_after(start.node, new_text.to_string());
        }

        tracing::debug!(
            replaced_chars = anchor.captured.chars().count(),
            inserted_chars = new_text.chars().count(),
            "replaced selection"
        );
        Ok(())
    }
}

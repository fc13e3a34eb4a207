//! HTML conversion for [`Document`]
//!
//! Parsing goes through `scraper` (html5ever), so malformed markup is
//! recovered the way a browser would. Serialisation is a plain writer over
//! the arena; it escapes text and attribute values and leaves raw-text
//! elements untouched.

use super::tree::{Document, ElementData, NodeData, NodeId};
use scraper::{Html, Node};

const VOID_ELEMENTS: [&str; 13] = [
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

const RAW_TEXT_ELEMENTS: [&str; 2] = ["script", "style"];

impl Document {
    /// Parse an HTML document
    ///
    /// Comments, doctypes and processing instructions are dropped; elements
    /// and text are kept in source order.
    pub fn parse_html(source: &str) -> Self {
        let html = Html::parse_document(source);
        let mut doc = Document::new();
        let mut stack = vec![(html.tree.root(), doc.root())];

        while let Some((source_node, parent)) = stack.pop() {
            for child in source_node.children() {
                match child.value() {
                    Node::Element(element) => {
                        let data = ElementData {
                            name: element.name().to_ascii_lowercase(),
                            attrs: element
                                .attrs()
                                .map(|(name, value)| (name.to_string(), value.to_string()))
                                .collect(),
                        };
                        let id = doc.append_element(parent, data);
                        stack.push((child, id));
                    }
                    Node::Text(text) => {
                        doc.append_text(parent, &**text);
                    }
                    _ => {}
                }
            }
        }

        tracing::debug!(nodes = doc.descendants(doc.root()).len(), "parsed html document");
        doc
    }

    /// Serialise the attached tree back to HTML
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        let starts_with_html = self
            .children(self.root())
            .iter()
            .any(|&id| self.element(id).is_some_and(|e| e.name == "html"));
        if starts_with_html {
            out.push_str("<!DOCTYPE html>");
        }
        for &child in self.children(self.root()) {
            self.write_node(child, false, &mut out);
        }
        out
    }

    fn write_node(&self, id: NodeId, raw: bool, out: &mut String) {
        match self.data(id) {
            NodeData::Root => {}
            NodeData::Text(text) => {
                if raw {
                    out.push_str(text);
                } else {
                    escape_into(text, false, out);
                }
            }
            NodeData::Element(element) => {
                out.push('<');
                out.push_str(&element.name);
                for (name, value) in &element.attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    escape_into(value, true, out);
                    out.push('"');
                }
                out.push('>');

                if VOID_ELEMENTS.contains(&element.name.as_str()) {
                    return;
                }

                let raw_children = RAW_TEXT_ELEMENTS.contains(&element.name.as_str());
                for &child in self.children(id) {
                    self.write_node(child, raw_children, out);
                }

                out.push_str("</");
                out.push_str(&element.name);
                out.push('>');
            }
        }
    }
}

fn escape_into(text: &str, attribute: bool, out: &mut String) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' if !attribute => out.push_str("&lt;"),
            '>' if !attribute => out.push_str("&gt;"),
            '"' if attribute => out.push_str("&quot;"),
            '\u{a0}' => out.push_str("&nbsp;"),
            _ => out.push(c),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::{BlockRole, DocumentHandle};

    #[test]
    fn test_parse_finds_roles() {
        let doc = Document::parse_html(
            r#"<html><body><main><article><p>Hi</p></article></main></body></html>"#,
        );
        assert_eq!(doc.blocks(BlockRole::Article).len(), 1);
        assert_eq!(doc.blocks(BlockRole::Main).len(), 1);
        assert_eq!(doc.blocks(BlockRole::Candidate).len(), 1);
    }

    #[test]
    fn test_parse_recovers_fragments() {
        let doc = Document::parse_html("<p>loose <b>text");
        assert_eq!(doc.raw_text(doc.body()), "loose text");
    }

    #[test]
    fn test_parse_drops_comments() {
        let doc = Document::parse_html("<p>a<!-- note -->b</p>");
        assert_eq!(doc.raw_text(doc.body()), "ab");
    }

    #[test]
    fn test_entities_are_decoded() {
        let doc = Document::parse_html("<p>Fish &amp; chips</p>");
        assert_eq!(doc.raw_text(doc.body()), "Fish & chips");
    }

    #[test]
    fn test_to_html_escapes_text_and_attributes() {
        let doc = Document::builder()
            .element_with("p", &[("title", "say \"hi\"")], "1 < 2 & 3")
            .build();
        assert_eq!(
            doc.to_html(),
            r#"<!DOCTYPE html><html><body><p title="say &quot;hi&quot;">1 &lt; 2 &amp; 3</p></body></html>"#
        );
    }

    #[test]
    fn test_to_html_void_and_raw_text() {
        let doc = Document::parse_html(
            "<body><img src=\"a.png\"><script>if (a < b) {}</script></body>",
        );
        let html = doc.to_html();
        assert!(html.contains(r#"<img src="a.png">"#));
        assert!(!html.contains("</img>"));
        assert!(html.contains("<script>if (a < b) {}</script>"));
    }

    #[test]
    fn test_round_trip_keeps_text() {
        let source = "<html><head><title>T</title></head><body><p>One &amp; two</p></body></html>";
        let doc = Document::parse_html(source);
        let reparsed = Document::parse_html(&doc.to_html());
        assert_eq!(
            reparsed.raw_text(reparsed.body()),
            doc.raw_text(doc.body())
        );
    }
}

//! Arena-backed document tree
//!
//! Nodes live in a flat vector and refer to each other by [`NodeId`]. Nodes
//! are detached from their parent but never freed, so an id stays valid for
//! the life of the document and a stale anchor can always be checked.

use super::{Anchor, BlockRole, DocumentHandle, EditableDocument, NON_CONTENT_TAGS};
use crate::adapt::ImageContext;
use crate::error::Result;
use crate::normalize::{clamp_chars, collapse_whitespace};

/// Index of a node in its document
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl NodeId {
    /// Position of the node in the arena
    pub fn index(self) -> usize {
        self.0
    }
}

/// Tag name and attributes of an element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Lowercase tag name
    pub name: String,
    /// Attributes in source order
    pub attrs: Vec<(String, String)>,
}

impl ElementData {
    /// Create an element with a lowercased tag name
    pub fn new(name: &str, attrs: &[(&str, &str)]) -> Self {
        Self {
            name: name.to_ascii_lowercase(),
            attrs: attrs
                .iter()
                .map(|(k, v)| (k.to_ascii_lowercase(), v.to_string()))
                .collect(),
        }
    }

    /// Value of an attribute
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    /// Whether reading this element's text is never content
    pub fn is_non_content(&self) -> bool {
        NON_CONTENT_TAGS.contains(&self.name.as_str())
            || self.attr("aria-hidden") == Some("true")
            || self.attr("hidden").is_some()
    }

    /// Every role the element plays
    pub fn has_role(&self, role: BlockRole) -> bool {
        match role {
            BlockRole::Article => self.name == "article",
            BlockRole::Main => self.name == "main" || self.attr("role") == Some("main"),
            BlockRole::Candidate => {
                self.name == "p"
                    || (self.name == "div"
                        && self.attr("class").is_some_and(|class| {
                            class.contains("content") || class.contains("article")
                        }))
            }
        }
    }
}

/// Payload of a node
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeData {
    /// The document root
    Root,
    /// An element
    Element(ElementData),
    /// A run of text
    Text(String),
}

#[derive(Debug, Clone)]
struct NodeSlot {
    data: NodeData,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A mutable document tree
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<NodeSlot>,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Empty document holding only the root
    pub fn new() -> Self {
        Self {
            nodes: vec![NodeSlot {
                data: NodeData::Root,
                parent: None,
                children: Vec::new(),
            }],
        }
    }

    /// Build a document under a `<body>` element
    pub fn builder() -> DocumentBuilder {
        DocumentBuilder::new()
    }

    /// The root node
    pub fn root(&self) -> NodeId {
        NodeId(0)
    }

    /// Payload of a node
    pub fn data(&self, id: NodeId) -> &NodeData {
        &self.nodes[id.0].data
    }

    /// Element payload, if the node is an element
    pub fn element(&self, id: NodeId) -> Option<&ElementData> {
        match self.data(id) {
            NodeData::Element(element) => Some(element),
            _ => None,
        }
    }

    /// Text payload, if the node is a text node
    pub fn text(&self, id: NodeId) -> Option<&str> {
        match self.data(id) {
            NodeData::Text(text) => Some(text.as_str()),
            _ => None,
        }
    }

    /// Parent of a node
    pub fn parent(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].parent
    }

    /// Children of a node in order
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Whether the id refers to a node of this document
    pub fn contains(&self, id: NodeId) -> bool {
        id.0 < self.nodes.len()
    }

    /// Whether the node is still reachable from the root
    pub fn is_attached(&self, id: NodeId) -> bool {
        if !self.contains(id) {
            return false;
        }
        let mut current = id;
        while let Some(parent) = self.parent(current) {
            current = parent;
        }
        current == self.root()
    }

    /// Whether `ancestor` is `node` or one of its ancestors
    pub fn is_ancestor_or_self(&self, ancestor: NodeId, node: NodeId) -> bool {
        let mut current = Some(node);
        while let Some(id) = current {
            if id == ancestor {
                return true;
            }
            current = self.parent(id);
        }
        false
    }

    /// Append an element to `parent`
    pub fn append_element(&mut self, parent: NodeId, element: ElementData) -> NodeId {
        self.push_child(parent, NodeData::Element(element))
    }

    /// Append a text node to `parent`
    pub fn append_text(&mut self, parent: NodeId, text: impl Into<String>) -> NodeId {
        self.push_child(parent, NodeData::Text(text.into()))
    }

    fn push_child(&mut self, parent: NodeId, data: NodeData) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(NodeSlot {
            data,
            parent: Some(parent),
            children: Vec::new(),
        });
        self.nodes[parent.0].children.push(id);
        id
    }

    /// Nodes under `id` in preorder, `id` first
    pub fn descendants(&self, id: NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            out.push(current);
            stack.extend(self.children(current).iter().rev());
        }
        out
    }

    /// Attached text nodes in document order
    pub fn text_nodes(&self) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|&id| self.text(id).is_some())
            .collect()
    }

    /// Attached elements with the given tag name, in document order
    pub fn elements_named(&self, name: &str) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|&id| self.element(id).is_some_and(|e| e.name == name))
            .collect()
    }

    /// Concatenated text under a node, skipping subtrees `skip` rejects
    ///
    /// The starting node itself is never skipped.
    fn collect_text(&self, id: NodeId, skip: impl Fn(&ElementData) -> bool) -> String {
        let mut out = String::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            match self.data(current) {
                NodeData::Text(text) => out.push_str(text),
                NodeData::Element(element) if current != id && skip(element) => continue,
                _ => {}
            }
            stack.extend(self.children(current).iter().rev());
        }
        out
    }

    /// Whether the node sits inside an editable region
    pub fn is_editable(&self, id: NodeId) -> bool {
        let mut current = Some(id);
        while let Some(node) = current {
            if let Some(element) = self.element(node) {
                if matches!(element.name.as_str(), "input" | "textarea")
                    || element
                        .attr("contenteditable")
                        .is_some_and(|v| v.is_empty() || v.eq_ignore_ascii_case("true"))
                {
                    return true;
                }
            }
            current = self.parent(node);
        }
        false
    }

    /// Attached `<img>` elements in document order
    pub fn images(&self) -> Vec<NodeId> {
        self.elements_named("img")
    }

    /// Describe an image from its attributes and its parent's text
    pub fn image_context(&self, image: NodeId, max_chars: usize) -> ImageContext {
        let Some(element) = self.element(image) else {
            return ImageContext::default();
        };

        let context = self
            .parent(image)
            .map(|parent| {
                let text = collapse_whitespace(&self.raw_text(parent));
                clamp_chars(&text, max_chars).to_string()
            })
            .unwrap_or_default();

        ImageContext {
            src: element.attr("src").unwrap_or_default().to_string(),
            current_alt: element
                .attr("alt")
                .filter(|alt| !alt.trim().is_empty())
                .map(str::to_string),
            context,
        }
    }

    pub(crate) fn set_text(&mut self, id: NodeId, text: String) {
        self.nodes[id.0].data = NodeData::Text(text);
    }

    /// Insert a text node directly after `sibling`
    pub(crate) fn insert_text_after(&mut self, sibling: NodeId, text: String) -> NodeId {
        let id = NodeId(self.nodes.len());
        let parent = self.parent(sibling);
        self.nodes.push(NodeSlot {
            data: NodeData::Text(text),
            parent,
            children: Vec::new(),
        });
        if let Some(parent) = parent {
            let siblings = &mut self.nodes[parent.0].children;
            let position = siblings
                .iter()
                .position(|&child| child == sibling)
                .map_or(siblings.len(), |p| p + 1);
            siblings.insert(position, id);
        }
        id
    }

    pub(crate) fn detach(&mut self, id: NodeId) {
        if let Some(parent) = self.nodes[id.0].parent.take() {
            self.nodes[parent.0].children.retain(|&child| child != id);
        }
    }
}

impl DocumentHandle for Document {
    fn blocks(&self, role: BlockRole) -> Vec<NodeId> {
        self.descendants(self.root())
            .into_iter()
            .filter(|&id| self.element(id).is_some_and(|e| e.has_role(role)))
            .collect()
    }

    fn body(&self) -> NodeId {
        self.elements_named("body")
            .into_iter()
            .next()
            .unwrap_or_else(|| self.root())
    }

    fn raw_text(&self, node: NodeId) -> String {
        self.collect_text(node, |_| false)
    }

    fn content_text(&self, node: NodeId) -> String {
        self.collect_text(node, ElementData::is_non_content)
    }
}

impl EditableDocument for Document {
    fn replace_range(&mut self, anchor: &Anchor, text: &str) -> Result<()> {
        self.replace_selection(anchor, text)
    }
}

/// Fluent construction of small documents
///
/// ```
/// use contextguard_core::document::{Document, DocumentHandle};
///
/// let doc = Document::builder()
///     .open("article", &[])
///     .element("p", "Hello there.")
///     .close()
///     .build();
/// assert_eq!(doc.raw_text(doc.body()), "Hello there.");
/// ```
#[derive(Debug)]
pub struct DocumentBuilder {
    doc: Document,
    stack: Vec<NodeId>,
}

impl DocumentBuilder {
    fn new() -> Self {
        let mut doc = Document::new();
        let root = doc.root();
        let html = doc.append_element(root, ElementData::new("html", &[]));
        let body = doc.append_element(html, ElementData::new("body", &[]));
        Self {
            doc,
            stack: vec![body],
        }
    }

    fn current(&self) -> NodeId {
        self.stack.last().copied().unwrap_or_else(|| self.doc.root())
    }

    /// Open an element; following calls add children to it
    pub fn open(mut self, name: &str, attrs: &[(&str, &str)]) -> Self {
        let parent = self.current();
        let id = self.doc.append_element(parent, ElementData::new(name, attrs));
        self.stack.push(id);
        self
    }

    /// Close the innermost open element
    pub fn close(mut self) -> Self {
        if self.stack.len() > 1 {
            self.stack.pop();
        }
        self
    }

    /// Add a text node to the open element
    pub fn text(mut self, text: &str) -> Self {
        let parent = self.current();
        self.doc.append_text(parent, text);
        self
    }

    /// Add an element holding only text
    pub fn element(self, name: &str, text: &str) -> Self {
        self.open(name, &[]).text(text).close()
    }

    /// Add an element with attributes holding only text
    pub fn element_with(self, name: &str, attrs: &[(&str, &str)], text: &str) -> Self {
        self.open(name, attrs).text(text).close()
    }

    /// Finish the document
    pub fn build(self) -> Document {
        self.doc
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Document {
        Document::builder()
            .open("nav", &[])
            .text("Home About")
            .close()
            .open("article", &[])
            .element("h1", "Title")
            .open("p", &[])
            .text("Body ")
            .element("script", "var x = 1;")
            .text("text.")
            .close()
            .element_with("span", &[("aria-hidden", "true")], "hidden")
            .close()
            .build()
    }

    #[test]
    fn test_raw_and_content_text() {
        let doc = sample();
        let article = doc.first_block(BlockRole::Article).unwrap();
        assert_eq!(doc.raw_text(article), "TitleBody var x = 1;text.hidden");
        assert_eq!(doc.content_text(article), "TitleBody text.");
        assert_eq!(doc.raw_text(doc.body()), "Home AboutTitleBody var x = 1;text.hidden");
    }

    #[test]
    fn test_content_text_keeps_the_node_itself() {
        let doc = sample();
        let nav = doc.elements_named("nav")[0];
        assert_eq!(doc.content_text(nav), "Home About");
    }

    #[test]
    fn test_roles() {
        let doc = Document::builder()
            .element_with("div", &[("role", "main")], "main")
            .element_with("div", &[("class", "post-content")], "block")
            .element_with("div", &[("class", "sidebar")], "side")
            .element("p", "para")
            .build();
        assert_eq!(doc.blocks(BlockRole::Main).len(), 1);
        assert_eq!(doc.blocks(BlockRole::Candidate).len(), 2);
        assert!(doc.blocks(BlockRole::Article).is_empty());
    }

    #[test]
    fn test_detached_nodes_disappear_from_text() {
        let mut doc = Document::builder().element("p", "one").element("p", "two").build();
        let first = doc.elements_named("p")[0];
        doc.detach(first);
        assert!(!doc.is_attached(first));
        assert_eq!(doc.raw_text(doc.body()), "two");
        assert_eq!(doc.text_nodes().len(), 1);
    }

    #[test]
    fn test_insert_text_after() {
        let mut doc = Document::builder().element("p", "a").build();
        let a = doc.text_nodes()[0];
        doc.insert_text_after(a, "b".to_string());
        assert_eq!(doc.raw_text(doc.body()), "ab");
    }

    #[test]
    fn test_image_context() {
        let doc = Document::builder()
            .open("figure", &[])
            .open("img", &[("src", "https://example.com/cat.jpg"), ("alt", "")])
            .close()
            .text("  A cat   sleeping on a keyboard ")
            .close()
            .build();
        let image = doc.images()[0];
        let context = doc.image_context(image, 10);
        assert_eq!(context.src, "https://example.com/cat.jpg");
        assert_eq!(context.current_alt, None);
        assert_eq!(context.context, "A cat slee");
    }

    #[test]
    fn test_is_editable() {
        let doc = Document::builder()
            .open("div", &[("contenteditable", "true")])
            .element("p", "edit me")
            .close()
            .element("p", "static")
            .build();
        let nodes = doc.text_nodes();
        assert!(doc.is_editable(nodes[0]));
        assert!(!doc.is_editable(nodes[1]));
    }
}

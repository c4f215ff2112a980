#![forbid(unsafe_code)]

//! Arena-backed document tree.
//!
//! The host document is modeled as a flat arena of nodes addressed by
//! [`NodeId`]. The engine never creates or destroys containers; it only
//! rewrites their descendant content, so removal detaches a node from its
//! parent without reclaiming the arena slot.
//!
//! Three node kinds exist:
//! - `Element` - a named interior node (paragraphs, inline markup)
//! - `Text` - a raw text run, the input to segmentation
//! - `Glyph` - a marker holding exactly one visible character plus its
//!   applied style; always a leaf, and the discoverable unit every
//!   downstream component enumerates in document order

use glowline_style::GlyphStyle;

/// Handle to a node in a [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(usize);

impl NodeId {
    /// Raw arena index.
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

/// Element payload: a tag name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementData {
    /// Tag name, lowercase by convention (`"p"`, `"em"`, ...).
    pub tag: String,
}

/// Glyph marker payload: one visible character and its applied style.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlyphData {
    /// The rendered character (one extended grapheme cluster).
    pub text: String,
    /// Style applied by styling passes; empty until styled.
    pub style: GlyphStyle,
}

/// The kind and payload of a node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NodeKind {
    /// Interior element node.
    Element(ElementData),
    /// Raw text run.
    Text(String),
    /// Glyph marker (leaf).
    Glyph(GlyphData),
}

#[derive(Debug, Clone)]
struct Node {
    kind: NodeKind,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

/// A mutable document tree.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<Node>,
    root: NodeId,
}

impl Document {
    /// Create a document with an empty `body` root element.
    #[must_use]
    pub fn new() -> Self {
        let mut doc = Self {
            nodes: Vec::new(),
            root: NodeId(0),
        };
        doc.root = doc.create_element("body");
        doc
    }

    /// The root element.
    #[inline]
    #[must_use]
    pub const fn root(&self) -> NodeId {
        self.root
    }

    // --- Node creation ---------------------------------------------------

    /// Create a detached element node.
    pub fn create_element(&mut self, tag: impl Into<String>) -> NodeId {
        self.push_node(NodeKind::Element(ElementData { tag: tag.into() }))
    }

    /// Create a detached text node.
    pub fn create_text(&mut self, text: impl Into<String>) -> NodeId {
        self.push_node(NodeKind::Text(text.into()))
    }

    /// Create a detached glyph marker holding one visible character.
    pub fn create_glyph(&mut self, text: impl Into<String>) -> NodeId {
        self.push_node(NodeKind::Glyph(GlyphData {
            text: text.into(),
            style: GlyphStyle::EMPTY,
        }))
    }

    /// Create a paragraph element with a single text child under the root.
    ///
    /// Convenience for hosts and tests building documents by hand.
    pub fn append_paragraph(&mut self, text: impl Into<String>) -> NodeId {
        let para = self.create_element("p");
        let run = self.create_text(text);
        self.append_child(para, run);
        self.append_child(self.root, para);
        para
    }

    fn push_node(&mut self, kind: NodeKind) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(Node {
            kind,
            parent: None,
            children: Vec::new(),
        });
        id
    }

    // --- Tree mutation ---------------------------------------------------

    /// Append `child` as the last child of `parent`.
    ///
    /// The child must be detached.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        debug_assert!(self.nodes[child.0].parent.is_none(), "child already attached");
        self.nodes[child.0].parent = Some(parent);
        self.nodes[parent.0].children.push(child);
    }

    /// Insert `new` into `parent`'s children immediately before `reference`.
    ///
    /// If `reference` is not a child of `parent`, `new` is appended instead.
    pub fn insert_before(&mut self, parent: NodeId, new: NodeId, reference: NodeId) {
        debug_assert!(self.nodes[new.0].parent.is_none(), "node already attached");
        self.nodes[new.0].parent = Some(parent);
        let children = &mut self.nodes[parent.0].children;
        match children.iter().position(|&c| c == reference) {
            Some(at) => children.insert(at, new),
            None => children.push(new),
        }
    }

    /// Detach `node` from its parent.
    ///
    /// The arena slot is not reclaimed; a detached node is simply no longer
    /// reachable from the root.
    pub fn remove(&mut self, node: NodeId) {
        if let Some(parent) = self.nodes[node.0].parent.take() {
            self.nodes[parent.0].children.retain(|&c| c != node);
        }
    }

    // --- Structure queries -----------------------------------------------

    /// The node's kind and payload.
    #[inline]
    #[must_use]
    pub fn kind(&self, node: NodeId) -> &NodeKind {
        &self.nodes[node.0].kind
    }

    /// The node's parent, if attached.
    #[inline]
    #[must_use]
    pub fn parent(&self, node: NodeId) -> Option<NodeId> {
        self.nodes[node.0].parent
    }

    /// The node's children in document order.
    #[inline]
    #[must_use]
    pub fn children(&self, node: NodeId) -> &[NodeId] {
        &self.nodes[node.0].children
    }

    /// Check whether the node is an element.
    #[inline]
    #[must_use]
    pub fn is_element(&self, node: NodeId) -> bool {
        matches!(self.nodes[node.0].kind, NodeKind::Element(_))
    }

    /// Check whether the node is a raw text run.
    #[inline]
    #[must_use]
    pub fn is_text(&self, node: NodeId) -> bool {
        matches!(self.nodes[node.0].kind, NodeKind::Text(_))
    }

    /// Check whether the node is a glyph marker.
    #[inline]
    #[must_use]
    pub fn is_glyph(&self, node: NodeId) -> bool {
        matches!(self.nodes[node.0].kind, NodeKind::Glyph(_))
    }

    /// Pre-order traversal of all descendants of `node` (excluding `node`).
    pub fn descendants(&self, node: NodeId) -> Descendants<'_> {
        let mut stack: Vec<NodeId> = self.nodes[node.0].children.clone();
        stack.reverse();
        Descendants { doc: self, stack }
    }

    /// All glyph markers under `container` in document order.
    ///
    /// Glyphs are leaves, so document order here is reading order.
    #[must_use]
    pub fn glyphs(&self, container: NodeId) -> Vec<NodeId> {
        self.descendants(container)
            .filter(|&id| self.is_glyph(id))
            .collect()
    }

    /// All elements with the given tag, in document order from the root.
    ///
    /// Hosts use this to reproduce "style every paragraph" container
    /// discovery.
    #[must_use]
    pub fn elements_by_tag(&self, tag: &str) -> Vec<NodeId> {
        self.descendants(self.root)
            .filter(|&id| match &self.nodes[id.0].kind {
                NodeKind::Element(data) => data.tag == tag,
                _ => false,
            })
            .collect()
    }

    /// Concatenated text of `node` and its descendants in document order.
    #[must_use]
    pub fn text_content(&self, node: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(node, &mut out);
        out
    }

    fn collect_text(&self, node: NodeId, out: &mut String) {
        match &self.nodes[node.0].kind {
            NodeKind::Text(text) => out.push_str(text),
            NodeKind::Glyph(data) => out.push_str(&data.text),
            NodeKind::Element(_) => {
                for &child in &self.nodes[node.0].children {
                    self.collect_text(child, out);
                }
            }
        }
    }

    // --- Glyph style access ----------------------------------------------

    /// The glyph's display text, or `None` for non-glyph nodes.
    #[inline]
    #[must_use]
    pub fn glyph_text(&self, node: NodeId) -> Option<&str> {
        match &self.nodes[node.0].kind {
            NodeKind::Glyph(data) => Some(&data.text),
            _ => None,
        }
    }

    /// The glyph's currently applied style (empty for non-glyph nodes).
    #[inline]
    #[must_use]
    pub fn glyph_style(&self, node: NodeId) -> GlyphStyle {
        match &self.nodes[node.0].kind {
            NodeKind::Glyph(data) => data.style,
            _ => GlyphStyle::EMPTY,
        }
    }

    /// Replace the glyph's style atomically. No-op for non-glyph nodes.
    pub fn set_glyph_style(&mut self, node: NodeId, style: GlyphStyle) {
        if let NodeKind::Glyph(data) = &mut self.nodes[node.0].kind {
            data.style = style;
        }
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

/// Pre-order descendant iterator. See [`Document::descendants`].
#[derive(Debug)]
pub struct Descendants<'a> {
    doc: &'a Document,
    stack: Vec<NodeId>,
}

impl Iterator for Descendants<'_> {
    type Item = NodeId;

    fn next(&mut self) -> Option<NodeId> {
        let node = self.stack.pop()?;
        let children = &self.doc.nodes[node.0].children;
        self.stack.extend(children.iter().rev());
        Some(node)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glowline_style::{FontWeight, Rgb};

    #[test]
    fn append_paragraph_builds_p_with_text() {
        let mut doc = Document::new();
        let para = doc.append_paragraph("hello");
        assert!(doc.is_element(para));
        assert_eq!(doc.children(para).len(), 1);
        assert_eq!(doc.text_content(para), "hello");
        assert_eq!(doc.parent(para), Some(doc.root()));
    }

    #[test]
    fn insert_before_places_node_at_reference() {
        let mut doc = Document::new();
        let parent = doc.create_element("p");
        let a = doc.create_text("a");
        let c = doc.create_text("c");
        doc.append_child(parent, a);
        doc.append_child(parent, c);

        let b = doc.create_text("b");
        doc.insert_before(parent, b, c);
        assert_eq!(doc.children(parent), &[a, b, c]);
        assert_eq!(doc.text_content(parent), "abc");
    }

    #[test]
    fn insert_before_missing_reference_appends() {
        let mut doc = Document::new();
        let parent = doc.create_element("p");
        let orphan_ref = doc.create_text("elsewhere");
        let node = doc.create_text("x");
        doc.insert_before(parent, node, orphan_ref);
        assert_eq!(doc.children(parent), &[node]);
    }

    #[test]
    fn remove_detaches_from_parent() {
        let mut doc = Document::new();
        let parent = doc.create_element("p");
        let child = doc.create_text("x");
        doc.append_child(parent, child);
        doc.remove(child);
        assert!(doc.children(parent).is_empty());
        assert_eq!(doc.parent(child), None);
    }

    #[test]
    fn descendants_are_pre_order() {
        let mut doc = Document::new();
        let para = doc.create_element("p");
        let em = doc.create_element("em");
        let t1 = doc.create_text("one");
        let t2 = doc.create_text("two");
        doc.append_child(para, t1);
        doc.append_child(para, em);
        doc.append_child(em, t2);

        let order: Vec<NodeId> = doc.descendants(para).collect();
        assert_eq!(order, vec![t1, em, t2]);
    }

    #[test]
    fn elements_by_tag_in_document_order() {
        let mut doc = Document::new();
        let p1 = doc.append_paragraph("one");
        let div = doc.create_element("div");
        doc.append_child(doc.root(), div);
        let p2 = doc.append_paragraph("two");
        assert_eq!(doc.elements_by_tag("p"), vec![p1, p2]);
        assert_eq!(doc.elements_by_tag("div"), vec![div]);
    }

    #[test]
    fn glyph_style_round_trip() {
        let mut doc = Document::new();
        let glyph = doc.create_glyph("a");
        assert!(doc.glyph_style(glyph).is_empty());

        let style = GlyphStyle::default()
            .with_fg(Rgb::new(1, 2, 3))
            .with_weight(FontWeight::Bold);
        doc.set_glyph_style(glyph, style);
        assert_eq!(doc.glyph_style(glyph), style);
    }

    #[test]
    fn glyph_style_access_tolerates_non_glyph_nodes() {
        let mut doc = Document::new();
        let text = doc.create_text("x");
        assert!(doc.glyph_style(text).is_empty());
        doc.set_glyph_style(text, GlyphStyle::default().with_fg(Rgb::BLACK));
        assert!(doc.glyph_style(text).is_empty());
    }

    #[test]
    fn lines_never_span_containers_because_glyphs_are_scoped() {
        // glyphs() only enumerates within one container subtree.
        let mut doc = Document::new();
        let p1 = doc.create_element("p");
        let p2 = doc.create_element("p");
        let g1 = doc.create_glyph("a");
        let g2 = doc.create_glyph("b");
        doc.append_child(p1, g1);
        doc.append_child(p2, g2);
        assert_eq!(doc.glyphs(p1), vec![g1]);
        assert_eq!(doc.glyphs(p2), vec![g2]);
    }
}

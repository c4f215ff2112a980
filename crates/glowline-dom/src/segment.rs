#![forbid(unsafe_code)]

//! The Glyph Segmenter.
//!
//! Rewrites a container's descendant text so that every visible character
//! sits in its own glyph marker. The rewrite is destructive and becomes the
//! single source of truth for character position afterwards: the original
//! text nodes are gone, and document order over the markers is reading
//! order.
//!
//! "Visible character" means extended grapheme cluster, so multi-codepoint
//! clusters (emoji, combining sequences) stay intact as one marker.
//!
//! Re-invoking the segmenter on an already-segmented container must be
//! safe: repeat styling requests arrive against the same document, and
//! wrapping markers in further markers would corrupt both measurement and
//! character counts. An already-segmented container is detected up front
//! and left untouched.

use tracing::{debug, trace};
use unicode_segmentation::UnicodeSegmentation;

use crate::document::{Document, NodeId};

/// Check whether `container` already holds glyph markers.
#[must_use]
pub fn is_segmented(doc: &Document, container: NodeId) -> bool {
    doc.descendants(container).any(|id| doc.is_glyph(id))
}

/// Segment every text run under `node` into per-character glyph markers.
///
/// Idempotent: a container that already contains markers is skipped whole,
/// so invoking this twice yields the same characters in the same order as
/// invoking it once. Empty text runs contribute zero markers; whitespace
/// characters are segmented like any other.
pub fn segment(doc: &mut Document, node: NodeId) {
    if is_segmented(doc, node) {
        trace!(node = node.index(), "container already segmented, skipping");
        return;
    }
    wrap_node(doc, node);
    debug!(
        node = node.index(),
        glyphs = doc.glyphs(node).len(),
        "segmented container"
    );
}

fn wrap_node(doc: &mut Document, node: NodeId) {
    if doc.is_text(node) {
        replace_text_run(doc, node);
    } else if doc.is_element(node) {
        // Snapshot before recursing: replacing a text child mutates the
        // child list we would otherwise be iterating.
        let children = doc.children(node).to_vec();
        for child in children {
            wrap_node(doc, child);
        }
    }
    // Glyph markers are already atomic; nothing to do.
}

/// Replace one text run with a marker per grapheme, in place.
fn replace_text_run(doc: &mut Document, node: NodeId) {
    let Some(parent) = doc.parent(node) else {
        return;
    };
    let text = doc.text_content(node);
    for grapheme in text.graphemes(true) {
        let glyph = doc.create_glyph(grapheme);
        doc.insert_before(parent, glyph, node);
    }
    doc.remove(node);
}

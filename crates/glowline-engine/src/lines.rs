#![forbid(unsafe_code)]

//! The Line Grouper.
//!
//! Partitions a segmented container's glyph markers, in document order,
//! into maximal runs that occupy the same rendered line. The membership
//! signal is bottom-edge equality: glyphs of differing height (a bold run
//! from an earlier weight pass) still share a baseline-aligned bottom edge
//! when the layout engine placed them on one line, whereas top offsets
//! diverge. This is a measurement heuristic, not layout-engine truth; it
//! requires the container to be attached and visible when measured.
//!
//! All geometry is read in one batched provider call before any further
//! document writes. Interleaving reads and writes would force repeated
//! reflows in a real host - a performance hazard, not a correctness one.

use tracing::trace;

use glowline_core::GlyphExtent;
use glowline_dom::{Document, GeometryProvider, NodeId};

/// One rendered line: glyph markers in document order.
///
/// Transient - recomputed on every styling pass, never spanning two
/// containers.
pub type Line = Vec<NodeId>;

/// Group `container`'s glyph markers into rendered lines.
///
/// A glyph continues the current line only when its bottom edge equals the
/// previous glyph's exactly; any other value starts a new line. Degenerate
/// geometry (a detached or hidden container reporting all-zero extents)
/// therefore collapses to a single line rather than failing. An empty or
/// unsegmented container yields no lines.
#[must_use]
pub fn group_lines(
    doc: &Document,
    container: NodeId,
    geometry: &dyn GeometryProvider,
) -> Vec<Line> {
    let glyphs = doc.glyphs(container);
    if glyphs.is_empty() {
        return Vec::new();
    }

    let mut extents = geometry.measure(doc, container, &glyphs);
    // A provider returning too few extents must not drop glyphs from the
    // partition; unmeasured glyphs read as zero, like hidden containers.
    extents.resize(glyphs.len(), GlyphExtent::default());

    let mut lines = Vec::new();
    let mut current: Line = Vec::new();
    let mut last_bottom: Option<f64> = None;

    for (&glyph, extent) in glyphs.iter().zip(&extents) {
        let bottom = extent.bottom();
        if last_bottom != Some(bottom) && !current.is_empty() {
            lines.push(std::mem::take(&mut current));
        }
        current.push(glyph);
        last_bottom = Some(bottom);
    }
    if !current.is_empty() {
        lines.push(current);
    }

    trace!(
        container = container.index(),
        glyphs = glyphs.len(),
        lines = lines.len(),
        "grouped rendered lines"
    );
    lines
}

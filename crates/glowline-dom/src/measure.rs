#![forbid(unsafe_code)]

//! Glyph geometry measurement.
//!
//! Rendered line breaks are a layout-engine output; the only way to recover
//! them is to measure where each glyph marker ended up. That measurement is
//! host territory (a browser forces a reflow and reads offsets), so it sits
//! behind the [`GeometryProvider`] trait. The grouper asks for all extents
//! of a container in one batched call, keeping geometry reads separate from
//! later style writes.
//!
//! Two canned providers ship with the crate:
//! - [`MonospaceGeometry`] - deterministic character-wrap layout for
//!   headless use and tests
//! - [`FixedGeometry`] - replays extents measured elsewhere

use glowline_core::GlyphExtent;
use unicode_width::UnicodeWidthStr;

use crate::document::{Document, NodeId};

/// Source of rendered glyph geometry.
///
/// Callers must ensure the measured container is attached and visible in
/// the host environment; detached or hidden containers are expected to
/// report degenerate (zero) extents, which downstream grouping tolerates by
/// treating the whole container as a single line.
pub trait GeometryProvider {
    /// Measure the extents of `glyphs` (the container's markers in document
    /// order), one extent per glyph.
    fn measure(&self, doc: &Document, container: NodeId, glyphs: &[NodeId]) -> Vec<GlyphExtent>;
}

/// Deterministic monospace layout: wrap at a fixed column count.
///
/// Each glyph advances the cursor by its display width (CJK and wide emoji
/// count as two columns); a glyph that would overflow the column budget
/// starts the next line. This is a character-wrap model, intentionally
/// simple - it exists to drive the pipeline headless, not to imitate a
/// browser's word-wrapping.
#[derive(Debug, Clone, Copy)]
pub struct MonospaceGeometry {
    columns: usize,
    line_height: f64,
}

impl MonospaceGeometry {
    /// Default line height in abstract document units.
    pub const DEFAULT_LINE_HEIGHT: f64 = 16.0;

    /// Create a layout wrapping at `columns`. Zero columns disables
    /// wrapping (everything lands on one line).
    #[must_use]
    pub const fn new(columns: usize) -> Self {
        Self {
            columns,
            line_height: Self::DEFAULT_LINE_HEIGHT,
        }
    }

    /// Override the line height.
    #[must_use]
    pub const fn line_height(mut self, line_height: f64) -> Self {
        self.line_height = line_height;
        self
    }
}

impl GeometryProvider for MonospaceGeometry {
    fn measure(&self, doc: &Document, _container: NodeId, glyphs: &[NodeId]) -> Vec<GlyphExtent> {
        let mut extents = Vec::with_capacity(glyphs.len());
        let mut line = 0usize;
        let mut column = 0usize;

        for &glyph in glyphs {
            let width = doc.glyph_text(glyph).map_or(0, UnicodeWidthStr::width);
            if self.columns > 0 && column > 0 && column + width > self.columns {
                line += 1;
                column = 0;
            }
            extents.push(GlyphExtent::new(
                line as f64 * self.line_height,
                self.line_height,
            ));
            column += width;
        }
        extents
    }
}

/// Replays extents measured by some external layout pass.
///
/// Hosts that measure glyph geometry themselves (a real rendering engine)
/// hand the measurements over in marker document order. Missing entries
/// degrade to zero extents rather than failing.
#[derive(Debug, Clone, Default)]
pub struct FixedGeometry {
    extents: Vec<GlyphExtent>,
}

impl FixedGeometry {
    /// Wrap a list of extents in marker document order.
    #[must_use]
    pub fn new(extents: Vec<GlyphExtent>) -> Self {
        Self { extents }
    }
}

impl GeometryProvider for FixedGeometry {
    fn measure(&self, _doc: &Document, _container: NodeId, glyphs: &[NodeId]) -> Vec<GlyphExtent> {
        (0..glyphs.len())
            .map(|i| self.extents.get(i).copied().unwrap_or_default())
            .collect()
    }
}

#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! Line detection works entirely from measured glyph geometry: the layout
//! engine never reports where it wrapped a paragraph, so the wrap points are
//! reconstructed from the vertical extent of each rendered glyph.

/// The measured vertical extent of one glyph marker.
///
/// Uses document coordinates (origin at the top, y grows downward), the
/// same convention layout engines report offsets in.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GlyphExtent {
    /// Vertical offset of the glyph's top edge.
    pub top: f64,
    /// Rendered height of the glyph.
    pub height: f64,
}

impl GlyphExtent {
    /// Create a new extent.
    #[inline]
    #[must_use]
    pub const fn new(top: f64, height: f64) -> Self {
        Self { top, height }
    }

    /// Bottom edge of the glyph (`top + height`).
    ///
    /// Glyphs on one rendered line may differ in height (a bold run measures
    /// taller than its neighbors) but share a baseline-aligned bottom edge.
    /// Bottom-edge equality is therefore the line-membership signal, not the
    /// top offset.
    #[inline]
    #[must_use]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Check whether this extent carries no real measurement.
    ///
    /// Detached or hidden containers report zero geometry for every glyph.
    #[inline]
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        self.top == 0.0 && self.height == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bottom_is_top_plus_height() {
        let extent = GlyphExtent::new(32.0, 16.0);
        assert_eq!(extent.bottom(), 48.0);
    }

    #[test]
    fn differing_heights_can_share_a_bottom_edge() {
        // A taller bold glyph and a regular glyph on the same rendered line.
        let regular = GlyphExtent::new(10.0, 16.0);
        let bold = GlyphExtent::new(8.0, 18.0);
        assert_eq!(regular.bottom(), bold.bottom());
        assert_ne!(regular.top, bold.top);
    }

    #[test]
    fn zero_extent_is_degenerate() {
        assert!(GlyphExtent::default().is_degenerate());
        assert!(!GlyphExtent::new(0.0, 16.0).is_degenerate());
        assert!(!GlyphExtent::new(16.0, 0.0).is_degenerate());
    }
}

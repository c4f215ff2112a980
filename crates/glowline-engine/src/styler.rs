#![forbid(unsafe_code)]

//! The Line Styler.
//!
//! Two mutually exclusive treatments over grouped lines, plus reset:
//!
//! - **Gradient**: each line is colored by interpolating from the base text
//!   color toward the line's active color. Even-numbered lines are
//!   traversed reversed, so the gradient visually runs from the right edge
//!   and the eye follows a ping-pong reading direction down the paragraph.
//!   The active color is fixed per line and advances only after odd lines:
//!   one left/right pair shares a color.
//! - **Weight**: even lines bold, odd lines regular. With `preserve_color`
//!   the pass merges over an existing gradient; without it, prior per-glyph
//!   coloring is cleared first.
//!
//! The alternation counters are request-scoped accumulators threaded
//! through [`StyleCursor`], not styler state: they continue across every
//! container of one request and reset with the next. That keeps each pass a
//! pure function of (lines, request, cursor).

use smallvec::SmallVec;
use tracing::trace;

use glowline_dom::{Document, NodeId};
use glowline_style::{FontWeight, GlyphStyle, Rgb};

use crate::lines::Line;

/// Parameters of a gradient pass.
#[derive(Debug, Clone, PartialEq)]
pub struct GradientSpec {
    /// Line colors, cycled one per left/right line pair. Non-empty;
    /// validated at the request boundary.
    pub colors: Vec<Rgb>,
    /// Base text color the gradient interpolates away from.
    pub text_color: Rgb,
    /// Scale factor: how much of a line's length the full transition spans
    /// before `t` goes negative and extrapolates. Positive; validated at
    /// the request boundary.
    pub size: f64,
}

/// Request-scoped alternation counters.
///
/// One cursor lives for the duration of a styling request and is threaded
/// through every container's pass, so parity and color cycling continue
/// across paragraph boundaries exactly as lines are encountered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleCursor {
    /// Lines processed so far in this request.
    pub line_number: usize,
    /// Index of the active color in the gradient color list.
    pub color_index: usize,
}

/// Apply a gradient pass to one container's lines.
///
/// For each glyph at processing position `i` in a line of length `n`,
/// `t = 1 - i / (n * size / 50)`; the glyph's foreground becomes
/// `lerp(text_color, active_color, t)` per channel, floored. `t` starts at
/// exactly 1 (the active color) and is deliberately unclamped below zero.
pub fn style_gradient(
    doc: &mut Document,
    lines: &[Line],
    spec: &GradientSpec,
    cursor: &mut StyleCursor,
) {
    if spec.colors.is_empty() {
        return;
    }

    for line in lines {
        let active = spec.colors[cursor.color_index % spec.colors.len()];
        let left_aligned = cursor.line_number % 2 == 0;

        // Left-aligned (even) lines run the gradient from the right edge.
        let mut order: SmallVec<[NodeId; 64]> = SmallVec::from_slice(line);
        if left_aligned {
            order.reverse();
        }

        let scale = line.len() as f64 * spec.size / 50.0;
        for (i, &glyph) in order.iter().enumerate() {
            let t = 1.0 - (i as f64 / scale);
            let fg = spec.text_color.lerp_toward(active, t);
            let styled = doc.glyph_style(glyph).with_fg(fg);
            doc.set_glyph_style(glyph, styled);
        }

        // Color advances after every left/right pair; line number after
        // every line.
        if !left_aligned {
            cursor.color_index = (cursor.color_index + 1) % spec.colors.len();
        }
        cursor.line_number += 1;
    }
    trace!(lines = lines.len(), "gradient pass complete");
}

/// Apply a weight pass to one container's lines.
///
/// Even lines render bold, odd lines regular. When `preserve_color` is
/// false, previously applied per-glyph coloring is cleared; when true the
/// weight merges over it, which is how a weight pass layers on top of an
/// already-colored page.
pub fn style_weight(
    doc: &mut Document,
    lines: &[Line],
    preserve_color: bool,
    cursor: &mut StyleCursor,
) {
    for line in lines {
        let weight = if cursor.line_number % 2 == 0 {
            FontWeight::Bold
        } else {
            FontWeight::Regular
        };
        let overlay = GlyphStyle::default().with_weight(weight);

        for &glyph in line {
            let base = if preserve_color {
                doc.glyph_style(glyph)
            } else {
                doc.glyph_style(glyph).cleared_fg()
            };
            doc.set_glyph_style(glyph, base.merge(overlay));
        }
        cursor.line_number += 1;
    }
    trace!(lines = lines.len(), "weight pass complete");
}

/// Reset one container's lines to a uniform text color.
///
/// Assigns the flat color directly instead of replaying the gradient pass
/// with a zero size, which would divide by zero on any non-empty line.
/// Matching the observed behavior of a gradient-based reset, only the
/// foreground is touched; a weight assigned by an earlier pass survives.
pub fn style_reset(doc: &mut Document, lines: &[Line], text_color: Rgb) {
    for line in lines {
        for &glyph in line {
            let styled = doc.glyph_style(glyph).with_fg(text_color);
            doc.set_glyph_style(glyph, styled);
        }
    }
    trace!(lines = lines.len(), "reset pass complete");
}

/// Clear all applied styling entirely, leaving markers unstyled.
///
/// Not reachable from the wire commands; hosts use it to return a document
/// to its pre-styling appearance without tearing out the markers.
pub fn clear_styles(doc: &mut Document, lines: &[Line]) {
    for line in lines {
        for &glyph in line {
            doc.set_glyph_style(glyph, GlyphStyle::EMPTY);
        }
    }
}

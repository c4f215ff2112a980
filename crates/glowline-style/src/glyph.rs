#![forbid(unsafe_code)]

//! Per-glyph style values.
//!
//! A [`GlyphStyle`] is applied to a glyph marker atomically, as a whole
//! value, rather than as incremental property pokes. Composition between
//! styling passes (a weight pass layered over an existing gradient) is then
//! a structural [`merge`](GlyphStyle::merge) instead of implicit mutation.

use crate::color::Rgb;

/// Font weight assigned to a glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FontWeight {
    /// Normal weight (CSS `400`).
    Regular,
    /// Bold weight (CSS `600`).
    Bold,
}

impl FontWeight {
    /// The CSS `font-weight` value a host should render this as.
    #[inline]
    #[must_use]
    pub const fn css_value(self) -> &'static str {
        match self {
            Self::Regular => "400",
            Self::Bold => "600",
        }
    }
}

/// The visual style of one glyph.
///
/// `None` in a field means "not set by any styling pass": the glyph keeps
/// whatever the surrounding document would render it as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct GlyphStyle {
    /// Foreground color, if a pass has assigned one.
    pub fg: Option<Rgb>,
    /// Font weight, if a pass has assigned one.
    pub weight: Option<FontWeight>,
}

impl GlyphStyle {
    /// A style with nothing set.
    pub const EMPTY: Self = Self {
        fg: None,
        weight: None,
    };

    /// Set the foreground color.
    #[inline]
    #[must_use]
    pub const fn with_fg(mut self, fg: Rgb) -> Self {
        self.fg = Some(fg);
        self
    }

    /// Set the font weight.
    #[inline]
    #[must_use]
    pub const fn with_weight(mut self, weight: FontWeight) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Drop any assigned foreground color, keeping the weight.
    #[inline]
    #[must_use]
    pub const fn cleared_fg(mut self) -> Self {
        self.fg = None;
        self
    }

    /// Merge `overlay` over this style; set fields in the overlay win.
    #[inline]
    #[must_use]
    pub fn merge(self, overlay: Self) -> Self {
        Self {
            fg: overlay.fg.or(self.fg),
            weight: overlay.weight.or(self.weight),
        }
    }

    /// Check whether no pass has styled this glyph.
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.weight.is_none()
    }
}

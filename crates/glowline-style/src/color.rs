#![forbid(unsafe_code)]

//! Color types and interpolation.
//!
//! The gradient math is a plain per-channel linear interpolation. Two rules
//! here are observed behavior and deliberately preserved:
//!
//! - [`lerp`] does not clamp `t`. Callers produce `t` values outside `[0, 1]`
//!   on purpose (a gradient that spans less than a full line extrapolates
//!   past its endpoint color), so clamping would change rendered output.
//! - Channel results are floored, then saturated into `0..=255` when
//!   materialized as [`Rgb`], matching how a renderer treats out-of-range
//!   `rgb()` components.
//!
//! Resolution of non-hex CSS color strings (keyword names, exotic
//! functional forms) needs a rendering environment. That capability is kept
//! behind the [`ColorResolver`] trait so everything in this module stays
//! pure and testable headless.

use tracing::debug;

/// Linear interpolation between `v0` and `v1` at parameter `t`.
///
/// `t` is intentionally unclamped: values outside `[0, 1]` extrapolate.
#[inline]
#[must_use]
pub fn lerp(v0: f64, v1: f64, t: f64) -> f64 {
    v0 * (1.0 - t) + v1 * t
}

/// RGB color (opaque).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rgb {
    /// Red channel (0–255).
    pub r: u8,
    /// Green channel (0–255).
    pub g: u8,
    /// Blue channel (0–255).
    pub b: u8,
}

impl Rgb {
    /// Black, the resolution fallback of last resort.
    pub const BLACK: Self = Self::new(0, 0, 0);

    /// White.
    pub const WHITE: Self = Self::new(255, 255, 255);

    /// Create a new RGB color.
    #[inline]
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Decode a 6-hex-digit color string, with or without a leading `#`.
    ///
    /// Returns `None` for any other length or for non-hex characters;
    /// callers fall back through [`resolve_color`] rather than guessing.
    #[must_use]
    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
        let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
        let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
        Some(Self::new(r, g, b))
    }

    /// Encode as a lowercase `#rrggbb` hex string.
    #[must_use]
    pub fn to_hex(self) -> String {
        format!("#{:02x}{:02x}{:02x}", self.r, self.g, self.b)
    }

    /// Interpolate each channel toward `other` at parameter `t`.
    ///
    /// `t` is unclamped (see [`lerp`]); each resulting channel is floored
    /// and saturated into the valid byte range.
    #[must_use]
    pub fn lerp_toward(self, other: Self, t: f64) -> Self {
        Self::new(
            channel(lerp(self.r as f64, other.r as f64, t)),
            channel(lerp(self.g as f64, other.g as f64, t)),
            channel(lerp(self.b as f64, other.b as f64, t)),
        )
    }
}

/// Floor an interpolated channel value and saturate it into `0..=255`.
#[inline]
fn channel(value: f64) -> u8 {
    value.floor().clamp(0.0, 255.0) as u8
}

/// Resolution of CSS color strings by the host rendering environment.
///
/// Hex strings and `rgb()`/`rgba()` literals are parsed without help; any
/// other form (keyword names like `rebeccapurple`, `hsl()`, ...) is handed
/// to the host, which can resolve it the way a browser does: assign the
/// string to a style property and read back the computed numeric form.
pub trait ColorResolver {
    /// Resolve a CSS color string to a concrete RGB value.
    ///
    /// Returns `None` if the environment cannot resolve the string.
    fn resolve(&self, color: &str) -> Option<Rgb>;

    /// The environment's default foreground (computed body text) color.
    ///
    /// Used as the gradient base when the caller does not supply one.
    fn default_foreground(&self) -> Rgb {
        Rgb::BLACK
    }
}

/// A resolver for hosts with no rendering environment.
///
/// Resolves nothing; [`resolve_color`] then falls back to black.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoEnvironment;

impl ColorResolver for NoEnvironment {
    fn resolve(&self, _color: &str) -> Option<Rgb> {
        None
    }
}

/// Resolve a color string through the full fallback chain.
///
/// Order: 6-digit hex, then an `rgb()`/`rgba()` literal, then the injected
/// resolver, then black. Never fails upward: a malformed color string
/// degrades to black rather than aborting a styling request.
#[must_use]
pub fn resolve_color(input: &str, resolver: &dyn ColorResolver) -> Rgb {
    let input = input.trim();
    if input.is_empty() {
        return Rgb::BLACK;
    }
    if let Some(rgb) = Rgb::from_hex(input) {
        return rgb;
    }
    if let Some(rgb) = parse_rgb_literal(input) {
        return rgb;
    }
    if let Some(rgb) = resolver.resolve(input) {
        return rgb;
    }
    debug!(color = input, "unresolvable color string, falling back to black");
    Rgb::BLACK
}

/// Parse an `rgb(r, g, b)` or `rgba(r, g, b, a)` literal.
///
/// Only the three leading integer components are read; an alpha component
/// is ignored. Components outside `0..=255` fail the parse.
fn parse_rgb_literal(input: &str) -> Option<Rgb> {
    let lower = input.to_ascii_lowercase();
    let body = lower
        .strip_prefix("rgba(")
        .or_else(|| lower.strip_prefix("rgb("))?;
    let body = body.strip_suffix(')').unwrap_or(body);

    let mut components = body.split(',').map(str::trim);
    let r = components.next()?.parse::<u8>().ok()?;
    let g = components.next()?.parse::<u8>().ok()?;
    let b = components.next()?.parse::<u8>().ok()?;
    Some(Rgb::new(r, g, b))
}

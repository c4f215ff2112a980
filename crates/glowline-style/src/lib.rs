#![forbid(unsafe_code)]

//! Color and style primitives for Glowline.
//!
//! This crate provides the numeric half of the styling pipeline:
//! - [`Rgb`] - an 8-bit-per-channel color triplet
//! - [`lerp`] - unclamped linear interpolation, applied per channel
//! - [`ColorResolver`] - injectable resolution of CSS color strings, so the
//!   interpolator itself stays pure and testable without a rendering
//!   environment
//! - [`GlyphStyle`] - the style value applied atomically to one glyph
//!
//! # Example
//! ```
//! use glowline_style::{lerp, GlyphStyle, FontWeight, Rgb};
//!
//! let blue = Rgb::from_hex("#0000FF").unwrap();
//! let mid = Rgb::BLACK.lerp_toward(blue, 0.5);
//! assert_eq!(mid, Rgb::new(0, 0, 127));
//!
//! let style = GlyphStyle::default().with_fg(mid).with_weight(FontWeight::Bold);
//! assert_eq!(style.weight, Some(FontWeight::Bold));
//! # let _ = lerp(0.0, 1.0, 0.5);
//! ```

pub mod color;
pub mod glyph;

pub use color::{lerp, resolve_color, ColorResolver, NoEnvironment, Rgb};
pub use glyph::{FontWeight, GlyphStyle};

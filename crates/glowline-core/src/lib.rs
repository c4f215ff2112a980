#![forbid(unsafe_code)]

//! Core primitives for Glowline.
//!
//! This crate provides the two foundations everything else builds on:
//! - [`GlyphExtent`] - the measured vertical geometry of one glyph marker
//! - [`EngineState`] - explicit lifecycle state for the styling engine
//!
//! It has no internal dependencies and no knowledge of documents or styles.

pub mod geometry;
pub mod lifecycle;

pub use geometry::GlyphExtent;
pub use lifecycle::EngineState;

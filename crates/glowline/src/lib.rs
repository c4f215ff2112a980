#![forbid(unsafe_code)]

//! Glowline public facade crate.
//!
//! Glowline re-renders wrapped paragraph text. It rewrites each paragraph
//! into per-character glyph markers, reconstructs the rendered line breaks
//! from measured glyph geometry, and styles the detected lines with an
//! alternating-direction color gradient or an alternating font weight.
//!
//! This crate re-exports the stable surface from the internal crates and
//! offers a lightweight prelude.
//!
//! # Example
//! ```
//! use glowline::prelude::*;
//!
//! let mut doc = Document::new();
//! doc.append_paragraph("text that wraps across rendered lines");
//! let paragraphs = doc.elements_by_tag("p");
//!
//! let engine = Engine::new(MonospaceGeometry::new(16), NoEnvironment);
//! let outcome = engine
//!     .handle_json(
//!         &mut doc,
//!         &paragraphs,
//!         r##"{
//!             "command": "apply_gradient",
//!             "colors": ["#0000FF", "#FF0000"],
//!             "color_text": "#000000",
//!             "gradient_size": 50
//!         }"##,
//!     )
//!     .unwrap();
//! assert!(outcome.lines >= 2);
//! ```

// --- Core re-exports -------------------------------------------------------

pub use glowline_core::{EngineState, GlyphExtent};

// --- Document re-exports ---------------------------------------------------

pub use glowline_dom::{
    is_segmented, segment, Document, FixedGeometry, GeometryProvider, MonospaceGeometry, NodeId,
    NodeKind,
};

// --- Style re-exports ------------------------------------------------------

pub use glowline_style::{
    lerp, resolve_color, ColorResolver, FontWeight, GlyphStyle, NoEnvironment, Rgb,
};

// --- Engine re-exports -----------------------------------------------------

pub use glowline_engine::{
    group_lines, style_gradient, style_reset, style_weight, Engine, EngineError, GradientSpec,
    Line, StyleCommand, StyleCursor, StyleOutcome, StyleRequest,
};

/// Commonly used types, importable in one line.
pub mod prelude {
    pub use crate::{
        segment, ColorResolver, Document, Engine, FontWeight, GeometryProvider, GlyphStyle,
        MonospaceGeometry, NoEnvironment, NodeId, Rgb, StyleCommand, StyleOutcome,
    };
}

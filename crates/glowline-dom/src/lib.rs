#![forbid(unsafe_code)]

//! Document tree and glyph segmentation for Glowline.
//!
//! This crate owns the mutable side of the pipeline:
//! - [`Document`] - an arena-backed tree of element, text, and glyph nodes
//! - [`segment`] - the Glyph Segmenter, rewriting text runs into one glyph
//!   marker per visible character
//! - [`GeometryProvider`] - the measurement seam between the engine and the
//!   host's layout, with deterministic implementations for headless use
//!
//! # Example
//! ```
//! use glowline_dom::{segment, Document};
//!
//! let mut doc = Document::new();
//! let para = doc.append_paragraph("wrap me");
//! segment(&mut doc, para);
//!
//! // One marker per visible character, whitespace included.
//! assert_eq!(doc.glyphs(para).len(), 7);
//! assert_eq!(doc.text_content(para), "wrap me");
//! ```

pub mod document;
pub mod measure;
pub mod segment;

pub use document::{Document, NodeId, NodeKind};
pub use measure::{FixedGeometry, GeometryProvider, MonospaceGeometry};
pub use segment::{is_segmented, segment};

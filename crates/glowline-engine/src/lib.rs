#![forbid(unsafe_code)]

//! The Glowline styling engine.
//!
//! Composes the pipeline invoked once per styling request:
//! segmentation (from `glowline-dom`) → line grouping → line styling.
//!
//! - [`lines`] - the Line Grouper: partitions a segmented container's glyph
//!   markers into rendered lines from measured geometry
//! - [`styler`] - the Line Styler: gradient, weight, and reset passes with
//!   ping-pong parity alternation
//! - [`request`] - the wire [`StyleCommand`] messages and their validation
//!   into a resolved [`StyleRequest`]
//! - [`engine`] - the [`Engine`] entry point hosts invoke
//!
//! # Example
//! ```
//! use glowline_dom::{Document, MonospaceGeometry};
//! use glowline_engine::{Engine, StyleCommand};
//! use glowline_style::NoEnvironment;
//!
//! let mut doc = Document::new();
//! doc.append_paragraph("a paragraph that will wrap");
//! let containers = doc.elements_by_tag("p");
//!
//! let engine = Engine::new(MonospaceGeometry::new(10), NoEnvironment);
//! let outcome = engine
//!     .handle(
//!         &mut doc,
//!         &containers,
//!         StyleCommand::ApplyGradient {
//!             colors: vec!["#0000FF".into(), "#FF0000".into()],
//!             color_text: "#000000".into(),
//!             gradient_size: 50.0,
//!         },
//!     )
//!     .unwrap();
//! assert_eq!(outcome.glyphs, 26);
//! ```

pub mod engine;
pub mod lines;
pub mod request;
pub mod styler;

pub use engine::{Engine, StyleOutcome};
pub use lines::{group_lines, Line};
pub use request::{EngineError, StyleCommand, StyleRequest};
pub use styler::{style_gradient, style_reset, style_weight, GradientSpec, StyleCursor};

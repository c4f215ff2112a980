#![forbid(unsafe_code)]

//! Wire commands and request validation.
//!
//! The host delivers styling requests as small tagged messages (the same
//! shapes its settings UI emits). [`StyleCommand`] is that wire form;
//! [`StyleRequest`] is the validated, color-resolved form the pipeline
//! consumes. Validation happens once at this boundary: the styler and
//! interpolator never re-check color lists or gradient sizes.
//!
//! Color strings on the wire never fail a request. A malformed color
//! degrades through the resolution chain to black (see
//! `glowline_style::resolve_color`); only structurally unusable requests -
//! an empty color list, a non-positive gradient size - are rejected.

use serde::{Deserialize, Serialize};

use glowline_style::{resolve_color, ColorResolver, Rgb};

use crate::styler::GradientSpec;

/// A styling request as delivered by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "command", rename_all = "snake_case")]
pub enum StyleCommand {
    /// Color detected lines with an alternating-direction gradient.
    ApplyGradient {
        /// Line colors as hex strings, cycled per left/right line pair.
        colors: Vec<String>,
        /// Base text color; empty means "use the environment's default".
        #[serde(default)]
        color_text: String,
        /// Gradient span scale factor; must be positive.
        gradient_size: f64,
    },
    /// Alternate font weight line by line.
    ApplyWeight {
        /// Keep per-glyph coloring from an earlier gradient pass.
        #[serde(rename = "preserveColor")]
        preserve_color: bool,
    },
    /// Return every glyph to a uniform text color.
    Reset {
        /// Target text color; empty means "use the environment's default".
        #[serde(default)]
        color_text: String,
    },
}

impl StyleCommand {
    /// Parse a raw JSON message from the host.
    pub fn from_json(message: &str) -> Result<Self, EngineError> {
        serde_json::from_str(message).map_err(EngineError::Message)
    }

    /// Validate and resolve into a [`StyleRequest`].
    pub fn validate(self, resolver: &dyn ColorResolver) -> Result<StyleRequest, EngineError> {
        match self {
            Self::ApplyGradient {
                colors,
                color_text,
                gradient_size,
            } => {
                if colors.is_empty() {
                    return Err(EngineError::EmptyColorList);
                }
                if !gradient_size.is_finite() || gradient_size <= 0.0 {
                    return Err(EngineError::InvalidGradientSize(gradient_size));
                }
                let colors = colors
                    .iter()
                    .map(|color| resolve_color(color, resolver))
                    .collect();
                Ok(StyleRequest::Gradient(GradientSpec {
                    colors,
                    text_color: resolve_text_color(&color_text, resolver),
                    size: gradient_size,
                }))
            }
            Self::ApplyWeight { preserve_color } => {
                Ok(StyleRequest::Weight { preserve_color })
            }
            Self::Reset { color_text } => Ok(StyleRequest::Reset {
                text_color: resolve_text_color(&color_text, resolver),
            }),
        }
    }
}

/// A validated styling request, ready for the pipeline.
#[derive(Debug, Clone, PartialEq)]
pub enum StyleRequest {
    /// Gradient coloring.
    Gradient(GradientSpec),
    /// Alternating font weight.
    Weight {
        /// Keep existing per-glyph coloring.
        preserve_color: bool,
    },
    /// Uniform recoloring.
    Reset {
        /// Resolved target color.
        text_color: Rgb,
    },
}

/// Errors a styling request can fail with at the boundary.
#[derive(Debug)]
pub enum EngineError {
    /// A gradient request carried no colors to cycle through.
    EmptyColorList,
    /// A gradient request carried a non-positive or non-finite size,
    /// which would degenerate the interpolation parameter.
    InvalidGradientSize(f64),
    /// The host message could not be parsed.
    Message(serde_json::Error),
}

impl std::fmt::Display for EngineError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyColorList => write!(f, "gradient request with an empty color list"),
            Self::InvalidGradientSize(size) => {
                write!(f, "gradient size must be positive, got {size}")
            }
            Self::Message(err) => write!(f, "malformed styling message: {err}"),
        }
    }
}

impl std::error::Error for EngineError {}

impl From<serde_json::Error> for EngineError {
    fn from(err: serde_json::Error) -> Self {
        Self::Message(err)
    }
}

/// The wire's text color is optional in practice: an absent or empty value
/// falls back to the environment's computed default foreground.
fn resolve_text_color(color_text: &str, resolver: &dyn ColorResolver) -> Rgb {
    if color_text.trim().is_empty() {
        resolver.default_foreground()
    } else {
        resolve_color(color_text, resolver)
    }
}

#![forbid(unsafe_code)]

//! The engine entry point.
//!
//! An [`Engine`] binds the two host capabilities the pipeline needs - a
//! [`GeometryProvider`] for measurement and a [`ColorResolver`] for CSS
//! color strings - and runs the full pass for each request:
//! segment (idempotent) → measure → group → style, container by container,
//! with one request-scoped [`StyleCursor`] threading parity across all of
//! them.
//!
//! Everything is synchronous and single-writer: a request runs to
//! completion before control returns, and a later request simply overwrites
//! the visual state of an earlier one. The engine itself is stateless
//! between requests; only the document's rewritten subtree persists.

use tracing::debug;

use glowline_core::EngineState;
use glowline_dom::{segment, Document, GeometryProvider, NodeId};
use glowline_style::ColorResolver;

use crate::lines::group_lines;
use crate::request::{EngineError, StyleCommand, StyleRequest};
use crate::styler::{style_gradient, style_reset, style_weight, StyleCursor};

/// Counts of what a styling request touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StyleOutcome {
    /// Containers processed.
    pub containers: usize,
    /// Rendered lines detected across all containers.
    pub lines: usize,
    /// Glyph markers styled.
    pub glyphs: usize,
}

/// The styling engine a host constructs once per document.
///
/// Construction is the lifecycle gate: a constructed engine is `Ready`,
/// and "inject once" is the host holding exactly one `Engine` per
/// document rather than re-checking a module flag.
#[derive(Debug)]
pub struct Engine<G, R> {
    geometry: G,
    resolver: R,
    state: EngineState,
}

impl<G: GeometryProvider, R: ColorResolver> Engine<G, R> {
    /// Create a ready engine from the host's capabilities.
    pub fn new(geometry: G, resolver: R) -> Self {
        Self {
            geometry,
            resolver,
            state: EngineState::Ready,
        }
    }

    /// Current lifecycle state.
    #[inline]
    #[must_use]
    pub const fn state(&self) -> EngineState {
        self.state
    }

    /// Check whether the engine accepts requests.
    #[inline]
    #[must_use]
    pub const fn is_ready(&self) -> bool {
        self.state.is_ready()
    }

    /// Parse and run a raw JSON message from the host.
    pub fn handle_json(
        &self,
        doc: &mut Document,
        containers: &[NodeId],
        message: &str,
    ) -> Result<StyleOutcome, EngineError> {
        let command = StyleCommand::from_json(message)?;
        self.handle(doc, containers, command)
    }

    /// Validate and run a wire command against the given containers.
    pub fn handle(
        &self,
        doc: &mut Document,
        containers: &[NodeId],
        command: StyleCommand,
    ) -> Result<StyleOutcome, EngineError> {
        let request = command.validate(&self.resolver)?;
        Ok(self.apply(doc, containers, &request))
    }

    /// Run a validated request. Infallible: color resolution and size
    /// checks already happened at the boundary.
    pub fn apply(
        &self,
        doc: &mut Document,
        containers: &[NodeId],
        request: &StyleRequest,
    ) -> StyleOutcome {
        let mut cursor = StyleCursor::default();
        let mut outcome = StyleOutcome::default();

        for &container in containers {
            segment(doc, container);
            let lines = group_lines(doc, container, &self.geometry);

            match request {
                StyleRequest::Gradient(spec) => {
                    style_gradient(doc, &lines, spec, &mut cursor);
                }
                StyleRequest::Weight { preserve_color } => {
                    style_weight(doc, &lines, *preserve_color, &mut cursor);
                }
                StyleRequest::Reset { text_color } => {
                    style_reset(doc, &lines, *text_color);
                }
            }

            outcome.containers += 1;
            outcome.lines += lines.len();
            outcome.glyphs += lines.iter().map(Vec::len).sum::<usize>();
        }

        debug!(
            containers = outcome.containers,
            lines = outcome.lines,
            glyphs = outcome.glyphs,
            "styling request applied"
        );
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use glowline_dom::MonospaceGeometry;
    use glowline_style::{FontWeight, NoEnvironment, Rgb};

    fn engine(columns: usize) -> Engine<MonospaceGeometry, NoEnvironment> {
        Engine::new(MonospaceGeometry::new(columns), NoEnvironment)
    }

    fn gradient_command() -> StyleCommand {
        StyleCommand::ApplyGradient {
            colors: vec!["#0000FF".into(), "#FF0000".into()],
            color_text: "#000000".into(),
            gradient_size: 50.0,
        }
    }

    #[test]
    fn constructed_engine_is_ready() {
        let engine = engine(10);
        assert!(engine.is_ready());
        assert_eq!(engine.state(), EngineState::Ready);
    }

    #[test]
    fn two_line_gradient_scenario() {
        // 18 characters wrapped at 10 columns: lines of 10 and 8 glyphs.
        let mut doc = Document::new();
        let para = doc.append_paragraph("abcdefghijklmnopqr");
        let containers = doc.elements_by_tag("p");

        let outcome = engine(10)
            .handle(&mut doc, &containers, gradient_command())
            .unwrap();
        assert_eq!(outcome.containers, 1);
        assert_eq!(outcome.lines, 2);
        assert_eq!(outcome.glyphs, 18);

        let glyphs = doc.glyphs(para);
        let blue = Rgb::new(0, 0, 255);

        // Line 0 (even) was traversed in reverse: its last document-order
        // glyph got t = 1 (pure blue) and t falls moving left.
        assert_eq!(doc.glyph_style(glyphs[9]).fg, Some(blue));
        // First glyph processed at i = 9: t = 1 - 9/10 = 0.1.
        assert_eq!(doc.glyph_style(glyphs[0]).fg, Some(Rgb::new(0, 0, 25)));

        // Line 1 (odd) ran forward with the same color: the index only
        // advances after the odd line of each pair.
        assert_eq!(doc.glyph_style(glyphs[10]).fg, Some(blue));
        // Its last glyph: t = 1 - 7/8 = 0.125.
        assert_eq!(doc.glyph_style(glyphs[17]).fg, Some(Rgb::new(0, 0, 31)));
    }

    #[test]
    fn repeat_requests_do_not_duplicate_markers() {
        let mut doc = Document::new();
        doc.append_paragraph("stable glyph counts");
        let containers = doc.elements_by_tag("p");
        let engine = engine(8);

        let first = engine
            .handle(&mut doc, &containers, gradient_command())
            .unwrap();
        let second = engine
            .handle(&mut doc, &containers, gradient_command())
            .unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn parity_continues_across_paragraphs() {
        // Two one-line paragraphs form one left/right pair: the second
        // paragraph's line is odd and shares the first color.
        let mut doc = Document::new();
        let p1 = doc.append_paragraph("aa");
        let p2 = doc.append_paragraph("bb");

        engine(10)
            .handle(&mut doc, &[p1, p2], gradient_command())
            .unwrap();

        let blue = Rgb::new(0, 0, 255);
        // p2's line ran forward (odd): first glyph is pure blue.
        assert_eq!(doc.glyph_style(doc.glyphs(p2)[0]).fg, Some(blue));
    }

    #[test]
    fn weight_request_over_json() {
        let mut doc = Document::new();
        let para = doc.append_paragraph("abcd");
        let containers = vec![para];

        let outcome = engine(2)
            .handle_json(
                &mut doc,
                &containers,
                r#"{"command": "apply_weight", "preserveColor": false}"#,
            )
            .unwrap();
        assert_eq!(outcome.lines, 2);

        let glyphs = doc.glyphs(para);
        assert_eq!(doc.glyph_style(glyphs[0]).weight, Some(FontWeight::Bold));
        assert_eq!(
            doc.glyph_style(glyphs[2]).weight,
            Some(FontWeight::Regular)
        );
    }

    #[test]
    fn reset_request_recolors_uniformly() {
        let mut doc = Document::new();
        let para = doc.append_paragraph("abcdef");
        let containers = vec![para];
        let engine = engine(3);

        engine
            .handle(&mut doc, &containers, gradient_command())
            .unwrap();
        engine
            .handle_json(
                &mut doc,
                &containers,
                r##"{"command": "reset", "color_text": "#222222"}"##,
            )
            .unwrap();

        for glyph in doc.glyphs(para) {
            assert_eq!(doc.glyph_style(glyph).fg, Some(Rgb::new(34, 34, 34)));
        }
    }

    #[test]
    fn empty_document_request_is_a_noop() {
        let mut doc = Document::new();
        let outcome = engine(10).handle(&mut doc, &[], gradient_command()).unwrap();
        assert_eq!(outcome, StyleOutcome::default());
    }

    #[test]
    fn invalid_requests_surface_errors() {
        let mut doc = Document::new();
        doc.append_paragraph("text");
        let containers = doc.elements_by_tag("p");
        let engine = engine(10);

        let err = engine
            .handle(
                &mut doc,
                &containers,
                StyleCommand::ApplyGradient {
                    colors: Vec::new(),
                    color_text: String::new(),
                    gradient_size: 50.0,
                },
            )
            .unwrap_err();
        assert!(matches!(err, EngineError::EmptyColorList));

        let err = engine
            .handle_json(&mut doc, &containers, r#"{"command": "add_auto_domain"}"#)
            .unwrap_err();
        assert!(matches!(err, EngineError::Message(_)));
    }
}

//! End-to-end pipeline tests: wire message in, styled document out.

use glowline_dom::{Document, MonospaceGeometry};
use glowline_engine::{Engine, StyleCommand};
use glowline_style::{FontWeight, NoEnvironment, Rgb};

fn page() -> (Document, Vec<glowline_dom::NodeId>) {
    let mut doc = Document::new();
    doc.append_paragraph("The quick brown fox jumps over");
    doc.append_paragraph("the lazy dog");
    let containers = doc.elements_by_tag("p");
    (doc, containers)
}

#[test]
fn gradient_then_weight_layers_when_color_is_preserved() {
    let (mut doc, containers) = page();
    let engine = Engine::new(MonospaceGeometry::new(12), NoEnvironment);

    engine
        .handle_json(
            &mut doc,
            &containers,
            r##"{
                "command": "apply_gradient",
                "colors": ["#0000FF", "#FF0000"],
                "color_text": "#000000",
                "gradient_size": 50
            }"##,
        )
        .unwrap();

    engine
        .handle_json(
            &mut doc,
            &containers,
            r#"{"command": "apply_weight", "preserveColor": true}"#,
        )
        .unwrap();

    // Every glyph keeps its gradient color and gained a weight.
    for &container in &containers {
        for glyph in doc.glyphs(container) {
            let style = doc.glyph_style(glyph);
            assert!(style.fg.is_some(), "gradient color was erased");
            assert!(style.weight.is_some(), "weight pass missed a glyph");
        }
    }
}

#[test]
fn weight_without_preserve_erases_gradient_coloring() {
    let (mut doc, containers) = page();
    let engine = Engine::new(MonospaceGeometry::new(12), NoEnvironment);

    engine
        .handle(
            &mut doc,
            &containers,
            StyleCommand::ApplyGradient {
                colors: vec!["#00FF00".into()],
                color_text: "#000000".into(),
                gradient_size: 50.0,
            },
        )
        .unwrap();
    engine
        .handle(
            &mut doc,
            &containers,
            StyleCommand::ApplyWeight {
                preserve_color: false,
            },
        )
        .unwrap();

    for &container in &containers {
        for glyph in doc.glyphs(container) {
            assert_eq!(doc.glyph_style(glyph).fg, None);
        }
    }
}

#[test]
fn weight_parity_spans_paragraph_boundaries() {
    // First paragraph wraps to 3 lines at 12 columns (30 chars), so the
    // second paragraph's single line is line 3 of the request: regular.
    let (mut doc, containers) = page();
    let engine = Engine::new(MonospaceGeometry::new(12), NoEnvironment);

    let outcome = engine
        .handle(
            &mut doc,
            &containers,
            StyleCommand::ApplyWeight {
                preserve_color: false,
            },
        )
        .unwrap();
    assert_eq!(outcome.lines, 4);

    for glyph in doc.glyphs(containers[1]) {
        assert_eq!(doc.glyph_style(glyph).weight, Some(FontWeight::Regular));
    }
}

#[test]
fn full_cycle_ends_in_a_uniform_page() {
    let (mut doc, containers) = page();
    let engine = Engine::new(MonospaceGeometry::new(12), NoEnvironment);

    engine
        .handle_json(
            &mut doc,
            &containers,
            r##"{
                "command": "apply_gradient",
                "colors": ["#336699"],
                "color_text": "#000000",
                "gradient_size": 50
            }"##,
        )
        .unwrap();
    let outcome = engine
        .handle_json(
            &mut doc,
            &containers,
            r##"{"command": "reset", "color_text": "#111111"}"##,
        )
        .unwrap();

    let total: usize = containers
        .iter()
        .map(|&c| doc.glyphs(c).len())
        .sum();
    assert_eq!(outcome.glyphs, total);

    for &container in &containers {
        for glyph in doc.glyphs(container) {
            assert_eq!(doc.glyph_style(glyph).fg, Some(Rgb::new(17, 17, 17)));
        }
    }
}

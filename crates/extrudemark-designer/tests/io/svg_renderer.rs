use extrudemark_designer::svg_renderer::{render_document, Background, SvgStyle};
use extrudemark_designer::{FacePalette, LayoutEngine, LayoutMode, LayoutParams};

use crate::common::SquareFont;

fn style(background: bool, back_outline: bool) -> SvgStyle {
    SvgStyle {
        background: background.then(|| Background {
            color: "#dee3e2".to_string(),
            radius: 16.0,
        }),
        top_fill: "#f2f2f2".to_string(),
        stroke: "#1e1e1e".to_string(),
        back_outline,
    }
}

fn render(text: &str, style: &SvgStyle) -> String {
    let palette = FacePalette::new(vec!["#78b3d6".into(), "#d86969".into()]);
    let engine = LayoutEngine::new(SquareFont::default(), palette.clone());
    let params = LayoutParams {
        font_size: 10.0,
        tracking: 0.0,
        curve_resolution: 4,
        seed: 7,
        depth: 2.0,
        depth_angle: 0.0,
        depth_jitter: 0.0,
        tilt: 0.0,
        fixed_rotation: None,
        mode: LayoutMode::AutoSized { inset: 1.0 },
    };
    let layout = engine.layout(text, &params).unwrap();
    render_document(&layout, &palette, style, text)
}

#[test]
fn test_document_header_and_canvas() {
    let svg = render("A", &style(false, false));
    assert!(svg.starts_with("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n<svg "));
    // 8 + depth 2 + inset on both sides
    assert!(svg.contains("width=\"12\" height=\"10\" viewBox=\"0 0 12 10\""));
    assert!(svg.contains("<title>A</title>"));
    assert!(svg.contains("<g transform=\"translate(1 9)\">"));
    assert!(!svg.contains("<rect"));
    assert!(svg.trim_end().ends_with("</svg>"));
}

#[test]
fn test_background_rect_when_opaque() {
    let svg = render("A", &style(true, false));
    assert!(svg.contains("<rect width=\"12\" height=\"10\" rx=\"16\" fill=\"#dee3e2\"/>"));
    let rect = svg.find("<rect").unwrap();
    let content = svg.find("<g transform").unwrap();
    assert!(rect < content);
}

#[test]
fn test_glyph_paint_order() {
    let svg = render("A", &style(false, true));
    let group = svg.find("<g id=\"glyph-0\" transform=\"rotate(0 5 -4)\">").unwrap();
    let back = svg.find("fill=\"#78b3d6\" stroke=\"#1e1e1e\" stroke-width=\"1\"").unwrap();
    let face = svg.find("<polygon").unwrap();
    let front = svg.find("fill=\"#f2f2f2\" stroke=\"#1e1e1e\" stroke-width=\"1.2\"").unwrap();
    assert!(group < back && back < face && face < front);
    assert!(svg[group..].contains("fill=\"none\""));
    assert_eq!(svg.matches("<polygon").count(), 4);
}

#[test]
fn test_back_outline_toggle() {
    let with = render("A", &style(false, true));
    let without = render("A", &style(false, false));
    assert_eq!(with.matches("<path").count(), 3);
    assert_eq!(without.matches("<path").count(), 2);
}

#[test]
fn test_title_is_escaped() {
    let svg = render("A&B", &style(false, false));
    assert!(svg.contains("<title>A&amp;B</title>"));
    assert!(svg.contains("aria-label=\"A&amp;B\""));
    assert!(!svg.contains("A&B"));
}

#[test]
fn test_empty_layout_renders_empty_canvas() {
    let svg = render("", &style(false, false));
    assert!(svg.contains("width=\"0\" height=\"0\""));
    assert!(!svg.contains("glyph-0"));
}

//! SVG document rendering for laid out text.
//!
//! Each glyph becomes a group rotated about its own centre containing, in
//! paint order: the back path, the side faces, the optional back outline and
//! finally the front path.

use extrudemark_core::{PathCommand, Point};

use crate::layout::{GlyphLayout, LayoutResult};
use crate::palette::FacePalette;

pub const BACK_STROKE_WIDTH: f64 = 1.0;
pub const FRONT_STROKE_WIDTH: f64 = 1.2;

/// Solid rounded rectangle painted behind the content.
#[derive(Debug, Clone, PartialEq)]
pub struct Background {
    pub color: String,
    pub radius: f64,
}

/// Colours and switches for one document.
#[derive(Debug, Clone, PartialEq)]
pub struct SvgStyle {
    pub background: Option<Background>,
    pub top_fill: String,
    pub stroke: String,
    pub back_outline: bool,
}

/// Formats a coordinate with at most two decimals and no trailing zeros.
pub fn format_number(value: f64) -> String {
    let text = format!("{:.2}", value);
    let text = if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        text
    };
    if text == "-0" {
        "0".to_string()
    } else {
        text
    }
}

/// Escapes text for use in element content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            other => out.push(other),
        }
    }
    out
}

fn coords(p: Point) -> String {
    format!("{} {}", format_number(p.x), format_number(p.y))
}

/// SVG path data for a command list. Curves are kept as curves.
pub fn path_data(commands: &[PathCommand]) -> String {
    let parts: Vec<String> = commands
        .iter()
        .map(|command| match *command {
            PathCommand::MoveTo(p) => format!("M{}", coords(p)),
            PathCommand::LineTo(p) => format!("L{}", coords(p)),
            PathCommand::QuadTo { ctrl, to } => format!("Q{} {}", coords(ctrl), coords(to)),
            PathCommand::CubicTo { ctrl1, ctrl2, to } => {
                format!("C{} {} {}", coords(ctrl1), coords(ctrl2), coords(to))
            }
            PathCommand::Close => "Z".to_string(),
        })
        .collect();
    parts.join(" ")
}

/// Point list for a `<polygon points="...">` attribute.
pub fn polygon_points(points: &[Point]) -> String {
    let parts: Vec<String> = points
        .iter()
        .map(|p| format!("{},{}", format_number(p.x), format_number(p.y)))
        .collect();
    parts.join(" ")
}

fn render_glyph(glyph: &GlyphLayout, palette: &FacePalette, style: &SvgStyle) -> String {
    let geometry = &glyph.geometry;
    let stroke = escape_xml(&style.stroke);
    let mut svg = String::new();

    svg.push_str(&format!(
        "    <g id=\"glyph-{}\" transform=\"rotate({} {} {})\">\n",
        glyph.index,
        format_number(glyph.placement.rotation),
        format_number(glyph.center.x),
        format_number(glyph.center.y)
    ));

    let back = path_data(&geometry.back);
    svg.push_str(&format!(
        "      <path d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\"/>\n",
        back,
        escape_xml(palette.glyph_color(glyph.index)),
        stroke,
        format_number(BACK_STROKE_WIDTH)
    ));

    for face in &geometry.faces {
        svg.push_str(&format!(
            "      <polygon points=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\"/>\n",
            polygon_points(&face.corners),
            escape_xml(&face.color),
            stroke,
            format_number(BACK_STROKE_WIDTH)
        ));
    }

    if style.back_outline {
        svg.push_str(&format!(
            "      <path d=\"{}\" fill=\"none\" stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\"/>\n",
            back,
            stroke,
            format_number(BACK_STROKE_WIDTH)
        ));
    }

    svg.push_str(&format!(
        "      <path d=\"{}\" fill=\"{}\" stroke=\"{}\" stroke-width=\"{}\" stroke-linejoin=\"round\"/>\n",
        path_data(&geometry.front),
        escape_xml(&style.top_fill),
        stroke,
        format_number(FRONT_STROKE_WIDTH)
    ));

    svg.push_str("    </g>\n");
    svg
}

/// Renders a complete standalone SVG document.
pub fn render_document(
    layout: &LayoutResult,
    palette: &FacePalette,
    style: &SvgStyle,
    title: &str,
) -> String {
    let width = format_number(layout.width);
    let height = format_number(layout.height);
    let title = escape_xml(title);

    let mut svg = String::new();
    svg.push_str("<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n");
    svg.push_str(&format!(
        "<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"{w}\" height=\"{h}\" viewBox=\"0 0 {w} {h}\" fill=\"none\" role=\"img\" aria-label=\"{t}\">\n",
        w = width,
        h = height,
        t = title
    ));
    svg.push_str(&format!("  <title>{}</title>\n", title));

    if let Some(background) = &style.background {
        svg.push_str(&format!(
            "  <rect width=\"{}\" height=\"{}\" rx=\"{}\" fill=\"{}\"/>\n",
            width,
            height,
            format_number(background.radius),
            escape_xml(&background.color)
        ));
    }

    svg.push_str(&format!(
        "  <g transform=\"translate({})\">\n",
        coords(layout.translation)
    ));
    for glyph in &layout.glyphs {
        svg.push_str(&render_glyph(glyph, palette, style));
    }
    svg.push_str("  </g>\n");
    svg.push_str("</svg>\n");
    svg
}

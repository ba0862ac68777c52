use std::path::Path;

use extrudemark_designer::{
    flatten_outline, render_assets, BrandConfig, FontOutlineProvider, OutlineProvider, PathCommand,
};

const DEJAVU_SANS: &str = concat!(
    env!("CARGO_MANIFEST_DIR"),
    "/tests/fixtures/fonts/DejaVuSans.ttf"
);

fn dejavu() -> FontOutlineProvider {
    FontOutlineProvider::from_path(Path::new(DEJAVU_SANS)).unwrap()
}

fn y_range(commands: &[PathCommand]) -> (f64, f64) {
    commands
        .iter()
        .filter_map(|c| match c {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => Some(p.y),
            PathCommand::QuadTo { to, .. } | PathCommand::CubicTo { to, .. } => Some(to.y),
            PathCommand::Close => None,
        })
        .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), y| {
            (lo.min(y), hi.max(y))
        })
}

#[test]
fn test_metrics_in_font_units() {
    let font = dejavu();
    assert_eq!(font.units_per_em(), 2048.0);

    let h = font.outline('H').unwrap();
    assert!((h.advance_width - 1540.0).abs() < 0.5, "{}", h.advance_width);
}

#[test]
fn test_outline_is_y_up() {
    let h = dejavu().outline('H').unwrap();
    let (min_y, max_y) = y_range(&h.commands);
    assert!(min_y.abs() < 0.5, "{}", min_y);
    assert!((max_y - 1493.0).abs() < 0.5, "{}", max_y);
}

#[test]
fn test_pair_kerning() {
    let font = dejavu();
    let kern = font.kerning('A', 'V');
    assert!((kern - -131.0).abs() < 1.0, "{}", kern);
}

#[test]
fn test_missing_glyph() {
    let err = dejavu().outline('中').unwrap_err();
    assert!(err.is_glyph_not_found());
}

#[test]
fn test_space_has_advance_only() {
    let space = dejavu().outline(' ').unwrap();
    assert!(space.commands.is_empty());
    assert!(space.advance_width > 0.0);
}

#[test]
fn test_counter_glyph_flattens_to_two_contours() {
    let o = dejavu().outline('O').unwrap();
    assert!(o
        .commands
        .iter()
        .any(|c| matches!(c, PathCommand::QuadTo { .. })));
    let contours = flatten_outline(&o.commands, 8).unwrap();
    assert_eq!(contours.len(), 2);
    assert!(contours.iter().all(|c| c.closed));
}

#[test]
fn test_resolve_prefers_existing_path() {
    let font = FontOutlineProvider::resolve(DEJAVU_SANS).unwrap();
    assert!(font.name().ends_with("DejaVuSans.ttf"));
}

#[test]
fn test_render_assets_with_font_file() {
    let config = BrandConfig {
        text: "HOV".to_string(),
        icon_text: "O".to_string(),
        font: Some(DEJAVU_SANS.to_string()),
        ..BrandConfig::default()
    };
    let assets = render_assets(&config).unwrap();
    assert_eq!(assets.len(), 2);

    let wordmark = &assets[0];
    assert_eq!(wordmark.layout.glyphs.len(), 3);
    assert!(wordmark.layout.bounds.is_some());
    assert!(wordmark.layout.face_count() > 0);
    // curves survive into the front and back paths
    assert!(wordmark.svg.contains('Q'));
    assert!(assets[1].svg.contains("rotate(-6 "));
}

use extrudemark_designer::{
    centered_origin, measure_text, FacePalette, LayoutEngine, LayoutMode, LayoutParams, Point,
};

use crate::common::SquareFont;

fn params(mode: LayoutMode) -> LayoutParams {
    LayoutParams {
        font_size: 10.0,
        tracking: 0.0,
        curve_resolution: 4,
        seed: 7,
        depth: 0.0,
        depth_angle: 0.0,
        depth_jitter: 0.0,
        tilt: 0.0,
        fixed_rotation: None,
        mode,
    }
}

fn jittered() -> LayoutParams {
    LayoutParams {
        depth: 13.0,
        depth_angle: -22.6,
        depth_jitter: 0.2,
        tilt: 10.0,
        ..params(LayoutMode::AutoSized { inset: 16.0 })
    }
}

fn engine(font: SquareFont) -> LayoutEngine<SquareFont> {
    LayoutEngine::new(
        font,
        FacePalette::new(vec!["#111111".into(), "#222222".into()]),
    )
}

#[test]
fn test_whitespace_advances_without_geometry() {
    let result = engine(SquareFont::default())
        .layout("A B", &params(LayoutMode::AutoSized { inset: 0.0 }))
        .unwrap();

    assert_eq!(result.glyphs.len(), 2);
    assert_eq!(result.glyphs[0].placement.character, 'A');
    assert_eq!(result.glyphs[1].placement.character, 'B');
    assert_eq!(result.glyphs[0].placement.baseline_origin, Point::new(0.0, 0.0));
    // 10 for the A, 10 for the space
    assert_eq!(result.glyphs[1].placement.baseline_origin, Point::new(20.0, 0.0));
    assert_eq!(result.glyphs[1].index, 1);
    assert_eq!(result.advance, 30.0);
}

#[test]
fn test_tracking_applies_to_every_character() {
    let mut p = params(LayoutMode::AutoSized { inset: 0.0 });
    p.tracking = 2.5;
    let result = engine(SquareFont::default()).layout("A B", &p).unwrap();
    assert_eq!(result.glyphs[1].placement.baseline_origin.x, 25.0);
    assert_eq!(result.advance, 37.5);
}

#[test]
fn test_kerning_moves_glyph_before_drawing() {
    let result = engine(SquareFont::with_kerning('A', 'V', -2.0))
        .layout("AV", &params(LayoutMode::AutoSized { inset: 0.0 }))
        .unwrap();
    assert_eq!(result.glyphs[1].placement.baseline_origin.x, 8.0);
}

#[test]
fn test_font_size_scales_outline() {
    let mut p = params(LayoutMode::AutoSized { inset: 0.0 });
    p.font_size = 20.0;
    let result = engine(SquareFont::default()).layout("AB", &p).unwrap();
    assert_eq!(result.glyphs[1].placement.baseline_origin.x, 20.0);
    let bounds = result.bounds.unwrap();
    assert_eq!(bounds.width(), 36.0);
    assert_eq!(bounds.height(), 16.0);
}

#[test]
fn test_outline_is_flipped_above_baseline() {
    let result = engine(SquareFont::default())
        .layout("A", &params(LayoutMode::AutoSized { inset: 0.0 }))
        .unwrap();
    let contour = &result.glyphs[0].geometry.contours[0];
    assert!(contour.points.iter().all(|p| p.y <= 0.0));
    assert!(contour.points.iter().any(|p| p.y == -8.0));
}

#[test]
fn test_auto_sized_canvas_adds_inset() {
    let result = engine(SquareFont::default())
        .layout("A", &params(LayoutMode::AutoSized { inset: 2.0 }))
        .unwrap();
    let bounds = result.bounds.unwrap();
    assert_eq!((bounds.min_x, bounds.min_y), (0.0, -8.0));
    assert_eq!((bounds.max_x, bounds.max_y), (8.0, 0.0));
    assert_eq!(result.width, 12.0);
    assert_eq!(result.height, 12.0);
    assert_eq!(result.translation, Point::new(2.0, 10.0));
}

#[test]
fn test_bounds_include_extrusion() {
    let mut p = params(LayoutMode::AutoSized { inset: 0.0 });
    p.depth = 5.0;
    let result = engine(SquareFont::default()).layout("A", &p).unwrap();
    let bounds = result.bounds.unwrap();
    assert!((bounds.max_x - 13.0).abs() < 1e-9);
    assert!((result.width - 13.0).abs() < 1e-9);
    assert_eq!(result.glyphs[0].geometry.faces.len(), 4);
}

#[test]
fn test_centered_origin_for_measured_width() {
    assert_eq!(centered_origin(100.0, 40.0), 30.0);

    let font = SquareFont::default();
    assert_eq!(measure_text(&font, "ABCD", 10.0, 0.0).unwrap(), 40.0);

    let result = engine(font)
        .layout(
            "ABCD",
            &params(LayoutMode::FixedCanvas {
                width: 100.0,
                height: 50.0,
                baseline: 35.0,
            }),
        )
        .unwrap();
    assert_eq!(result.glyphs[0].placement.baseline_origin, Point::new(30.0, 35.0));
    assert_eq!(result.width, 100.0);
    assert_eq!(result.height, 50.0);
    assert_eq!(result.translation, Point::ORIGIN);
}

#[test]
fn test_empty_text() {
    let engine = engine(SquareFont::default());
    let auto = engine
        .layout("", &params(LayoutMode::AutoSized { inset: 16.0 }))
        .unwrap();
    assert!(auto.is_empty());
    assert_eq!(auto.bounds, None);
    assert_eq!((auto.width, auto.height), (0.0, 0.0));

    let fixed = engine
        .layout(
            "",
            &params(LayoutMode::FixedCanvas {
                width: 64.0,
                height: 64.0,
                baseline: 40.0,
            }),
        )
        .unwrap();
    assert!(fixed.is_empty());
    assert_eq!(fixed.bounds, None);
    assert_eq!(fixed.width, 64.0);
    assert_eq!(fixed.advance, 32.0);
}

#[test]
fn test_whitespace_only_text_has_no_bounds() {
    let result = engine(SquareFont::default())
        .layout("   ", &params(LayoutMode::AutoSized { inset: 4.0 }))
        .unwrap();
    assert!(result.is_empty());
    assert_eq!(result.bounds, None);
    assert_eq!(result.width, 0.0);
}

#[test]
fn test_missing_glyph_aborts_layout() {
    let err = engine(SquareFont::default())
        .layout("A#B", &jittered())
        .unwrap_err();
    assert!(err.is_glyph_not_found());
    assert!(err.to_string().contains("'#'"));
}

#[test]
fn test_layout_is_deterministic() {
    let engine = engine(SquareFont::default());
    let a = engine.layout("Hello World", &jittered()).unwrap();
    let b = engine.layout("Hello World", &jittered()).unwrap();
    assert_eq!(a, b);
}

#[test]
fn test_seed_changes_placement() {
    let engine = engine(SquareFont::default());
    let a = engine.layout("A", &jittered()).unwrap();
    let mut p = jittered();
    p.seed = 8;
    let b = engine.layout("A", &p).unwrap();

    let pa = &a.glyphs[0].placement;
    let pb = &b.glyphs[0].placement;
    assert!(pa.rotation != pb.rotation || pa.offset != pb.offset);
}

#[test]
fn test_random_ranges() {
    let result = engine(SquareFont::default())
        .layout("ABCDEFGHIJ", &jittered())
        .unwrap();
    for glyph in &result.glyphs {
        let placement = &glyph.placement;
        assert!(placement.rotation.abs() <= 5.0);
        let magnitude = placement.offset.distance_to(&Point::ORIGIN);
        assert!(magnitude >= 13.0 * 0.9 - 1e-9 && magnitude <= 13.0 * 1.1 + 1e-9);
        let angle = placement.offset.y.atan2(placement.offset.x).to_degrees();
        assert!((angle - -22.6).abs() <= 3.0 + 1e-9);
    }
}

#[test]
fn test_fixed_rotation_overrides_tilt() {
    let mut p = jittered();
    p.fixed_rotation = Some(-6.0);
    let result = engine(SquareFont::default()).layout("ABC", &p).unwrap();
    assert!(result.glyphs.iter().all(|g| g.placement.rotation == -6.0));
}

#[test]
fn test_face_colours_shift_per_glyph() {
    let mut p = params(LayoutMode::AutoSized { inset: 0.0 });
    p.depth = 2.0;
    let result = engine(SquareFont::default()).layout("AB", &p).unwrap();
    assert_eq!(result.glyphs[0].geometry.faces[0].color, "#111111");
    assert_eq!(result.glyphs[1].geometry.faces[0].color, "#222222");
    // bands of three faces
    assert_eq!(result.glyphs[0].geometry.faces[3].color, "#222222");
    assert_eq!(result.face_count(), 8);
}

#[test]
fn test_zero_depth_has_no_side_faces() {
    let result = engine(SquareFont::default())
        .layout("AB", &params(LayoutMode::AutoSized { inset: 0.0 }))
        .unwrap();
    assert_eq!(result.face_count(), 0);
    assert!(result.glyphs.iter().all(|g| !g.geometry.front.is_empty()));
    assert_eq!(result.glyphs[0].geometry.back, result.glyphs[0].geometry.front);
}

#[test]
fn test_rotation_center_is_glyph_center() {
    let result = engine(SquareFont::default())
        .layout("AB", &params(LayoutMode::AutoSized { inset: 0.0 }))
        .unwrap();
    assert_eq!(result.glyphs[0].center, Point::new(4.0, -4.0));
    assert_eq!(result.glyphs[1].center, Point::new(14.0, -4.0));
}

#[test]
fn test_invalid_params_are_configuration_errors() {
    let engine = engine(SquareFont::default());
    let mut p = jittered();
    p.font_size = 0.0;
    assert!(engine.layout("A", &p).unwrap_err().is_configuration_error());

    let mut p = jittered();
    p.curve_resolution = 0;
    assert!(engine.layout("A", &p).unwrap_err().is_configuration_error());

    let p = params(LayoutMode::FixedCanvas {
        width: 0.0,
        height: 10.0,
        baseline: 5.0,
    });
    assert!(engine.layout("A", &p).unwrap_err().is_configuration_error());
}

use extrudemark_designer::{
    flatten_outline, BlockFont, FacePalette, LayoutEngine, LayoutMode, LayoutParams,
    OutlineProvider,
};

#[test]
fn test_block_font_covers_default_text() {
    let font = BlockFont::new();
    for ch in "Pluribus 0123456789 .,!?-':&".chars() {
        assert!(font.supports(ch), "missing {:?}", ch);
        font.outline(ch).unwrap();
    }
}

#[test]
fn test_block_outlines_flatten_to_rectangles() {
    let outline = BlockFont::new().outline('H').unwrap();
    let contours = flatten_outline(&outline.commands, 12).unwrap();
    assert!(!contours.is_empty());
    for contour in &contours {
        assert!(contour.closed);
        // four corners plus the closing point
        assert_eq!(contour.points.len(), 5);
        assert_eq!(contour.points.first(), contour.points.last());
    }
}

#[test]
fn test_block_font_wordmark_layout() {
    let engine = LayoutEngine::new(BlockFont::new(), FacePalette::new(vec!["#78b3d6".into()]));
    let params = LayoutParams {
        font_size: 244.0,
        tracking: -2.0,
        curve_resolution: 12,
        seed: 7,
        depth: 13.0,
        depth_angle: -22.619864948040426,
        depth_jitter: 0.2,
        tilt: 10.0,
        fixed_rotation: None,
        mode: LayoutMode::AutoSized { inset: 16.0 },
    };
    let result = engine.layout("Pluribus", &params).unwrap();
    assert_eq!(result.glyphs.len(), 8);
    assert!(result.face_count() > 8 * 4);
    let bounds = result.bounds.unwrap();
    // 5x7 cells of 100 units at 244 / 1000 scale
    assert!(bounds.height() > 7.0 * 24.4);
    assert!(result.width > bounds.width());
}

#[test]
fn test_block_font_rejects_unknown_character() {
    let engine = LayoutEngine::new(BlockFont::new(), FacePalette::new(Vec::new()));
    let params = LayoutParams {
        font_size: 100.0,
        tracking: 0.0,
        curve_resolution: 12,
        seed: 1,
        depth: 10.0,
        depth_angle: 0.0,
        depth_jitter: 0.0,
        tilt: 0.0,
        fixed_rotation: None,
        mode: LayoutMode::AutoSized { inset: 0.0 },
    };
    let err = engine.layout("A@", &params).unwrap_err();
    assert!(err.is_glyph_not_found());
}

#![allow(dead_code)]

use std::collections::HashMap;

use extrudemark_designer::{Error, GlyphOutline, OutlineProvider, PathCommand, Point, Result};

/// Every letter is the same 8x8 square on a 10 unit advance. `#` has no glyph.
#[derive(Debug, Default)]
pub struct SquareFont {
    pub kerning: HashMap<(char, char), f64>,
}

impl SquareFont {
    pub fn with_kerning(prev: char, curr: char, value: f64) -> Self {
        let mut kerning = HashMap::new();
        kerning.insert((prev, curr), value);
        Self { kerning }
    }
}

impl OutlineProvider for SquareFont {
    fn outline(&self, ch: char) -> Result<GlyphOutline> {
        if ch == '#' {
            return Err(Error::GlyphNotFound { character: ch });
        }
        if ch.is_whitespace() {
            return Ok(GlyphOutline::new(Vec::new(), 10.0));
        }
        Ok(GlyphOutline::new(
            vec![
                PathCommand::MoveTo(Point::new(0.0, 0.0)),
                PathCommand::LineTo(Point::new(8.0, 0.0)),
                PathCommand::LineTo(Point::new(8.0, 8.0)),
                PathCommand::LineTo(Point::new(0.0, 8.0)),
                PathCommand::Close,
            ],
            10.0,
        ))
    }

    fn kerning(&self, prev: char, curr: char) -> f64 {
        self.kerning.get(&(prev, curr)).copied().unwrap_or(0.0)
    }

    fn units_per_em(&self) -> f64 {
        10.0
    }

    fn name(&self) -> &str {
        "square"
    }
}

//! Outline provider interface consumed by the layout engine.

use extrudemark_core::{GlyphOutline, Result};

/// Source of glyph outlines and metrics.
///
/// Outlines are returned in font units with the Y axis pointing up, the
/// usual convention of font files. The layout engine scales and flips them.
pub trait OutlineProvider {
    /// Outline and advance width for `ch`.
    ///
    /// Fails with [`extrudemark_core::Error::GlyphNotFound`] when the source
    /// has no glyph for the character.
    fn outline(&self, ch: char) -> Result<GlyphOutline>;

    /// Kerning adjustment between an adjacent pair, in font units.
    fn kerning(&self, prev: char, curr: char) -> f64;

    /// Size of the em square in font units.
    fn units_per_em(&self) -> f64;

    /// Human readable name for logs.
    fn name(&self) -> &str {
        "outline provider"
    }
}

impl<P: OutlineProvider + ?Sized> OutlineProvider for &P {
    fn outline(&self, ch: char) -> Result<GlyphOutline> {
        (**self).outline(ch)
    }

    fn kerning(&self, prev: char, curr: char) -> f64 {
        (**self).kerning(prev, curr)
    }

    fn units_per_em(&self) -> f64 {
        (**self).units_per_em()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

impl<P: OutlineProvider + ?Sized> OutlineProvider for Box<P> {
    fn outline(&self, ch: char) -> Result<GlyphOutline> {
        (**self).outline(ch)
    }

    fn kerning(&self, prev: char, curr: char) -> f64 {
        (**self).kerning(prev, curr)
    }

    fn units_per_em(&self) -> f64 {
        (**self).units_per_em()
    }

    fn name(&self) -> &str {
        (**self).name()
    }
}

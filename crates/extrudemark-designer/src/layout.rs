//! Text layout engine
//!
//! Walks the text left to right, one grapheme cluster at a time, and places
//! each glyph on a shared baseline:
//!
//! 1. The outline provider is asked for the glyph's outline and advance. When
//!    there is a previous character the pair kerning is added to the cursor.
//! 2. Whitespace only moves the cursor (`advance + tracking`).
//! 3. Any other glyph is scaled from font units onto the canvas (Y flipped),
//!    flattened, given a random tilt and a jittered extrusion offset, and
//!    extruded. Its rotated bounds are folded into the running total.
//!
//! The only state carried between glyphs is the cursor, the PRNG and the
//! bounding-box accumulator, all local to one [`LayoutEngine::layout`] call,
//! so identical inputs always produce identical results.

use extrudemark_core::{
    bounds_of_extrusion, bounds_of_rotated_geometry, merge_bounds, BoundingBox, Error,
    PathCommand, Point, Result, SeededRandom,
};
use serde::Serialize;
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

use crate::extrude::{build_extrusion, ExtrusionGeometry};
use crate::flatten::flatten_outline;
use crate::outline::OutlineProvider;
use crate::palette::FacePalette;

/// Depth jitter of 1.0 spreads the extrusion angle over this many degrees.
pub const ANGLE_JITTER_SPAN: f64 = 30.0;

/// Canvas sizing policy.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum LayoutMode {
    /// Canvas is the tight content bounds plus `inset` on every side. The
    /// baseline sits at y = 0 and content is translated onto the canvas.
    AutoSized { inset: f64 },
    /// Caller supplied canvas. Text is centred horizontally by its measured
    /// advance and drawn on `baseline`; bounds never resize the canvas.
    FixedCanvas {
        width: f64,
        height: f64,
        baseline: f64,
    },
}

/// Per-call layout parameters.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutParams {
    pub font_size: f64,
    pub tracking: f64,
    pub curve_resolution: u32,
    pub seed: u32,
    /// Extrusion magnitude in canvas units
    pub depth: f64,
    /// Extrusion direction in degrees, canvas orientation (Y down)
    pub depth_angle: f64,
    /// Fractional spread applied to both depth and angle
    pub depth_jitter: f64,
    /// Full range of the random rotation; glyphs turn by up to `tilt / 2`
    pub tilt: f64,
    /// Replaces the random rotation when set
    pub fixed_rotation: Option<f64>,
    pub mode: LayoutMode,
}

impl LayoutParams {
    fn validate(&self) -> Result<()> {
        if !(self.font_size.is_finite() && self.font_size > 0.0) {
            return Err(Error::configuration(format!(
                "font size must be positive, got {}",
                self.font_size
            )));
        }
        if self.curve_resolution == 0 {
            return Err(Error::configuration("curve resolution must be at least 1"));
        }
        let numbers = [
            self.tracking,
            self.depth,
            self.depth_angle,
            self.depth_jitter,
            self.tilt,
            self.fixed_rotation.unwrap_or(0.0),
        ];
        if numbers.iter().any(|n| !n.is_finite()) {
            return Err(Error::configuration("layout parameters must be finite"));
        }
        if let LayoutMode::FixedCanvas { width, height, .. } = self.mode {
            if !(width > 0.0 && height > 0.0) {
                return Err(Error::configuration(format!(
                    "canvas must have a positive size, got {}x{}",
                    width, height
                )));
            }
        }
        Ok(())
    }
}

/// Where and how one glyph is drawn. Created once per non-space character.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlyphPlacement {
    pub character: char,
    pub baseline_origin: Point,
    pub font_size: f64,
    pub rotation: f64,
    pub offset: Point,
}

/// A placed glyph with its extrusion.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GlyphLayout {
    /// Position among the drawn glyphs, whitespace excluded
    pub index: usize,
    pub placement: GlyphPlacement,
    /// Rotation centre: middle of the unrotated front and back copies
    pub center: Point,
    pub geometry: ExtrusionGeometry,
    /// Bounds after rotation, `None` for a glyph without contours
    pub bounds: Option<BoundingBox>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LayoutResult {
    pub glyphs: Vec<GlyphLayout>,
    /// Union of all glyph bounds; `None` when nothing was drawn
    pub bounds: Option<BoundingBox>,
    pub width: f64,
    pub height: f64,
    /// Applied to all content when rendering
    pub translation: Point,
    /// Cursor position after the last character
    pub advance: f64,
}

impl LayoutResult {
    pub fn is_empty(&self) -> bool {
        self.glyphs.is_empty()
    }

    pub fn face_count(&self) -> usize {
        self.glyphs.iter().map(|g| g.geometry.face_count()).sum()
    }
}

/// Initial cursor that centres `text_width` on a canvas `canvas_width` wide.
pub fn centered_origin(canvas_width: f64, text_width: f64) -> f64 {
    (canvas_width - text_width) / 2.0
}

fn first_char(cluster: &str) -> Option<char> {
    let mut chars = cluster.chars();
    let ch = chars.next()?;
    if chars.next().is_some() {
        debug!("Rendering {:?} as its base character {:?}", cluster, ch);
    }
    Some(ch)
}

/// Total cursor advance of `text` at `font_size`, kerning and tracking
/// included. This is the width used to centre text on a fixed canvas.
pub fn measure_text<P: OutlineProvider>(
    provider: &P,
    text: &str,
    font_size: f64,
    tracking: f64,
) -> Result<f64> {
    let scale = unit_scale(provider, font_size)?;
    let mut width = 0.0;
    let mut prev: Option<char> = None;
    for ch in text.graphemes(true).filter_map(first_char) {
        let outline = provider.outline(ch)?;
        if let Some(p) = prev {
            width += provider.kerning(p, ch) * scale;
        }
        width += outline.advance_width * scale + tracking;
        prev = Some(ch);
    }
    Ok(width)
}

fn unit_scale<P: OutlineProvider>(provider: &P, font_size: f64) -> Result<f64> {
    let units_per_em = provider.units_per_em();
    if !(units_per_em.is_finite() && units_per_em > 0.0) {
        return Err(Error::configuration(format!(
            "{} reports invalid units per em {}",
            provider.name(),
            units_per_em
        )));
    }
    Ok(font_size / units_per_em)
}

/// Lays out text with an outline provider and a face palette.
#[derive(Debug, Clone)]
pub struct LayoutEngine<P> {
    provider: P,
    palette: FacePalette,
}

impl<P: OutlineProvider> LayoutEngine<P> {
    pub fn new(provider: P, palette: FacePalette) -> Self {
        Self { provider, palette }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    pub fn palette(&self) -> &FacePalette {
        &self.palette
    }

    /// Lays out `text` and sizes the canvas according to `params.mode`.
    pub fn layout(&self, text: &str, params: &LayoutParams) -> Result<LayoutResult> {
        params.validate()?;
        let scale = unit_scale(&self.provider, params.font_size)?;

        let (mut cursor, baseline) = match params.mode {
            LayoutMode::AutoSized { .. } => (0.0, 0.0),
            LayoutMode::FixedCanvas {
                width, baseline, ..
            } => {
                let measured =
                    measure_text(&self.provider, text, params.font_size, params.tracking)?;
                (centered_origin(width, measured), baseline)
            }
        };

        let mut random = SeededRandom::new(params.seed);
        let mut glyphs = Vec::new();
        let mut total: Option<BoundingBox> = None;
        let mut prev: Option<char> = None;

        for ch in text.graphemes(true).filter_map(first_char) {
            let outline = self.provider.outline(ch)?;
            if let Some(p) = prev {
                cursor += self.provider.kerning(p, ch) * scale;
            }
            prev = Some(ch);
            let advance = outline.advance_width * scale + params.tracking;

            if ch.is_whitespace() {
                cursor += advance;
                continue;
            }

            let origin = Point::new(cursor, baseline);
            let front: Vec<PathCommand> = outline
                .commands
                .iter()
                .map(|c| c.map_points(|p| Point::new(origin.x + p.x * scale, origin.y - p.y * scale)))
                .collect();
            let contours = flatten_outline(&front, params.curve_resolution)?;

            let tilt = random.centered(params.tilt);
            let rotation = params.fixed_rotation.unwrap_or(tilt);
            let angle =
                params.depth_angle + random.centered(params.depth_jitter * ANGLE_JITTER_SPAN);
            let magnitude = params.depth * (1.0 + random.centered(params.depth_jitter));
            let offset = Point::from_polar(magnitude, angle);

            let center = bounds_of_extrusion(&contours, offset)
                .map(|b| b.center())
                .unwrap_or(origin);
            let bounds = bounds_of_rotated_geometry(&contours, center, rotation, offset);
            total = merge_bounds(total, bounds);

            let index = glyphs.len();
            let select = |face: usize, glyph: usize| self.palette.color(face, glyph).to_string();
            let geometry = build_extrusion(front, contours, offset, index, &select);

            debug!(
                "Glyph {} {:?} at {:.2}: rotation {:.2}, offset ({:.2}, {:.2}), {} faces",
                index,
                ch,
                cursor,
                rotation,
                offset.x,
                offset.y,
                geometry.face_count()
            );

            glyphs.push(GlyphLayout {
                index,
                placement: GlyphPlacement {
                    character: ch,
                    baseline_origin: origin,
                    font_size: params.font_size,
                    rotation,
                    offset,
                },
                center,
                geometry,
                bounds,
            });
            cursor += advance;
        }

        let (width, height, translation) = match (params.mode, total) {
            (LayoutMode::AutoSized { inset }, Some(b)) => (
                b.width() + 2.0 * inset,
                b.height() + 2.0 * inset,
                Point::new(inset - b.min_x, inset - b.min_y),
            ),
            (LayoutMode::AutoSized { .. }, None) => (0.0, 0.0, Point::ORIGIN),
            (LayoutMode::FixedCanvas { width, height, .. }, _) => (width, height, Point::ORIGIN),
        };

        debug!(
            "Laid out {} glyphs with {} ({}x{})",
            glyphs.len(),
            self.provider.name(),
            width,
            height
        );

        Ok(LayoutResult {
            glyphs,
            bounds: total,
            width,
            height,
            translation,
            advance: cursor,
        })
    }
}

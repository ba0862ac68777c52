//! Font-backed outline provider
//!
//! Fonts are parsed with `rusttype`. A font is named either by a path to a
//! TTF/OTF file or by a system family name looked up through `fontdb`.

use extrudemark_core::{Error, GlyphOutline, PathCommand, Point, Result};
use fontdb::{Database, Family, Query, Stretch, Style, Weight};
use rusttype::{Font, OutlineBuilder, Scale};
use std::{collections::HashSet, fs, path::Path, sync::OnceLock};
use tracing::{debug, info};

use crate::outline::OutlineProvider;

fn db() -> &'static Database {
    static DB: OnceLock<Database> = OnceLock::new();
    DB.get_or_init(|| {
        let mut db = Database::new();
        db.load_system_fonts();
        db
    })
}

/// Sorted family names of the installed system fonts.
pub fn list_font_families() -> Vec<String> {
    let mut set = HashSet::new();
    for face in db().faces() {
        for (name, _) in &face.families {
            set.insert(name.clone());
        }
    }
    let mut out: Vec<_> = set.into_iter().collect();
    out.sort();
    out
}

/// Outline provider over a parsed TrueType/OpenType font.
pub struct FontOutlineProvider {
    font: Font<'static>,
    label: String,
    /// Scale at which rusttype reports outlines in raw font units.
    unit_scale: Scale,
    units_per_em: f64,
}

impl std::fmt::Debug for FontOutlineProvider {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FontOutlineProvider")
            .field("label", &self.label)
            .field("units_per_em", &self.units_per_em)
            .finish()
    }
}

impl FontOutlineProvider {
    /// Parse font bytes.
    pub fn from_bytes(label: impl Into<String>, bytes: Vec<u8>) -> Result<Self> {
        let label = label.into();
        let font = Font::try_from_vec(bytes)
            .ok_or_else(|| Error::configuration(format!("{} is not a valid font", label)))?;

        // rusttype scales by pixel height (ascent - descent), so a height equal
        // to the unscaled extent yields outlines in font units.
        let v_metrics = font.v_metrics_unscaled();
        let extent = v_metrics.ascent - v_metrics.descent;
        if !(extent.is_finite() && extent > 0.0) {
            return Err(Error::configuration(format!(
                "{} reports no vertical extent",
                label
            )));
        }

        let units_per_em = f64::from(font.units_per_em());
        if units_per_em <= 0.0 {
            return Err(Error::configuration(format!(
                "{} reports zero units per em",
                label
            )));
        }

        debug!(
            "Loaded font {} ({} glyphs, {} units/em)",
            label,
            font.glyph_count(),
            units_per_em
        );

        Ok(Self {
            font,
            label,
            unit_scale: Scale::uniform(extent),
            units_per_em,
        })
    }

    /// Load a font file from disk.
    pub fn from_path(path: &Path) -> Result<Self> {
        let bytes = fs::read(path).map_err(|e| {
            Error::configuration(format!("cannot read font {}: {}", path.display(), e))
        })?;
        Self::from_bytes(path.display().to_string(), bytes)
    }

    /// Look up a bold system font by family name.
    pub fn from_family(family: &str) -> Result<Self> {
        let families: Vec<Family<'_>> = match family.trim() {
            "" | "Sans" => vec![Family::SansSerif],
            "Serif" => vec![Family::Serif],
            "Monospace" => vec![Family::Monospace],
            other => vec![Family::Name(other)],
        };

        let query = Query {
            families: &families,
            weight: Weight::BOLD,
            stretch: Stretch::Normal,
            style: Style::Normal,
        };

        let missing = || Error::configuration(format!("no system font matches family {:?}", family));
        let id = db().query(&query).ok_or_else(missing)?;
        let face = db().face(id).ok_or_else(missing)?;

        let bytes = match &face.source {
            fontdb::Source::File(path) | fontdb::Source::SharedFile(path, _) => fs::read(path)
                .map_err(|e| {
                    Error::configuration(format!("cannot read font {}: {}", path.display(), e))
                })?,
            fontdb::Source::Binary(bytes) => bytes.as_ref().as_ref().to_vec(),
        };
        Self::from_bytes(family.to_string(), bytes)
    }

    /// Resolve a font option: an existing file path, otherwise a family name.
    pub fn resolve(spec: &str) -> Result<Self> {
        let path = Path::new(spec);
        let provider = if path.is_file() {
            Self::from_path(path)?
        } else {
            Self::from_family(spec)?
        };
        info!("Using font {}", provider.label);
        Ok(provider)
    }
}

impl OutlineProvider for FontOutlineProvider {
    fn outline(&self, ch: char) -> Result<GlyphOutline> {
        let glyph = self.font.glyph(ch);
        if glyph.id().0 == 0 {
            return Err(Error::GlyphNotFound { character: ch });
        }

        let scaled = glyph.scaled(self.unit_scale);
        let advance = f64::from(scaled.h_metrics().advance_width);
        let mut collector = CommandCollector::default();
        // An empty outline (space) reports false, which is fine here.
        scaled.build_outline(&mut collector);

        Ok(GlyphOutline::new(collector.commands, advance))
    }

    fn kerning(&self, prev: char, curr: char) -> f64 {
        f64::from(self.font.pair_kerning(self.unit_scale, prev, curr))
    }

    fn units_per_em(&self) -> f64 {
        self.units_per_em
    }

    fn name(&self) -> &str {
        &self.label
    }
}

/// Records rusttype outline callbacks as path commands.
///
/// rusttype emits Y-down coordinates; they are flipped back to font
/// convention here.
#[derive(Default)]
struct CommandCollector {
    commands: Vec<PathCommand>,
}

fn font_point(x: f32, y: f32) -> Point {
    Point::new(f64::from(x), -f64::from(y))
}

impl OutlineBuilder for CommandCollector {
    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(font_point(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(font_point(x, y)));
    }

    fn quad_to(&mut self, x1: f32, y1: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::QuadTo {
            ctrl: font_point(x1, y1),
            to: font_point(x, y),
        });
    }

    fn curve_to(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, x: f32, y: f32) {
        self.commands.push(PathCommand::CubicTo {
            ctrl1: font_point(x1, y1),
            ctrl2: font_point(x2, y2),
            to: font_point(x, y),
        });
    }

    fn close(&mut self) {
        self.commands.push(PathCommand::Close);
    }
}

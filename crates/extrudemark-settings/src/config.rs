//! Configuration record for brand asset generation
//!
//! Options arrive as a flat key→value mapping (command line flags, `--set`
//! pairs, option files) and are resolved once into a [`BrandConfig`] with
//! every field populated. Unknown keys are ignored. Malformed values are
//! rejected before any rendering starts.
//!
//! Keys are camelCase to stay compatible with existing brand scripts:
//! - Text: `text`, `iconText`, `name`
//! - Colours: `bg`, `c1`..`c4`, `topFill`, `stroke`
//! - Extrusion: `depth`, `depthAngle`, `depthJitter` (legacy `depthX`/`depthY`)
//! - Layout: `tilt`, `tracking`, `curveRes`, `seed`, `fontSize`, `iconSize`,
//!   `width`, `height`, `inset`
//! - Output: `transparent`, `backOutline`, `outDir`, `font`

use crate::error::{SettingsError, SettingsResult};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use tracing::debug;
use unicode_segmentation::UnicodeSegmentation;

pub const DEFAULT_TEXT: &str = "Pluribus";
pub const DEFAULT_ICON_TEXT: &str = "P";
pub const DEFAULT_BACKGROUND: &str = "#dee3e2";
pub const DEFAULT_ACCENTS: [&str; 4] = ["#78b3d6", "#d86969", "#4f7969", "#fccbcb"];
pub const DEFAULT_TOP_FILL: &str = "#f2f2f2";
pub const DEFAULT_STROKE: &str = "#1e1e1e";
/// Length of the classic `(12, -5)` extrusion offset.
pub const DEFAULT_DEPTH: f64 = 13.0;
/// Direction of the classic `(12, -5)` extrusion offset, in degrees.
pub const DEFAULT_DEPTH_ANGLE: f64 = -22.619864948040426;
pub const DEFAULT_DEPTH_JITTER: f64 = 0.2;
pub const DEFAULT_TILT: f64 = 10.0;
pub const DEFAULT_TRACKING: f64 = -2.0;
pub const DEFAULT_CURVE_RESOLUTION: u32 = 12;
pub const MAX_CURVE_RESOLUTION: u32 = 256;
pub const DEFAULT_SEED: u32 = 7;
pub const DEFAULT_FONT_SIZE: f64 = 244.0;
pub const DEFAULT_ICON_SIZE: f64 = 256.0;
pub const DEFAULT_INSET: f64 = 16.0;
pub const DEFAULT_OUT_DIR: &str = "assets";

const LEGACY_DEPTH_X: f64 = 12.0;
const LEGACY_DEPTH_Y: f64 = -5.0;

/// Every option key understood by [`BrandConfig::from_options`].
pub const KNOWN_KEYS: &[&str] = &[
    "text",
    "iconText",
    "name",
    "bg",
    "c1",
    "c2",
    "c3",
    "c4",
    "topFill",
    "stroke",
    "depth",
    "depthAngle",
    "depthJitter",
    "depthX",
    "depthY",
    "tilt",
    "tracking",
    "curveRes",
    "seed",
    "transparent",
    "fontSize",
    "iconSize",
    "width",
    "height",
    "inset",
    "backOutline",
    "outDir",
    "font",
];

/// Whether `key` is one of [`KNOWN_KEYS`].
pub fn is_known_key(key: &str) -> bool {
    KNOWN_KEYS.contains(&key)
}

/// Fixed output canvas for the wordmark
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CanvasSize {
    pub width: f64,
    pub height: f64,
}

/// Complete brand asset configuration
///
/// Every field has a named default; see the `DEFAULT_*` constants.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BrandConfig {
    /// Wordmark text
    pub text: String,
    /// Single glyph rendered on the icon
    pub icon_text: String,
    /// Base name for output files; derived from `text` when absent
    pub name: Option<String>,
    /// Background colour used when `transparent` is false
    pub background: String,
    /// Side-face accent colours (`c1`..`c4`)
    pub accents: Vec<String>,
    /// Front face fill
    pub top_fill: String,
    /// Outline stroke colour
    pub stroke: String,
    /// Extrusion length in output units
    pub depth: f64,
    /// Extrusion direction in degrees (0 = +X, positive turns towards +Y/down)
    pub depth_angle: f64,
    /// Fractional per-glyph spread of extrusion direction and length, 0..=1
    pub depth_jitter: f64,
    /// Total per-glyph rotation range in degrees (glyphs turn by ±tilt/2)
    pub tilt: f64,
    /// Extra spacing added after every glyph advance
    pub tracking: f64,
    /// Samples per curve segment when flattening outlines
    pub curve_resolution: u32,
    /// Seed of the pseudo-random stream
    pub seed: u32,
    /// Skip the background rectangle
    pub transparent: bool,
    /// Wordmark font size in output units
    pub font_size: f64,
    /// Icon canvas edge length
    pub icon_size: f64,
    /// Fixed wordmark canvas; auto-sized to content when `None`
    pub canvas: Option<CanvasSize>,
    /// Explicit inset added around auto-sized content
    pub inset: f64,
    /// Draw a stroke-only copy of the back outline over the side faces
    pub back_outline: bool,
    /// Directory receiving the generated documents
    pub out_dir: PathBuf,
    /// Font file path or system family name; block font when `None`
    pub font: Option<String>,
}

impl Default for BrandConfig {
    fn default() -> Self {
        Self {
            text: DEFAULT_TEXT.to_string(),
            icon_text: DEFAULT_ICON_TEXT.to_string(),
            name: None,
            background: DEFAULT_BACKGROUND.to_string(),
            accents: DEFAULT_ACCENTS.iter().map(|c| c.to_string()).collect(),
            top_fill: DEFAULT_TOP_FILL.to_string(),
            stroke: DEFAULT_STROKE.to_string(),
            depth: DEFAULT_DEPTH,
            depth_angle: DEFAULT_DEPTH_ANGLE,
            depth_jitter: DEFAULT_DEPTH_JITTER,
            tilt: DEFAULT_TILT,
            tracking: DEFAULT_TRACKING,
            curve_resolution: DEFAULT_CURVE_RESOLUTION,
            seed: DEFAULT_SEED,
            transparent: true,
            font_size: DEFAULT_FONT_SIZE,
            icon_size: DEFAULT_ICON_SIZE,
            canvas: None,
            inset: DEFAULT_INSET,
            back_outline: true,
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            font: None,
        }
    }
}

impl BrandConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Resolve a flat option mapping into a validated config.
    ///
    /// Missing keys keep their defaults and unknown keys are ignored.
    pub fn from_options(options: &BTreeMap<String, String>) -> SettingsResult<Self> {
        let mut config = Self::default();

        for (key, value) in options {
            if !is_known_key(key) {
                debug!("Ignoring unknown option '{}'", key);
                continue;
            }
            let value = value.as_str();
            match key.as_str() {
                "text" => config.text = value.to_string(),
                "iconText" => config.icon_text = value.to_string(),
                "name" => config.name = non_empty(value),
                "bg" => config.background = value.trim().to_string(),
                "c1" | "c2" | "c3" | "c4" => {
                    let slot = accent_slot(key);
                    config.accents[slot] = value.trim().to_string();
                }
                "topFill" => config.top_fill = value.trim().to_string(),
                "stroke" => config.stroke = value.trim().to_string(),
                "depth" => config.depth = parse_f64(key, value)?,
                "depthAngle" => config.depth_angle = parse_f64(key, value)?,
                "depthJitter" => config.depth_jitter = parse_f64(key, value)?,
                "tilt" => config.tilt = parse_f64(key, value)?,
                "tracking" => config.tracking = parse_f64(key, value)?,
                "curveRes" => config.curve_resolution = parse_u32(key, value)?,
                "seed" => config.seed = parse_seed(key, value)?,
                "transparent" => config.transparent = parse_bool(key, value)?,
                "fontSize" => config.font_size = parse_f64(key, value)?,
                "iconSize" => config.icon_size = parse_f64(key, value)?,
                "inset" => config.inset = parse_f64(key, value)?,
                "backOutline" => config.back_outline = parse_bool(key, value)?,
                "outDir" => config.out_dir = PathBuf::from(value),
                "font" => config.font = non_empty(value),
                // depthX, depthY, width and height are resolved below, once
                // all keys have been seen
                _ => {}
            }
        }

        config.apply_legacy_depth(options)?;
        config.canvas = parse_canvas(options)?;
        config.validate()?;
        Ok(config)
    }

    /// Convert `depthX`/`depthY` into polar form unless `depth`/`depthAngle`
    /// were given explicitly.
    fn apply_legacy_depth(&mut self, options: &BTreeMap<String, String>) -> SettingsResult<()> {
        let dx = options.get("depthX");
        let dy = options.get("depthY");
        if dx.is_none() && dy.is_none() {
            return Ok(());
        }

        let dx = match dx {
            Some(v) => parse_f64("depthX", v)?,
            None => LEGACY_DEPTH_X,
        };
        let dy = match dy {
            Some(v) => parse_f64("depthY", v)?,
            None => LEGACY_DEPTH_Y,
        };

        if !options.contains_key("depth") {
            self.depth = dx.hypot(dy);
        }
        if !options.contains_key("depthAngle") {
            self.depth_angle = dy.atan2(dx).to_degrees();
        }
        Ok(())
    }

    /// Validate configuration
    pub fn validate(&self) -> SettingsResult<()> {
        if let Some(name) = &self.name {
            if name.contains(['/', '\\']) || name.contains("..") {
                return Err(SettingsError::invalid(
                    "name",
                    format!("must be a plain file name, got {:?}", name),
                ));
            }
        }

        if self.icon_text.graphemes(true).count() != 1 {
            return Err(SettingsError::invalid(
                "iconText",
                format!("expected exactly one character, got {:?}", self.icon_text),
            ));
        }

        let colours = [
            ("bg", &self.background),
            ("topFill", &self.top_fill),
            ("stroke", &self.stroke),
        ];
        for (key, colour) in colours {
            validate_colour(key, colour)?;
        }
        if self.accents.is_empty() {
            return Err(SettingsError::invalid("c1", "at least one accent colour is required"));
        }
        for (i, colour) in self.accents.iter().enumerate() {
            validate_colour(&format!("c{}", i + 1), colour)?;
        }

        let numbers = [
            ("depth", self.depth),
            ("depthAngle", self.depth_angle),
            ("depthJitter", self.depth_jitter),
            ("tilt", self.tilt),
            ("tracking", self.tracking),
            ("fontSize", self.font_size),
            ("iconSize", self.icon_size),
            ("inset", self.inset),
        ];
        for (key, value) in numbers {
            if !value.is_finite() {
                return Err(SettingsError::invalid(key, "must be a finite number"));
            }
        }

        if self.depth < 0.0 {
            return Err(SettingsError::invalid("depth", "must not be negative"));
        }
        if !(0.0..=1.0).contains(&self.depth_jitter) {
            return Err(SettingsError::invalid("depthJitter", "must be between 0 and 1"));
        }
        if self.tilt < 0.0 {
            return Err(SettingsError::invalid("tilt", "must not be negative"));
        }
        if self.font_size <= 0.0 {
            return Err(SettingsError::invalid("fontSize", "must be positive"));
        }
        if self.icon_size <= 0.0 {
            return Err(SettingsError::invalid("iconSize", "must be positive"));
        }
        if self.inset < 0.0 {
            return Err(SettingsError::invalid("inset", "must not be negative"));
        }
        if self.curve_resolution == 0 || self.curve_resolution > MAX_CURVE_RESOLUTION {
            return Err(SettingsError::invalid(
                "curveRes",
                format!("must be between 1 and {}", MAX_CURVE_RESOLUTION),
            ));
        }
        if let Some(canvas) = self.canvas {
            if !(canvas.width.is_finite() && canvas.width > 0.0) {
                return Err(SettingsError::invalid("width", "must be positive"));
            }
            if !(canvas.height.is_finite() && canvas.height > 0.0) {
                return Err(SettingsError::invalid("height", "must be positive"));
            }
        }

        Ok(())
    }

    /// Base name of the generated files.
    ///
    /// Uses `name` when set, otherwise a lowercase ASCII slug of `text`.
    pub fn asset_name(&self) -> String {
        if let Some(name) = &self.name {
            return name.clone();
        }
        let mut slug = String::new();
        for c in self.text.chars() {
            if c.is_ascii_alphanumeric() {
                slug.push(c.to_ascii_lowercase());
            } else if !slug.is_empty() && !slug.ends_with('-') {
                slug.push('-');
            }
        }
        let slug = slug.trim_end_matches('-');
        if slug.is_empty() {
            "brand".to_string()
        } else {
            slug.to_string()
        }
    }
}

/// Load a flat option table from a `.toml` or `.json` file.
///
/// Scalars are stringified so that file options and command line options
/// share one resolution path.
pub fn load_options_file(path: &Path) -> SettingsResult<BTreeMap<String, String>> {
    let content = std::fs::read_to_string(path)?;

    let options = if path.extension().is_some_and(|ext| ext == "json") {
        let value: serde_json::Value = serde_json::from_str(&content)?;
        let serde_json::Value::Object(map) = value else {
            return Err(SettingsError::UnsupportedFormat(
                "JSON options must be an object".to_string(),
            ));
        };
        map.into_iter()
            .map(|(key, value)| {
                let text = match value {
                    serde_json::Value::String(s) => s,
                    serde_json::Value::Number(n) => n.to_string(),
                    serde_json::Value::Bool(b) => b.to_string(),
                    _ => return Err(SettingsError::invalid(&key, "expected a scalar value")),
                };
                Ok((key, text))
            })
            .collect::<SettingsResult<BTreeMap<_, _>>>()?
    } else if path.extension().is_some_and(|ext| ext == "toml") {
        let table: toml::Table = toml::from_str(&content)?;
        table
            .into_iter()
            .map(|(key, value)| {
                let text = match value {
                    toml::Value::String(s) => s,
                    toml::Value::Integer(i) => i.to_string(),
                    toml::Value::Float(f) => f.to_string(),
                    toml::Value::Boolean(b) => b.to_string(),
                    _ => return Err(SettingsError::invalid(&key, "expected a scalar value")),
                };
                Ok((key, text))
            })
            .collect::<SettingsResult<BTreeMap<_, _>>>()?
    } else {
        return Err(SettingsError::UnsupportedFormat(
            "Config file must be .json or .toml".to_string(),
        ));
    };

    debug!("Loaded {} options from {}", options.len(), path.display());
    Ok(options)
}

fn accent_slot(key: &str) -> usize {
    match key {
        "c2" => 1,
        "c3" => 2,
        "c4" => 3,
        _ => 0,
    }
}

fn non_empty(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn parse_f64(key: &str, value: &str) -> SettingsResult<f64> {
    let parsed: f64 = value
        .trim()
        .parse()
        .map_err(|_| SettingsError::invalid(key, format!("{:?} is not a number", value)))?;
    if !parsed.is_finite() {
        return Err(SettingsError::invalid(key, "must be a finite number"));
    }
    Ok(parsed)
}

fn parse_u32(key: &str, value: &str) -> SettingsResult<u32> {
    value
        .trim()
        .parse()
        .map_err(|_| SettingsError::invalid(key, format!("{:?} is not a positive integer", value)))
}

/// Seeds wrap into 32 bits so negative or oversized integers still map
/// onto a stable stream.
fn parse_seed(key: &str, value: &str) -> SettingsResult<u32> {
    let parsed: i64 = value
        .trim()
        .parse()
        .map_err(|_| SettingsError::invalid(key, format!("{:?} is not an integer", value)))?;
    Ok(parsed as u32)
}

fn parse_bool(key: &str, value: &str) -> SettingsResult<bool> {
    match value.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        _ => Err(SettingsError::invalid(
            key,
            format!("{:?} is not a boolean", value),
        )),
    }
}

fn parse_canvas(options: &BTreeMap<String, String>) -> SettingsResult<Option<CanvasSize>> {
    match (options.get("width"), options.get("height")) {
        (None, None) => Ok(None),
        (Some(w), Some(h)) => Ok(Some(CanvasSize {
            width: parse_f64("width", w)?,
            height: parse_f64("height", h)?,
        })),
        (Some(_), None) => Err(SettingsError::invalid(
            "height",
            "required when width is given",
        )),
        (None, Some(_)) => Err(SettingsError::invalid(
            "width",
            "required when height is given",
        )),
    }
}

fn validate_colour(key: &str, colour: &str) -> SettingsResult<()> {
    let hex = colour
        .strip_prefix('#')
        .ok_or_else(|| SettingsError::invalid(key, format!("{:?} must start with '#'", colour)))?;
    let valid_len = hex.len() == 3 || hex.len() == 6;
    if !valid_len || !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return Err(SettingsError::invalid(
            key,
            format!("{:?} is not a #rgb or #rrggbb colour", colour),
        ));
    }
    Ok(())
}

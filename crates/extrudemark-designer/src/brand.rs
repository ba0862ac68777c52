//! Wordmark and icon presets
//!
//! A brand run produces two documents from one [`BrandConfig`]: the wordmark
//! (the full text, jittered) and a square icon (a single glyph with a fixed
//! tilt and no jitter).

use extrudemark_core::Result;
use extrudemark_settings::BrandConfig;
use serde::Serialize;
use tracing::info;

use crate::block_font::BlockFont;
use crate::font_manager::FontOutlineProvider;
use crate::layout::{LayoutEngine, LayoutMode, LayoutParams, LayoutResult};
use crate::outline::OutlineProvider;
use crate::palette::FacePalette;
use crate::svg_renderer::{render_document, Background, SvgStyle};

pub const WORDMARK_CORNER_RADIUS: f64 = 16.0;
/// Baseline of a fixed-size wordmark as a fraction of the canvas height.
pub const WORDMARK_BASELINE_RATIO: f64 = 0.68;

pub const ICON_FONT_RATIO: f64 = 0.62;
pub const ICON_BASELINE_RATIO: f64 = 0.70;
pub const ICON_ROTATION: f64 = -6.0;
pub const ICON_MIN_DEPTH: f64 = 7.0;
pub const ICON_DEPTH_RATIO: f64 = 0.9;
pub const ICON_CORNER_RATIO: f64 = 0.12;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AssetKind {
    Wordmark,
    Icon,
}

impl AssetKind {
    pub fn file_suffix(&self) -> &'static str {
        match self {
            AssetKind::Wordmark => "logo",
            AssetKind::Icon => "favicon",
        }
    }
}

/// One finished document, ready for an output sink.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderedAsset {
    pub kind: AssetKind,
    pub file_name: String,
    pub svg: String,
    pub layout: LayoutResult,
}

pub fn wordmark_params(config: &BrandConfig) -> LayoutParams {
    let mode = match config.canvas {
        Some(canvas) => LayoutMode::FixedCanvas {
            width: canvas.width,
            height: canvas.height,
            baseline: canvas.height * WORDMARK_BASELINE_RATIO,
        },
        None => LayoutMode::AutoSized {
            inset: config.inset,
        },
    };
    LayoutParams {
        font_size: config.font_size,
        tracking: config.tracking,
        curve_resolution: config.curve_resolution,
        seed: config.seed,
        depth: config.depth,
        depth_angle: config.depth_angle,
        depth_jitter: config.depth_jitter,
        tilt: config.tilt,
        fixed_rotation: None,
        mode,
    }
}

pub fn icon_params(config: &BrandConfig) -> LayoutParams {
    let size = config.icon_size;
    LayoutParams {
        font_size: size * ICON_FONT_RATIO,
        tracking: 0.0,
        curve_resolution: config.curve_resolution,
        seed: config.seed,
        depth: ICON_MIN_DEPTH.max(config.depth * ICON_DEPTH_RATIO),
        depth_angle: config.depth_angle,
        depth_jitter: 0.0,
        tilt: 0.0,
        fixed_rotation: Some(ICON_ROTATION),
        mode: LayoutMode::FixedCanvas {
            width: size,
            height: size,
            baseline: size * ICON_BASELINE_RATIO,
        },
    }
}

/// Outline source for a configuration: the configured font, or the built-in
/// block font when none is set.
pub fn outline_provider(config: &BrandConfig) -> Result<Box<dyn OutlineProvider>> {
    match config.font.as_deref() {
        Some(spec) => Ok(Box::new(FontOutlineProvider::resolve(spec)?)),
        None => {
            info!("No font configured, using the built-in block font");
            Ok(Box::new(BlockFont::new()))
        }
    }
}

/// Renders the brand assets described by one configuration.
pub struct BrandRenderer<P> {
    engine: LayoutEngine<P>,
    config: BrandConfig,
}

impl<P: OutlineProvider> BrandRenderer<P> {
    /// Validates `config` once; rendering never re-checks it.
    pub fn new(config: BrandConfig, provider: P) -> Result<Self> {
        config.validate()?;
        let palette = FacePalette::new(config.accents.clone());
        Ok(Self {
            engine: LayoutEngine::new(provider, palette),
            config,
        })
    }

    pub fn config(&self) -> &BrandConfig {
        &self.config
    }

    pub fn engine(&self) -> &LayoutEngine<P> {
        &self.engine
    }

    fn style(&self, corner_radius: f64) -> SvgStyle {
        let background = (!self.config.transparent).then(|| Background {
            color: self.config.background.clone(),
            radius: corner_radius,
        });
        SvgStyle {
            background,
            top_fill: self.config.top_fill.clone(),
            stroke: self.config.stroke.clone(),
            back_outline: self.config.back_outline,
        }
    }

    fn finish(
        &self,
        kind: AssetKind,
        layout: LayoutResult,
        style: &SvgStyle,
        title: &str,
    ) -> RenderedAsset {
        let svg = render_document(&layout, self.engine.palette(), style, title);
        let file_name = format!("{}-{}.svg", self.config.asset_name(), kind.file_suffix());
        info!(
            "Rendered {} ({} glyphs, {} faces, {}x{})",
            file_name,
            layout.glyphs.len(),
            layout.face_count(),
            layout.width.round(),
            layout.height.round()
        );
        RenderedAsset {
            kind,
            file_name,
            svg,
            layout,
        }
    }

    pub fn render_wordmark(&self) -> Result<RenderedAsset> {
        let layout = self
            .engine
            .layout(&self.config.text, &wordmark_params(&self.config))?;
        let style = self.style(WORDMARK_CORNER_RADIUS);
        Ok(self.finish(AssetKind::Wordmark, layout, &style, &self.config.text))
    }

    pub fn render_icon(&self) -> Result<RenderedAsset> {
        let layout = self
            .engine
            .layout(&self.config.icon_text, &icon_params(&self.config))?;
        let style = self.style((self.config.icon_size * ICON_CORNER_RATIO).round());
        Ok(self.finish(AssetKind::Icon, layout, &style, &self.config.text))
    }

    /// Wordmark then icon. Fails without partial results if either fails.
    pub fn render_all(&self) -> Result<Vec<RenderedAsset>> {
        Ok(vec![self.render_wordmark()?, self.render_icon()?])
    }
}

/// Resolves the outline source for `config` and renders both assets.
pub fn render_assets(config: &BrandConfig) -> Result<Vec<RenderedAsset>> {
    let provider = outline_provider(config)?;
    BrandRenderer::new(config.clone(), provider)?.render_all()
}

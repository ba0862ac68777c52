//! # Extrudemark Designer
//!
//! Turns text into pseudo-3D extruded lettering and renders it as SVG.
//!
//! ## Pipeline
//!
//! ```text
//! OutlineProvider (font file, system font, or block font)
//!   └── LayoutEngine
//!         ├── flatten      (curves to polylines)
//!         ├── extrude      (back copy and side faces)
//!         └── bbox         (rotated bounds, canvas sizing)
//!
//! svg_renderer (LayoutResult to SVG document)
//! brand        (wordmark and icon presets)
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use extrudemark_designer::{render_assets, BrandConfig};
//!
//! let config = BrandConfig::default();
//! for asset in render_assets(&config)? {
//!     std::fs::write(&asset.file_name, asset.svg)?;
//! }
//! ```

pub mod block_font;
pub mod brand;
pub mod extrude;
pub mod flatten;
pub mod font_manager;
pub mod layout;
pub mod outline;
pub mod palette;
pub mod svg_renderer;

pub use block_font::BlockFont;
pub use brand::{
    icon_params, outline_provider, render_assets, wordmark_params, AssetKind, BrandRenderer,
    RenderedAsset,
};
pub use extrude::{build_extrusion, push_side_faces, ExtrusionGeometry, SideFace, FACE_EPSILON};
pub use flatten::{flatten_outline, CLOSE_EPSILON, DEFAULT_CURVE_RESOLUTION};
pub use font_manager::{list_font_families, FontOutlineProvider};
pub use layout::{
    centered_origin, measure_text, GlyphLayout, GlyphPlacement, LayoutEngine, LayoutMode,
    LayoutParams, LayoutResult,
};
pub use outline::OutlineProvider;
pub use palette::{FacePalette, FACES_PER_BAND};
pub use svg_renderer::{escape_xml, format_number, path_data, render_document, SvgStyle};

pub use extrudemark_core::{BoundingBox, Contour, Error, GlyphOutline, PathCommand, Point, Result};
pub use extrudemark_settings::BrandConfig;

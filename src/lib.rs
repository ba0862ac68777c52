//! # Extrudemark
//!
//! Procedural generator for pseudo-3D "extruded" brand marks. From a piece
//! of text and a seed it renders two SVG documents: a wordmark and a square
//! icon.
//!
//! ## Architecture
//!
//! Extrudemark is organized as a workspace with multiple crates:
//!
//! 1. **extrudemark-core** - Geometry types, PRNG, bounding boxes, errors
//! 2. **extrudemark-settings** - Option resolution, defaults, option files
//! 3. **extrudemark-designer** - Flattening, extrusion, layout, SVG output
//! 4. **extrudemark** - Command line binary, logging and output sink
//!
//! Rendering is deterministic: the same text, seed and options always
//! produce byte-identical documents.

pub mod output;

pub use extrudemark_core::{BoundingBox, Error, Point, Result};
pub use extrudemark_designer as designer;
pub use extrudemark_designer::{
    render_assets, AssetKind, BlockFont, BrandRenderer, FontOutlineProvider, LayoutResult,
    OutlineProvider, RenderedAsset,
};
pub use extrudemark_settings::{load_options_file, BrandConfig, SettingsError, KNOWN_KEYS};
pub use output::{DirectorySink, OutputSink};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Build date (set at compile time)
pub const BUILD_DATE: &str = env!("BUILD_DATE");

/// Log line format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Initialize logging
///
/// Logs go to stderr so stdout only carries the written file paths.
/// `RUST_LOG` directives take precedence over the default level, which is
/// `info`, or `debug` when `verbose` is set.
pub fn init_logging(verbose: bool, format: LogFormat) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let level = if verbose { "debug" } else { "info" };
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    match format {
        LogFormat::Text => {
            let fmt_layer = fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(verbose)
                .with_level(true);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
        LogFormat::Json => {
            let fmt_layer = fmt::layer()
                .json()
                .with_writer(std::io::stderr)
                .with_target(true)
                .with_line_number(true);
            tracing_subscriber::registry()
                .with(env_filter)
                .with(fmt_layer)
                .try_init()?;
        }
    }

    Ok(())
}

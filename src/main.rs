//! `extrudemark` CLI: render the wordmark and icon for a brand.

use std::collections::BTreeMap;
use std::path::PathBuf;

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{debug, info};

use extrudemark::designer::list_font_families;
use extrudemark::{
    init_logging, load_options_file, render_assets, BrandConfig, DirectorySink, LogFormat,
    OutputSink,
};

const LONG_VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), " (built ", env!("BUILD_DATE"), ")");

#[derive(Parser, Debug)]
#[command(
    name = "extrudemark",
    version,
    long_version = LONG_VERSION,
    about = "Render extruded wordmark and icon SVGs from text and a seed"
)]
struct Cli {
    /// Read options from a flat TOML or JSON file
    #[arg(long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// Set any option as KEY=VALUE; may be repeated
    #[arg(long = "set", value_name = "KEY=VALUE")]
    set: Vec<String>,

    /// Print the wordmark layout as JSON instead of writing files
    #[arg(long)]
    dump_layout: bool,

    /// List installed font families and exit
    #[arg(long)]
    list_fonts: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Emit log lines as JSON
    #[arg(long)]
    log_json: bool,

    /// Wordmark text
    #[arg(long)]
    text: Option<String>,
    /// Single glyph for the icon
    #[arg(long = "iconText")]
    icon_text: Option<String>,
    /// Base name of the output files
    #[arg(long)]
    name: Option<String>,
    /// Background colour
    #[arg(long)]
    bg: Option<String>,
    /// First accent colour
    #[arg(long)]
    c1: Option<String>,
    /// Second accent colour
    #[arg(long)]
    c2: Option<String>,
    /// Third accent colour
    #[arg(long)]
    c3: Option<String>,
    /// Fourth accent colour
    #[arg(long)]
    c4: Option<String>,
    /// Front face colour
    #[arg(long = "topFill")]
    top_fill: Option<String>,
    /// Outline colour
    #[arg(long)]
    stroke: Option<String>,
    /// Extrusion length
    #[arg(long, allow_hyphen_values = true)]
    depth: Option<String>,
    /// Extrusion direction in degrees
    #[arg(long = "depthAngle", allow_hyphen_values = true)]
    depth_angle: Option<String>,
    /// Random spread of the extrusion, 0 to 1
    #[arg(long = "depthJitter", allow_hyphen_values = true)]
    depth_jitter: Option<String>,
    /// Range of the random per-glyph rotation in degrees
    #[arg(long, allow_hyphen_values = true)]
    tilt: Option<String>,
    /// Extra spacing after every character
    #[arg(long, allow_hyphen_values = true)]
    tracking: Option<String>,
    /// Samples per curve segment
    #[arg(long = "curveRes")]
    curve_res: Option<String>,
    /// Random seed
    #[arg(long, allow_hyphen_values = true)]
    seed: Option<String>,
    /// Omit the background rectangle
    #[arg(long, num_args = 0..=1, default_missing_value = "true")]
    transparent: Option<String>,
    /// Wordmark font size
    #[arg(long = "fontSize")]
    font_size: Option<String>,
    /// Icon canvas size
    #[arg(long = "iconSize")]
    icon_size: Option<String>,
    /// Fixed wordmark canvas width (requires --height)
    #[arg(long)]
    width: Option<String>,
    /// Fixed wordmark canvas height (requires --width)
    #[arg(long)]
    height: Option<String>,
    /// Margin around an auto-sized wordmark
    #[arg(long)]
    inset: Option<String>,
    /// Draw the stroke-only back outline
    #[arg(long = "backOutline", num_args = 0..=1, default_missing_value = "true")]
    back_outline: Option<String>,
    /// Output directory
    #[arg(long = "outDir")]
    out_dir: Option<String>,
    /// Font file path or system family name
    #[arg(long)]
    font: Option<String>,
}

impl Cli {
    /// Option flags given on the command line, keyed like option files.
    fn flag_options(&self) -> Vec<(&'static str, Option<&String>)> {
        vec![
            ("text", self.text.as_ref()),
            ("iconText", self.icon_text.as_ref()),
            ("name", self.name.as_ref()),
            ("bg", self.bg.as_ref()),
            ("c1", self.c1.as_ref()),
            ("c2", self.c2.as_ref()),
            ("c3", self.c3.as_ref()),
            ("c4", self.c4.as_ref()),
            ("topFill", self.top_fill.as_ref()),
            ("stroke", self.stroke.as_ref()),
            ("depth", self.depth.as_ref()),
            ("depthAngle", self.depth_angle.as_ref()),
            ("depthJitter", self.depth_jitter.as_ref()),
            ("tilt", self.tilt.as_ref()),
            ("tracking", self.tracking.as_ref()),
            ("curveRes", self.curve_res.as_ref()),
            ("seed", self.seed.as_ref()),
            ("transparent", self.transparent.as_ref()),
            ("fontSize", self.font_size.as_ref()),
            ("iconSize", self.icon_size.as_ref()),
            ("width", self.width.as_ref()),
            ("height", self.height.as_ref()),
            ("inset", self.inset.as_ref()),
            ("backOutline", self.back_outline.as_ref()),
            ("outDir", self.out_dir.as_ref()),
            ("font", self.font.as_ref()),
        ]
    }

    /// Option file, then `--set` pairs, then dedicated flags.
    fn resolve_options(&self) -> anyhow::Result<BTreeMap<String, String>> {
        let mut options = BTreeMap::new();

        if let Some(path) = &self.config {
            let file_options = load_options_file(path)
                .with_context(|| format!("cannot load options from {}", path.display()))?;
            debug!("Loaded {} options from {}", file_options.len(), path.display());
            options.extend(file_options);
        }

        for pair in &self.set {
            let Some((key, value)) = pair.split_once('=') else {
                bail!("--set expects KEY=VALUE, got {:?}", pair);
            };
            options.insert(key.trim().to_string(), value.to_string());
        }

        for (key, value) in self.flag_options() {
            if let Some(value) = value {
                options.insert(key.to_string(), value.clone());
            }
        }

        Ok(options)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let format = if cli.log_json {
        LogFormat::Json
    } else {
        LogFormat::Text
    };
    init_logging(cli.verbose, format)?;

    if cli.list_fonts {
        for family in list_font_families() {
            println!("{}", family);
        }
        return Ok(());
    }

    let options = cli.resolve_options()?;
    let config = BrandConfig::from_options(&options).context("invalid options")?;
    info!(
        "Rendering {:?} with seed {} into {}",
        config.text,
        config.seed,
        config.out_dir.display()
    );

    // Everything is rendered before anything is written.
    let assets = render_assets(&config)?;

    if cli.dump_layout {
        if let Some(wordmark) = assets.first() {
            println!("{}", serde_json::to_string_pretty(&wordmark.layout)?);
        }
        return Ok(());
    }

    let documents: Vec<(&str, &str)> = assets
        .iter()
        .map(|asset| (asset.file_name.as_str(), asset.svg.as_str()))
        .collect();
    let mut sink = DirectorySink::new(&config.out_dir);
    for path in sink.write_all(&documents)? {
        println!("{}", path.display());
    }

    Ok(())
}

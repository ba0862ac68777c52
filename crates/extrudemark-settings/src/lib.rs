//! Extrudemark Settings Crate
//!
//! Resolves the flat option mapping (command line, `--set` pairs, option
//! files) into a validated [`BrandConfig`].

pub mod config;
pub mod error;

pub use config::{is_known_key, load_options_file, BrandConfig, CanvasSize, KNOWN_KEYS};
pub use error::{SettingsError, SettingsResult};

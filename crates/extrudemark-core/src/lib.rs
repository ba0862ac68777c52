//! # Extrudemark Core
//!
//! Core types and utilities for extrudemark.
//! Provides the geometry value types shared by every crate, the deterministic
//! pseudo-random stream, bounding-box accumulation and the error taxonomy.

pub mod bbox;
pub mod error;
pub mod random;
pub mod types;

pub use bbox::{bounds_of_extrusion, bounds_of_rotated_geometry, merge, merge_bounds, BoundingBox};
pub use error::{Error, Result};
pub use random::SeededRandom;
pub use types::{translate_commands, Contour, GlyphOutline, PathCommand, Point};

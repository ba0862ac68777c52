//! Side-face colouring.

use serde::{Deserialize, Serialize};

/// Number of consecutive faces sharing one accent colour.
pub const FACES_PER_BAND: usize = 3;

/// Cycles accent colours over the side faces of each glyph.
///
/// The face index runs continuously over all contours of a glyph, and the
/// glyph index shifts the starting colour so neighbouring glyphs differ.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FacePalette {
    accents: Vec<String>,
    band: usize,
}

impl FacePalette {
    /// Palette over `accents`; falls back to a neutral grey when empty.
    pub fn new(accents: Vec<String>) -> Self {
        let accents = if accents.is_empty() {
            vec!["#888888".to_string()]
        } else {
            accents
        };
        Self {
            accents,
            band: FACES_PER_BAND,
        }
    }

    pub fn with_band(mut self, band: usize) -> Self {
        self.band = band.max(1);
        self
    }

    pub fn color(&self, face_index: usize, glyph_index: usize) -> &str {
        let slot = (face_index / self.band + glyph_index) % self.accents.len();
        &self.accents[slot]
    }

    /// Base accent for a glyph's back face.
    pub fn glyph_color(&self, glyph_index: usize) -> &str {
        &self.accents[glyph_index % self.accents.len()]
    }

    pub fn accents(&self) -> &[String] {
        &self.accents
    }
}

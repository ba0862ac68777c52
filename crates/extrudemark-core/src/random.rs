//! Deterministic pseudo-random sequence
//!
//! A 32-bit multiply-xor-shift generator (the "mulberry32" mix). All state
//! updates use wrapping `u32` arithmetic so the stream is bit-identical on
//! every platform and matches generators written against the same mix in
//! other languages. Not suitable for anything security related.

use serde::{Deserialize, Serialize};

const GOLDEN_GAMMA: u32 = 0x6D2B_79F5;
const TWO_POW_32: f64 = 4_294_967_296.0;

/// Seedable stream of values in `[0, 1)`.
///
/// Two generators created from the same seed yield identical sequences.
/// The layout engine owns exactly one of these per render call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeededRandom {
    state: u32,
}

impl SeededRandom {
    pub fn new(seed: u32) -> Self {
        Self { state: seed }
    }

    /// Returns the next value in `[0, 1)` and advances the state.
    pub fn next_f64(&mut self) -> f64 {
        self.state = self.state.wrapping_add(GOLDEN_GAMMA);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        f64::from(t ^ (t >> 14)) / TWO_POW_32
    }

    /// Returns a value in `[-span / 2, span / 2)`.
    pub fn centered(&mut self, span: f64) -> f64 {
        (self.next_f64() - 0.5) * span
    }
}

impl Iterator for SeededRandom {
    type Item = f64;

    fn next(&mut self) -> Option<f64> {
        Some(self.next_f64())
    }
}

//! Reproducible noise sources.
//!
//! [`SeededRng`] is the Park–Miller minimal-standard generator
//! (`s ← 16807·s mod (2³¹ − 1)`), useful when a sequence must replay
//! exactly from a seed. [`gaussian`] draws normally distributed values from
//! any [`rand::Rng`] via the Box–Muller transform.

use rand::Rng;
use std::f64::consts::TAU;

const MODULUS: u64 = 2_147_483_647;
const MULTIPLIER: u64 = 16_807;

/// Park–Miller linear-congruential generator.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a generator from `seed`.
    ///
    /// The state must lie in `[1, 2³¹ − 2]`; seeds that reduce to zero would
    /// lock the sequence at zero and are mapped to 1.
    pub fn new(seed: u64) -> Self {
        let state = seed % MODULUS;
        Self {
            state: if state == 0 { 1 } else { state },
        }
    }

    /// Advance and return the raw state in `[1, 2³¹ − 2]`.
    pub fn next_raw(&mut self) -> u32 {
        self.state = (self.state * MULTIPLIER) % MODULUS;
        self.state as u32
    }

    /// Next value in `[0, 1]`.
    pub fn next_f64(&mut self) -> f64 {
        (self.next_raw() as f64 - 1.0) / (MODULUS as f64 - 1.0)
    }

    /// Next value in `[0, 1]` as `f32`.
    pub fn next_f32(&mut self) -> f32 {
        self.next_f64() as f32
    }

    /// Next value in `[lo, hi]`.
    pub fn next_range(&mut self, lo: f32, hi: f32) -> f32 {
        lo + (hi - lo) * self.next_f32()
    }

    /// Normally distributed value drawn from this generator's own sequence.
    pub fn next_gaussian(&mut self, mean: f64, stdev: f64) -> f64 {
        let u1 = self.next_f64();
        let u2 = self.next_f64();
        box_muller(u1, u2) * stdev + mean
    }
}

/// Standard normal deviate from two uniforms in `[0, 1]`.
///
/// `u1` is reflected to `1 − u1` so a zero draw cannot produce `ln(0)`.
pub fn box_muller(u1: f64, u2: f64) -> f64 {
    let u1 = (1.0 - u1).max(f64::MIN_POSITIVE);
    (-2.0 * u1.ln()).sqrt() * (TAU * u2).cos()
}

/// Gaussian-distributed value with the given mean and standard deviation.
pub fn gaussian<R: Rng + ?Sized>(rng: &mut R, mean: f64, stdev: f64) -> f64 {
    let u1: f64 = rng.r#gen();
    let u2: f64 = rng.r#gen();
    box_muller(u1, u2) * stdev + mean
}

//! Small numeric helpers shared by the Abyss crates: a reproducible
//! linear-congruential generator, Gaussian sampling, scalar remapping and
//! the [`Rgb`] colour type used throughout configuration and uniforms.

pub mod color;
pub mod rng;
pub mod scalar;

pub use color::{ColorParseError, Rgb};
pub use rng::{SeededRng, box_muller, gaussian};
pub use scalar::{clamp, lerp, remap};

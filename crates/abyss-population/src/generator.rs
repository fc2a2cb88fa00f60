//! Instance Data Generator: random placement, size and phase for a
//! population, and the count partition across archetypes.

use std::f32::consts::TAU;
use std::ops::Range;

use glam::Vec3;
use rand::Rng;

use crate::instance::InstanceRecord;

/// Size multipliers are drawn uniformly from this range.
pub const SIZE_RANGE: Range<f32> = 0.4..1.0;

/// Split `total` into `shares` counts by floor division, giving the
/// remainder to the last share so the counts always sum to `total`.
///
/// # Panics
///
/// Panics if `shares` is zero.
pub fn partition_counts(total: u32, shares: usize) -> Vec<u32> {
    assert!(shares > 0, "cannot partition into zero shares");
    let per_share = total / shares as u32;
    let mut counts = vec![per_share; shares];
    counts[shares - 1] = total - per_share * (shares as u32 - 1);
    counts
}

/// `type_index` normalised across `type_count` archetypes.
pub fn type_scalar(type_index: usize, type_count: usize) -> f32 {
    if type_count <= 1 {
        return 0.0;
    }
    type_index as f32 / (type_count - 1) as f32
}

/// Uniform point in the axis-aligned cube of side `spread` centred on the
/// origin.
pub fn sample_offset<R: Rng + ?Sized>(spread: f32, rng: &mut R) -> Vec3 {
    let mut axis = || (rng.r#gen::<f32>() - 0.5) * spread;
    Vec3::new(axis(), axis(), axis())
}

/// Generate `count` instances scattered through a cube of side `spread`.
///
/// # Panics
///
/// Panics if `spread` is not positive and finite.
pub fn generate_instances<R: Rng + ?Sized>(
    count: u32,
    spread: f32,
    type_index: usize,
    type_count: usize,
    rng: &mut R,
) -> Vec<InstanceRecord> {
    assert!(
        spread > 0.0 && spread.is_finite(),
        "population spread must be positive, got {spread}"
    );
    let kind = type_scalar(type_index, type_count);
    (0..count)
        .map(|_| InstanceRecord {
            offset: sample_offset(spread, rng),
            size: rng.gen_range(SIZE_RANGE),
            phase: rng.r#gen::<f32>() * TAU,
            kind,
        })
        .collect()
}

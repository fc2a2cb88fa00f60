//! Scalar interpolation helpers.

/// Clamp `value` into `[min, max]`.
///
/// # Panics
///
/// Panics if `min > max`.
pub fn clamp(value: f32, min: f32, max: f32) -> f32 {
    assert!(min <= max, "clamp range is inverted: {min} > {max}");
    value.max(min).min(max)
}

/// Linear interpolation between `a` and `b`. `t` is not clamped.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Remap `value` from `[in_min, in_max]` onto `[out_min, out_max]`.
///
/// A degenerate input range maps everything to `out_min`.
pub fn remap(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span.abs() < f32::EPSILON {
        return out_min;
    }
    out_min + ((value - in_min) / span) * (out_max - out_min)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_inside_and_outside() {
        assert_eq!(clamp(0.5, 0.0, 1.0), 0.5);
        assert_eq!(clamp(-2.0, 0.0, 1.0), 0.0);
        assert_eq!(clamp(7.0, 0.0, 1.0), 1.0);
    }

    #[test]
    #[should_panic(expected = "inverted")]
    fn test_clamp_inverted_range_panics() {
        clamp(0.0, 1.0, 0.0);
    }

    #[test]
    fn test_lerp_endpoints_and_midpoint() {
        assert_eq!(lerp(2.0, 4.0, 0.0), 2.0);
        assert_eq!(lerp(2.0, 4.0, 1.0), 4.0);
        assert!((lerp(2.0, 4.0, 0.5) - 3.0).abs() < 1e-6);
    }

    #[test]
    fn test_remap_maps_linearly() {
        let v = remap(5.0, 0.0, 10.0, 100.0, 200.0);
        assert!((v - 150.0).abs() < 1e-4);
        let inverted = remap(0.25, 0.0, 1.0, 1.0, 0.0);
        assert!((inverted - 0.75).abs() < 1e-6);
    }

    #[test]
    fn test_remap_degenerate_range() {
        assert_eq!(remap(3.0, 1.0, 1.0, -5.0, 5.0), -5.0);
    }
}

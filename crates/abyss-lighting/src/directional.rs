//! Sun light: a directional light from the surface whose intensity and
//! position ripple as if refracted through waves.

use abyss_math::Rgb;

/// Time-varying part of the sun at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SunShimmer {
    pub intensity: f32,
    pub position: glam::Vec3,
}

/// Shimmer at elapsed time `time`: intensity ripples about `base_intensity`
/// and the position wobbles on X and Z; Y stays put.
pub fn sun_shimmer(base_intensity: f32, base_position: glam::Vec3, time: f32) -> SunShimmer {
    SunShimmer {
        intensity: base_intensity + (time * 0.4).sin() * 0.15 + (time * 1.1).sin() * 0.08,
        position: glam::Vec3::new(
            base_position.x + (time * 0.3).sin() * 2.0,
            base_position.y,
            base_position.z + (time * 0.25).cos() * 2.0,
        ),
    }
}

/// CPU-side sun.
#[derive(Clone, Debug)]
pub struct SunLight {
    pub color: Rgb,
    /// Configured intensity; the shimmer oscillates around it.
    pub base_intensity: f32,
    pub base_position: glam::Vec3,
    /// Intensity after the latest shimmer update.
    pub intensity: f32,
    /// Position after the latest shimmer update.
    pub position: glam::Vec3,
}

impl Default for SunLight {
    fn default() -> Self {
        Self::new(Rgb::from_u32(0xaaddff), 1.2, glam::Vec3::new(5.0, 30.0, 10.0))
    }
}

impl SunLight {
    pub fn new(color: Rgb, base_intensity: f32, base_position: glam::Vec3) -> Self {
        Self {
            color,
            base_intensity,
            base_position,
            intensity: base_intensity,
            position: base_position,
        }
    }

    /// Re-evaluate the shimmer at `time`. Overwrites rather than accumulates.
    pub fn update(&mut self, time: f32) {
        let shimmer = sun_shimmer(self.base_intensity, self.base_position, time);
        self.intensity = shimmer.intensity;
        self.position = shimmer.position;
    }

    /// Direction the light travels: from its position toward the origin.
    pub fn direction(&self) -> glam::Vec3 {
        (-self.position).normalize_or_zero()
    }
}

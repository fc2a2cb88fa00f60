//! Non-directional fill lights.

use abyss_math::Rgb;

/// Uniform fill from every direction.
#[derive(Clone, Debug, PartialEq)]
pub struct AmbientLight {
    pub color: Rgb,
    pub intensity: f32,
}

impl Default for AmbientLight {
    fn default() -> Self {
        Self {
            color: Rgb::from_u32(0x003355),
            intensity: 0.2,
        }
    }
}

/// Sky-to-ground gradient fill: blue from above, near-black from the seabed.
#[derive(Clone, Debug, PartialEq)]
pub struct HemisphereLight {
    pub sky_color: Rgb,
    pub ground_color: Rgb,
    pub intensity: f32,
}

impl Default for HemisphereLight {
    fn default() -> Self {
        Self {
            sky_color: Rgb::from_u32(0x446688),
            ground_color: Rgb::from_u32(0x000d1a),
            intensity: 0.35,
        }
    }
}

impl HemisphereLight {
    /// Irradiance colour for a surface with unit normal `normal` (linear RGB,
    /// scaled by intensity).
    pub fn irradiance(&self, normal: glam::Vec3) -> glam::Vec3 {
        let w = normal.y * 0.5 + 0.5;
        self.ground_color.to_linear().lerp(self.sky_color.to_linear(), w) * self.intensity
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hemisphere_blends_by_normal() {
        let h = HemisphereLight::default();
        let up = h.irradiance(glam::Vec3::Y);
        let down = h.irradiance(glam::Vec3::NEG_Y);
        assert!((up - h.sky_color.to_linear() * 0.35).length() < 1e-6);
        assert!((down - h.ground_color.to_linear() * 0.35).length() < 1e-6);
        assert!(up.z > down.z);
    }
}

//! Point light: a localized coloured fill with a finite reach.

use abyss_math::Rgb;

/// CPU-side point light descriptor.
#[derive(Clone, Debug, PartialEq)]
pub struct PointLight {
    pub position: glam::Vec3,
    pub color: Rgb,
    pub intensity: f32,
    /// Beyond this distance the contribution is zero.
    pub distance: f32,
}


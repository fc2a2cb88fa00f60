//! The complete light rig and its per-frame update.

use abyss_math::Rgb;

use crate::ambient::{AmbientLight, HemisphereLight};
use crate::directional::SunLight;
use crate::point::PointLight;

/// Adjustable parts of the rig.
#[derive(Clone, Debug, PartialEq)]
pub struct LightingParams {
    pub sun_intensity: f32,
    pub sun_color: Rgb,
    pub sun_position: glam::Vec3,
    pub ambient_intensity: f32,
    pub ambient_color: Rgb,
}

impl Default for LightingParams {
    fn default() -> Self {
        Self {
            sun_intensity: 1.2,
            sun_color: Rgb::from_u32(0xaaddff),
            sun_position: glam::Vec3::new(5.0, 30.0, 10.0),
            ambient_intensity: 0.2,
            ambient_color: Rgb::from_u32(0x003355),
        }
    }
}

#[derive(Clone, Debug)]
pub struct LightingRig {
    pub ambient: AmbientLight,
    pub sun: SunLight,
    pub hemisphere: HemisphereLight,
    pub points: [PointLight; 2],
}

impl LightingRig {
    pub fn new(params: &LightingParams) -> Self {
        Self {
            ambient: AmbientLight {
                color: params.ambient_color,
                intensity: params.ambient_intensity,
            },
            sun: SunLight::new(params.sun_color, params.sun_intensity, params.sun_position),
            hemisphere: HemisphereLight::default(),
            points: [
                PointLight {
                    position: glam::Vec3::new(-10.0, 5.0, -8.0),
                    color: Rgb::from_u32(0x113344),
                    intensity: 0.3,
                    distance: 30.0,
                },
                PointLight {
                    position: glam::Vec3::new(12.0, -3.0, 6.0),
                    color: Rgb::from_u32(0x0a2233),
                    intensity: 0.2,
                    distance: 25.0,
                },
            ],
        }
    }

    /// Update adjustable values in place. The current shimmer is kept until
    /// the next [`tick`](Self::tick).
    pub fn set_params(&mut self, params: &LightingParams) {
        self.ambient.color = params.ambient_color;
        self.ambient.intensity = params.ambient_intensity;
        self.sun.color = params.sun_color;
        self.sun.base_intensity = params.sun_intensity;
        self.sun.base_position = params.sun_position;
    }

    pub fn tick(&mut self, time: f32) {
        self.sun.update(time);
    }
}

//! Background colour and linear distance fog.

use abyss_config::EnvironmentConfig;
use abyss_math::{Rgb, lerp};
use abyss_render::{Uniform, UniformValue};

const FOG_FAR_MIN: f32 = 35.0;
const FOG_FAR_MAX: f32 = 65.0;

/// Far fog distance for a density in `[0, 1]`: 35 at zero, 65 at one.
pub fn fog_far(density: f32) -> f32 {
    lerp(FOG_FAR_MIN, FOG_FAR_MAX, density)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Environment {
    pub background: Rgb,
    pub fog_color: Rgb,
    pub fog_near: f32,
    pub fog_far: f32,
}

impl Environment {
    pub fn from_config(config: &EnvironmentConfig) -> Self {
        Self {
            background: config.background,
            fog_color: config.fog_color,
            fog_near: config.fog_near,
            fog_far: fog_far(config.fog_density),
        }
    }

    pub fn uniforms(&self) -> Vec<Uniform> {
        vec![
            ("background", UniformValue::Color(self.background)),
            ("fog_color", UniformValue::Color(self.fog_color)),
            ("fog_near", UniformValue::Float(self.fog_near)),
            ("fog_far", UniformValue::Float(self.fog_far)),
        ]
    }
}

impl Default for Environment {
    fn default() -> Self {
        Self::from_config(&EnvironmentConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fog_far_spans_density() {
        assert!((fog_far(0.0) - 35.0).abs() < 1e-6);
        assert!((fog_far(0.5) - 50.0).abs() < 1e-6);
        assert!((fog_far(1.0) - 65.0).abs() < 1e-6);
    }

    #[test]
    fn test_default_colours() {
        let env = Environment::default();
        assert_eq!(env.background, Rgb::from_u32(0x000a1a));
        assert_eq!(env.fog_color, Rgb::from_u32(0x001a33));
        assert!((env.fog_near - 1.0).abs() < 1e-6);
    }
}

//! Ordered post-process chain: bloom, vignette, chromatic aberration,
//! hue/saturation and brightness/contrast.

use glam::Vec2;

use crate::uniform::{Uniform, UniformValue};

/// Glow around bright (bioluminescent) pixels.
#[derive(Clone, Debug, PartialEq)]
pub struct BloomConfig {
    pub intensity: f32,
    /// Luminance above which pixels contribute.
    pub threshold: f32,
    /// Width of the soft knee around the threshold, `[0, 1]`.
    pub smoothing: f32,
}

impl Default for BloomConfig {
    fn default() -> Self {
        Self {
            intensity: 1.0,
            threshold: 0.2,
            smoothing: 0.9,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct VignetteConfig {
    pub offset: f32,
    pub darkness: f32,
}

impl Default for VignetteConfig {
    fn default() -> Self {
        Self {
            offset: 0.25,
            darkness: 0.6,
        }
    }
}

/// Radially modulated colour fringing.
#[derive(Clone, Debug, PartialEq)]
pub struct ChromaticAberrationConfig {
    pub offset: Vec2,
    pub modulation_offset: f32,
}

impl Default for ChromaticAberrationConfig {
    fn default() -> Self {
        Self {
            offset: Vec2::splat(0.0008),
            modulation_offset: 0.4,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct HueSaturationConfig {
    pub hue: f32,
    pub saturation: f32,
}

impl Default for HueSaturationConfig {
    fn default() -> Self {
        Self {
            hue: 0.05,
            saturation: -0.1,
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct BrightnessContrastConfig {
    pub brightness: f32,
    pub contrast: f32,
}

impl Default for BrightnessContrastConfig {
    fn default() -> Self {
        Self {
            brightness: -0.03,
            contrast: 0.08,
        }
    }
}

/// Pass identifiers in application order.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PostEffect {
    Bloom,
    Vignette,
    ChromaticAberration,
    HueSaturation,
    BrightnessContrast,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct PostProcessChain {
    pub bloom: BloomConfig,
    pub vignette: VignetteConfig,
    pub chromatic_aberration: ChromaticAberrationConfig,
    pub hue_saturation: HueSaturationConfig,
    pub brightness_contrast: BrightnessContrastConfig,
}

impl PostProcessChain {
    pub const ORDER: [PostEffect; 5] = [
        PostEffect::Bloom,
        PostEffect::Vignette,
        PostEffect::ChromaticAberration,
        PostEffect::HueSaturation,
        PostEffect::BrightnessContrast,
    ];

    /// Every pass parameter as named uniforms, in pass order.
    pub fn uniforms(&self) -> Vec<Uniform> {
        vec![
            ("bloom_intensity", UniformValue::Float(self.bloom.intensity)),
            ("bloom_threshold", UniformValue::Float(self.bloom.threshold)),
            ("bloom_smoothing", UniformValue::Float(self.bloom.smoothing)),
            ("vignette_offset", UniformValue::Float(self.vignette.offset)),
            ("vignette_darkness", UniformValue::Float(self.vignette.darkness)),
            ("chromatic_offset", UniformValue::Vec2(self.chromatic_aberration.offset)),
            (
                "chromatic_modulation_offset",
                UniformValue::Float(self.chromatic_aberration.modulation_offset),
            ),
            ("hue", UniformValue::Float(self.hue_saturation.hue)),
            ("saturation", UniformValue::Float(self.hue_saturation.saturation)),
            ("brightness", UniformValue::Float(self.brightness_contrast.brightness)),
            ("contrast", UniformValue::Float(self.brightness_contrast.contrast)),
        ]
    }
}

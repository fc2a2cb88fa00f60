//! Suspended particle layer: a cloud of single points filling a cube,
//! slowly rotated as a whole.

use abyss_animation::{ParticleDrift, particle_drift};
use abyss_config::ParticlesConfig;
use abyss_math::SeededRng;
use abyss_render::{Uniform, UniformValue};
use glam::Mat4;
use tracing::debug;

#[derive(Clone, Debug)]
pub struct ParticleLayer {
    config: ParticlesConfig,
    rng: SeededRng,
    positions: Vec<[f32; 3]>,
    drift: ParticleDrift,
}

impl ParticleLayer {
    /// Scatter `config.count` points uniformly through a cube of side
    /// `config.spread` centred on the origin.
    ///
    /// # Panics
    ///
    /// Panics if `config.spread` is not positive.
    pub fn new(config: ParticlesConfig, seed: u64) -> Self {
        let mut rng = SeededRng::new(seed);
        let positions = scatter(&config, &mut rng);
        Self {
            config,
            rng,
            positions,
            drift: particle_drift(0.0),
        }
    }

    pub fn config(&self) -> &ParticlesConfig {
        &self.config
    }

    pub fn positions(&self) -> &[[f32; 3]] {
        &self.positions
    }

    pub fn flat_positions(&self) -> Vec<f32> {
        self.positions.iter().flatten().copied().collect()
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Apply a new configuration. Count or spread changes re-scatter the
    /// points, continuing the generator's sequence, and return `true`.
    pub fn set_config(&mut self, config: ParticlesConfig) -> bool {
        let rebuild = config.count != self.config.count || config.spread != self.config.spread;
        if rebuild {
            self.positions = scatter(&config, &mut self.rng);
        }
        self.config = config;
        rebuild
    }

    pub fn tick(&mut self, time: f32) {
        self.drift = particle_drift(time);
    }

    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_quat(self.drift.rotation())
    }

    pub fn uniforms(&self) -> Vec<Uniform> {
        vec![
            ("model", UniformValue::Mat4(self.model_matrix())),
            ("size", UniformValue::Float(self.config.size)),
            ("color", UniformValue::Color(self.config.color)),
            ("opacity", UniformValue::Float(self.config.opacity)),
        ]
    }
}

fn scatter(config: &ParticlesConfig, rng: &mut SeededRng) -> Vec<[f32; 3]> {
    assert!(
        config.spread > 0.0,
        "particle spread must be positive, got {}",
        config.spread
    );
    let spread = config.spread;
    let mut coord = || (rng.next_f32() - 0.5) * spread;
    let positions: Vec<[f32; 3]> = (0..config.count).map(|_| [coord(), coord(), coord()]).collect();
    debug!(count = positions.len(), spread, "scattered particle layer");
    positions
}

//! Light caustics overlay: one horizontal plane below the scene.

use std::f32::consts::FRAC_PI_2;

use abyss_config::CausticsConfig;
use abyss_mesh::{Mesh, plane};
use abyss_render::{Uniform, UniformValue};
use glam::Vec3;

#[derive(Clone, Debug)]
pub struct CausticsOverlay {
    config: CausticsConfig,
    mesh: Mesh,
    time: f32,
}

impl CausticsOverlay {
    pub fn new(config: CausticsConfig) -> Self {
        let mesh = build_plane(&config);
        Self {
            config,
            mesh,
            time: 0.0,
        }
    }

    pub fn config(&self) -> &CausticsConfig {
        &self.config
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    /// Returns `true` when the plane geometry had to be rebuilt.
    pub fn set_config(&mut self, config: CausticsConfig) -> bool {
        let rebuild = config.scale != self.config.scale || config.y_position != self.config.y_position;
        if rebuild {
            self.mesh = build_plane(&config);
        }
        self.config = config;
        rebuild
    }

    pub fn tick(&mut self, time: f32) {
        self.time = time;
    }

    pub fn uniforms(&self) -> Vec<Uniform> {
        vec![
            ("time", UniformValue::Float(self.time)),
            ("speed", UniformValue::Float(self.config.speed)),
            ("opacity", UniformValue::Float(self.config.opacity)),
            ("color", UniformValue::Color(self.config.color)),
        ]
    }
}

fn build_plane(config: &CausticsConfig) -> Mesh {
    plane(config.scale, config.scale)
        .rotate_x(-FRAC_PI_2)
        .translate(Vec3::new(0.0, config.y_position, 0.0))
        .into_mesh()
}

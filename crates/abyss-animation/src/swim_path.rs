//! Closed-form whale swim paths.
//!
//! Each whale follows an elliptical loop with a slow vertical oscillation,
//! faces along the path tangent and banks gently into the turn.

use std::f32::consts::{FRAC_PI_2, PI};

use glam::{Mat4, Quat, Vec3};

/// Ratio of the path ellipse's Z axis to its X axis.
pub const PATH_ELLIPSE_RATIO: f32 = 0.7;
/// Peak roll into the turn, radians.
pub const BANK_AMPLITUDE: f32 = 0.08;
/// Pitch per unit of vertical tangent.
pub const PITCH_FACTOR: f32 = 0.05;

/// Static per-whale path parameters.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WhalePathConfig {
    pub scale: f32,
    pub radius: f32,
    pub height: f32,
    /// Angular speed in radians per second before the swim multiplier.
    pub speed: f32,
    pub phase: f32,
    pub y_offset: f32,
}

/// The pod: a large far whale, a medium one, a smaller close one and a calf
/// trailing the medium whale.
pub const WHALE_PATHS: [WhalePathConfig; 4] = [
    WhalePathConfig { scale: 4.5, radius: 28.0, height: 3.0, speed: 0.06, phase: 0.0, y_offset: 2.0 },
    WhalePathConfig { scale: 3.0, radius: 20.0, height: 2.0, speed: 0.08, phase: PI * 0.7, y_offset: -1.0 },
    WhalePathConfig { scale: 2.0, radius: 15.0, height: 1.5, speed: 0.1, phase: PI * 1.4, y_offset: -3.0 },
    WhalePathConfig { scale: 1.2, radius: 19.0, height: 2.0, speed: 0.085, phase: PI * 0.7 + 0.3, y_offset: -1.5 },
];

/// User-adjustable multipliers applied on top of every path.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SwimParams {
    pub swim_speed: f32,
    pub path_radius: f32,
}

impl Default for SwimParams {
    fn default() -> Self {
        Self {
            swim_speed: 1.0,
            path_radius: 1.0,
        }
    }
}

/// A whale's transform at one instant.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct WhalePose {
    pub position: Vec3,
    /// Rotation about Y aligning the model's forward axis with the tangent.
    pub heading: f32,
    pub pitch: f32,
    pub bank: f32,
    pub scale: f32,
}

impl WhalePose {
    /// Rotation in X-then-Y-then-Z Euler order: `Rx(pitch)·Ry(heading)·Rz(bank)`.
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch)
            * Quat::from_rotation_y(self.heading)
            * Quat::from_rotation_z(self.bank)
    }

    /// `translation · rotation · uniform scale`.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(Vec3::splat(self.scale), self.rotation(), self.position)
    }
}

impl WhalePathConfig {
    /// Effective angular speed under `params`.
    pub fn angular_speed(&self, params: &SwimParams) -> f32 {
        self.speed * params.swim_speed
    }
}

/// Evaluate a whale's pose at elapsed time `time`.
pub fn whale_pose(config: &WhalePathConfig, params: &SwimParams, time: f32) -> WhalePose {
    let t = time * config.angular_speed(params) + config.phase;
    let r = config.radius * params.path_radius;
    let (sin_t, cos_t) = t.sin_cos();
    let (sin_half, cos_half) = (t * 0.5).sin_cos();

    let position = Vec3::new(
        cos_t * r,
        config.y_offset + sin_half * config.height,
        sin_t * r * PATH_ELLIPSE_RATIO,
    );

    let dx = -sin_t * r;
    let dz = cos_t * r * PATH_ELLIPSE_RATIO;
    let dy = cos_half * config.height * 0.5;

    WhalePose {
        position,
        heading: dz.atan2(dx) + FRAC_PI_2,
        pitch: PITCH_FACTOR * dy,
        bank: BANK_AMPLITUDE * sin_t,
        scale: config.scale,
    }
}

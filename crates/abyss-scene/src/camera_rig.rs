//! Orbit camera around the origin with ambient bob.
//!
//! The orbit is expressed in spherical coordinates (azimuth about +Y, polar
//! angle measured from +Y, distance). Auto-rotation is a closed-form function
//! of elapsed time, so evaluating the rig twice at the same time yields the
//! same camera. Pointer input shifts the orbit and is clamped to the
//! configured polar and distance ranges. Panning is not supported: the
//! camera always looks at the origin.

use std::f32::consts::{PI, TAU};

use abyss_animation::camera_bob;
use abyss_config::CameraConfig;
use abyss_render::{Camera, Uniform, UniformValue};
use glam::Vec3;

/// Keeps the polar angle off the poles, where the view direction is parallel
/// to the up vector and `look_at` degenerates.
const POLAR_EPSILON: f32 = 1e-6;

fn clamp_polar(config: &CameraConfig, polar: f32) -> f32 {
    polar
        .clamp(config.min_polar_angle, config.max_polar_angle)
        .clamp(POLAR_EPSILON, PI - POLAR_EPSILON)
}

#[derive(Clone, Debug)]
pub struct OrbitCameraRig {
    config: CameraConfig,
    target: Vec3,
    /// Azimuth excluding the auto-rotation term.
    azimuth: f32,
    polar: f32,
    distance: f32,
    time: f32,
    camera: Camera,
}

impl OrbitCameraRig {
    pub fn new(config: CameraConfig) -> Self {
        let target = Vec3::ZERO;
        let offset = Vec3::from_array(config.position) - target;
        let distance = offset
            .length()
            .clamp(config.min_distance, config.max_distance);
        let polar = match offset.try_normalize() {
            Some(dir) => dir.y.clamp(-1.0, 1.0).acos(),
            None => std::f32::consts::FRAC_PI_2,
        };
        let polar = clamp_polar(&config, polar);
        let azimuth = offset.x.atan2(offset.z);

        let mut rig = Self {
            target,
            azimuth,
            polar,
            distance,
            time: 0.0,
            camera: Camera::default(),
            config,
        };
        rig.apply_lens();
        rig.tick(0.0);
        rig
    }

    pub fn config(&self) -> &CameraConfig {
        &self.config
    }

    pub fn camera(&self) -> &Camera {
        &self.camera
    }

    pub fn polar(&self) -> f32 {
        self.polar
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }

    /// Azimuth at the last evaluated time, auto-rotation included.
    pub fn azimuth(&self) -> f32 {
        self.azimuth + self.auto_rotation(self.time)
    }

    /// Radians of auto-rotation accumulated by `time`.
    fn auto_rotation(&self, time: f32) -> f32 {
        if self.config.auto_rotate {
            TAU / 60.0 * self.config.auto_rotate_speed * time
        } else {
            0.0
        }
    }

    /// Shift the orbit by pointer-driven deltas. The camera updates on the
    /// next [`tick`](Self::tick).
    pub fn orbit(&mut self, d_azimuth: f32, d_polar: f32, d_distance: f32) {
        self.azimuth += d_azimuth;
        self.polar = clamp_polar(&self.config, self.polar + d_polar);
        self.distance =
            (self.distance + d_distance).clamp(self.config.min_distance, self.config.max_distance);
    }

    /// Apply a new configuration without resetting the user's orbit.
    /// Toggling auto-rotation folds the accumulated angle into the azimuth
    /// so the camera does not jump.
    pub fn set_config(&mut self, config: CameraConfig) {
        let before = self.auto_rotation(self.time);
        self.config = config;
        self.azimuth += before - self.auto_rotation(self.time);
        self.polar = clamp_polar(&self.config, self.polar);
        self.distance = self
            .distance
            .clamp(self.config.min_distance, self.config.max_distance);
        self.apply_lens();
        self.tick(self.time);
    }

    fn apply_lens(&mut self) {
        self.camera.fov_y = self.config.fov_deg.to_radians();
        self.camera.near = self.config.near;
        self.camera.far = self.config.far;
    }

    /// Orbit position at `time` before the bob is applied.
    pub fn orbit_position(&self, time: f32) -> Vec3 {
        let azimuth = self.azimuth + self.auto_rotation(time);
        let (sin_polar, cos_polar) = self.polar.sin_cos();
        self.target
            + self.distance
                * Vec3::new(sin_polar * azimuth.sin(), cos_polar, sin_polar * azimuth.cos())
    }

    pub fn tick(&mut self, time: f32) {
        self.time = time;
        let bob = camera_bob(time);
        let position = self.orbit_position(time) + bob.offset;
        self.camera.look_at(position, self.target, bob.roll);
    }

    pub fn set_aspect_ratio(&mut self, width: f32, height: f32) {
        self.camera.set_aspect_ratio(width, height);
    }

    pub fn uniforms(&self) -> Vec<Uniform> {
        vec![
            ("view_proj", UniformValue::Mat4(self.camera.view_projection_matrix())),
            ("camera_pos", UniformValue::Vec3(self.camera.position)),
        ]
    }
}

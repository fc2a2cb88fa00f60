//! The whale pod: one shared mesh, one pose per whale, each whale bound to
//! an entry of the static path table.

use abyss_animation::{SwimParams, WHALE_PATHS, WhalePathConfig, WhalePose, whale_pose};
use abyss_math::Rgb;
use abyss_mesh::{Archetype, Mesh};
use glam::Mat4;
use tracing::{info, warn};

/// Adjustable whale parameters.
#[derive(Clone, Debug, PartialEq)]
pub struct WhaleParams {
    pub count: usize,
    pub swim_speed: f32,
    pub path_radius: f32,
    pub undulation_amp: f32,
}

impl Default for WhaleParams {
    fn default() -> Self {
        Self {
            count: 4,
            swim_speed: 1.0,
            path_radius: 1.0,
            undulation_amp: 0.15,
        }
    }
}

impl WhaleParams {
    fn swim(&self) -> SwimParams {
        SwimParams {
            swim_speed: self.swim_speed,
            path_radius: self.path_radius,
        }
    }
}

/// Per-whale shading values.
#[derive(Clone, Debug, PartialEq)]
pub struct WhaleUniforms {
    pub time: f32,
    /// Path angular speed times the swim multiplier; drives the tail beat.
    pub swim_speed: f32,
    pub undulation_amp: f32,
    pub skin_color: Rgb,
    pub belly_color: Rgb,
    pub roughness: f32,
}

#[derive(Clone, Debug)]
pub struct Whale {
    pub path: WhalePathConfig,
    pub pose: WhalePose,
    pub uniforms: WhaleUniforms,
}

impl Whale {
    fn new(path: WhalePathConfig, params: &WhaleParams, time: f32) -> Self {
        let swim = params.swim();
        Self {
            path,
            pose: whale_pose(&path, &swim, time),
            uniforms: WhaleUniforms {
                time,
                swim_speed: path.angular_speed(&swim),
                undulation_amp: params.undulation_amp,
                skin_color: Rgb::from_u32(0x1a2a3d),
                belly_color: Rgb::from_u32(0x4a6070),
                roughness: 0.7,
            },
        }
    }

    fn update(&mut self, params: &WhaleParams, time: f32) {
        let swim = params.swim();
        self.pose = whale_pose(&self.path, &swim, time);
        self.uniforms.time = time;
        self.uniforms.swim_speed = self.path.angular_speed(&swim);
        self.uniforms.undulation_amp = params.undulation_amp;
    }

    pub fn model_matrix(&self) -> Mat4 {
        self.pose.model_matrix()
    }
}

#[derive(Clone, Debug)]
pub struct WhalePod {
    params: WhaleParams,
    mesh: Mesh,
    whales: Vec<Whale>,
    time: f32,
}

impl WhalePod {
    pub fn new(params: WhaleParams) -> Self {
        let mesh = Archetype::Whale.build_mesh();
        let whales = Self::spawn(&params, 0.0);
        Self {
            params,
            mesh,
            whales,
            time: 0.0,
        }
    }

    fn spawn(params: &WhaleParams, time: f32) -> Vec<Whale> {
        let count = if params.count > WHALE_PATHS.len() {
            warn!(
                requested = params.count,
                max = WHALE_PATHS.len(),
                "whale count exceeds path table, clamping"
            );
            WHALE_PATHS.len()
        } else {
            params.count
        };
        info!(count, "spawning whale pod");
        WHALE_PATHS[..count]
            .iter()
            .map(|&path| Whale::new(path, params, time))
            .collect()
    }

    pub fn params(&self) -> &WhaleParams {
        &self.params
    }

    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn whales(&self) -> &[Whale] {
        &self.whales
    }

    pub fn len(&self) -> usize {
        self.whales.len()
    }

    pub fn is_empty(&self) -> bool {
        self.whales.is_empty()
    }

    /// Apply new parameters; a count change respawns the pod (the mesh is
    /// kept) and returns `true`.
    pub fn set_params(&mut self, params: WhaleParams) -> bool {
        let rebuild = params.count != self.params.count;
        if rebuild {
            self.whales = Self::spawn(&params, self.time);
        } else {
            for whale in &mut self.whales {
                whale.update(&params, self.time);
            }
        }
        self.params = params;
        rebuild
    }

    /// Re-evaluate every whale's pose and uniforms at `time`.
    pub fn tick(&mut self, time: f32) {
        self.time = time;
        for whale in &mut self.whales {
            whale.update(&self.params, time);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pod_uses_whole_table() {
        let pod = WhalePod::new(WhaleParams::default());
        assert_eq!(pod.len(), 4);
        assert_eq!(pod.whales()[0].path, WHALE_PATHS[0]);
    }

    #[test]
    fn test_count_clamped_to_table() {
        let pod = WhalePod::new(WhaleParams {
            count: 9,
            ..WhaleParams::default()
        });
        assert_eq!(pod.len(), WHALE_PATHS.len());
    }

    #[test]
    fn test_swim_speed_uniform_scales_path_speed() {
        let mut pod = WhalePod::new(WhaleParams {
            swim_speed: 2.0,
            ..WhaleParams::default()
        });
        pod.tick(1.0);
        let w = &pod.whales()[2];
        assert!((w.uniforms.swim_speed - 0.2).abs() < 1e-6);
        assert_eq!(w.uniforms.time, 1.0);
        assert!((w.uniforms.roughness - 0.7).abs() < 1e-6);
    }

    #[test]
    fn test_tick_is_idempotent() {
        let mut pod = WhalePod::new(WhaleParams::default());
        pod.tick(42.0);
        let first: Vec<Mat4> = pod.whales().iter().map(Whale::model_matrix).collect();
        pod.tick(42.0);
        let second: Vec<Mat4> = pod.whales().iter().map(Whale::model_matrix).collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_count_change_respawns() {
        let mut pod = WhalePod::new(WhaleParams::default());
        let vertices = pod.mesh().vertex_count();
        assert!(pod.set_params(WhaleParams {
            count: 2,
            ..WhaleParams::default()
        }));
        assert_eq!(pod.len(), 2);
        assert_eq!(pod.mesh().vertex_count(), vertices);
    }

    #[test]
    fn test_radius_change_in_place() {
        let mut pod = WhalePod::new(WhaleParams::default());
        pod.tick(0.0);
        assert!(!pod.set_params(WhaleParams {
            path_radius: 0.5,
            ..WhaleParams::default()
        }));
        let x = pod.whales()[0].pose.position.x;
        assert!((x - 14.0).abs() < 1e-4, "x = {x}");
    }
}

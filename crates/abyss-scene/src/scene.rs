//! The composed scene and its per-frame update.

use abyss_config::{Config, LightingConfig, PlanktonConfig, PostConfig, WhalesConfig};
use abyss_lighting::{LightingParams, LightingRig};
use abyss_population::{PlanktonField, PlanktonParams, WhaleParams, WhalePod};
use abyss_render::{
    BloomConfig, BrightnessContrastConfig, ChromaticAberrationConfig, EntityKey, HueSaturationConfig,
    PostProcessChain, RenderBackend, Uniform, UniformValue, VignetteConfig,
};
use glam::{Vec2, Vec3};
use rand::SeedableRng;
use rand_xoshiro::Xoshiro256StarStar;
use tracing::{debug, info};

use crate::camera_rig::OrbitCameraRig;
use crate::caustics::CausticsOverlay;
use crate::environment::Environment;
use crate::particles::ParticleLayer;

/// Which entities an [`Scene::apply_config`] call had to rebuild.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SceneChanges {
    pub plankton: bool,
    pub whales: bool,
    pub particles: bool,
    pub caustics: bool,
}

impl SceneChanges {
    pub fn any(&self) -> bool {
        self.plankton || self.whales || self.particles || self.caustics
    }

    /// Names of the rebuilt entities.
    pub fn rebuilt(&self) -> Vec<&'static str> {
        [
            (self.plankton, "plankton"),
            (self.whales, "whales"),
            (self.particles, "particles"),
            (self.caustics, "caustics"),
        ]
        .into_iter()
        .filter_map(|(rebuilt, name)| rebuilt.then_some(name))
        .collect()
    }

    fn merge(&mut self, other: SceneChanges) {
        self.plankton |= other.plankton;
        self.whales |= other.whales;
        self.particles |= other.particles;
        self.caustics |= other.caustics;
    }

    fn all() -> Self {
        Self {
            plankton: true,
            whales: true,
            particles: true,
            caustics: true,
        }
    }
}

/// Every renderable entity of one underwater scene.
///
/// Geometry and instance buffers are produced once per population and
/// handed to the backend by [`upload_pending`](Self::upload_pending); only
/// uniform values change from frame to frame.
pub struct Scene {
    config: Config,
    rng: Xoshiro256StarStar,
    environment: Environment,
    lighting: LightingRig,
    plankton: PlanktonField,
    whales: WhalePod,
    particles: ParticleLayer,
    caustics: CausticsOverlay,
    camera: OrbitCameraRig,
    post: PostProcessChain,
    time: f32,
    pending: SceneChanges,
    /// The pod keeps its mesh across respawns, so it is uploaded once.
    whale_mesh_pending: bool,
}

impl Scene {
    /// Build every entity from `config`. When `config.seed` is set the
    /// populations and particle cloud are reproducible.
    pub fn compose(config: &Config) -> Self {
        let seed = config.seed.unwrap_or_else(rand::random);
        let mut rng = Xoshiro256StarStar::seed_from_u64(seed);

        let plankton = PlanktonField::new(plankton_params(&config.plankton), &mut rng);
        let whales = WhalePod::new(whale_params(&config.whales));
        let particles = ParticleLayer::new(config.particles.clone(), seed);

        info!(
            seed,
            plankton = plankton.total_count(),
            whales = whales.len(),
            particles = particles.len(),
            "composed scene"
        );

        Self {
            environment: Environment::from_config(&config.environment),
            lighting: LightingRig::new(&lighting_params(&config.lighting)),
            plankton,
            whales,
            particles,
            caustics: CausticsOverlay::new(config.caustics.clone()),
            camera: OrbitCameraRig::new(config.camera.clone()),
            post: post_chain(&config.post),
            config: config.clone(),
            rng,
            time: 0.0,
            pending: SceneChanges::all(),
            whale_mesh_pending: true,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn time(&self) -> f32 {
        self.time
    }

    pub fn environment(&self) -> &Environment {
        &self.environment
    }

    pub fn lighting(&self) -> &LightingRig {
        &self.lighting
    }

    pub fn plankton(&self) -> &PlanktonField {
        &self.plankton
    }

    pub fn whales(&self) -> &WhalePod {
        &self.whales
    }

    pub fn particles(&self) -> &ParticleLayer {
        &self.particles
    }

    pub fn caustics(&self) -> &CausticsOverlay {
        &self.caustics
    }

    pub fn camera_rig(&self) -> &OrbitCameraRig {
        &self.camera
    }

    pub fn camera_rig_mut(&mut self) -> &mut OrbitCameraRig {
        &mut self.camera
    }

    pub fn post(&self) -> &PostProcessChain {
        &self.post
    }

    /// Entities rebuilt since the last upload.
    pub fn pending(&self) -> SceneChanges {
        self.pending
    }

    /// Bring every entity in line with `config`. Values are updated in place;
    /// only populations whose size or extent changed are rebuilt, and those
    /// are queued for the next [`upload_pending`](Self::upload_pending).
    pub fn apply_config(&mut self, config: &Config) -> SceneChanges {
        let changes = SceneChanges {
            plankton: self
                .plankton
                .set_params(plankton_params(&config.plankton), &mut self.rng),
            whales: self.whales.set_params(whale_params(&config.whales)),
            particles: self.particles.set_config(config.particles.clone()),
            caustics: self.caustics.set_config(config.caustics.clone()),
        };

        self.environment = Environment::from_config(&config.environment);
        self.lighting.set_params(&lighting_params(&config.lighting));
        self.camera.set_config(config.camera.clone());
        self.post = post_chain(&config.post);
        self.config = config.clone();

        if changes.any() {
            info!(rebuilt = ?changes.rebuilt(), "scene configuration applied");
        } else {
            debug!("scene configuration applied in place");
        }
        self.pending.merge(changes);
        self.tick(self.time);
        changes
    }

    /// Evaluate every animated entity at `elapsed` seconds. A pure function
    /// of `elapsed` and the current configuration.
    pub fn tick(&mut self, elapsed: f32) {
        self.time = elapsed;
        self.plankton.tick(elapsed);
        self.whales.tick(elapsed);
        self.lighting.tick(elapsed);
        self.particles.tick(elapsed);
        self.caustics.tick(elapsed);
        self.camera.tick(elapsed);
    }

    /// Upload geometry and instance buffers for everything built or rebuilt
    /// since the last call. Returns the number of entities uploaded.
    ///
    /// Whales carry no instance buffer: a respawned pod only changes the
    /// per-whale uniforms sent by [`publish`](Self::publish).
    pub fn upload_pending<B: RenderBackend + ?Sized>(&mut self, backend: &mut B) -> usize {
        let pending = std::mem::take(&mut self.pending);
        let mut uploaded = 0;

        if pending.plankton {
            for population in self.plankton.populations() {
                let key = EntityKey::Plankton(population.archetype());
                let mesh = population.mesh();
                backend.upload_mesh(key, mesh.flat_positions(), mesh.flat_normals(), &mesh.indices);
                backend.upload_instances(key, &population.instance_data());
                uploaded += 1;
            }
        }
        if std::mem::take(&mut self.whale_mesh_pending) {
            let mesh = self.whales.mesh();
            backend.upload_mesh(
                EntityKey::WhaleMesh,
                mesh.flat_positions(),
                mesh.flat_normals(),
                &mesh.indices,
            );
            uploaded += 1;
        }
        if pending.particles {
            backend.upload_points(EntityKey::Particles, &self.particles.flat_positions());
            uploaded += 1;
        }
        if pending.caustics {
            let mesh = self.caustics.mesh();
            backend.upload_mesh(
                EntityKey::Caustics,
                mesh.flat_positions(),
                mesh.flat_normals(),
                &mesh.indices,
            );
            uploaded += 1;
        }

        if uploaded > 0 {
            debug!(uploaded, rebuilt = ?pending.rebuilt(), "uploaded scene buffers");
        }
        uploaded
    }

    /// Hand this frame's uniform values to the backend.
    pub fn publish<B: RenderBackend + ?Sized>(&self, backend: &mut B) {
        for population in self.plankton.populations() {
            let u = &population.uniforms;
            backend.update_uniforms(
                EntityKey::Plankton(population.archetype()),
                &[
                    ("time", UniformValue::Float(u.time)),
                    ("drift_speed", UniformValue::Float(u.drift_speed)),
                    ("pulse_intensity", UniformValue::Float(u.pulse_intensity)),
                    ("bounds_y", UniformValue::Float(u.bounds_y)),
                    ("spread", UniformValue::Float(u.spread)),
                    ("color", UniformValue::Color(u.color)),
                    ("bioluminescence", UniformValue::Float(u.bioluminescence)),
                    ("translucency", UniformValue::Float(u.translucency)),
                ],
            );
        }

        for (i, whale) in self.whales.whales().iter().enumerate() {
            let u = &whale.uniforms;
            backend.update_uniforms(
                EntityKey::Whale(i),
                &[
                    ("model", UniformValue::Mat4(whale.model_matrix())),
                    ("time", UniformValue::Float(u.time)),
                    ("swim_speed", UniformValue::Float(u.swim_speed)),
                    ("undulation_amp", UniformValue::Float(u.undulation_amp)),
                    ("skin_color", UniformValue::Color(u.skin_color)),
                    ("belly_color", UniformValue::Color(u.belly_color)),
                    ("roughness", UniformValue::Float(u.roughness)),
                ],
            );
        }

        backend.update_uniforms(EntityKey::Particles, &self.particles.uniforms());
        backend.update_uniforms(EntityKey::Caustics, &self.caustics.uniforms());
        backend.update_uniforms(EntityKey::Environment, &self.environment.uniforms());
        backend.update_uniforms(EntityKey::Lighting, &lighting_uniforms(&self.lighting));
        backend.update_uniforms(EntityKey::Camera, &self.camera.uniforms());
        backend.update_uniforms(EntityKey::PostProcess, &self.post.uniforms());
    }
}

fn lighting_uniforms(rig: &LightingRig) -> Vec<Uniform> {
    let [near, far] = &rig.points;
    vec![
        ("sun_direction", UniformValue::Vec3(rig.sun.direction())),
        ("sun_position", UniformValue::Vec3(rig.sun.position)),
        ("sun_intensity", UniformValue::Float(rig.sun.intensity)),
        ("sun_color", UniformValue::Color(rig.sun.color)),
        ("ambient_color", UniformValue::Color(rig.ambient.color)),
        ("ambient_intensity", UniformValue::Float(rig.ambient.intensity)),
        ("sky_color", UniformValue::Color(rig.hemisphere.sky_color)),
        ("ground_color", UniformValue::Color(rig.hemisphere.ground_color)),
        ("hemisphere_intensity", UniformValue::Float(rig.hemisphere.intensity)),
        ("point0_position", UniformValue::Vec3(near.position)),
        ("point0_color", UniformValue::Color(near.color)),
        ("point0_intensity", UniformValue::Float(near.intensity)),
        ("point0_distance", UniformValue::Float(near.distance)),
        ("point1_position", UniformValue::Vec3(far.position)),
        ("point1_color", UniformValue::Color(far.color)),
        ("point1_intensity", UniformValue::Float(far.intensity)),
        ("point1_distance", UniformValue::Float(far.distance)),
    ]
}

fn plankton_params(config: &PlanktonConfig) -> PlanktonParams {
    PlanktonParams {
        count: config.count,
        spread: config.spread,
        drift_speed: config.drift_speed,
        pulse_intensity: config.pulse_intensity,
        bioluminescence: config.bioluminescence,
        translucency: config.translucency,
        color: config.color,
    }
}

fn whale_params(config: &WhalesConfig) -> WhaleParams {
    WhaleParams {
        count: config.count as usize,
        swim_speed: config.swim_speed,
        path_radius: config.path_radius,
        undulation_amp: config.undulation_amp,
    }
}

fn lighting_params(config: &LightingConfig) -> LightingParams {
    LightingParams {
        sun_intensity: config.sun_intensity,
        sun_color: config.sun_color,
        sun_position: Vec3::from_array(config.sun_position),
        ambient_intensity: config.ambient_intensity,
        ambient_color: config.ambient_color,
    }
}

fn post_chain(config: &PostConfig) -> PostProcessChain {
    PostProcessChain {
        bloom: BloomConfig {
            intensity: config.bloom_intensity,
            threshold: config.bloom_threshold,
            smoothing: config.bloom_smoothing,
        },
        vignette: VignetteConfig {
            offset: config.vignette_offset,
            darkness: config.vignette_darkness,
        },
        chromatic_aberration: ChromaticAberrationConfig {
            offset: Vec2::splat(config.chromatic_offset),
            modulation_offset: config.chromatic_modulation_offset,
        },
        hue_saturation: HueSaturationConfig {
            hue: config.hue,
            saturation: config.saturation,
        },
        brightness_contrast: BrightnessContrastConfig {
            brightness: config.brightness,
            contrast: config.contrast,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn small_config() -> Config {
        let mut config = Config::default();
        config.plankton.count = 400;
        config.particles.count = 200;
        config.seed = Some(11);
        config
    }

    #[test]
    fn test_default_post_config_matches_chain_defaults() {
        assert_eq!(post_chain(&PostConfig::default()), PostProcessChain::default());
    }

    #[test]
    fn test_default_lighting_config_matches_rig_defaults() {
        assert_eq!(lighting_params(&LightingConfig::default()), LightingParams::default());
    }

    #[test]
    fn test_changes_report_names() {
        let changes = SceneChanges {
            whales: true,
            caustics: true,
            ..SceneChanges::default()
        };
        assert!(changes.any());
        assert_eq!(changes.rebuilt(), vec!["whales", "caustics"]);
        assert!(!SceneChanges::default().any());
    }

    #[test]
    fn test_compose_queues_everything() {
        let scene = Scene::compose(&small_config());
        assert_eq!(scene.pending(), SceneChanges::all());
        assert_eq!(scene.plankton().total_count(), 400);
        assert_eq!(scene.whales().len(), 4);
        assert_eq!(scene.particles().len(), 200);
    }

    #[test]
    fn test_uniform_only_change_rebuilds_nothing() {
        let mut scene = Scene::compose(&small_config());
        let mut config = small_config();
        config.plankton.drift_speed = 2.5;
        config.whales.swim_speed = 0.5;
        config.lighting.sun_intensity = 2.0;
        let changes = scene.apply_config(&config);
        assert!(!changes.any());
        assert!((scene.plankton().populations()[0].uniforms.drift_speed - 2.5).abs() < 1e-6);
        assert!((scene.lighting().sun.base_intensity - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_whale_respawn_keeps_uploaded_mesh() {
        let mut scene = Scene::compose(&small_config());
        let mut backend = abyss_render::RecordingBackend::new();
        assert_eq!(scene.upload_pending(&mut backend), 7);

        let mut config = small_config();
        config.whales.count = 2;
        let changes = scene.apply_config(&config);
        assert_eq!(changes.rebuilt(), vec!["whales"]);
        assert_eq!(scene.whales().len(), 2);

        assert_eq!(scene.upload_pending(&mut backend), 0);
        assert_eq!(backend.stats().mesh_uploads, 7);
        assert!(backend.mesh(EntityKey::WhaleMesh).is_some());
    }

    #[test]
    fn test_fog_density_moves_far_plane() {
        let mut scene = Scene::compose(&small_config());
        let mut config = small_config();
        config.environment.fog_density = 1.0;
        scene.apply_config(&config);
        assert!((scene.environment().fog_far - 65.0).abs() < 1e-6);
    }
}

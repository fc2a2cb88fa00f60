use abyss_config::Config;
use abyss_mesh::Archetype;
use abyss_render::{EntityKey, RecordingBackend, Uniform, UniformValue};
use abyss_scene::Scene;

fn test_config() -> Config {
    let mut config = Config::default();
    config.plankton.count = 401;
    config.particles.count = 300;
    config.seed = Some(2024);
    config
}

fn snapshot(backend: &RecordingBackend, key: EntityKey) -> Vec<Uniform> {
    backend.uniforms(key).map(<[Uniform]>::to_vec).unwrap_or_default()
}

#[test]
fn test_compose_uploads_every_population() {
    let mut scene = Scene::compose(&test_config());
    let mut backend = RecordingBackend::new();

    // Four plankton archetypes, the whale mesh, particles and caustics.
    assert_eq!(scene.upload_pending(&mut backend), 7);
    assert_eq!(scene.upload_pending(&mut backend), 0);

    let mut total = 0;
    for archetype in Archetype::PLANKTON {
        let key = EntityKey::Plankton(archetype);
        let mesh = backend.mesh(key).expect("plankton mesh uploaded");
        assert!(mesh.vertex_count() > 0);
        assert!(mesh.indices.iter().all(|&i| (i as usize) < mesh.vertex_count()));
        total += backend.instances(key).expect("instances uploaded").len();
    }
    assert_eq!(total, 401);
    assert_eq!(
        backend.instances(EntityKey::Plankton(Archetype::Radiolarian)).map(<[_]>::len),
        Some(101)
    );

    assert!(backend.mesh(EntityKey::WhaleMesh).is_some());
    let particles = backend.mesh(EntityKey::Particles).expect("particles uploaded");
    assert_eq!(particles.vertex_count(), 300);
    assert!(particles.indices.is_empty());
    assert_eq!(backend.mesh(EntityKey::Caustics).map(|m| m.vertex_count()), Some(4));
}

#[test]
fn test_publish_covers_every_entity() {
    let mut scene = Scene::compose(&test_config());
    let mut backend = RecordingBackend::new();
    scene.upload_pending(&mut backend);
    scene.tick(1.5);
    scene.publish(&mut backend);

    for key in [
        EntityKey::Particles,
        EntityKey::Caustics,
        EntityKey::Environment,
        EntityKey::Lighting,
        EntityKey::Camera,
        EntityKey::PostProcess,
    ] {
        assert!(backend.uniforms(key).is_some(), "{key} not published");
    }
    for i in 0..4 {
        let model = backend.uniform(EntityKey::Whale(i), "model");
        assert!(
            matches!(model, Some(UniformValue::Mat4(_))),
            "whale {i} has no model matrix"
        );
    }
    assert!(backend.uniforms(EntityKey::Whale(4)).is_none());

    let time = backend
        .uniform(EntityKey::Plankton(Archetype::Diatom), "time")
        .and_then(|v| v.as_float());
    assert_eq!(time, Some(1.5));
    assert_eq!(
        backend.uniform(EntityKey::Environment, "fog_far"),
        Some(UniformValue::Float(50.0))
    );
}

#[test]
fn test_tick_is_idempotent() {
    let mut scene = Scene::compose(&test_config());
    let mut backend = RecordingBackend::new();
    let keys = [
        EntityKey::Plankton(Archetype::Copepod),
        EntityKey::Whale(0),
        EntityKey::Whale(3),
        EntityKey::Particles,
        EntityKey::Lighting,
        EntityKey::Camera,
    ];

    scene.tick(42.0);
    scene.publish(&mut backend);
    let first: Vec<_> = keys.iter().map(|&k| snapshot(&backend, k)).collect();

    scene.tick(7.0);
    scene.tick(42.0);
    scene.publish(&mut backend);
    let second: Vec<_> = keys.iter().map(|&k| snapshot(&backend, k)).collect();

    assert_eq!(first, second);
}

#[test]
fn test_whales_move_between_frames() {
    let mut scene = Scene::compose(&test_config());
    let mut backend = RecordingBackend::new();
    scene.tick(0.0);
    scene.publish(&mut backend);
    let before = backend.uniform(EntityKey::Whale(0), "model");
    scene.tick(10.0);
    scene.publish(&mut backend);
    assert_ne!(before, backend.uniform(EntityKey::Whale(0), "model"));
}

#[test]
fn test_count_change_rebuilds_and_reuploads() {
    let mut scene = Scene::compose(&test_config());
    let mut backend = RecordingBackend::new();
    scene.upload_pending(&mut backend);
    let uploads = backend.stats().mesh_uploads;

    let mut config = test_config();
    config.plankton.count = 800;
    config.whales.count = 2;
    let changes = scene.apply_config(&config);
    assert!(changes.plankton && changes.whales);
    assert!(!changes.particles && !changes.caustics);
    assert_eq!(changes.rebuilt(), vec!["plankton", "whales"]);

    // Four plankton populations; the whale mesh is already resident.
    assert_eq!(scene.upload_pending(&mut backend), 4);
    assert_eq!(backend.stats().mesh_uploads, uploads + 4);
    let total: usize = Archetype::PLANKTON
        .iter()
        .filter_map(|&a| backend.instances(EntityKey::Plankton(a)))
        .map(<[_]>::len)
        .sum();
    assert_eq!(total, 800);
    assert_eq!(scene.whales().len(), 2);
}

#[test]
fn test_value_change_updates_uniforms_in_place() {
    let mut scene = Scene::compose(&test_config());
    let mut backend = RecordingBackend::new();
    scene.upload_pending(&mut backend);

    let mut config = test_config();
    config.plankton.pulse_intensity = 2.0;
    config.post.bloom_intensity = 1.8;
    let changes = scene.apply_config(&config);
    assert!(!changes.any());
    assert_eq!(scene.upload_pending(&mut backend), 0);

    scene.publish(&mut backend);
    assert_eq!(
        backend.uniform(EntityKey::Plankton(Archetype::Larvae), "pulse_intensity"),
        Some(UniformValue::Float(2.0))
    );
    assert_eq!(
        backend.uniform(EntityKey::PostProcess, "bloom_intensity"),
        Some(UniformValue::Float(1.8))
    );
}

#[test]
fn test_seeded_scenes_match() {
    let mut a = RecordingBackend::new();
    let mut b = RecordingBackend::new();
    Scene::compose(&test_config()).upload_pending(&mut a);
    Scene::compose(&test_config()).upload_pending(&mut b);
    let key = EntityKey::Plankton(Archetype::Copepod);
    assert_eq!(a.instances(key), b.instances(key));
    assert_eq!(a.mesh(EntityKey::Particles), b.mesh(EntityKey::Particles));
}

//! In-memory backend that keeps the latest upload per entity.

use abyss_population::InstanceRaw;
use rustc_hash::FxHashMap;
use tracing::debug;

use crate::backend::{EntityKey, InstanceUpload, MeshUpload, UniformUpdate};
use crate::uniform::{Uniform, UniformValue};

/// A stored geometry upload. Point clouds have no normals or indices.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordedMesh {
    pub positions: Vec<f32>,
    pub normals: Vec<f32>,
    pub indices: Vec<u32>,
}

impl RecordedMesh {
    pub fn vertex_count(&self) -> usize {
        self.positions.len() / 3
    }
}

/// Call counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct BackendStats {
    pub mesh_uploads: u64,
    pub instance_uploads: u64,
    pub uniform_updates: u64,
}

#[derive(Debug, Default)]
pub struct RecordingBackend {
    meshes: FxHashMap<EntityKey, RecordedMesh>,
    instances: FxHashMap<EntityKey, Vec<InstanceRaw>>,
    uniforms: FxHashMap<EntityKey, Vec<Uniform>>,
    stats: BackendStats,
}

impl RecordingBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn mesh(&self, key: EntityKey) -> Option<&RecordedMesh> {
        self.meshes.get(&key)
    }

    pub fn instances(&self, key: EntityKey) -> Option<&[InstanceRaw]> {
        self.instances.get(&key).map(Vec::as_slice)
    }

    pub fn uniforms(&self, key: EntityKey) -> Option<&[Uniform]> {
        self.uniforms.get(&key).map(Vec::as_slice)
    }

    /// Latest value of one named uniform.
    pub fn uniform(&self, key: EntityKey, name: &str) -> Option<UniformValue> {
        self.uniforms
            .get(&key)?
            .iter()
            .find(|(n, _)| *n == name)
            .map(|(_, v)| *v)
    }

    pub fn stats(&self) -> BackendStats {
        self.stats
    }

    pub fn mesh_keys(&self) -> impl Iterator<Item = &EntityKey> {
        self.meshes.keys()
    }
}

impl MeshUpload for RecordingBackend {
    fn upload_mesh(&mut self, key: EntityKey, positions: &[f32], normals: &[f32], indices: &[u32]) {
        assert_eq!(positions.len() % 3, 0, "{key}: position buffer is not xyz triples");
        assert_eq!(
            normals.len(),
            positions.len(),
            "{key}: normal buffer length must equal position buffer length"
        );
        let vertex_count = positions.len() / 3;
        if let Some(bad) = indices.iter().find(|&&i| i as usize >= vertex_count) {
            panic!("{key}: index {bad} out of range for {vertex_count} vertices");
        }
        debug!(%key, vertices = vertex_count, indices = indices.len(), "mesh upload");
        self.meshes.insert(
            key,
            RecordedMesh {
                positions: positions.to_vec(),
                normals: normals.to_vec(),
                indices: indices.to_vec(),
            },
        );
        self.stats.mesh_uploads += 1;
    }

    fn upload_points(&mut self, key: EntityKey, positions: &[f32]) {
        assert_eq!(positions.len() % 3, 0, "{key}: position buffer is not xyz triples");
        debug!(%key, points = positions.len() / 3, "point upload");
        self.meshes.insert(
            key,
            RecordedMesh {
                positions: positions.to_vec(),
                normals: Vec::new(),
                indices: Vec::new(),
            },
        );
        self.stats.mesh_uploads += 1;
    }
}

impl InstanceUpload for RecordingBackend {
    fn upload_instances(&mut self, key: EntityKey, instances: &[InstanceRaw]) {
        debug!(%key, count = instances.len(), "instance upload");
        self.instances.insert(key, instances.to_vec());
        self.stats.instance_uploads += 1;
    }
}

impl UniformUpdate for RecordingBackend {
    fn update_uniforms(&mut self, key: EntityKey, uniforms: &[Uniform]) {
        let slot = self.uniforms.entry(key).or_default();
        slot.clear();
        slot.extend_from_slice(uniforms);
        self.stats.uniform_updates += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TRIANGLE: [f32; 9] = [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    const UP: [f32; 9] = [0.0, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];

    #[test]
    fn test_mesh_upload_is_recorded() {
        let mut backend = RecordingBackend::new();
        backend.upload_mesh(EntityKey::Caustics, &TRIANGLE, &UP, &[0, 1, 2]);
        let mesh = backend.mesh(EntityKey::Caustics).unwrap();
        assert_eq!(mesh.vertex_count(), 3);
        assert_eq!(backend.stats().mesh_uploads, 1);
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_bad_index_panics() {
        let mut backend = RecordingBackend::new();
        backend.upload_mesh(EntityKey::Caustics, &TRIANGLE, &UP, &[0, 1, 3]);
    }

    #[test]
    #[should_panic(expected = "normal buffer length")]
    fn test_mismatched_normals_panic() {
        let mut backend = RecordingBackend::new();
        backend.upload_mesh(EntityKey::Caustics, &TRIANGLE, &UP[..6], &[0, 1, 2]);
    }

    #[test]
    fn test_uniform_update_replaces() {
        let mut backend = RecordingBackend::new();
        backend.update_uniforms(EntityKey::Lighting, &[("a", UniformValue::Float(1.0))]);
        backend.update_uniforms(EntityKey::Lighting, &[("b", UniformValue::Float(2.0))]);
        assert_eq!(backend.uniform(EntityKey::Lighting, "a"), None);
        assert_eq!(backend.uniform(EntityKey::Lighting, "b"), Some(UniformValue::Float(2.0)));
        assert_eq!(backend.stats().uniform_updates, 2);
    }

    #[test]
    fn test_points_have_no_indices() {
        let mut backend = RecordingBackend::new();
        backend.upload_points(EntityKey::Particles, &TRIANGLE);
        let mesh = backend.mesh(EntityKey::Particles).unwrap();
        assert!(mesh.indices.is_empty());
        assert_eq!(mesh.vertex_count(), 3);
    }
}

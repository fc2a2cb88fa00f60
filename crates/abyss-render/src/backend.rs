//! Upload and update interfaces consumed by the scene.

use std::fmt;

use abyss_mesh::Archetype;
use abyss_population::InstanceRaw;

use crate::uniform::Uniform;

/// Identifies one renderable entity across uploads and updates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum EntityKey {
    /// One plankton population.
    Plankton(Archetype),
    /// The whale mesh shared by the pod.
    WhaleMesh,
    /// One whale's transform and shading values.
    Whale(usize),
    Particles,
    Caustics,
    Environment,
    Lighting,
    Camera,
    PostProcess,
}

impl fmt::Display for EntityKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EntityKey::Plankton(archetype) => write!(f, "plankton/{archetype}"),
            EntityKey::WhaleMesh => f.write_str("whale-mesh"),
            EntityKey::Whale(i) => write!(f, "whale/{i}"),
            EntityKey::Particles => f.write_str("particles"),
            EntityKey::Caustics => f.write_str("caustics"),
            EntityKey::Environment => f.write_str("environment"),
            EntityKey::Lighting => f.write_str("lighting"),
            EntityKey::Camera => f.write_str("camera"),
            EntityKey::PostProcess => f.write_str("post-process"),
        }
    }
}

/// Accepts immutable geometry.
pub trait MeshUpload {
    /// Upload a triangle mesh as flat `xyz` positions, flat `xyz` normals and
    /// `u32` triangle indices. Replaces any earlier mesh under `key`.
    fn upload_mesh(&mut self, key: EntityKey, positions: &[f32], normals: &[f32], indices: &[u32]);

    /// Upload a point cloud as flat `xyz` positions.
    fn upload_points(&mut self, key: EntityKey, positions: &[f32]);
}

/// Accepts per-instance transforms and scalar attributes.
pub trait InstanceUpload {
    fn upload_instances(&mut self, key: EntityKey, instances: &[InstanceRaw]);
}

/// Accepts the per-frame named uniform values of one entity.
pub trait UniformUpdate {
    fn update_uniforms(&mut self, key: EntityKey, uniforms: &[Uniform]);
}

/// Everything the scene needs from a renderer.
pub trait RenderBackend: MeshUpload + InstanceUpload + UniformUpdate {}

impl<T: MeshUpload + InstanceUpload + UniformUpdate> RenderBackend for T {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_display() {
        assert_eq!(EntityKey::Plankton(Archetype::Larvae).to_string(), "plankton/larvae");
        assert_eq!(EntityKey::Whale(2).to_string(), "whale/2");
    }
}

//! `wgpu` implementation of the render boundary: geometry and instances
//! become vertex buffers, uniforms become one uniform buffer per entity.

use abyss_population::InstanceRaw;
use rustc_hash::FxHashMap;
use tracing::{debug, info};
use wgpu::util::DeviceExt;

use crate::backend::{EntityKey, InstanceUpload, MeshUpload, UniformUpdate};
use crate::uniform::{Uniform, pack_uniforms};
use crate::vertex_format::{INSTANCE_LAYOUT, NORMAL_LAYOUT, POSITION_LAYOUT};

/// Error type for headless device initialization.
#[derive(Debug, thiserror::Error)]
pub enum GpuInitError {
    /// No compatible GPU adapter found.
    #[error("no compatible GPU adapter found")]
    NoAdapter,

    /// Failed to request GPU device.
    #[error("failed to request GPU device: {0}")]
    DeviceRequest(#[from] wgpu::RequestDeviceError),
}

/// GPU copy of one mesh or point cloud.
pub struct GpuMesh {
    pub position_buffer: wgpu::Buffer,
    /// `None` for point clouds.
    pub normal_buffer: Option<wgpu::Buffer>,
    pub index_buffer: Option<wgpu::Buffer>,
    pub vertex_count: u32,
    pub index_count: u32,
}

struct GpuInstances {
    buffer: wgpu::Buffer,
    count: u32,
}

pub struct WgpuBackend {
    device: wgpu::Device,
    queue: wgpu::Queue,
    meshes: FxHashMap<EntityKey, GpuMesh>,
    instances: FxHashMap<EntityKey, GpuInstances>,
    uniforms: FxHashMap<EntityKey, wgpu::Buffer>,
}

impl WgpuBackend {
    pub fn new(device: wgpu::Device, queue: wgpu::Queue) -> Self {
        Self {
            device,
            queue,
            meshes: FxHashMap::default(),
            instances: FxHashMap::default(),
            uniforms: FxHashMap::default(),
        }
    }

    /// Open a device without a surface, blocking on adapter and device
    /// requests. `force_fallback` selects the software adapter.
    pub fn headless(force_fallback: bool) -> Result<Self, GpuInitError> {
        pollster::block_on(async {
            let instance = wgpu::Instance::new(&wgpu::InstanceDescriptor::default());
            let adapter = instance
                .request_adapter(&wgpu::RequestAdapterOptions {
                    power_preference: wgpu::PowerPreference::HighPerformance,
                    compatible_surface: None,
                    force_fallback_adapter: force_fallback,
                })
                .await
                .map_err(|_| GpuInitError::NoAdapter)?;

            let adapter_info = adapter.get_info();
            info!(
                name = %adapter_info.name,
                backend = ?adapter_info.backend,
                "selected GPU adapter"
            );

            let (device, queue) = adapter
                .request_device(&wgpu::DeviceDescriptor {
                    label: Some("abyss-device"),
                    ..Default::default()
                })
                .await?;
            Ok(Self::new(device, queue))
        })
    }

    pub fn device(&self) -> &wgpu::Device {
        &self.device
    }

    pub fn mesh(&self, key: EntityKey) -> Option<&GpuMesh> {
        self.meshes.get(&key)
    }

    /// Instance buffer and instance count for `key`.
    pub fn instances(&self, key: EntityKey) -> Option<(&wgpu::Buffer, u32)> {
        self.instances.get(&key).map(|i| (&i.buffer, i.count))
    }

    pub fn uniform_buffer(&self, key: EntityKey) -> Option<&wgpu::Buffer> {
        self.uniforms.get(&key)
    }

    fn vertex_buffer(&self, label: &str, data: &[u8], usage: wgpu::BufferUsages) -> wgpu::Buffer {
        self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
            label: Some(label),
            contents: data,
            usage: usage | wgpu::BufferUsages::COPY_DST,
        })
    }
}

/// Number of `stride`-byte elements in `data`.
fn element_count<T: bytemuck::Pod>(data: &[T], stride: u64) -> u32 {
    (std::mem::size_of_val(data) as u64 / stride) as u32
}

impl MeshUpload for WgpuBackend {
    fn upload_mesh(&mut self, key: EntityKey, positions: &[f32], normals: &[f32], indices: &[u32]) {
        let vertex_count = element_count(positions, POSITION_LAYOUT.array_stride);
        assert_eq!(
            element_count(normals, NORMAL_LAYOUT.array_stride),
            vertex_count,
            "{key}: normal buffer length must equal position buffer length"
        );
        let position_buffer = self.vertex_buffer(
            &format!("{key}-positions"),
            bytemuck::cast_slice(positions),
            wgpu::BufferUsages::VERTEX,
        );
        let normal_buffer = self.vertex_buffer(
            &format!("{key}-normals"),
            bytemuck::cast_slice(normals),
            wgpu::BufferUsages::VERTEX,
        );
        let index_buffer = self.vertex_buffer(
            &format!("{key}-indices"),
            bytemuck::cast_slice(indices),
            wgpu::BufferUsages::INDEX,
        );
        debug!(%key, vertices = vertex_count, "gpu mesh upload");
        self.meshes.insert(
            key,
            GpuMesh {
                position_buffer,
                normal_buffer: Some(normal_buffer),
                index_buffer: Some(index_buffer),
                vertex_count,
                index_count: indices.len() as u32,
            },
        );
    }

    fn upload_points(&mut self, key: EntityKey, positions: &[f32]) {
        let position_buffer = self.vertex_buffer(
            &format!("{key}-points"),
            bytemuck::cast_slice(positions),
            wgpu::BufferUsages::VERTEX,
        );
        self.meshes.insert(
            key,
            GpuMesh {
                position_buffer,
                normal_buffer: None,
                index_buffer: None,
                vertex_count: element_count(positions, POSITION_LAYOUT.array_stride),
                index_count: 0,
            },
        );
    }
}

impl InstanceUpload for WgpuBackend {
    fn upload_instances(&mut self, key: EntityKey, instances: &[InstanceRaw]) {
        let buffer = self.vertex_buffer(
            &format!("{key}-instances"),
            bytemuck::cast_slice(instances),
            wgpu::BufferUsages::VERTEX,
        );
        debug!(%key, count = instances.len(), "gpu instance upload");
        self.instances.insert(
            key,
            GpuInstances {
                buffer,
                count: element_count(instances, INSTANCE_LAYOUT.array_stride),
            },
        );
    }
}

impl UniformUpdate for WgpuBackend {
    fn update_uniforms(&mut self, key: EntityKey, uniforms: &[Uniform]) {
        let packed = pack_uniforms(uniforms);
        let bytes: &[u8] = bytemuck::cast_slice(&packed);
        // Reuse the buffer while the layout size is unchanged.
        match self.uniforms.get(&key) {
            Some(buffer) if buffer.size() == bytes.len() as u64 => {
                self.queue.write_buffer(buffer, 0, bytes);
            }
            _ => {
                let buffer = self.device.create_buffer_init(&wgpu::util::BufferInitDescriptor {
                    label: Some(&format!("{key}-uniforms")),
                    contents: bytes,
                    usage: wgpu::BufferUsages::UNIFORM | wgpu::BufferUsages::COPY_DST,
                });
                self.uniforms.insert(key, buffer);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::uniform::UniformValue;

    fn backend() -> Option<WgpuBackend> {
        WgpuBackend::headless(true).ok()
    }

    #[test]
    fn test_element_count_uses_layout_stride() {
        let positions = [0.0_f32; 9];
        assert_eq!(element_count(&positions, POSITION_LAYOUT.array_stride), 3);
        let instances = [<InstanceRaw as bytemuck::Zeroable>::zeroed(); 4];
        assert_eq!(element_count(&instances, INSTANCE_LAYOUT.array_stride), 4);
    }

    #[test]
    fn test_mesh_buffers_sized_from_input() {
        // No adapter available (headless CI without GPU): skip.
        let Some(mut backend) = backend() else {
            return;
        };
        let positions = [0.0_f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
        let normals = [0.0_f32, 0.0, 1.0, 0.0, 0.0, 1.0, 0.0, 0.0, 1.0];
        backend.upload_mesh(EntityKey::Caustics, &positions, &normals, &[0, 1, 2]);
        let mesh = backend.mesh(EntityKey::Caustics).unwrap();
        assert_eq!(mesh.vertex_count, 3);
        assert_eq!(mesh.index_count, 3);
        assert_eq!(mesh.position_buffer.size(), 36);
    }

    #[test]
    fn test_instance_count_from_stride() {
        let Some(mut backend) = backend() else {
            return;
        };
        let instances = [<InstanceRaw as bytemuck::Zeroable>::zeroed(); 5];
        backend.upload_instances(EntityKey::Plankton(abyss_mesh::Archetype::Copepod), &instances);
        let (buffer, count) = backend
            .instances(EntityKey::Plankton(abyss_mesh::Archetype::Copepod))
            .unwrap();
        assert_eq!(count, 5);
        assert_eq!(buffer.size(), 400);
    }

    #[test]
    fn test_uniform_buffer_reused_for_same_layout() {
        let Some(mut backend) = backend() else {
            return;
        };
        let uniforms = [("time", UniformValue::Float(1.0))];
        backend.update_uniforms(EntityKey::Caustics, &uniforms);
        let size = backend.uniform_buffer(EntityKey::Caustics).unwrap().size();
        backend.update_uniforms(EntityKey::Caustics, &[("time", UniformValue::Float(2.0))]);
        assert_eq!(backend.uniform_buffer(EntityKey::Caustics).unwrap().size(), size);
        assert_eq!(size, 16);
    }
}

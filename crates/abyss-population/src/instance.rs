//! Per-instance records and their GPU representation.

use bytemuck::{Pod, Zeroable};
use glam::{Mat4, Vec3};

/// One individual organism. Immutable after creation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InstanceRecord {
    pub offset: Vec3,
    /// Size multiplier in `[0.4, 1.0)`.
    pub size: f32,
    /// Animation phase offset in `[0, 2π)`.
    pub phase: f32,
    /// Archetype index normalised to `[0, 1]`.
    pub kind: f32,
}

impl InstanceRecord {
    /// Instance transform: a pure translation to the offset.
    pub fn model_matrix(&self) -> Mat4 {
        Mat4::from_translation(self.offset)
    }

    pub fn to_raw(&self) -> InstanceRaw {
        InstanceRaw {
            model: self.model_matrix().to_cols_array_2d(),
            size: self.size,
            phase: self.phase,
            kind: self.kind,
            _padding: 0.0,
        }
    }
}

/// Per-instance vertex buffer entry, 80 bytes.
///
/// Locations 3..=6 carry the model matrix columns, location 7 packs
/// `(size, phase, kind, _)`.
#[repr(C)]
#[derive(Clone, Copy, Debug, PartialEq, Pod, Zeroable)]
pub struct InstanceRaw {
    pub model: [[f32; 4]; 4],
    pub size: f32,
    pub phase: f32,
    pub kind: f32,
    pub _padding: f32,
}

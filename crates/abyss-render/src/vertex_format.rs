//! Canonical `wgpu::VertexBufferLayout`s for organism rendering.
//!
//! Geometry arrives as separate flat position and normal buffers, so each
//! gets its own slot. Instance data follows in a third, per-instance slot.
//!
//! | Slot | Location | Offset | Format    | Fields                    |
//! |------|----------|--------|-----------|---------------------------|
//! | 0    | 0        | 0      | Float32x3 | position                  |
//! | 1    | 1        | 0      | Float32x3 | normal                    |
//! | 2    | 3..=6    | 0..48  | Float32x4 | model matrix columns      |
//! | 2    | 7        | 64     | Float32x4 | size, phase, kind, pad    |

use std::mem;

use abyss_population::InstanceRaw;
use wgpu::{VertexAttribute, VertexBufferLayout, VertexFormat, VertexStepMode};

const VEC3_STRIDE: u64 = mem::size_of::<[f32; 3]>() as u64;

pub const POSITION_ATTRIBUTES: [VertexAttribute; 1] = [VertexAttribute {
    format: VertexFormat::Float32x3,
    offset: 0,
    shader_location: 0,
}];

pub const NORMAL_ATTRIBUTES: [VertexAttribute; 1] = [VertexAttribute {
    format: VertexFormat::Float32x3,
    offset: 0,
    shader_location: 1,
}];

/// Per-instance attributes covering all 80 bytes of [`InstanceRaw`].
pub const INSTANCE_ATTRIBUTES: [VertexAttribute; 5] = [
    VertexAttribute {
        format: VertexFormat::Float32x4,
        offset: 0,
        shader_location: 3,
    },
    VertexAttribute {
        format: VertexFormat::Float32x4,
        offset: 16,
        shader_location: 4,
    },
    VertexAttribute {
        format: VertexFormat::Float32x4,
        offset: 32,
        shader_location: 5,
    },
    VertexAttribute {
        format: VertexFormat::Float32x4,
        offset: 48,
        shader_location: 6,
    },
    VertexAttribute {
        format: VertexFormat::Float32x4,
        offset: 64,
        shader_location: 7,
    },
];

pub const POSITION_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: VEC3_STRIDE,
    step_mode: VertexStepMode::Vertex,
    attributes: &POSITION_ATTRIBUTES,
};

pub const NORMAL_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: VEC3_STRIDE,
    step_mode: VertexStepMode::Vertex,
    attributes: &NORMAL_ATTRIBUTES,
};

pub const INSTANCE_LAYOUT: VertexBufferLayout<'static> = VertexBufferLayout {
    array_stride: mem::size_of::<InstanceRaw>() as u64,
    step_mode: VertexStepMode::Instance,
    attributes: &INSTANCE_ATTRIBUTES,
};

static_assertions::assert_eq_size!(InstanceRaw, [u8; 80]);

const _: () = assert!(INSTANCE_ATTRIBUTES[4].offset + 16 <= mem::size_of::<InstanceRaw>() as u64);
const _: () = assert!(INSTANCE_ATTRIBUTES[4].offset == mem::offset_of!(InstanceRaw, size) as u64);

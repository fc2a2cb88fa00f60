//! Boundary with the rendering engine.
//!
//! The scene core never talks to a GPU directly: it hands flat buffers and
//! named uniform values to a [`RenderBackend`]. [`RecordingBackend`] keeps
//! everything in memory for headless runs and tests; [`WgpuBackend`] turns
//! the same calls into `wgpu` buffers.

mod backend;
mod camera;
mod gpu;
mod post;
mod recording;
mod uniform;
pub mod vertex_format;

pub use backend::{EntityKey, InstanceUpload, MeshUpload, RenderBackend, UniformUpdate};
pub use camera::Camera;
pub use gpu::{GpuInitError, GpuMesh, WgpuBackend};
pub use post::{
    BloomConfig, BrightnessContrastConfig, ChromaticAberrationConfig, HueSaturationConfig,
    PostEffect, PostProcessChain, VignetteConfig,
};
pub use recording::{BackendStats, RecordedMesh, RecordingBackend};
pub use uniform::{Uniform, UniformValue, pack_uniforms};

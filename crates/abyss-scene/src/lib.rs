//! Scene composition: builds every renderable entity from a [`Config`]
//! snapshot, advances them once per frame and hands geometry, instances and
//! uniforms to a [`RenderBackend`](abyss_render::RenderBackend).
//!
//! [`Config`]: abyss_config::Config

mod audio;
mod camera_rig;
mod caustics;
mod environment;
mod particles;
mod scene;

pub use audio::{AudioState, AudioStub};
pub use camera_rig::OrbitCameraRig;
pub use caustics::CausticsOverlay;
pub use environment::{Environment, fog_far};
pub use particles::ParticleLayer;
pub use scene::{Scene, SceneChanges};

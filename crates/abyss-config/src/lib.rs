//! Configuration for the Abyss scene.
//!
//! Settings persist to disk as RON, accept CLI overrides via clap, and are
//! validated against their documented ranges before the scene consumes them.
//! Missing sections take defaults and unknown fields are ignored, so older
//! and newer config files keep loading.

mod cli;
mod config;
mod error;
mod validate;

pub use cli::CliArgs;
pub use config::{
    AudioConfig, CameraConfig, CausticsConfig, Config, DebugConfig, EnvironmentConfig,
    LightingConfig, ParticlesConfig, PlanktonConfig, PostConfig, WhalesConfig,
};
pub use error::ConfigError;

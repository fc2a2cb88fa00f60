//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Abyss command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "abyss", about = "Procedural underwater scene")]
pub struct CliArgs {
    /// Total plankton individuals (500-8000).
    #[arg(long)]
    pub plankton_count: Option<u32>,

    /// Number of whales (1-4).
    #[arg(long)]
    pub whale_count: Option<u32>,

    /// Whale swim speed multiplier.
    #[arg(long)]
    pub swim_speed: Option<f32>,

    /// Plankton drift speed.
    #[arg(long)]
    pub drift_speed: Option<f32>,

    /// Base sun intensity.
    #[arg(long)]
    pub sun_intensity: Option<f32>,

    /// Disable camera auto-rotation.
    #[arg(long)]
    pub no_auto_rotate: bool,

    /// Seed for reproducible populations.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Frames to simulate in headless mode.
    #[arg(long, default_value_t = 600)]
    pub frames: u64,

    /// Fixed simulation frame rate.
    #[arg(long, default_value_t = 60.0)]
    pub fps: f64,

    /// Upload to a headless wgpu device instead of recording in memory.
    #[arg(long)]
    pub gpu: bool,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(count) = args.plankton_count {
            self.plankton.count = count;
        }
        if let Some(count) = args.whale_count {
            self.whales.count = count;
        }
        if let Some(speed) = args.swim_speed {
            self.whales.swim_speed = speed;
        }
        if let Some(speed) = args.drift_speed {
            self.plankton.drift_speed = speed;
        }
        if let Some(intensity) = args.sun_intensity {
            self.lighting.sun_intensity = intensity;
        }
        if args.no_auto_rotate {
            self.camera.auto_rotate = false;
        }
        if let Some(seed) = args.seed {
            self.seed = Some(seed);
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}

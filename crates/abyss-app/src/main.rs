//! Headless Abyss run: composes the underwater scene from `config.ron` plus
//! CLI overrides and steps it at a fixed frame rate. `--gpu` uploads to a
//! headless wgpu device; otherwise uploads are recorded in memory.
//!
//! Run with `cargo run -p abyss-app -- --frames 1200 --seed 7`.

use abyss_app::headless::{HeadlessRunner, RunSummary};
use abyss_app::paths::{log_dir, resolve_config_dir};
use abyss_config::{CliArgs, Config};
use abyss_render::{RecordingBackend, WgpuBackend};
use abyss_scene::{AudioStub, Scene};
use clap::Parser;
use tracing::{info, warn};

fn main() {
    let args = CliArgs::parse();
    let config_dir = resolve_config_dir(args.config.as_deref());

    let mut config = Config::load_or_create(&config_dir).unwrap_or_else(|e| {
        eprintln!("Failed to load config: {e}, using defaults");
        Config::default()
    });
    config.apply_cli_overrides(&args);

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {e}");
        std::process::exit(2);
    }
    if !(args.fps.is_finite() && args.fps > 0.0) {
        eprintln!("Invalid --fps {}: must be a positive number", args.fps);
        std::process::exit(2);
    }

    abyss_log::init_logging(Some(&log_dir(&config_dir)), cfg!(debug_assertions), Some(&config));
    info!(config_dir = %config_dir.display(), "starting abyss");

    let mut audio = AudioStub::new(config.audio.volume);
    audio.init();

    let mut scene = Scene::compose(&config);
    let mut runner = HeadlessRunner::new(args.fps);

    if args.gpu {
        match WgpuBackend::headless(false) {
            Ok(mut backend) => {
                let summary = runner.run(&mut scene, &mut backend, args.frames);
                log_summary(&summary);
                return;
            }
            Err(e) => warn!(error = %e, "GPU unavailable, recording in memory instead"),
        }
    }

    let mut backend = RecordingBackend::new();
    let summary = runner.run(&mut scene, &mut backend, args.frames);
    log_summary(&summary);

    let stats = backend.stats();
    info!(
        mesh_uploads = stats.mesh_uploads,
        instance_uploads = stats.instance_uploads,
        uniform_updates = stats.uniform_updates,
        "recorded backend traffic"
    );
}

fn log_summary(summary: &RunSummary) {
    info!(
        frames = summary.frames,
        simulated = summary.simulated,
        uploads = summary.uploads,
        wall_ms = summary.wall_time.as_millis() as u64,
        fps = summary.throughput(),
        "run complete"
    );
}

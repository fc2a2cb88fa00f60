//! Fixed-step frame driver.
//!
//! Each frame advances the [`FrameClock`] by `1 / fps`, evaluates the scene
//! at the new elapsed time, uploads anything rebuilt and publishes the
//! frame's uniforms. Progress is logged once per simulated second.

use std::time::{Duration, Instant};

use abyss_animation::FrameClock;
use abyss_render::RenderBackend;
use abyss_scene::Scene;
use tracing::info;

/// Outcome of a headless run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RunSummary {
    pub frames: u64,
    /// Scene time reached, in seconds.
    pub simulated: f64,
    /// Entity uploads performed during the run, initial upload included.
    pub uploads: usize,
    pub wall_time: Duration,
}

impl RunSummary {
    /// Simulated frames per wall-clock second.
    pub fn throughput(&self) -> f64 {
        let secs = self.wall_time.as_secs_f64();
        if secs > 0.0 { self.frames as f64 / secs } else { f64::INFINITY }
    }
}

/// Drives a scene through `frames` ticks of `1 / fps` seconds each.
pub struct HeadlessRunner {
    clock: FrameClock,
    step: f64,
}

impl HeadlessRunner {
    /// # Panics
    ///
    /// Panics if `fps` is not a positive finite number.
    pub fn new(fps: f64) -> Self {
        assert!(fps.is_finite() && fps > 0.0, "fps must be positive, got {fps}");
        Self {
            clock: FrameClock::new(),
            step: 1.0 / fps,
        }
    }

    pub fn clock(&self) -> &FrameClock {
        &self.clock
    }

    pub fn run<B: RenderBackend + ?Sized>(
        &mut self,
        scene: &mut Scene,
        backend: &mut B,
        frames: u64,
    ) -> RunSummary {
        let started = Instant::now();
        let mut uploads = scene.upload_pending(backend);
        let mut next_report = self.clock.elapsed().floor() + 1.0;

        for _ in 0..frames {
            self.clock.advance(self.step);
            scene.tick(self.clock.elapsed_f32());
            uploads += scene.upload_pending(backend);
            scene.publish(backend);

            if self.clock.elapsed() + 1e-9 >= next_report {
                info!(
                    frame = self.clock.frame_count(),
                    elapsed = self.clock.elapsed(),
                    "simulated {next_report:.0}s"
                );
                next_report += 1.0;
            }
        }

        RunSummary {
            frames,
            simulated: self.clock.elapsed(),
            uploads,
            wall_time: started.elapsed(),
        }
    }
}

//! Process-wide frame clock: the sole driver of all animation.

use std::time::Instant;
use tracing::warn;

/// Maximum frame delta accepted by the clock. Longer frames (debugger
/// pauses, window drags) are clamped so animation does not jump.
pub const MAX_FRAME_TIME: f64 = 0.25;

/// Monotonically increasing elapsed time, advanced once per frame.
#[derive(Debug)]
pub struct FrameClock {
    previous_time: Option<Instant>,
    elapsed: f64,
    frame_count: u64,
}

impl FrameClock {
    /// A clock at zero elapsed time.
    pub fn new() -> Self {
        Self {
            previous_time: None,
            elapsed: 0.0,
            frame_count: 0,
        }
    }

    /// Advance by an explicit frame delta in seconds and return the new
    /// elapsed time.
    ///
    /// Negative or non-finite deltas are ignored (the frame still counts);
    /// deltas above [`MAX_FRAME_TIME`] are clamped.
    pub fn advance(&mut self, dt: f64) -> f64 {
        let dt = if !dt.is_finite() || dt < 0.0 {
            0.0
        } else if dt > MAX_FRAME_TIME {
            warn!(
                "Frame time {:.1}ms exceeds maximum, clamping to {:.1}ms",
                dt * 1000.0,
                MAX_FRAME_TIME * 1000.0
            );
            MAX_FRAME_TIME
        } else {
            dt
        };
        self.elapsed += dt;
        self.frame_count += 1;
        self.elapsed
    }

    /// Advance by the wall-clock time since the previous `tick`. The first
    /// tick only starts the measurement.
    pub fn tick(&mut self) -> f64 {
        let now = Instant::now();
        let dt = match self.previous_time.replace(now) {
            Some(previous) => now.duration_since(previous).as_secs_f64(),
            None => 0.0,
        };
        self.advance(dt)
    }

    /// Elapsed time in seconds.
    pub fn elapsed(&self) -> f64 {
        self.elapsed
    }

    /// Elapsed time as the `f32` the animation functions consume.
    pub fn elapsed_f32(&self) -> f32 {
        self.elapsed as f32
    }

    pub fn frame_count(&self) -> u64 {
        self.frame_count
    }
}

impl Default for FrameClock {
    fn default() -> Self {
        Self::new()
    }
}

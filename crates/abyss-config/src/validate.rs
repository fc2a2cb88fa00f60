//! Range checks for every documented option.

use crate::config::Config;
use crate::error::ConfigError;

fn check(field: &'static str, value: f64, min: f64, max: f64) -> Result<(), ConfigError> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::OutOfRange {
            field,
            value,
            min,
            max,
        })
    }
}

fn ordered(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min <= max {
        Ok(())
    } else {
        inverted(field, min, max)
    }
}

/// Like [`ordered`], but the two ends may not coincide.
fn strictly_ordered(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    if min < max {
        Ok(())
    } else {
        inverted(field, min, max)
    }
}

fn inverted(field: &'static str, min: f32, max: f32) -> Result<(), ConfigError> {
    Err(ConfigError::InvertedRange {
        field,
        min: min as f64,
        max: max as f64,
    })
}

impl Config {
    /// Check every option against its documented range, reporting the first
    /// violation.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let p = &self.plankton;
        check("plankton.count", p.count as f64, 500.0, 8000.0)?;
        check("plankton.spread", p.spread as f64, 1.0, 200.0)?;
        check("plankton.drift_speed", p.drift_speed as f64, 0.0, 3.0)?;
        check("plankton.pulse_intensity", p.pulse_intensity as f64, 0.0, 3.0)?;
        check("plankton.bioluminescence", p.bioluminescence as f64, 0.0, 2.0)?;
        check("plankton.translucency", p.translucency as f64, 0.0, 1.0)?;

        let w = &self.whales;
        check("whales.count", w.count as f64, 1.0, 4.0)?;
        check("whales.swim_speed", w.swim_speed as f64, 0.1, 3.0)?;
        check("whales.path_radius", w.path_radius as f64, 0.1, 3.0)?;
        check("whales.undulation_amp", w.undulation_amp as f64, 0.0, 0.5)?;

        check("environment.fog_density", self.environment.fog_density as f64, 0.0, 1.0)?;
        check("environment.fog_near", self.environment.fog_near as f64, 0.0, 35.0)?;

        check("lighting.sun_intensity", self.lighting.sun_intensity as f64, 0.0, 3.0)?;
        check("lighting.ambient_intensity", self.lighting.ambient_intensity as f64, 0.0, 3.0)?;

        let c = &self.caustics;
        check("caustics.speed", c.speed as f64, 0.0, 2.0)?;
        check("caustics.opacity", c.opacity as f64, 0.0, 1.0)?;
        check("caustics.scale", c.scale as f64, 1.0, 500.0)?;

        let pt = &self.particles;
        check("particles.count", pt.count as f64, 0.0, 20000.0)?;
        check("particles.spread", pt.spread as f64, 1.0, 200.0)?;
        check("particles.opacity", pt.opacity as f64, 0.0, 1.0)?;

        let cam = &self.camera;
        check("camera.auto_rotate_speed", cam.auto_rotate_speed as f64, 0.0, 10.0)?;
        check("camera.fov_deg", cam.fov_deg as f64, 10.0, 120.0)?;
        check("camera.near", cam.near as f64, 1e-3, 10.0)?;
        check("camera.far", cam.far as f64, 1.0, 10_000.0)?;
        strictly_ordered("camera.near/far", cam.near, cam.far)?;
        check(
            "camera.min_polar_angle",
            cam.min_polar_angle as f64,
            0.0,
            std::f64::consts::PI,
        )?;
        check(
            "camera.max_polar_angle",
            cam.max_polar_angle as f64,
            0.0,
            std::f64::consts::PI,
        )?;
        ordered("camera.polar_angle", cam.min_polar_angle, cam.max_polar_angle)?;
        check("camera.min_distance", cam.min_distance as f64, 0.1, 1000.0)?;
        ordered("camera.distance", cam.min_distance, cam.max_distance)?;

        check("post.bloom_smoothing", self.post.bloom_smoothing as f64, 0.0, 1.0)?;

        check("audio.volume", self.audio.volume as f64, 0.0, 1.0)?;
        Ok(())
    }
}

//! Slow rotation of the ambient particle layer.

use glam::Quat;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ParticleDrift {
    pub yaw: f32,
    pub pitch: f32,
}

impl ParticleDrift {
    pub fn rotation(&self) -> Quat {
        Quat::from_rotation_x(self.pitch) * Quat::from_rotation_y(self.yaw)
    }
}

/// Steady yaw with a small pitch sway.
pub fn particle_drift(time: f32) -> ParticleDrift {
    ParticleDrift {
        yaw: time * 0.01,
        pitch: (time * 0.05).sin() * 0.02,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drift_values() {
        let d = particle_drift(100.0);
        assert!((d.yaw - 1.0).abs() < 1e-6);
        assert!((d.pitch - (5.0_f32).sin() * 0.02).abs() < 1e-6);
    }

    #[test]
    fn test_drift_starts_unrotated() {
        let d = particle_drift(0.0);
        assert!(d.rotation().abs_diff_eq(Quat::IDENTITY, 1e-7));
    }
}

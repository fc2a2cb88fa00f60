//! Ambient "floating" camera motion.

use glam::Vec3;

/// Offset and roll superposed on the user-driven camera.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CameraBob {
    pub offset: Vec3,
    /// Roll about the view axis, radians.
    pub roll: f32,
}

/// Bob at elapsed time `time`: two slow vertical sines, a slower lateral
/// sway and a barely perceptible roll.
pub fn camera_bob(time: f32) -> CameraBob {
    CameraBob {
        offset: Vec3::new(
            (time * 0.2).sin() * 0.2,
            (time * 0.3).sin() * 0.4 + (time * 0.7).sin() * 0.15,
            0.0,
        ),
        roll: (time * 0.15).sin() * 0.01,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bob_at_rest() {
        let bob = camera_bob(0.0);
        assert_eq!(bob.offset, Vec3::ZERO);
        assert_eq!(bob.roll, 0.0);
    }

    #[test]
    fn test_bob_amplitudes_bounded() {
        for i in 0..2000 {
            let bob = camera_bob(i as f32 * 0.137);
            assert!(bob.offset.x.abs() <= 0.2 + 1e-6);
            assert!(bob.offset.y.abs() <= 0.55 + 1e-6);
            assert!(bob.roll.abs() <= 0.01 + 1e-7);
        }
    }

    #[test]
    fn test_bob_known_value() {
        let t = 2.0_f32;
        let bob = camera_bob(t);
        let y = (0.6_f32).sin() * 0.4 + (1.4_f32).sin() * 0.15;
        assert!((bob.offset.y - y).abs() < 1e-6);
        assert!((bob.offset.x - (0.4_f32).sin() * 0.2).abs() < 1e-6);
    }
}

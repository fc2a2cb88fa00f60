//! Inert audio scaffolding. Tracks the state a sound engine would need but
//! plays nothing.

use tracing::info;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct AudioState {
    pub initialized: bool,
    pub playing: bool,
    /// Volume (0.0 - 1.0).
    pub volume: f32,
}

#[derive(Debug)]
pub struct AudioStub {
    state: AudioState,
}

impl AudioStub {
    pub fn new(volume: f32) -> Self {
        Self {
            state: AudioState {
                initialized: false,
                playing: false,
                volume: volume.clamp(0.0, 1.0),
            },
        }
    }

    pub fn init(&mut self) {
        self.state.initialized = true;
        info!(volume = self.state.volume, "audio stub initialised");
    }

    pub fn set_volume(&mut self, volume: f32) {
        self.state.volume = volume.clamp(0.0, 1.0);
    }

    pub fn toggle_playback(&mut self) {
        self.state.playing = !self.state.playing;
    }

    pub fn state(&self) -> AudioState {
        self.state
    }
}

impl Default for AudioStub {
    fn default() -> Self {
        Self::new(0.5)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lifecycle() {
        let mut audio = AudioStub::default();
        assert!(!audio.state().initialized);
        audio.init();
        audio.toggle_playback();
        let state = audio.state();
        assert!(state.initialized && state.playing);
        audio.toggle_playback();
        assert!(!audio.state().playing);
    }

    #[test]
    fn test_volume_is_clamped() {
        let mut audio = AudioStub::new(3.0);
        assert_eq!(audio.state().volume, 1.0);
        audio.set_volume(-0.5);
        assert_eq!(audio.state().volume, 0.0);
        audio.set_volume(0.25);
        assert!((audio.state().volume - 0.25).abs() < 1e-6);
    }
}

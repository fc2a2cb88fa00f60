//! Configuration structs with the scene's defaults and RON persistence.

use std::f32::consts::PI;
use std::path::Path;

use abyss_math::Rgb;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Top-level scene configuration.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Config {
    pub plankton: PlanktonConfig,
    pub whales: WhalesConfig,
    pub environment: EnvironmentConfig,
    pub lighting: LightingConfig,
    pub caustics: CausticsConfig,
    pub particles: ParticlesConfig,
    pub camera: CameraConfig,
    pub post: PostConfig,
    pub audio: AudioConfig,
    pub debug: DebugConfig,
    /// Seed for population placement. `None` draws fresh randomness each run.
    pub seed: Option<u64>,
}

/// Plankton field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PlanktonConfig {
    /// Total individuals across all four archetypes, 500–8000.
    pub count: u32,
    /// Side of the cube the field fills.
    pub spread: f32,
    /// 0–3.
    pub drift_speed: f32,
    /// 0–3.
    pub pulse_intensity: f32,
    /// 0–2.
    pub bioluminescence: f32,
    /// 0–1.
    pub translucency: f32,
    pub color: Rgb,
}

/// Whale pod.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WhalesConfig {
    /// 1–4; one whale per path-table entry.
    pub count: u32,
    pub swim_speed: f32,
    /// Multiplier on every path radius.
    pub path_radius: f32,
    pub undulation_amp: f32,
}

/// Background and fog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct EnvironmentConfig {
    /// 0–1; pushes the fog's far distance out from 35 to 65.
    pub fog_density: f32,
    pub fog_color: Rgb,
    pub background: Rgb,
    pub fog_near: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct LightingConfig {
    pub sun_intensity: f32,
    pub sun_color: Rgb,
    pub sun_position: [f32; 3],
    pub ambient_intensity: f32,
    pub ambient_color: Rgb,
}

/// Caustics overlay plane.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CausticsConfig {
    pub speed: f32,
    pub opacity: f32,
    /// Side length of the plane.
    pub scale: f32,
    pub color: Rgb,
    pub y_position: f32,
}

/// Ambient suspended-particle layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct ParticlesConfig {
    pub count: u32,
    pub spread: f32,
    pub size: f32,
    pub color: Rgb,
    pub opacity: f32,
}

/// Orbit camera.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CameraConfig {
    pub auto_rotate: bool,
    /// Orbits per minute.
    pub auto_rotate_speed: f32,
    pub fov_deg: f32,
    pub near: f32,
    pub far: f32,
    pub position: [f32; 3],
    /// Polar angle limits in radians, measured from +Y.
    pub min_polar_angle: f32,
    pub max_polar_angle: f32,
    pub min_distance: f32,
    pub max_distance: f32,
}

/// Post-process chain parameters.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct PostConfig {
    pub bloom_intensity: f32,
    pub bloom_threshold: f32,
    pub bloom_smoothing: f32,
    pub vignette_offset: f32,
    pub vignette_darkness: f32,
    pub chromatic_offset: f32,
    pub chromatic_modulation_offset: f32,
    pub hue: f32,
    pub saturation: f32,
    pub brightness: f32,
    pub contrast: f32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct AudioConfig {
    /// Volume (0.0 - 1.0).
    pub volume: f32,
}

/// Debug/development configuration.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct DebugConfig {
    /// Log level override (e.g., "debug", "info", "warn").
    pub log_level: String,
}

// --- Default implementations ---

impl Default for PlanktonConfig {
    fn default() -> Self {
        Self {
            count: 4000,
            spread: 35.0,
            drift_speed: 1.0,
            pulse_intensity: 1.0,
            bioluminescence: 0.5,
            translucency: 0.8,
            color: Rgb::from_u32(0x55ccbb),
        }
    }
}

impl Default for WhalesConfig {
    fn default() -> Self {
        Self {
            count: 4,
            swim_speed: 1.0,
            path_radius: 1.0,
            undulation_amp: 0.15,
        }
    }
}

impl Default for EnvironmentConfig {
    fn default() -> Self {
        Self {
            fog_density: 0.5,
            fog_color: Rgb::from_u32(0x001a33),
            background: Rgb::from_u32(0x000a1a),
            fog_near: 1.0,
        }
    }
}

impl Default for LightingConfig {
    fn default() -> Self {
        Self {
            sun_intensity: 1.2,
            sun_color: Rgb::from_u32(0xaaddff),
            sun_position: [5.0, 30.0, 10.0],
            ambient_intensity: 0.2,
            ambient_color: Rgb::from_u32(0x003355),
        }
    }
}

impl Default for CausticsConfig {
    fn default() -> Self {
        Self {
            speed: 0.5,
            opacity: 0.3,
            scale: 80.0,
            color: Rgb::from_u32(0x00ffcc),
            y_position: -15.0,
        }
    }
}

impl Default for ParticlesConfig {
    fn default() -> Self {
        Self {
            count: 3000,
            spread: 50.0,
            size: 0.04,
            color: Rgb::from_u32(0x3388aa),
            opacity: 0.15,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            auto_rotate: true,
            auto_rotate_speed: 0.1,
            fov_deg: 55.0,
            near: 0.1,
            far: 120.0,
            position: [0.0, 2.0, 18.0],
            min_polar_angle: PI * 0.2,
            max_polar_angle: PI * 0.8,
            min_distance: 3.0,
            max_distance: 35.0,
        }
    }
}

impl Default for PostConfig {
    fn default() -> Self {
        Self {
            bloom_intensity: 1.0,
            bloom_threshold: 0.2,
            bloom_smoothing: 0.9,
            vignette_offset: 0.25,
            vignette_darkness: 0.6,
            chromatic_offset: 0.0008,
            chromatic_modulation_offset: 0.4,
            hue: 0.05,
            saturation: -0.1,
            brightness: -0.03,
            contrast: 0.08,
        }
    }
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self { volume: 0.5 }
    }
}

impl Default for DebugConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
        }
    }
}

// --- Load / Save / Reload ---

impl Config {
    /// Load config from the given directory, or create a default config file.
    pub fn load_or_create(config_dir: &Path) -> Result<Self, ConfigError> {
        let config_path = config_dir.join("config.ron");

        if config_path.exists() {
            let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
            let config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;
            log::info!("Loaded config from {}", config_path.display());
            Ok(config)
        } else {
            let config = Config::default();
            config.save(config_dir)?;
            log::info!("Created default config at {}", config_path.display());
            Ok(config)
        }
    }

    /// Save config to the given directory as `config.ron`.
    pub fn save(&self, config_dir: &Path) -> Result<(), ConfigError> {
        std::fs::create_dir_all(config_dir).map_err(ConfigError::WriteError)?;

        let config_path = config_dir.join("config.ron");
        let pretty = ron::ser::PrettyConfig::new()
            .depth_limit(3)
            .separate_tuple_members(true)
            .enumerate_arrays(false);

        let serialized =
            ron::ser::to_string_pretty(self, pretty).map_err(ConfigError::SerializeError)?;

        std::fs::write(&config_path, serialized).map_err(ConfigError::WriteError)?;
        Ok(())
    }

    /// Hot-reload: returns `Some(new_config)` if the file changed, `None` otherwise.
    pub fn reload(&self, config_dir: &Path) -> Result<Option<Self>, ConfigError> {
        let config_path = config_dir.join("config.ron");
        let contents = std::fs::read_to_string(&config_path).map_err(ConfigError::ReadError)?;
        let new_config: Config = ron::from_str(&contents).map_err(ConfigError::ParseError)?;

        if &new_config != self {
            log::info!("Config reloaded with changes");
            Ok(Some(new_config))
        } else {
            Ok(None)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config_serializes() {
        let config = Config::default();
        let ron_str =
            ron::ser::to_string_pretty(&config, ron::ser::PrettyConfig::new().depth_limit(3))
                .unwrap();
        assert!(ron_str.contains("count: 4000"));
        assert!(ron_str.contains("\"#55ccbb\""));
    }

    #[test]
    fn test_config_roundtrip() {
        let mut config = Config::default();
        config.seed = Some(99);
        let ron_str = ron::to_string(&config).unwrap();
        let deserialized: Config = ron::from_str(&ron_str).unwrap();
        assert_eq!(config, deserialized);
    }

    #[test]
    fn test_missing_section_uses_default() {
        let ron_str = "(plankton: (count: 1000), whales: ())";
        let config: Config = ron::from_str(ron_str).unwrap();
        assert_eq!(config.plankton.count, 1000);
        assert_eq!(config.plankton.spread, 35.0);
        assert_eq!(config.caustics, CausticsConfig::default());
        assert_eq!(config.seed, None);
    }

    #[test]
    fn test_extra_field_ignored() {
        let result: Result<Config, _> = ron::from_str("(future_setting: true)");
        assert!(result.is_ok());
    }

    #[test]
    fn test_bad_colour_is_parse_error() {
        let result: Result<Config, _> = ron::from_str("(plankton: (color: \"#12345\"))");
        assert!(result.is_err());
    }

    #[test]
    fn test_save_and_load() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = Config::default();
        config.plankton.count = 6000;
        config.lighting.sun_color = Rgb::from_u32(0x102030);

        config.save(dir.path()).unwrap();
        let loaded = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, loaded);
    }

    #[test]
    fn test_load_creates_default_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_or_create(dir.path()).unwrap();
        assert_eq!(config, Config::default());
        assert!(dir.path().join("config.ron").exists());
    }

    #[test]
    fn test_reload_detects_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();

        let mut modified = config.clone();
        modified.whales.count = 2;
        modified.save(dir.path()).unwrap();

        let result = config.reload(dir.path()).unwrap();
        assert_eq!(result.unwrap().whales.count, 2);
    }

    #[test]
    fn test_reload_no_changes() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::default();
        config.save(dir.path()).unwrap();
        assert!(config.reload(dir.path()).unwrap().is_none());
    }

    #[test]
    fn test_invalid_ron_produces_error() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("config.ron"), "{{not valid}}").unwrap();
        let result = Config::load_or_create(dir.path());
        assert!(matches!(result, Err(ConfigError::ParseError(_))));
    }
}

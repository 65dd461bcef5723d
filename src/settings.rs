//! Host settings
//!
//! Gameplay tuning is fixed in `consts`; these only shape how the host runs
//! the session.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::consts::TICK_INTERVAL_MS;

/// Host settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame interval in milliseconds
    pub tick_interval_ms: u64,
    /// RNG seed (random when absent)
    pub seed: Option<u64>,
    /// Directory holding shoot.wav, hit.wav, gameover.wav
    pub sounds_dir: PathBuf,
    /// Master volume (0.0 - 1.0). Volume control is not implemented beyond
    /// 0.0 silencing everything.
    pub master_volume: f32,
    /// Mute all cues
    pub muted: bool,
    /// Emit a render snapshot every N frames
    pub snapshot_every: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            seed: None,
            sounds_dir: PathBuf::from("sounds"),
            master_volume: 0.8,
            muted: false,
            snapshot_every: 1,
        }
    }
}

impl Settings {
    /// Environment variable naming a JSON settings file
    const ENV_PATH: &'static str = "STARWARS_SETTINGS";

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from the file named by `STARWARS_SETTINGS`, falling back
    /// to defaults on any problem
    pub fn load() -> Self {
        let Ok(path) = std::env::var(Self::ENV_PATH) else {
            log::info!("Using default settings");
            return Self::default();
        };

        match std::fs::read_to_string(&path) {
            Ok(json) => match Self::from_json(&json) {
                Ok(settings) => {
                    log::info!("Loaded settings from {}", path);
                    settings
                }
                Err(e) => {
                    log::warn!("Invalid settings file {}: {} - using defaults", path, e);
                    Self::default()
                }
            },
            Err(e) => {
                log::warn!("Cannot read settings file {}: {} - using defaults", path, e);
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_keeps_defaults() {
        let settings = Settings::from_json(r#"{ "seed": 77, "muted": true }"#).unwrap();
        assert_eq!(settings.seed, Some(77));
        assert!(settings.muted);
        assert_eq!(settings.tick_interval_ms, 16);
        assert_eq!(settings.sounds_dir, PathBuf::from("sounds"));
        assert_eq!(settings.snapshot_every, 1);
    }

    #[test]
    fn test_bad_json_is_error() {
        assert!(Settings::from_json("{ seed: ").is_err());
        assert!(Settings::from_json(r#"{ "tick_interval_ms": "fast" }"#).is_err());
    }
}

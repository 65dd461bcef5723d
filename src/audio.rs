//! Audio cue sink
//!
//! The simulation only requests cues. Decoding and device output belong to a
//! front end; the headless host ships `LoggingAudio`, which checks which cue
//! files exist and logs the cues a player would hear. A missing file silences
//! its cue, so audio problems never reach gameplay.

use std::path::{Path, PathBuf};

use crate::settings::Settings;
use crate::sim::SoundCue;

/// Anything that can take cue requests from the game
pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
}

impl SoundCue {
    /// Sound file name under the sounds directory
    pub fn file_name(self) -> &'static str {
        match self {
            SoundCue::Shoot => "shoot.wav",
            SoundCue::Hit => "hit.wav",
            SoundCue::GameOver => "gameover.wav",
        }
    }

    pub const ALL: [SoundCue; 3] = [SoundCue::Shoot, SoundCue::Hit, SoundCue::GameOver];
}

/// Logs audible cues instead of playing them
pub struct LoggingAudio {
    shoot: Option<PathBuf>,
    hit: Option<PathBuf>,
    game_over: Option<PathBuf>,
    master_volume: f32,
    muted: bool,
    logged: u64,
}

impl LoggingAudio {
    /// Look for cue files under `dir`. Missing files are logged and the cue
    /// becomes a no-op.
    pub fn load(dir: &Path) -> Self {
        let resolve = |cue: SoundCue| {
            let path = dir.join(cue.file_name());
            if path.is_file() {
                log::debug!("Found {:?} sound at {}", cue, path.display());
                Some(path)
            } else {
                log::warn!("Error loading sound {} - {:?} cue disabled", path.display(), cue);
                None
            }
        };
        Self {
            shoot: resolve(SoundCue::Shoot),
            hit: resolve(SoundCue::Hit),
            game_over: resolve(SoundCue::GameOver),
            master_volume: 0.8,
            muted: false,
            logged: 0,
        }
    }

    pub fn from_settings(settings: &Settings) -> Self {
        let mut audio = Self::load(&settings.sounds_dir);
        audio.set_master_volume(settings.master_volume);
        audio.set_muted(settings.muted);
        audio
    }

    /// Set master volume (0.0 - 1.0)
    pub fn set_master_volume(&mut self, vol: f32) {
        self.master_volume = vol.clamp(0.0, 1.0);
    }

    /// Mute/unmute all audio
    pub fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
    }

    fn effective_volume(&self) -> f32 {
        if self.muted { 0.0 } else { self.master_volume }
    }

    fn source(&self, cue: SoundCue) -> Option<&Path> {
        match cue {
            SoundCue::Shoot => self.shoot.as_deref(),
            SoundCue::Hit => self.hit.as_deref(),
            SoundCue::GameOver => self.game_over.as_deref(),
        }
    }

    /// Cues that were audible (file present, not muted) and got logged
    pub fn logged(&self) -> u64 {
        self.logged
    }
}

impl AudioSink for LoggingAudio {
    fn play(&mut self, cue: SoundCue) {
        let vol = self.effective_volume();
        if vol <= 0.0 {
            return;
        }
        let Some(path) = self.source(cue) else {
            return;
        };
        log::info!("Cue {:?} ({}) at volume {:.2}", cue, path.display(), vol);
        self.logged += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_sounds(name: &str, files: &[&str]) -> PathBuf {
        let dir = std::env::temp_dir().join(format!("starwars-{}-{}", name, std::process::id()));
        std::fs::create_dir_all(&dir).unwrap();
        for file in files {
            std::fs::write(dir.join(file), b"RIFF").unwrap();
        }
        dir
    }

    #[test]
    fn test_missing_files_are_silent() {
        let mut audio = LoggingAudio::load(Path::new("/nonexistent/starwars/sounds"));
        for cue in SoundCue::ALL {
            assert!(audio.source(cue).is_none());
            audio.play(cue);
        }
        assert_eq!(audio.logged(), 0);
    }

    #[test]
    fn test_logs_cues_with_files() {
        let dir = temp_sounds("present", &["hit.wav"]);

        let mut audio = LoggingAudio::load(&dir);
        audio.play(SoundCue::Hit);
        audio.play(SoundCue::Shoot);
        assert_eq!(audio.logged(), 1);

        audio.set_muted(true);
        audio.play(SoundCue::Hit);
        assert_eq!(audio.logged(), 1);

        std::fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_zero_volume_silences() {
        let dir = temp_sounds("volume", &["shoot.wav", "hit.wav", "gameover.wav"]);
        let settings = Settings {
            sounds_dir: dir.clone(),
            master_volume: -1.0,
            ..Settings::default()
        };

        let mut audio = LoggingAudio::from_settings(&settings);
        assert_eq!(audio.master_volume, 0.0);
        audio.play(SoundCue::GameOver);
        assert_eq!(audio.logged(), 0);

        audio.set_master_volume(3.0);
        assert_eq!(audio.master_volume, 1.0);
        audio.play(SoundCue::GameOver);
        assert_eq!(audio.logged(), 1);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}

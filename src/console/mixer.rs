use crate::domain::audio::{AudioSubsystem, SubsystemError};
use std::path::{Path, PathBuf};
use tracing::{debug, info};

/// An audio backend that narrates playback through the log instead of producing sound.
///
/// It enforces the same preconditions as a real mixer: a configured output device, an existing
/// source file and an initialized subsystem before anything can be played.
#[derive(Debug)]
pub struct ConsoleMixer {
    device: Option<String>,
    initialized: bool,
    loaded: Option<PathBuf>,
    looping: bool,
    volume: f64,
}

impl ConsoleMixer {
    pub fn new(device: Option<&str>) -> Self {
        ConsoleMixer {
            device: device.filter(|device| !device.trim().is_empty()).map(str::to_string),
            initialized: false,
            loaded: None,
            looping: false,
            volume: 1.0,
        }
    }
}

#[cfg(test)]
impl ConsoleMixer {
    pub fn is_looping(&self) -> bool {
        self.looping
    }

    pub fn volume(&self) -> f64 {
        self.volume
    }
}

impl AudioSubsystem for ConsoleMixer {
    fn init(&mut self) -> Result<(), SubsystemError> {
        let Some(device) = &self.device else {
            return Err(SubsystemError::NoDevice);
        };

        if !self.initialized {
            info!(device = %device, "🔈 Initialized audio output");
            self.initialized = true;
        }
        Ok(())
    }

    fn load(&mut self, source: &Path) -> Result<(), SubsystemError> {
        if !self.initialized {
            return Err(SubsystemError::NotInitialized);
        }

        if !source.is_file() {
            return Err(SubsystemError::Load {
                path: source.display().to_string(),
                reason: "no such file".to_string(),
            });
        }

        debug!(source = %source.display(), "Loaded audio source");
        self.loaded = Some(source.to_path_buf());
        Ok(())
    }

    fn play(&mut self, looping: bool) -> Result<(), SubsystemError> {
        if !self.initialized {
            return Err(SubsystemError::NotInitialized);
        }
        let Some(source) = &self.loaded else {
            return Err(SubsystemError::NothingLoaded);
        };

        info!(source = %source.display(), looping, "🎵 Playing at {:.0}%", self.volume * 100.0);
        self.looping = looping;
        Ok(())
    }

    fn stop(&mut self) {
        if self.looping {
            info!("⏹️ Stopped playback");
        }
        self.looping = false;
    }

    fn set_volume(&mut self, volume: f64) {
        self.volume = volume.clamp(0.0, 1.0);
        debug!("Volume set to {:.2}", self.volume);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    fn existing_source() -> PathBuf {
        Path::new(env!("CARGO_MANIFEST_DIR")).join("Cargo.toml")
    }

    #[rstest]
    #[case(None)]
    #[case(Some(""))]
    #[case(Some("  "))]
    fn init_fails_without_an_output_device(#[case] device: Option<&str>) {
        let mut mixer = ConsoleMixer::new(device);

        assert_eq!(mixer.init(), Err(SubsystemError::NoDevice));
    }

    #[test]
    fn loops_a_loaded_source() {
        let mut mixer = ConsoleMixer::new(Some("default"));

        mixer.init().unwrap();
        mixer.load(&existing_source()).unwrap();
        mixer.play(true).unwrap();

        assert!(mixer.is_looping());

        mixer.stop();
        assert!(!mixer.is_looping());
    }

    #[test]
    fn load_fails_for_a_missing_source() {
        let mut mixer = ConsoleMixer::new(Some("default"));
        mixer.init().unwrap();

        let result = mixer.load(Path::new("does/not/exist.mp3"));

        assert_eq!(
            result,
            Err(SubsystemError::Load {
                path: "does/not/exist.mp3".to_string(),
                reason: "no such file".to_string()
            })
        );
    }

    #[test]
    fn load_and_play_require_initialization() {
        let mut mixer = ConsoleMixer::new(Some("default"));

        assert_eq!(mixer.load(&existing_source()), Err(SubsystemError::NotInitialized));
        assert_eq!(mixer.play(true), Err(SubsystemError::NotInitialized));
    }

    #[test]
    fn play_requires_a_loaded_source() {
        let mut mixer = ConsoleMixer::new(Some("default"));
        mixer.init().unwrap();

        assert_eq!(mixer.play(true), Err(SubsystemError::NothingLoaded));
    }

    #[test]
    fn keeps_the_volume_while_stopped() {
        let mut mixer = ConsoleMixer::new(None);

        mixer.set_volume(0.4);
        mixer.set_volume(1.5);

        assert_eq!(mixer.volume(), 1.0);
        assert!(!mixer.is_looping());
    }
}

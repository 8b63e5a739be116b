use crate::domain::color::{Color, ColorConversionError};
use crate::domain::device::{LightSettings, SpeakerSettings};
use config::{Config, ConfigError};
use serde::Deserialize;
use std::num::NonZeroUsize;

#[derive(Debug, Deserialize)]
pub struct AppConfig {
    core: Core,
    panel: Panel,
    audio: Audio,
    lights: Lights,
    startup: Startup,
}

impl AppConfig {
    pub fn load() -> Result<Self, ConfigError> {
        let config = Config::builder()
            .add_source(config::File::with_name("config").required(true))
            .add_source(config::File::with_name("config_local").required(false))
            .add_source(config::Environment::default().separator("__"))
            .build()?;
        Self::from_config(config)
    }

    fn from_config(config: Config) -> Result<Self, ConfigError> {
        let app_config: AppConfig = config.try_deserialize()?;

        // Also rejects NaN
        if !(app_config.audio.initial_volume > 0.0) {
            return Err(ConfigError::Message(format!(
                "audio.initial_volume must be greater than 0, got {}",
                app_config.audio.initial_volume
            )));
        }

        Ok(app_config)
    }

    pub fn core(&self) -> &Core {
        &self.core
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn audio(&self) -> &Audio {
        &self.audio
    }

    pub fn lights(&self) -> &Lights {
        &self.lights
    }

    pub fn startup(&self) -> &Startup {
        &self.startup
    }
}

#[derive(Debug, Deserialize)]
pub struct Core {
    event_buffer_size: NonZeroUsize,
}

impl Core {
    pub fn event_buffer_size(&self) -> usize {
        self.event_buffer_size.get()
    }
}

#[derive(Debug, Deserialize)]
pub struct Panel {
    title: String,
}

impl Panel {
    pub fn title(&self) -> &str {
        &self.title
    }
}

#[derive(Debug, Deserialize)]
pub struct Audio {
    device: String,
    source: String,
    initial_volume: f64,
}

impl Audio {
    /// The output device, `None` if no device is configured.
    pub fn device(&self) -> Option<&str> {
        Some(self.device.as_str()).filter(|device| !device.is_empty())
    }

    pub fn speaker_settings(&self) -> SpeakerSettings {
        SpeakerSettings::new(&self.source, self.initial_volume)
    }
}

#[derive(Debug, Deserialize)]
pub struct Lights {
    on_color: String,
    off_color: String,
}

impl Lights {
    pub fn light_settings(&self) -> Result<LightSettings, ColorConversionError> {
        Ok(LightSettings::new(Color::parse_hex(&self.on_color)?, Color::parse_hex(&self.off_color)?))
    }
}

#[derive(Debug, Deserialize)]
pub struct Startup {
    devices: Vec<String>,
}

impl Startup {
    pub fn devices(&self) -> &[String] {
        &self.devices
    }
}

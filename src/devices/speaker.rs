use crate::devices::device_factory::{CreateDevice, register_device};
use crate::domain::audio::SharedAudio;
use crate::domain::capability::{Capability, Scalable, ScaleRange, Toggleable};
use crate::domain::device::{Device, DeviceContext, DeviceId};
use crate::domain::errors::DeviceError;
use crate::domain::surface::{ControlId, ControlInput, RegionId, SharedSurface};
use device_macros::register_device;
use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::path::PathBuf;
use std::rc::Rc;
use tracing::{debug, info, instrument, warn};

const PLAY_LABEL: &str = "Play music";
const STOP_LABEL: &str = "Stop music";

/// A speaker that loops a single audio source.
///
/// The volume can be changed at any time, also while nothing is playing, and is kept by the audio
/// subsystem for the next playback. All speakers share the same audio subsystem.
#[register_device]
pub struct Speaker {
    id: DeviceId,
    region: RegionId,
    surface: SharedSurface,
    audio: SharedAudio,
    source: PathBuf,
    volume_slider: Option<ControlId>,
    play_button: Option<ControlId>,
    state: PlaybackState,
    volume: f64,
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum PlaybackState {
    Stopped,
    Playing,
}

impl CreateDevice for Speaker {
    const KIND: &'static str = "speaker";

    fn create(id: DeviceId, context: &DeviceContext) -> Rc<RefCell<Self>> {
        let surface = context.surface().clone();
        let region = surface.borrow_mut().create_region();
        let initial_volume = context.speaker().initial_volume();

        let speaker = Rc::new(RefCell::new(Speaker {
            id,
            region,
            surface: surface.clone(),
            audio: context.audio().clone(),
            source: context.speaker().source().to_path_buf(),
            volume_slider: None,
            play_button: None,
            state: PlaybackState::Stopped,
            volume: 0.0,
        }));

        let weak_speaker = Rc::downgrade(&speaker);
        let volume_slider = surface.borrow_mut().add_slider(
            region,
            ScaleRange::PERCENTAGE,
            initial_volume,
            Rc::new(move |input: &ControlInput| match weak_speaker.upgrade() {
                Some(speaker) => speaker.borrow_mut().scale(input.scale_value()?),
                None => {
                    debug!(device_id = %id, "Ignoring volume change for a removed speaker");
                    Ok(())
                }
            }),
        );
        speaker.borrow_mut().volume_slider = Some(volume_slider);

        if let Err(e) = context.audio().borrow_mut().init() {
            warn!(device_id = %id, "⚠️ Unable to initialize the audio subsystem: {}", e);
            context.reporter().report_error("Audio error", &e.to_string());
        }

        // The volume must be in place before the first playback, otherwise the first play is silent
        if let Err(e) = speaker.borrow_mut().scale(initial_volume) {
            warn!(device_id = %id, "⚠️ Invalid initial volume {}: {}", initial_volume, e);
        }

        let weak_speaker = Rc::downgrade(&speaker);
        let play_button = surface.borrow_mut().add_button(
            region,
            PLAY_LABEL,
            Rc::new(move |_: &ControlInput| match weak_speaker.upgrade() {
                Some(speaker) => speaker.borrow_mut().toggle(),
                None => {
                    debug!(device_id = %id, "Ignoring button press for a removed speaker");
                    Ok(())
                }
            }),
        );
        speaker.borrow_mut().play_button = Some(play_button);

        speaker
    }
}

#[cfg(test)]
impl Speaker {
    pub fn playback_state(&self) -> PlaybackState {
        self.state
    }
}

impl Speaker {
    fn start(&mut self) -> Result<(), DeviceError> {
        let mut audio = self.audio.borrow_mut();
        audio.init()?;
        audio.load(&self.source)?;
        audio.play(true)?;
        Ok(())
    }

    fn relabel(&self, label: &str) {
        if let Some(control) = self.play_button {
            self.surface.borrow_mut().set_button_label(control, label);
        }
    }
}

impl Toggleable for Speaker {
    fn state(&self) -> bool {
        self.state == PlaybackState::Playing
    }

    #[instrument(skip_all, fields(device_id = %self.id))]
    fn toggle(&mut self) -> Result<(), DeviceError> {
        match self.state {
            PlaybackState::Stopped => {
                self.start()?;
                info!(source = %self.source.display(), "🔊 Start playing at {:.0}%", self.volume);
                self.relabel(STOP_LABEL);
                self.state = PlaybackState::Playing;
            }
            PlaybackState::Playing => {
                self.audio.borrow_mut().stop();
                info!("🔇 Stop playing");
                self.relabel(PLAY_LABEL);
                self.state = PlaybackState::Stopped;
            }
        }

        Ok(())
    }
}

impl Scalable for Speaker {
    fn range(&self) -> ScaleRange {
        ScaleRange::PERCENTAGE
    }

    fn value(&self) -> f64 {
        self.volume
    }

    #[instrument(skip(self), fields(device_id = %self.id))]
    fn scale(&mut self, value: f64) -> Result<(), DeviceError> {
        self.volume = self.range().clamp(value)?;
        self.audio.borrow_mut().set_volume(self.volume / 100.0);
        if let Some(slider) = self.volume_slider {
            self.surface.borrow_mut().set_slider_value(slider, self.volume);
        }
        debug!("🔊 Set volume to {:.0}%", self.volume);
        Ok(())
    }
}

impl Device for Speaker {
    fn id(&self) -> DeviceId {
        self.id
    }

    fn kind(&self) -> &'static str {
        Self::KIND
    }

    fn region(&self) -> RegionId {
        self.region
    }

    fn capabilities(&self) -> &'static [Capability] {
        &[Capability::Toggle, Capability::Scale]
    }

    fn as_toggleable(&mut self) -> Option<&mut dyn Toggleable> {
        Some(self)
    }

    fn as_scalable(&mut self) -> Option<&mut dyn Scalable> {
        Some(self)
    }
}

impl Debug for Speaker {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Speaker")
            .field("id", &self.id)
            .field("region", &self.region)
            .field("source", &self.source)
            .field("state", &self.state)
            .field("volume", &self.volume)
            .finish()
    }
}

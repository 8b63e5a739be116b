use crate::domain::audio::SharedAudio;
use crate::domain::capability::{Capability, Scalable, Toggleable};
use crate::domain::color::Color;
use crate::domain::error_reporter::ErrorReporter;
use crate::domain::surface::{RegionId, SharedSurface};
use std::cell::RefCell;
use std::fmt::{Debug, Display, Formatter};
use std::path::{Path, PathBuf};
use std::rc::Rc;

/// A device on the panel.
///
/// A device only exposes the capabilities it actually has. The set returned by
/// [`Device::capabilities`] is fixed when the device is constructed and matches the `as_*`
/// accessors.
pub trait Device: Debug {
    fn id(&self) -> DeviceId;
    fn kind(&self) -> &'static str;
    fn region(&self) -> RegionId;
    fn capabilities(&self) -> &'static [Capability];

    fn as_toggleable(&mut self) -> Option<&mut dyn Toggleable> {
        None
    }

    fn as_scalable(&mut self) -> Option<&mut dyn Scalable> {
        None
    }
}

pub type DeviceHandle = Rc<RefCell<dyn Device>>;

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, PartialOrd, Ord)]
pub struct DeviceId(pub u64);

impl DeviceId {
    pub const FIRST: DeviceId = DeviceId(1);

    pub fn next(self) -> DeviceId {
        DeviceId(self.0 + 1)
    }
}

impl Display for DeviceId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Everything a device needs from its surroundings when it is created.
#[derive(Clone)]
pub struct DeviceContext {
    surface: SharedSurface,
    audio: SharedAudio,
    reporter: Rc<dyn ErrorReporter>,
    lights: LightSettings,
    speaker: SpeakerSettings,
}

impl DeviceContext {
    pub fn new(surface: SharedSurface, audio: SharedAudio, reporter: Rc<dyn ErrorReporter>, lights: LightSettings, speaker: SpeakerSettings) -> Self {
        DeviceContext {
            surface,
            audio,
            reporter,
            lights,
            speaker,
        }
    }

    pub fn surface(&self) -> &SharedSurface {
        &self.surface
    }

    pub fn audio(&self) -> &SharedAudio {
        &self.audio
    }

    pub fn reporter(&self) -> &Rc<dyn ErrorReporter> {
        &self.reporter
    }

    pub fn lights(&self) -> &LightSettings {
        &self.lights
    }

    pub fn speaker(&self) -> &SpeakerSettings {
        &self.speaker
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct LightSettings {
    on_color: Color,
    off_color: Color,
}

impl LightSettings {
    pub fn new(on_color: Color, off_color: Color) -> Self {
        LightSettings { on_color, off_color }
    }

    pub fn on_color(&self) -> &Color {
        &self.on_color
    }

    pub fn off_color(&self) -> &Color {
        &self.off_color
    }
}

#[derive(PartialEq, Debug, Clone)]
pub struct SpeakerSettings {
    source: PathBuf,
    initial_volume: f64,
}

impl SpeakerSettings {
    pub fn new(source: impl Into<PathBuf>, initial_volume: f64) -> Self {
        SpeakerSettings {
            source: source.into(),
            initial_volume,
        }
    }

    pub fn source(&self) -> &Path {
        &self.source
    }

    pub fn initial_volume(&self) -> f64 {
        self.initial_volume
    }
}

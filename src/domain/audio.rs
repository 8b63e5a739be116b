use std::cell::RefCell;
use std::path::Path;
use std::rc::Rc;
use thiserror::Error;

/// The process-wide audio output.
///
/// Every speaker receives a clone of the same [`SharedAudio`] handle, so speakers contend for a
/// single channel: whichever speaker toggles or scales last determines what is heard.
pub trait AudioSubsystem {
    fn init(&mut self) -> Result<(), SubsystemError>;

    fn load(&mut self, source: &Path) -> Result<(), SubsystemError>;

    fn play(&mut self, looping: bool) -> Result<(), SubsystemError>;

    fn stop(&mut self);

    /// Sets the output volume in `[0, 1]`. The level is retained while nothing is playing.
    fn set_volume(&mut self, volume: f64);
}

pub type SharedAudio = Rc<RefCell<dyn AudioSubsystem>>;

#[derive(Error, Debug, PartialEq, Clone)]
pub enum SubsystemError {
    #[error("no audio device available")]
    NoDevice,
    #[error("audio subsystem is not initialized")]
    NotInitialized,
    #[error("could not load '{path}': {reason}")]
    Load { path: String, reason: String },
    #[error("no audio source loaded")]
    NothingLoaded,
}

use crate::domain::audio::SubsystemError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum DeviceError {
    #[error("invalid scale input '{0}'")]
    InvalidInput(String),
    #[error("audio subsystem failed: {0}")]
    Subsystem(#[from] SubsystemError),
}

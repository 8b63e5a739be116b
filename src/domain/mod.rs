pub mod audio;
pub mod capability;
pub mod color;
pub mod device;
pub mod error_reporter;
pub mod errors;
pub mod events;
pub mod surface;

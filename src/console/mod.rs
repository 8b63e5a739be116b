pub mod input;
pub mod mixer;
pub mod reporter;
pub mod surface;

pub use input::listen;
pub use mixer::ConsoleMixer;
pub use reporter::TracingErrorReporter;
pub use surface::ConsoleSurface;

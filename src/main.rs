use crate::app_config::AppConfig;
use crate::console::{ConsoleMixer, ConsoleSurface, TracingErrorReporter};
use crate::domain::audio::SharedAudio;
use crate::domain::device::DeviceContext;
use crate::domain::events::Event;
use crate::domain::surface::SharedSurface;
use crate::registry::DeviceRegistry;
use std::cell::RefCell;
use std::rc::Rc;
use tokio::io::{BufReader, stdin};
use tokio::sync::mpsc;
use tokio::task;
use tracing::info;

mod app_config;
mod console;
mod devices;
mod domain;
mod extensions;
mod registry;
#[cfg(test)]
mod testing;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt().with_max_level(tracing::Level::INFO).init();

    info!("🪵 Starting {} v{}", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));

    let config = AppConfig::load()?;
    info!("✅  Loaded configuration");

    let console_surface = ConsoleSurface::new(config.panel().title());
    let title = console_surface.title().to_string();
    let surface: SharedSurface = Rc::new(RefCell::new(console_surface));
    let audio: SharedAudio = Rc::new(RefCell::new(ConsoleMixer::new(config.audio().device())));
    let context = DeviceContext::new(
        surface,
        audio,
        Rc::new(TracingErrorReporter),
        config.lights().light_settings()?,
        config.audio().speaker_settings(),
    );
    info!("✅  Initialized panel");

    let mut registry = DeviceRegistry::new(context);
    for kind in config.startup().devices() {
        registry.add_device_of_kind(kind)?;
    }
    info!("✅  Created {} device(s)", registry.devices().len());

    let (tx, rx) = mpsc::channel::<Event>(config.core().event_buffer_size());
    task::spawn(async move {
        console::listen(BufReader::new(stdin()), tx).await;
    });
    info!("✅  Listening for input");

    info!("🔥 {} is up and running, panel '{}'", env!("CARGO_PKG_NAME"), title);

    registry.run(rx).await;

    Ok(())
}

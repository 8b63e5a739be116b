use crate::devices::device_factory::{DeviceFactory, factory_for, known_kinds};
use crate::domain::capability::Capability;
use crate::domain::device::{DeviceContext, DeviceHandle, DeviceId};
use crate::domain::errors::DeviceError;
use crate::domain::events::Event;
use crate::domain::surface::{ControlId, ControlInput};
use std::rc::Rc;
use thiserror::Error;
use tokio::sync::mpsc::Receiver;
use tracing::{debug, info, instrument, warn};

/// Owns the devices on the panel and drives the event loop.
///
/// Ids start at 1 and are never handed out twice, also not after a device has been removed.
pub struct DeviceRegistry {
    context: DeviceContext,
    devices: Vec<DeviceHandle>,
    next_id: DeviceId,
}

impl DeviceRegistry {
    pub fn new(context: DeviceContext) -> Self {
        DeviceRegistry {
            context,
            devices: Vec::new(),
            next_id: DeviceId::FIRST,
        }
    }

    pub fn devices(&self) -> &[DeviceHandle] {
        &self.devices
    }

    pub fn device(&self, id: DeviceId) -> Option<DeviceHandle> {
        self.devices.iter().find(|device| device.borrow().id() == id).cloned()
    }

    pub fn add_device(&mut self, factory: DeviceFactory) -> DeviceHandle {
        let id = self.next_id;
        self.next_id = id.next();

        let device = factory(id, &self.context);
        info!(device_id = %id, "🟢 Added {} device {}", device.borrow().kind(), id);
        self.devices.push(device.clone());
        device
    }

    pub fn add_device_of_kind(&mut self, kind: &str) -> Result<DeviceHandle, RegistryError> {
        let factory = factory_for(kind).ok_or_else(|| RegistryError::UnknownKind {
            kind: kind.to_string(),
            known: known_kinds().join(", "),
        })?;
        Ok(self.add_device(factory))
    }

    /// Removes the device from the registry. Its widgets stay on the surface and whatever it
    /// started, e.g. playback, keeps running.
    pub fn remove_device(&mut self, device: &DeviceHandle) -> Result<(), RegistryError> {
        let Some(index) = self.devices.iter().position(|candidate| Rc::ptr_eq(candidate, device)) else {
            return Err(RegistryError::NotFound(device.borrow().id()));
        };

        let removed = self.devices.remove(index);
        info!(device_id = %removed.borrow().id(), "🔴 Removed {} device {}", removed.borrow().kind(), removed.borrow().id());
        Ok(())
    }

    pub fn remove_device_by_id(&mut self, id: DeviceId) -> Result<DeviceHandle, RegistryError> {
        let device = self.device(id).ok_or(RegistryError::NotFound(id))?;
        self.remove_device(&device)?;
        Ok(device)
    }

    /// Processes host events one at a time until the panel is closed.
    #[instrument(skip_all)]
    pub async fn run(&mut self, mut rx: Receiver<Event>) {
        info!("🖥️ Entering event loop with {} device(s)", self.devices.len());

        while let Some(event) = rx.recv().await {
            debug!("🔵 Received event: {:?}", event);
            match event {
                Event::ControlActivated { control, input } => self.dispatch(control, &input),
                Event::RemoveDevice(id) => {
                    if let Err(e) = self.remove_device_by_id(id) {
                        warn!(device_id = %id, "⚠️ {}", e);
                    }
                }
                Event::ListDevices => self.list_devices(),
                Event::Closed => break,
            }
        }

        info!("🖥️ Event loop stopped");
    }

    fn dispatch(&self, control: ControlId, input: &ControlInput) {
        let callback = self.context.surface().borrow().callback(control);
        let Some(callback) = callback else {
            warn!(control = %control, "⚠️ Received input for unknown control {}", control);
            return;
        };

        match callback(input) {
            Ok(()) => {}
            Err(DeviceError::Subsystem(e)) => {
                warn!(control = %control, "⚠️ Audio subsystem failed: {}", e);
                self.context.reporter().report_error("Audio error", &e.to_string());
            }
            Err(e @ DeviceError::InvalidInput(_)) => {
                warn!(control = %control, "⚠️ Ignoring input: {}", e);
            }
        }
    }

    fn list_devices(&self) {
        for device in &self.devices {
            let mut device = device.borrow_mut();
            let mut states = Vec::new();
            for capability in device.capabilities() {
                match capability {
                    Capability::Toggle => {
                        if let Some(toggleable) = device.as_toggleable() {
                            states.push(format!("on={}", toggleable.state()));
                        }
                    }
                    Capability::Scale => {
                        if let Some(scalable) = device.as_scalable() {
                            states.push(format!("value={} in {}", scalable.value(), scalable.range()));
                        }
                    }
                }
            }
            info!(device_id = %device.id(), region = %device.region(), "📋 {} {}: {}", device.kind(), device.id(), states.join(", "));
        }
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum RegistryError {
    #[error("device {0} is not registered")]
    NotFound(DeviceId),
    #[error("unknown device kind '{kind}', known kinds: {known}")]
    UnknownKind { kind: String, known: String },
}

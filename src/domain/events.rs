use crate::domain::device::DeviceId;
use crate::domain::surface::{ControlId, ControlInput};

/// Events produced by the host UI and consumed by the registry's event loop.
#[derive(PartialEq, Debug, Clone)]
pub enum Event {
    ControlActivated { control: ControlId, input: ControlInput },
    RemoveDevice(DeviceId),
    ListDevices,
    Closed,
}

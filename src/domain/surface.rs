use crate::domain::capability::{ScaleRange, parse_scale_value};
use crate::domain::color::Color;
use crate::domain::errors::DeviceError;
use std::cell::RefCell;
use std::fmt::{Display, Formatter};
use std::rc::Rc;

/// The rendering toolkit as seen by the devices.
///
/// Every device draws into its own region. Controls are owned by the surface, which keeps the
/// callbacks the devices registered and hands them out to the event loop.
pub trait Surface {
    fn create_region(&mut self) -> RegionId;

    fn set_shape_color(&mut self, region: RegionId, color: Color);

    fn add_button(&mut self, region: RegionId, label: &str, on_click: Callback) -> ControlId;

    fn set_button_label(&mut self, control: ControlId, label: &str);

    fn add_slider(&mut self, region: RegionId, range: ScaleRange, initial: f64, on_change: Callback) -> ControlId;

    /// Moves the slider to the value the device accepted.
    fn set_slider_value(&mut self, control: ControlId, value: f64);

    fn callback(&self, control: ControlId) -> Option<Callback>;
}

pub type SharedSurface = Rc<RefCell<dyn Surface>>;

pub type Callback = Rc<dyn Fn(&ControlInput) -> Result<(), DeviceError>>;

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, PartialOrd, Ord)]
pub struct RegionId(pub u32);

#[derive(PartialEq, Eq, Hash, Debug, Clone, Copy, PartialOrd, Ord)]
pub struct ControlId(pub u32);

impl Display for RegionId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Display for ControlId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(PartialEq, Debug, Clone)]
pub enum ControlInput {
    Press,
    // Raw slider position as entered by the user, parsed by the receiving device
    Slide(String),
}

impl ControlInput {
    pub fn scale_value(&self) -> Result<f64, DeviceError> {
        match self {
            ControlInput::Slide(raw) => parse_scale_value(raw),
            ControlInput::Press => Err(DeviceError::InvalidInput("press".to_string())),
        }
    }
}

use crate::devices::device_factory::{CreateDevice, register_device};
use crate::domain::capability::{Capability, Toggleable};
use crate::domain::device::{Device, DeviceContext, DeviceId, LightSettings};
use crate::domain::errors::DeviceError;
use crate::domain::surface::{ControlInput, RegionId, SharedSurface};
use device_macros::register_device;
use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;
use tracing::{debug, info, instrument};

/// A light that is either on or off.
#[register_device]
pub struct BinaryLight {
    id: DeviceId,
    region: RegionId,
    surface: SharedSurface,
    colors: LightSettings,
    state: bool,
}

impl CreateDevice for BinaryLight {
    const KIND: &'static str = "binaryLight";

    fn create(id: DeviceId, context: &DeviceContext) -> Rc<RefCell<Self>> {
        let surface = context.surface().clone();
        let region = surface.borrow_mut().create_region();

        let light = Rc::new(RefCell::new(BinaryLight {
            id,
            region,
            surface: surface.clone(),
            colors: context.lights().clone(),
            state: false,
        }));
        light.borrow_mut().render();

        let weak_light = Rc::downgrade(&light);
        surface.borrow_mut().add_button(
            region,
            "On/Off",
            Rc::new(move |_: &ControlInput| match weak_light.upgrade() {
                Some(light) => light.borrow_mut().toggle(),
                None => {
                    debug!(device_id = %id, "Ignoring button press for a removed light");
                    Ok(())
                }
            }),
        );

        light
    }
}

impl BinaryLight {
    fn render(&mut self) {
        let color = if self.state { self.colors.on_color() } else { self.colors.off_color() };
        self.surface.borrow_mut().set_shape_color(self.region, color.clone());
    }
}

impl Toggleable for BinaryLight {
    fn state(&self) -> bool {
        self.state
    }

    #[instrument(skip_all, fields(device_id = %self.id))]
    fn toggle(&mut self) -> Result<(), DeviceError> {
        self.state = !self.state;
        info!("💡 Turn {} light", if self.state { "on" } else { "off" });
        self.render();
        Ok(())
    }
}

impl Device for BinaryLight {
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
        &[Capability::Toggle]
    }

    fn as_toggleable(&mut self) -> Option<&mut dyn Toggleable> {
        Some(self)
    }
}

impl Debug for BinaryLight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BinaryLight")
            .field("id", &self.id)
            .field("region", &self.region)
            .field("state", &self.state)
            .finish()
    }
}

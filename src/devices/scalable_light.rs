use crate::devices::device_factory::{CreateDevice, register_device};
use crate::domain::capability::{Capability, Scalable, ScaleRange};
use crate::domain::color::Color;
use crate::domain::device::{Device, DeviceContext, DeviceId};
use crate::domain::errors::DeviceError;
use crate::domain::surface::{ControlId, ControlInput, RegionId, SharedSurface};
use crate::extensions::float_ext::ColorLevel;
use device_macros::register_device;
use std::cell::RefCell;
use std::fmt::{Debug, Formatter};
use std::rc::Rc;
use tracing::{debug, info, instrument};

/// A dimmable light. The indicator is drawn in a yellow tone whose intensity follows the brightness.
#[register_device]
pub struct ScalableLight {
    id: DeviceId,
    region: RegionId,
    surface: SharedSurface,
    slider: Option<ControlId>,
    brightness: f64,
}

impl CreateDevice for ScalableLight {
    const KIND: &'static str = "scalableLight";

    fn create(id: DeviceId, context: &DeviceContext) -> Rc<RefCell<Self>> {
        let surface = context.surface().clone();
        let region = surface.borrow_mut().create_region();

        let light = Rc::new(RefCell::new(ScalableLight {
            id,
            region,
            surface: surface.clone(),
            slider: None,
            brightness: 0.0,
        }));
        light.borrow_mut().render();

        let weak_light = Rc::downgrade(&light);
        let slider = surface.borrow_mut().add_slider(
            region,
            ScaleRange::UNIT,
            0.0,
            Rc::new(move |input: &ControlInput| match weak_light.upgrade() {
                Some(light) => light.borrow_mut().scale(input.scale_value()?),
                None => {
                    debug!(device_id = %id, "Ignoring slider change for a removed light");
                    Ok(())
                }
            }),
        );
        light.borrow_mut().slider = Some(slider);

        light
    }
}

impl ScalableLight {
    /// The channel level the indicator is currently drawn with.
    pub fn level(&self) -> u8 {
        self.brightness.to_color_level()
    }

    fn render(&mut self) {
        let level = self.level();
        let mut surface = self.surface.borrow_mut();
        surface.set_shape_color(self.region, Color::RGB(level, level, 0));
        if let Some(slider) = self.slider {
            surface.set_slider_value(slider, self.brightness);
        }
    }
}

impl Scalable for ScalableLight {
    fn range(&self) -> ScaleRange {
        ScaleRange::UNIT
    }

    fn value(&self) -> f64 {
        self.brightness
    }

    #[instrument(skip(self), fields(device_id = %self.id))]
    fn scale(&mut self, value: f64) -> Result<(), DeviceError> {
        self.brightness = self.range().clamp(value)?;
        info!(level = self.level(), "💡 Dim light to {:.0}%", self.brightness * 100.0);
        self.render();
        Ok(())
    }
}

impl Device for ScalableLight {
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
        &[Capability::Scale]
    }

    fn as_scalable(&mut self) -> Option<&mut dyn Scalable> {
        Some(self)
    }
}

impl Debug for ScalableLight {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScalableLight")
            .field("id", &self.id)
            .field("region", &self.region)
            .field("brightness", &self.brightness)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::TestPanel;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(0.0, 0)]
    #[case(0.1, 26)]
    #[case(0.5, 128)]
    #[case(0.8, 204)]
    #[case(1.0, 255)]
    fn maps_brightness_to_a_rounded_level(#[case] value: f64, #[case] expected: u8) {
        let panel = TestPanel::new();
        let light = ScalableLight::create(DeviceId(1), &panel.context());

        light.borrow_mut().scale(value).unwrap();

        assert_eq!(light.borrow().level(), expected);
        let region = light.borrow().region();
        assert_eq!(panel.surface().borrow().shape_color(region), Some(Color::RGB(expected, expected, 0)));
    }

    #[rstest]
    #[case(-0.1, 0)]
    #[case(-250.0, 0)]
    #[case(1.01, 255)]
    #[case(f64::INFINITY, 255)]
    fn clamps_values_outside_of_the_unit_range(#[case] value: f64, #[case] expected: u8) {
        let panel = TestPanel::new();
        let light = ScalableLight::create(DeviceId(1), &panel.context());

        light.borrow_mut().scale(value).unwrap();

        assert_eq!(light.borrow().level(), expected);
    }

    #[test]
    fn level_is_monotonic_in_the_brightness() {
        let panel = TestPanel::new();
        let light = ScalableLight::create(DeviceId(1), &panel.context());

        let mut previous = 0;
        for step in 0..=1000 {
            light.borrow_mut().scale(step as f64 / 1000.0).unwrap();
            let level = light.borrow().level();
            assert!(level >= previous, "level dropped from {} to {} at step {}", previous, level, step);
            previous = level;
        }
    }

    // Non-numeric slider input is reported instead of being swallowed, the light keeps its state
    #[rstest]
    #[case("bright")]
    #[case("")]
    #[case("NaN")]
    fn reports_non_numeric_slider_input_and_keeps_the_brightness(#[case] raw: &str) {
        let panel = TestPanel::new();
        let light = ScalableLight::create(DeviceId(1), &panel.context());
        light.borrow_mut().scale(0.3).unwrap();
        let control = panel.surface().borrow().controls_in(light.borrow().region())[0];

        let result = panel.slide(control, raw);

        assert_eq!(result, Err(DeviceError::InvalidInput(raw.to_string())));
        assert_eq!(light.borrow().value(), 0.3);
        assert_eq!(panel.surface().borrow().slider_value(control), Some(0.3));
    }

    #[test]
    fn nan_is_rejected() {
        let panel = TestPanel::new();
        let light = ScalableLight::create(DeviceId(1), &panel.context());

        let result = light.borrow_mut().scale(f64::NAN);

        assert!(matches!(result, Err(DeviceError::InvalidInput(_))));
        assert_eq!(light.borrow().value(), 0.0);
    }

    #[test]
    fn slider_scales_the_light() {
        let panel = TestPanel::new();
        let light = ScalableLight::create(DeviceId(1), &panel.context());
        let control = panel.surface().borrow().controls_in(light.borrow().region())[0];

        panel.slide(control, "0.8").unwrap();

        assert_eq!(light.borrow().value(), 0.8);
        assert_eq!(light.borrow().level(), 204);
        assert_eq!(panel.surface().borrow().slider_value(control), Some(0.8));
    }

    #[test]
    fn slider_shows_the_clamped_brightness() {
        let panel = TestPanel::new();
        let light = ScalableLight::create(DeviceId(1), &panel.context());
        let control = panel.surface().borrow().controls_in(light.borrow().region())[0];

        panel.slide(control, "1.7").unwrap();

        assert_eq!(panel.surface().borrow().slider_value(control), Some(1.0));
    }

    #[test]
    fn two_lights_do_not_share_state() {
        let panel = TestPanel::new();
        let first = ScalableLight::create(DeviceId(1), &panel.context());
        let second = ScalableLight::create(DeviceId(2), &panel.context());
        second.borrow_mut().scale(0.2).unwrap();

        first.borrow_mut().scale(0.8).unwrap();

        assert_eq!(second.borrow().value(), 0.2);
        assert_ne!(first.borrow().region(), second.borrow().region());
        let second_region = second.borrow().region();
        assert_eq!(panel.surface().borrow().shape_color(second_region), Some(Color::RGB(51, 51, 0)));
    }
}

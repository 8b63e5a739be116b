use crate::domain::capability::ScaleRange;
use crate::domain::color::Color;
use crate::domain::surface::{Callback, ControlId, RegionId, Surface};
use std::collections::BTreeMap;
use tracing::{debug, info, warn};

/// A surface that keeps its widgets in memory and narrates every change through the log.
pub struct ConsoleSurface {
    title: String,
    regions: BTreeMap<RegionId, Region>,
    controls: BTreeMap<ControlId, Control>,
    next_region: u32,
    next_control: u32,
}

#[derive(Default)]
struct Region {
    shape_color: Option<Color>,
    controls: Vec<ControlId>,
}

struct Control {
    widget: Widget,
    callback: Callback,
}

enum Widget {
    Button { label: String },
    Slider { value: f64 },
}

impl ConsoleSurface {
    pub fn new(title: &str) -> Self {
        info!("🖥️ Opening panel '{}'", title);
        ConsoleSurface {
            title: title.to_string(),
            regions: BTreeMap::new(),
            controls: BTreeMap::new(),
            next_region: 1,
            next_control: 1,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    fn add_control(&mut self, region: RegionId, widget: Widget, callback: Callback) -> ControlId {
        let control = ControlId(self.next_control);
        self.next_control += 1;

        self.regions.entry(region).or_default().controls.push(control);
        self.controls.insert(control, Control { widget, callback });
        control
    }
}

#[cfg(test)]
impl ConsoleSurface {
    pub fn shape_color(&self, region: RegionId) -> Option<Color> {
        self.regions.get(&region).and_then(|region| region.shape_color.clone())
    }

    /// Controls of the region, in the order they were added.
    pub fn controls_in(&self, region: RegionId) -> Vec<ControlId> {
        self.regions.get(&region).map(|region| region.controls.clone()).unwrap_or_default()
    }

    pub fn button_label(&self, control: ControlId) -> Option<String> {
        match self.controls.get(&control).map(|control| &control.widget) {
            Some(Widget::Button { label }) => Some(label.clone()),
            _ => None,
        }
    }

    pub fn slider_value(&self, control: ControlId) -> Option<f64> {
        match self.controls.get(&control).map(|control| &control.widget) {
            Some(Widget::Slider { value }) => Some(*value),
            _ => None,
        }
    }
}

impl Surface for ConsoleSurface {
    fn create_region(&mut self) -> RegionId {
        let region = RegionId(self.next_region);
        self.next_region += 1;

        self.regions.insert(region, Region::default());
        debug!(region = %region, "Created region");
        region
    }

    fn set_shape_color(&mut self, region: RegionId, color: Color) {
        let Some(entry) = self.regions.get_mut(&region) else {
            warn!(region = %region, "⚠️ Cannot color unknown region");
            return;
        };

        if let Some(previous) = entry.shape_color.replace(color.clone()) {
            if previous == color {
                return;
            }
        }
        if let Color::Hex(hex) = color.to_hex() {
            info!(region = %region, "🎨 Region {} is now {}", region, hex);
        }
    }

    fn add_button(&mut self, region: RegionId, label: &str, on_click: Callback) -> ControlId {
        let control = self.add_control(region, Widget::Button { label: label.to_string() }, on_click);
        info!(region = %region, control = %control, "🔘 Button '{}' is control {}", label, control);
        control
    }

    fn set_button_label(&mut self, control: ControlId, label: &str) {
        match self.controls.get_mut(&control).map(|control| &mut control.widget) {
            Some(Widget::Button { label: current }) => {
                debug!(control = %control, "Relabel button '{}' to '{}'", current, label);
                *current = label.to_string();
            }
            _ => warn!(control = %control, "⚠️ Control {} is not a button", control),
        }
    }

    fn add_slider(&mut self, region: RegionId, range: ScaleRange, initial: f64, on_change: Callback) -> ControlId {
        let value = initial.clamp(range.lo(), range.hi());
        let control = self.add_control(region, Widget::Slider { value }, on_change);
        info!(region = %region, control = %control, "🎚️ Slider {} at {} is control {}", range, value, control);
        control
    }

    fn set_slider_value(&mut self, control: ControlId, value: f64) {
        match self.controls.get_mut(&control).map(|control| &mut control.widget) {
            Some(Widget::Slider { value: current }) => {
                if *current != value {
                    debug!(control = %control, "Move slider from {} to {}", current, value);
                    *current = value;
                }
            }
            _ => warn!(control = %control, "⚠️ Control {} is not a slider", control),
        }
    }

    fn callback(&self, control: ControlId) -> Option<Callback> {
        self.controls.get(&control).map(|control| control.callback.clone())
    }
}

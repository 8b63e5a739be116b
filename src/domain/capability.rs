use crate::domain::errors::DeviceError;
use std::fmt::{Display, Formatter};

/// A device that can be switched between two states.
pub trait Toggleable {
    /// Returns `true` while the device is on.
    fn state(&self) -> bool;

    /// Flips the state and applies the side effect that belongs to the new state.
    fn toggle(&mut self) -> Result<(), DeviceError>;
}

/// A device that can be set anywhere along a continuous range.
///
/// Values outside of [`Scalable::range`] are clamped to the nearest boundary. A value that is not a
/// number results in [`DeviceError::InvalidInput`] and leaves the device untouched.
pub trait Scalable {
    fn range(&self) -> ScaleRange;

    /// The current value, expressed in the input range.
    fn value(&self) -> f64;

    fn scale(&mut self, value: f64) -> Result<(), DeviceError>;
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub enum Capability {
    Toggle,
    Scale,
}

#[derive(PartialEq, Debug, Clone, Copy)]
pub struct ScaleRange {
    lo: f64,
    hi: f64,
}

impl ScaleRange {
    pub const UNIT: ScaleRange = ScaleRange { lo: 0.0, hi: 1.0 };
    pub const PERCENTAGE: ScaleRange = ScaleRange { lo: 0.0, hi: 100.0 };

    pub fn lo(&self) -> f64 {
        self.lo
    }

    pub fn hi(&self) -> f64 {
        self.hi
    }

    pub fn clamp(&self, value: f64) -> Result<f64, DeviceError> {
        if value.is_nan() {
            return Err(DeviceError::InvalidInput(value.to_string()));
        }

        Ok(value.clamp(self.lo, self.hi))
    }
}

impl Display for ScaleRange {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}, {}]", self.lo, self.hi)
    }
}

/// Converts raw control input, e.g. the text of a slider position, into a scale value.
pub fn parse_scale_value(raw: &str) -> Result<f64, DeviceError> {
    match raw.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(DeviceError::InvalidInput(raw.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(-0.5, 0.0)]
    #[case(0.0, 0.0)]
    #[case(0.42, 0.42)]
    #[case(1.0, 1.0)]
    #[case(7.0, 1.0)]
    #[case(f64::INFINITY, 1.0)]
    #[case(f64::NEG_INFINITY, 0.0)]
    fn clamps_to_the_unit_range(#[case] value: f64, #[case] expected: f64) {
        assert_eq!(ScaleRange::UNIT.clamp(value), Ok(expected));
    }

    #[test]
    fn clamp_rejects_nan() {
        assert!(matches!(ScaleRange::PERCENTAGE.clamp(f64::NAN), Err(DeviceError::InvalidInput(_))));
    }

    #[rstest]
    #[case("0.8", 0.8)]
    #[case(" 50 ", 50.0)]
    #[case("-3", -3.0)]
    #[case("1e2", 100.0)]
    fn parses_numeric_input(#[case] raw: &str, #[case] expected: f64) {
        assert_eq!(parse_scale_value(raw), Ok(expected));
    }

    #[rstest]
    #[case("")]
    #[case("loud")]
    #[case("0,5")]
    #[case("NaN")]
    fn rejects_non_numeric_input(#[case] raw: &str) {
        assert_eq!(parse_scale_value(raw), Err(DeviceError::InvalidInput(raw.to_string())));
    }

    #[test]
    fn displays_the_bounds() {
        assert_eq!(ScaleRange::PERCENTAGE.to_string(), "[0, 100]");
    }
}

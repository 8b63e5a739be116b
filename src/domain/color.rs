use crate::domain::color::Color::{Hex, RGB};
use thiserror::Error;

#[derive(PartialEq, Clone, Debug)]
pub enum Color {
    RGB(u8, u8, u8),
    Hex(String),
}

impl Color {
    pub fn to_hex(self) -> Color {
        match self {
            RGB(r, g, b) => Hex(format!("#{:02x}{:02x}{:02x}", r, g, b)),
            Hex(_) => self,
        }
    }

    pub fn to_rgb(self) -> Result<Color, ColorConversionError> {
        match self {
            RGB(_, _, _) => Ok(self),
            Hex(value) => {
                let (r, g, b) = hex_to_rgb(&value)?;
                Ok(RGB(r, g, b))
            }
        }
    }

    /// Parses a `#rrggbb` string, keeping the color in its RGB form.
    pub fn parse_hex(value: &str) -> Result<Color, ColorConversionError> {
        Hex(value.to_string()).to_rgb()
    }
}

#[derive(Error, Debug, PartialEq)]
pub enum ColorConversionError {
    #[error("invalid hexadecimal value '{0}'")]
    InvalidHexFormat(String),
}

fn hex_to_rgb(hex: &str) -> Result<(u8, u8, u8), ColorConversionError> {
    let hex = hex.trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(ColorConversionError::InvalidHexFormat(hex.to_string()));
    }

    let red = u8::from_str_radix(&hex[0..2], 16).map_err(|_| ColorConversionError::InvalidHexFormat(hex.to_string()))?;
    let green = u8::from_str_radix(&hex[2..4], 16).map_err(|_| ColorConversionError::InvalidHexFormat(hex.to_string()))?;
    let blue = u8::from_str_radix(&hex[4..6], 16).map_err(|_| ColorConversionError::InvalidHexFormat(hex.to_string()))?;

    Ok((red, green, blue))
}

//! Configuration enum types.

use crate::draw::{Color, color::BLACK};
use log::warn;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Color specification - a color string or RGB values.
///
/// # Examples
/// ```toml
/// # Named color
/// color = "black"
///
/// # Hex color
/// color = "#1f77b4"
///
/// # RGB color (0-255 per component)
/// color = [255, 128, 0]
/// ```
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq, JsonSchema)]
#[serde(untagged)]
pub enum ColorSpec {
    /// Named color (black, white, red, green, blue, gray, orange, transparent)
    /// or a `#rgb` / `#rrggbb` hex string
    Name(String),
    /// RGB color as [red, green, blue] where each component is 0-255
    Rgb([u8; 3]),
}

impl ColorSpec {
    /// Converts the color specification to a [`Color`] struct.
    ///
    /// Strings go through `util::parse_color()`; unknown ones fall back to
    /// black with a warning. RGB arrays are converted from the 0-255 range
    /// with full opacity.
    pub fn to_color(&self) -> Color {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name).unwrap_or_else(|| {
                warn!("Unknown color '{}', using black", name);
                BLACK
            }),
            ColorSpec::Rgb([r, g, b]) => Color::from_rgb8(*r, *g, *b),
        }
    }

    /// Returns true when the string form is recognized (RGB arrays always are).
    pub fn is_valid(&self) -> bool {
        match self {
            ColorSpec::Name(name) => crate::util::parse_color(name).is_some(),
            ColorSpec::Rgb(_) => true,
        }
    }
}

impl From<Color> for ColorSpec {
    fn from(color: Color) -> Self {
        ColorSpec::Name(color.to_hex())
    }
}

//! Utility functions for color names and box geometry.
//!
//! This module provides:
//! - Color name and hex string parsing used by configuration and scene files
//! - The [`Point`] and [`Rect`] geometry helpers shared by shapes and export

use crate::draw::{Color, color::*};

// ============================================================================
// Color Parsing
// ============================================================================

/// Maps color name strings to Color values.
///
/// # Supported Names (case-insensitive)
/// - "black", "white", "red", "green", "blue", "gray"/"grey", "orange", "transparent"
///
/// # Returns
/// - `Some(Color)` if the name matches a predefined color
/// - `None` if the name is not recognized
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.trim().to_lowercase().as_str() {
        "black" => Some(BLACK),
        "white" => Some(WHITE),
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "gray" | "grey" => Some(GRAY),
        "orange" => Some(ORANGE),
        "transparent" => Some(TRANSPARENT),
        _ => None,
    }
}

/// Parses `#rgb` and `#rrggbb` hex strings into opaque colors.
pub fn parse_hex_color(value: &str) -> Option<Color> {
    let hex = value.trim().strip_prefix('#')?;
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let mut channels = [0u8; 3];
            for (slot, c) in channels.iter_mut().zip(hex.chars()) {
                let digit = c.to_digit(16)? as u8;
                *slot = digit * 17;
            }
            Some(Color::from_rgb8(channels[0], channels[1], channels[2]))
        }
        6 => {
            let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
            let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
            let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
            Some(Color::from_rgb8(r, g, b))
        }
        _ => None,
    }
}

/// Parses a color string: a palette name or a hex value.
pub fn parse_color(value: &str) -> Option<Color> {
    name_to_color(value).or_else(|| parse_hex_color(value))
}

// ============================================================================
// Geometry Utilities
// ============================================================================

/// A point in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned bounding box in surface coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Builds a rectangle with non-negative size, flipping negative dimensions.
    pub fn normalized(x: f64, y: f64, width: f64, height: f64) -> Self {
        let (x, width) = if width >= 0.0 {
            (x, width)
        } else {
            (x + width, -width)
        };
        let (y, height) = if height >= 0.0 {
            (y, height)
        } else {
            (y + height, -height)
        };
        Self::new(x, y, width, height)
    }

    /// Builds a rectangle from min/max corners.
    pub fn from_min_max(min_x: f64, min_y: f64, max_x: f64, max_y: f64) -> Self {
        Self::normalized(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Geometric center, where shape labels are anchored.
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
    }

    /// Returns a rectangle that covers both input rectangles.
    pub fn union(self, other: Rect) -> Rect {
        Rect::from_min_max(
            self.x.min(other.x),
            self.y.min(other.y),
            self.max_x().max(other.max_x()),
            self.max_y().max(other.max_y()),
        )
    }

    /// Shrinks the rectangle by `amount` on every side.
    ///
    /// The result is not normalized; an inset larger than half the size
    /// yields a negative width or height.
    pub fn inset(&self, amount: f64) -> Rect {
        Rect::new(
            self.x + amount,
            self.y + amount,
            self.width - amount * 2.0,
            self.height - amount * 2.0,
        )
    }
}

//! RGBA color type and the named palette used for diagram strokes and labels.

/// An RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum). Shape
/// outlines and their labels are painted with the same `Color`.
///
/// # Examples
///
/// ```
/// use erdraw::draw::Color;
/// let navy = Color::from_rgb8(0, 0, 128);
/// assert_eq!(navy.b, 128.0 / 255.0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components in the 0.0-1.0 range.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates an opaque color from 0-255 channel values.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Formats the color as a `#rrggbb` string (alpha is dropped).
    pub fn to_hex(&self) -> String {
        let channel = |v: f64| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        format!(
            "#{:02x}{:02x}{:02x}",
            channel(self.r),
            channel(self.g),
            channel(self.b)
        )
    }
}

// ============================================================================
// Named palette
// ============================================================================

/// Black (R=0.0, G=0.0, B=0.0), the usual ERD ink.
pub const BLACK: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// White (R=1.0, G=1.0, B=1.0), the default page background.
pub const WHITE: Color = Color {
    r: 1.0,
    g: 1.0,
    b: 1.0,
    a: 1.0,
};

/// Red (R=1.0, G=0.0, B=0.0)
pub const RED: Color = Color {
    r: 1.0,
    g: 0.0,
    b: 0.0,
    a: 1.0,
};

/// Green as CSS defines it (R=0.0, G=0.5, B=0.0)
pub const GREEN: Color = Color {
    r: 0.0,
    g: 128.0 / 255.0,
    b: 0.0,
    a: 1.0,
};

/// Blue (R=0.0, G=0.0, B=1.0)
pub const BLUE: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 1.0,
    a: 1.0,
};

/// Gray as CSS defines it (R=G=B=0.5)
pub const GRAY: Color = Color {
    r: 128.0 / 255.0,
    g: 128.0 / 255.0,
    b: 128.0 / 255.0,
    a: 1.0,
};

/// Orange as CSS defines it (R=1.0, G=0.65, B=0.0)
pub const ORANGE: Color = Color {
    r: 1.0,
    g: 165.0 / 255.0,
    b: 0.0,
    a: 1.0,
};

/// Fully transparent, used for scenes rendered without a background.
pub const TRANSPARENT: Color = Color {
    r: 0.0,
    g: 0.0,
    b: 0.0,
    a: 0.0,
};

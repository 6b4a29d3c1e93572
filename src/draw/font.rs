//! Font descriptors for shape labels.

use std::fmt;

/// Font face used for labels: family name, weight and style.
///
/// The size lives on [`Font`] so one descriptor can serve both the small
/// attribute labels and the larger entity/relationship labels.
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    /// Font family name (e.g., "Arial", "Sans", "DejaVu Sans")
    pub family: String,

    /// Font weight (e.g., "normal", "bold", "light" or numeric 100-900)
    pub weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    pub style: String,
}

impl FontDescriptor {
    /// Creates a new font descriptor with the specified parameters.
    pub fn new(family: String, weight: String, style: String) -> Self {
        Self {
            family,
            weight,
            style,
        }
    }

    /// Converts this descriptor to a Pango font description string without a size.
    ///
    /// Format: "Family Style Weight", e.g. "Arial" or "Sans Italic Bold".
    pub fn to_pango_string(&self) -> String {
        let mut parts = vec![self.family.clone()];

        if self.style.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.style));
        }

        if self.weight.to_lowercase() != "normal" {
            parts.push(capitalize_first(&self.weight));
        }

        parts.join(" ")
    }

    /// Builds a Pango description with an absolute size in pixels.
    pub fn to_pango_description(&self, size_px: f64) -> pango::FontDescription {
        let mut desc = pango::FontDescription::from_string(&self.to_pango_string());
        desc.set_absolute_size(size_px * pango::SCALE as f64);
        desc
    }
}

impl Default for FontDescriptor {
    fn default() -> Self {
        Self {
            family: "Arial".to_string(),
            weight: "normal".to_string(),
            style: "normal".to_string(),
        }
    }
}

/// A sized font, the equivalent of a canvas `font` property such as `"20px Arial"`.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    pub descriptor: FontDescriptor,
    /// Size in pixels
    pub size: f64,
}

impl Font {
    pub fn new(descriptor: FontDescriptor, size: f64) -> Self {
        Self { descriptor, size }
    }
}

impl fmt::Display for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut prefix = String::new();
        if self.descriptor.style.to_lowercase() != "normal" {
            prefix.push_str(&self.descriptor.style.to_lowercase());
            prefix.push(' ');
        }
        if self.descriptor.weight.to_lowercase() != "normal" {
            prefix.push_str(&self.descriptor.weight.to_lowercase());
            prefix.push(' ');
        }
        write!(f, "{}{}px {}", prefix, self.size, self.descriptor.family)
    }
}

fn capitalize_first(s: &str) -> String {
    let mut chars = s.chars();
    match chars.next() {
        None => String::new(),
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_descriptor_is_plain_arial() {
        let font = FontDescriptor::default();
        assert_eq!(font.to_pango_string(), "Arial");
    }

    #[test]
    fn pango_string_includes_style_and_weight() {
        let font = FontDescriptor::new(
            "Sans".to_string(),
            "bold".to_string(),
            "italic".to_string(),
        );
        assert_eq!(font.to_pango_string(), "Sans Italic Bold");
    }

    #[test]
    fn display_matches_canvas_shorthand() {
        let font = Font::new(FontDescriptor::default(), 20.0);
        assert_eq!(font.to_string(), "20px Arial");

        let bold = Font::new(
            FontDescriptor::new(
                "Sans".to_string(),
                "bold".to_string(),
                "normal".to_string(),
            ),
            10.0,
        );
        assert_eq!(bold.to_string(), "bold 10px Sans");
    }
}

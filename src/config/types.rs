//! Configuration type definitions.

use super::enums::ColorSpec;
use crate::draw::{FontDescriptor, ShapeStyle};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Shape styling settings.
///
/// Controls label fonts and the weak-entity border gap. Shape colors come
/// from the scene file, not from here.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct StyleConfig {
    /// Font family name for labels (e.g., "Arial", "Sans", "DejaVu Sans")
    /// Pango falls back to a default face if the family is not installed
    #[serde(default = "default_font_family")]
    pub font_family: String,

    /// Font weight (e.g., "normal", "bold", "light", 400, 700)
    #[serde(default = "default_font_weight")]
    pub font_weight: String,

    /// Font style (e.g., "normal", "italic", "oblique")
    #[serde(default = "default_font_style")]
    pub font_style: String,

    /// Label size for attributes in pixels (valid range: 6.0 - 72.0)
    #[serde(default = "default_attribute_font_size")]
    pub attribute_font_size: f64,

    /// Label size for entities, relationships and weak entities in pixels
    /// (valid range: 6.0 - 72.0)
    #[serde(default = "default_label_font_size")]
    pub label_font_size: f64,

    /// Gap between the two borders of a weak entity in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_weak_entity_inset")]
    pub weak_entity_inset: f64,
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            font_family: default_font_family(),
            font_weight: default_font_weight(),
            font_style: default_font_style(),
            attribute_font_size: default_attribute_font_size(),
            label_font_size: default_label_font_size(),
            weak_entity_inset: default_weak_entity_inset(),
        }
    }
}

impl StyleConfig {
    /// Builds the shape style the renderer consumes.
    pub fn shape_style(&self) -> ShapeStyle {
        ShapeStyle {
            font: FontDescriptor::new(
                self.font_family.clone(),
                self.font_weight.clone(),
                self.font_style.clone(),
            ),
            attribute_font_size: self.attribute_font_size,
            label_font_size: self.label_font_size,
            weak_entity_inset: self.weak_entity_inset,
        }
    }
}

/// PNG output settings.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct OutputConfig {
    /// Stroke width in pixels (valid range: 0.5 - 10.0)
    #[serde(default = "default_line_width")]
    pub line_width: f64,

    /// Background color used when the scene does not set one.
    /// A named color ("white", "transparent", ...), a hex string ("#f0f0f0")
    /// or an RGB array like `[255, 255, 255]`
    #[serde(default = "default_background")]
    pub background: ColorSpec,

    /// Margin added around the shapes when the scene has no explicit size
    /// (valid range: 0.0 - 500.0)
    #[serde(default = "default_padding")]
    pub padding: f64,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            line_width: default_line_width(),
            background: default_background(),
            padding: default_padding(),
        }
    }
}

fn default_font_family() -> String {
    "Arial".to_string()
}

fn default_font_weight() -> String {
    "normal".to_string()
}

fn default_font_style() -> String {
    "normal".to_string()
}

fn default_attribute_font_size() -> f64 {
    crate::draw::erd::ATTRIBUTE_FONT_SIZE
}

fn default_label_font_size() -> f64 {
    crate::draw::erd::LABEL_FONT_SIZE
}

fn default_weak_entity_inset() -> f64 {
    crate::draw::erd::WEAK_ENTITY_INSET
}

fn default_line_width() -> f64 {
    1.0
}

fn default_background() -> ColorSpec {
    ColorSpec::Name("white".to_string())
}

fn default_padding() -> f64 {
    10.0
}

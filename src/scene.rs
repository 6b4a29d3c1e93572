//! Scene files: an ordered list of pre-laid-out ERD shapes.
//!
//! Scenes are read from TOML or JSON. Layout is the caller's job; a scene
//! only says where each shape goes.

use crate::config::ColorSpec;
use crate::draw::ErdShape;
use crate::util::Rect;
use anyhow::{Context, Result};
use log::{debug, info};
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// A diagram to render.
///
/// # Example TOML
/// ```toml
/// width = 300
/// height = 120
/// background = "white"
///
/// [[shapes]]
/// kind = "entity"
/// x = 10.0
/// y = 10.0
/// w = 100.0
/// h = 50.0
/// label = "Student"
/// ```
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
pub struct Scene {
    /// Canvas width in pixels; derived from the shapes when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub width: Option<u32>,

    /// Canvas height in pixels; derived from the shapes when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub height: Option<u32>,

    /// Background color; the config default applies when omitted
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub background: Option<ColorSpec>,

    /// Shapes in paint order (first = bottom)
    #[serde(default)]
    pub shapes: Vec<ErdShape>,
}

impl Scene {
    /// Loads a scene, choosing the format by extension (`.json` or TOML otherwise).
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read scene from {}", path.display()))?;

        let is_json = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));

        let scene = if is_json {
            Self::from_json_str(&contents)
        } else {
            Self::from_toml_str(&contents)
        }
        .with_context(|| format!("Failed to parse scene from {}", path.display()))?;

        info!(
            "Loaded scene with {} shape(s) from {}",
            scene.shapes.len(),
            path.display()
        );
        Ok(scene)
    }

    pub fn from_toml_str(contents: &str) -> Result<Self> {
        Ok(toml::from_str(contents)?)
    }

    pub fn from_json_str(contents: &str) -> Result<Self> {
        Ok(serde_json::from_str(contents)?)
    }

    /// Union of all shape boxes, or `None` for an empty scene.
    pub fn extent(&self) -> Option<Rect> {
        self.shapes
            .iter()
            .map(ErdShape::bounding_box)
            .reduce(Rect::union)
    }

    /// Pixel size of the canvas to render onto.
    ///
    /// Explicit `width`/`height` win. Otherwise each dimension reaches the far
    /// edge of the shapes plus `padding`. Never smaller than 1x1.
    pub fn canvas_size(&self, padding: f64) -> (u32, u32) {
        let extent = self.extent();
        let derive = |edge: Option<f64>| -> u32 {
            edge.map(|edge| (edge + padding).ceil().max(1.0) as u32)
                .unwrap_or(1)
        };

        let width = self
            .width
            .unwrap_or_else(|| derive(extent.map(|rect| rect.max_x())));
        let height = self
            .height
            .unwrap_or_else(|| derive(extent.map(|rect| rect.max_y())));

        let size = (width.max(1), height.max(1));
        debug!("Canvas size resolved to {}x{}", size.0, size.1);
        size
    }

    /// JSON schema describing the scene file format.
    pub fn json_schema() -> schemars::Schema {
        schemars::schema_for!(Scene)
    }
}

//! Serializable ERD shape descriptions.

use super::erd::{
    ShapeStyle, draw_diamond_with_style, draw_double_line_rect_with_style,
    draw_ellipse_with_style, draw_rectangle_with_style,
};
use super::surface::{DrawError, Surface};
use crate::config::ColorSpec;
use crate::util::Rect;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// A pre-laid-out ERD shape: what to draw, where, in which color, with which label.
///
/// Serialized with a `kind` tag, e.g.
/// ```toml
/// [[shapes]]
/// kind = "weak-entity"
/// x = 10.0
/// y = 10.0
/// w = 120.0
/// h = 50.0
/// color = "black"
/// label = "Dependent"
/// ```
#[derive(Clone, Debug, Serialize, Deserialize, JsonSchema)]
#[serde(tag = "kind", rename_all = "kebab-case")]
pub enum ErdShape {
    /// Attribute, drawn as an ellipse
    Attribute {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        #[serde(default = "default_shape_color")]
        color: ColorSpec,
        label: String,
    },
    /// Entity, drawn as a rectangle
    Entity {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        #[serde(default = "default_shape_color")]
        color: ColorSpec,
        label: String,
    },
    /// Relationship, drawn as a diamond
    Relationship {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        #[serde(default = "default_shape_color")]
        color: ColorSpec,
        label: String,
    },
    /// Weak entity, drawn as a double-bordered rectangle
    WeakEntity {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        #[serde(default = "default_shape_color")]
        color: ColorSpec,
        label: String,
    },
}

fn default_shape_color() -> ColorSpec {
    ColorSpec::Name("black".to_string())
}

impl ErdShape {
    /// Short name of the shape kind, as used in scene files.
    pub fn kind(&self) -> &'static str {
        match self {
            ErdShape::Attribute { .. } => "attribute",
            ErdShape::Entity { .. } => "entity",
            ErdShape::Relationship { .. } => "relationship",
            ErdShape::WeakEntity { .. } => "weak-entity",
        }
    }

    pub fn label(&self) -> &str {
        match self {
            ErdShape::Attribute { label, .. }
            | ErdShape::Entity { label, .. }
            | ErdShape::Relationship { label, .. }
            | ErdShape::WeakEntity { label, .. } => label,
        }
    }

    pub fn color(&self) -> &ColorSpec {
        match self {
            ErdShape::Attribute { color, .. }
            | ErdShape::Entity { color, .. }
            | ErdShape::Relationship { color, .. }
            | ErdShape::WeakEntity { color, .. } => color,
        }
    }

    fn geometry(&self) -> (f64, f64, f64, f64) {
        match self {
            ErdShape::Attribute { x, y, w, h, .. }
            | ErdShape::Entity { x, y, w, h, .. }
            | ErdShape::Relationship { x, y, w, h, .. }
            | ErdShape::WeakEntity { x, y, w, h, .. } => (*x, *y, *w, *h),
        }
    }

    /// Returns the axis-aligned box the shape is drawn in.
    ///
    /// Negative sizes are normalized so the box always has its origin at the
    /// top-left corner.
    pub fn bounding_box(&self) -> Rect {
        let (x, y, w, h) = self.geometry();
        Rect::normalized(x, y, w, h)
    }

    /// Paints the shape onto `surface`.
    pub fn render<S: Surface + ?Sized>(
        &self,
        surface: &mut S,
        style: &ShapeStyle,
    ) -> Result<(), DrawError> {
        let (x, y, w, h) = self.geometry();
        let color = self.color().to_color();
        let label = self.label();

        log::debug!(
            "Rendering {} '{}' at ({:.1}, {:.1}) size {:.1}x{:.1}",
            self.kind(),
            label,
            x,
            y,
            w,
            h
        );

        match self {
            ErdShape::Attribute { .. } => {
                draw_ellipse_with_style(surface, style, x, y, w, h, color, label)
            }
            ErdShape::Entity { .. } => {
                draw_rectangle_with_style(surface, style, x, y, w, h, color, label)
            }
            ErdShape::Relationship { .. } => {
                draw_diamond_with_style(surface, style, x, y, w, h, color, label)
            }
            ErdShape::WeakEntity { .. } => {
                draw_double_line_rect_with_style(surface, style, x, y, w, h, color, label)
            }
        }
    }
}

/// Renders all shapes in order (first shape = bottom layer).
///
/// Stops at the first surface error.
pub fn render_shapes<S: Surface + ?Sized>(
    surface: &mut S,
    shapes: &[ErdShape],
    style: &ShapeStyle,
) -> Result<(), DrawError> {
    for shape in shapes {
        shape.render(surface, style)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, RED};
    use crate::draw::recording::{DrawOp, RecordingSurface};

    fn entity(label: &str, color: ColorSpec) -> ErdShape {
        ErdShape::Entity {
            x: 10.0,
            y: 10.0,
            w: 100.0,
            h: 50.0,
            color,
            label: label.to_string(),
        }
    }

    #[test]
    fn bounding_box_normalizes_negative_sizes() {
        let shape = ErdShape::Relationship {
            x: 100.0,
            y: 100.0,
            w: -40.0,
            h: -20.0,
            color: default_shape_color(),
            label: "r".to_string(),
        };
        assert_eq!(shape.bounding_box(), Rect::new(60.0, 80.0, 40.0, 20.0));
    }

    #[test]
    fn render_dispatches_to_matching_draw_function() {
        let mut surface = RecordingSurface::new();
        entity("Student", ColorSpec::Rgb([255, 0, 0]))
            .render(&mut surface, &ShapeStyle::default())
            .unwrap();

        assert_eq!(
            surface.ops()[0],
            DrawOp::StrokeRect {
                x: 10.0,
                y: 10.0,
                w: 100.0,
                h: 50.0,
                color: RED,
            }
        );
    }

    #[test]
    fn render_shapes_keeps_list_order() {
        let shapes = vec![
            entity("First", default_shape_color()),
            ErdShape::Attribute {
                x: 0.0,
                y: 0.0,
                w: 40.0,
                h: 20.0,
                color: default_shape_color(),
                label: "Second".to_string(),
            },
        ];
        let mut surface = RecordingSurface::new();
        render_shapes(&mut surface, &shapes, &ShapeStyle::default()).unwrap();

        let labels: Vec<_> = surface
            .texts()
            .map(|op| match op {
                DrawOp::FillText { text, color, .. } => {
                    assert_eq!(*color, BLACK);
                    text.clone()
                }
                _ => unreachable!(),
            })
            .collect();
        assert_eq!(labels, vec!["First", "Second"]);
    }

    #[test]
    fn shapes_deserialize_from_tagged_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            shapes: Vec<ErdShape>,
        }

        let wrapper: Wrapper = toml::from_str(
            r##"
            [[shapes]]
            kind = "weak-entity"
            x = 1.0
            y = 2.0
            w = 3.0
            h = 4.0
            label = "Dependent"

            [[shapes]]
            kind = "attribute"
            x = 0.0
            y = 0.0
            w = 10.0
            h = 5.0
            color = "#ff0000"
            label = "name"
            "##,
        )
        .unwrap();

        assert_eq!(wrapper.shapes.len(), 2);
        assert_eq!(wrapper.shapes[0].kind(), "weak-entity");
        assert_eq!(wrapper.shapes[0].color().to_color(), BLACK);
        assert_eq!(wrapper.shapes[1].color().to_color(), RED);
        assert_eq!(wrapper.shapes[1].label(), "name");
    }
}

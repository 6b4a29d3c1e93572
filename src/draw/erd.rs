//! ERD shape rendering: attributes, entities, relationships and weak entities.
//!
//! Each function strokes one outline for the bounding box `(x, y, w, h)` in
//! `color` and paints `label` centered on the box with the same color. They
//! overwrite the surface's stroke color, fill color, font, text align and
//! text baseline and leave them that way.

use super::color::Color;
use super::font::{Font, FontDescriptor};
use super::surface::{DrawError, Surface, TextAlign, TextBaseline};
use crate::util::Rect;

/// Control point offset ratio for approximating a quarter ellipse with a cubic Bézier.
pub const KAPPA: f64 = 0.5522848;

/// Label font size for attributes (ellipses), in pixels.
pub const ATTRIBUTE_FONT_SIZE: f64 = 10.0;

/// Label font size for entities, relationships and weak entities, in pixels.
pub const LABEL_FONT_SIZE: f64 = 20.0;

/// Gap between the outer and inner border of a weak entity.
pub const WEAK_ENTITY_INSET: f64 = 2.0;

/// Tunable constants shared by the shape functions.
#[derive(Debug, Clone, PartialEq)]
pub struct ShapeStyle {
    pub font: FontDescriptor,
    pub attribute_font_size: f64,
    pub label_font_size: f64,
    pub weak_entity_inset: f64,
}

impl Default for ShapeStyle {
    fn default() -> Self {
        Self {
            font: FontDescriptor::default(),
            attribute_font_size: ATTRIBUTE_FONT_SIZE,
            label_font_size: LABEL_FONT_SIZE,
            weak_entity_inset: WEAK_ENTITY_INSET,
        }
    }
}

impl ShapeStyle {
    fn attribute_font(&self) -> Font {
        Font::new(self.font.clone(), self.attribute_font_size)
    }

    fn label_font(&self) -> Font {
        Font::new(self.font.clone(), self.label_font_size)
    }
}

/// Draws an attribute: an ellipse inscribed in the box.
pub fn draw_ellipse<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    color: Color,
    label: &str,
) -> Result<(), DrawError> {
    draw_ellipse_with_style(surface, &ShapeStyle::default(), x, y, w, h, color, label)
}

/// Draws an entity: a plain rectangle.
pub fn draw_rectangle<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    color: Color,
    label: &str,
) -> Result<(), DrawError> {
    draw_rectangle_with_style(surface, &ShapeStyle::default(), x, y, w, h, color, label)
}

/// Draws a relationship: a diamond through the midpoints of the box's sides.
pub fn draw_diamond<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    color: Color,
    label: &str,
) -> Result<(), DrawError> {
    draw_diamond_with_style(surface, &ShapeStyle::default(), x, y, w, h, color, label)
}

/// Draws a weak entity: two concentric rectangles.
pub fn draw_double_line_rect<S: Surface + ?Sized>(
    surface: &mut S,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    color: Color,
    label: &str,
) -> Result<(), DrawError> {
    draw_double_line_rect_with_style(surface, &ShapeStyle::default(), x, y, w, h, color, label)
}

/// [`draw_ellipse`] with an explicit style.
///
/// The outline is four cubic Bézier segments starting at the left extreme
/// and running clockwise through the top, right and bottom extremes.
#[allow(clippy::too_many_arguments)]
pub fn draw_ellipse_with_style<S: Surface + ?Sized>(
    surface: &mut S,
    style: &ShapeStyle,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    color: Color,
    label: &str,
) -> Result<(), DrawError> {
    let ox = (w / 2.0) * KAPPA; // horizontal control point offset
    let oy = (h / 2.0) * KAPPA; // vertical control point offset
    let xe = x + w;
    let ye = y + h;
    let xm = x + w / 2.0;
    let ym = y + h / 2.0;

    surface.begin_path();
    surface.move_to(x, ym);
    surface.curve_to(x, ym - oy, xm - ox, y, xm, y);
    surface.curve_to(xm + ox, y, xe, ym - oy, xe, ym);
    surface.curve_to(xe, ym + oy, xm + ox, ye, xm, ye);
    surface.curve_to(xm - ox, ye, x, ym + oy, x, ym);
    surface.close_path();
    surface.set_stroke_color(color);
    surface.stroke()?;

    draw_centered_label(surface, &style.attribute_font(), x, y, w, h, color, label)
}

/// [`draw_rectangle`] with an explicit style.
#[allow(clippy::too_many_arguments)]
pub fn draw_rectangle_with_style<S: Surface + ?Sized>(
    surface: &mut S,
    style: &ShapeStyle,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    color: Color,
    label: &str,
) -> Result<(), DrawError> {
    surface.set_stroke_color(color);
    surface.stroke_rect(x, y, w, h)?;

    draw_centered_label(surface, &style.label_font(), x, y, w, h, color, label)
}

/// [`draw_diamond`] with an explicit style.
#[allow(clippy::too_many_arguments)]
pub fn draw_diamond_with_style<S: Surface + ?Sized>(
    surface: &mut S,
    style: &ShapeStyle,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    color: Color,
    label: &str,
) -> Result<(), DrawError> {
    surface.begin_path();
    surface.move_to(x + w / 2.0, y);
    surface.line_to(x + w, y + h / 2.0);
    surface.line_to(x + w / 2.0, y + h);
    surface.line_to(x, y + h / 2.0);
    surface.close_path();
    surface.set_stroke_color(color);
    surface.stroke()?;

    draw_centered_label(surface, &style.label_font(), x, y, w, h, color, label)
}

/// [`draw_double_line_rect`] with an explicit style.
#[allow(clippy::too_many_arguments)]
pub fn draw_double_line_rect_with_style<S: Surface + ?Sized>(
    surface: &mut S,
    style: &ShapeStyle,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    color: Color,
    label: &str,
) -> Result<(), DrawError> {
    let inner = Rect::new(x, y, w, h).inset(style.weak_entity_inset);

    surface.set_stroke_color(color);
    surface.stroke_rect(x, y, w, h)?;
    surface.stroke_rect(inner.x, inner.y, inner.width, inner.height)?;

    draw_centered_label(surface, &style.label_font(), x, y, w, h, color, label)
}

#[allow(clippy::too_many_arguments)]
fn draw_centered_label<S: Surface + ?Sized>(
    surface: &mut S,
    font: &Font,
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    color: Color,
    label: &str,
) -> Result<(), DrawError> {
    surface.set_font(font);
    surface.set_text_align(TextAlign::Center);
    surface.set_text_baseline(TextBaseline::Middle);
    surface.set_fill_color(color);
    let center = Rect::new(x, y, w, h).center();
    surface.fill_text(label, center.x, center.y)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::{BLACK, BLUE, RED};
    use crate::draw::recording::{DrawOp, PathSegment, RecordingSurface};
    use crate::util::Point;

    fn single_text(surface: &RecordingSurface) -> DrawOp {
        let texts: Vec<_> = surface.texts().cloned().collect();
        assert_eq!(texts.len(), 1, "expected exactly one text paint");
        texts.into_iter().next().unwrap()
    }

    fn assert_centered_label(op: &DrawOp, label: &str, cx: f64, cy: f64, color: Color, size: f64) {
        match op {
            DrawOp::FillText {
                text,
                x,
                y,
                color: text_color,
                font,
                align,
                baseline,
            } => {
                assert_eq!(text, label);
                assert_eq!((*x, *y), (cx, cy));
                assert_eq!(*text_color, color);
                assert_eq!(font.size, size);
                assert_eq!(*align, TextAlign::Center);
                assert_eq!(*baseline, TextBaseline::Middle);
            }
            other => panic!("expected text paint, got {:?}", other),
        }
    }

    fn path_points(segments: &[PathSegment]) -> Vec<Point> {
        segments
            .iter()
            .filter_map(|segment| match segment {
                PathSegment::MoveTo(p) | PathSegment::LineTo(p) => Some(*p),
                PathSegment::CurveTo { end, .. } => Some(*end),
                PathSegment::Close => None,
            })
            .collect()
    }

    #[test]
    fn rectangle_strokes_box_and_centers_label() {
        let mut surface = RecordingSurface::new();
        draw_rectangle(&mut surface, 10.0, 10.0, 100.0, 50.0, BLACK, "Student").unwrap();

        assert_eq!(surface.stroke_count(), 1);
        assert_eq!(
            surface.ops()[0],
            DrawOp::StrokeRect {
                x: 10.0,
                y: 10.0,
                w: 100.0,
                h: 50.0,
                color: BLACK,
            }
        );
        assert_centered_label(&single_text(&surface), "Student", 60.0, 35.0, BLACK, 20.0);
    }

    #[test]
    fn ellipse_touches_all_four_extremes() {
        let mut surface = RecordingSurface::new();
        draw_ellipse(&mut surface, 20.0, 40.0, 80.0, 30.0, BLUE, "name").unwrap();

        assert_eq!(surface.stroke_count(), 1);
        let DrawOp::Stroke { segments, color } = &surface.ops()[0] else {
            panic!("ellipse should stroke a path");
        };
        assert_eq!(*color, BLUE);
        assert_eq!(segments.len(), 6);
        assert_eq!(segments.last(), Some(&PathSegment::Close));

        let points = path_points(segments);
        assert_eq!(
            points,
            vec![
                Point::new(20.0, 55.0),
                Point::new(60.0, 40.0),
                Point::new(100.0, 55.0),
                Point::new(60.0, 70.0),
                Point::new(20.0, 55.0),
            ]
        );

        assert_centered_label(&single_text(&surface), "name", 60.0, 55.0, BLUE, 10.0);
    }

    #[test]
    fn ellipse_control_points_use_kappa() {
        let mut surface = RecordingSurface::new();
        draw_ellipse(&mut surface, 0.0, 0.0, 200.0, 100.0, BLACK, "").unwrap();

        let DrawOp::Stroke { segments, .. } = &surface.ops()[0] else {
            panic!("ellipse should stroke a path");
        };
        let PathSegment::CurveTo { c1, c2, end } = &segments[1] else {
            panic!("second segment should be a curve");
        };
        let ox = 100.0 * KAPPA;
        let oy = 50.0 * KAPPA;
        assert_eq!(*c1, Point::new(0.0, 50.0 - oy));
        assert_eq!(*c2, Point::new(100.0 - ox, 0.0));
        assert_eq!(*end, Point::new(100.0, 0.0));
    }

    #[test]
    fn diamond_vertices_are_side_midpoints() {
        let mut surface = RecordingSurface::new();
        draw_diamond(&mut surface, 0.0, 0.0, 120.0, 60.0, RED, "Enrolls").unwrap();

        assert_eq!(surface.stroke_count(), 1);
        let DrawOp::Stroke { segments, color } = &surface.ops()[0] else {
            panic!("diamond should stroke a path");
        };
        assert_eq!(*color, RED);
        assert_eq!(
            segments,
            &vec![
                PathSegment::MoveTo(Point::new(60.0, 0.0)),
                PathSegment::LineTo(Point::new(120.0, 30.0)),
                PathSegment::LineTo(Point::new(60.0, 60.0)),
                PathSegment::LineTo(Point::new(0.0, 30.0)),
                PathSegment::Close,
            ]
        );
        assert_centered_label(&single_text(&surface), "Enrolls", 60.0, 30.0, RED, 20.0);
    }

    #[test]
    fn double_line_rect_strokes_outer_and_inset_inner() {
        let mut surface = RecordingSurface::new();
        draw_double_line_rect(&mut surface, 10.0, 20.0, 100.0, 40.0, BLACK, "Dependent").unwrap();

        let rects: Vec<_> = surface
            .ops()
            .iter()
            .filter(|op| matches!(op, DrawOp::StrokeRect { .. }))
            .cloned()
            .collect();
        assert_eq!(
            rects,
            vec![
                DrawOp::StrokeRect {
                    x: 10.0,
                    y: 20.0,
                    w: 100.0,
                    h: 40.0,
                    color: BLACK,
                },
                DrawOp::StrokeRect {
                    x: 12.0,
                    y: 22.0,
                    w: 96.0,
                    h: 36.0,
                    color: BLACK,
                },
            ]
        );
        assert_centered_label(&single_text(&surface), "Dependent", 60.0, 40.0, BLACK, 20.0);
    }

    #[test]
    fn shapes_leave_style_state_behind() {
        let mut surface = RecordingSurface::new();
        draw_ellipse(&mut surface, 0.0, 0.0, 10.0, 10.0, RED, "a").unwrap();

        let state = surface.state();
        assert_eq!(state.stroke_color, RED);
        assert_eq!(state.fill_color, RED);
        assert_eq!(state.font.size, ATTRIBUTE_FONT_SIZE);
        assert_eq!(state.text_align, TextAlign::Center);
        assert_eq!(state.text_baseline, TextBaseline::Middle);

        draw_rectangle(&mut surface, 0.0, 0.0, 10.0, 10.0, BLUE, "b").unwrap();
        assert_eq!(surface.state().font.size, LABEL_FONT_SIZE);
        assert_eq!(surface.state().fill_color, BLUE);
    }

    #[test]
    fn custom_style_changes_fonts_and_inset() {
        let style = ShapeStyle {
            font: FontDescriptor::new(
                "Sans".to_string(),
                "bold".to_string(),
                "normal".to_string(),
            ),
            attribute_font_size: 12.0,
            label_font_size: 24.0,
            weak_entity_inset: 4.0,
        };
        let mut surface = RecordingSurface::new();
        draw_double_line_rect_with_style(&mut surface, &style, 0.0, 0.0, 50.0, 50.0, BLACK, "W")
            .unwrap();

        assert_eq!(
            surface.ops()[1],
            DrawOp::StrokeRect {
                x: 4.0,
                y: 4.0,
                w: 42.0,
                h: 42.0,
                color: BLACK,
            }
        );
        let DrawOp::FillText { font, .. } = single_text(&surface) else {
            unreachable!();
        };
        assert_eq!(font.descriptor.family, "Sans");
        assert_eq!(font.size, 24.0);
    }

    #[test]
    fn every_shape_anchors_label_at_box_center() {
        type DrawFn =
            fn(&mut RecordingSurface, f64, f64, f64, f64, Color, &str) -> Result<(), DrawError>;
        let shapes: [DrawFn; 4] = [
            draw_ellipse,
            draw_rectangle,
            draw_diamond,
            draw_double_line_rect,
        ];

        for draw in shapes {
            let mut surface = RecordingSurface::new();
            draw(&mut surface, 5.0, 7.0, 30.0, 14.0, BLACK, "x").unwrap();
            let DrawOp::FillText { x, y, .. } = single_text(&surface) else {
                unreachable!();
            };
            assert_eq!((x, y), (20.0, 14.0));
        }
    }

    #[test]
    fn undersized_weak_entity_passes_negative_inner_rect_through() {
        let mut surface = RecordingSurface::new();
        draw_double_line_rect(&mut surface, 0.0, 0.0, 2.0, 2.0, BLACK, "tiny").unwrap();

        assert_eq!(
            surface.ops()[1],
            DrawOp::StrokeRect {
                x: 2.0,
                y: 2.0,
                w: -2.0,
                h: -2.0,
                color: BLACK,
            }
        );
    }

    #[test]
    fn negative_boxes_are_drawn_without_normalization() {
        let mut surface = RecordingSurface::new();
        draw_rectangle(&mut surface, 100.0, 50.0, -40.0, -20.0, BLACK, "r").unwrap();
        assert_eq!(
            surface.ops()[0],
            DrawOp::StrokeRect {
                x: 100.0,
                y: 50.0,
                w: -40.0,
                h: -20.0,
                color: BLACK,
            }
        );
        let DrawOp::FillText { x, y, .. } = single_text(&surface) else {
            unreachable!();
        };
        assert_eq!((x, y), (80.0, 40.0));

        let mut surface = RecordingSurface::new();
        draw_diamond(&mut surface, 0.0, 0.0, -60.0, -30.0, RED, "d").unwrap();
        let DrawOp::Stroke { segments, .. } = &surface.ops()[0] else {
            panic!("diamond should stroke a path");
        };
        assert_eq!(segments[0], PathSegment::MoveTo(Point::new(-30.0, 0.0)));
        assert_eq!(segments[1], PathSegment::LineTo(Point::new(-60.0, -15.0)));
    }

    #[test]
    fn zero_sized_ellipse_collapses_to_a_point() {
        let mut surface = RecordingSurface::new();
        draw_ellipse(&mut surface, 5.0, 5.0, 0.0, 0.0, BLUE, "").unwrap();

        assert_eq!(surface.stroke_count(), 1);
        let DrawOp::Stroke { segments, .. } = &surface.ops()[0] else {
            panic!("ellipse should stroke a path");
        };
        assert!(
            path_points(segments)
                .iter()
                .all(|p| *p == Point::new(5.0, 5.0))
        );
    }
}

//! In-memory [`Surface`] that records paint operations instead of rasterizing.
//!
//! Useful for checking shape geometry exactly: every stroke carries the path
//! segments it traced and the color it used, every text paint carries its
//! anchor point and the style it was drawn with.

use super::color::{BLACK, Color};
use super::font::{Font, FontDescriptor};
use super::surface::{DrawError, Surface, TextAlign, TextBaseline};
use crate::util::Point;

/// One element of a traced path.
#[derive(Debug, Clone, PartialEq)]
pub enum PathSegment {
    MoveTo(Point),
    LineTo(Point),
    CurveTo {
        c1: Point,
        c2: Point,
        end: Point,
    },
    Close,
}

/// A recorded paint operation.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// `stroke()` of the current path
    Stroke {
        segments: Vec<PathSegment>,
        color: Color,
    },
    /// `stroke_rect()`
    StrokeRect {
        x: f64,
        y: f64,
        w: f64,
        h: f64,
        color: Color,
    },
    /// `fill_text()`
    FillText {
        text: String,
        x: f64,
        y: f64,
        color: Color,
        font: Font,
        align: TextAlign,
        baseline: TextBaseline,
    },
}

impl DrawOp {
    /// Returns true for stroke and stroke-rect operations.
    pub fn is_stroke(&self) -> bool {
        matches!(self, DrawOp::Stroke { .. } | DrawOp::StrokeRect { .. })
    }
}

/// Style state as a canvas would report it after a series of calls.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceState {
    pub stroke_color: Color,
    pub fill_color: Color,
    pub font: Font,
    pub text_align: TextAlign,
    pub text_baseline: TextBaseline,
}

impl Default for SurfaceState {
    fn default() -> Self {
        Self {
            stroke_color: BLACK,
            fill_color: BLACK,
            font: Font::new(FontDescriptor::default(), 10.0),
            text_align: TextAlign::default(),
            text_baseline: TextBaseline::default(),
        }
    }
}

/// A [`Surface`] that keeps a log of everything painted on it.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    state: SurfaceState,
    path: Vec<PathSegment>,
    ops: Vec<DrawOp>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All paint operations in the order they were issued.
    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    /// Current style state.
    pub fn state(&self) -> &SurfaceState {
        &self.state
    }

    /// Path segments accumulated since the last `begin_path`.
    pub fn current_path(&self) -> &[PathSegment] {
        &self.path
    }

    /// Number of stroke operations (path strokes and rectangle strokes).
    pub fn stroke_count(&self) -> usize {
        self.ops.iter().filter(|op| op.is_stroke()).count()
    }

    /// Text paints only.
    pub fn texts(&self) -> impl Iterator<Item = &DrawOp> {
        self.ops
            .iter()
            .filter(|op| matches!(op, DrawOp::FillText { .. }))
    }
}

impl Surface for RecordingSurface {
    fn set_stroke_color(&mut self, color: Color) {
        self.state.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.state.fill_color = color;
    }

    fn set_font(&mut self, font: &Font) {
        self.state.font = font.clone();
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.state.text_align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.state.text_baseline = baseline;
    }

    fn begin_path(&mut self) {
        self.path.clear();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.path.push(PathSegment::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.path.push(PathSegment::LineTo(Point::new(x, y)));
    }

    fn curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.path.push(PathSegment::CurveTo {
            c1: Point::new(c1x, c1y),
            c2: Point::new(c2x, c2y),
            end: Point::new(x, y),
        });
    }

    fn close_path(&mut self) {
        self.path.push(PathSegment::Close);
    }

    fn stroke(&mut self) -> Result<(), DrawError> {
        self.ops.push(DrawOp::Stroke {
            segments: self.path.clone(),
            color: self.state.stroke_color,
        });
        Ok(())
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), DrawError> {
        self.ops.push(DrawOp::StrokeRect {
            x,
            y,
            w,
            h,
            color: self.state.stroke_color,
        });
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), DrawError> {
        self.ops.push(DrawOp::FillText {
            text: text.to_string(),
            x,
            y,
            color: self.state.fill_color,
            font: self.state.font.clone(),
            align: self.state.text_align,
            baseline: self.state.text_baseline,
        });
        Ok(())
    }
}

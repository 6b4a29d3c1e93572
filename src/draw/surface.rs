//! Drawing surface abstraction and its Cairo/Pango backend.
//!
//! [`Surface`] mirrors the subset of the HTML canvas 2D API that the ERD
//! shape functions rely on: separate stroke and fill colors, a sized font,
//! text alignment, path building, stroking and text filling. Style setters
//! overwrite surface state and nothing restores it afterwards.

use super::color::{BLACK, Color};
use super::font::{Font, FontDescriptor};
use thiserror::Error;

/// Horizontal anchor of text relative to the `x` passed to [`Surface::fill_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlign {
    #[default]
    Start,
    Center,
    End,
}

/// Vertical anchor of text relative to the `y` passed to [`Surface::fill_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextBaseline {
    Top,
    Middle,
    #[default]
    Alphabetic,
    Bottom,
}

/// Errors raised by the underlying drawing backend.
#[derive(Debug, Error)]
pub enum DrawError {
    #[error("Cairo drawing failed: {0}")]
    Cairo(#[from] cairo::Error),
}

/// A canvas-like 2D drawing surface.
///
/// Path building and style changes are infallible; the painting calls
/// (`stroke`, `stroke_rect`, `fill_text`) surface backend failures unchanged.
pub trait Surface {
    fn set_stroke_color(&mut self, color: Color);
    fn set_fill_color(&mut self, color: Color);
    fn set_font(&mut self, font: &Font);
    fn set_text_align(&mut self, align: TextAlign);
    fn set_text_baseline(&mut self, baseline: TextBaseline);

    /// Discards the current path and starts a new one.
    fn begin_path(&mut self);
    fn move_to(&mut self, x: f64, y: f64);
    fn line_to(&mut self, x: f64, y: f64);
    /// Cubic Bézier from the current point through two control points to `(x, y)`.
    fn curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64);
    fn close_path(&mut self);

    /// Strokes the current path with the stroke color. The path is kept.
    fn stroke(&mut self) -> Result<(), DrawError>;

    /// Strokes a rectangle outline without touching the current path.
    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), DrawError>;

    /// Paints `text` with the fill color, anchored at `(x, y)` per the current
    /// text align and baseline.
    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), DrawError>;
}

/// [`Surface`] backed by a borrowed Cairo context, with Pango text layout.
///
/// Cairo has a single source color, so the canvas-style stroke and fill
/// colors are tracked here and applied right before each paint.
pub struct CairoSurface<'a> {
    ctx: &'a cairo::Context,
    stroke_color: Color,
    fill_color: Color,
    font: Font,
    text_align: TextAlign,
    text_baseline: TextBaseline,
}

impl<'a> CairoSurface<'a> {
    /// Wraps `ctx` with canvas defaults (black ink, 10px font, start/alphabetic
    /// text anchoring, 1px lines).
    pub fn new(ctx: &'a cairo::Context) -> Self {
        ctx.set_line_width(1.0);
        Self {
            ctx,
            stroke_color: BLACK,
            fill_color: BLACK,
            font: Font::new(FontDescriptor::default(), 10.0),
            text_align: TextAlign::default(),
            text_baseline: TextBaseline::default(),
        }
    }

    /// Overrides the line width used for every stroke.
    pub fn with_line_width(self, width: f64) -> Self {
        self.ctx.set_line_width(width);
        self
    }

    fn apply_source(&self, color: Color) {
        self.ctx.set_source_rgba(color.r, color.g, color.b, color.a);
    }

    /// Top-left corner of the text's logical box for the current anchoring.
    fn text_origin(&self, layout: &pango::Layout, x: f64, y: f64) -> (f64, f64) {
        let (_ink_rect, logical_rect) = layout.extents();
        let scale = pango::SCALE as f64;
        let width = logical_rect.width() as f64 / scale;
        let height = logical_rect.height() as f64 / scale;
        let baseline = layout.baseline() as f64 / scale;

        let left = match self.text_align {
            TextAlign::Start => x,
            TextAlign::Center => x - width / 2.0,
            TextAlign::End => x - width,
        };
        let top = match self.text_baseline {
            TextBaseline::Top => y,
            TextBaseline::Middle => y - height / 2.0,
            TextBaseline::Alphabetic => y - baseline,
            TextBaseline::Bottom => y - height,
        };
        (left, top)
    }
}

impl Surface for CairoSurface<'_> {
    fn set_stroke_color(&mut self, color: Color) {
        self.stroke_color = color;
    }

    fn set_fill_color(&mut self, color: Color) {
        self.fill_color = color;
    }

    fn set_font(&mut self, font: &Font) {
        self.font = font.clone();
    }

    fn set_text_align(&mut self, align: TextAlign) {
        self.text_align = align;
    }

    fn set_text_baseline(&mut self, baseline: TextBaseline) {
        self.text_baseline = baseline;
    }

    fn begin_path(&mut self) {
        self.ctx.new_path();
    }

    fn move_to(&mut self, x: f64, y: f64) {
        self.ctx.move_to(x, y);
    }

    fn line_to(&mut self, x: f64, y: f64) {
        self.ctx.line_to(x, y);
    }

    fn curve_to(&mut self, c1x: f64, c1y: f64, c2x: f64, c2y: f64, x: f64, y: f64) {
        self.ctx.curve_to(c1x, c1y, c2x, c2y, x, y);
    }

    fn close_path(&mut self) {
        self.ctx.close_path();
    }

    fn stroke(&mut self) -> Result<(), DrawError> {
        self.apply_source(self.stroke_color);
        self.ctx.stroke_preserve()?;
        Ok(())
    }

    fn stroke_rect(&mut self, x: f64, y: f64, w: f64, h: f64) -> Result<(), DrawError> {
        let saved = self.ctx.copy_path()?;
        self.ctx.new_path();
        self.ctx.rectangle(x, y, w, h);
        self.apply_source(self.stroke_color);
        let result = self.ctx.stroke();
        self.ctx.append_path(&saved);
        result?;
        Ok(())
    }

    fn fill_text(&mut self, text: &str, x: f64, y: f64) -> Result<(), DrawError> {
        let saved = self.ctx.copy_path()?;
        self.ctx.save()?;

        let layout = pangocairo::functions::create_layout(self.ctx);
        let font_desc = self.font.descriptor.to_pango_description(self.font.size);
        layout.set_font_description(Some(&font_desc));
        layout.set_text(text);

        let (left, top) = self.text_origin(&layout, x, y);
        self.ctx.new_path();
        self.ctx.move_to(left, top);
        self.apply_source(self.fill_color);
        pangocairo::functions::show_layout(self.ctx, &layout);

        self.ctx.restore()?;
        self.ctx.new_path();
        self.ctx.append_path(&saved);
        Ok(())
    }
}

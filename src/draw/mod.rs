//! Rendering primitives for ERD shapes.
//!
//! This module defines:
//! - [`Surface`]: the canvas-like drawing target, with a Cairo backend ([`CairoSurface`])
//!   and an in-memory recorder ([`RecordingSurface`])
//! - The four ERD shape functions ([`draw_ellipse`], [`draw_rectangle`],
//!   [`draw_diamond`], [`draw_double_line_rect`])
//! - [`ErdShape`]: serializable shape descriptions dispatched to those functions
//! - [`Color`] and [`FontDescriptor`] used for strokes and labels

pub mod color;
pub mod erd;
pub mod font;
pub mod recording;
pub mod shape;
pub mod surface;

// Re-export commonly used types at module level
pub use color::Color;
pub use erd::{
    ShapeStyle, draw_diamond, draw_diamond_with_style, draw_double_line_rect,
    draw_double_line_rect_with_style, draw_ellipse, draw_ellipse_with_style, draw_rectangle,
    draw_rectangle_with_style,
};
pub use font::{Font, FontDescriptor};
pub use recording::{DrawOp, PathSegment, RecordingSurface};
pub use shape::{ErdShape, render_shapes};
pub use surface::{CairoSurface, DrawError, Surface, TextAlign, TextBaseline};

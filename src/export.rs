//! Rasterizes scenes with Cairo and writes them out as PNG.

use crate::config::Config;
use crate::draw::{CairoSurface, DrawError, render_shapes};
use crate::scene::Scene;
use anyhow::{Context, Result};
use log::{debug, info};
use std::fs::File;
use std::path::Path;

/// Paints the scene background and shapes onto `ctx`.
///
/// The scene's own background wins over the configured default unless it
/// does not parse, in which case the configured one is used. A fully
/// transparent background is skipped so the surface stays clear.
pub fn render_scene(ctx: &cairo::Context, scene: &Scene, config: &Config) -> Result<(), DrawError> {
    let background = match scene.background.as_ref() {
        Some(spec) if spec.is_valid() => spec,
        Some(spec) => {
            log::warn!(
                "Invalid scene background {:?}, using the configured one",
                spec
            );
            &config.output.background
        }
        None => &config.output.background,
    }
    .to_color();

    if background.a > 0.0 {
        ctx.set_source_rgba(background.r, background.g, background.b, background.a);
        ctx.paint()?;
    }

    let style = config.style.shape_style();
    let mut surface = CairoSurface::new(ctx).with_line_width(config.output.line_width);
    render_shapes(&mut surface, &scene.shapes, &style)?;

    debug!("Rendered {} shape(s)", scene.shapes.len());
    Ok(())
}

/// Renders the scene onto a new ARGB32 image surface sized by [`Scene::canvas_size`].
pub fn render_to_image(scene: &Scene, config: &Config) -> Result<cairo::ImageSurface> {
    let (width, height) = scene.canvas_size(config.output.padding);
    let surface = cairo::ImageSurface::create(cairo::Format::ARgb32, width as i32, height as i32)
        .context("Failed to create image surface")?;

    {
        let ctx = cairo::Context::new(&surface).context("Failed to create Cairo context")?;
        render_scene(&ctx, scene, config).context("Failed to render scene")?;
    }
    surface.flush();

    Ok(surface)
}

/// Renders the scene and writes it to `path` as PNG.
pub fn write_png(scene: &Scene, config: &Config, path: &Path) -> Result<()> {
    let surface = render_to_image(scene, config)?;

    let mut file = File::create(path)
        .with_context(|| format!("Failed to create output file {}", path.display()))?;
    surface
        .write_to_png(&mut file)
        .with_context(|| format!("Failed to write PNG to {}", path.display()))?;

    info!(
        "Wrote {}x{} diagram to {}",
        surface.width(),
        surface.height(),
        path.display()
    );
    Ok(())
}

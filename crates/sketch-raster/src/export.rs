//! Rasterize the drawing state and encode it for the host.
//!
//! Output is a 1:1 pixel-ratio PNG of the canvas (opaque white background,
//! strokes painted in z-order), wrapped as a `data:image/png;base64,…` URL —
//! the only image form the host bridge ever receives.

use crate::paint::{build_display_list, to_skia_color};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use sketch_core::model::SketchState;
use thiserror::Error;
use tiny_skia::{Paint, Pixmap, Transform};

/// Prefix of every exported data URL.
pub const DATA_URL_PREFIX: &str = "data:image/png;base64,";

#[derive(Debug, Error)]
pub enum ExportError {
    /// The configured canvas has no pixels to rasterize into.
    #[error("cannot rasterize a {width}x{height} surface")]
    EmptySurface { width: u32, height: u32 },

    #[error("png encoding failed: {0}")]
    PngEncode(String),
}

/// Rasterize the drawing state onto a fresh white pixmap.
pub fn render_pixmap(state: &SketchState, width: u32, height: u32) -> Result<Pixmap, ExportError> {
    let mut pixmap =
        Pixmap::new(width, height).ok_or(ExportError::EmptySurface { width, height })?;
    pixmap.fill(tiny_skia::Color::WHITE);

    for visual in build_display_list(state) {
        let Some(path) = visual.path else { continue };
        let mut paint = Paint::default();
        paint.set_color(to_skia_color(visual.color));
        paint.anti_alias = true;
        pixmap.stroke_path(&path, &paint, &visual.stroke, Transform::identity(), None);
    }

    Ok(pixmap)
}

/// Rasterize and PNG-encode the drawing state.
pub fn render_png(state: &SketchState, width: u32, height: u32) -> Result<Vec<u8>, ExportError> {
    let pixmap = render_pixmap(state, width, height)?;
    pixmap
        .encode_png()
        .map_err(|e| ExportError::PngEncode(e.to_string()))
}

/// Rasterize, PNG-encode, and wrap as a base64 data URL.
pub fn render_data_url(
    state: &SketchState,
    width: u32,
    height: u32,
) -> Result<String, ExportError> {
    let png = render_png(state, width, height)?;
    log::debug!(
        "exported {} stroke(s) as {}x{} png ({} bytes)",
        state.len(),
        width,
        height,
        png.len()
    );
    Ok(format!("{DATA_URL_PREFIX}{}", STANDARD.encode(png)))
}

pub mod decode;
pub mod encode;
pub mod skia_canvas;

pub use decode::{decode_image, decode_image_limited, to_working_raster, DecodedImage};
pub use encode::{encode_png, encode_rgba_png, DOWNLOAD_FILENAME};
pub use skia_canvas::SkiaCanvas;

use dot_render::{DotRenderer, RasterImage, RenderParams, RenderedRaster};
use serde::Deserialize;
use std::path::Path;

use crate::error::ImageError;

/// Drawing surface used for renders
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum CanvasBackend {
    /// Built-in pixel buffer with supersampled dot edges
    #[default]
    Pixel,
    /// tiny-skia pixmap
    Skia,
}

/// Render a working raster with `params` onto the chosen backend.
pub fn render_raster(
    working: &RasterImage,
    params: &RenderParams,
    backend: CanvasBackend,
) -> Result<RenderedRaster, ImageError> {
    let renderer = DotRenderer::with_params(*params);

    let rendered = match backend {
        CanvasBackend::Pixel => renderer.render(working)?,
        CanvasBackend::Skia => renderer.render_with(working, SkiaCanvas::new)?,
    };

    tracing::debug!(
        width = rendered.width(),
        height = rendered.height(),
        dots = rendered.dots().len(),
        ?backend,
        "Rendered dot pattern"
    );

    Ok(rendered)
}

/// Summary of a file-to-file render
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRender {
    pub width: u32,
    pub height: u32,
    pub dots: usize,
    pub bytes: usize,
}

/// Decode `input`, render it and write the PNG to `output`.
pub fn render_file(
    input: &Path,
    output: &Path,
    params: &RenderParams,
    backend: CanvasBackend,
) -> Result<FileRender, ImageError> {
    let bytes = std::fs::read(input)?;
    let decoded = decode_image(&bytes)?;
    let rendered = render_raster(&decoded.working, params, backend)?;
    let png = encode_png(&rendered)?;
    std::fs::write(output, &png)?;

    Ok(FileRender {
        width: rendered.width(),
        height: rendered.height(),
        dots: rendered.dots().len(),
        bytes: png.len(),
    })
}

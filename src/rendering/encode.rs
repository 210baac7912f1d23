use dot_render::RenderedRaster;
use std::io::Cursor;

use crate::error::ImageError;

/// Filename offered for downloads.
pub const DOWNLOAD_FILENAME: &str = "doticon.png";

/// Encode a rendered raster as an 8-bit RGB PNG.
///
/// Rendered output is fully opaque, so the alpha channel is dropped.
pub fn encode_png(raster: &RenderedRaster) -> Result<Vec<u8>, ImageError> {
    write_png(
        raster.width(),
        raster.height(),
        png::ColorType::Rgb,
        &raster.to_rgb(),
    )
}

/// Encode raw RGBA pixels as an 8-bit RGBA PNG.
pub fn encode_rgba_png(width: u32, height: u32, rgba: &[u8]) -> Result<Vec<u8>, ImageError> {
    write_png(width, height, png::ColorType::Rgba, rgba)
}

fn write_png(
    width: u32,
    height: u32,
    color_type: png::ColorType,
    data: &[u8],
) -> Result<Vec<u8>, ImageError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, width, height);
        encoder.set_color(color_type);
        encoder.set_depth(png::BitDepth::Eight);
        encoder.set_compression(png::Compression::Fast);
        let mut writer = encoder
            .write_header()
            .map_err(|e| ImageError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(data)
            .map_err(|e| ImageError::PngEncode(e.to_string()))?;
    }
    Ok(buf.into_inner())
}

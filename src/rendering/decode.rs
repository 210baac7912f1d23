use dot_render::preprocess::working_size;
use dot_render::RasterImage;
use image::{imageops::FilterType, DynamicImage};

use crate::error::ImageError;

/// An upload decoded and reduced to the size the renderer samples
pub struct DecodedImage {
    /// Width of the upload as sent
    pub width: u32,
    /// Height of the upload as sent
    pub height: u32,
    /// RGBA raster, longer side at most 640 pixels
    pub working: RasterImage,
}

/// Decode an uploaded image (PNG, JPEG, GIF or WebP) into its working raster.
///
/// The format is sniffed from the content, not from a filename or MIME
/// type. Animated GIFs contribute their first frame.
pub fn decode_image(bytes: &[u8]) -> Result<DecodedImage, ImageError> {
    if bytes.is_empty() {
        return Err(ImageError::Decode("empty upload".to_string()));
    }

    let decoded =
        image::load_from_memory(bytes).map_err(|e| ImageError::Decode(e.to_string()))?;
    let (width, height) = (decoded.width(), decoded.height());
    let working = to_working_raster(decoded)?;

    tracing::debug!(
        width,
        height,
        working_width = working.width(),
        working_height = working.height(),
        bytes = bytes.len(),
        "Decoded image"
    );

    Ok(DecodedImage {
        width,
        height,
        working,
    })
}

/// Decode with an upper bound on the encoded size.
pub fn decode_image_limited(bytes: &[u8], max_bytes: usize) -> Result<DecodedImage, ImageError> {
    if bytes.len() > max_bytes {
        return Err(ImageError::TooLarge {
            size: bytes.len(),
            max: max_bytes,
        });
    }
    decode_image(bytes)
}

/// Shrink `image` to its working size and convert it to RGBA.
///
/// Images already within the working size are only converted.
pub fn to_working_raster(image: DynamicImage) -> Result<RasterImage, ImageError> {
    let (width, height) = working_size(image.width(), image.height());
    let image = if (width, height) == (image.width(), image.height()) {
        image
    } else {
        image.resize_exact(width, height, FilterType::Triangle)
    };

    let rgba = image.into_rgba8();
    Ok(RasterImage::from_rgba(width, height, rgba.into_raw())?)
}

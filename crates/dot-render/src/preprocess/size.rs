//! Working-size computation.

/// Longest side of the working raster.
pub const MAX_DIMENSION: u32 = 640;

/// Dimensions of the working raster for a `width x height` input.
///
/// Inputs whose longer side exceeds [`MAX_DIMENSION`] are scaled so that
/// side becomes exactly [`MAX_DIMENSION`]; the shorter side follows the
/// aspect ratio, rounded to the nearest pixel and never below 1. Smaller
/// inputs keep their size.
///
/// ```
/// use dot_render::preprocess::working_size;
///
/// assert_eq!(working_size(1920, 1080), (640, 360));
/// assert_eq!(working_size(300, 200), (300, 200));
/// ```
pub fn working_size(width: u32, height: u32) -> (u32, u32) {
    if width.max(height) <= MAX_DIMENSION || width == 0 || height == 0 {
        return (width, height);
    }

    let aspect = width as f64 / height as f64;
    let max = MAX_DIMENSION as f64;
    if width > height {
        (MAX_DIMENSION, ((max / aspect).round() as u32).max(1))
    } else {
        (((max * aspect).round() as u32).max(1), MAX_DIMENSION)
    }
}

/// Whether a `width x height` raster can be sampled as it is.
#[inline]
pub fn is_working_size(width: u32, height: u32) -> bool {
    working_size(width, height) == (width, height)
}

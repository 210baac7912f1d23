//! Immutable RGBA input raster.

use crate::api::RenderError;

/// Bytes per RGBA pixel.
pub const CHANNELS: usize = 4;

/// An immutable grid of 8-bit RGBA pixels in row-major order.
///
/// Construction guarantees both dimensions are non-zero and the buffer
/// holds exactly `width * height * 4` bytes, so every later stage can
/// index pixels without re-checking.
///
/// # Example
///
/// ```
/// use dot_render::RasterImage;
///
/// let image = RasterImage::filled(3, 2, [10, 20, 30, 255]).unwrap();
/// assert_eq!(image.width(), 3);
/// assert_eq!(image.pixel(2, 1), [10, 20, 30, 255]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RasterImage {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl RasterImage {
    /// Wrap an RGBA buffer.
    ///
    /// Fails with [`RenderError::InvalidInput`] if either dimension is zero
    /// or the buffer length does not match the dimensions.
    pub fn from_rgba(width: u32, height: u32, data: Vec<u8>) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::invalid(format!(
                "raster has zero dimension ({}x{})",
                width, height
            )));
        }
        let expected = width as usize * height as usize * CHANNELS;
        if data.len() != expected {
            return Err(RenderError::invalid(format!(
                "pixel buffer holds {} bytes, expected {} for {}x{} RGBA",
                data.len(),
                expected,
                width,
                height
            )));
        }
        Ok(Self {
            width,
            height,
            data,
        })
    }

    /// Create a raster where every pixel has the same RGBA value.
    pub fn filled(width: u32, height: u32, rgba: [u8; 4]) -> Result<Self, RenderError> {
        let count = width as usize * height as usize;
        let data = rgba.iter().copied().cycle().take(count * CHANNELS).collect();
        Self::from_rgba(width, height, data)
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Raw RGBA bytes, row-major.
    #[inline]
    pub fn as_rgba(&self) -> &[u8] {
        &self.data
    }

    /// RGBA value at `(x, y)`.
    ///
    /// # Panics
    ///
    /// Panics if the coordinate lies outside the raster.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        assert!(x < self.width && y < self.height, "pixel ({x}, {y}) out of bounds");
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    pub fn into_rgba(self) -> Vec<u8> {
        self.data
    }
}

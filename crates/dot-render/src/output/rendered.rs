//! RenderedRaster and the dots it was drawn from.

use crate::color::Rgb;
use crate::raster::CHANNELS;

/// One drawn dot, in working-raster pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Dot {
    pub row: u32,
    pub col: u32,
    pub center_x: f64,
    pub center_y: f64,
    pub radius: f64,
    pub color: Rgb,
}

/// The output of a dot-pattern render.
///
/// Holds opaque RGBA pixels with the working raster's dimensions, plus the
/// [`Dot`]s painted into them in row-major cell order. Empty cells produce
/// no dot, so `dots().len()` can be smaller than the grid size.
///
/// # Example
///
/// ```
/// use dot_render::{DotRenderer, RasterImage};
///
/// let image = RasterImage::filled(32, 32, [0, 0, 0, 255]).unwrap();
/// let rendered = DotRenderer::new().render(&image).unwrap();
///
/// assert_eq!(rendered.width(), 32);
/// assert_eq!(rendered.dots().len(), 4);
/// assert_eq!(rendered.to_rgb().len(), 32 * 32 * 3);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct RenderedRaster {
    width: u32,
    height: u32,
    pixels: Vec<u8>,
    dots: Vec<Dot>,
}

impl RenderedRaster {
    /// # Panics (debug only)
    ///
    /// Debug-asserts that `pixels.len() == width * height * 4`.
    pub fn new(width: u32, height: u32, pixels: Vec<u8>, dots: Vec<Dot>) -> Self {
        debug_assert_eq!(
            pixels.len(),
            width as usize * height as usize * CHANNELS,
            "pixel buffer must match {}x{} RGBA",
            width,
            height,
        );
        Self {
            width,
            height,
            pixels,
            dots,
        }
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    /// Row-major RGBA bytes.
    #[inline]
    pub fn as_rgba(&self) -> &[u8] {
        &self.pixels
    }

    /// Dots in the order they were drawn.
    #[inline]
    pub fn dots(&self) -> &[Dot] {
        &self.dots
    }

    /// RGBA value at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = (y as usize * self.width as usize + x as usize) * CHANNELS;
        [
            self.pixels[i],
            self.pixels[i + 1],
            self.pixels[i + 2],
            self.pixels[i + 3],
        ]
    }

    /// Flat `[R, G, B, R, G, B, ...]` buffer with alpha dropped.
    ///
    /// The background fill makes every pixel opaque, so nothing is lost.
    pub fn to_rgb(&self) -> Vec<u8> {
        let mut rgb = Vec::with_capacity(self.width as usize * self.height as usize * 3);
        for px in self.pixels.chunks_exact(CHANNELS) {
            rgb.extend_from_slice(&px[..3]);
        }
        rgb
    }

    pub fn into_rgba(self) -> Vec<u8> {
        self.pixels
    }
}

//! Drawing surface abstraction and the in-memory implementation.
//!
//! The renderer only needs three drawing operations: fill a rectangle,
//! fill a circle, and read the pixels back. [`RasterCanvas`] captures that
//! so the same rendering code can target the in-memory [`PixelCanvas`] or
//! a host surface such as a tiny-skia pixmap.

use super::image::CHANNELS;
use crate::api::RenderError;
use crate::color::Rgb;

/// Samples per axis used to estimate circle coverage at edge pixels.
const SUPERSAMPLE: u32 = 4;

/// Minimal drawing capability the dot renderer draws through.
pub trait RasterCanvas {
    /// Surface width in pixels.
    fn width(&self) -> u32;

    /// Surface height in pixels.
    fn height(&self) -> u32;

    /// Paint an opaque axis-aligned rectangle, clipped to the surface.
    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb);

    /// Composite a filled circle over the current contents.
    ///
    /// Edge pixels may be blended with what is already there; pixels
    /// fully inside the circle take `color` exactly.
    fn draw_circle(&mut self, center_x: f64, center_y: f64, radius: f64, color: Rgb);

    /// Copy out the surface as row-major, non-premultiplied RGBA.
    fn read_pixels(&self) -> Vec<u8>;

    /// Consume the surface and return its pixels in the
    /// [`read_pixels`](Self::read_pixels) layout.
    fn into_pixels(self) -> Vec<u8>
    where
        Self: Sized,
    {
        self.read_pixels()
    }
}

/// RGBA pixel buffer implementing [`RasterCanvas`] in plain memory.
///
/// Starts fully transparent, like a freshly created browser canvas.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelCanvas {
    width: u32,
    height: u32,
    data: Vec<u8>,
}

impl PixelCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self, RenderError> {
        if width == 0 || height == 0 {
            return Err(RenderError::invalid(format!(
                "canvas has zero dimension ({}x{})",
                width, height
            )));
        }
        Ok(Self {
            width,
            height,
            data: vec![0; width as usize * height as usize * CHANNELS],
        })
    }

    /// RGBA value at `(x, y)`.
    #[inline]
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = self.offset(x, y);
        [
            self.data[i],
            self.data[i + 1],
            self.data[i + 2],
            self.data[i + 3],
        ]
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> usize {
        (y as usize * self.width as usize + x as usize) * CHANNELS
    }

    #[inline]
    fn put(&mut self, x: u32, y: u32, color: Rgb) {
        let i = self.offset(x, y);
        self.data[i] = color.r;
        self.data[i + 1] = color.g;
        self.data[i + 2] = color.b;
        self.data[i + 3] = 255;
    }

    /// Source-over blend of `color` with the given coverage.
    fn blend(&mut self, x: u32, y: u32, color: Rgb, coverage: f64) {
        let i = self.offset(x, y);
        let mix = |src: u8, dst: u8| -> u8 {
            (src as f64 * coverage + dst as f64 * (1.0 - coverage))
                .round()
                .clamp(0.0, 255.0) as u8
        };
        self.data[i] = mix(color.r, self.data[i]);
        self.data[i + 1] = mix(color.g, self.data[i + 1]);
        self.data[i + 2] = mix(color.b, self.data[i + 2]);
        self.data[i + 3] = mix(255, self.data[i + 3]);
    }
}

impl RasterCanvas for PixelCanvas {
    fn width(&self) -> u32 {
        self.width
    }

    fn height(&self) -> u32 {
        self.height
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb) {
        let x_end = x.saturating_add(width).min(self.width);
        let y_end = y.saturating_add(height).min(self.height);
        for py in y..y_end {
            for px in x..x_end {
                self.put(px, py, color);
            }
        }
    }

    fn draw_circle(&mut self, center_x: f64, center_y: f64, radius: f64, color: Rgb) {
        if !(radius > 0.0) || !center_x.is_finite() || !center_y.is_finite() {
            return;
        }

        let x_start = (center_x - radius).floor().max(0.0) as u32;
        let y_start = (center_y - radius).floor().max(0.0) as u32;
        let x_end = ((center_x + radius).ceil().max(0.0) as u32).min(self.width);
        let y_end = ((center_y + radius).ceil().max(0.0) as u32).min(self.height);

        for py in y_start..y_end {
            for px in x_start..x_end {
                let coverage = pixel_coverage(px, py, center_x, center_y, radius);
                if coverage >= 1.0 {
                    self.put(px, py, color);
                } else if coverage > 0.0 {
                    self.blend(px, py, color, coverage);
                }
            }
        }
    }

    fn read_pixels(&self) -> Vec<u8> {
        self.data.clone()
    }

    fn into_pixels(self) -> Vec<u8> {
        self.data
    }
}

/// Fraction of the unit pixel at `(px, py)` covered by the circle.
///
/// Pixels whose farthest corner is inside the circle are fully covered and
/// pixels whose nearest point is outside are empty; only the ring of edge
/// pixels is supersampled.
pub(crate) fn pixel_coverage(px: u32, py: u32, cx: f64, cy: f64, radius: f64) -> f64 {
    let (x0, y0) = (px as f64, py as f64);
    let (x1, y1) = (x0 + 1.0, y0 + 1.0);
    let r2 = radius * radius;

    let far_x = (x0 - cx).abs().max((x1 - cx).abs());
    let far_y = (y0 - cy).abs().max((y1 - cy).abs());
    if far_x * far_x + far_y * far_y <= r2 {
        return 1.0;
    }

    let near_x = cx.clamp(x0, x1) - cx;
    let near_y = cy.clamp(y0, y1) - cy;
    if near_x * near_x + near_y * near_y > r2 {
        return 0.0;
    }

    let step = 1.0 / SUPERSAMPLE as f64;
    let mut inside = 0u32;
    for sy in 0..SUPERSAMPLE {
        let dy = y0 + (sy as f64 + 0.5) * step - cy;
        for sx in 0..SUPERSAMPLE {
            let dx = x0 + (sx as f64 + 0.5) * step - cx;
            if dx * dx + dy * dy <= r2 {
                inside += 1;
            }
        }
    }
    inside as f64 / (SUPERSAMPLE * SUPERSAMPLE) as f64
}

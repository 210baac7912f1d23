use dot_render::{RasterCanvas, Rgb};
use tiny_skia::{FillRule, Paint, PathBuilder, Pixmap, Rect, Transform};

use crate::error::ImageError;

/// [`RasterCanvas`] backed by a tiny-skia pixmap.
///
/// Circles go through tiny-skia's anti-aliased path filler instead of the
/// supersampled coverage estimate of the in-memory canvas, so edge pixels
/// may differ slightly between the two.
pub struct SkiaCanvas {
    pixmap: Pixmap,
}

impl SkiaCanvas {
    pub fn new(width: u32, height: u32) -> Result<Self, ImageError> {
        let pixmap = Pixmap::new(width, height).ok_or(ImageError::PixmapAllocation)?;
        Ok(Self { pixmap })
    }

    pub fn pixmap(&self) -> &Pixmap {
        &self.pixmap
    }
}

fn solid_paint(color: Rgb, anti_alias: bool) -> Paint<'static> {
    let mut paint = Paint::default();
    paint.set_color_rgba8(color.r, color.g, color.b, 255);
    paint.anti_alias = anti_alias;
    paint
}

impl RasterCanvas for SkiaCanvas {
    fn width(&self) -> u32 {
        self.pixmap.width()
    }

    fn height(&self) -> u32 {
        self.pixmap.height()
    }

    fn fill_rect(&mut self, x: u32, y: u32, width: u32, height: u32, color: Rgb) {
        let Some(rect) = Rect::from_xywh(x as f32, y as f32, width as f32, height as f32) else {
            return;
        };
        self.pixmap.fill_rect(
            rect,
            &solid_paint(color, false),
            Transform::identity(),
            None,
        );
    }

    fn draw_circle(&mut self, center_x: f64, center_y: f64, radius: f64, color: Rgb) {
        let Some(path) = PathBuilder::from_circle(center_x as f32, center_y as f32, radius as f32)
        else {
            return;
        };
        self.pixmap.fill_path(
            &path,
            &solid_paint(color, true),
            FillRule::Winding,
            Transform::identity(),
            None,
        );
    }

    fn read_pixels(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixmap.data().len());
        for pixel in self.pixmap.pixels() {
            let c = pixel.demultiply();
            out.extend_from_slice(&[c.red(), c.green(), c.blue(), c.alpha()]);
        }
        out
    }
}

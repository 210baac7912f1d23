//! Per-cell color and brightness statistics.

use super::grid::Cell;
use crate::color::{Rgb, LUMA_WEIGHTS};
use crate::raster::{RasterImage, CHANNELS};

/// Mean color and brightness of the pixels in one cell.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellStats {
    /// Arithmetic mean of R, G, B over the cell (alpha ignored).
    pub mean: [f64; 3],
    /// Mean luma normalised to 0.0..=1.0.
    pub brightness: f64,
    /// Number of pixels sampled.
    pub count: usize,
}

impl CellStats {
    /// Mean color rounded to 8-bit channels.
    #[inline]
    pub fn mean_color(&self) -> Rgb {
        Rgb::from_mean(self.mean[0], self.mean[1], self.mean[2])
    }
}

/// Gather statistics for `cell`, or `None` if it covers no pixels.
pub fn sample_cell(image: &RasterImage, cell: &Cell) -> Option<CellStats> {
    if cell.is_empty() {
        return None;
    }

    let data = image.as_rgba();
    let stride = image.width() as usize * CHANNELS;
    let mut totals = [0.0f64; 3];
    let mut luma_total = 0.0f64;
    let mut count = 0usize;

    for y in cell.y_start..cell.y_end.min(image.height()) {
        let row = y as usize * stride;
        for x in cell.x_start..cell.x_end.min(image.width()) {
            let i = row + x as usize * CHANNELS;
            let (r, g, b) = (data[i] as f64, data[i + 1] as f64, data[i + 2] as f64);
            totals[0] += r;
            totals[1] += g;
            totals[2] += b;
            luma_total += LUMA_WEIGHTS[0] * r + LUMA_WEIGHTS[1] * g + LUMA_WEIGHTS[2] * b;
            count += 1;
        }
    }

    if count == 0 {
        return None;
    }

    let n = count as f64;
    Some(CellStats {
        mean: [totals[0] / n, totals[1] / n, totals[2] / n],
        brightness: (luma_total / (n * 255.0)).clamp(0.0, 1.0),
        count,
    })
}

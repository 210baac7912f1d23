//! Partition of the working raster into dot cells.

/// One rectangular region of the working raster, mapped to one dot.
///
/// Pixel ranges are half-open: `x_start..x_end`, `y_start..y_end`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub row: u32,
    pub col: u32,
    pub x_start: u32,
    pub x_end: u32,
    pub y_start: u32,
    pub y_end: u32,
}

impl Cell {
    #[inline]
    pub fn width(&self) -> u32 {
        self.x_end.saturating_sub(self.x_start)
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.y_end.saturating_sub(self.y_start)
    }

    /// True when the cell covers no pixels.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width() == 0 || self.height() == 0
    }

    /// Geometric centre of the pixel range.
    #[inline]
    pub fn center(&self) -> (f64, f64) {
        (
            self.x_start as f64 + self.width() as f64 / 2.0,
            self.y_start as f64 + self.height() as f64 / 2.0,
        )
    }
}

/// Column/row layout of dot cells over a `width x height` raster.
///
/// The number of columns is how many `2 * dot_radius + spacing` steps fit
/// across the raster (at least one); cells then share the width evenly, so
/// cell sizes are fractional and each cell's pixel range is derived by
/// flooring its edges.
///
/// ```
/// use dot_render::layout::CellGrid;
///
/// let grid = CellGrid::new(100, 100, 6.0, 4.0);
/// assert_eq!((grid.columns(), grid.rows()), (6, 6));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CellGrid {
    width: u32,
    height: u32,
    columns: u32,
    rows: u32,
    cell_width: f64,
    cell_height: f64,
}

impl CellGrid {
    pub fn new(width: u32, height: u32, dot_radius: f64, spacing: f64) -> Self {
        let step = Self::min_step(dot_radius, spacing);
        let columns = ((width as f64 / step).floor() as u32).max(1);
        let rows = ((height as f64 / step).floor() as u32).max(1);
        Self {
            width,
            height,
            columns,
            rows,
            cell_width: width as f64 / columns as f64,
            cell_height: height as f64 / rows as f64,
        }
    }

    /// Smallest distance between neighbouring dot centres, at least 1.
    #[inline]
    pub fn min_step(dot_radius: f64, spacing: f64) -> f64 {
        (dot_radius * 2.0 + spacing).max(1.0)
    }

    #[inline]
    pub fn columns(&self) -> u32 {
        self.columns
    }

    #[inline]
    pub fn rows(&self) -> u32 {
        self.rows
    }

    #[inline]
    pub fn cell_width(&self) -> f64 {
        self.cell_width
    }

    #[inline]
    pub fn cell_height(&self) -> f64 {
        self.cell_height
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.columns as usize * self.rows as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Pixel range of the cell at `(row, col)`.
    pub fn cell(&self, row: u32, col: u32) -> Cell {
        let (x_start, x_end) = span(col, self.columns, self.cell_width, self.width);
        let (y_start, y_end) = span(row, self.rows, self.cell_height, self.height);
        Cell {
            row,
            col,
            x_start,
            x_end,
            y_start,
            y_end,
        }
    }

    /// All cells in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = Cell> + '_ {
        (0..self.rows).flat_map(move |row| (0..self.columns).map(move |col| self.cell(row, col)))
    }
}

/// Half-open pixel range of cell `index` out of `count` along one axis.
///
/// The last cell always ends at `limit`, so float error in
/// `count * size` cannot leave an uncovered final pixel.
fn span(index: u32, count: u32, size: f64, limit: u32) -> (u32, u32) {
    let start = ((index as f64 * size).floor() as u32).min(limit);
    let end = if index + 1 >= count {
        limit
    } else {
        (((index + 1) as f64 * size).floor() as u32).min(limit)
    };
    (start, end)
}

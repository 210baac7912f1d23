//! Cell layout and sampling.
//!
//! [`CellGrid`] splits the working raster into `columns x rows` cells, and
//! [`sample_cell`] reduces each cell to the mean color and brightness that
//! decide its dot.

mod grid;
mod sample;

pub use grid::{Cell, CellGrid};
pub use sample::{sample_cell, CellStats};

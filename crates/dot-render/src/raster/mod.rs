//! Raster input and drawing surfaces.
//!
//! - [`RasterImage`]: the immutable RGBA image the renderer reads
//! - [`RasterCanvas`]: the drawing capability the renderer writes through
//! - [`PixelCanvas`]: an in-memory [`RasterCanvas`]

mod canvas;
mod image;

pub use canvas::{PixelCanvas, RasterCanvas};
pub use image::{RasterImage, CHANNELS};

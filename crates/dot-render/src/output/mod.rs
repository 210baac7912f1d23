//! Output types for the rendering pipeline.
//!
//! [`RenderedRaster`] carries the finished pixels together with the list
//! of [`Dot`]s that produced them, so callers can encode the image and
//! still inspect the geometry.

mod rendered;

pub use rendered::{Dot, RenderedRaster};

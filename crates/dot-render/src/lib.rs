//! dot-render: dot-pattern rendering of raster images
//!
//! This library turns an RGBA raster into a grid of filled circles whose
//! size follows the brightness of the image underneath: dark regions get
//! large dots, light regions small ones.
//!
//! # Quick Start
//!
//! The [`DotRenderer`] builder is the primary entry point:
//!
//! ```
//! use dot_render::{DotRenderer, RasterImage, Rgb};
//!
//! let image = RasterImage::filled(100, 100, [0, 0, 0, 255]).unwrap();
//! let rendered = DotRenderer::new()
//!     .dot_radius(6.0)
//!     .spacing(4.0)
//!     .dot_color(Rgb::WHITE)
//!     .render(&image)
//!     .unwrap();
//!
//! assert_eq!(rendered.dots().len(), 36);
//! assert!(rendered.dots().iter().all(|dot| dot.radius == 6.0));
//! ```
//!
//! # Pipeline
//!
//! ```text
//! RasterImage (any size)
//!     |
//!     v
//! working_size                  (longer side capped at 640; the caller
//!     |                          resamples, e.g. with an image library)
//!     v
//! CellGrid                      (columns = floor(w / (2r + spacing)), >= 1)
//!     |
//!     v
//! fill background
//!     |
//!     v
//! for each cell:
//!     sample_cell               (mean RGB, mean Rec. 709 luma / 255)
//!     radius = clamp(r * (1 - brightness), max(0.5, 0.1r), r)
//!     draw_circle at the cell centre
//!     |
//!     v
//! RenderedRaster (RGBA + dots)
//! ```
//!
//! Dots may spill past their cell when the radius exceeds half the cell
//! size; neighbouring dots then overlap and the later one is drawn on top.
//!
//! # Drawing Surfaces
//!
//! Drawing goes through the [`RasterCanvas`] trait. [`DotRenderer::render`]
//! uses the in-memory [`PixelCanvas`]; [`DotRenderer::render_with`] takes a
//! factory for any other implementation.

pub mod api;
pub mod color;
pub mod layout;
pub mod output;
pub mod preprocess;
pub mod raster;

#[cfg(test)]
mod domain_tests;

pub use api::{render, DotRenderer, RenderError, RenderParams};
pub use color::{ColorErrorKind, ParseColorError, Rgb};
pub use layout::{Cell, CellGrid};
pub use output::{Dot, RenderedRaster};
pub use preprocess::MAX_DIMENSION;
pub use raster::{PixelCanvas, RasterCanvas, RasterImage};

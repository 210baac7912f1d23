//! DotRenderer builder -- the primary entry point for the crate.
//!
//! [`DotRenderer`] wraps the render pipeline (cell layout, sampling,
//! drawing) behind a fluent builder over [`RenderParams`].

use super::error::RenderError;
use super::params::RenderParams;
use crate::color::Rgb;
use crate::layout::{sample_cell, CellGrid};
use crate::output::{Dot, RenderedRaster};
use crate::preprocess::{is_working_size, working_size};
use crate::raster::{PixelCanvas, RasterCanvas, RasterImage};

/// Dot-pattern renderer.
///
/// # Design
///
/// - Configuration methods consume and return `self` (builder pattern)
/// - [`render()`](Self::render) takes `&self`, so one renderer can be
///   reused across images
/// - Rendering is a pure function of the image and the parameters
///
/// # Example
///
/// ```
/// use dot_render::{DotRenderer, RasterImage, Rgb};
///
/// let image = RasterImage::filled(64, 48, [40, 40, 40, 255]).unwrap();
/// let rendered = DotRenderer::new()
///     .dot_radius(4.0)
///     .spacing(2.0)
///     .background_color(Rgb::WHITE)
///     .render(&image)
///     .unwrap();
///
/// assert_eq!((rendered.width(), rendered.height()), (64, 48));
/// assert_eq!(rendered.dots().len(), 6 * 4);
/// ```
#[derive(Debug, Clone, Default)]
pub struct DotRenderer {
    params: RenderParams,
}

impl DotRenderer {
    /// Renderer with the default parameters (radius 6, spacing 4,
    /// `#9fe4d0` dots on `#0f172a`).
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_params(params: RenderParams) -> Self {
        Self { params }
    }

    /// Maximum dot radius in pixels.
    #[inline]
    pub fn dot_radius(mut self, radius: f64) -> Self {
        self.params.dot_radius = radius;
        self
    }

    /// Gap between neighbouring dots in pixels.
    #[inline]
    pub fn spacing(mut self, spacing: f64) -> Self {
        self.params.spacing = spacing;
        self
    }

    /// Color dots with their cell's mean color.
    #[inline]
    pub fn use_source_color(mut self, enabled: bool) -> Self {
        self.params.use_source_color = enabled;
        self
    }

    #[inline]
    pub fn dot_color(mut self, color: Rgb) -> Self {
        self.params.dot_color = color;
        self
    }

    #[inline]
    pub fn background_color(mut self, color: Rgb) -> Self {
        self.params.background_color = color;
        self
    }

    #[inline]
    pub fn params(&self) -> &RenderParams {
        &self.params
    }

    /// Render `image` into a freshly allocated [`RenderedRaster`].
    ///
    /// `image` is the working raster: its longer side must already be at
    /// most [`MAX_DIMENSION`](crate::MAX_DIMENSION) pixels (see
    /// [`working_size`]).
    pub fn render(&self, image: &RasterImage) -> Result<RenderedRaster, RenderError> {
        self.render_with(image, PixelCanvas::new)
    }

    /// Render `image` onto a canvas created by `new_canvas`.
    ///
    /// `new_canvas` receives the working raster's width and height. Use
    /// this to draw on a host surface instead of the built-in
    /// [`PixelCanvas`]; the output is read back through
    /// [`RasterCanvas::into_pixels`].
    pub fn render_with<C, E, F>(
        &self,
        image: &RasterImage,
        new_canvas: F,
    ) -> Result<RenderedRaster, E>
    where
        C: RasterCanvas,
        F: FnOnce(u32, u32) -> Result<C, E>,
        E: From<RenderError>,
    {
        self.check(image)?;

        let (width, height) = (image.width(), image.height());
        let mut canvas = new_canvas(width, height)?;
        let dots = self.render_onto(image, &mut canvas)?;
        Ok(RenderedRaster::new(width, height, canvas.into_pixels(), dots))
    }

    /// Draw the dot pattern for `working` onto `canvas`, returning the dots
    /// drawn.
    ///
    /// The canvas must have the same dimensions as `working`.
    pub fn render_onto<C: RasterCanvas>(
        &self,
        working: &RasterImage,
        canvas: &mut C,
    ) -> Result<Vec<Dot>, RenderError> {
        self.check(working)?;
        if canvas.width() != working.width() || canvas.height() != working.height() {
            return Err(RenderError::invalid(format!(
                "canvas is {}x{} but working raster is {}x{}",
                canvas.width(),
                canvas.height(),
                working.width(),
                working.height()
            )));
        }

        let params = &self.params;
        let grid = CellGrid::new(
            working.width(),
            working.height(),
            params.dot_radius,
            params.spacing,
        );

        canvas.fill_rect(
            0,
            0,
            working.width(),
            working.height(),
            params.background_color,
        );

        let mut dots = Vec::with_capacity(grid.len());
        for cell in grid.cells() {
            let Some(stats) = sample_cell(working, &cell) else {
                continue;
            };
            let (center_x, center_y) = cell.center();
            let radius = params.radius_for(stats.brightness);
            let color = if params.use_source_color {
                stats.mean_color()
            } else {
                params.dot_color
            };

            canvas.draw_circle(center_x, center_y, radius, color);
            dots.push(Dot {
                row: cell.row,
                col: cell.col,
                center_x,
                center_y,
                radius,
                color,
            });
        }

        Ok(dots)
    }

    fn check(&self, working: &RasterImage) -> Result<(), RenderError> {
        self.params.validate()?;
        if !is_working_size(working.width(), working.height()) {
            let (width, height) = working_size(working.width(), working.height());
            return Err(RenderError::invalid(format!(
                "raster is {}x{}; resample it to {}x{} before rendering",
                working.width(),
                working.height(),
                width,
                height
            )));
        }
        Ok(())
    }
}

/// Render `image` with `params`.
///
/// Shorthand for `DotRenderer::with_params(*params).render(image)`.
pub fn render(image: &RasterImage, params: &RenderParams) -> Result<RenderedRaster, RenderError> {
    DotRenderer::with_params(*params).render(image)
}

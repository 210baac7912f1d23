//! Error type for the dot-render public API.

use std::fmt;

/// Error returned by the renderer and by raster construction.
///
/// Rendering is a pure transform, so the only failure is input the
/// algorithm cannot work with: an empty raster, a pixel buffer whose
/// length does not match its dimensions, or out-of-range parameters.
///
/// # Example
///
/// ```
/// use dot_render::{RasterImage, RenderError};
///
/// let err = RasterImage::from_rgba(0, 10, Vec::new()).unwrap_err();
/// assert!(matches!(err, RenderError::InvalidInput(_)));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum RenderError {
    /// The raster or the parameters cannot be rendered
    InvalidInput(String),
}

impl RenderError {
    pub(crate) fn invalid(reason: impl Into<String>) -> Self {
        RenderError::InvalidInput(reason.into())
    }
}

impl fmt::Display for RenderError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RenderError::InvalidInput(reason) => write!(f, "invalid input: {}", reason),
        }
    }
}

impl std::error::Error for RenderError {}

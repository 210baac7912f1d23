//! Render parameters and the radius policy they imply.

use super::error::RenderError;
use crate::color::Rgb;

/// Default maximum dot radius in pixels.
pub const DEFAULT_DOT_RADIUS: f64 = 6.0;
/// Default gap between neighbouring dots in pixels.
pub const DEFAULT_SPACING: f64 = 4.0;
/// Default flat dot color (`#9fe4d0`).
pub const DEFAULT_DOT_COLOR: Rgb = Rgb::new(0x9f, 0xe4, 0xd0);
/// Default background color (`#0f172a`).
pub const DEFAULT_BACKGROUND_COLOR: Rgb = Rgb::new(0x0f, 0x17, 0x2a);

/// Parameters of one dot-pattern render.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RenderParams {
    /// Maximum dot radius in pixels (drawn for fully dark cells).
    pub dot_radius: f64,
    /// Extra space between dots in pixels.
    pub spacing: f64,
    /// Paint each dot with its cell's mean color instead of `dot_color`.
    pub use_source_color: bool,
    pub dot_color: Rgb,
    pub background_color: Rgb,
}

impl Default for RenderParams {
    fn default() -> Self {
        Self {
            dot_radius: DEFAULT_DOT_RADIUS,
            spacing: DEFAULT_SPACING,
            use_source_color: false,
            dot_color: DEFAULT_DOT_COLOR,
            background_color: DEFAULT_BACKGROUND_COLOR,
        }
    }
}

impl RenderParams {
    /// Check the numeric parameters.
    ///
    /// `dot_radius` must be finite and positive, `spacing` finite and
    /// non-negative.
    pub fn validate(&self) -> Result<(), RenderError> {
        if !self.dot_radius.is_finite() || self.dot_radius <= 0.0 {
            return Err(RenderError::invalid(format!(
                "dot radius must be a positive number, got {}",
                self.dot_radius
            )));
        }
        if !self.spacing.is_finite() || self.spacing < 0.0 {
            return Err(RenderError::invalid(format!(
                "spacing must be a non-negative number, got {}",
                self.spacing
            )));
        }
        Ok(())
    }

    /// Smallest radius any dot is drawn with: `max(0.5, dot_radius * 0.1)`.
    #[inline]
    pub fn min_radius(&self) -> f64 {
        (self.dot_radius * 0.1).max(0.5)
    }

    /// Radius for a cell of the given brightness (0.0 dark ..= 1.0 light).
    ///
    /// Darker cells get larger dots. The result is clamped to
    /// `min_radius()..=dot_radius`.
    ///
    /// ```
    /// use dot_render::RenderParams;
    ///
    /// let params = RenderParams::default();
    /// assert_eq!(params.radius_for(0.0), 6.0);
    /// assert_eq!(params.radius_for(0.5), 3.0);
    /// assert!((params.radius_for(1.0) - 0.6).abs() < 1e-12);
    /// ```
    #[inline]
    pub fn radius_for(&self, brightness: f64) -> f64 {
        let raw = self.dot_radius * (1.0 - brightness);
        // Upper bound wins when dot_radius < 0.5 puts min_radius above it.
        raw.max(self.min_radius()).min(self.dot_radius)
    }
}

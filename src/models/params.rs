use dot_render::{RenderParams, Rgb};
use serde::Deserialize;
use utoipa::IntoParams;

use super::config::RenderDefaults;

/// Slider bounds of the browser page; query values are clamped to them.
pub const DOT_RADIUS_RANGE: (f64, f64) = (1.0, 40.0);
pub const SPACING_RANGE: (f64, f64) = (0.0, 40.0);

/// Render parameters as they arrive in a query string
///
/// Every field is kept as raw text so that malformed values fall back to
/// the configured default instead of failing the request.
#[derive(Debug, Default, Clone, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ParamQuery {
    /// Maximum dot radius in pixels (1-40, default 6)
    pub dot_radius: Option<String>,
    /// Gap between dots in pixels (0-40, default 4)
    pub spacing: Option<String>,
    /// Paint dots with the colour of the image underneath
    pub use_source_color: Option<String>,
    /// Flat dot colour as hex, e.g. `#9fe4d0`
    pub dot_color: Option<String>,
    /// Background colour as hex, e.g. `#0f172a`
    pub background_color: Option<String>,
}

impl ParamQuery {
    /// Resolve against configured defaults
    pub fn resolve(&self, defaults: &RenderDefaults) -> RenderParams {
        let base = defaults.to_params();

        RenderParams {
            dot_radius: parse_dot_radius(self.dot_radius.as_deref())
                .unwrap_or(base.dot_radius),
            spacing: parse_spacing(self.spacing.as_deref()).unwrap_or(base.spacing),
            use_source_color: self
                .use_source_color
                .as_deref()
                .map(parse_flag)
                .unwrap_or(base.use_source_color),
            dot_color: parse_color(self.dot_color.as_deref()).unwrap_or(base.dot_color),
            background_color: parse_color(self.background_color.as_deref())
                .unwrap_or(base.background_color),
        }
    }
}

impl RenderDefaults {
    /// Configured defaults as render parameters
    ///
    /// Bad values in the config file fall back to the built-in defaults.
    pub fn to_params(&self) -> RenderParams {
        let builtin = RenderParams::default();

        RenderParams {
            dot_radius: clamp_dot_radius(self.dot_radius).unwrap_or(builtin.dot_radius),
            spacing: clamp_spacing(self.spacing).unwrap_or(builtin.spacing),
            use_source_color: self.use_source_color,
            dot_color: parse_color(Some(&self.dot_color)).unwrap_or(builtin.dot_color),
            background_color: parse_color(Some(&self.background_color))
                .unwrap_or(builtin.background_color),
        }
    }
}

fn parse_number(raw: Option<&str>) -> Option<f64> {
    raw?.trim().parse::<f64>().ok()
}

/// Zero counts as "not set", like an empty slider value.
fn parse_dot_radius(raw: Option<&str>) -> Option<f64> {
    clamp_dot_radius(parse_number(raw)?)
}

fn clamp_dot_radius(value: f64) -> Option<f64> {
    if value.is_nan() || value == 0.0 {
        return None;
    }
    Some(value.clamp(DOT_RADIUS_RANGE.0, DOT_RADIUS_RANGE.1))
}

/// Zero is a valid spacing (dots touching) and is kept.
fn parse_spacing(raw: Option<&str>) -> Option<f64> {
    clamp_spacing(parse_number(raw)?)
}

fn clamp_spacing(value: f64) -> Option<f64> {
    if value.is_nan() {
        return None;
    }
    Some(value.clamp(SPACING_RANGE.0, SPACING_RANGE.1))
}

fn parse_color(raw: Option<&str>) -> Option<Rgb> {
    raw?.parse().ok()
}

/// HTML checkboxes submit "on"; everything else is read literally.
fn parse_flag(raw: &str) -> bool {
    matches!(
        raw.trim().to_ascii_lowercase().as_str(),
        "1" | "true" | "on" | "yes"
    )
}

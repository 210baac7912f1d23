pub mod config;
pub mod params;

pub use config::{AppConfig, RenderDefaults};
pub use params::{ParamQuery, DOT_RADIUS_RANGE, SPACING_RANGE};

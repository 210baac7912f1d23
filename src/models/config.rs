use serde::Deserialize;
use std::path::Path;

use crate::rendering::CanvasBackend;

/// Application configuration loaded from config.yaml
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct AppConfig {
    /// Render parameters used when a request leaves them out
    #[serde(default)]
    pub defaults: RenderDefaults,

    /// Largest accepted upload body in bytes
    #[serde(default = "default_max_upload_bytes")]
    pub max_upload_bytes: usize,

    /// Idle time after which an uploaded image is released
    #[serde(default = "default_session_ttl_secs")]
    pub session_ttl_secs: u64,

    /// Number of uploaded images kept at once
    #[serde(default = "default_max_sessions")]
    pub max_sessions: usize,

    /// Drawing surface for renders
    #[serde(default)]
    pub canvas: CanvasBackend,
}

fn default_max_upload_bytes() -> usize {
    20 * 1024 * 1024
}

fn default_session_ttl_secs() -> u64 {
    1800 // 30 minutes
}

fn default_max_sessions() -> usize {
    64
}

/// Default render parameters
///
/// Colours are kept as strings so a typo in the config file falls back to
/// the built-in colour instead of rejecting the whole file.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct RenderDefaults {
    #[serde(default = "default_dot_radius")]
    pub dot_radius: f64,

    #[serde(default = "default_spacing")]
    pub spacing: f64,

    #[serde(default)]
    pub use_source_color: bool,

    #[serde(default = "default_dot_color")]
    pub dot_color: String,

    #[serde(default = "default_background_color")]
    pub background_color: String,
}

fn default_dot_radius() -> f64 {
    dot_render::api::DEFAULT_DOT_RADIUS
}

fn default_spacing() -> f64 {
    dot_render::api::DEFAULT_SPACING
}

fn default_dot_color() -> String {
    dot_render::api::DEFAULT_DOT_COLOR.to_hex()
}

fn default_background_color() -> String {
    dot_render::api::DEFAULT_BACKGROUND_COLOR.to_hex()
}

impl Default for RenderDefaults {
    fn default() -> Self {
        Self {
            dot_radius: default_dot_radius(),
            spacing: default_spacing(),
            use_source_color: false,
            dot_color: default_dot_color(),
            background_color: default_background_color(),
        }
    }
}

impl AppConfig {
    /// Load configuration from a YAML file, falling back to defaults
    ///
    /// A missing path means "no config file" and is not worth a warning.
    pub fn load(path: Option<&Path>) -> Self {
        let Some(path) = path else {
            tracing::debug!("No config file given, using defaults");
            return Self::default();
        };

        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml(&content) {
                Ok(config) => {
                    tracing::info!(
                        path = %path.display(),
                        max_upload_bytes = config.max_upload_bytes,
                        max_sessions = config.max_sessions,
                        "Loaded configuration"
                    );
                    config
                }
                Err(e) => {
                    tracing::warn!(%e, path = %path.display(), "Failed to parse config, using defaults");
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!(%e, path = %path.display(), "Failed to read config, using defaults");
                Self::default()
            }
        }
    }

    pub fn from_yaml(content: &str) -> Result<Self, serde_yaml::Error> {
        // An empty document deserializes as unit, not as an empty mapping
        if content.trim().is_empty() {
            return Ok(Self::default());
        }
        serde_yaml::from_str(content)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: RenderDefaults::default(),
            max_upload_bytes: default_max_upload_bytes(),
            session_ttl_secs: default_session_ttl_secs(),
            max_sessions: default_max_sessions(),
            canvas: CanvasBackend::default(),
        }
    }
}

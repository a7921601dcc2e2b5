//! Engine configuration
//!
//! Tuning values for the built-in systems, loadable from a TOML file by the
//! application shell. Every field has a default so a partial file (or none at
//! all) still yields a working engine.

use serde::{Deserialize, Serialize};
use std::path::Path;

/// Errors raised while loading a configuration file
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The file could not be read
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not valid TOML or has wrong field types
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Top-level engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    /// Camera control tuning
    pub camera: CameraConfig,
    /// UI feedback tuning
    pub ui: UiConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path.as_ref())?;
        let config = toml::from_str(&text)?;
        log::info!("loaded engine config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }
}

/// Camera control tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CameraConfig {
    /// Fly speed in world units per second
    pub movement_speed: f32,
    /// Degrees of yaw/pitch per pixel of cursor movement
    pub mouse_sensitivity: f32,
    /// Pitch is clamped to [-limit, +limit] degrees
    pub pitch_limit: f32,
    /// Lower bound of the zoomable field of view, degrees
    pub min_fov: f32,
    /// Upper bound of the zoomable field of view, degrees
    pub max_fov: f32,
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            movement_speed: 2.5,
            mouse_sensitivity: 0.1,
            pitch_limit: 89.0,
            min_fov: 1.0,
            max_fov: 45.0,
        }
    }
}

/// UI feedback tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Exponential approach rate for hover color/scale animation, 1/seconds
    pub animation_speed: f32,
    /// Scale a hovered element grows toward
    pub hover_scale: f32,
}

impl Default for UiConfig {
    fn default() -> Self {
        Self {
            animation_speed: 5.0,
            hover_scale: 1.1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let config = EngineConfig::default();
        assert_eq!(config.camera.movement_speed, 2.5);
        assert_eq!(config.camera.mouse_sensitivity, 0.1);
        assert_eq!(config.camera.pitch_limit, 89.0);
        assert_eq!(config.ui.animation_speed, 5.0);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [camera]
            movement_speed = 5.0
            "#,
        )
        .unwrap();
        assert_eq!(config.camera.movement_speed, 5.0);
        assert_eq!(config.camera.mouse_sensitivity, 0.1);
        assert_eq!(config.ui.hover_scale, 1.1);
    }

    #[test]
    fn test_malformed_toml_is_an_error() {
        assert!(EngineConfig::from_toml_str("camera = 12").is_err());
    }
}

//! Core engine services

pub mod config;

pub use config::{CameraConfig, ConfigError, EngineConfig, UiConfig};

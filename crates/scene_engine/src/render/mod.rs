//! Rendering boundary: backend trait and draw-submission contracts

mod backend;

pub use backend::{RecordingBackend, RenderBackend, RenderCommand};

/// Maximum number of point lights uploaded per frame; excess lights are
/// silently dropped
pub const MAX_POINT_LIGHTS: usize = 4;

/// Maximum number of spot lights uploaded per frame; excess lights are
/// silently dropped
pub const MAX_SPOT_LIGHTS: usize = 4;

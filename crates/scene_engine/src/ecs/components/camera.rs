//! Camera component

use crate::ecs::Component;
use crate::foundation::math::{Mat4, Vec3};

/// Perspective camera state
///
/// Yaw/pitch/fov are in degrees and mutated by the camera-control system;
/// the derived basis vectors and matrices are write-once-per-frame outputs of
/// the camera-update system and must not be written elsewhere.
#[derive(Debug, Clone, PartialEq)]
pub struct CameraComponent {
    /// Whether this camera is the active one; first-found wins when several
    /// entities carry the flag
    pub is_primary: bool,

    /// Vertical field of view in degrees
    pub fov: f32,
    /// Near clipping distance
    pub near_plane: f32,
    /// Far clipping distance
    pub far_plane: f32,
    /// Viewport aspect ratio, refreshed every frame
    pub aspect_ratio: f32,

    /// Yaw angle in degrees (rotation about world up)
    pub yaw: f32,
    /// Pitch angle in degrees, clamped to avoid gimbal flip
    pub pitch: f32,
    /// World up reference for basis derivation
    pub world_up: Vec3,

    /// Derived view direction
    pub front: Vec3,
    /// Derived up vector
    pub up: Vec3,
    /// Derived right vector
    pub right: Vec3,

    /// Derived projection matrix
    pub projection_matrix: Mat4,
    /// Derived view matrix
    pub view_matrix: Mat4,
}

impl Component for CameraComponent {}

impl Default for CameraComponent {
    fn default() -> Self {
        Self {
            is_primary: false,
            fov: 45.0,
            near_plane: 0.1,
            far_plane: 100.0,
            aspect_ratio: 1.0,
            yaw: -90.0,
            pitch: 0.0,
            world_up: Vec3::new(0.0, 1.0, 0.0),
            front: Vec3::new(0.0, 0.0, -1.0),
            up: Vec3::new(0.0, 1.0, 0.0),
            right: Vec3::new(1.0, 0.0, 0.0),
            projection_matrix: Mat4::identity(),
            view_matrix: Mat4::identity(),
        }
    }
}

impl CameraComponent {
    /// Create a primary camera with default lens parameters
    pub fn primary() -> Self {
        Self {
            is_primary: true,
            ..Default::default()
        }
    }
}

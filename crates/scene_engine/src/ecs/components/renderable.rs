//! Drawable binding components

use crate::animation::PoseHandle;
use crate::assets::{MeshHandle, ShaderHandle};
use crate::ecs::Component;
use crate::physics::BodyHandle;
use crate::spatial::BoundingVolume;

/// Associates an entity with a mesh and the shader that draws it
///
/// Created at scene-build time and destroyed with the entity; the referenced
/// assets outlive the scene.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MeshRendererComponent {
    /// Mesh to draw
    pub mesh: MeshHandle,
    /// Shader program; drawables are batched by this handle
    pub shader: ShaderHandle,
    /// Whether the drawable participates in shadow passes
    pub cast_shadow: bool,
}

impl Component for MeshRendererComponent {}

impl MeshRendererComponent {
    /// Create a shadow-casting drawable binding
    pub fn new(mesh: MeshHandle, shader: ShaderHandle) -> Self {
        Self {
            mesh,
            shader,
            cast_shadow: true,
        }
    }
}

/// Local-space bounding volume used for frustum culling
///
/// Entities without one are always drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingVolumeComponent {
    /// The volume, in model space
    pub volume: BoundingVolume,
}

impl Component for BoundingVolumeComponent {}

/// Binding to a rigid body owned by the physics collaborator
///
/// The solver is the source of truth for the entity's transform; the
/// physics-sync system overwrites position/rotation every frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RigidBodyComponent {
    /// Handle into the physics collaborator
    pub body: BodyHandle,
}

impl Component for RigidBodyComponent {}

/// Binding to a skeletal pose owned by the animation collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AnimationComponent {
    /// Handle into the animation collaborator
    pub pose: PoseHandle,
}

impl Component for AnimationComponent {}

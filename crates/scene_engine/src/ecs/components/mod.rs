//! Component definitions
//!
//! Pure data attached to entities; all behavior lives in
//! [`systems`](crate::ecs::systems).

mod camera;
mod lighting;
mod renderable;
mod transform;
mod ui;

pub use camera::CameraComponent;
pub use lighting::{DirectionalLightComponent, PointLightComponent, SpotLightComponent};
pub use renderable::{
    AnimationComponent, BoundingVolumeComponent, MeshRendererComponent, RigidBodyComponent,
};
pub use transform::TransformComponent;
pub use ui::{
    UiAnimationComponent, UiEventHandler, UiInteractiveComponent, UiRendererComponent,
    UiTransformComponent,
};

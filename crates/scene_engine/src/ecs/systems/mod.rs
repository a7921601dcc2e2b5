//! Built-in systems
//!
//! Each system is a plain function over `&mut World` plus the collaborators
//! it needs. The frame driver calls them in a fixed order (see
//! [`Engine::frame`](crate::engine::Engine::frame)); none of them talk to
//! each other except through component data.

pub mod animation;
pub mod camera_control;
pub mod camera_update;
pub mod hierarchy;
pub mod physics_sync;
pub mod render;
pub mod ui_interact;
pub mod ui_render;

use super::components::CameraComponent;
use super::{Entity, World};

/// The active camera: the first entity, in camera storage order, whose
/// camera component carries the primary flag
pub fn active_camera(world: &World) -> Option<Entity> {
    world.query::<CameraComponent>().find(|e| {
        world
            .get_component::<CameraComponent>(*e)
            .is_some_and(|c| c.is_primary)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_primary_camera_wins() {
        let mut world = World::new();
        let secondary = world.create_entity();
        world.add_component(secondary, CameraComponent::default());
        let first = world.create_entity();
        world.add_component(first, CameraComponent::primary());
        let second = world.create_entity();
        world.add_component(second, CameraComponent::primary());

        assert_eq!(active_camera(&world), Some(first));
    }

    #[test]
    fn test_no_primary_camera() {
        let mut world = World::new();
        let e = world.create_entity();
        world.add_component(e, CameraComponent::default());
        assert_eq!(active_camera(&world), None);
    }
}

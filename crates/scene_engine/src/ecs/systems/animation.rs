//! Advances bound skeletal poses by frame time
//!
//! The skinning matrices themselves are read later by the render system; this
//! pass only steps time so every bound pose is sampled at the same instant.

use crate::ecs::components::AnimationComponent;
use crate::ecs::World;
use crate::animation::AnimationSource;

/// Advance every bound pose by `dt` seconds
pub fn update(world: &World, animation: &mut dyn AnimationSource, dt: f32) {
    for entity in world.query::<AnimationComponent>() {
        if let Some(binding) = world.get_component::<AnimationComponent>(entity) {
            animation.advance(binding.pose, dt);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::PoseLibrary;
    use crate::foundation::math::Mat4;

    #[test]
    fn test_all_bound_poses_advance_together() {
        let mut library = PoseLibrary::new();
        let walk = library.register_pose(vec![Mat4::identity(); 2]);
        let idle = library.register_pose(vec![Mat4::identity(); 2]);
        let unbound = library.register_pose(vec![Mat4::identity(); 2]);

        let mut world = World::new();
        for pose in [walk, idle] {
            let entity = world.create_entity();
            world.add_component(entity, AnimationComponent { pose });
        }

        update(&world, &mut library, 0.25);

        assert_eq!(library.elapsed(walk), Some(0.25));
        assert_eq!(library.elapsed(idle), Some(0.25));
        assert_eq!(library.elapsed(unbound), Some(0.0));
    }
}

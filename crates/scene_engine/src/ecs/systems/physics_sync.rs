//! Copies solver transforms onto bound entities
//!
//! For entities carrying a rigid-body binding the solver is authoritative:
//! local position and rotation are overwritten every frame, which also marks
//! the transform dirty for the hierarchy pass. Simulated bodies are expected
//! to be hierarchy roots; a parented body would have its solver output
//! re-interpreted as a local transform.

use crate::ecs::components::{RigidBodyComponent, TransformComponent};
use crate::ecs::World;
use crate::physics::PhysicsSource;

/// Pull world transforms from the physics collaborator
pub fn update(world: &mut World, physics: &dyn PhysicsSource) {
    let bound: Vec<_> = world
        .query2::<RigidBodyComponent, TransformComponent>()
        .collect();

    for entity in bound {
        let Some(body) = world
            .get_component::<RigidBodyComponent>(entity)
            .map(|rb| rb.body)
        else {
            continue;
        };

        match physics.body_world_transform(body) {
            Some((position, rotation)) => {
                if let Some(transform) = world.get_component_mut::<TransformComponent>(entity) {
                    transform.set_local_position(position);
                    transform.set_local_rotation(rotation);
                }
            }
            None => {
                log::debug!("entity {entity:?} references a stale physics body; skipping");
            }
        }
    }
}

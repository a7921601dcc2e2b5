//! Transform hierarchy maintenance
//!
//! Parent/child edges are plain entity ids on the transform component, so
//! destruction logic is explicit: destroying a parent orphans its children
//! rather than cascading. Reparenting that would close a cycle fails fast.

use crate::ecs::components::TransformComponent;
use crate::ecs::{Entity, World};
use crate::error::SceneError;
use crate::foundation::math::Mat4;

/// Attach `child` under `parent`, or detach it when `parent` is `None`
///
/// Fails with [`SceneError::HierarchyCycle`] when `parent` is `child` itself
/// or one of its descendants.
pub fn set_parent(
    world: &mut World,
    child: Entity,
    parent: Option<Entity>,
) -> Result<(), SceneError> {
    if !world.is_alive(child) {
        return Err(SceneError::DanglingEntity(child));
    }
    if !world.has_component::<TransformComponent>(child) {
        return Err(SceneError::MissingTransform(child));
    }

    if let Some(parent) = parent {
        if !world.is_alive(parent) {
            return Err(SceneError::DanglingEntity(parent));
        }
        if !world.has_component::<TransformComponent>(parent) {
            return Err(SceneError::MissingTransform(parent));
        }

        // Walk from the requested parent toward the root; meeting the child
        // means the edge would close a cycle.
        let mut ancestor = Some(parent);
        while let Some(current) = ancestor {
            if current == child {
                return Err(SceneError::HierarchyCycle { child, parent });
            }
            ancestor = world
                .get_component::<TransformComponent>(current)
                .and_then(TransformComponent::parent);
        }
    }

    detach_from_parent(world, child);

    if let Some(parent) = parent {
        if let Some(parent_transform) = world.get_component_mut::<TransformComponent>(parent) {
            parent_transform.children.push(child);
        }
    }
    if let Some(child_transform) = world.get_component_mut::<TransformComponent>(child) {
        child_transform.parent = parent;
        // Reuse the setter side effect: any reparenting invalidates the world matrix
        let position = child_transform.local_position();
        child_transform.set_local_position(position);
    }

    Ok(())
}

fn detach_from_parent(world: &mut World, child: Entity) {
    let old_parent = world
        .get_component::<TransformComponent>(child)
        .and_then(TransformComponent::parent);
    if let Some(old_parent) = old_parent {
        if let Some(parent_transform) = world.get_component_mut::<TransformComponent>(old_parent) {
            parent_transform.children.retain(|c| *c != child);
        }
    }
}

/// Destroy an entity, orphaning its children
///
/// Children keep their local transforms and become roots; destroying a whole
/// subtree is the caller's responsibility. All components of the destroyed
/// entity are removed atomically.
pub fn destroy_entity(world: &mut World, entity: Entity) {
    let (children, had_transform) = match world.get_component::<TransformComponent>(entity) {
        Some(transform) => (transform.children().to_vec(), true),
        None => (Vec::new(), false),
    };

    if had_transform {
        detach_from_parent(world, entity);
        for child in children {
            if let Some(child_transform) = world.get_component_mut::<TransformComponent>(child) {
                child_transform.parent = None;
                let position = child_transform.local_position();
                child_transform.set_local_position(position);
            }
        }
    }

    world.destroy_entity(entity);
}

/// Recompute every cached world matrix, depth-first, parent before child
///
/// Recomputation is unconditional so a child is always consistent with a
/// possibly-moved parent; the dirty flags are cleared as a side effect.
pub fn propagate_transforms(world: &mut World) {
    let roots: Vec<Entity> = world
        .query::<TransformComponent>()
        .filter(|e| {
            world
                .get_component::<TransformComponent>(*e)
                .is_some_and(|t| t.parent().is_none())
        })
        .collect();

    for root in roots {
        propagate_subtree(world, root, None);
    }
}

fn propagate_subtree(world: &mut World, entity: Entity, parent_world: Option<Mat4>) {
    let children = match world.get_component_mut::<TransformComponent>(entity) {
        Some(transform) => {
            transform.compute_world_matrix(parent_world.as_ref());
            transform.children().to_vec()
        }
        None => return,
    };

    let world_matrix = *world
        .get_component::<TransformComponent>(entity)
        .map(TransformComponent::world_matrix)
        .unwrap_or(&Mat4::identity());

    for child in children {
        propagate_subtree(world, child, Some(world_matrix));
    }
}

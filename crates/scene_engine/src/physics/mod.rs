//! Physics collaborator boundary
//!
//! The rigid-body solver lives outside this crate; only its transform-output
//! contract matters here. The core supplies mass/shape/transform once at
//! entity-creation time and reads back authoritative world transforms every
//! frame.

use crate::foundation::math::{Quat, Vec3};
use slotmap::SlotMap;

slotmap::new_key_type! {
    /// Handle to a rigid body owned by the physics collaborator
    pub struct BodyHandle;
}

/// Write-once body description supplied at entity creation
#[derive(Debug, Clone)]
pub struct BodySpec {
    /// Body mass in kilograms; zero means static
    pub mass: f32,
    /// Collision half-extents
    pub half_extents: Vec3,
    /// Initial world position
    pub position: Vec3,
    /// Initial world rotation
    pub rotation: Quat,
}

/// Read-only view of solver output, queried once per frame per bound entity
pub trait PhysicsSource {
    /// Current world transform of a body, if the handle is still valid
    fn body_world_transform(&self, body: BodyHandle) -> Option<(Vec3, Quat)>;
}

/// Minimal in-memory solver stand-in
///
/// Holds bodies at whatever transform the host last assigned. Used by the
/// sandbox bootstrap and by tests; a real solver implements [`PhysicsSource`]
/// behind the same handle type.
#[derive(Default)]
pub struct KinematicWorld {
    bodies: SlotMap<BodyHandle, BodySpec>,
}

impl KinematicWorld {
    /// Create an empty world
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a body from its write-once spec
    pub fn create_body(&mut self, spec: BodySpec) -> BodyHandle {
        log::debug!(
            "creating rigid body: mass {} at {:?}",
            spec.mass,
            spec.position
        );
        self.bodies.insert(spec)
    }

    /// Move a body, standing in for a solver step
    pub fn set_body_transform(&mut self, body: BodyHandle, position: Vec3, rotation: Quat) {
        if let Some(spec) = self.bodies.get_mut(body) {
            spec.position = position;
            spec.rotation = rotation;
        }
    }
}

impl PhysicsSource for KinematicWorld {
    fn body_world_transform(&self, body: BodyHandle) -> Option<(Vec3, Quat)> {
        self.bodies.get(body).map(|spec| (spec.position, spec.rotation))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinematic_world_reports_latest_transform() {
        let mut world = KinematicWorld::new();
        let body = world.create_body(BodySpec {
            mass: 10.0,
            half_extents: Vec3::new(0.5, 1.0, 0.5),
            position: Vec3::zeros(),
            rotation: Quat::identity(),
        });

        world.set_body_transform(body, Vec3::new(1.0, 2.0, 3.0), Quat::identity());
        let (position, _) = world.body_world_transform(body).unwrap();
        assert_eq!(position, Vec3::new(1.0, 2.0, 3.0));
    }
}

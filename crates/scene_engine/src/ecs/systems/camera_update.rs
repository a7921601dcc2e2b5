//! Derives camera basis vectors and matrices from yaw/pitch state
//!
//! Only primary cameras are refreshed. The eye position is the camera's local
//! transform position: cameras are expected to be hierarchy roots, and this
//! pass runs before the frame's world-matrix propagation.

use crate::ecs::components::{CameraComponent, TransformComponent};
use crate::ecs::World;
use crate::foundation::math::utils::deg_to_rad;
use crate::foundation::math::{Mat4, Mat4Ext, Vec3};

/// Refresh basis vectors, projection, and view for primary cameras
pub fn update(world: &mut World, viewport_aspect: f32) {
    let cameras: Vec<_> = world.query2::<CameraComponent, TransformComponent>().collect();

    for entity in cameras {
        let position = match world.get_component::<TransformComponent>(entity) {
            Some(transform) => transform.local_position(),
            None => continue,
        };
        let Some(camera) = world.get_component_mut::<CameraComponent>(entity) else {
            continue;
        };
        if !camera.is_primary {
            continue;
        }

        camera.aspect_ratio = viewport_aspect;

        let yaw = deg_to_rad(camera.yaw);
        let pitch = deg_to_rad(camera.pitch);
        let front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        );
        camera.front = front.normalize();
        camera.right = camera.front.cross(&camera.world_up).normalize();
        camera.up = camera.right.cross(&camera.front).normalize();

        camera.projection_matrix = Mat4::perspective(
            deg_to_rad(camera.fov),
            camera.aspect_ratio,
            camera.near_plane,
            camera.far_plane,
        );
        camera.view_matrix = Mat4::look_at(position, position + camera.front, camera.up);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn camera_world(yaw: f32, pitch: f32) -> (World, crate::ecs::Entity) {
        let mut world = World::new();
        let entity = world.create_entity();
        let mut camera = CameraComponent::primary();
        camera.yaw = yaw;
        camera.pitch = pitch;
        world.add_component(entity, camera);
        world.add_component(entity, TransformComponent::identity());
        (world, entity)
    }

    #[test]
    fn test_default_yaw_looks_down_negative_z() {
        let (mut world, entity) = camera_world(-90.0, 0.0);
        update(&mut world, 16.0 / 9.0);

        let camera = world.get_component::<CameraComponent>(entity).unwrap();
        assert_relative_eq!(camera.front, Vec3::new(0.0, 0.0, -1.0), epsilon = 1e-5);
        assert_relative_eq!(camera.right, Vec3::new(1.0, 0.0, 0.0), epsilon = 1e-5);
        assert_relative_eq!(camera.up, Vec3::new(0.0, 1.0, 0.0), epsilon = 1e-5);
        assert_relative_eq!(camera.aspect_ratio, 16.0 / 9.0);
    }

    #[test]
    fn test_positive_pitch_tilts_front_up() {
        let (mut world, entity) = camera_world(-90.0, 45.0);
        update(&mut world, 1.0);

        let camera = world.get_component::<CameraComponent>(entity).unwrap();
        assert!(camera.front.y > 0.7);
        // Right stays horizontal regardless of pitch
        assert_relative_eq!(camera.right.y, 0.0, epsilon = 1e-5);
    }

    #[test]
    fn test_view_matrix_moves_eye_to_origin() {
        let (mut world, entity) = camera_world(-90.0, 0.0);
        world
            .get_component_mut::<TransformComponent>(entity)
            .unwrap()
            .set_local_position(Vec3::new(0.0, 2.0, 8.0));
        update(&mut world, 1.0);

        let camera = world.get_component::<CameraComponent>(entity).unwrap();
        let eye = camera
            .view_matrix
            .transform_point(&Vec3::new(0.0, 2.0, 8.0).into());
        assert_relative_eq!(eye.coords, Vec3::zeros(), epsilon = 1e-5);
    }

    #[test]
    fn test_secondary_cameras_are_left_alone() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(entity, CameraComponent::default());
        world.add_component(entity, TransformComponent::identity());

        update(&mut world, 2.0);
        let camera = world.get_component::<CameraComponent>(entity).unwrap();
        assert_eq!(camera.aspect_ratio, 1.0);
    }
}

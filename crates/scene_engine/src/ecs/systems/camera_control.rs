//! Fly-camera control from accumulated input
//!
//! Mutates only the active camera's yaw/pitch/fov and its transform position;
//! basis vectors and matrices are derived later by
//! [`camera_update`](super::camera_update). Without an active camera the
//! system is a no-op.

use super::active_camera;
use crate::core::CameraConfig;
use crate::ecs::components::{CameraComponent, TransformComponent};
use crate::ecs::World;
use crate::foundation::math::utils::clamp;
use crate::foundation::math::Vec3;
use crate::input::{InputManager, KeyCode};

/// Apply cursor, scroll, and key input to the active camera
pub fn update(world: &mut World, input: &InputManager, config: &CameraConfig, dt: f32) {
    let Some(entity) = active_camera(world) else {
        return;
    };

    let (front, right) = {
        let Some(camera) = world.get_component_mut::<CameraComponent>(entity) else {
            return;
        };

        let delta = input.cursor_delta();
        camera.yaw += delta.x * config.mouse_sensitivity;
        camera.pitch = clamp(
            camera.pitch + delta.y * config.mouse_sensitivity,
            -config.pitch_limit,
            config.pitch_limit,
        );

        // Scrolling down (negative delta) narrows the fov toward the floor
        camera.fov = clamp(
            camera.fov + input.scroll_delta(),
            config.min_fov,
            config.max_fov,
        );

        (camera.front, camera.right)
    };

    let velocity = config.movement_speed * dt;
    let mut movement = Vec3::zeros();
    if input.is_key_held(KeyCode::W) {
        movement += front * velocity;
    }
    if input.is_key_held(KeyCode::S) {
        movement -= front * velocity;
    }
    if input.is_key_held(KeyCode::A) {
        movement -= right * velocity;
    }
    if input.is_key_held(KeyCode::D) {
        movement += right * velocity;
    }

    if movement != Vec3::zeros() {
        if let Some(transform) = world.get_component_mut::<TransformComponent>(entity) {
            let position = transform.local_position() + movement;
            transform.set_local_position(position);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::math::Vec3;
    use approx::assert_relative_eq;

    fn world_with_camera() -> (World, crate::ecs::Entity) {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(entity, CameraComponent::primary());
        world.add_component(entity, TransformComponent::identity());
        (world, entity)
    }

    #[test]
    fn test_pitch_clamps_at_limit() {
        let (mut world, entity) = world_with_camera();
        let config = CameraConfig::default();
        let mut input = InputManager::new();

        // Huge upward sweep: 10000 px at 0.1 deg/px
        input.handle_cursor_move(0.0, 0.0);
        input.handle_cursor_move(0.0, -10000.0);
        update(&mut world, &input, &config, 0.016);

        let camera = world.get_component::<CameraComponent>(entity).unwrap();
        assert_eq!(camera.pitch, 89.0);
    }

    #[test]
    fn test_fov_clamps_to_range() {
        let (mut world, entity) = world_with_camera();
        let config = CameraConfig::default();

        let mut input = InputManager::new();
        input.handle_scroll(0.0, -1000.0);
        update(&mut world, &input, &config, 0.016);
        assert_eq!(
            world.get_component::<CameraComponent>(entity).unwrap().fov,
            config.min_fov
        );

        input.end_frame();
        input.handle_scroll(0.0, 1000.0);
        update(&mut world, &input, &config, 0.016);
        assert_eq!(
            world.get_component::<CameraComponent>(entity).unwrap().fov,
            config.max_fov
        );
    }

    #[test]
    fn test_wasd_moves_along_camera_basis() {
        let (mut world, entity) = world_with_camera();
        let config = CameraConfig::default();
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::W, true);
        input.handle_key_input(KeyCode::D, true);

        // Default basis: front -Z, right +X
        update(&mut world, &input, &config, 1.0);

        let transform = world.get_component::<TransformComponent>(entity).unwrap();
        assert_relative_eq!(
            transform.local_position(),
            Vec3::new(2.5, 0.0, -2.5),
            epsilon = 1e-5
        );
        assert!(transform.is_dirty());
    }

    #[test]
    fn test_opposed_keys_cancel() {
        let (mut world, entity) = world_with_camera();
        let config = CameraConfig::default();
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::W, true);
        input.handle_key_input(KeyCode::S, true);

        update(&mut world, &input, &config, 1.0);
        let transform = world.get_component::<TransformComponent>(entity).unwrap();
        assert_eq!(transform.local_position(), Vec3::zeros());
    }

    #[test]
    fn test_no_active_camera_is_a_noop() {
        let mut world = World::new();
        let entity = world.create_entity();
        world.add_component(entity, CameraComponent::default());

        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::W, true);
        update(&mut world, &input, &CameraConfig::default(), 1.0);

        let camera = world.get_component::<CameraComponent>(entity).unwrap();
        assert_eq!(camera.fov, 45.0);
    }
}

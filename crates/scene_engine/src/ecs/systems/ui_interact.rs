//! UI hover/press state machine and feedback animation
//!
//! Hit-testing resolves a single topmost element under the cursor (highest
//! z-index wins, later storage order breaks ties), then every interactive
//! element is stepped through its hover/press edges. Handlers fire exactly
//! once per edge. Hover feedback mixes color and scale exponentially toward
//! the state's target.

use crate::core::UiConfig;
use crate::ecs::components::{
    UiAnimationComponent, UiInteractiveComponent, UiRendererComponent, UiTransformComponent,
};
use crate::ecs::{Entity, World};
use crate::foundation::math::utils::{clamp, lerp_vec4};
use crate::input::InputManager;

/// Step hover/press state and feedback animation for all interactive elements
pub fn update(world: &mut World, input: &InputManager, config: &UiConfig, dt: f32) {
    let elements: Vec<(Entity, UiTransformComponent)> = world
        .query2::<UiInteractiveComponent, UiTransformComponent>()
        .filter_map(|e| world.get_component::<UiTransformComponent>(e).map(|r| (e, *r)))
        .collect();

    let cursor = input.cursor_position();
    let topmost = elements
        .iter()
        .filter(|(_, rect)| rect.contains(cursor))
        .max_by_key(|(_, rect)| rect.z_index)
        .map(|(entity, _)| *entity);

    let button_held = input.is_left_button_held();

    for (entity, _) in elements {
        let hovered = topmost == Some(entity);

        if let Some(interactive) = world.get_component_mut::<UiInteractiveComponent>(entity) {
            if hovered && !interactive.is_hovered {
                interactive.is_hovered = true;
                if let Some(handler) = interactive.handler.as_mut() {
                    handler.on_hover_enter(entity);
                }
            } else if !hovered && interactive.is_hovered {
                interactive.is_hovered = false;
                // is_pressed stays latched until the button is released, so
                // dragging out and back in cannot re-fire the click
                if let Some(handler) = interactive.handler.as_mut() {
                    handler.on_hover_exit(entity);
                }
            }

            if interactive.is_hovered && button_held && !interactive.is_pressed {
                interactive.is_pressed = true;
                log::debug!("ui element {entity:?} clicked");
                if let Some(handler) = interactive.handler.as_mut() {
                    handler.on_click(entity);
                }
            } else if !button_held {
                interactive.is_pressed = false;
            }
        }

        animate_feedback(world, entity, hovered, config, dt);
    }
}

/// Exponential approach of scale and color toward the hover state's targets
fn animate_feedback(world: &mut World, entity: Entity, hovered: bool, config: &UiConfig, dt: f32) {
    let color_target = if let Some(anim) = world.get_component_mut::<UiAnimationComponent>(entity) {
        anim.target_scale = if hovered { config.hover_scale } else { 1.0 };
        let blend = clamp(anim.speed * dt, 0.0, 1.0);
        anim.current_scale += (anim.target_scale - anim.current_scale) * blend;
        Some((
            if hovered { anim.hover_color } else { anim.normal_color },
            blend,
        ))
    } else {
        None
    };

    if let Some((target, blend)) = color_target {
        if let Some(renderer) = world.get_component_mut::<UiRendererComponent>(entity) {
            renderer.color = lerp_vec4(renderer.color, target, blend);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::AssetRegistry;
    use crate::ecs::components::UiEventHandler;
    use crate::foundation::math::{Vec2, Vec4};
    use crate::input::MouseButton;
    use std::cell::Cell;
    use std::rc::Rc;

    #[derive(Default, Clone)]
    struct Counters {
        clicks: Rc<Cell<u32>>,
        enters: Rc<Cell<u32>>,
        exits: Rc<Cell<u32>>,
    }

    struct CountingHandler(Counters);

    impl UiEventHandler for CountingHandler {
        fn on_click(&mut self, _entity: Entity) {
            self.0.clicks.set(self.0.clicks.get() + 1);
        }
        fn on_hover_enter(&mut self, _entity: Entity) {
            self.0.enters.set(self.0.enters.get() + 1);
        }
        fn on_hover_exit(&mut self, _entity: Entity) {
            self.0.exits.set(self.0.exits.get() + 1);
        }
    }

    fn button_world() -> (World, Entity, Counters) {
        let mut world = World::new();
        let counters = Counters::default();
        let entity = world.create_entity();
        world.add_component(
            entity,
            UiTransformComponent::new(Vec2::new(100.0, 100.0), Vec2::new(200.0, 50.0)),
        );
        world.add_component(
            entity,
            UiInteractiveComponent::with_handler(Box::new(CountingHandler(counters.clone()))),
        );
        (world, entity, counters)
    }

    #[test]
    fn test_hover_edges_fire_once() {
        let (mut world, _, counters) = button_world();
        let config = UiConfig::default();
        let mut input = InputManager::new();
        input.handle_cursor_move(150.0, 120.0);

        // Several frames inside the rectangle: a single enter
        update(&mut world, &input, &config, 0.016);
        update(&mut world, &input, &config, 0.016);
        assert_eq!(counters.enters.get(), 1);
        assert_eq!(counters.exits.get(), 0);

        input.handle_cursor_move(0.0, 0.0);
        update(&mut world, &input, &config, 0.016);
        update(&mut world, &input, &config, 0.016);
        assert_eq!(counters.exits.get(), 1);
    }

    #[test]
    fn test_click_fires_on_press_edge_only() {
        let (mut world, _, counters) = button_world();
        let config = UiConfig::default();
        let mut input = InputManager::new();
        input.handle_cursor_move(150.0, 120.0);
        input.handle_mouse_button(MouseButton::Left, true);

        // Held across frames: one click until released and pressed again
        update(&mut world, &input, &config, 0.016);
        update(&mut world, &input, &config, 0.016);
        assert_eq!(counters.clicks.get(), 1);

        input.handle_mouse_button(MouseButton::Left, false);
        update(&mut world, &input, &config, 0.016);
        input.handle_mouse_button(MouseButton::Left, true);
        update(&mut world, &input, &config, 0.016);
        assert_eq!(counters.clicks.get(), 2);
    }

    #[test]
    fn test_drag_out_and_back_while_held_does_not_refire_click() {
        let (mut world, _, counters) = button_world();
        let config = UiConfig::default();
        let mut input = InputManager::new();
        input.handle_cursor_move(150.0, 120.0);
        input.handle_mouse_button(MouseButton::Left, true);
        update(&mut world, &input, &config, 0.016);
        assert_eq!(counters.clicks.get(), 1);

        // Drag out of the rectangle and back in, button still held
        input.handle_cursor_move(0.0, 0.0);
        update(&mut world, &input, &config, 0.016);
        input.handle_cursor_move(150.0, 120.0);
        update(&mut world, &input, &config, 0.016);
        assert_eq!(counters.clicks.get(), 1);
        assert_eq!(counters.exits.get(), 1);
        assert_eq!(counters.enters.get(), 2);

        // A release and a fresh press is a new edge
        input.handle_mouse_button(MouseButton::Left, false);
        update(&mut world, &input, &config, 0.016);
        input.handle_mouse_button(MouseButton::Left, true);
        update(&mut world, &input, &config, 0.016);
        assert_eq!(counters.clicks.get(), 2);
    }

    #[test]
    fn test_press_outside_does_not_click() {
        let (mut world, _, counters) = button_world();
        let config = UiConfig::default();
        let mut input = InputManager::new();
        input.handle_cursor_move(0.0, 0.0);
        input.handle_mouse_button(MouseButton::Left, true);

        update(&mut world, &input, &config, 0.016);
        assert_eq!(counters.clicks.get(), 0);
    }

    #[test]
    fn test_topmost_element_wins_hit_test() {
        let mut world = World::new();
        let below = Counters::default();
        let above = Counters::default();

        let bottom = world.create_entity();
        world.add_component(
            bottom,
            UiTransformComponent::new(Vec2::zeros(), Vec2::new(100.0, 100.0)),
        );
        world.add_component(
            bottom,
            UiInteractiveComponent::with_handler(Box::new(CountingHandler(below.clone()))),
        );

        let top = world.create_entity();
        world.add_component(
            top,
            UiTransformComponent::new(Vec2::zeros(), Vec2::new(100.0, 100.0)).with_z_index(5),
        );
        world.add_component(
            top,
            UiInteractiveComponent::with_handler(Box::new(CountingHandler(above.clone()))),
        );

        let mut input = InputManager::new();
        input.handle_cursor_move(50.0, 50.0);
        update(&mut world, &input, &UiConfig::default(), 0.016);

        assert_eq!(above.enters.get(), 1);
        assert_eq!(below.enters.get(), 0);
    }

    #[test]
    fn test_feedback_approaches_hover_targets() {
        let mut registry = AssetRegistry::new();
        let shader = registry.register_shader("ui");

        let (mut world, entity, _) = button_world();
        world.add_component(
            entity,
            UiRendererComponent::colored(shader, Vec4::new(1.0, 1.0, 1.0, 1.0)),
        );
        world.add_component(entity, UiAnimationComponent::default());

        let config = UiConfig::default();
        let mut input = InputManager::new();
        input.handle_cursor_move(150.0, 120.0);

        for _ in 0..60 {
            update(&mut world, &input, &config, 0.016);
        }

        let anim = world.get_component::<UiAnimationComponent>(entity).unwrap();
        assert!((anim.current_scale - config.hover_scale).abs() < 0.01);

        let renderer = world.get_component::<UiRendererComponent>(entity).unwrap();
        assert!((renderer.color.x - anim.hover_color.x).abs() < 0.01);
    }
}

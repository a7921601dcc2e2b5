//! UI components: screen-space rectangles, visuals, and interaction state

use crate::assets::{ShaderHandle, TextureHandle};
use crate::ecs::{Component, Entity};
use crate::foundation::math::{Vec2, Vec4};

/// Screen-space rectangle for a UI element
///
/// Position is the top-left corner in cursor coordinates; elements are
/// hit-tested and drawn in ascending z-index order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiTransformComponent {
    /// Top-left corner in screen coordinates
    pub position: Vec2,
    /// Width and height in pixels
    pub size: Vec2,
    /// Draw/hit-test ordering; higher is drawn later (on top)
    pub z_index: i32,
}

impl Component for UiTransformComponent {}

impl UiTransformComponent {
    /// Create a rectangle at a position with a size
    pub fn new(position: Vec2, size: Vec2) -> Self {
        Self {
            position,
            size,
            z_index: 0,
        }
    }

    /// Builder pattern: set z-index
    pub fn with_z_index(mut self, z_index: i32) -> Self {
        self.z_index = z_index;
        self
    }

    /// Whether a screen-space point lies inside the rectangle (edges inclusive)
    pub fn contains(&self, point: Vec2) -> bool {
        point.x >= self.position.x
            && point.x <= self.position.x + self.size.x
            && point.y >= self.position.y
            && point.y <= self.position.y + self.size.y
    }
}

/// Visual state of a UI element
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiRendererComponent {
    /// Tint color, mutated by the hover animation
    pub color: Vec4,
    /// Optional texture
    pub texture: Option<TextureHandle>,
    /// Shader used to draw the quad
    pub shader: ShaderHandle,
}

impl Component for UiRendererComponent {}

impl UiRendererComponent {
    /// Create an untextured colored element
    pub fn colored(shader: ShaderHandle, color: Vec4) -> Self {
        Self {
            color,
            texture: None,
            shader,
        }
    }
}

/// Capability interface for UI behavior registered by the host
///
/// The core invokes these exactly once per state-machine edge; it never
/// inspects the implementation.
pub trait UiEventHandler {
    /// Button-down edge while the cursor is inside the rectangle
    fn on_click(&mut self, entity: Entity) {
        let _ = entity;
    }

    /// Cursor entered the rectangle
    fn on_hover_enter(&mut self, entity: Entity) {
        let _ = entity;
    }

    /// Cursor left the rectangle
    fn on_hover_exit(&mut self, entity: Entity) {
        let _ = entity;
    }
}

/// Hover/press state machine for a UI element
pub struct UiInteractiveComponent {
    /// Whether the cursor is currently inside the rectangle
    pub is_hovered: bool,
    /// Whether the element is currently pressed
    pub is_pressed: bool,
    /// Host-registered behavior, invoked on state edges
    pub handler: Option<Box<dyn UiEventHandler>>,
}

impl Component for UiInteractiveComponent {}

impl Default for UiInteractiveComponent {
    fn default() -> Self {
        Self {
            is_hovered: false,
            is_pressed: false,
            handler: None,
        }
    }
}

impl UiInteractiveComponent {
    /// Create an interactive element with a behavior handler
    pub fn with_handler(handler: Box<dyn UiEventHandler>) -> Self {
        Self {
            handler: Some(handler),
            ..Default::default()
        }
    }
}

/// Hover feedback animation toward color/scale targets
///
/// Values approach their target exponentially:
/// `value += (target - value) * speed * dt`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct UiAnimationComponent {
    /// Scale the element is approaching
    pub target_scale: f32,
    /// Current animated scale, applied when drawing
    pub current_scale: f32,
    /// Approach rate in 1/seconds
    pub speed: f32,

    /// Color target while hovered
    pub hover_color: Vec4,
    /// Color target while not hovered
    pub normal_color: Vec4,
}

impl Component for UiAnimationComponent {}

impl Default for UiAnimationComponent {
    fn default() -> Self {
        Self {
            target_scale: 1.0,
            current_scale: 1.0,
            speed: 5.0,
            hover_color: Vec4::new(0.8, 0.8, 0.8, 1.0),
            normal_color: Vec4::new(1.0, 1.0, 1.0, 1.0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rect_contains_is_edge_inclusive() {
        let rect = UiTransformComponent::new(Vec2::new(100.0, 100.0), Vec2::new(200.0, 50.0));
        assert!(rect.contains(Vec2::new(100.0, 100.0)));
        assert!(rect.contains(Vec2::new(300.0, 150.0)));
        assert!(rect.contains(Vec2::new(200.0, 125.0)));
        assert!(!rect.contains(Vec2::new(99.9, 125.0)));
        assert!(!rect.contains(Vec2::new(200.0, 151.0)));
    }
}

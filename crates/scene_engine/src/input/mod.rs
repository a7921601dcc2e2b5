//! Input management system
//!
//! The window shell feeds raw events in between frames; systems read held
//! keys, cursor position, and frame-scoped deltas during the pipeline pass.
//! Deltas (cursor movement, scroll) are zeroed at the end of every frame.

use crate::foundation::math::Vec2;
use std::collections::HashSet;

/// Key codes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyCode {
    /// A key
    A,
    /// D key
    D,
    /// S key
    S,
    /// W key
    W,
    /// Space key
    Space,
    /// Enter key
    Enter,
    /// Escape key
    Escape,
    /// Left shift key
    LeftShift,
    /// Up arrow
    Up,
    /// Down arrow
    Down,
    /// Left arrow
    Left,
    /// Right arrow
    Right,
}

/// Mouse buttons
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button
    Middle,
}

/// Input manager
///
/// Tracks key-held state and cursor/scroll deltas accumulated since the last
/// frame boundary. The first cursor event after an anchor reset only latches
/// the position, so a window-enter jump never turns into a camera spike.
pub struct InputManager {
    keys_held: HashSet<KeyCode>,

    last_x: f32,
    last_y: f32,
    x_offset: f32,
    y_offset: f32,
    scroll_y: f32,
    first_move: bool,

    left_button_held: bool,
}

impl InputManager {
    /// Create a new input manager
    pub fn new() -> Self {
        Self {
            keys_held: HashSet::new(),
            last_x: 0.0,
            last_y: 0.0,
            x_offset: 0.0,
            y_offset: 0.0,
            scroll_y: 0.0,
            first_move: true,
            left_button_held: false,
        }
    }

    /// Handle a key press/release event from the shell
    pub fn handle_key_input(&mut self, key: KeyCode, pressed: bool) {
        if pressed {
            self.keys_held.insert(key);
        } else {
            self.keys_held.remove(&key);
        }
    }

    /// Handle a cursor movement event from the shell
    ///
    /// Y offset is inverted so that moving the cursor up yields a positive
    /// pitch delta.
    pub fn handle_cursor_move(&mut self, x: f32, y: f32) {
        if self.first_move {
            self.last_x = x;
            self.last_y = y;
            self.first_move = false;
        }

        self.x_offset += x - self.last_x;
        self.y_offset += self.last_y - y;
        self.last_x = x;
        self.last_y = y;
    }

    /// Handle a scroll event from the shell
    pub fn handle_scroll(&mut self, _x_offset: f32, y_offset: f32) {
        self.scroll_y += y_offset;
    }

    /// Handle a mouse button event from the shell
    pub fn handle_mouse_button(&mut self, button: MouseButton, pressed: bool) {
        if button == MouseButton::Left {
            self.left_button_held = pressed;
        }
    }

    /// Re-anchor the cursor (after cursor capture or window recreation)
    pub fn set_cursor_anchor(&mut self, x: f32, y: f32) {
        self.last_x = x;
        self.last_y = y;
        self.first_move = true;
    }

    /// Whether a key is currently held
    pub fn is_key_held(&self, key: KeyCode) -> bool {
        self.keys_held.contains(&key)
    }

    /// Cursor movement since the last frame boundary
    pub fn cursor_delta(&self) -> Vec2 {
        Vec2::new(self.x_offset, self.y_offset)
    }

    /// Current cursor position in screen coordinates
    pub fn cursor_position(&self) -> Vec2 {
        Vec2::new(self.last_x, self.last_y)
    }

    /// Vertical scroll accumulated since the last frame boundary
    pub fn scroll_delta(&self) -> f32 {
        self.scroll_y
    }

    /// Whether the left mouse button is held
    pub fn is_left_button_held(&self) -> bool {
        self.left_button_held
    }

    /// Zero all frame-scoped deltas; called once at the frame boundary
    pub fn end_frame(&mut self) {
        self.x_offset = 0.0;
        self.y_offset = 0.0;
        self.scroll_y = 0.0;
    }
}

impl Default for InputManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_move_only_latches_position() {
        let mut input = InputManager::new();
        input.handle_cursor_move(400.0, 300.0);
        assert_eq!(input.cursor_delta(), Vec2::zeros());

        input.handle_cursor_move(410.0, 290.0);
        assert_eq!(input.cursor_delta(), Vec2::new(10.0, 10.0));
    }

    #[test]
    fn test_end_frame_resets_deltas_but_not_position() {
        let mut input = InputManager::new();
        input.handle_cursor_move(100.0, 100.0);
        input.handle_cursor_move(120.0, 100.0);
        input.handle_scroll(0.0, -2.0);

        input.end_frame();
        assert_eq!(input.cursor_delta(), Vec2::zeros());
        assert_eq!(input.scroll_delta(), 0.0);
        assert_eq!(input.cursor_position(), Vec2::new(120.0, 100.0));
    }

    #[test]
    fn test_key_held_state() {
        let mut input = InputManager::new();
        input.handle_key_input(KeyCode::W, true);
        assert!(input.is_key_held(KeyCode::W));

        input.handle_key_input(KeyCode::W, false);
        assert!(!input.is_key_held(KeyCode::W));
    }

    #[test]
    fn test_left_button_tracking() {
        let mut input = InputManager::new();
        input.handle_mouse_button(MouseButton::Left, true);
        assert!(input.is_left_button_held());
        input.handle_mouse_button(MouseButton::Right, false);
        assert!(input.is_left_button_held());
        input.handle_mouse_button(MouseButton::Left, false);
        assert!(!input.is_left_button_held());
    }
}

//! Per-frame input state resource.
//!
//! Captures the keyboard, mouse-button, and cursor state the demos care
//! about. The state lives in an [`InputState`] ECS resource written once per
//! frame by [`update_input_state`](crate::systems::input::update_input_state)
//! — the single writer — and read by any number of systems, so each frame
//! observes one consistent snapshot without hidden globals.

use bevy_ecs::prelude::*;
use raylib::prelude::*;

/// Boolean key state with an associated keyboard binding.
#[derive(Debug, Clone, Copy)]
pub struct BoolState {
    /// Whether the key is currently held this frame.
    pub active: bool,
    /// Whether the key was pressed this frame.
    pub just_pressed: bool,
    /// Whether the key was released this frame.
    pub just_released: bool,
    /// The key bound to this action.
    pub key_binding: KeyboardKey,
}

impl BoolState {
    fn bound_to(key: KeyboardKey) -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            key_binding: key,
        }
    }
}

impl Default for BoolState {
    fn default() -> Self {
        Self::bound_to(KeyboardKey::KEY_NULL)
    }
}

/// Boolean button state with an associated mouse binding.
#[derive(Debug, Clone, Copy)]
pub struct MouseState {
    pub active: bool,
    pub just_pressed: bool,
    pub just_released: bool,
    pub button_binding: MouseButton,
}

impl Default for MouseState {
    fn default() -> Self {
        Self {
            active: false,
            just_pressed: false,
            just_released: false,
            button_binding: MouseButton::MOUSE_BUTTON_LEFT,
        }
    }
}

/// Resource capturing the per-frame input state relevant to the demos:
/// WASD movement, the debug toggle, the left mouse button, and the cursor.
///
/// `cursor` is in render-target pixels — the raw window cursor rescaled by
/// the ratio of the backing resolution to the displayed size, so clicking
/// stays accurate when the window is resized or letterboxed. `cursor_window`
/// keeps the unscaled position.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub direction_up: BoolState,
    pub direction_left: BoolState,
    pub direction_down: BoolState,
    pub direction_right: BoolState,
    pub mode_debug: BoolState,
    pub mouse_left: MouseState,
    /// Cursor in render-target pixels.
    pub cursor: Vector2,
    /// Cursor in raw window pixels.
    pub cursor_window: Vector2,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            direction_up: BoolState::bound_to(KeyboardKey::KEY_W),
            direction_left: BoolState::bound_to(KeyboardKey::KEY_A),
            direction_down: BoolState::bound_to(KeyboardKey::KEY_S),
            direction_right: BoolState::bound_to(KeyboardKey::KEY_D),
            mode_debug: BoolState::bound_to(KeyboardKey::KEY_F11),
            mouse_left: MouseState::default(),
            cursor: Vector2 { x: 0.0, y: 0.0 },
            cursor_window: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_state_is_idle_at_origin() {
        let input = InputState::default();
        assert!(!input.direction_up.active);
        assert!(!input.direction_down.active);
        assert!(!input.direction_left.active);
        assert!(!input.direction_right.active);
        assert!(!input.mouse_left.active);
        assert!(!input.mouse_left.just_pressed);
        assert_eq!(input.cursor.x, 0.0);
        assert_eq!(input.cursor.y, 0.0);
    }

    #[test]
    fn default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.direction_up.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.direction_left.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.direction_down.key_binding, KeyboardKey::KEY_S);
        assert_eq!(input.direction_right.key_binding, KeyboardKey::KEY_D);
        assert_eq!(input.mode_debug.key_binding, KeyboardKey::KEY_F11);
        assert_eq!(
            input.mouse_left.button_binding,
            MouseButton::MOUSE_BUTTON_LEFT
        );
    }
}

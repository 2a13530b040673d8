//! Input systems.
//!
//! [`update_input_state`] reads hardware input from Raylib each frame and
//! writes the results into [`InputState`](crate::resources::input::InputState).
//! It is the resource's only writer; every other system just reads, so the
//! ordering guarantee is simply "whatever was down when this frame started".

use bevy_ecs::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::windowsize::WindowSize;

/// Poll Raylib for keyboard, mouse, and cursor state.
///
/// The raw window cursor is rescaled into render-target coordinates using
/// the current window size, so clicking stays accurate under resizing and
/// letterboxing.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    window: Res<WindowSize>,
    config: Res<GameConfig>,
    rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let input = &mut *input;
    for state in [
        &mut input.direction_up,
        &mut input.direction_left,
        &mut input.direction_down,
        &mut input.direction_right,
        &mut input.mode_debug,
    ] {
        state.active = rl.is_key_down(state.key_binding);
        state.just_pressed = rl.is_key_pressed(state.key_binding);
        state.just_released = rl.is_key_released(state.key_binding);
    }

    let mouse = &mut input.mouse_left;
    mouse.active = rl.is_mouse_button_down(mouse.button_binding);
    mouse.just_pressed = rl.is_mouse_button_pressed(mouse.button_binding);
    mouse.just_released = rl.is_mouse_button_released(mouse.button_binding);

    input.cursor_window = rl.get_mouse_position();
    input.cursor = window.window_to_render_pos(
        input.cursor_window,
        config.render_width,
        config.render_height,
    );

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}

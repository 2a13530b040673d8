//! Keyboard character controller.
//!
//! Reads the shared [`InputState`](crate::resources::input::InputState) and
//! accumulates a movement impulse into the [`RigidBody`] of every
//! [`InputControlled`] entity. The direction is normalized before it is
//! applied, so diagonal movement is no faster than cardinal movement.
//!
//! The impulse is added once per frame and the body's per-frame damping
//! bleeds it back off in the movement system; their balance sets the top
//! speed and how quickly the character settles.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::inputcontrolled::InputControlled;
use crate::components::rigidbody::RigidBody;
use crate::resources::input::InputState;

/// Build a direction from the held direction keys and add it, normalized
/// and scaled by the entity's impulse, into its velocity.
pub fn input_character_controller(
    mut query: Query<(&mut InputControlled, &mut RigidBody)>,
    input: Res<InputState>,
) {
    for (mut controlled, mut rigidbody) in query.iter_mut() {
        let mut direction = Vector2 { x: 0.0, y: 0.0 };
        if input.direction_up.active {
            direction.y -= 1.0;
        }
        if input.direction_down.active {
            direction.y += 1.0;
        }
        if input.direction_left.active {
            direction.x -= 1.0;
        }
        if input.direction_right.active {
            direction.x += 1.0;
        }

        if direction.x != 0.0 || direction.y != 0.0 {
            direction = direction.normalized();
            rigidbody.velocity += direction * controlled.impulse;
        }
        controlled.direction = direction;
    }
}

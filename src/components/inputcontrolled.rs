//! Input-driven character movement components.
//!
//! [`InputControlled`] marks an entity whose velocity is driven by the WASD
//! direction keys; the controller system in
//! [`crate::systems::inputcontroller`] reads the shared input state, builds a
//! normalized direction, and adds an impulse into the entity's
//! [`RigidBody`](super::rigidbody::RigidBody) each frame.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Keyboard-driven movement intent.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Velocity gained per frame of held input, in world units per second.
    pub impulse: f32,
    /// Normalized direction of the most recent input, zero when idle.
    /// Written by the controller system; useful for facing and debug draws.
    pub direction: Vector2,
}

impl InputControlled {
    pub fn new(impulse: f32) -> Self {
        Self {
            impulse,
            direction: Vector2 { x: 0.0, y: 0.0 },
        }
    }
}

/// Marker: the world camera tracks this entity's position each frame.
#[derive(Component, Clone, Copy, Debug)]
pub struct CameraFollowed;

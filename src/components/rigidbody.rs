//! Kinematic body component.
//!
//! Stores velocity and a per-frame damping factor. The movement system
//! multiplies velocity by `damping` once per frame before integrating the
//! position, which reproduces the demos' frame-rate-dependent feel; see the
//! note on `damping` below before "fixing" it.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Velocity plus per-frame damping, consumed by the movement system to
/// update [`MapPosition`](super::mapposition::MapPosition).
#[derive(Component, Clone, Copy, Debug)]
pub struct RigidBody {
    /// Current velocity in world units per second.
    pub velocity: Vector2,
    /// Multiplier applied to velocity once per frame, NOT scaled by delta
    /// time. 1.0 disables damping; the character controller uses 0.75.
    pub damping: f32,
}

impl Default for RigidBody {
    fn default() -> Self {
        Self::new()
    }
}

impl RigidBody {
    /// Zero velocity, no damping.
    pub fn new() -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            damping: 1.0,
        }
    }

    /// Zero velocity with a per-frame damping factor.
    pub fn with_damping(damping: f32) -> Self {
        Self {
            velocity: Vector2 { x: 0.0, y: 0.0 },
            damping,
        }
    }

    /// Initial velocity, no damping.
    #[cfg_attr(not(test), allow(dead_code))]
    pub fn with_velocity(velocity: Vector2) -> Self {
        Self {
            velocity,
            damping: 1.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f32 = 1e-6;

    fn approx_eq(a: f32, b: f32) -> bool {
        (a - b).abs() < EPSILON
    }

    #[test]
    fn new_is_at_rest() {
        let rb = RigidBody::new();
        assert!(approx_eq(rb.velocity.x, 0.0));
        assert!(approx_eq(rb.velocity.y, 0.0));
        assert!(approx_eq(rb.damping, 1.0));
    }

    #[test]
    fn with_damping_keeps_zero_velocity() {
        let rb = RigidBody::with_damping(0.75);
        assert!(approx_eq(rb.damping, 0.75));
        assert!(approx_eq(rb.velocity.x, 0.0));
    }

    #[test]
    fn with_velocity_has_no_damping() {
        let rb = RigidBody::with_velocity(Vector2 { x: 3.0, y: -4.0 });
        assert!(approx_eq(rb.velocity.x, 3.0));
        assert!(approx_eq(rb.velocity.y, -4.0));
        assert!(approx_eq(rb.damping, 1.0));
    }
}

//! Burst particle component.
//!
//! Particles integrate their own velocity in
//! [`crate::systems::particles::particle_update`] instead of going through
//! the generic movement system, because their updater applies horizontal
//! damping and a constant downward pull once per frame (not delta-scaled).
//! Pair with
//! [`Lifetime`](super::lifetime::Lifetime) to expire them.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Velocity state for a short-lived burst particle.
#[derive(Component, Clone, Copy, Debug)]
pub struct Particle {
    /// Velocity in pixels per second (particles live in screen space).
    pub velocity: Vector2,
}

impl Particle {
    pub fn new(velocity: Vector2) -> Self {
        Self { velocity }
    }
}

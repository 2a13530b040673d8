//! Lifetime component for automatic entity despawning.
//!
//! Counts down each frame; when the remaining time reaches zero the entity
//! is despawned by [`crate::systems::lifetime::lifetime_system`]. Used for
//! particle bursts and floating score popups. The countdown respects
//! [`WorldTime::time_scale`](crate::resources::worldtime::WorldTime).

use bevy_ecs::prelude::Component;

/// Despawns the entity after a duration.
#[derive(Component, Clone, Copy, Debug)]
pub struct Lifetime {
    /// Remaining time in seconds before despawn.
    pub remaining: f32,
}

impl Lifetime {
    pub fn new(seconds: f32) -> Self {
        Lifetime { remaining: seconds }
    }
}

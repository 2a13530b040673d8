//! Aim-trainer target component.

use bevy_ecs::prelude::Component;

/// A clickable target that ages toward expiry.
///
/// The aim systems age targets each frame, recolor them from green to red as
/// they approach `lifetime`, and penalize the player when one expires
/// unclicked.
#[derive(Component, Clone, Copy, Debug)]
pub struct Target {
    /// Radius in screen pixels.
    pub radius: f32,
    /// Seconds since spawn.
    pub age: f32,
    /// Seconds until the target expires.
    pub lifetime: f32,
}

impl Target {
    pub fn new(radius: f32, lifetime: f32) -> Self {
        Self {
            radius,
            age: 0.0,
            lifetime,
        }
    }

    /// Fraction of the lifetime elapsed, 0.0 at spawn approaching 1.0 at
    /// expiry. Feeds both the color ramp and the accuracy bonus.
    pub fn progress(&self) -> f32 {
        self.age / self.lifetime
    }

    pub fn is_alive(&self) -> bool {
        self.age < self.lifetime
    }
}

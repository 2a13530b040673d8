//! Burst particle integration.
//!
//! Particles carry their own velocity and update rules instead of using the
//! generic movement system: horizontal velocity decays by a fixed factor and
//! vertical velocity gains a fixed downward pull once per frame, neither
//! scaled by the frame delta. That frame-rate dependence is deliberate;
//! see DESIGN.md before changing it.

use bevy_ecs::prelude::*;

use crate::components::particle::Particle;
use crate::components::screenposition::ScreenPosition;
use crate::resources::worldtime::WorldTime;

/// Per-frame horizontal velocity decay.
const DRAG: f32 = 0.98;
/// Per-frame downward velocity gain, pixels per second.
const GRAVITY: f32 = 20.0;

pub fn particle_update(
    mut query: Query<(&mut ScreenPosition, &mut Particle)>,
    time: Res<WorldTime>,
) {
    for (mut position, mut particle) in query.iter_mut() {
        let step = particle.velocity.scale_by(time.delta);
        position.pos += step;
        particle.velocity.x *= DRAG;
        particle.velocity.y += GRAVITY;
    }
}

//! Movement integration.
//!
//! Applies each body's per-frame damping factor and advances its position
//! by `velocity * delta`. Damping happens before integration, so the update
//! order is impulse, damp, integrate.
//!
//! Note: damping multiplies once per frame regardless of the frame time,
//! a deliberate frame-rate-dependent approximation. Do not fold `delta`
//! into it.

use bevy_ecs::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::resources::worldtime::WorldTime;

/// Damp velocities and integrate positions.
pub fn movement(mut query: Query<(&mut MapPosition, &mut RigidBody)>, time: Res<WorldTime>) {
    for (mut position, mut rigidbody) in query.iter_mut() {
        if rigidbody.damping != 1.0 {
            let damping = rigidbody.damping;
            rigidbody.velocity = rigidbody.velocity * damping;
        }
        let delta = rigidbody.velocity.scale_by(time.delta);
        position.pos = position.pos + delta;
    }
}

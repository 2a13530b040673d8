//! Lifetime countdown system.
//!
//! Decrements [`Lifetime`](crate::components::lifetime::Lifetime) timers by
//! the scaled frame delta and despawns entities whose time runs out.

use bevy_ecs::prelude::*;

use crate::components::lifetime::Lifetime;
use crate::resources::worldtime::WorldTime;

pub fn lifetime_system(
    time: Res<WorldTime>,
    mut query: Query<(Entity, &mut Lifetime)>,
    mut commands: Commands,
) {
    let dt = time.delta; // already scaled by time_scale
    for (entity, mut lifetime) in query.iter_mut() {
        lifetime.remaining -= dt;
        if lifetime.remaining <= 0.0 {
            commands.entity(entity).try_despawn();
        }
    }
}

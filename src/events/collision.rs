//! Chunk collision event and a logging observer.
//!
//! The collision resolver emits one [`ChunkCollisionEvent`] per push-out it
//! applies, so gameplay code can react (sounds, damage, camera shake)
//! without being entangled with the solver.

use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

/// Fired when the resolver pushes an entity out of a solid tile.
#[derive(Event, Debug, Clone, Copy)]
pub struct ChunkCollisionEvent {
    /// The entity that was pushed.
    pub entity: Entity,
    /// Surface point the push originated from, world units.
    pub contact: Vector2,
    /// Applied displacement, world units.
    pub push: Vector2,
}

/// Global observer that logs resolved collisions at debug level.
pub fn chunk_collision_observer(trigger: On<ChunkCollisionEvent>) {
    let event = trigger.event();
    log::debug!(
        "resolved collision for {:?} at ({:.3}, {:.3}), push ({:.3}, {:.3})",
        event.entity,
        event.contact.x,
        event.contact.y,
        event.push.x,
        event.push.y
    );
}

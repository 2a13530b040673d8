//! Circle-vs-chunk collision resolution.
//!
//! Runs after movement. For each collider the system repeatedly finds the
//! nearest surface point of any overlapping solid tile and pushes the
//! entity's center out along the surface-to-center direction by the
//! penetration depth. Iteration (bounded at three passes) lets the solver
//! tolerate several simultaneous overlaps without solving them as a joint
//! constraint system; it stops early once no surface point lies within the
//! radius.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::circlecollider::CircleCollider;
use crate::components::mapposition::MapPosition;
use crate::events::collision::ChunkCollisionEvent;
use crate::resources::chunk::Chunk;
use crate::resources::chunkstore::ChunkStore;

/// Upper bound on push-out passes per entity per frame.
const MAX_RESOLUTION_ITERATIONS: usize = 3;

/// Nearest point on any overlapping solid tile within `radius` of `center`,
/// or `None` when the circle is clear.
///
/// Tiles are gathered with a query box of three radii per side, enough to
/// cover every tile a circle of `radius` can penetrate. Each candidate
/// point is the clamp of the center into the tile box; only points strictly
/// inside the radius qualify, and the closest one wins.
pub fn find_resolution_point(chunk: &Chunk, center: Vector2, radius: f32) -> Option<Vector2> {
    let objects = chunk.collision_objects(center.x, center.y, radius * 3.0, radius * 3.0);
    let mut nearest: Option<(Vector2, f32)> = None;
    for object in objects {
        let point = object.closest_point(center);
        let distance = point.distance_to(center);
        if distance < radius && nearest.map_or(true, |(_, best)| distance < best) {
            nearest = Some((point, distance));
        }
    }
    nearest.map(|(point, _)| point)
}

/// Push every circle collider out of its chunk's solid tiles.
pub fn chunk_collision(
    mut query: Query<(Entity, &mut MapPosition, &CircleCollider)>,
    chunks: Res<ChunkStore>,
    mut commands: Commands,
) {
    for (entity, mut position, collider) in query.iter_mut() {
        let Some(chunk) = chunks.get(&collider.chunk) else {
            continue;
        };
        for _ in 0..MAX_RESOLUTION_ITERATIONS {
            let Some(point) = find_resolution_point(chunk, position.pos, collider.radius) else {
                break;
            };
            let offset = position.pos - point;
            let distance = offset.length();
            if distance <= f32::EPSILON {
                // Center exactly on the surface point (deep penetration);
                // no direction to push along.
                break;
            }
            let push = offset.normalized() * (collider.radius - distance);
            position.pos += push;
            commands.trigger(ChunkCollisionEvent {
                entity,
                contact: point,
                push,
            });
        }
    }
}

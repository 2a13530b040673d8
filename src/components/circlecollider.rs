use bevy_ecs::prelude::Component;

/// Circular collider resolved against a chunk's tile boxes.
///
/// The collision system pushes the owning entity's
/// [`MapPosition`](super::mapposition::MapPosition) out of any overlapping
/// solid tile of the named chunk.
#[derive(Component, Clone, Debug)]
pub struct CircleCollider {
    /// Radius in world units.
    pub radius: f32,
    /// Key of the chunk in the [`ChunkStore`](crate::resources::chunkstore::ChunkStore)
    /// this collider resolves against.
    pub chunk: String,
}

impl CircleCollider {
    pub fn new(radius: f32, chunk: impl Into<String>) -> Self {
        Self {
            radius,
            chunk: chunk.into(),
        }
    }
}

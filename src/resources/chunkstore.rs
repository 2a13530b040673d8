use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;

use crate::resources::chunk::Chunk;

/// Loaded chunks keyed by name.
///
/// Filled during scene setup and read-only afterward; colliders reference
/// their chunk by key (see
/// [`CircleCollider`](crate::components::circlecollider::CircleCollider)).
#[derive(Resource, Default)]
pub struct ChunkStore {
    map: FxHashMap<String, Chunk>,
}

impl ChunkStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, name: impl Into<String>, chunk: Chunk) {
        self.map.insert(name.into(), chunk);
    }

    pub fn get(&self, name: &str) -> Option<&Chunk> {
        self.map.get(name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &Chunk)> {
        self.map.iter()
    }
}

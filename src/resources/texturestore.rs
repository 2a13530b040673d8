use raylib::prelude::Texture2D;
use rustc_hash::FxHashMap;

/// Loaded textures keyed by name.
///
/// NonSend resource: `Texture2D` wraps GPU state owned by the main thread.
/// Filled during scene setup; looked up by the render system when drawing
/// [`ShapeKind::Sprite`](crate::components::shape::ShapeKind) entities.
#[derive(Default)]
pub struct TextureStore {
    map: FxHashMap<&'static str, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, key: &'static str, texture: Texture2D) {
        self.map.insert(key, texture);
    }

    pub fn get(&self, key: &str) -> Option<&Texture2D> {
        self.map.get(key)
    }
}

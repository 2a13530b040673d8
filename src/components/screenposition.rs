use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Fixed position in render-target pixels, unaffected by the world camera.
///
/// Used for HUD text, score popups, and the aim-trainer playfield, which
/// operate directly in screen space.
#[derive(Component, Clone, Copy, Debug)]
pub struct ScreenPosition {
    pub pos: Vector2,
}

impl ScreenPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}

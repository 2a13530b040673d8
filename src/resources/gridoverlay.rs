use bevy_ecs::prelude::Resource;

/// Marker resource for the tiles demo's coordinate grid.
///
/// When present, the render system draws faint world-unit grid lines around
/// the camera with coordinate labels along the screen edges, mixing the
/// world camera (for line placement) with screen-space text in the same
/// frame.
#[derive(Resource, Clone, Copy)]
pub struct GridOverlay {
    /// Grid spacing in world units.
    pub spacing: f32,
}

impl Default for GridOverlay {
    fn default() -> Self {
        Self { spacing: 1.0 }
    }
}

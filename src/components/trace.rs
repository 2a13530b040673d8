use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

/// Trail of points left behind by the terminal bone of a
/// [`KinematicChain`](super::kinematicchain::KinematicChain).
///
/// The trace system appends the chain tip every frame while time advances;
/// the render system connects the points into a polyline. Freezing the time
/// scale pauses accumulation without clearing the trail.
#[derive(Component, Clone, Debug, Default)]
pub struct Trace {
    pub points: Vec<Vector2>,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }
}

use bevy_ecs::prelude::Resource;

/// Shared simulation clock.
///
/// `delta` is already scaled by `time_scale` when systems read it; setting
/// the scale to zero freezes every time-driven system without stopping the
/// frame loop (there is no separate pause primitive).
#[derive(Resource, Clone, Copy)]
pub struct WorldTime {
    /// Scaled seconds since startup.
    pub elapsed: f32,
    /// Scaled seconds since the previous frame.
    pub delta: f32,
    pub time_scale: f32,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}

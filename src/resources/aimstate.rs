//! Aim-trainer run state.

use bevy_ecs::prelude::Resource;

/// Mutable state of one aim-trainer run.
///
/// Inserted by the aim scene only; the aim systems are gated on its
/// presence, so the other demos never pay for them.
#[derive(Resource, Debug, Clone)]
pub struct AimState {
    /// Current score; decays on misses, never below zero.
    pub score: f32,
    pub lives: i32,
    /// Total successful hits this run; drives the spawn schedule.
    pub hits: u32,
    /// Whether the timed spawn cycle has started (it begins on the first hit).
    pub spawning: bool,
    /// Seconds between spawns.
    pub spawn_interval: f32,
    /// Seconds accumulated toward the next spawn.
    pub spawn_timer: f32,
    /// Red screen flash, 1.0 fading to 0.0.
    pub hurt: f32,
    /// Green screen flash for near-perfect hits, 1.0 fading to 0.0.
    pub bonus: f32,
    pub game_over: bool,
    /// Set when the final score made the board.
    pub highscore: bool,
    /// Seconds remaining before a game-over screen accepts a restart click.
    pub restart_delay: f32,
}

impl Default for AimState {
    fn default() -> Self {
        Self::new()
    }
}

impl AimState {
    pub fn new() -> Self {
        Self {
            score: 0.0,
            lives: 3,
            hits: 0,
            spawning: false,
            spawn_interval: 0.0,
            spawn_timer: 0.0,
            hurt: 0.0,
            bonus: 0.0,
            game_over: false,
            highscore: false,
            restart_delay: 0.0,
        }
    }

    /// Spawn interval after `hits` successful hits: an exponential ramp
    /// from ~2s down toward a 100ms floor, in seconds.
    pub fn interval_for_hits(hits: u32) -> f32 {
        1.9 * (0.015_f32.ln() * hits as f32 / 299.0).exp() + 0.1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_interval_ramps_down() {
        let start = AimState::interval_for_hits(0);
        let mid = AimState::interval_for_hits(150);
        let late = AimState::interval_for_hits(299);
        assert!((start - 2.0).abs() < 1e-3);
        assert!(mid < start);
        assert!(late < mid);
        // Floor of 100ms plus the fully decayed exponential term.
        assert!((late - (1.9 * 0.015 + 0.1)).abs() < 1e-3);
    }
}

//! Kinematic chain animation.
//!
//! [`chain_motion`] oscillates every bone vector on a sine/cosine of the
//! elapsed time scaled by the bone's speed, so each bone sweeps a circle of
//! its configured length around its joint. [`trace_accumulate`] appends the
//! terminal tip of each chain to its [`Trace`] while time is advancing;
//! freezing the time scale pauses the trail without clearing it.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use crate::components::kinematicchain::KinematicChain;
use crate::components::mapposition::MapPosition;
use crate::components::trace::Trace;
use crate::resources::worldtime::WorldTime;

/// Rotate each bone vector to its position on the oscillation circle.
pub fn chain_motion(mut query: Query<&mut KinematicChain>, time: Res<WorldTime>) {
    for mut chain in query.iter_mut() {
        let elapsed = time.elapsed;
        for bone in chain.bones_mut() {
            let phase = elapsed * bone.speed;
            bone.vector = Vector2 {
                x: bone.length * phase.sin(),
                y: bone.length * phase.cos(),
            };
        }
    }
}

/// Record the tip of the last bone into the chain's trace.
pub fn trace_accumulate(
    mut query: Query<(&MapPosition, &KinematicChain, &mut Trace)>,
    time: Res<WorldTime>,
) {
    if time.delta <= 0.0 {
        return;
    }
    for (position, chain, mut trace) in query.iter_mut() {
        if chain.is_empty() {
            continue;
        }
        let tip = chain.tip(position.pos, chain.len() - 1);
        trace.points.push(tip);
    }
}

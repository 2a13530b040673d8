//! Event and observer to toggle debug visualization.
//!
//! Emitting a [`SwitchDebugEvent`] flips the presence of the
//! [`DebugMode`](crate::resources::debugmode::DebugMode) resource. Systems
//! that render overlays gate their behavior on that resource.

use crate::resources::debugmode::DebugMode;
use bevy_ecs::observer::On;
use bevy_ecs::prelude::*;

/// Toggle the [`DebugMode`] resource on/off. Carries no data.
#[derive(Event, Debug, Clone, Copy)]
pub struct SwitchDebugEvent {}

/// Observer that toggles the [`DebugMode`] resource.
pub fn switch_debug_observer(
    _trigger: On<SwitchDebugEvent>,
    mut commands: Commands,
    debug_mode: Option<Res<DebugMode>>,
) {
    if debug_mode.is_some() {
        commands.remove_resource::<DebugMode>();
        log::info!("debug mode disabled");
    } else {
        commands.insert_resource(DebugMode {});
        log::info!("debug mode enabled");
    }
}

//! Debug toggle resource.
//!
//! The mere presence of this resource enables debug rendering and
//! diagnostics; remove it to disable them. Toggled at runtime by F11 via
//! [`switch_debug_observer`](crate::events::switchdebug::switch_debug_observer).

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the render system draws overlays
/// (collider outlines, camera/cursor diagnostics, frame time).
#[derive(Resource, Clone, Copy)]
pub struct DebugMode {}

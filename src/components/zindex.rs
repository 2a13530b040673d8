//! Z-index component for render ordering.

use bevy_ecs::prelude::Component;

/// Rendering order hint for 2D drawing.
///
/// Higher values are drawn later (on top). The render system sorts visible
/// shapes by `ZIndex` before issuing draw calls.
#[derive(Component, Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct ZIndex(pub i32);

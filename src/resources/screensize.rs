//! Screen size resource.
//!
//! Stores the internal render resolution in pixels. This is the coordinate
//! space the cameras and screen-space entities work in, independent of the
//! actual window size.

use bevy_ecs::prelude::Resource;

/// Internal render resolution in pixels.
#[derive(Resource, Clone, Copy)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

//! Window size resource.
//!
//! Tracks the actual OS window dimensions, which may differ from the render
//! resolution. Updated each frame to handle resizing. The mapping between
//! the two spaces is what keeps the cursor accurate when the backing buffer
//! and the displayed size disagree.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

/// Current window size in pixels.
#[derive(Resource, Clone, Copy)]
pub struct WindowSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}

impl WindowSize {
    /// Destination rectangle for drawing the render target into the window:
    /// preserves the render aspect ratio, fits the window, and centers the
    /// content (letterbox/pillarbox as needed).
    pub fn letterbox(&self, render_width: u32, render_height: u32) -> Rectangle {
        let render_w = render_width as f32;
        let render_h = render_height as f32;
        let window_w = self.w as f32;
        let window_h = self.h as f32;

        let render_aspect = render_w / render_h;
        let window_aspect = window_w / window_h;

        if window_aspect > render_aspect {
            // Window wider than the render target: bars on the sides.
            let scale = window_h / render_h;
            let scaled_w = render_w * scale;
            Rectangle {
                x: (window_w - scaled_w) / 2.0,
                y: 0.0,
                width: scaled_w,
                height: window_h,
            }
        } else {
            // Window taller: bars top and bottom.
            let scale = window_w / render_w;
            let scaled_h = render_h * scale;
            Rectangle {
                x: 0.0,
                y: (window_h - scaled_h) / 2.0,
                width: window_w,
                height: scaled_h,
            }
        }
    }

    /// Rescale a window-space position (e.g. the raw mouse cursor) into
    /// render-target coordinates, accounting for the letterbox offset.
    /// Positions inside the black bars clamp to the render bounds.
    pub fn window_to_render_pos(
        &self,
        window_pos: Vector2,
        render_width: u32,
        render_height: u32,
    ) -> Vector2 {
        let letterbox = self.letterbox(render_width, render_height);
        let render_w = render_width as f32;
        let render_h = render_height as f32;

        let relative_x = window_pos.x - letterbox.x;
        let relative_y = window_pos.y - letterbox.y;

        Vector2 {
            x: (relative_x * render_w / letterbox.width).clamp(0.0, render_w),
            y: (relative_y * render_h / letterbox.height).clamp(0.0, render_h),
        }
    }
}

//! Render target resource for fixed-resolution rendering.
//!
//! All drawing happens into a framebuffer texture at the internal render
//! resolution, which is then scaled into the window with letterboxing. This
//! keeps the demos resolution-independent and gives the input system a fixed
//! coordinate space to rescale the cursor into.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Framebuffer at the internal render resolution.
///
/// NonSend resource: `RenderTexture2D` wraps GPU state that must stay on the
/// main thread.
pub struct RenderTarget {
    pub texture: RenderTexture2D,
    pub render_width: u32,
    pub render_height: u32,
}

impl RenderTarget {
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("failed to create render texture: {}", e))?;

        unsafe {
            ffi::SetTextureFilter(
                texture.texture,
                TextureFilter::TEXTURE_FILTER_BILINEAR as i32,
            );
        }

        Ok(Self {
            texture,
            render_width: width,
            render_height: height,
        })
    }

    /// Source rectangle for blitting this texture.
    ///
    /// Height is negative to flip the Y axis, compensating for OpenGL's
    /// inverted texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.render_width as f32,
            height: -(self.render_height as f32),
        }
    }

    /// Draw the framebuffer into `dest` (window coordinates).
    ///
    /// Takes a draw scope to guarantee it only runs between begin/end
    /// drawing; the call itself goes through FFI because the framebuffer's
    /// color texture is only reachable as a raw `ffi::Texture`.
    pub fn blit<D: RaylibDraw>(&self, _d: &mut D, dest: Rectangle) {
        unsafe {
            ffi::DrawTexturePro(
                self.texture.texture,
                self.source_rect().into(),
                dest.into(),
                ffi::Vector2 { x: 0.0, y: 0.0 },
                0.0,
                Color::WHITE.into(),
            );
        }
    }
}

//! World/screen coordinate transforms.
//!
//! A [`Camera`] maps world-space geometry to integer screen pixels and back.
//! [`ScreenCamera`] is the identity transform (it only rounds) and is used
//! for fixed-UI drawing; [`WorldCamera`] pans, zooms, and re-centers on the
//! screen midpoint. Rather than swapping a mutable camera field on the
//! renderer, each painter scope is constructed over an explicit camera, so a
//! frame can alternate between UI and world drawing without ordering traps.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

/// Two-way transform between world units and screen pixels.
///
/// `from_screen(to_screen(..))` recovers its input up to the one-unit error
/// introduced by rounding to integer pixels.
pub trait Camera {
    /// Map world-space geometry to integer screen pixels.
    fn to_screen(&self, x: f32, y: f32, width: f32, height: f32) -> (i32, i32, i32, i32);

    /// Inverse of [`Camera::to_screen`]; converts fixed pixel sizes (a "3px
    /// dot") back into world units for world-space drawing.
    fn from_screen(&self, x: f32, y: f32, width: f32, height: f32) -> (f32, f32, f32, f32);
}

/// Identity camera for fixed-UI drawing; world units are screen pixels.
#[derive(Clone, Copy, Debug, Default)]
pub struct ScreenCamera;

impl Camera for ScreenCamera {
    fn to_screen(&self, x: f32, y: f32, width: f32, height: f32) -> (i32, i32, i32, i32) {
        (
            x.round() as i32,
            y.round() as i32,
            width.round() as i32,
            height.round() as i32,
        )
    }

    fn from_screen(&self, x: f32, y: f32, width: f32, height: f32) -> (f32, f32, f32, f32) {
        (x, y, width, height)
    }
}

/// Panning/zooming camera centered on the middle of the screen.
#[derive(Clone, Copy, Debug)]
pub struct WorldCamera {
    /// World-space point at the center of the screen.
    pub position: Vector2,
    /// Zoom multiplier on top of `pixels_per_unit`.
    pub zoom: f32,
    /// Base scale between world units and pixels.
    pub pixels_per_unit: f32,
    /// Render-target width in pixels.
    pub screen_width: f32,
    /// Render-target height in pixels.
    pub screen_height: f32,
}

impl WorldCamera {
    pub fn new(screen_width: f32, screen_height: f32, pixels_per_unit: f32) -> Self {
        Self {
            position: Vector2 { x: 0.0, y: 0.0 },
            zoom: 1.0,
            pixels_per_unit,
            screen_width,
            screen_height,
        }
    }

    fn scale(&self) -> f32 {
        self.pixels_per_unit * self.zoom
    }
}

impl Camera for WorldCamera {
    fn to_screen(&self, x: f32, y: f32, width: f32, height: f32) -> (i32, i32, i32, i32) {
        let scale = self.scale();
        let sx = (x - self.position.x) * scale + self.screen_width / 2.0;
        let sy = (y - self.position.y) * scale + self.screen_height / 2.0;
        (
            sx.round() as i32,
            sy.round() as i32,
            (width * scale).round() as i32,
            (height * scale).round() as i32,
        )
    }

    fn from_screen(&self, x: f32, y: f32, width: f32, height: f32) -> (f32, f32, f32, f32) {
        let scale = self.scale();
        let wx = (x - self.screen_width / 2.0) / scale + self.position.x;
        let wy = (y - self.screen_height / 2.0) / scale + self.position.y;
        (wx, wy, width / scale, height / scale)
    }
}

/// ECS resource holding the active world camera.
///
/// Inserted during scene setup, read by the render system, and mutated by
/// camera-controller systems (e.g. following the player).
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldCameraRes(pub WorldCamera);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn screen_camera_rounds_only() {
        let cam = ScreenCamera;
        assert_eq!(cam.to_screen(1.4, 2.6, 9.5, 10.2), (1, 3, 10, 10));
        assert_eq!(
            cam.from_screen(1.0, 3.0, 10.0, 10.0),
            (1.0, 3.0, 10.0, 10.0)
        );
    }

    #[test]
    fn world_camera_centers_its_position() {
        let cam = WorldCamera::new(640.0, 360.0, 64.0);
        // The camera position lands on the screen midpoint.
        assert_eq!(cam.to_screen(0.0, 0.0, 1.0, 1.0), (320, 180, 64, 64));
    }

    #[test]
    fn world_camera_pans_and_zooms() {
        let mut cam = WorldCamera::new(640.0, 360.0, 64.0);
        cam.position = Vector2 { x: 2.0, y: -1.0 };
        cam.zoom = 2.0;
        // (3, -1) is one unit right of the camera: 1 * 64 * 2 px from center.
        assert_eq!(cam.to_screen(3.0, -1.0, 0.5, 0.25), (448, 180, 64, 32));
    }

    #[test]
    fn pixel_sizes_convert_to_world_units() {
        let cam = WorldCamera::new(640.0, 360.0, 64.0);
        let (_, _, w, h) = cam.from_screen(0.0, 0.0, 3.0, 3.0);
        assert!((w - 3.0 / 64.0).abs() < 1e-6);
        assert!((h - 3.0 / 64.0).abs() < 1e-6);
    }

    #[test]
    fn round_trip_is_within_one_screen_unit() {
        let mut cam = WorldCamera::new(640.0, 360.0, 64.0);
        cam.position = Vector2 { x: 1.25, y: -3.5 };
        cam.zoom = 1.5;
        let tolerance = 1.0 / (64.0 * 1.5);

        for &(x, y, w, h) in &[
            (0.0_f32, 0.0_f32, 1.0_f32, 1.0_f32),
            (0.625, 0.625, 0.25, 0.25),
            (-7.3, 4.9, 2.0, 0.5),
        ] {
            let (sx, sy, sw, sh) = cam.to_screen(x, y, w, h);
            let (rx, ry, rw, rh) =
                cam.from_screen(sx as f32, sy as f32, sw as f32, sh as f32);
            assert!((rx - x).abs() <= tolerance, "x: {} vs {}", rx, x);
            assert!((ry - y).abs() <= tolerance, "y: {} vs {}", ry, y);
            assert!((rw - w).abs() <= tolerance, "w: {} vs {}", rw, w);
            assert!((rh - h).abs() <= tolerance, "h: {} vs {}", rh, h);
        }
    }

    #[test]
    fn identity_round_trip_is_exact_on_integers() {
        let cam = ScreenCamera;
        let (sx, sy, sw, sh) = cam.to_screen(10.0, 20.0, 30.0, 40.0);
        let (rx, ry, rw, rh) = cam.from_screen(sx as f32, sy as f32, sw as f32, sh as f32);
        assert_eq!((rx, ry, rw, rh), (10.0, 20.0, 30.0, 40.0));
    }
}

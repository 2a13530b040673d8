//! Rendering.
//!
//! [`Painter`] is the drawing front end: every primitive takes world-space
//! coordinates plus an [`Anchor`], applies the anchor to get a top-left box,
//! projects through an explicit [`Camera`], and issues the raylib call. A
//! painter is constructed per camera scope — one over the world camera, one
//! over the identity screen camera — so a frame freely mixes world-space and
//! fixed-UI drawing without a mutable "current camera" anywhere.
//!
//! [`render_system`] runs last in the schedule. It draws the whole frame
//! into the fixed-resolution render target (grid overlay, chunk tiles,
//! world shapes, kinematic chains, UI shapes, aim HUD, debug overlay) and
//! then scales the target into the window with letterboxing.

use bevy_ecs::prelude::*;
use raylib::ffi;
use raylib::prelude::*;

use crate::components::anchor::Anchor;
use crate::components::circlecollider::CircleCollider;
use crate::components::kinematicchain::KinematicChain;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::screenposition::ScreenPosition;
use crate::components::shape::{Shape, ShapeKind};
use crate::components::trace::Trace;
use crate::components::zindex::ZIndex;
use crate::resources::aimstate::AimState;
use crate::resources::camera::{Camera, ScreenCamera, WorldCameraRes};
use crate::resources::chunkstore::ChunkStore;
use crate::resources::debugmode::DebugMode;
use crate::resources::gridoverlay::GridOverlay;
use crate::resources::input::InputState;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::scoreboard::Scoreboard;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;

/// Width of the default raylib font for a string, in pixels.
fn measure_text(text: &str, size: i32) -> i32 {
    let Ok(c_text) = std::ffi::CString::new(text) else {
        return 0;
    };
    unsafe { ffi::MeasureText(c_text.as_ptr(), size) }
}

/// Anchor-then-camera drawing front end over a raylib draw scope.
pub struct Painter<'a, D: RaylibDraw> {
    d: &'a mut D,
    camera: &'a dyn Camera,
}

impl<'a, D: RaylibDraw> Painter<'a, D> {
    pub fn new(d: &'a mut D, camera: &'a dyn Camera) -> Self {
        Self { d, camera }
    }

    pub fn camera(&self) -> &dyn Camera {
        self.camera
    }

    /// Wipe the whole surface.
    pub fn clear(&mut self, color: Color) {
        self.d.clear_background(color);
    }

    pub fn fill_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32, anchor: Anchor, color: Color) {
        let (x, y) = anchor.apply(x, y, w, h);
        let (sx, sy, sw, sh) = self.camera.to_screen(x, y, w, h);
        self.d.draw_rectangle(sx, sy, sw, sh, color);
    }

    pub fn draw_rectangle(&mut self, x: f32, y: f32, w: f32, h: f32, anchor: Anchor, color: Color) {
        let (x, y) = anchor.apply(x, y, w, h);
        let (sx, sy, sw, sh) = self.camera.to_screen(x, y, w, h);
        self.d.draw_rectangle_lines(sx, sy, sw, sh, color);
    }

    /// The anchor applies to the circle's 2r x 2r bounding box.
    pub fn fill_circle(&mut self, x: f32, y: f32, radius: f32, anchor: Anchor, color: Color) {
        let (cx, cy, r) = self.project_circle(x, y, radius, anchor);
        self.d.draw_circle(cx, cy, r, color);
    }

    pub fn draw_circle(&mut self, x: f32, y: f32, radius: f32, anchor: Anchor, color: Color) {
        let (cx, cy, r) = self.project_circle(x, y, radius, anchor);
        self.d.draw_circle_lines(cx, cy, r, color);
    }

    fn project_circle(&self, x: f32, y: f32, radius: f32, anchor: Anchor) -> (i32, i32, f32) {
        let (x, y) = anchor.apply(x, y, radius * 2.0, radius * 2.0);
        let (sx, sy, sw, _) = self.camera.to_screen(x, y, radius * 2.0, radius * 2.0);
        let r = sw as f32 / 2.0;
        ((sx as f32 + r) as i32, (sy as f32 + r) as i32, r)
    }

    pub fn draw_line(&mut self, x1: f32, y1: f32, x2: f32, y2: f32, color: Color) {
        let (sx1, sy1, _, _) = self.camera.to_screen(x1, y1, 0.0, 0.0);
        let (sx2, sy2, _, _) = self.camera.to_screen(x2, y2, 0.0, 0.0);
        self.d.draw_line(sx1, sy1, sx2, sy2, color);
    }

    /// A vector drawn as a line from `(x, y)` with a small square head. The
    /// head is three screen pixels regardless of zoom, converted back into
    /// world units through the camera.
    pub fn draw_vector(&mut self, vector: Vector2, x: f32, y: f32, color: Color) {
        self.draw_line(x, y, x + vector.x, y + vector.y, color);
        let (_, _, hw, hh) = self.camera.from_screen(0.0, 0.0, 3.0, 3.0);
        self.fill_rectangle(x + vector.x, y + vector.y, hw, hh, Anchor::Center, color);
    }

    /// `size` is the font size in screen pixels; the measured extent is
    /// converted into world units before anchoring.
    pub fn draw_string(
        &mut self,
        text: &str,
        x: f32,
        y: f32,
        size: i32,
        anchor: Anchor,
        color: Color,
    ) {
        let px_width = measure_text(text, size) as f32;
        let (_, _, w, h) = self.camera.from_screen(0.0, 0.0, px_width, size as f32);
        let (x, y) = anchor.apply(x, y, w, h);
        let (sx, sy, _, _) = self.camera.to_screen(x, y, w, h);
        self.d.draw_text(text, sx, sy, size, color);
    }

    /// Textured quad stretched over a `w` x `h` world-space box.
    pub fn draw_texture(
        &mut self,
        texture: &Texture2D,
        x: f32,
        y: f32,
        w: f32,
        h: f32,
        anchor: Anchor,
        tint: Color,
    ) {
        let (x, y) = anchor.apply(x, y, w, h);
        let (sx, sy, sw, sh) = self.camera.to_screen(x, y, w, h);
        let source = Rectangle {
            x: 0.0,
            y: 0.0,
            width: texture.width as f32,
            height: texture.height as f32,
        };
        let dest = Rectangle {
            x: sx as f32,
            y: sy as f32,
            width: sw as f32,
            height: sh as f32,
        };
        self.d
            .draw_texture_pro(texture, source, dest, Vector2::zero(), 0.0, tint);
    }

    fn draw_shape(&mut self, x: f32, y: f32, shape: &Shape, textures: &TextureStore) {
        match &shape.kind {
            ShapeKind::Rectangle {
                width,
                height,
                filled,
            } => {
                if *filled {
                    self.fill_rectangle(x, y, *width, *height, shape.anchor, shape.color);
                } else {
                    self.draw_rectangle(x, y, *width, *height, shape.anchor, shape.color);
                }
            }
            ShapeKind::Circle { radius, filled } => {
                if *filled {
                    self.fill_circle(x, y, *radius, shape.anchor, shape.color);
                } else {
                    self.draw_circle(x, y, *radius, shape.anchor, shape.color);
                }
            }
            ShapeKind::Text { text, size } => {
                self.draw_string(text, x, y, *size, shape.anchor, shape.color);
            }
            ShapeKind::Sprite {
                tex_key,
                width,
                height,
            } => {
                if let Some(texture) = textures.get(tex_key) {
                    self.draw_texture(texture, x, y, *width, *height, shape.anchor, shape.color);
                }
            }
        }
    }
}

/// Faint world-unit grid with coordinate labels along the screen edges.
///
/// Line positions are projected through the world camera, then drawn with
/// the screen painter so the labels stay glued to the viewport edges.
fn draw_grid<D: RaylibDraw>(
    ui: &mut Painter<'_, D>,
    world_camera: &dyn Camera,
    grid: &GridOverlay,
    screen: &ScreenSize,
) {
    let faint = Color::new(255, 255, 255, 16);
    let (min_x, min_y, _, _) = world_camera.from_screen(0.0, 0.0, 0.0, 0.0);
    let (max_x, max_y, _, _) =
        world_camera.from_screen(screen.w as f32, screen.h as f32, 0.0, 0.0);

    let mut x = (min_x / grid.spacing).floor() * grid.spacing;
    while x <= max_x {
        let (sx, _, _, _) = world_camera.to_screen(x, 0.0, 0.0, 0.0);
        ui.draw_line(sx as f32, 0.0, sx as f32, screen.h as f32, faint);
        ui.draw_string(
            &format!("{}", x.round()),
            sx as f32,
            10.0,
            10,
            Anchor::Top,
            Color::WHITE,
        );
        x += grid.spacing;
    }
    let mut y = (min_y / grid.spacing).floor() * grid.spacing;
    while y <= max_y {
        let (_, sy, _, _) = world_camera.to_screen(0.0, y, 0.0, 0.0);
        ui.draw_line(0.0, sy as f32, screen.w as f32, sy as f32, faint);
        ui.draw_string(
            &format!("{}", y.round()),
            10.0,
            sy as f32,
            10,
            Anchor::Left,
            Color::WHITE,
        );
        y += grid.spacing;
    }
}

/// Score readout, flashes, game-over screen, and the high-score list.
fn draw_aim_hud<D: RaylibDraw>(
    ui: &mut Painter<'_, D>,
    state: &AimState,
    scoreboard: &Scoreboard,
    screen: &ScreenSize,
) {
    let (w, h) = (screen.w as f32, screen.h as f32);

    ui.draw_string(
        &format!("Score: {}", state.score.round()),
        w / 2.0,
        h / 2.0,
        32,
        Anchor::Top,
        Color::WHITE,
    );
    ui.draw_string(
        &format!("Lives: {}", state.lives),
        w / 2.0,
        h / 2.0 + 40.0,
        32,
        Anchor::Top,
        Color::WHITE,
    );

    if state.game_over {
        ui.draw_string(
            "Game Over",
            w / 2.0,
            h / 2.0 - 120.0,
            48,
            Anchor::Top,
            Color::new(170, 0, 0, 255),
        );
        if state.highscore {
            ui.draw_string(
                "!!! NEW HIGHSCORE !!!",
                w / 2.0,
                h / 2.0 + h / 8.0,
                24,
                Anchor::Top,
                Color::new(0, 170, 0, 255),
            );
        }
        if state.restart_delay <= 0.0 {
            ui.draw_string(
                "Click anywhere to play again",
                w / 2.0,
                h / 2.0 + h / 4.0,
                24,
                Anchor::Top,
                Color::new(170, 170, 0, 255),
            );
        }
    }

    if state.hurt > 0.0 {
        let alpha = (state.hurt * 0.5 * 255.0) as u8;
        ui.fill_rectangle(0.0, 0.0, w, h, Anchor::TopLeft, Color::new(255, 0, 0, alpha));
    }
    if state.bonus > 0.0 {
        let alpha = (state.bonus * 0.5 * 255.0) as u8;
        ui.fill_rectangle(0.0, 0.0, w, h, Anchor::TopLeft, Color::new(0, 255, 0, alpha));
    }

    if !scoreboard.scores().is_empty() {
        ui.draw_string("Highscores", 10.0, 20.0, 16, Anchor::TopLeft, Color::YELLOW);
        for (index, score) in scoreboard.scores().iter().enumerate() {
            ui.draw_string(
                &format!("{}", score.round()),
                18.0,
                24.0 + 16.0 * (index as f32 + 1.0),
                16,
                Anchor::TopLeft,
                Color::WHITE,
            );
        }
    }
}

/// Draw the whole frame into the render target, then blit to the window.
pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    thread: NonSend<raylib::RaylibThread>,
    mut target: NonSendMut<RenderTarget>,
    textures: NonSend<TextureStore>,
    view: (
        Option<Res<WorldCameraRes>>,
        Res<ScreenSize>,
        Res<WindowSize>,
    ),
    overlays: (
        Option<Res<DebugMode>>,
        Option<Res<GridOverlay>>,
        Option<Res<AimState>>,
        Option<Res<Scoreboard>>,
    ),
    frame: (Res<WorldTime>, Res<InputState>, Res<ChunkStore>),
    world_shapes: Query<(&MapPosition, &Shape, Option<&ZIndex>)>,
    ui_shapes: Query<(&ScreenPosition, &Shape, Option<&ZIndex>)>,
    chains: Query<(&MapPosition, &KinematicChain, Option<&Trace>)>,
    movers: Query<(&MapPosition, &RigidBody, Option<&CircleCollider>)>,
) {
    let (world_camera, screen, window) = view;
    let (debug, grid, aim, scoreboard) = overlays;
    let (time, input, chunks) = frame;

    let screen_camera = ScreenCamera;
    let mut d = rl.begin_drawing(&thread);

    {
        let mut d2 = d.begin_texture_mode(&thread, &mut target.texture);
        {
            let mut ui = Painter::new(&mut d2, &screen_camera);
            ui.clear(Color::BLACK);
        }

        if let (Some(grid), Some(camera)) = (&grid, &world_camera) {
            let mut ui = Painter::new(&mut d2, &screen_camera);
            draw_grid(&mut ui, &camera.0, grid, &screen);
        }

        // World pass: chunk tiles, shapes, chains, velocity arrows.
        if let Some(camera) = &world_camera {
            let mut painter = Painter::new(&mut d2, &camera.0);
            let tile_color = Color::new(191, 64, 64, 255);
            for (_, chunk) in chunks.iter() {
                for tile in chunk.boxes() {
                    painter.draw_rectangle(
                        tile.center.x,
                        tile.center.y,
                        tile.size.x,
                        tile.size.y,
                        Anchor::Center,
                        tile_color,
                    );
                }
            }

            let mut sorted: Vec<_> = world_shapes
                .iter()
                .map(|(p, s, z)| (p, s, z.copied().unwrap_or(ZIndex(0))))
                .collect();
            sorted.sort_by_key(|(_, _, z)| *z);
            for (position, shape, _) in sorted {
                painter.draw_shape(position.pos.x, position.pos.y, shape, &textures);
            }

            for (position, chain, trace) in chains.iter() {
                let dot = {
                    let (_, _, r, _) = painter.camera().from_screen(0.0, 0.0, 3.0, 0.0);
                    r
                };
                for index in 0..chain.len() {
                    let joint = chain.joint(position.pos, index);
                    let tip = chain.tip(position.pos, index);
                    painter.draw_line(joint.x, joint.y, tip.x, tip.y, Color::WHITE);
                    if index == 0 {
                        painter.fill_circle(joint.x, joint.y, dot, Anchor::Center, Color::GRAY);
                    }
                    painter.fill_circle(tip.x, tip.y, dot, Anchor::Center, Color::GRAY);
                }
                if let Some(trace) = trace {
                    let hue = (time.elapsed.sin() * 180.0) + 180.0;
                    let color = Color::color_from_hsv(hue, 0.5, 0.75);
                    for pair in trace.points.windows(2) {
                        painter.draw_line(pair[0].x, pair[0].y, pair[1].x, pair[1].y, color);
                    }
                }
            }

            for (position, body, _) in movers.iter() {
                painter.draw_vector(
                    body.velocity * 0.25,
                    position.pos.x,
                    position.pos.y,
                    Color::WHITE,
                );
            }
        }

        // UI pass: screen-space shapes, then the aim HUD on top.
        {
            let mut ui = Painter::new(&mut d2, &screen_camera);

            let mut sorted: Vec<_> = ui_shapes
                .iter()
                .map(|(p, s, z)| (p, s, z.copied().unwrap_or(ZIndex(0))))
                .collect();
            sorted.sort_by_key(|(_, _, z)| *z);
            for (position, shape, _) in sorted {
                ui.draw_shape(position.pos.x, position.pos.y, shape, &textures);
            }

            if let (Some(state), Some(board)) = (&aim, &scoreboard) {
                draw_aim_hud(&mut ui, state, board, &screen);
            }

            if debug.is_some() {
                let ms = time.delta * 1000.0;
                let fps = if time.delta > 0.0 { 1.0 / time.delta } else { 0.0 };
                ui.draw_string(
                    &format!("ft: {:.2}ms | fps: {:.0}", ms, fps),
                    10.0,
                    10.0,
                    10,
                    Anchor::TopLeft,
                    Color::WHITE,
                );
                if let Some(camera) = &world_camera {
                    let cam = &camera.0;
                    ui.draw_string(
                        &format!(
                            "camera: ({:.2}, {:.2}) zoom: {:.2}",
                            cam.position.x, cam.position.y, cam.zoom
                        ),
                        10.0,
                        (screen.h - 20) as f32,
                        10,
                        Anchor::TopLeft,
                        Color::WHITE,
                    );
                    let (wx, wy, _, _) =
                        cam.from_screen(input.cursor.x, input.cursor.y, 0.0, 0.0);
                    ui.draw_string(
                        &format!(
                            "cursor: ({:.0}, {:.0}) world: ({:.3}, {:.3})",
                            input.cursor.x, input.cursor.y, wx, wy
                        ),
                        10.0,
                        22.0,
                        10,
                        Anchor::TopLeft,
                        Color::WHITE,
                    );
                }
            }
        }

        // Debug collider outlines in world space.
        if debug.is_some() {
            if let Some(camera) = &world_camera {
                let mut painter = Painter::new(&mut d2, &camera.0);
                for (position, _, collider) in movers.iter() {
                    if let Some(collider) = collider {
                        painter.draw_circle(
                            position.pos.x,
                            position.pos.y,
                            collider.radius,
                            Anchor::Center,
                            Color::RED,
                        );
                    }
                    // Position cross.
                    let (_, _, arm, _) = camera.0.from_screen(0.0, 0.0, 5.0, 0.0);
                    painter.draw_line(
                        position.pos.x - arm,
                        position.pos.y,
                        position.pos.x + arm,
                        position.pos.y,
                        Color::GREEN,
                    );
                    painter.draw_line(
                        position.pos.x,
                        position.pos.y - arm,
                        position.pos.x,
                        position.pos.y + arm,
                        Color::GREEN,
                    );
                }
            }
        }
    }

    // Scale the render target into the window, preserving aspect ratio.
    d.clear_background(Color::BLACK);
    let dest = window.letterbox(target.render_width, target.render_height);
    target.blit(&mut d, dest);
}

//! Game configuration resource.
//!
//! Settings loaded from an INI file, with safe defaults so the demos start
//! without one.
//!
//! # Configuration file format
//!
//! ```ini
//! [render]
//! width = 640
//! height = 360
//!
//! [window]
//! width = 1280
//! height = 720
//! fullscreen = false
//! vsync = true
//! target_fps = 120
//!
//! [game]
//! pixels_per_unit = 64
//! time_scale = 1.0
//! scoreboard = ./scores.txt
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

const DEFAULT_RENDER_WIDTH: u32 = 640;
const DEFAULT_RENDER_HEIGHT: u32 = 360;
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_TARGET_FPS: u32 = 120;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FULLSCREEN: bool = false;
const DEFAULT_PIXELS_PER_UNIT: f32 = 64.0;
const DEFAULT_TIME_SCALE: f32 = 1.0;
const DEFAULT_SCOREBOARD_PATH: &str = "./scores.txt";
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Render, window, and gameplay settings.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    /// Internal render width in pixels.
    pub render_width: u32,
    /// Internal render height in pixels.
    pub render_height: u32,
    /// Window width in pixels.
    pub window_width: u32,
    /// Window height in pixels.
    pub window_height: u32,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Start in fullscreen mode.
    pub fullscreen: bool,
    /// World-camera scale between world units and pixels.
    pub pixels_per_unit: f32,
    /// Simulation speed multiplier; 0 freezes time-driven systems.
    pub time_scale: f32,
    /// Where the aim-trainer scoreboard persists its scores.
    pub scoreboard_path: PathBuf,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Safe default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            fullscreen: DEFAULT_FULLSCREEN,
            pixels_per_unit: DEFAULT_PIXELS_PER_UNIT,
            time_scale: DEFAULT_TIME_SCALE,
            scoreboard_path: PathBuf::from(DEFAULT_SCOREBOARD_PATH),
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Defaults with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file. Missing values retain their
    /// current (default) values.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("failed to load config file: {}", e))?;

        // [render] section
        if let Some(width) = config.getuint("render", "width").ok().flatten() {
            self.render_width = width as u32;
        }
        if let Some(height) = config.getuint("render", "height").ok().flatten() {
            self.render_height = height as u32;
        }

        // [window] section
        if let Some(width) = config.getuint("window", "width").ok().flatten() {
            self.window_width = width as u32;
        }
        if let Some(height) = config.getuint("window", "height").ok().flatten() {
            self.window_height = height as u32;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }
        if let Some(fullscreen) = config.getbool("window", "fullscreen").ok().flatten() {
            self.fullscreen = fullscreen;
        }

        // [game] section
        if let Some(ppu) = config.getfloat("game", "pixels_per_unit").ok().flatten() {
            self.pixels_per_unit = ppu as f32;
        }
        if let Some(scale) = config.getfloat("game", "time_scale").ok().flatten() {
            self.time_scale = scale as f32;
        }
        if let Some(path) = config.get("game", "scoreboard") {
            self.scoreboard_path = PathBuf::from(path);
        }

        info!(
            "loaded config: {}x{} render, {}x{} window, fps={}, ppu={}, time_scale={}",
            self.render_width,
            self.render_height,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.pixels_per_unit,
            self.time_scale
        );

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let config = GameConfig::new();
        assert_eq!(config.render_width, 640);
        assert_eq!(config.render_height, 360);
        assert_eq!(config.pixels_per_unit, 64.0);
        assert_eq!(config.time_scale, 1.0);
    }

    #[test]
    fn missing_file_is_an_error_but_defaults_survive() {
        let mut config = GameConfig::with_path("/nonexistent/config.ini");
        assert!(config.load_from_file().is_err());
        assert_eq!(config.render_width, 640);
    }
}

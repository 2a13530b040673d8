//! ECS resources.
//!
//! Submodules overview
//! - [`aimstate`] – mutable state of an aim-trainer run
//! - [`audio`] – bridge to the background audio thread
//! - [`camera`] – world/screen coordinate transforms and the active camera
//! - [`chunk`] / [`chunkstore`] – tile collision maps and their registry
//! - [`debugmode`] – marker enabling debug overlays
//! - [`gameconfig`] – INI-backed settings
//! - [`gridoverlay`] – marker enabling the coordinate grid
//! - [`input`] – per-frame keyboard/mouse/cursor state
//! - [`rendertarget`] – fixed-resolution framebuffer
//! - [`scoreboard`] – persisted top-5 high scores
//! - [`screensize`] / [`windowsize`] – render vs window resolution
//! - [`texturestore`] – loaded textures by name
//! - [`worldtime`] – simulation clock with time scaling

pub mod aimstate;
pub mod audio;
pub mod camera;
pub mod chunk;
pub mod chunkstore;
pub mod debugmode;
pub mod gameconfig;
pub mod gridoverlay;
pub mod input;
pub mod rendertarget;
pub mod scoreboard;
pub mod screensize;
pub mod texturestore;
pub mod windowsize;
pub mod worldtime;

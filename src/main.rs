//! Anchorage main entry point.
//!
//! A small 2D demo engine written in Rust using:
//! - **raylib** for windowing, graphics, input, and audio
//! - **bevy_ecs** for entity-component-system architecture
//!
//! The executable hosts three self-contained demos sharing the same
//! rendering/camera/collision core:
//! - `tiles` – a keyboard-driven character resolved against a tile map
//! - `kinematics` – an oscillating bone chain tracing curves
//! - `aim` – an aim trainer with scoring and a persistent high-score board
//!
//! # Main loop
//!
//! 1. Initialize the raylib window, the ECS world, and the audio thread
//! 2. Run the selected demo's setup (camera, chunk/scoreboard loading,
//!    entity spawning) — the loop does not start until setup succeeds
//! 3. Each frame: update time and input, advance the simulation systems,
//!    and render through the fixed-resolution target
//! 4. Shut the audio thread down on exit
//!
//! # Running
//!
//! ```sh
//! cargo run --release -- --demo tiles
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod components;
mod events;
mod game;
mod resources;
mod systems;

use std::path::PathBuf;

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::{Parser, ValueEnum};

use crate::events::collision::chunk_collision_observer;
use crate::events::switchdebug::switch_debug_observer;
use crate::resources::audio::{setup_audio, shutdown_audio};
use crate::resources::chunkstore::ChunkStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::input::InputState;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::resources::windowsize::WindowSize;
use crate::resources::worldtime::WorldTime;
use crate::systems::aim::{aim_click, aim_spawn, aim_targets};
use crate::systems::audio::{
    forward_audio_cmds, poll_audio_messages, update_bevy_audio_cmds, update_bevy_audio_messages,
};
use crate::systems::camerafollow::camera_follow;
use crate::systems::collision::chunk_collision;
use crate::systems::input::update_input_state;
use crate::systems::inputcontroller::input_character_controller;
use crate::systems::kinematics::{chain_motion, trace_accumulate};
use crate::systems::lifetime::lifetime_system;
use crate::systems::movement::movement;
use crate::systems::particles::particle_update;
use crate::systems::render::render_system;
use crate::systems::time::update_world_time;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Demo {
    /// Tile-collision demo with a keyboard-driven character.
    Tiles,
    /// Kinematic bone chain tracing curves.
    Kinematics,
    /// Aim trainer with scoring and high scores.
    Aim,
}

/// Anchorage 2D demos
#[derive(Parser)]
#[command(version, about = "A small 2D demo engine: tiles, kinematics, and an aim trainer.")]
struct Cli {
    /// Which demo to run.
    #[arg(long, value_enum, default_value_t = Demo::Tiles)]
    demo: Demo,

    /// Path to the INI configuration file (defaults to ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Directory containing demo assets (worlds, audio).
    #[arg(long, value_name = "PATH", default_value = "./assets")]
    assets: PathBuf,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    config.load_from_file().ok(); // ignore errors, use defaults

    // --------------- Raylib window & render target ---------------
    let mut builder = raylib::init();
    builder
        .size(config.window_width as i32, config.window_height as i32)
        .resizable()
        .title("Anchorage");
    if config.vsync {
        builder.vsync();
    }
    let (mut rl, thread) = builder.build();
    rl.set_target_fps(config.target_fps);
    if config.fullscreen && !rl.is_window_fullscreen() {
        rl.toggle_fullscreen();
    }

    let render_target = RenderTarget::new(&mut rl, &thread, config.render_width, config.render_height)
        .expect("failed to create render target");

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WorldTime::default().with_time_scale(config.time_scale));
    // ScreenSize is the internal render resolution; WindowSize tracks the
    // actual window and is refreshed every frame.
    world.insert_resource(ScreenSize {
        w: config.render_width as i32,
        h: config.render_height as i32,
    });
    world.insert_resource(WindowSize {
        w: rl.get_screen_width(),
        h: rl.get_screen_height(),
    });
    world.insert_resource(InputState::default());
    world.insert_resource(ChunkStore::new());
    world.insert_non_send_resource(render_target);
    world.insert_non_send_resource(TextureStore::new());

    setup_audio(&mut world); // AudioBridge + message mailboxes

    world.insert_resource(config);

    world.spawn(Observer::new(switch_debug_observer));
    world.spawn(Observer::new(chunk_collision_observer));
    // Observers must be registered before any system can trigger them.
    world.flush();

    // --------------- Demo setup ---------------
    match cli.demo {
        Demo::Tiles => game::setup_tiles(&mut world, &mut rl, &thread, &cli.assets)
            .expect("failed to set up tiles demo"),
        Demo::Kinematics => {
            game::setup_kinematics(&mut world).expect("failed to set up kinematics demo")
        }
        Demo::Aim => game::setup_aim(&mut world, &cli.assets).expect("failed to set up aim demo"),
    }

    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    // --------------- Schedule ---------------
    let mut update = Schedule::default();
    update.add_systems(update_input_state);
    update.add_systems(
        // audio systems must run together, in order
        (
            update_bevy_audio_cmds,
            forward_audio_cmds,
            poll_audio_messages,
            update_bevy_audio_messages,
        )
            .chain(),
    );
    update.add_systems(input_character_controller.after(update_input_state));
    update.add_systems(movement.after(input_character_controller));
    update.add_systems(chunk_collision.after(movement));
    update.add_systems(camera_follow.after(chunk_collision));
    update.add_systems(chain_motion);
    update.add_systems(trace_accumulate.after(chain_motion));
    update.add_systems(aim_click.after(update_input_state));
    update.add_systems(aim_spawn.after(aim_click));
    update.add_systems(aim_targets.after(aim_click));
    update.add_systems(particle_update);
    update.add_systems(lifetime_system.after(particle_update));
    update.add_systems(
        render_system
            .after(camera_follow)
            .after(trace_accumulate)
            .after(aim_targets)
            .after(lifetime_system),
    );

    update
        .initialize(&mut world)
        .expect("failed to initialize schedule");

    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let dt = world
            .non_send_resource::<raylib::RaylibHandle>()
            .get_frame_time();
        update_world_time(&mut world, dt);

        update.run(&mut world);

        world.clear_trackers(); // Clear changed components for next frame

        // The window may have been resized since last frame.
        let (new_w, new_h) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (rl.get_screen_width(), rl.get_screen_height())
        };
        {
            let mut window_size = world.resource_mut::<WindowSize>();
            window_size.w = new_w;
            window_size.h = new_h;
        }
    }
    shutdown_audio(&mut world);
}

//! Demo scene setup.
//!
//! Each demo gets one setup function that loads its assets and populates the
//! ECS world before the frame loop starts. Loading is synchronous and
//! fallible: a demo either has everything it needs when the loop begins or
//! setup aborts with an error.

use std::path::Path;

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::anchor::Anchor;
use crate::components::circlecollider::CircleCollider;
use crate::components::inputcontrolled::{CameraFollowed, InputControlled};
use crate::components::kinematicchain::KinematicChain;
use crate::components::mapposition::MapPosition;
use crate::components::rigidbody::RigidBody;
use crate::components::shape::{Shape, ShapeKind};
use crate::components::trace::Trace;
use crate::components::zindex::ZIndex;
use crate::events::audio::AudioCmd;
use crate::resources::aimstate::AimState;
use crate::resources::camera::{WorldCamera, WorldCameraRes};
use crate::resources::chunk::{Chunk, ChunkDescriptor};
use crate::resources::chunkstore::ChunkStore;
use crate::resources::gameconfig::GameConfig;
use crate::resources::gridoverlay::GridOverlay;
use crate::resources::scoreboard::Scoreboard;
use crate::resources::screensize::ScreenSize;
use crate::resources::texturestore::TextureStore;
use crate::systems::aim::spawn_first_target;

/// Per-frame velocity the character gains while a direction key is held.
const CHARACTER_IMPULSE: f32 = 1.0;
/// Per-frame velocity damping for the character.
const CHARACTER_DAMPING: f32 = 0.75;
const CHARACTER_RADIUS: f32 = 0.5;

fn insert_world_camera(world: &mut World) {
    let config = world.resource::<GameConfig>();
    let camera = WorldCamera::new(
        config.render_width as f32,
        config.render_height as f32,
        config.pixels_per_unit,
    );
    world.insert_resource(WorldCameraRes(camera));
}

/// Tile-collision demo: a chunk loaded from a world manifest, a keyboard
/// driven character resolved against it, and a coordinate grid overlay.
pub fn setup_tiles(
    world: &mut World,
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    assets_dir: &Path,
) -> Result<(), String> {
    insert_world_camera(world);
    world.insert_resource(GridOverlay::default());

    let worlds_dir = assets_dir.join("worlds");
    let manifest_path = worlds_dir.join("world.json");
    let manifest = std::fs::read_to_string(&manifest_path)
        .map_err(|e| format!("failed to read world manifest {:?}: {}", manifest_path, e))?;
    let descriptor: ChunkDescriptor = serde_json::from_str(&manifest)
        .map_err(|e| format!("failed to parse world manifest {:?}: {}", manifest_path, e))?;
    let chunk = Chunk::load(&descriptor, &worlds_dir)?;
    let (width, height) = chunk.dimensions();
    log::info!(
        "loaded chunk '{}': {}x{} tiles, {} solid",
        descriptor.name,
        width,
        height,
        chunk.solid_count()
    );

    // Optional decorative texture; the demo runs fine without it.
    let texture_path = assets_dir.join("textures/emblem.png");
    if texture_path.exists() {
        match rl.load_texture(thread, &texture_path.display().to_string()) {
            Ok(texture) => {
                world
                    .non_send_resource_mut::<TextureStore>()
                    .add("emblem", texture);
                world.spawn((
                    MapPosition::new(4.0, 1.0),
                    Shape::new(
                        ShapeKind::Sprite {
                            tex_key: "emblem",
                            width: 1.0,
                            height: 1.0,
                        },
                        Anchor::Center,
                        Color::WHITE,
                    ),
                    ZIndex(0),
                ));
            }
            Err(e) => log::warn!("failed to load texture {:?}: {}", texture_path, e),
        }
    }

    let start = Vector2 {
        x: 2.5 * chunk.tile_size(),
        y: 2.5 * chunk.tile_size(),
    };
    world
        .resource_mut::<ChunkStore>()
        .insert(descriptor.name.clone(), chunk);

    world.spawn((
        MapPosition {
            pos: start,
        },
        RigidBody::with_damping(CHARACTER_DAMPING),
        InputControlled::new(CHARACTER_IMPULSE),
        CircleCollider::new(CHARACTER_RADIUS, descriptor.name),
        CameraFollowed,
        Shape::circle(CHARACTER_RADIUS, false, Color::WHITE),
        ZIndex(1),
    ));

    Ok(())
}

/// Kinematic-chain demo: three bones sweeping circles of different speeds
/// and lengths, with a trace left by the terminal tip.
pub fn setup_kinematics(world: &mut World) -> Result<(), String> {
    insert_world_camera(world);

    let mut chain = KinematicChain::new();
    let root = chain.push_bone(None, 1.0, 1.0)?;
    let middle = chain.push_bone(Some(root), 1.5, 0.75)?;
    chain.push_bone(Some(middle), 2.5, 0.5)?;

    world.spawn((MapPosition::new(0.0, 0.0), chain, Trace::new()));

    Ok(())
}

/// Aim-trainer demo: scoreboard, run state, sound effects, and the opening
/// long-lived target. Operates purely in screen space (no world camera).
pub fn setup_aim(world: &mut World, assets_dir: &Path) -> Result<(), String> {
    let scoreboard_path = world.resource::<GameConfig>().scoreboard_path.clone();
    world.insert_resource(Scoreboard::with_path(scoreboard_path));
    world.insert_resource(AimState::new());

    // Sound effects load on the audio thread; a missing file logs a warning
    // there and the matching PlayFx commands are ignored.
    let audio_dir = assets_dir.join("audio");
    {
        let mut cmds = world.resource_mut::<Messages<AudioCmd>>();
        for id in ["hit", "break", "miss"] {
            cmds.write(AudioCmd::LoadFx {
                id: id.to_string(),
                path: audio_dir.join(format!("{}.wav", id)).display().to_string(),
            });
        }
    }

    let screen = *world.resource::<ScreenSize>();
    let mut rng = fastrand::Rng::new();
    let mut commands = world.commands();
    spawn_first_target(&mut commands, &screen, &mut rng);
    world.flush();

    Ok(())
}

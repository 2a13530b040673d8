//! Engine tick integration tests for movement, collision resolution,
//! lifetimes, kinematics, and the aim-trainer systems.

use bevy_ecs::prelude::*;
use raylib::prelude::Vector2;

use anchorage::components::circlecollider::CircleCollider;
use anchorage::components::inputcontrolled::{CameraFollowed, InputControlled};
use anchorage::components::kinematicchain::KinematicChain;
use anchorage::components::lifetime::Lifetime;
use anchorage::components::mapposition::MapPosition;
use anchorage::components::particle::Particle;
use anchorage::components::rigidbody::RigidBody;
use anchorage::components::screenposition::ScreenPosition;
use anchorage::components::shape::Shape;
use anchorage::components::target::Target;
use anchorage::components::trace::Trace;
use anchorage::events::audio::AudioCmd;
use anchorage::resources::aimstate::AimState;
use anchorage::resources::camera::{WorldCamera, WorldCameraRes};
use anchorage::resources::chunk::Chunk;
use anchorage::resources::chunkstore::ChunkStore;
use anchorage::resources::input::InputState;
use anchorage::resources::scoreboard::Scoreboard;
use anchorage::resources::screensize::ScreenSize;
use anchorage::resources::worldtime::WorldTime;
use anchorage::systems::aim::{aim_click, aim_targets};
use anchorage::systems::camerafollow::camera_follow;
use anchorage::systems::collision::{chunk_collision, find_resolution_point};
use anchorage::systems::inputcontroller::input_character_controller;
use anchorage::systems::kinematics::{chain_motion, trace_accumulate};
use anchorage::systems::lifetime::lifetime_system;
use anchorage::systems::movement::movement;
use anchorage::systems::particles::particle_update;
use anchorage::systems::time::update_world_time;
use raylib::prelude::Color;

const EPSILON: f32 = 1e-5;

fn approx_eq(a: f32, b: f32) -> bool {
    (a - b).abs() < EPSILON
}

fn make_world(delta: f32) -> World {
    let mut world = World::new();
    world.insert_resource(WorldTime {
        elapsed: 0.0,
        delta,
        time_scale: 1.0,
    });
    world.insert_resource(ScreenSize { w: 640, h: 360 });
    world.init_resource::<Messages<AudioCmd>>();
    world
}

fn tick_movement(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(movement);
    schedule.run(world);
}

fn tick_controller(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(input_character_controller);
    schedule.run(world);
}

fn tick_collision(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(chunk_collision);
    schedule.run(world);
}

fn tick_camera_follow(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(camera_follow);
    schedule.run(world);
}

fn tick_lifetime(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(lifetime_system);
    schedule.run(world);
}

fn tick_particles(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(particle_update);
    schedule.run(world);
}

fn tick_kinematics(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems((chain_motion, trace_accumulate).chain());
    schedule.run(world);
}

fn tick_aim_click(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(aim_click);
    schedule.run(world);
}

fn tick_aim_targets(world: &mut World) {
    let mut schedule = Schedule::default();
    schedule.add_systems(aim_targets);
    schedule.run(world);
}

// ==================== MOVEMENT ====================

#[test]
fn movement_integrates_velocity_into_position() {
    let mut world = make_world(0.0);
    let entity = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            RigidBody::with_velocity(Vector2 { x: 10.0, y: 0.0 }),
        ))
        .id();

    update_world_time(&mut world, 0.5);
    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 5.0));
    assert!(approx_eq(pos.pos.y, 0.0));
}

#[test]
fn movement_damps_velocity_once_per_frame() {
    let mut world = make_world(0.0);
    let mut body = RigidBody::with_damping(0.75);
    body.velocity = Vector2 { x: 10.0, y: 0.0 };
    let entity = world.spawn((MapPosition::new(0.0, 0.0), body)).id();

    update_world_time(&mut world, 1.0);
    tick_movement(&mut world);

    // Damping applies before integration: velocity 7.5, position 7.5.
    let body = world.get::<RigidBody>(entity).unwrap();
    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(body.velocity.x, 7.5));
    assert!(approx_eq(pos.pos.x, 7.5));

    // A second frame damps again regardless of the delta value.
    update_world_time(&mut world, 0.0);
    tick_movement(&mut world);
    let body = world.get::<RigidBody>(entity).unwrap();
    assert!(approx_eq(body.velocity.x, 7.5 * 0.75));
}

#[test]
fn time_scale_freezes_integration() {
    let mut world = make_world(0.0);
    world.resource_mut::<WorldTime>().time_scale = 0.0;
    let entity = world
        .spawn((
            MapPosition::new(1.0, 1.0),
            RigidBody::with_velocity(Vector2 { x: 10.0, y: 10.0 }),
        ))
        .id();

    update_world_time(&mut world, 0.5);
    tick_movement(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 1.0));
    assert!(approx_eq(pos.pos.y, 1.0));
}

// ==================== INPUT CONTROLLER ====================

#[test]
fn held_direction_key_accumulates_impulse() {
    let mut world = make_world(0.0);
    let mut input = InputState::default();
    input.direction_up.active = true;
    world.insert_resource(input);

    let entity = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            RigidBody::new(),
            InputControlled::new(1.0),
        ))
        .id();

    tick_controller(&mut world);

    let body = world.get::<RigidBody>(entity).unwrap();
    assert!(approx_eq(body.velocity.x, 0.0));
    assert!(approx_eq(body.velocity.y, -1.0));

    // Releasing the key leaves the velocity alone and zeroes the direction.
    world.resource_mut::<InputState>().direction_up.active = false;
    tick_controller(&mut world);
    let body = world.get::<RigidBody>(entity).unwrap();
    let controlled = world.get::<InputControlled>(entity).unwrap();
    assert!(approx_eq(body.velocity.y, -1.0));
    assert!(approx_eq(controlled.direction.x, 0.0));
    assert!(approx_eq(controlled.direction.y, 0.0));
}

#[test]
fn diagonal_input_is_normalized() {
    let mut world = make_world(0.0);
    let mut input = InputState::default();
    input.direction_up.active = true;
    input.direction_right.active = true;
    world.insert_resource(input);

    let entity = world
        .spawn((
            MapPosition::new(0.0, 0.0),
            RigidBody::new(),
            InputControlled::new(2.0),
        ))
        .id();

    tick_controller(&mut world);

    let body = world.get::<RigidBody>(entity).unwrap();
    let inv_sqrt2 = 1.0 / 2.0_f32.sqrt();
    assert!(approx_eq(body.velocity.x, 2.0 * inv_sqrt2));
    assert!(approx_eq(body.velocity.y, -2.0 * inv_sqrt2));
}

// ==================== CHUNK COLLISION ====================

/// One solid tile of side 1 centered at (0.5, 0.5).
fn single_tile_world() -> World {
    let mut world = make_world(0.0);
    let mut store = ChunkStore::new();
    store.insert("test", Chunk::parse("#", 1, 1, 1.0));
    world.insert_resource(store);
    world
}

#[test]
fn penetration_resolves_in_one_iteration() {
    let mut world = single_tile_world();
    // Circle of radius 0.5 at (1.3, 0.5): the nearest tile surface point is
    // (1.0, 0.5), penetration depth 0.2.
    let entity = world
        .spawn((
            MapPosition::new(1.3, 0.5),
            CircleCollider::new(0.5, "test"),
        ))
        .id();

    tick_collision(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 1.5));
    assert!(approx_eq(pos.pos.y, 0.5));

    // Fixed point reached: no further resolution point exists.
    let store = world.resource::<ChunkStore>();
    let chunk = store.get("test").unwrap();
    assert!(find_resolution_point(chunk, pos.pos, 0.5).is_none());
}

#[test]
fn clear_circle_is_untouched() {
    let mut world = single_tile_world();
    let entity = world
        .spawn((
            MapPosition::new(3.0, 3.0),
            CircleCollider::new(0.5, "test"),
        ))
        .id();

    tick_collision(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 3.0));
    assert!(approx_eq(pos.pos.y, 3.0));
}

#[test]
fn missing_chunk_key_is_ignored() {
    let mut world = single_tile_world();
    let entity = world
        .spawn((
            MapPosition::new(1.3, 0.5),
            CircleCollider::new(0.5, "nope"),
        ))
        .id();

    tick_collision(&mut world);

    let pos = world.get::<MapPosition>(entity).unwrap();
    assert!(approx_eq(pos.pos.x, 1.3));
}

#[test]
fn find_resolution_point_picks_nearest_surface() {
    let store = {
        let mut s = ChunkStore::new();
        // Two adjacent solid tiles.
        s.insert("pair", Chunk::parse("##", 2, 1, 1.0));
        s
    };
    let chunk = store.get("pair").unwrap();
    // Slightly overlapping the right tile's right edge.
    let point = find_resolution_point(chunk, Vector2 { x: 2.3, y: 0.5 }, 0.5).unwrap();
    assert!(approx_eq(point.x, 2.0));
    assert!(approx_eq(point.y, 0.5));
}

// ==================== CAMERA FOLLOW ====================

#[test]
fn camera_tracks_followed_entity() {
    let mut world = make_world(0.0);
    world.insert_resource(WorldCameraRes(WorldCamera::new(640.0, 360.0, 64.0)));
    world.spawn((MapPosition::new(4.0, -2.0), CameraFollowed));

    tick_camera_follow(&mut world);

    let camera = world.resource::<WorldCameraRes>();
    assert!(approx_eq(camera.0.position.x, 4.0));
    assert!(approx_eq(camera.0.position.y, -2.0));
}

// ==================== LIFETIME & PARTICLES ====================

#[test]
fn lifetime_despawns_expired_entities() {
    let mut world = make_world(0.0);
    let short = world
        .spawn((ScreenPosition::new(0.0, 0.0), Lifetime::new(0.3)))
        .id();
    let long = world
        .spawn((ScreenPosition::new(0.0, 0.0), Lifetime::new(10.0)))
        .id();

    update_world_time(&mut world, 0.5);
    tick_lifetime(&mut world);

    assert!(world.get_entity(short).is_err());
    assert!(world.get_entity(long).is_ok());
}

#[test]
fn particles_drag_and_fall() {
    let mut world = make_world(0.0);
    let entity = world
        .spawn((
            ScreenPosition::new(0.0, 0.0),
            Particle::new(Vector2 { x: 100.0, y: 0.0 }),
        ))
        .id();

    update_world_time(&mut world, 0.1);
    tick_particles(&mut world);

    let particle = world.get::<Particle>(entity).unwrap();
    let pos = world.get::<ScreenPosition>(entity).unwrap();
    // Position integrates the pre-update velocity, then drag and gravity
    // apply once for the frame.
    assert!(approx_eq(pos.pos.x, 10.0));
    assert!(approx_eq(particle.velocity.x, 98.0));
    assert!(approx_eq(particle.velocity.y, 20.0));
}

// ==================== KINEMATICS ====================

#[test]
fn chain_motion_sweeps_bone_circles() {
    let mut world = make_world(0.0);
    let mut chain = KinematicChain::new();
    chain.push_bone(None, 2.0, 1.5).unwrap();
    let entity = world.spawn((MapPosition::new(0.0, 0.0), chain)).id();

    world.resource_mut::<WorldTime>().elapsed = 0.25;
    tick_kinematics(&mut world);

    let chain = world.get::<KinematicChain>(entity).unwrap();
    let bone = &chain.bones()[0];
    assert!(approx_eq(bone.vector.x, 1.5 * 0.5_f32.sin()));
    assert!(approx_eq(bone.vector.y, 1.5 * 0.5_f32.cos()));
}

#[test]
fn trace_accumulates_only_while_time_advances() {
    let mut world = make_world(0.0);
    let mut chain = KinematicChain::new();
    let root = chain.push_bone(None, 1.0, 1.0).unwrap();
    chain.push_bone(Some(root), 1.0, 1.0).unwrap();
    let entity = world
        .spawn((MapPosition::new(0.0, 0.0), chain, Trace::new()))
        .id();

    update_world_time(&mut world, 0.016);
    tick_kinematics(&mut world);
    update_world_time(&mut world, 0.016);
    tick_kinematics(&mut world);

    assert_eq!(world.get::<Trace>(entity).unwrap().points.len(), 2);

    // Frozen time stops the trail.
    world.resource_mut::<WorldTime>().time_scale = 0.0;
    update_world_time(&mut world, 0.016);
    tick_kinematics(&mut world);
    assert_eq!(world.get::<Trace>(entity).unwrap().points.len(), 2);
}

// ==================== AIM TRAINER ====================

fn make_aim_world() -> World {
    let mut world = make_world(0.0);
    world.insert_resource(AimState::new());
    world.insert_resource(Scoreboard::new());
    world.insert_resource(InputState::default());
    world
}

fn spawn_test_target(world: &mut World, x: f32, y: f32, radius: f32) -> Entity {
    world
        .spawn((
            ScreenPosition::new(x, y),
            Target::new(radius, 3.0),
            Shape::circle(radius, true, Color::GREEN),
        ))
        .id()
}

#[test]
fn dead_center_hit_scores_with_bonus() {
    let mut world = make_aim_world();
    let target = spawn_test_target(&mut world, 100.0, 100.0, 20.0);
    {
        let mut input = world.resource_mut::<InputState>();
        input.mouse_left.just_pressed = true;
        input.cursor = Vector2 { x: 100.0, y: 100.0 };
    }

    tick_aim_click(&mut world);

    let state = world.resource::<AimState>();
    // Fresh target, perfect accuracy: 100 base + 0 progress + 100 bonus.
    assert!(approx_eq(state.score, 200.0));
    assert_eq!(state.hits, 1);
    assert_eq!(state.lives, 4);
    assert!(state.spawning);
    assert!(state.bonus > 0.0);
    assert!(world.get_entity(target).is_err());
}

#[test]
fn miss_bleeds_score_and_a_life() {
    let mut world = make_aim_world();
    spawn_test_target(&mut world, 100.0, 100.0, 20.0);
    world.resource_mut::<AimState>().score = 100.0;
    {
        let mut input = world.resource_mut::<InputState>();
        input.mouse_left.just_pressed = true;
        input.cursor = Vector2 { x: 300.0, y: 300.0 };
    }

    tick_aim_click(&mut world);

    let state = world.resource::<AimState>();
    assert!(approx_eq(state.score, 95.0));
    assert_eq!(state.lives, 2);
    assert!(state.hurt > 0.0);
    assert_eq!(state.hits, 0);
}

#[test]
fn last_life_ends_the_run_and_records_the_score() {
    let mut world = make_aim_world();
    spawn_test_target(&mut world, 100.0, 100.0, 20.0);
    {
        let mut state = world.resource_mut::<AimState>();
        state.score = 500.0;
        state.lives = 1;
    }
    {
        let mut input = world.resource_mut::<InputState>();
        input.mouse_left.just_pressed = true;
        input.cursor = Vector2 { x: 300.0, y: 300.0 };
    }

    tick_aim_click(&mut world);

    let state = world.resource::<AimState>();
    assert!(state.game_over);
    assert!(state.highscore);
    let board = world.resource::<Scoreboard>();
    assert_eq!(board.scores().len(), 1);
    assert!(approx_eq(board.scores()[0], 475.0));
}

#[test]
fn expired_target_costs_a_life() {
    let mut world = make_aim_world();
    let target = spawn_test_target(&mut world, 100.0, 100.0, 20.0);
    world.get_mut::<Target>(target).unwrap().age = 2.99;

    update_world_time(&mut world, 0.05);
    tick_aim_targets(&mut world);

    let state = world.resource::<AimState>();
    assert_eq!(state.lives, 2);
    assert!(state.hurt > 0.0);
    assert!(world.get_entity(target).is_err());
}

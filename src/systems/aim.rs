//! Aim-trainer gameplay systems.
//!
//! Three systems, all gated on the presence of the
//! [`AimState`](crate::resources::aimstate::AimState) resource:
//! - [`aim_spawn`] – timed target spawning once the run has started
//! - [`aim_click`] – hit-testing, scoring, misses, and restarts
//! - [`aim_targets`] – target aging/recoloring, expiry penalties, and decay
//!   of the screen-flash overlays
//!
//! Points scale with click accuracy and with how close the target was to
//! expiring; near-perfect hits grant an extra life and a bonus flash, and
//! misses bleed score and a life.

use bevy_ecs::prelude::*;
use raylib::prelude::{Color, Vector2};

use crate::components::anchor::Anchor;
use crate::components::lifetime::Lifetime;
use crate::components::particle::Particle;
use crate::components::screenposition::ScreenPosition;
use crate::components::shape::{Shape, ShapeKind};
use crate::components::target::Target;
use crate::events::audio::AudioCmd;
use crate::resources::aimstate::AimState;
use crate::resources::input::InputState;
use crate::resources::scoreboard::Scoreboard;
use crate::resources::screensize::ScreenSize;
use crate::resources::worldtime::WorldTime;

/// Default seconds a target stays clickable.
const TARGET_LIFETIME: f32 = 3.0;
/// Lifetime of the very first target, effectively forever.
const FIRST_TARGET_LIFETIME: f32 = 1.0e7;

/// Spawn one target at a random in-screen position.
pub fn spawn_target(
    commands: &mut Commands,
    screen: &ScreenSize,
    rng: &mut fastrand::Rng,
    lifetime: f32,
) {
    let radius = 20.0 + rng.f32() * 10.0;
    let x = radius + (screen.w as f32 - radius * 2.0) * rng.f32();
    let y = radius + (screen.h as f32 - radius * 2.0) * rng.f32();
    commands.spawn((
        ScreenPosition::new(x, y),
        Target::new(radius, lifetime),
        Shape::circle(radius, true, Color::GREEN),
    ));
}

/// Spawn the long-lived target that starts a run.
pub fn spawn_first_target(commands: &mut Commands, screen: &ScreenSize, rng: &mut fastrand::Rng) {
    spawn_target(commands, screen, rng, FIRST_TARGET_LIFETIME);
}

/// Timed spawn cycle; starts after the first hit.
pub fn aim_spawn(
    state: Option<ResMut<AimState>>,
    time: Res<WorldTime>,
    screen: Res<ScreenSize>,
    mut commands: Commands,
    mut rng: Local<fastrand::Rng>,
) {
    let Some(mut state) = state else {
        return;
    };
    if state.game_over || !state.spawning {
        return;
    }
    state.spawn_timer += time.delta;
    while state.spawn_timer >= state.spawn_interval {
        state.spawn_timer -= state.spawn_interval;
        spawn_target(&mut commands, &screen, &mut rng, TARGET_LIFETIME);
    }
}

/// Burst of decorative particles where a target died.
fn spawn_burst(
    commands: &mut Commands,
    rng: &mut fastrand::Rng,
    origin: Vector2,
    count: usize,
    spread: f32,
    color: Color,
) {
    for _ in 0..count {
        let angle = std::f32::consts::TAU * rng.f32();
        let velocity = Vector2 {
            x: angle.sin() * spread,
            y: -spread * 1.25 * rng.f32(),
        };
        let size = 10.0;
        let shape = if rng.bool() {
            Shape::new(
                ShapeKind::Rectangle {
                    width: size,
                    height: size,
                    filled: false,
                },
                Anchor::Center,
                color,
            )
        } else {
            Shape::circle(size / 2.0, false, color)
        };
        commands.spawn((
            ScreenPosition::new(origin.x, origin.y),
            Particle::new(velocity),
            Lifetime::new(1.0),
            shape,
        ));
    }
}

/// Floating text popup (score gain, accuracy word).
fn spawn_popup(
    commands: &mut Commands,
    origin: Vector2,
    text: String,
    size: i32,
    color: Color,
) {
    commands.spawn((
        ScreenPosition::new(origin.x, origin.y),
        Shape::new(
            ShapeKind::Text { text, size },
            Anchor::Center,
            color,
        ),
        Lifetime::new(1.0),
    ));
}

fn accuracy_word(accuracy: f32) -> &'static str {
    if accuracy > 0.95 {
        "Perfect!"
    } else if accuracy > 0.80 {
        "Amazing!"
    } else if accuracy > 0.50 {
        "Good"
    } else if accuracy > 0.25 {
        "Decent"
    } else {
        "Barely"
    }
}

/// Handle left clicks: hits, misses, and game-over restarts.
pub fn aim_click(
    state: Option<ResMut<AimState>>,
    input: Res<InputState>,
    screen: Res<ScreenSize>,
    scoreboard: Option<ResMut<Scoreboard>>,
    targets: Query<(Entity, &ScreenPosition, &Target, &Shape)>,
    transient: Query<Entity, Or<(With<Target>, With<Particle>, With<Lifetime>)>>,
    mut audio: MessageWriter<AudioCmd>,
    mut commands: Commands,
    mut rng: Local<fastrand::Rng>,
) {
    let (Some(mut state), Some(mut scoreboard)) = (state, scoreboard) else {
        return;
    };
    if !input.mouse_left.just_pressed {
        return;
    }

    if state.game_over {
        if state.restart_delay <= 0.0 {
            // Clear the table and start over.
            for entity in transient.iter() {
                commands.entity(entity).try_despawn();
            }
            *state = AimState::new();
            spawn_first_target(&mut commands, &screen, &mut rng);
        }
        return;
    }

    let cursor = input.cursor;
    let mut hit = false;
    for (entity, position, target, shape) in targets.iter() {
        let distance = position.pos.distance_to(cursor);
        if distance >= target.radius {
            continue;
        }

        if state.hits == 0 {
            // First hit arms the timed spawn cycle.
            state.spawning = true;
        }
        state.hits += 1;
        state.spawn_interval = AimState::interval_for_hits(state.hits);

        let accuracy = 1.0 - distance / target.radius;
        let mut points = 100.0 + accuracy * accuracy * target.progress() * 100.0;
        if accuracy > 0.95 {
            points += 100.0;
            state.bonus = 1.0;
            state.lives += 1;
        }
        state.score += points;
        audio.write(AudioCmd::PlayFx {
            id: "hit".to_string(),
        });

        spawn_popup(
            &mut commands,
            Vector2 {
                x: position.pos.x,
                y: position.pos.y - 50.0,
            },
            format!("+{:.0}", points),
            20,
            Color::WHITE,
        );
        spawn_popup(
            &mut commands,
            position.pos,
            accuracy_word(accuracy).to_string(),
            32,
            Color::color_from_hsv(accuracy * 120.0, 1.0, 1.0),
        );
        spawn_burst(&mut commands, &mut rng, position.pos, 10, 200.0, shape.color);

        commands.entity(entity).try_despawn();
        if targets.iter().count() < 2 {
            spawn_target(&mut commands, &screen, &mut rng, TARGET_LIFETIME);
        }
        hit = true;
        break;
    }

    if !hit {
        state.score = (state.score * 0.95).max(0.0);
        state.hurt = 1.0;
        state.lives -= 1;
        audio.write(AudioCmd::PlayFx {
            id: "miss".to_string(),
        });
        if state.lives == 0 {
            lose(&mut state, &mut scoreboard);
        }
    }
}

/// Age targets, walk their color from green to red, and penalize expiries.
/// Also decays the hurt/bonus flashes and the restart delay.
pub fn aim_targets(
    state: Option<ResMut<AimState>>,
    time: Res<WorldTime>,
    scoreboard: Option<ResMut<Scoreboard>>,
    mut targets: Query<(Entity, &ScreenPosition, &mut Target, &mut Shape)>,
    mut audio: MessageWriter<AudioCmd>,
    mut commands: Commands,
    mut rng: Local<fastrand::Rng>,
) {
    let (Some(mut state), Some(mut scoreboard)) = (state, scoreboard) else {
        return;
    };
    // Targets freeze on the game-over screen but the overlays keep fading.
    let dt = if state.game_over { 0.0 } else { time.delta };

    for (entity, position, mut target, mut shape) in targets.iter_mut() {
        target.age += dt;
        shape.color = Color::color_from_hsv(120.0 - target.progress() * 120.0, 0.75, 0.9);

        if !target.is_alive() {
            commands.entity(entity).try_despawn();
            spawn_burst(&mut commands, &mut rng, position.pos, 15, 400.0, Color::RED);
            audio.write(AudioCmd::PlayFx {
                id: "break".to_string(),
            });
            state.hurt = 1.0;
            state.lives -= 1;
            if state.lives == 0 {
                lose(&mut state, &mut scoreboard);
            }
        }
    }

    state.hurt = (state.hurt - time.delta).max(0.0);
    state.bonus = (state.bonus - time.delta).max(0.0);
    if state.game_over {
        state.restart_delay = (state.restart_delay - time.delta).max(0.0);
    }
}

fn lose(state: &mut AimState, scoreboard: &mut Scoreboard) {
    state.game_over = true;
    state.restart_delay = 2.0;
    if scoreboard.is_worthy(state.score) {
        scoreboard.new_score(state.score);
        state.highscore = true;
    }
    log::info!(
        "run over: score {:.0}, {} hits{}",
        state.score,
        state.hits,
        if state.highscore { ", new highscore" } else { "" }
    );
}

//! Entity spawn factories for setting up the simulation world.
//!
//! Creates the player ship and enemy entities with appropriate component
//! bundles. All placement is driven by the explicit `ArenaConfig` — no
//! module-level screen dimensions.

use hecs::World;
use rand::Rng;
use rand_chacha::ChaCha8Rng;

use palmfire_core::components::{Bounds, Enemy, PlayerShip};
use palmfire_core::config::ArenaConfig;
use palmfire_core::constants::*;
use palmfire_core::enums::EnemyClass;
use palmfire_core::types::{Position, Velocity};

/// Set up the initial world: one player ship and the full enemy population.
pub fn setup_arena(world: &mut World, rng: &mut ChaCha8Rng, arena: &ArenaConfig) {
    spawn_player(world, arena);
    for _ in 0..arena.enemy_count {
        spawn_enemy(world, rng, arena);
    }
}

/// Spawn the player ship, bottom-center of the arena.
pub fn spawn_player(world: &mut World, arena: &ArenaConfig) -> hecs::Entity {
    let bounds = Bounds::new(PLAYER_WIDTH, PLAYER_HEIGHT);
    let position = Position::new(
        arena.width / 2.0,
        arena.height - PLAYER_START_BOTTOM_MARGIN - PLAYER_HEIGHT / 2.0,
    );
    world.spawn((PlayerShip, position, bounds))
}

/// Spawn a freshly randomized enemy above the visible arena.
pub fn spawn_enemy(world: &mut World, rng: &mut ChaCha8Rng, arena: &ArenaConfig) -> hecs::Entity {
    let (enemy, position, velocity, bounds) = roll_enemy(rng, arena);
    world.spawn((enemy, position, velocity, bounds))
}

/// Roll a random enemy: class, stats, spawn position, and descent speed.
///
/// Used both for fresh spawns and for recycling an enemy in place when it
/// leaves the bottom of the arena.
pub fn roll_enemy(
    rng: &mut ChaCha8Rng,
    arena: &ArenaConfig,
) -> (Enemy, Position, Velocity, Bounds) {
    let class = match rng.gen_range(0..3) {
        0 => EnemyClass::Weak,
        1 => EnemyClass::Normal,
        _ => EnemyClass::Tank,
    };
    let (width, height, hp, speed_min, speed_max, score_value) = enemy_class_params(class);

    let left = rng.gen_range(0.0..(arena.width - width));
    let top = rng.gen_range(ENEMY_SPAWN_TOP_MIN..ENEMY_SPAWN_TOP_MAX);
    let position = Position::new(left + width / 2.0, top + height / 2.0);
    let velocity = Velocity::new(0.0, rng.gen_range(speed_min..=speed_max));

    let enemy = Enemy {
        class,
        max_hp: hp,
        hp,
        score_value,
    };
    (enemy, position, velocity, Bounds::new(width, height))
}

/// Parameters for an enemy class:
/// (width, height, hp, min descent speed, max descent speed, score value).
/// Speeds are arena units per second.
fn enemy_class_params(class: EnemyClass) -> (f64, f64, i32, f64, f64, u32) {
    match class {
        EnemyClass::Weak => (30.0, 20.0, 1, 60.0, 120.0, 5),
        EnemyClass::Normal => (40.0, 30.0, 3, 60.0, 180.0, 10),
        EnemyClass::Tank => (60.0, 50.0, 6, 30.0, 120.0, 25),
    }
}

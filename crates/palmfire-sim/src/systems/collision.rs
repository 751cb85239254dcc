//! Collision resolution and progression.
//!
//! Bullet-enemy hits, enemy deaths (scoring, ammo restore, paired
//! respawn), and the terminal enemy-player overlap check.

use hecs::{Entity, World};
use rand_chacha::ChaCha8Rng;

use palmfire_core::components::{Bounds, Bullet, Enemy, PlayerShip};
use palmfire_core::config::ArenaConfig;
use palmfire_core::enums::{EnemyClass, GamePhase};
use palmfire_core::events::GameEvent;
use palmfire_core::types::{Position, Rect};

use crate::systems::fire_control::FireControl;
use crate::world_setup;

/// Ammunition restored when an enemy of the given class is destroyed.
pub fn ammo_reward(class: EnemyClass) -> f64 {
    match class {
        EnemyClass::Weak => 3.0,
        EnemyClass::Normal => 5.0,
        EnemyClass::Tank => 10.0,
    }
}

/// Run collision resolution for one tick.
///
/// Every bullet overlapping an enemy is consumed and deals one damage
/// point. All of a tick's hits are applied before any death is
/// evaluated, so simultaneous hits can kill in a single tick. Each death
/// is paired with exactly one fresh spawn, keeping the population
/// invariant.
#[allow(clippy::too_many_arguments)]
pub fn run(
    world: &mut World,
    rng: &mut ChaCha8Rng,
    arena: &ArenaConfig,
    fire_control: &mut FireControl,
    score: &mut u32,
    phase: &mut GamePhase,
    events: &mut Vec<GameEvent>,
    despawn_buffer: &mut Vec<Entity>,
) {
    despawn_buffer.clear();

    // Snapshot enemy rects for the overlap pass. Damage is accumulated
    // positionally so kill resolution order stays deterministic.
    let enemy_rects: Vec<(Entity, Rect)> = {
        let mut query = world.query::<(&Enemy, &Position, &Bounds)>();
        query
            .iter()
            .map(|(entity, (_, pos, bounds))| (entity, Rect::from_center(pos, bounds)))
            .collect()
    };
    let mut damage = vec![0i32; enemy_rects.len()];

    // Each bullet damages the first enemy it overlaps, then is consumed.
    {
        let mut query = world.query::<(&Bullet, &Position, &Bounds)>();
        for (bullet_entity, (_, pos, bounds)) in query.iter() {
            let bullet_rect = Rect::from_center(pos, bounds);
            if let Some(idx) = enemy_rects
                .iter()
                .position(|(_, enemy_rect)| bullet_rect.overlaps(enemy_rect))
            {
                damage[idx] += 1;
                despawn_buffer.push(bullet_entity);
            }
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }

    // Apply all accumulated damage, then evaluate deaths.
    let mut killed: Vec<(Entity, Enemy)> = Vec::new();
    for ((entity, _), amount) in enemy_rects.iter().zip(damage.iter()) {
        if *amount == 0 {
            continue;
        }
        if let Ok(mut enemy) = world.get::<&mut Enemy>(*entity) {
            enemy.hp -= *amount;
            if enemy.hp <= 0 {
                killed.push((*entity, *enemy));
            }
        }
    }

    for (entity, enemy) in killed {
        *score += enemy.score_value;
        let restored = ammo_reward(enemy.class);
        fire_control.restore(restored);
        events.push(GameEvent::EnemyDestroyed {
            class: enemy.class,
            score_awarded: enemy.score_value,
            ammo_restored: restored,
        });

        let _ = world.despawn(entity);
        world_setup::spawn_enemy(world, rng, arena);
    }

    // Any enemy touching the player ends the session.
    let player_rect = {
        let mut query = world.query::<(&PlayerShip, &Position, &Bounds)>();
        query
            .iter()
            .next()
            .map(|(_, (_, pos, bounds))| Rect::from_center(pos, bounds))
    };
    if let Some(player_rect) = player_rect {
        let mut query = world.query::<(&Enemy, &Position, &Bounds)>();
        let struck = query
            .iter()
            .any(|(_, (_, pos, bounds))| player_rect.overlaps(&Rect::from_center(pos, bounds)));
        if struck && *phase == GamePhase::Active {
            *phase = GamePhase::GameOver;
            events.push(GameEvent::PlayerStruck);
        }
    }
}

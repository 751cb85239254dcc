//! Snapshot system: queries the ECS world and builds a complete GameStateSnapshot.
//!
//! This system is read-only — it never modifies the world.

use hecs::World;

use palmfire_core::components::{Bounds, Bullet, Enemy, PlayerShip};
use palmfire_core::enums::GamePhase;
use palmfire_core::events::GameEvent;
use palmfire_core::state::*;
use palmfire_core::types::{Position, SimTime, Velocity};
use palmfire_gesture::GestureIntent;

use crate::systems::fire_control::FireControl;

/// Build a complete GameStateSnapshot from the current world state.
pub fn build_snapshot(
    world: &World,
    time: &SimTime,
    phase: GamePhase,
    score: u32,
    fire_control: &FireControl,
    intent: &GestureIntent,
    events: Vec<GameEvent>,
) -> GameStateSnapshot {
    GameStateSnapshot {
        time: *time,
        phase,
        score,
        ammo: fire_control.ammo,
        max_ammo: fire_control.max_ammo,
        gesture: build_gesture(intent),
        player: build_player(world),
        enemies: build_enemies(world),
        bullets: build_bullets(world),
        events,
    }
}

/// Build the HUD gesture view from the tick's interpreted intent.
fn build_gesture(intent: &GestureIntent) -> GestureView {
    GestureView {
        status: intent.status,
        firing: intent.firing,
        finger_count: intent.finger_count,
        openness: intent.openness,
        pinch_closeness: intent.pinch_closeness,
        control_x: intent.control_x,
        control_y: intent.control_y,
    }
}

/// Build PlayerView from the player ship entity.
fn build_player(world: &World) -> PlayerView {
    world
        .query::<(&PlayerShip, &Position, &Bounds)>()
        .iter()
        .next()
        .map(|(_, (_, pos, bounds))| PlayerView {
            position: *pos,
            bounds: *bounds,
        })
        .unwrap_or_default()
}

/// Build EnemyView list from all enemy entities.
fn build_enemies(world: &World) -> Vec<EnemyView> {
    world
        .query::<(&Enemy, &Position, &Bounds)>()
        .iter()
        .map(|(_, (enemy, pos, bounds))| EnemyView {
            class: enemy.class,
            position: *pos,
            bounds: *bounds,
            hp: enemy.hp,
            max_hp: enemy.max_hp,
            score_value: enemy.score_value,
            color: enemy.class.display_color(),
        })
        .collect()
}

/// Build BulletView list from all bullet entities.
fn build_bullets(world: &World) -> Vec<BulletView> {
    world
        .query::<(&Bullet, &Position, &Bounds, &Velocity)>()
        .iter()
        .map(|(_, (_, pos, bounds, vel))| BulletView {
            position: *pos,
            bounds: *bounds,
            velocity: *vel,
        })
        .collect()
}

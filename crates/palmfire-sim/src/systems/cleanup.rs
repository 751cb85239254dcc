//! Cleanup system: removes bullets that have left the arena.
//!
//! Uses a pre-allocated buffer to avoid per-tick allocation.

use hecs::{Entity, World};

use palmfire_core::components::{Bounds, Bullet};
use palmfire_core::config::ArenaConfig;
use palmfire_core::types::{Position, Rect};

/// Despawn bullets that are fully outside the arena on any edge.
pub fn run(world: &mut World, arena: &ArenaConfig, despawn_buffer: &mut Vec<Entity>) {
    despawn_buffer.clear();

    for (entity, (_bullet, pos, bounds)) in world.query_mut::<(&Bullet, &Position, &Bounds)>() {
        let rect = Rect::from_center(pos, bounds);
        if rect.bottom < 0.0
            || rect.top > arena.height
            || rect.right < 0.0
            || rect.left > arena.width
        {
            despawn_buffer.push(entity);
        }
    }

    for entity in despawn_buffer.drain(..) {
        let _ = world.despawn(entity);
    }
}

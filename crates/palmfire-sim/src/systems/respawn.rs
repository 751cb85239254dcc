//! Enemy recycling system.
//!
//! Enemies that fall fully past the bottom edge are not despawned — they
//! are re-randomized in place and re-enter from the spawn band above the
//! arena. This gives continuous spawning without ever changing the
//! population size.

use hecs::World;
use rand_chacha::ChaCha8Rng;

use palmfire_core::components::{Bounds, Enemy};
use palmfire_core::config::ArenaConfig;
use palmfire_core::constants::ENEMY_EXIT_MARGIN;
use palmfire_core::types::{Position, Velocity};

use crate::world_setup;

/// Recycle any enemy whose top edge has passed the arena bottom.
pub fn run(world: &mut World, rng: &mut ChaCha8Rng, arena: &ArenaConfig) {
    for (_entity, (enemy, pos, vel, bounds)) in
        world.query_mut::<(&mut Enemy, &mut Position, &mut Velocity, &mut Bounds)>()
    {
        let top = pos.y - bounds.height / 2.0;
        if top > arena.height + ENEMY_EXIT_MARGIN {
            let (new_enemy, new_pos, new_vel, new_bounds) = world_setup::roll_enemy(rng, arena);
            *enemy = new_enemy;
            *pos = new_pos;
            *vel = new_vel;
            *bounds = new_bounds;
        }
    }
}

//! Player control system.
//!
//! Eases the ship toward the gesture control target with a fixed
//! per-tick exponential smoothing gain, then clamps it inside the arena.

use hecs::World;

use palmfire_core::components::{Bounds, PlayerShip};
use palmfire_core::config::ArenaConfig;
use palmfire_core::constants::CONTROL_EASE_GAIN;
use palmfire_core::types::Position;
use palmfire_gesture::GestureIntent;

/// Move the player toward the normalized control target.
/// With no hand detected, the tracker holds the last target, so the ship
/// simply settles where it was.
pub fn run(world: &mut World, intent: &GestureIntent, arena: &ArenaConfig) {
    for (_entity, (_player, pos, bounds)) in
        world.query_mut::<(&PlayerShip, &mut Position, &Bounds)>()
    {
        let target_x = intent.control_x * arena.width;
        let target_y = intent.control_y * arena.height;

        pos.x += (target_x - pos.x) * CONTROL_EASE_GAIN;
        pos.y += (target_y - pos.y) * CONTROL_EASE_GAIN;

        let half_w = bounds.width / 2.0;
        let half_h = bounds.height / 2.0;
        pos.x = pos.x.clamp(half_w, arena.width - half_w);
        pos.y = pos.y.clamp(half_h, arena.height - half_h);
    }
}

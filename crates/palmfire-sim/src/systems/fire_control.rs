//! Fire control system — ammunition bookkeeping, pinch-driven fire rate,
//! and volley spawning.

use hecs::World;

use palmfire_core::components::{Bounds, Bullet, PlayerShip};
use palmfire_core::constants::*;
use palmfire_core::events::GameEvent;
use palmfire_core::types::{Position, Velocity};
use palmfire_gesture::GestureIntent;

/// Ammunition and fire-rate state, owned by the engine.
#[derive(Debug, Clone)]
pub struct FireControl {
    /// Fractional ammunition, always within [0, max_ammo].
    pub ammo: f64,
    /// Seconds since the last volley. Accumulates every tick regardless
    /// of firing state; reset only when a volley actually fires.
    pub fire_timer: f64,
    pub max_ammo: u32,
}

impl FireControl {
    pub fn new(max_ammo: u32) -> Self {
        Self {
            ammo: max_ammo as f64,
            fire_timer: 0.0,
            max_ammo,
        }
    }

    /// Restore ammunition, clamped to capacity.
    pub fn restore(&mut self, amount: f64) {
        self.ammo = (self.ammo + amount).min(self.max_ammo as f64);
    }
}

/// Volley cooldown in seconds for the given pinch closeness.
/// Tighter pinch = shorter cooldown; no hand = slowest rate.
pub fn cooldown_secs(pinch_closeness: Option<f64>) -> f64 {
    match pinch_closeness {
        Some(pinch) => {
            MAX_COOLDOWN_SECS - pinch.clamp(0.0, 1.0) * (MAX_COOLDOWN_SECS - MIN_COOLDOWN_SECS)
        }
        None => MAX_COOLDOWN_SECS,
    }
}

/// Bullet velocities (units/s) for a volley of the given size.
/// 1/2/3-lane fan patterns; anything larger falls back to the 3-lane fan.
pub fn volley_pattern(rounds: u32) -> &'static [(f64, f64)] {
    match rounds {
        1 => &[(0.0, -720.0)],
        2 => &[(-240.0, -660.0), (240.0, -660.0)],
        _ => &[(-240.0, -600.0), (0.0, -720.0), (240.0, -600.0)],
    }
}

/// Run the fire control system for one tick.
pub fn run(
    world: &mut World,
    fire_control: &mut FireControl,
    intent: &GestureIntent,
    events: &mut Vec<GameEvent>,
) {
    // Continuous regeneration, clamped to capacity.
    fire_control.restore(AMMO_REFILL_RATE * DT);

    // The timer accumulates even while not firing, so dropping in and out
    // of the firing posture cannot exceed the pinch-selected rate.
    fire_control.fire_timer += DT;

    if !intent.firing || fire_control.ammo < 1.0 {
        return;
    }
    if fire_control.fire_timer < cooldown_secs(intent.pinch_closeness) {
        return;
    }

    // Muzzle: top-center of the player ship.
    let muzzle = {
        let mut query = world.query::<(&PlayerShip, &Position, &Bounds)>();
        match query.iter().next() {
            Some((_, (_, pos, bounds))) => Position::new(pos.x, pos.y - bounds.height / 2.0),
            None => return,
        }
    };

    let rounds = (fire_control.ammo.floor() as u32).min(VOLLEY_MAX_ROUNDS);
    for &(vx, vy) in volley_pattern(rounds) {
        world.spawn((
            Bullet,
            Position::new(muzzle.x, muzzle.y - BULLET_HEIGHT / 2.0),
            Velocity::new(vx, vy),
            Bounds::new(BULLET_WIDTH, BULLET_HEIGHT),
        ));
    }

    fire_control.ammo -= rounds as f64;
    fire_control.fire_timer = 0.0;
    events.push(GameEvent::VolleyFired { rounds });
}

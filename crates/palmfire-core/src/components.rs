//! ECS components for hecs entities.
//!
//! Components are plain data structs with no methods.
//! Game logic lives in systems, not components.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyClass;

/// Sprite extents (arena units), centered on the entity's Position.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub width: f64,
    pub height: f64,
}

impl Bounds {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

/// Enemy combat state.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Enemy {
    pub class: EnemyClass,
    pub max_hp: i32,
    /// Always > 0 for a live enemy; the collision system despawns the
    /// entity the tick hp reaches zero.
    pub hp: i32,
    /// Score awarded on destruction.
    pub score_value: u32,
}

/// Marks the single player-controlled ship.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct PlayerShip;

/// Marks a player bullet.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Bullet;

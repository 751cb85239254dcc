//! Game state snapshot — the complete visible state produced each tick.

use serde::{Deserialize, Serialize};

use crate::components::Bounds;
use crate::enums::{EnemyClass, GamePhase, GestureStatus};
use crate::events::GameEvent;
use crate::types::{Position, SimTime, Velocity};

/// Complete game state handed to the presenter after each tick.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GameStateSnapshot {
    pub time: SimTime,
    pub phase: GamePhase,
    pub score: u32,
    /// Fractional ammunition; presenters usually floor this for display.
    pub ammo: f64,
    pub max_ammo: u32,
    pub gesture: GestureView,
    pub player: PlayerView,
    pub enemies: Vec<EnemyView>,
    pub bullets: Vec<BulletView>,
    /// Events that occurred during this tick (drained each snapshot).
    pub events: Vec<GameEvent>,
}

/// Interpreted gesture state for HUD display.
///
/// The Option fields are None when no hand was detected this frame;
/// `firing` and the control target hold their last values regardless.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GestureView {
    pub status: GestureStatus,
    pub firing: bool,
    pub finger_count: Option<u8>,
    pub openness: Option<f64>,
    pub pinch_closeness: Option<f64>,
    pub control_x: f64,
    pub control_y: f64,
}

/// Player ship for display.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PlayerView {
    pub position: Position,
    pub bounds: Bounds,
}

/// Enemy for display, including its health-bar inputs.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EnemyView {
    pub class: EnemyClass,
    pub position: Position,
    pub bounds: Bounds,
    pub hp: i32,
    pub max_hp: i32,
    pub score_value: u32,
    /// Classic palette color for this class.
    pub color: [u8; 3],
}

/// Bullet for display.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BulletView {
    pub position: Position,
    pub bounds: Bounds,
    pub velocity: Velocity,
}

//! Enumeration types used throughout the simulation.

use serde::{Deserialize, Serialize};

/// Enemy archetype. Each class has a distinct size, color, hit points,
/// speed range, and score value (parameters live in the spawn factory).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EnemyClass {
    /// Small, fragile, worth little.
    Weak,
    /// Mid-size baseline enemy.
    #[default]
    Normal,
    /// Large, slow, soaks hits.
    Tank,
}

impl EnemyClass {
    /// Display color (RGB) for presenters that draw the classic palette.
    pub fn display_color(&self) -> [u8; 3] {
        match self {
            Self::Weak => [200, 200, 0],
            Self::Normal => [255, 0, 0],
            Self::Tank => [0, 0, 255],
        }
    }
}

/// Interpreted hand posture for HUD feedback.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GestureStatus {
    /// The detector returned no hand this frame.
    #[default]
    NoHand,
    /// Open palm (four or more fingers extended) — firing.
    OpenPalm,
    /// Fist (at most one finger extended) — holding fire.
    Fist,
    /// Intermediate posture inside the hysteresis band.
    Adjusting,
}

/// Session phase (top-level state).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Simulation running.
    #[default]
    Active,
    /// Terminal state: an enemy reached the player.
    GameOver,
}

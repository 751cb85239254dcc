//! Events emitted by the simulation for audio and HUD feedback.

use serde::{Deserialize, Serialize};

use crate::enums::EnemyClass;

/// Per-tick events for the frontend sound/HUD layer.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum GameEvent {
    /// A hand entered the detector's view after an absence.
    HandAcquired,
    /// The detector lost the hand; control and firing state are held.
    HandLost,
    /// A volley of bullets left the player's ship.
    VolleyFired { rounds: u32 },
    /// An enemy was destroyed by bullet fire.
    EnemyDestroyed {
        class: EnemyClass,
        score_awarded: u32,
        ammo_restored: f64,
    },
    /// An enemy reached the player; the session is over.
    PlayerStruck,
}

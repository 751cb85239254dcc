//! Explicit arena configuration.
//!
//! The arena dimensions are passed into spawn factories and systems rather
//! than living in module-level globals, so every consumer sees the same
//! canonical resolution.

use serde::{Deserialize, Serialize};

/// Playfield dimensions and population, in logical units.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ArenaConfig {
    pub width: f64,
    pub height: f64,
    /// Number of enemies kept alive at all times.
    pub enemy_count: usize,
}

impl Default for ArenaConfig {
    fn default() -> Self {
        Self {
            width: 500.0,
            height: 900.0,
            enemy_count: 8,
        }
    }
}

impl ArenaConfig {
    /// Whether a horizontal coordinate lies inside the arena.
    pub fn contains_x(&self, x: f64) -> bool {
        x >= 0.0 && x <= self.width
    }
}

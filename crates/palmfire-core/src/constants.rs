//! Simulation constants and tuning parameters.

/// Simulation tick rate (Hz).
pub const TICK_RATE: u32 = 60;

/// Seconds per tick.
pub const DT: f64 = 1.0 / TICK_RATE as f64;

// --- Player ---

/// Player sprite width (arena units).
pub const PLAYER_WIDTH: f64 = 50.0;

/// Player sprite height (arena units).
pub const PLAYER_HEIGHT: f64 = 40.0;

/// Gap between the player's starting bottom edge and the arena bottom.
pub const PLAYER_START_BOTTOM_MARGIN: f64 = 10.0;

/// Exponential smoothing gain applied per tick when easing the player
/// toward the gesture control target.
pub const CONTROL_EASE_GAIN: f64 = 0.2;

// --- Bullets ---

/// Bullet sprite width (arena units).
pub const BULLET_WIDTH: f64 = 6.0;

/// Bullet sprite height (arena units).
pub const BULLET_HEIGHT: f64 = 12.0;

// --- Ammunition & fire rate ---

/// Ammunition capacity.
pub const MAX_AMMO: u32 = 20;

/// Continuous ammunition regeneration (rounds per second).
pub const AMMO_REFILL_RATE: f64 = 3.0;

/// Fastest cooldown between volleys (seconds), reached at full pinch.
pub const MIN_COOLDOWN_SECS: f64 = 0.04;

/// Slowest cooldown between volleys (seconds); also the fallback when
/// no hand is detected.
pub const MAX_COOLDOWN_SECS: f64 = 0.45;

/// Maximum bullets fired in one volley.
pub const VOLLEY_MAX_ROUNDS: u32 = 3;

// --- Enemies ---

/// Vertical band (top edge, arena units) in which fresh enemies spawn,
/// above the visible arena.
pub const ENEMY_SPAWN_TOP_MIN: f64 = -100.0;
pub const ENEMY_SPAWN_TOP_MAX: f64 = -40.0;

/// How far past the bottom edge an enemy's top must travel before it is
/// recycled back to the spawn band.
pub const ENEMY_EXIT_MARGIN: f64 = 10.0;

//! Simulation engine — the core of the game.
//!
//! `SimulationEngine` owns the hecs ECS world, interprets one optional
//! hand skeleton per tick, runs all systems, and produces
//! `GameStateSnapshot`s. Completely headless (no camera, detector, or
//! renderer dependency), enabling deterministic testing.

use hecs::World;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

use palmfire_core::config::ArenaConfig;
use palmfire_core::constants::MAX_AMMO;
use palmfire_core::enums::GamePhase;
use palmfire_core::events::GameEvent;
use palmfire_core::state::GameStateSnapshot;
use palmfire_core::types::SimTime;
use palmfire_gesture::{GestureIntent, HandSkeleton, IntentTracker};

use crate::systems;
use crate::systems::fire_control::FireControl;
use crate::world_setup;

/// Configuration for starting a new session.
#[derive(Debug, Clone)]
pub struct SimConfig {
    /// RNG seed for determinism. Same seed + same inputs = same session.
    pub seed: u64,
    /// Playfield dimensions and enemy population.
    pub arena: ArenaConfig,
}

impl Default for SimConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            arena: ArenaConfig::default(),
        }
    }
}

/// The simulation engine. Owns the ECS world and all sim state.
pub struct SimulationEngine {
    world: World,
    time: SimTime,
    phase: GamePhase,
    arena: ArenaConfig,
    rng: ChaCha8Rng,
    intent_tracker: IntentTracker,
    fire_control: FireControl,
    score: u32,
    hand_visible: bool,
    events: Vec<GameEvent>,
    despawn_buffer: Vec<hecs::Entity>,
}

impl SimulationEngine {
    /// Create a new engine with the given config and spawn the arena.
    pub fn new(config: SimConfig) -> Self {
        let mut world = World::new();
        let mut rng = ChaCha8Rng::seed_from_u64(config.seed);
        world_setup::setup_arena(&mut world, &mut rng, &config.arena);

        Self {
            world,
            time: SimTime::default(),
            phase: GamePhase::default(),
            arena: config.arena,
            rng,
            intent_tracker: IntentTracker::new(),
            fire_control: FireControl::new(MAX_AMMO),
            score: 0,
            hand_visible: false,
            events: Vec::new(),
            despawn_buffer: Vec::new(),
        }
    }

    /// Advance the simulation by one tick and return the resulting snapshot.
    ///
    /// `hand` is this frame's detector output: zero or one skeleton.
    pub fn tick(&mut self, hand: Option<&HandSkeleton>) -> GameStateSnapshot {
        if hand.is_some() != self.hand_visible {
            self.hand_visible = hand.is_some();
            self.events.push(if self.hand_visible {
                GameEvent::HandAcquired
            } else {
                GameEvent::HandLost
            });
        }

        let intent = self.intent_tracker.observe(hand);

        if self.phase == GamePhase::Active {
            self.run_systems(&intent);
            self.time.advance();
        }

        let events = std::mem::take(&mut self.events);
        systems::snapshot::build_snapshot(
            &self.world,
            &self.time,
            self.phase,
            self.score,
            &self.fire_control,
            &intent,
            events,
        )
    }

    /// Get the current session phase.
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// Get the current simulation time.
    pub fn time(&self) -> SimTime {
        self.time
    }

    /// Get the current score.
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Get the current fractional ammunition.
    pub fn ammo(&self) -> f64 {
        self.fire_control.ammo
    }

    /// Get a read-only reference to the ECS world.
    pub fn world(&self) -> &World {
        &self.world
    }

    /// Mutable fire-control access (for scenario tests).
    #[cfg(test)]
    pub fn fire_control_mut(&mut self) -> &mut FireControl {
        &mut self.fire_control
    }

    /// Mutable world access (for scenario tests).
    #[cfg(test)]
    pub fn world_mut(&mut self) -> &mut World {
        &mut self.world
    }

    /// Run all systems in order.
    fn run_systems(&mut self, intent: &GestureIntent) {
        // 1. Player control easing toward the gesture target
        systems::control::run(&mut self.world, intent, &self.arena);
        // 2. Kinematic integration (enemies, bullets)
        systems::movement::run(&mut self.world);
        // 3. Enemy recycling (off-bottom re-entry)
        systems::respawn::run(&mut self.world, &mut self.rng, &self.arena);
        // 4. Fire control (ammo regen, cooldown, volley spawn)
        systems::fire_control::run(
            &mut self.world,
            &mut self.fire_control,
            intent,
            &mut self.events,
        );
        // 5. Collision & progression (damage, deaths, player overlap)
        systems::collision::run(
            &mut self.world,
            &mut self.rng,
            &self.arena,
            &mut self.fire_control,
            &mut self.score,
            &mut self.phase,
            &mut self.events,
            &mut self.despawn_buffer,
        );
        // 6. Bullet cleanup (off-screen removal)
        systems::cleanup::run(&mut self.world, &self.arena, &mut self.despawn_buffer);
    }
}

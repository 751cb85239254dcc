//! Headless simulation engine for the PALMFIRE shooter.
//!
//! Owns the hecs world and runs all per-tick systems. Takes one optional
//! hand skeleton per tick as input and produces a `GameStateSnapshot`.
//! No I/O of any kind, enabling deterministic testing.

pub mod engine;
pub mod systems;
pub mod world_setup;

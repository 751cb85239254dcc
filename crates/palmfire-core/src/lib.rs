//! Core types and definitions for the PALMFIRE shooter.
//!
//! This crate defines the vocabulary shared across all other crates:
//! components, configuration, state snapshots, events, and constants.
//! It has no dependency on any I/O or runtime framework.

pub mod components;
pub mod config;
pub mod constants;
pub mod enums;
pub mod events;
pub mod state;
pub mod types;

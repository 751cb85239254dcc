//! Hand-landmark interpretation for the PALMFIRE shooter.
//!
//! Converts a 21-point normalized hand skeleton (MediaPipe convention)
//! into scalar control signals: extended-finger count, palm openness,
//! pinch closeness, and a firing intent with hysteresis. All geometry is
//! closed-form and deterministic; the landmark detector itself lives
//! behind a trait in the app crate.

pub mod intent;
pub mod metrics;
pub mod skeleton;

pub use intent::{GestureIntent, IntentTracker};
pub use skeleton::{HandLandmark, HandSkeleton, Landmark, TrackerConfig, LANDMARK_COUNT};

#[cfg(test)]
mod tests;

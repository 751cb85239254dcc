//! Gesture-to-intent mapping with firing hysteresis.
//!
//! The tracker is the only stateful part of gesture interpretation: it
//! holds the firing switch and the last control target so that losing
//! the hand for a few frames neither stops fire nor recenters the ship.

use serde::{Deserialize, Serialize};
use tracing::debug;

use palmfire_core::enums::GestureStatus;

use crate::metrics;
use crate::skeleton::{HandLandmark, HandSkeleton};

/// Finger count at or above which the firing switch turns ON.
pub const FIRE_ON_FINGERS: u8 = 4;

/// Finger count at or below which the firing switch turns OFF.
/// Counts strictly between the two thresholds leave the switch unchanged.
pub const FIRE_OFF_FINGERS: u8 = 1;

/// Interpreted intent for one frame.
///
/// The Option fields are None when no hand was visible; `firing` and the
/// control target are held from the last sighting.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct GestureIntent {
    pub status: GestureStatus,
    pub firing: bool,
    pub finger_count: Option<u8>,
    pub openness: Option<f64>,
    pub pinch_closeness: Option<f64>,
    /// Horizontal control target, normalized [0,1].
    pub control_x: f64,
    /// Vertical control target, normalized [0,1].
    pub control_y: f64,
}

/// Stateful gesture interpreter.
#[derive(Debug, Clone)]
pub struct IntentTracker {
    firing: bool,
    control_x: f64,
    control_y: f64,
}

impl Default for IntentTracker {
    fn default() -> Self {
        Self {
            firing: false,
            // Centered until a hand is first seen.
            control_x: 0.5,
            control_y: 0.5,
        }
    }
}

impl IntentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Interpret one frame's detection result.
    pub fn observe(&mut self, hand: Option<&HandSkeleton>) -> GestureIntent {
        let skeleton = match hand {
            Some(s) => s,
            None => {
                return GestureIntent {
                    status: GestureStatus::NoHand,
                    firing: self.firing,
                    finger_count: None,
                    openness: None,
                    pinch_closeness: None,
                    control_x: self.control_x,
                    control_y: self.control_y,
                };
            }
        };

        // The middle-finger MCP is a stable proxy for the hand's center.
        let control = skeleton.point(HandLandmark::MiddleMcp);
        self.control_x = control.x;
        self.control_y = control.y;

        let finger_count = metrics::extended_finger_count(skeleton);
        let openness = metrics::palm_openness(skeleton);
        let pinch = metrics::pinch_closeness(skeleton);

        let status = if finger_count >= FIRE_ON_FINGERS {
            if !self.firing {
                debug!(finger_count, "firing switch ON");
            }
            self.firing = true;
            GestureStatus::OpenPalm
        } else if finger_count <= FIRE_OFF_FINGERS {
            if self.firing {
                debug!(finger_count, "firing switch OFF");
            }
            self.firing = false;
            GestureStatus::Fist
        } else {
            // Hysteresis band: 2-3 fingers leave the switch untouched.
            GestureStatus::Adjusting
        };

        GestureIntent {
            status,
            firing: self.firing,
            finger_count: Some(finger_count),
            openness: Some(openness),
            pinch_closeness: Some(pinch),
            control_x: self.control_x,
            control_y: self.control_y,
        }
    }

    /// Current firing switch state.
    pub fn firing(&self) -> bool {
        self.firing
    }
}

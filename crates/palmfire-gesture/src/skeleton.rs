//! Hand skeleton data structures.
//!
//! Models the 21 landmarks per hand emitted by MediaPipe-style detectors.
//! Coordinates are normalized to [0,1] per axis with y growing downward
//! (image convention); the optional 3D component of the detector output
//! is ignored.

use glam::DVec2;
use serde::{Deserialize, Serialize};

/// The 21 hand landmarks in detector index order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HandLandmark {
    Wrist,
    ThumbCmc,
    ThumbMcp,
    ThumbIp,
    ThumbTip,
    IndexMcp,
    IndexPip,
    IndexDip,
    IndexTip,
    MiddleMcp,
    MiddlePip,
    MiddleDip,
    MiddleTip,
    RingMcp,
    RingPip,
    RingDip,
    RingTip,
    PinkyMcp,
    PinkyPip,
    PinkyDip,
    PinkyTip,
}

/// Total number of landmarks per hand.
pub const LANDMARK_COUNT: usize = 21;

impl HandLandmark {
    /// Convert landmark enum to array index (0-20).
    pub fn index(&self) -> usize {
        *self as usize
    }

    /// Fingertip landmarks, thumb first.
    pub fn fingertips() -> [HandLandmark; 5] {
        [
            Self::ThumbTip,
            Self::IndexTip,
            Self::MiddleTip,
            Self::RingTip,
            Self::PinkyTip,
        ]
    }

    /// Mid-joint (PIP) landmarks for the four non-thumb fingers, in the
    /// same order as their tips.
    pub fn finger_pips() -> [HandLandmark; 4] {
        [
            Self::IndexPip,
            Self::MiddlePip,
            Self::RingPip,
            Self::PinkyPip,
        ]
    }

    /// Tip landmarks for the four non-thumb fingers.
    pub fn finger_tips() -> [HandLandmark; 4] {
        [
            Self::IndexTip,
            Self::MiddleTip,
            Self::RingTip,
            Self::PinkyTip,
        ]
    }
}

/// A single normalized 2D landmark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f64,
    pub y: f64,
}

impl Landmark {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub(crate) fn vec(&self) -> DVec2 {
        DVec2::new(self.x, self.y)
    }
}

/// One hand's landmark set for a single frame. Immutable once produced.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HandSkeleton {
    points: [Landmark; LANDMARK_COUNT],
}

impl HandSkeleton {
    pub fn new(points: [Landmark; LANDMARK_COUNT]) -> Self {
        Self { points }
    }

    /// Landmark position by name.
    pub fn point(&self, landmark: HandLandmark) -> Landmark {
        self.points[landmark.index()]
    }

    /// All landmarks in index order.
    pub fn points(&self) -> &[Landmark; LANDMARK_COUNT] {
        &self.points
    }
}

/// Configuration handed to the external landmark detector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TrackerConfig {
    /// Maximum number of hands tracked simultaneously.
    pub max_hands: u32,
    /// Minimum confidence for initial detection.
    pub min_detection_confidence: f64,
    /// Minimum confidence to keep tracking an already-detected hand.
    pub min_tracking_confidence: f64,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            max_hands: 1,
            min_detection_confidence: 0.7,
            min_tracking_confidence: 0.5,
        }
    }
}

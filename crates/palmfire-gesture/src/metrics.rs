//! Closed-form landmark geometry.
//!
//! Pure functions over a single frame's skeleton. No smoothing, no
//! history; identical inputs give bit-for-bit identical outputs.

use crate::skeleton::{HandLandmark, HandSkeleton};

/// Empirical average wrist-to-fingertip distance of a fully closed hand
/// (normalized units).
pub const OPENNESS_MIN_DIST: f64 = 0.03;

/// Empirical average wrist-to-fingertip distance of a fully open hand.
pub const OPENNESS_MAX_DIST: f64 = 0.22;

/// Thumb-index distance at or below which pinch closeness saturates at 1.
pub const PINCH_MIN_DIST: f64 = 0.02;

/// Thumb-index distance at or above which pinch closeness is 0.
pub const PINCH_MAX_DIST: f64 = 0.18;

/// Count extended fingers (0-5).
///
/// The thumb counts as extended when its tip is left of its IP joint in
/// image coordinates, which matches a mirrored camera feed and a right
/// hand. The other four fingers count when the tip sits above the PIP
/// joint (smaller y = higher on screen). Five independent boolean tests,
/// summed.
pub fn extended_finger_count(skeleton: &HandSkeleton) -> u8 {
    let mut count = 0u8;

    if skeleton.point(HandLandmark::ThumbTip).x < skeleton.point(HandLandmark::ThumbIp).x {
        count += 1;
    }

    let tips = HandLandmark::finger_tips();
    let pips = HandLandmark::finger_pips();
    for (tip, pip) in tips.iter().zip(pips.iter()) {
        if skeleton.point(*tip).y < skeleton.point(*pip).y {
            count += 1;
        }
    }

    count
}

/// Palm openness in [0,1]: 0 = fully closed, 1 = fully open.
///
/// Average Euclidean distance from the wrist to the five fingertips,
/// linearly rescaled from the empirical [OPENNESS_MIN_DIST,
/// OPENNESS_MAX_DIST] range and clamped.
pub fn palm_openness(skeleton: &HandSkeleton) -> f64 {
    let wrist = skeleton.point(HandLandmark::Wrist).vec();
    let tips = HandLandmark::fingertips();

    let total: f64 = tips
        .iter()
        .map(|tip| skeleton.point(*tip).vec().distance(wrist))
        .sum();
    let avg = total / tips.len() as f64;

    ((avg - OPENNESS_MIN_DIST) / (OPENNESS_MAX_DIST - OPENNESS_MIN_DIST)).clamp(0.0, 1.0)
}

/// Euclidean distance between two named landmarks, in normalized units.
pub fn landmark_distance(skeleton: &HandSkeleton, a: HandLandmark, b: HandLandmark) -> f64 {
    skeleton.point(a).vec().distance(skeleton.point(b).vec())
}

/// Thumb tip to index tip distance.
pub fn pinch_distance(skeleton: &HandSkeleton) -> f64 {
    landmark_distance(skeleton, HandLandmark::ThumbTip, HandLandmark::IndexTip)
}

/// Pinch closeness in [0,1]: 1 = fingertips touching, 0 = spread apart.
///
/// Inverted linear rescale of the thumb-index distance from
/// [PINCH_MIN_DIST, PINCH_MAX_DIST], clamped.
pub fn pinch_closeness(skeleton: &HandSkeleton) -> f64 {
    let dist = pinch_distance(skeleton);
    (1.0 - (dist - PINCH_MIN_DIST) / (PINCH_MAX_DIST - PINCH_MIN_DIST)).clamp(0.0, 1.0)
}

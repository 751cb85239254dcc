#[cfg(test)]
mod tests {
    use palmfire_core::enums::GestureStatus;

    use crate::intent::IntentTracker;
    use crate::metrics::*;
    use crate::skeleton::{HandLandmark, HandSkeleton, Landmark, TrackerConfig, LANDMARK_COUNT};

    fn set(points: &mut [Landmark; LANDMARK_COUNT], landmark: HandLandmark, x: f64, y: f64) {
        points[landmark.index()] = Landmark::new(x, y);
    }

    /// A wide-open right hand in a mirrored camera frame: thumb tip left
    /// of its IP joint, all four fingertips well above their PIP joints
    /// and far from the wrist.
    fn open_hand() -> HandSkeleton {
        let mut pts = [Landmark::default(); LANDMARK_COUNT];
        set(&mut pts, HandLandmark::Wrist, 0.5, 0.95);

        set(&mut pts, HandLandmark::ThumbCmc, 0.46, 0.90);
        set(&mut pts, HandLandmark::ThumbMcp, 0.43, 0.85);
        set(&mut pts, HandLandmark::ThumbIp, 0.40, 0.80);
        set(&mut pts, HandLandmark::ThumbTip, 0.33, 0.76);

        let chains = [
            (HandLandmark::IndexMcp, HandLandmark::IndexPip, HandLandmark::IndexDip, HandLandmark::IndexTip, 0.44),
            (HandLandmark::MiddleMcp, HandLandmark::MiddlePip, HandLandmark::MiddleDip, HandLandmark::MiddleTip, 0.48),
            (HandLandmark::RingMcp, HandLandmark::RingPip, HandLandmark::RingDip, HandLandmark::RingTip, 0.52),
            (HandLandmark::PinkyMcp, HandLandmark::PinkyPip, HandLandmark::PinkyDip, HandLandmark::PinkyTip, 0.56),
        ];
        for (mcp, pip, dip, tip, x) in chains {
            set(&mut pts, mcp, x, 0.78);
            set(&mut pts, pip, x, 0.72);
            set(&mut pts, dip, x, 0.66);
            set(&mut pts, tip, x, 0.58);
        }
        HandSkeleton::new(pts)
    }

    /// A fully curled fist: thumb tip right of its IP joint, every
    /// fingertip below its PIP joint and huddled near the wrist.
    fn fist() -> HandSkeleton {
        let mut pts = [Landmark::default(); LANDMARK_COUNT];
        set(&mut pts, HandLandmark::Wrist, 0.5, 0.95);

        set(&mut pts, HandLandmark::ThumbCmc, 0.48, 0.94);
        set(&mut pts, HandLandmark::ThumbMcp, 0.49, 0.93);
        set(&mut pts, HandLandmark::ThumbIp, 0.50, 0.93);
        set(&mut pts, HandLandmark::ThumbTip, 0.52, 0.94);

        let chains = [
            (HandLandmark::IndexMcp, HandLandmark::IndexPip, HandLandmark::IndexDip, HandLandmark::IndexTip, 0.48),
            (HandLandmark::MiddleMcp, HandLandmark::MiddlePip, HandLandmark::MiddleDip, HandLandmark::MiddleTip, 0.50),
            (HandLandmark::RingMcp, HandLandmark::RingPip, HandLandmark::RingDip, HandLandmark::RingTip, 0.52),
            (HandLandmark::PinkyMcp, HandLandmark::PinkyPip, HandLandmark::PinkyDip, HandLandmark::PinkyTip, 0.54),
        ];
        for (mcp, pip, dip, tip, x) in chains {
            set(&mut pts, mcp, x, 0.91);
            set(&mut pts, pip, x, 0.90);
            set(&mut pts, dip, x, 0.92);
            set(&mut pts, tip, x, 0.94);
        }
        HandSkeleton::new(pts)
    }

    /// Two fingers (index + middle) extended from an otherwise curled
    /// hand — inside the firing hysteresis band.
    fn two_fingers() -> HandSkeleton {
        let mut pts = *fist().points();
        set(&mut pts, HandLandmark::IndexTip, 0.48, 0.80);
        set(&mut pts, HandLandmark::MiddleTip, 0.50, 0.80);
        HandSkeleton::new(pts)
    }

    /// A neutral skeleton with only the thumb and index tips placed, at
    /// the given horizontal separation.
    fn pinch_at(dist: f64) -> HandSkeleton {
        let mut pts = [Landmark::default(); LANDMARK_COUNT];
        for p in pts.iter_mut() {
            *p = Landmark::new(0.5, 0.5);
        }
        set(&mut pts, HandLandmark::ThumbTip, 0.4, 0.5);
        set(&mut pts, HandLandmark::IndexTip, 0.4 + dist, 0.5);
        HandSkeleton::new(pts)
    }

    // ---- Finger counting ----

    #[test]
    fn test_finger_count_open_hand() {
        assert_eq!(extended_finger_count(&open_hand()), 5);
    }

    #[test]
    fn test_finger_count_fist() {
        assert_eq!(extended_finger_count(&fist()), 0);
    }

    #[test]
    fn test_finger_count_partial() {
        assert_eq!(extended_finger_count(&two_fingers()), 2);
    }

    #[test]
    fn test_finger_count_in_range() {
        for skeleton in [open_hand(), fist(), two_fingers()] {
            assert!(extended_finger_count(&skeleton) <= 5);
        }
    }

    // ---- Openness ----

    #[test]
    fn test_openness_extremes() {
        assert_eq!(palm_openness(&fist()), 0.0);
        assert_eq!(palm_openness(&open_hand()), 1.0);
    }

    #[test]
    fn test_openness_monotonic_in_tip_distance() {
        // Scale fingertips outward from the wrist and verify openness
        // never decreases.
        let wrist = Landmark::new(0.5, 0.95);
        let mut previous = -1.0;
        for step in 0..=10 {
            let reach = 0.02 + 0.025 * step as f64;
            let mut pts = [wrist; LANDMARK_COUNT];
            for tip in HandLandmark::fingertips() {
                pts[tip.index()] = Landmark::new(0.5, 0.95 - reach);
            }
            let openness = palm_openness(&HandSkeleton::new(pts));
            assert!((0.0..=1.0).contains(&openness));
            assert!(
                openness >= previous,
                "openness decreased: {previous} -> {openness} at reach {reach}"
            );
            previous = openness;
        }
    }

    #[test]
    fn test_openness_clamped_outside_calibration() {
        // Tips far beyond the empirical maximum still clamp to 1.
        let wrist = Landmark::new(0.5, 0.95);
        let mut pts = [wrist; LANDMARK_COUNT];
        for tip in HandLandmark::fingertips() {
            pts[tip.index()] = Landmark::new(0.5, 0.05);
        }
        assert_eq!(palm_openness(&HandSkeleton::new(pts)), 1.0);
    }

    // ---- Pinch ----

    #[test]
    fn test_pinch_closeness_endpoints() {
        assert_eq!(pinch_closeness(&pinch_at(PINCH_MIN_DIST)), 1.0);
        assert_eq!(pinch_closeness(&pinch_at(0.005)), 1.0);
        assert_eq!(pinch_closeness(&pinch_at(PINCH_MAX_DIST)), 0.0);
        assert_eq!(pinch_closeness(&pinch_at(0.3)), 0.0);
    }

    #[test]
    fn test_pinch_closeness_linear_midpoint() {
        let mid = (PINCH_MIN_DIST + PINCH_MAX_DIST) / 2.0;
        assert!((pinch_closeness(&pinch_at(mid)) - 0.5).abs() < 1e-10);
    }

    #[test]
    fn test_landmark_distance() {
        let skeleton = pinch_at(0.1);
        let d = landmark_distance(&skeleton, HandLandmark::ThumbTip, HandLandmark::IndexTip);
        assert!((d - 0.1).abs() < 1e-10);
    }

    // ---- Intent hysteresis ----

    #[test]
    fn test_firing_hysteresis() {
        let mut tracker = IntentTracker::new();

        let intent = tracker.observe(Some(&open_hand()));
        assert!(intent.firing);
        assert_eq!(intent.status, GestureStatus::OpenPalm);

        // 2 fingers: inside the band, switch stays ON.
        let intent = tracker.observe(Some(&two_fingers()));
        assert!(intent.firing);
        assert_eq!(intent.status, GestureStatus::Adjusting);

        let intent = tracker.observe(Some(&fist()));
        assert!(!intent.firing);
        assert_eq!(intent.status, GestureStatus::Fist);

        // Band again: switch stays OFF this time.
        let intent = tracker.observe(Some(&two_fingers()));
        assert!(!intent.firing);
    }

    #[test]
    fn test_no_hand_holds_state() {
        let mut tracker = IntentTracker::new();
        let firing = tracker.observe(Some(&open_hand()));
        assert!(firing.firing);
        let held_x = firing.control_x;

        let intent = tracker.observe(None);
        assert_eq!(intent.status, GestureStatus::NoHand);
        assert!(intent.firing, "firing is held, not forced off");
        assert_eq!(intent.control_x, held_x, "control target is held");
        assert!(intent.finger_count.is_none());
        assert!(intent.openness.is_none());
        assert!(intent.pinch_closeness.is_none());
    }

    #[test]
    fn test_control_tracks_middle_mcp() {
        let mut tracker = IntentTracker::new();
        let skeleton = open_hand();
        let intent = tracker.observe(Some(&skeleton));
        let mcp = skeleton.point(HandLandmark::MiddleMcp);
        assert_eq!(intent.control_x, mcp.x);
        assert_eq!(intent.control_y, mcp.y);
    }

    #[test]
    fn test_default_control_is_centered() {
        let mut tracker = IntentTracker::new();
        let intent = tracker.observe(None);
        assert_eq!(intent.control_x, 0.5);
        assert_eq!(intent.control_y, 0.5);
    }

    // ---- Determinism ----

    #[test]
    fn test_metrics_deterministic() {
        let skeleton = open_hand();
        for _ in 0..10 {
            assert_eq!(extended_finger_count(&skeleton), 5);
            assert_eq!(
                palm_openness(&skeleton).to_bits(),
                palm_openness(&open_hand()).to_bits()
            );
            assert_eq!(
                pinch_closeness(&skeleton).to_bits(),
                pinch_closeness(&open_hand()).to_bits()
            );
        }
    }

    // ---- Config ----

    #[test]
    fn test_tracker_config_defaults() {
        let config = TrackerConfig::default();
        assert_eq!(config.max_hands, 1);
        assert_eq!(config.min_detection_confidence, 0.7);
        assert_eq!(config.min_tracking_confidence, 0.5);
    }

    #[test]
    fn test_skeleton_serde() {
        let skeleton = open_hand();
        let json = serde_json::to_string(&skeleton).unwrap();
        let back: HandSkeleton = serde_json::from_str(&json).unwrap();
        assert_eq!(skeleton, back);
    }
}

//! Boundary traits between the session loop and its collaborators.
//!
//! The camera, the landmark detector, and the display are all external
//! devices. The loop talks to them through these traits so that headless
//! runs (and tests) can substitute scripted stand-ins.

use palmfire_core::state::GameStateSnapshot;
use palmfire_gesture::HandSkeleton;

/// One captured camera frame, mirrored horizontally so on-screen motion
/// matches hand motion.
#[derive(Debug, Clone)]
pub struct CameraFrame {
    pub width: u32,
    pub height: u32,
    /// Packed RGB pixel data, row-major.
    pub data: Vec<u8>,
}

impl CameraFrame {
    pub fn blank(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            data: vec![0; (width * height * 3) as usize],
        }
    }
}

/// Produces camera frames. `None` means the device failed or ran dry,
/// which ends the session with an error.
pub trait FrameSource {
    fn next_frame(&mut self) -> Option<CameraFrame>;
}

/// Extracts a hand skeleton from a frame. `None` when no hand is in view.
pub trait HandTracker {
    fn detect(&mut self, frame: &CameraFrame) -> Option<HandSkeleton>;
}

/// Renders snapshots and reports quit requests. `present` never fails;
/// a presenter that cannot draw simply drops the frame.
pub trait Presenter {
    fn poll_quit(&mut self) -> bool;
    fn present(&mut self, snapshot: &GameStateSnapshot);
}

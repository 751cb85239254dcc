//! Scripted stand-ins for the camera, detector, and display.
//!
//! These drive headless runs (CI, benches, the default binary on machines
//! without a webcam) through the same session loop as the real devices.

use tracing::{debug, info};

use palmfire_core::state::GameStateSnapshot;
use palmfire_gesture::HandSkeleton;

use crate::hud;
use crate::io::{CameraFrame, FrameSource, HandTracker, Presenter};

/// Produces blank frames, either forever or for a fixed count.
pub struct StubCamera {
    width: u32,
    height: u32,
    remaining: Option<u64>,
}

impl StubCamera {
    pub fn endless(width: u32, height: u32) -> Self {
        info!(width, height, "Stub camera (endless)");
        Self {
            width,
            height,
            remaining: None,
        }
    }

    /// Runs dry after `frames` frames, like an unplugged device.
    pub fn limited(width: u32, height: u32, frames: u64) -> Self {
        Self {
            width,
            height,
            remaining: Some(frames),
        }
    }
}

impl FrameSource for StubCamera {
    fn next_frame(&mut self) -> Option<CameraFrame> {
        if let Some(remaining) = &mut self.remaining {
            if *remaining == 0 {
                return None;
            }
            *remaining -= 1;
        }
        Some(CameraFrame::blank(self.width, self.height))
    }
}

/// Replays a fixed skeleton script, then repeats its last entry.
pub struct StubTracker {
    script: Vec<Option<HandSkeleton>>,
    cursor: usize,
}

impl StubTracker {
    pub fn scripted(script: Vec<Option<HandSkeleton>>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Never detects a hand.
    pub fn no_hand() -> Self {
        Self::scripted(vec![None])
    }
}

impl HandTracker for StubTracker {
    fn detect(&mut self, _frame: &CameraFrame) -> Option<HandSkeleton> {
        let entry = self
            .script
            .get(self.cursor)
            .or_else(|| self.script.last())?;
        if self.cursor < self.script.len() {
            self.cursor += 1;
        }
        *entry
    }
}

/// Counts frames and requests quit after a fixed number.
pub struct StubPresenter {
    quit_after: u64,
    pub frames_presented: u64,
    pub last_snapshot: Option<GameStateSnapshot>,
}

impl StubPresenter {
    pub fn quit_after(frames: u64) -> Self {
        Self {
            quit_after: frames,
            frames_presented: 0,
            last_snapshot: None,
        }
    }
}

impl Presenter for StubPresenter {
    fn poll_quit(&mut self) -> bool {
        self.frames_presented >= self.quit_after
    }

    fn present(&mut self, snapshot: &GameStateSnapshot) {
        debug!(
            tick = snapshot.time.tick,
            status = %hud::status_line(&snapshot.gesture),
            hud = %hud::score_line(snapshot),
            "frame"
        );
        self.frames_presented += 1;
        self.last_snapshot = Some(snapshot.clone());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limited_camera_runs_dry() {
        let mut camera = StubCamera::limited(320, 240, 2);
        assert!(camera.next_frame().is_some());
        assert!(camera.next_frame().is_some());
        assert!(camera.next_frame().is_none());
        assert!(camera.next_frame().is_none());
    }

    #[test]
    fn test_blank_frame_dimensions() {
        let frame = CameraFrame::blank(320, 240);
        assert_eq!(frame.data.len(), 320 * 240 * 3);
    }

    #[test]
    fn test_tracker_repeats_last_entry() {
        let mut tracker = StubTracker::scripted(vec![None]);
        let frame = CameraFrame::blank(8, 8);
        for _ in 0..5 {
            assert!(tracker.detect(&frame).is_none());
        }
    }
}

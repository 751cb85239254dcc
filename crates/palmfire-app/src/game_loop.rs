//! Session loop — captures a frame, detects the hand, advances one tick,
//! and presents the snapshot, paced at the simulation tick rate against
//! wall-clock time.

use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use tracing::info;

use palmfire_core::constants::TICK_RATE;
use palmfire_core::enums::GamePhase;
use palmfire_sim::engine::{SimConfig, SimulationEngine};

use crate::io::{FrameSource, HandTracker, Presenter};

/// Nominal duration of one tick.
pub const TICK_DURATION: Duration = Duration::from_nanos(1_000_000_000 / TICK_RATE as u64);

/// How a session ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionOutcome {
    /// An enemy reached the player ship.
    GameOver { score: u32 },
    /// The player closed the window.
    Quit,
}

/// Runs one session to completion.
///
/// Returns an error if the camera stops producing frames; gesture
/// dropouts are not errors (the sim holds its last control state), but a
/// dead camera is unrecoverable.
pub fn run_session<S, T, P>(
    source: &mut S,
    tracker: &mut T,
    presenter: &mut P,
    config: SimConfig,
) -> Result<SessionOutcome>
where
    S: FrameSource,
    T: HandTracker,
    P: Presenter,
{
    let mut engine = SimulationEngine::new(config);
    let mut next_tick_time = Instant::now();

    loop {
        if presenter.poll_quit() {
            info!(score = engine.score(), "Quit requested");
            return Ok(SessionOutcome::Quit);
        }

        let frame = source.next_frame().context("Camera produced no frame")?;
        let hand = tracker.detect(&frame);

        let snapshot = engine.tick(hand.as_ref());
        presenter.present(&snapshot);

        if snapshot.phase == GamePhase::GameOver {
            info!(
                score = snapshot.score,
                ticks = snapshot.time.tick,
                "Session over"
            );
            return Ok(SessionOutcome::GameOver {
                score: snapshot.score,
            });
        }

        // Sleep until the next tick boundary.
        next_tick_time += TICK_DURATION;
        let now = Instant::now();
        if next_tick_time > now {
            std::thread::sleep(next_tick_time - now);
        } else if now - next_tick_time > TICK_DURATION * 2 {
            // Far behind schedule; reset instead of spiraling to catch up.
            next_tick_time = now;
        }
    }
}

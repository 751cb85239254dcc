use anyhow::Result;
use tracing::info;

use palmfire_app::game_loop::{self, SessionOutcome};
use palmfire_app::stub::{StubCamera, StubPresenter, StubTracker};
use palmfire_sim::engine::SimConfig;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // No camera or window backend is compiled into this binary yet, so it
    // runs a ten-second headless session through the scripted devices.
    let mut camera = StubCamera::endless(640, 480);
    let mut tracker = StubTracker::no_hand();
    let mut presenter = StubPresenter::quit_after(600);

    let outcome = game_loop::run_session(
        &mut camera,
        &mut tracker,
        &mut presenter,
        SimConfig::default(),
    )?;

    match outcome {
        SessionOutcome::GameOver { score } => info!(score, "Session ended"),
        SessionOutcome::Quit => info!("Session quit"),
    }
    Ok(())
}

//! HUD helpers: status text and health-bar geometry.

use palmfire_core::enums::{GamePhase, GestureStatus};
use palmfire_core::state::{GameStateSnapshot, GestureView};

/// Pixel width of a health bar segment for the given hit points.
///
/// Total over all inputs: zero or negative `max_hp` yields an empty bar,
/// and `hp` outside `[0, max_hp]` is clamped rather than overdrawing.
pub fn health_bar_fill(hp: i32, max_hp: i32, bar_width: f64) -> f64 {
    if max_hp <= 0 {
        return 0.0;
    }
    let ratio = (hp as f64 / max_hp as f64).clamp(0.0, 1.0);
    bar_width * ratio
}

/// One-line gesture readout for the top of the screen.
pub fn status_line(gesture: &GestureView) -> String {
    match gesture.status {
        GestureStatus::NoHand => "No hand detected".to_string(),
        GestureStatus::OpenPalm => {
            let rate = gesture
                .pinch_closeness
                .map(|p| format!("{:.0}%", p * 100.0))
                .unwrap_or_else(|| "--".to_string());
            format!("Open palm: FIRING (pinch {rate})")
        }
        GestureStatus::Fist => "Fist: holding fire".to_string(),
        GestureStatus::Adjusting => {
            let fingers = gesture
                .finger_count
                .map(|n| n.to_string())
                .unwrap_or_else(|| "--".to_string());
            format!("Adjusting ({fingers} fingers)")
        }
    }
}

/// Score and ammo readout. Ammo is fractional internally; players see
/// whole rounds.
pub fn score_line(snapshot: &GameStateSnapshot) -> String {
    match snapshot.phase {
        GamePhase::Active => format!(
            "Score: {}   Ammo: {}/{}",
            snapshot.score,
            snapshot.ammo.floor() as u32,
            snapshot.max_ammo
        ),
        GamePhase::GameOver => format!("GAME OVER, final score {}", snapshot.score),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_health_bar_fill_is_proportional() {
        assert_eq!(health_bar_fill(3, 3, 40.0), 40.0);
        assert_eq!(health_bar_fill(1, 3, 30.0), 10.0);
        assert_eq!(health_bar_fill(0, 3, 40.0), 0.0);
    }

    #[test]
    fn test_health_bar_fill_never_overdraws() {
        assert_eq!(health_bar_fill(5, 3, 40.0), 40.0);
        assert_eq!(health_bar_fill(-2, 3, 40.0), 0.0);
        assert_eq!(health_bar_fill(1, 0, 40.0), 0.0);
        assert_eq!(health_bar_fill(1, -4, 40.0), 0.0);
    }

    #[test]
    fn test_status_line_covers_every_state() {
        let mut gesture = GestureView::default();
        assert!(status_line(&gesture).contains("No hand"));

        gesture.status = GestureStatus::OpenPalm;
        gesture.firing = true;
        gesture.pinch_closeness = Some(0.5);
        assert!(status_line(&gesture).contains("FIRING"));
        assert!(status_line(&gesture).contains("50%"));

        gesture.status = GestureStatus::Fist;
        assert!(status_line(&gesture).contains("holding fire"));

        gesture.status = GestureStatus::Adjusting;
        gesture.finger_count = Some(2);
        assert!(status_line(&gesture).contains('2'));
    }

    #[test]
    fn test_score_line_floors_ammo() {
        let mut snapshot = GameStateSnapshot::default();
        snapshot.score = 35;
        snapshot.ammo = 12.9;
        snapshot.max_ammo = 20;
        let line = score_line(&snapshot);
        assert!(line.contains("12/20"));
        assert!(line.contains("35"));

        snapshot.phase = GamePhase::GameOver;
        assert!(score_line(&snapshot).contains("GAME OVER"));
    }
}

//! JSON input scripts: plain moves, or pointer events to run through a session.

use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_dots::{GestureOutcome, GridSession, GridState, Move, Player, PointerId, apply_move};
use tracing::{info, instrument};

/// One recorded pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "camelCase")]
pub enum PointerEvent {
    /// Pointer went down.
    Press {
        /// Pixel column.
        x: f64,
        /// Pixel row.
        y: f64,
        /// Pointer identity; the primary pointer if omitted.
        #[serde(default)]
        pointer: PointerId,
    },
    /// Pointer went up.
    Release {
        /// Pixel column.
        x: f64,
        /// Pixel row.
        y: f64,
        /// Player credited with any claim.
        player: Player,
        /// Pointer identity; the primary pointer if omitted.
        #[serde(default)]
        pointer: PointerId,
    },
    /// Abandon one pointer's gesture, or all of them.
    Cancel {
        /// Pointer to cancel; every pointer if omitted.
        #[serde(default)]
        pointer: Option<PointerId>,
    },
}

/// Summary of a script run.
#[derive(Debug, Clone, PartialEq, Getters, Serialize)]
pub struct RunReport {
    /// Final grid.
    grid: GridState,
    /// Moves that changed the grid, in order.
    accepted: Vec<Move>,
    /// Submitted moves that left the grid unchanged.
    ignored: usize,
    /// Releases that named no edge.
    gestures_without_move: usize,
}

/// Reads a JSON array from `path`.
#[instrument(skip(path), fields(path = %path.as_ref().display()))]
pub fn read_script<T: for<'de> Deserialize<'de>>(path: impl AsRef<Path>) -> anyhow::Result<Vec<T>> {
    let content = std::fs::read_to_string(path.as_ref())?;
    Ok(serde_json::from_str(&content)?)
}

/// Applies `moves` in order to `grid`.
#[instrument(skip(grid, moves), fields(count = moves.len()))]
pub fn run_moves(grid: GridState, moves: &[Move]) -> RunReport {
    let mut report = RunReport {
        grid,
        accepted: Vec::new(),
        ignored: 0,
        gestures_without_move: 0,
    };
    for mov in moves {
        let next = apply_move(&report.grid, mov);
        if next == report.grid {
            report.ignored += 1;
        } else {
            report.accepted.push(*mov);
            report.grid = next;
        }
    }
    info!(accepted = report.accepted.len(), ignored = report.ignored, "Moves applied");
    report
}

/// Feeds `events` through `session`.
#[instrument(skip(session, events), fields(count = events.len()))]
pub fn run_gestures(mut session: GridSession, events: &[PointerEvent]) -> RunReport {
    let mut ignored = 0;
    let mut gestures_without_move = 0;
    for event in events {
        match *event {
            PointerEvent::Press { x, y, pointer } => session.pointer_down(pointer, x, y),
            PointerEvent::Release {
                x,
                y,
                player,
                pointer,
            } => match session.pointer_up(pointer, x, y, player) {
                (GestureOutcome::Move(_), false) => ignored += 1,
                (GestureOutcome::Move(_), true) => {}
                _ => gestures_without_move += 1,
            },
            PointerEvent::Cancel { pointer: Some(pointer) } => session.cancel_gesture(pointer),
            PointerEvent::Cancel { pointer: None } => session.cancel_all_gestures(),
        }
    }
    info!(accepted = session.history().len(), ignored, gestures_without_move, "Gestures applied");
    RunReport {
        grid: session.grid().clone(),
        accepted: session.history().to_vec(),
        ignored,
        gestures_without_move,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strictly_dots::{GridLayout, Orientation, OwnershipState};

    #[test]
    fn test_parse_events() {
        let raw = r#"[
            {"event": "press", "x": 10.0, "y": 10.0},
            {"event": "release", "x": 110.0, "y": 10.0, "player": "player2", "pointer": 3},
            {"event": "cancel"}
        ]"#;
        let events: Vec<PointerEvent> = serde_json::from_str(raw).unwrap();
        assert_eq!(
            events[0],
            PointerEvent::Press {
                x: 10.0,
                y: 10.0,
                pointer: PointerId::PRIMARY
            }
        );
        assert!(matches!(
            events[1],
            PointerEvent::Release {
                player: Player::Player2,
                pointer: PointerId(3),
                ..
            }
        ));
        assert_eq!(events[2], PointerEvent::Cancel { pointer: None });
    }

    #[test]
    fn test_run_moves_counts_ignored() {
        let mov = Move::new(Orientation::Horizontal, 0, 0, Player::Player1);
        let report = run_moves(GridState::new(3).unwrap(), &[mov, mov.by(Player::Player2)]);
        assert_eq!(report.accepted(), &vec![mov]);
        assert_eq!(*report.ignored(), 1);
    }

    #[test]
    fn test_run_gestures() {
        let session = GridSession::new(GridLayout::new(8.0, 416.0, 0.4, 5).unwrap());
        let events = [
            PointerEvent::Press { x: 8.0, y: 8.0, pointer: PointerId::PRIMARY },
            PointerEvent::Release { x: 8.0, y: 108.0, player: Player::Player1, pointer: PointerId::PRIMARY },
            PointerEvent::Press { x: 8.0, y: 8.0, pointer: PointerId::PRIMARY },
            PointerEvent::Release { x: 208.0, y: 8.0, player: Player::Player1, pointer: PointerId::PRIMARY },
            PointerEvent::Press { x: 108.0, y: 8.0, pointer: PointerId::PRIMARY },
            PointerEvent::Release { x: 8.0, y: 8.0, player: Player::Player2, pointer: PointerId::PRIMARY },
        ];
        let report = run_gestures(session, &events);
        assert_eq!(report.accepted().len(), 2);
        assert_eq!(*report.gestures_without_move(), 1);
        assert_eq!(
            report.grid().edge(Orientation::Vertical, 0, 0),
            Some(OwnershipState::Player1)
        );
        assert_eq!(
            report.grid().edge(Orientation::Horizontal, 0, 0),
            Some(OwnershipState::Player2)
        );
    }
}

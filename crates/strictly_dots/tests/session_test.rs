//! Tests for a session driven by pointer input.

use strictly_dots::invariants::{DotsInvariants, InvariantSet};
use strictly_dots::{
    GestureOutcome, GridLayout, GridSession, Move, Orientation, OwnershipState, PointerId, Player,
};

fn session() -> GridSession {
    GridSession::new(GridLayout::new(10.0, 520.0, 0.3, 6).unwrap())
}

#[test]
fn test_gesture_claims_edge_on_grid() {
    let mut session = session();
    session.pointer_down(PointerId::PRIMARY, 210.0, 310.0);
    let (outcome, changed) = session.pointer_up(PointerId::PRIMARY, 210.0, 410.0, Player::Player1);

    assert!(matches!(outcome, GestureOutcome::Move(_)));
    assert!(changed);
    assert_eq!(
        session.grid().edge(Orientation::Vertical, 2, 3),
        Some(OwnershipState::Player1)
    );
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_repeated_gesture_does_not_change_grid() {
    let mut session = session();
    for player in [Player::Player1, Player::Player2] {
        session.pointer_down(PointerId::PRIMARY, 10.0, 10.0);
        session.pointer_up(PointerId::PRIMARY, 110.0, 10.0, player);
    }
    assert_eq!(
        session.grid().edge(Orientation::Horizontal, 0, 0),
        Some(OwnershipState::Player1)
    );
    assert_eq!(session.history().len(), 1);
}

#[test]
fn test_stale_press_cleared_by_cancel() {
    let mut session = session();
    session.pointer_down(PointerId::PRIMARY, 10.0, 10.0);
    session.cancel_gesture(PointerId::PRIMARY);
    let (outcome, changed) = session.pointer_up(PointerId::PRIMARY, 110.0, 10.0, Player::Player1);
    assert_eq!(outcome, GestureOutcome::NoAnchor);
    assert!(!changed);
}

#[test]
fn test_overlapping_pointers() {
    let mut session = session();
    session.pointer_down(PointerId(1), 10.0, 10.0);
    session.pointer_down(PointerId(2), 510.0, 10.0);
    session.pointer_up(PointerId(1), 10.0, 110.0, Player::Player1);
    session.pointer_up(PointerId(2), 410.0, 10.0, Player::Player2);

    assert_eq!(session.grid().edge(Orientation::Vertical, 0, 0), Some(OwnershipState::Player1));
    assert_eq!(session.grid().edge(Orientation::Horizontal, 4, 0), Some(OwnershipState::Player2));
}

#[test]
fn test_invariants_hold_through_play() {
    let mut session = session();
    let moves = [
        Move::new(Orientation::Horizontal, 0, 0, Player::Player1),
        Move::new(Orientation::Horizontal, 0, 0, Player::Player2),
        Move::new(Orientation::Vertical, 5, 4, Player::Player2),
        Move::new(Orientation::Vertical, 5, 5, Player::Player2),
        Move::new(Orientation::Horizontal, 4, 5, Player::Player1),
    ];
    let accepted = moves.iter().filter(|mov| session.dispatch(**mov)).count();
    assert_eq!(accepted, 3);
    assert!(DotsInvariants::check_all(&session).is_ok());
}

//! Tests for the claim transition over a whole grid.

use strictly_dots::{
    EdgeCell, GridState, Move, MoveRejection, Orientation, OwnershipState, Player, apply_move,
    try_apply_move,
};
use strum::IntoEnumIterator;

fn initial_move() -> Move {
    Move::new(Orientation::Horizontal, 4, 3, Player::Player1)
}

fn after_initial_move() -> GridState {
    apply_move(&GridState::new(6).unwrap(), &initial_move())
}

#[test]
fn test_registers_move_location() {
    let grid = after_initial_move();
    let cell = grid.cell(4, 3).unwrap();
    assert_eq!(cell.horizontal_edge, OwnershipState::Player1);
    assert_eq!(cell.vertical_edge, OwnershipState::Nobody);
}

#[test]
fn test_does_not_override_moves() {
    let grid = after_initial_move();
    assert_eq!(apply_move(&grid, &initial_move().by(Player::Player2)), grid);
}

#[test]
fn test_rejection_is_idempotent_for_any_player() {
    let grid = after_initial_move();
    for player in Player::iter() {
        let again = apply_move(&grid, &initial_move().by(player));
        assert_eq!(again, grid);
        assert!((0..6).all(|y| again.shares_row_with(&grid, y)));
    }
}

#[test]
fn test_rejects_horizontal_move_at_right_end() {
    let grid = after_initial_move();
    for y in 0..6 {
        let mov = Move::new(Orientation::Horizontal, 5, y, Player::Player1);
        assert_eq!(apply_move(&grid, &mov), grid);
    }
}

#[test]
fn test_rejects_vertical_move_at_bottom() {
    let grid = after_initial_move();
    for x in 0..6 {
        let mov = Move::new(Orientation::Vertical, x, 5, Player::Player1);
        assert_eq!(apply_move(&grid, &mov), grid);
    }
}

#[test]
fn test_rejects_every_move_in_bottom_right_corner() {
    let empty = GridState::new(6).unwrap();
    for orientation in Orientation::iter() {
        let mov = Move::new(orientation, 5, 5, Player::Player1);
        assert_eq!(apply_move(&empty, &mov), empty);
    }
}

#[test]
fn test_rejects_negative_and_far_coordinates() {
    let empty = GridState::new(6).unwrap();
    let moves = [
        Move::new(Orientation::Horizontal, -1, 0, Player::Player1),
        Move::new(Orientation::Vertical, 0, -1, Player::Player2),
        Move::new(Orientation::Vertical, i64::MIN, i64::MAX, Player::Player2),
        Move::new(Orientation::Horizontal, 100, 0, Player::Player1),
    ];
    for mov in moves {
        assert_eq!(apply_move(&empty, &mov), empty);
    }
}

#[test]
fn test_accepts_same_location_other_orientation() {
    let grid = after_initial_move();
    let mov = initial_move().with_orientation(Orientation::Vertical);
    let next = apply_move(&grid, &mov);
    let cell = next.cell(4, 3).unwrap();
    assert_eq!(cell.vertical_edge, OwnershipState::Player1);
    assert_eq!(cell.horizontal_edge, OwnershipState::Player1);
}

#[test]
fn test_orientations_can_have_different_owners() {
    let grid = after_initial_move();
    let mov = initial_move()
        .with_orientation(Orientation::Vertical)
        .by(Player::Player2);
    let next = apply_move(&grid, &mov);
    let cell = next.cell(4, 3).unwrap();
    assert_eq!(cell.horizontal_edge, OwnershipState::Player1);
    assert_eq!(cell.vertical_edge, OwnershipState::Player2);
}

#[test]
fn test_no_cross_cell_aliasing() {
    let empty = GridState::new(6).unwrap();
    let grid = apply_move(&empty, &Move::new(Orientation::Horizontal, 0, 0, Player::Player1));
    for (y, row) in grid.rows().enumerate() {
        for (x, cell) in row.iter().enumerate() {
            if (x, y) != (0, 0) {
                assert_eq!(*cell, EdgeCell::EMPTY, "cell ({x}, {y}) changed");
            }
        }
    }
}

#[test]
fn test_claim_copies_only_touched_row() {
    let empty = GridState::new(6).unwrap();
    let grid = apply_move(&empty, &Move::new(Orientation::Vertical, 2, 4, Player::Player2));
    for y in 0..6 {
        assert_eq!(grid.shares_row_with(&empty, y), y != 4);
    }
}

#[test]
fn test_try_apply_reports_reason() {
    let grid = after_initial_move();
    assert!(matches!(
        try_apply_move(&grid, &initial_move()),
        Err(MoveRejection::EdgeClaimed { owner: OwnershipState::Player1, x: 4, y: 3, .. })
    ));
    assert!(matches!(
        try_apply_move(&grid, &Move::new(Orientation::Vertical, 3, 5, Player::Player1)),
        Err(MoveRejection::OutOfBounds { size: 6, .. })
    ));
}

#[test]
fn test_claiming_every_edge_exhausts_grid() {
    let mut grid = GridState::new(4).unwrap();
    let edges = grid.unclaimed_edges();
    assert_eq!(edges.len(), 24);
    for (i, edge) in edges.iter().enumerate() {
        let player = if i % 2 == 0 { Player::Player1 } else { Player::Player2 };
        grid = apply_move(&grid, &edge.claim(player));
    }
    assert!(grid.unclaimed_edges().is_empty());
    assert_eq!(grid.edges_owned_by(Player::Player1), 12);
    assert_eq!(grid.edges_owned_by(Player::Player2), 12);
}

#[test]
fn test_single_dot_grid_has_no_moves() {
    let grid = GridState::new(1).unwrap();
    for orientation in Orientation::iter() {
        assert_eq!(apply_move(&grid, &Move::new(orientation, 0, 0, Player::Player1)), grid);
    }
}

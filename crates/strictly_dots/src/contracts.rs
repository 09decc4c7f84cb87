//! Contract-based validation for edge claims.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::{Move, MoveRejection};
use super::{Edge, GridState, Orientation, OwnershipState};
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, action, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveRejection>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, action: &A, after: &S) -> Result<(), MoveRejection>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: both endpoints of the edge lie on the lattice.
pub struct EdgeInBounds;

impl EdgeInBounds {
    /// Resolves the move to an in-bounds [`Edge`].
    #[instrument(skip(grid), fields(size = grid.size()))]
    pub fn check(mov: &Move, grid: &GridState) -> Result<Edge, MoveRejection> {
        let (x, y) = (mov.top_left_x, mov.top_left_y);
        if x < 0 || y < 0 {
            return Err(MoveRejection::NegativeCoordinate { x, y });
        }

        let size = i64::from(grid.size());
        let (max_x, max_y) = match mov.orientation {
            Orientation::Horizontal => (size - 2, size - 1),
            Orientation::Vertical => (size - 1, size - 2),
        };
        if x > max_x || y > max_y {
            return Err(MoveRejection::OutOfBounds {
                orientation: mov.orientation,
                x,
                y,
                size: grid.size(),
            });
        }

        // Both coordinates are now within 0..size, which fits in u32.
        Ok(Edge::new(mov.orientation, x as u32, y as u32))
    }
}

/// Precondition: nobody has claimed the edge yet.
pub struct EdgeUnclaimed;

impl EdgeUnclaimed {
    /// Fails with the current owner if the edge is taken.
    #[instrument(skip(grid))]
    pub fn check(edge: Edge, grid: &GridState) -> Result<(), MoveRejection> {
        match grid.edge(edge.orientation, edge.x, edge.y) {
            Some(owner) if owner.is_unclaimed() => Ok(()),
            Some(owner) => Err(MoveRejection::EdgeClaimed {
                orientation: edge.orientation,
                x: edge.x,
                y: edge.y,
                owner,
            }),
            None => Err(MoveRejection::OutOfBounds {
                orientation: edge.orientation,
                x: i64::from(edge.x),
                y: i64::from(edge.y),
                size: grid.size(),
            }),
        }
    }
}

/// Composite precondition: a move is legal if its edge is in bounds and free.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and returns the targeted edge.
    #[instrument(skip(grid))]
    pub fn check(mov: &Move, grid: &GridState) -> Result<Edge, MoveRejection> {
        let edge = EdgeInBounds::check(mov, grid)?;
        EdgeUnclaimed::check(edge, grid)?;
        Ok(edge)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for claim actions.
///
/// Preconditions:
/// - Edge is in bounds
/// - Edge is unclaimed
///
/// Postconditions:
/// - The targeted edge now belongs to the mover
/// - No other field of any cell changed
pub struct MoveContract;

impl Contract<GridState, Move> for MoveContract {
    fn pre(grid: &GridState, action: &Move) -> Result<(), MoveRejection> {
        LegalMove::check(action, grid).map(|_| ())
    }

    fn post(before: &GridState, action: &Move, after: &GridState) -> Result<(), MoveRejection> {
        let edge = EdgeInBounds::check(action, before)?;

        if after.edge(edge.orientation, edge.x, edge.y) != Some(OwnershipState::from(action.player)) {
            warn!(%edge, "Claimed edge does not belong to mover");
            return Err(MoveRejection::InvariantViolation(format!(
                "Postcondition failed: {edge} is not owned by {}",
                action.player
            )));
        }

        if before.size() != after.size() {
            return Err(MoveRejection::InvariantViolation(
                "Postcondition failed: grid size changed".to_string(),
            ));
        }

        for (y, (old_row, new_row)) in before.rows().zip(after.rows()).enumerate() {
            for (x, (old, new)) in old_row.iter().zip(new_row).enumerate() {
                let expected = if (x as u32, y as u32) == (edge.x, edge.y) {
                    old.with_edge(edge.orientation, action.player.into())
                } else {
                    *old
                };
                if *new != expected {
                    warn!(x, y, "Cell changed outside the claimed edge");
                    return Err(MoveRejection::InvariantViolation(format!(
                        "Postcondition failed: cell ({x}, {y}) changed outside {edge}"
                    )));
                }
            }
        }

        Ok(())
    }
}

//! The claim transition.
//!
//! Pure functions from `(GridState, Move)` to a new `GridState`. The input
//! grid is never modified; callers can keep it and compare.

use super::action::{Move, MoveRejection};
use super::contracts::LegalMove;
#[cfg(debug_assertions)]
use super::contracts::{Contract, MoveContract};
use super::grid::{GridError, GridState};
use tracing::{debug, instrument, trace};

/// Applies `mov`, reporting why it was rejected if it was.
///
/// On success only the row holding the claimed cell is copied; every other
/// row is shared with `grid`.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn try_apply_move(grid: &GridState, mov: &Move) -> Result<GridState, MoveRejection> {
    let edge = LegalMove::check(mov, grid)?;

    let cell = grid
        .cell(edge.x, edge.y)
        .copied()
        .unwrap_or_default()
        .with_edge(edge.orientation, mov.player.into());
    let next = grid.with_cell(edge.x, edge.y, cell);

    #[cfg(debug_assertions)]
    MoveContract::post(grid, mov, &next)?;

    trace!(%edge, player = %mov.player, "Edge claimed");
    Ok(next)
}

/// Applies `mov`, treating every rejection as a silent no-op.
///
/// A rejected move yields a grid equal to `grid` that shares all of its rows.
#[instrument(skip(grid), fields(size = grid.size()))]
pub fn apply_move(grid: &GridState, mov: &Move) -> GridState {
    match try_apply_move(grid, mov) {
        Ok(next) => next,
        Err(reason) => {
            debug!(%reason, "Move ignored");
            grid.clone()
        }
    }
}

/// Folds `moves` over an empty grid of `size` dots.
#[instrument(skip(moves), fields(count = moves.len()))]
pub fn replay(size: u32, moves: &[Move]) -> Result<GridState, GridError> {
    let grid = GridState::new(size)?;
    Ok(moves.iter().fold(grid, |grid, mov| apply_move(&grid, mov)))
}

//! Monotonic edges invariant: a claimed edge never changes hands.

use super::Invariant;
use crate::{GridSession, replay};

/// Invariant: replaying the accepted history reproduces the grid.
///
/// Every accepted move claimed a free edge, so the grid is exactly the fold
/// of its history over an empty lattice. An overwritten edge breaks this.
pub struct MonotonicEdgesInvariant;

impl Invariant<GridSession> for MonotonicEdgesInvariant {
    fn holds(session: &GridSession) -> bool {
        match replay(session.grid().size(), session.history()) {
            Ok(rebuilt) => rebuilt == *session.grid(),
            Err(_) => false,
        }
    }

    fn description() -> &'static str {
        "Edges are monotonic (never overwritten)"
    }
}

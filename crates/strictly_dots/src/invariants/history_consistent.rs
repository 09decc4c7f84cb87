//! History consistency: one accepted move per claimed edge.

use super::Invariant;
use crate::GridSession;

/// Invariant: the number of claimed edges equals the accepted history length.
pub struct HistoryConsistentInvariant;

impl Invariant<GridSession> for HistoryConsistentInvariant {
    fn holds(session: &GridSession) -> bool {
        session.grid().claimed_edge_count() == session.history().len()
    }

    fn description() -> &'static str {
        "Claimed edge count matches accepted move history"
    }
}

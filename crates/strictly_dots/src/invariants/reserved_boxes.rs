//! Box ownership is reserved and never assigned.

use super::Invariant;
use crate::GridSession;

/// Invariant: every cell's `box_owner` is still `Nobody`.
pub struct ReservedBoxesInvariant;

impl Invariant<GridSession> for ReservedBoxesInvariant {
    fn holds(session: &GridSession) -> bool {
        session
            .grid()
            .rows()
            .flatten()
            .all(|cell| cell.box_owner.is_unclaimed())
    }

    fn description() -> &'static str {
        "Box owners stay unassigned"
    }
}

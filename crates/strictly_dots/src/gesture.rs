//! Press/release gesture recognition.
//!
//! A gesture is one press followed by one release. If both land on dots
//! that are lattice neighbours, the gesture names the edge between them.

use super::{GridLayout, LatticePoint, Move, Orientation, Player};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, instrument};

/// Where a single pointer is in its press/release cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum GestureState {
    /// No press is pending.
    #[default]
    Idle,
    /// A press landed on this dot; waiting for the release.
    AwaitingRelease(LatticePoint),
}

/// What a release produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// The gesture spans one edge.
    Move(Move),
    /// The release was not on a dot.
    Missed,
    /// Press and release dots are not neighbours.
    NotAdjacent {
        /// Dot under the press.
        anchor: LatticePoint,
        /// Dot under the release.
        release: LatticePoint,
    },
    /// There was no pending press.
    NoAnchor,
}

impl GestureOutcome {
    /// The emitted move, if any.
    pub fn into_move(self) -> Option<Move> {
        match self {
            GestureOutcome::Move(mov) => Some(mov),
            _ => None,
        }
    }
}

/// Turns two neighbouring dots into the move for the edge between them.
///
/// The edge is addressed by its top-left endpoint whichever way the pointer
/// travelled. Returns `None` unless the dots are exactly one step apart.
pub fn edge_between(a: LatticePoint, b: LatticePoint, player: Player) -> Option<Move> {
    if a.taxicab_distance(b) != 1 {
        return None;
    }
    let orientation = if a.x == b.x {
        Orientation::Vertical
    } else {
        Orientation::Horizontal
    };
    let anchor = a.min(b);
    Some(Move::new(
        orientation,
        i64::from(anchor.x),
        i64::from(anchor.y),
        player,
    ))
}

/// Recognises gestures for one pointer.
#[derive(Debug, Clone)]
pub struct GestureMapper {
    layout: GridLayout,
    state: GestureState,
}

impl GestureMapper {
    /// Creates an idle mapper for `layout`.
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            state: GestureState::Idle,
        }
    }

    /// The layout used for hit-testing.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Current gesture state.
    pub fn state(&self) -> GestureState {
        self.state
    }

    /// Records the dot under a press as the pending anchor.
    ///
    /// Ignored while another press is pending. A press that misses every dot
    /// leaves the mapper idle.
    #[instrument(skip(self))]
    pub fn press(&mut self, pixel_x: f64, pixel_y: f64) {
        if let GestureState::AwaitingRelease(anchor) = self.state {
            debug!(%anchor, "Press ignored, gesture already pending");
            return;
        }
        if let Some(anchor) = self.layout.coordinate_to_lattice_point(pixel_x, pixel_y) {
            debug!(%anchor, "Gesture anchored");
            self.state = GestureState::AwaitingRelease(anchor);
        }
    }

    /// Completes the pending gesture. The mapper is idle afterwards whatever
    /// the outcome.
    #[instrument(skip(self))]
    pub fn release(&mut self, pixel_x: f64, pixel_y: f64, player: Player) -> GestureOutcome {
        let GestureState::AwaitingRelease(anchor) = std::mem::take(&mut self.state) else {
            return GestureOutcome::NoAnchor;
        };

        let Some(release) = self.layout.coordinate_to_lattice_point(pixel_x, pixel_y) else {
            debug!(%anchor, "Release missed every dot");
            return GestureOutcome::Missed;
        };

        match edge_between(anchor, release, player) {
            Some(mov) => GestureOutcome::Move(mov),
            None => {
                debug!(%anchor, %release, "Release is not a neighbour of the anchor");
                GestureOutcome::NotAdjacent { anchor, release }
            }
        }
    }

    /// Drops any pending gesture, e.g. on focus loss.
    pub fn cancel(&mut self) {
        self.state = GestureState::Idle;
    }
}

/// Host-assigned identifier of one pointer (mouse, finger, pen).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display)]
pub struct PointerId(pub i32);

impl PointerId {
    /// The mouse, or the only pointer of a single-pointer host.
    pub const PRIMARY: PointerId = PointerId(0);
}

/// One gesture slot per pointer, for hosts with overlapping pointers.
#[derive(Debug, Clone)]
pub struct PointerGestures {
    layout: GridLayout,
    active: HashMap<PointerId, GestureMapper>,
}

impl PointerGestures {
    /// Creates an empty tracker.
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            active: HashMap::new(),
        }
    }

    /// Routes a press to the pointer's own mapper.
    #[instrument(skip(self))]
    pub fn press(&mut self, pointer: PointerId, pixel_x: f64, pixel_y: f64) {
        let layout = self.layout;
        self.active
            .entry(pointer)
            .or_insert_with(|| GestureMapper::new(layout))
            .press(pixel_x, pixel_y);
    }

    /// Routes a release to the pointer's own mapper and forgets the pointer.
    #[instrument(skip(self))]
    pub fn release(&mut self, pointer: PointerId, pixel_x: f64, pixel_y: f64, player: Player) -> GestureOutcome {
        match self.active.remove(&pointer) {
            Some(mut mapper) => mapper.release(pixel_x, pixel_y, player),
            None => GestureOutcome::NoAnchor,
        }
    }

    /// Gesture state of one pointer.
    pub fn state(&self, pointer: PointerId) -> GestureState {
        self.active
            .get(&pointer)
            .map(GestureMapper::state)
            .unwrap_or_default()
    }

    /// Drops one pointer's pending gesture.
    pub fn cancel(&mut self, pointer: PointerId) {
        self.active.remove(&pointer);
    }

    /// Drops every pending gesture.
    pub fn cancel_all(&mut self) {
        self.active.clear();
    }

    /// Number of pointers with a pending anchor.
    pub fn pending(&self) -> usize {
        self.active
            .values()
            .filter(|mapper| matches!(mapper.state(), GestureState::AwaitingRelease(_)))
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn layout() -> GridLayout {
        GridLayout::new(10.0, 520.0, 0.3, 6).unwrap()
    }

    #[test]
    fn test_edge_between_orders_anchor() {
        let a = LatticePoint::new(3, 1);
        let b = LatticePoint::new(2, 1);
        assert_eq!(
            edge_between(a, b, Player::Player1),
            Some(Move::new(Orientation::Horizontal, 2, 1, Player::Player1))
        );
        assert_eq!(
            edge_between(LatticePoint::new(0, 4), LatticePoint::new(0, 3), Player::Player2),
            Some(Move::new(Orientation::Vertical, 0, 3, Player::Player2))
        );
    }

    #[test]
    fn test_edge_between_rejects_non_neighbours() {
        let a = LatticePoint::new(1, 1);
        assert_eq!(edge_between(a, a, Player::Player1), None);
        assert_eq!(edge_between(a, LatticePoint::new(2, 2), Player::Player1), None);
        assert_eq!(edge_between(a, LatticePoint::new(3, 1), Player::Player1), None);
    }

    #[test]
    fn test_missed_press_stays_idle() {
        let mut mapper = GestureMapper::new(layout());
        mapper.press(60.0, 60.0);
        assert_eq!(mapper.state(), GestureState::Idle);
        assert_eq!(mapper.release(110.0, 10.0, Player::Player1), GestureOutcome::NoAnchor);
    }

    #[test]
    fn test_second_press_does_not_reanchor() {
        let mut mapper = GestureMapper::new(layout());
        mapper.press(10.0, 10.0);
        mapper.press(410.0, 410.0);
        assert_eq!(mapper.state(), GestureState::AwaitingRelease(LatticePoint::new(0, 0)));
    }

    #[test]
    fn test_release_always_resets() {
        let mut mapper = GestureMapper::new(layout());
        mapper.press(10.0, 10.0);
        assert!(matches!(
            mapper.release(310.0, 10.0, Player::Player1),
            GestureOutcome::NotAdjacent { .. }
        ));
        assert_eq!(mapper.state(), GestureState::Idle);

        mapper.press(10.0, 10.0);
        assert_eq!(mapper.release(60.0, 10.0, Player::Player1), GestureOutcome::Missed);
        assert_eq!(mapper.state(), GestureState::Idle);
    }

    #[test]
    fn test_cancel() {
        let mut mapper = GestureMapper::new(layout());
        mapper.press(10.0, 10.0);
        mapper.cancel();
        assert_eq!(mapper.release(110.0, 10.0, Player::Player1), GestureOutcome::NoAnchor);
    }

    #[test]
    fn test_pointers_are_independent() {
        let mut pointers = PointerGestures::new(layout());
        pointers.press(PointerId(1), 10.0, 10.0);
        pointers.press(PointerId(2), 510.0, 510.0);
        assert_eq!(pointers.pending(), 2);

        let second = pointers.release(PointerId(2), 510.0, 410.0, Player::Player2);
        assert_eq!(
            second.into_move(),
            Some(Move::new(Orientation::Vertical, 5, 4, Player::Player2))
        );
        assert_eq!(pointers.state(PointerId(1)), GestureState::AwaitingRelease(LatticePoint::new(0, 0)));

        pointers.cancel_all();
        assert_eq!(pointers.pending(), 0);
        assert_eq!(
            pointers.release(PointerId(1), 110.0, 10.0, Player::Player1),
            GestureOutcome::NoAnchor
        );
    }
}

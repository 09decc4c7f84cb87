//! A live grid wired to pointer input.

use super::gesture::{GestureOutcome, GestureState, PointerGestures, PointerId};
use super::invariants::{DotsInvariants, InvariantSet};
use super::{GridLayout, GridState, Move, Player, try_apply_move};
use tracing::{debug, info, instrument, warn};

/// Owns the current grid, its accepted moves, and in-flight gestures.
///
/// Every accepted move replaces the grid with a new value; the previous one
/// is not modified.
#[derive(Debug, Clone)]
pub struct GridSession {
    layout: GridLayout,
    grid: GridState,
    history: Vec<Move>,
    gestures: PointerGestures,
}

impl GridSession {
    /// Creates a session with an empty grid sized by `layout`.
    #[instrument]
    pub fn new(layout: GridLayout) -> Self {
        Self {
            layout,
            grid: empty_grid(&layout),
            history: Vec::new(),
            gestures: PointerGestures::new(layout),
        }
    }

    /// Current grid.
    pub fn grid(&self) -> &GridState {
        &self.grid
    }

    /// Accepted moves, oldest first.
    pub fn history(&self) -> &[Move] {
        &self.history
    }

    /// Layout used for pointer hit-testing.
    pub fn layout(&self) -> &GridLayout {
        &self.layout
    }

    /// Applies `mov`. Returns true if the grid changed and needs redrawing.
    #[instrument(skip(self))]
    pub fn dispatch(&mut self, mov: Move) -> bool {
        match try_apply_move(&self.grid, &mov) {
            Ok(next) => {
                info!(%mov, "Move accepted");
                self.grid = next;
                self.history.push(mov);
                self.debug_check_invariants();
                true
            }
            Err(reason) => {
                debug!(%reason, "Move ignored");
                false
            }
        }
    }

    /// Starts a gesture for `pointer`.
    pub fn pointer_down(&mut self, pointer: PointerId, pixel_x: f64, pixel_y: f64) {
        self.gestures.press(pointer, pixel_x, pixel_y);
    }

    /// Ends a gesture for `pointer` and dispatches the move it names.
    ///
    /// Returns the gesture outcome and whether the grid changed.
    #[instrument(skip(self))]
    pub fn pointer_up(
        &mut self,
        pointer: PointerId,
        pixel_x: f64,
        pixel_y: f64,
        player: Player,
    ) -> (GestureOutcome, bool) {
        let outcome = self.gestures.release(pointer, pixel_x, pixel_y, player);
        let changed = match outcome {
            GestureOutcome::Move(mov) => self.dispatch(mov),
            _ => false,
        };
        (outcome, changed)
    }

    /// Gesture state of `pointer`.
    pub fn gesture_state(&self, pointer: PointerId) -> GestureState {
        self.gestures.state(pointer)
    }

    /// Abandons the gesture of `pointer`.
    pub fn cancel_gesture(&mut self, pointer: PointerId) {
        self.gestures.cancel(pointer);
    }

    /// Abandons every pending gesture, e.g. on focus loss.
    pub fn cancel_all_gestures(&mut self) {
        self.gestures.cancel_all();
    }

    /// Clears the grid, history and pending gestures.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.grid = empty_grid(&self.layout);
        self.history.clear();
        self.gestures.cancel_all();
    }

    fn debug_check_invariants(&self) {
        if !cfg!(debug_assertions) {
            return;
        }
        if let Err(violations) = DotsInvariants::check_all(self) {
            for violation in &violations {
                warn!(description = %violation.description, "Invariant violated");
            }
            panic!("{} session invariant(s) violated", violations.len());
        }
    }
}

fn empty_grid(layout: &GridLayout) -> GridState {
    // Layouts are validated to at least two dots per side.
    GridState::new(*layout.size()).unwrap_or_default()
}

//! Strictly Dots - edge-claiming rules for dots and boxes
//!
//! Pure game logic with no I/O: a grid of claimable edges, the single
//! transition that claims one, and the pointer geometry that turns a
//! press/release pair into a claim.
//!
//! # Architecture
//!
//! - **Grid**: immutable [`GridState`]; transitions share untouched rows
//! - **Rules**: [`apply_move`] (silent no-op on rejection) and [`try_apply_move`]
//! - **Contracts**: preconditions and postconditions of a claim
//! - **Layout / Gesture**: pixel hit-testing and press/release recognition
//! - **Session**: a grid, its history, and live pointer gestures
//!
//! Scoring, turn order and win detection are not part of this crate.
//!
//! # Example
//!
//! ```
//! use strictly_dots::{GridState, Move, Orientation, OwnershipState, Player, apply_move};
//!
//! let grid = GridState::new(6).unwrap();
//! let next = apply_move(&grid, &Move::new(Orientation::Horizontal, 4, 3, Player::Player1));
//!
//! assert_eq!(next.cell(4, 3).unwrap().horizontal_edge, OwnershipState::Player1);
//! assert_eq!(grid.cell(4, 3).unwrap().horizontal_edge, OwnershipState::Nobody);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod contracts;
mod gesture;
mod grid;
pub mod invariants;
mod layout;
mod rules;
mod session;
mod types;

// Crate-level exports - Domain types
pub use types::{EdgeCell, LatticePoint, Orientation, OwnershipState, Player};

// Crate-level exports - Grid
pub use grid::{DEFAULT_GRID_SIZE, GridError, GridState};

// Crate-level exports - Actions
pub use action::{Edge, Move, MoveRejection};

// Crate-level exports - Contracts
pub use contracts::{Contract, EdgeInBounds, EdgeUnclaimed, LegalMove, MoveContract};

// Crate-level exports - Transition
pub use rules::{apply_move, replay, try_apply_move};

// Crate-level exports - Pointer input
pub use gesture::{GestureMapper, GestureOutcome, GestureState, PointerGestures, PointerId, edge_between};
pub use layout::{GridLayout, LayoutError};

// Crate-level exports - Session
pub use session::GridSession;

//! First-class action types for dots and boxes.
//!
//! A move is a player's request to claim one edge. It carries raw signed
//! coordinates and is validated only when applied to a grid.

use super::{Orientation, OwnershipState, Player};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Claim the edge anchored at `(top_left_x, top_left_y)` in `orientation`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Move {
    /// Direction of the edge.
    pub orientation: Orientation,
    /// Column of the top-left endpoint.
    pub top_left_x: i64,
    /// Row of the top-left endpoint.
    pub top_left_y: i64,
    /// The claiming player.
    pub player: Player,
}

impl Move {
    /// Creates a new move.
    #[instrument]
    pub fn new(orientation: Orientation, top_left_x: i64, top_left_y: i64, player: Player) -> Self {
        Self {
            orientation,
            top_left_x,
            top_left_y,
            player,
        }
    }

    /// Returns the same move made by a different player.
    pub fn by(self, player: Player) -> Self {
        Self { player, ..self }
    }

    /// Returns the same anchor in the other orientation.
    pub fn with_orientation(self, orientation: Orientation) -> Self {
        Self { orientation, ..self }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} -> {} edge at ({}, {})",
            self.player, self.orientation, self.top_left_x, self.top_left_y
        )
    }
}

/// An in-bounds edge, addressed by its top-left endpoint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("{orientation} edge at ({x}, {y})")]
pub struct Edge {
    /// Direction of the edge.
    pub orientation: Orientation,
    /// Column of the top-left endpoint.
    pub x: u32,
    /// Row of the top-left endpoint.
    pub y: u32,
}

impl Edge {
    /// Creates an edge reference.
    pub fn new(orientation: Orientation, x: u32, y: u32) -> Self {
        Self { orientation, x, y }
    }

    /// Builds the move that claims this edge for `player`.
    pub fn claim(self, player: Player) -> Move {
        Move::new(self.orientation, i64::from(self.x), i64::from(self.y), player)
    }
}

/// Why a move did not change the grid.
///
/// Rejections are ordinary outcomes of play. [`crate::apply_move`] swallows
/// them; [`crate::try_apply_move`] reports them for logging and tests.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveRejection {
    /// A coordinate is below zero.
    #[display("Coordinates ({x}, {y}) must not be negative")]
    NegativeCoordinate {
        /// Offending column.
        x: i64,
        /// Offending row.
        y: i64,
    },

    /// The edge would leave the lattice.
    #[display("{orientation} edge at ({x}, {y}) is outside a {size}x{size} grid")]
    OutOfBounds {
        /// Requested orientation.
        orientation: Orientation,
        /// Requested column.
        x: i64,
        /// Requested row.
        y: i64,
        /// Grid size in dots.
        size: u32,
    },

    /// The edge already belongs to someone.
    #[display("{orientation} edge at ({x}, {y}) is already claimed by {owner}")]
    EdgeClaimed {
        /// Requested orientation.
        orientation: Orientation,
        /// Requested column.
        x: u32,
        /// Requested row.
        y: u32,
        /// Existing claimant.
        owner: OwnershipState,
    },

    /// A postcondition failed after applying the move.
    #[display("Invariant violation: {_0}")]
    InvariantViolation(String),
}

impl std::error::Error for MoveRejection {}

//! Core domain types for dots and boxes.

use serde::{Deserialize, Serialize};

/// Player in the game.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// First player.
    #[display("player1")]
    Player1,
    /// Second player.
    #[display("player2")]
    Player2,
}

/// Who, if anyone, has claimed an edge or box.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum OwnershipState {
    /// Unclaimed.
    #[default]
    #[display("nobody")]
    Nobody,
    /// Claimed by player one.
    #[display("player1")]
    Player1,
    /// Claimed by player two.
    #[display("player2")]
    Player2,
}

impl OwnershipState {
    /// Returns the owning player, if any.
    pub fn owner(self) -> Option<Player> {
        match self {
            OwnershipState::Nobody => None,
            OwnershipState::Player1 => Some(Player::Player1),
            OwnershipState::Player2 => Some(Player::Player2),
        }
    }

    /// Returns true if nobody owns this.
    pub fn is_unclaimed(self) -> bool {
        matches!(self, OwnershipState::Nobody)
    }
}

impl From<Player> for OwnershipState {
    fn from(player: Player) -> Self {
        match player {
            Player::Player1 => OwnershipState::Player1,
            Player::Player2 => OwnershipState::Player2,
        }
    }
}

/// Direction of an edge leaving its top-left endpoint.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::EnumIter, derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    /// Edge to the right-hand neighbour.
    #[display("horizontal")]
    Horizontal,
    /// Edge to the neighbour below.
    #[display("vertical")]
    Vertical,
}

/// Claimable features anchored at one lattice point.
///
/// `Copy` on purpose: every cell in a grid is its own value, so writing one
/// can never show up in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EdgeCell {
    /// Horizontal edge whose left endpoint is this point.
    pub horizontal_edge: OwnershipState,
    /// Vertical edge whose top endpoint is this point.
    pub vertical_edge: OwnershipState,
    /// Box whose top-left corner is this point. Reserved, never assigned.
    pub box_owner: OwnershipState,
}

impl EdgeCell {
    /// A cell with nothing claimed.
    pub const EMPTY: EdgeCell = EdgeCell {
        horizontal_edge: OwnershipState::Nobody,
        vertical_edge: OwnershipState::Nobody,
        box_owner: OwnershipState::Nobody,
    };

    /// Returns the edge field selected by `orientation`.
    pub fn edge(&self, orientation: Orientation) -> OwnershipState {
        match orientation {
            Orientation::Horizontal => self.horizontal_edge,
            Orientation::Vertical => self.vertical_edge,
        }
    }

    /// Returns a copy with the edge selected by `orientation` replaced.
    pub fn with_edge(self, orientation: Orientation, owner: OwnershipState) -> Self {
        match orientation {
            Orientation::Horizontal => Self {
                horizontal_edge: owner,
                ..self
            },
            Orientation::Vertical => Self {
                vertical_edge: owner,
                ..self
            },
        }
    }
}

/// A grid intersection, `x` is the column and `y` the row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
#[display("({x}, {y})")]
pub struct LatticePoint {
    /// Column.
    pub x: u32,
    /// Row.
    pub y: u32,
}

impl LatticePoint {
    /// Creates a lattice point.
    pub fn new(x: u32, y: u32) -> Self {
        Self { x, y }
    }

    /// Sum of absolute coordinate differences.
    pub fn taxicab_distance(self, other: LatticePoint) -> u32 {
        self.x.abs_diff(other.x) + self.y.abs_diff(other.y)
    }

    /// Component-wise minimum.
    pub fn min(self, other: LatticePoint) -> LatticePoint {
        LatticePoint {
            x: self.x.min(other.x),
            y: self.y.min(other.y),
        }
    }
}

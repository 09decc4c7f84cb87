//! The lattice of claimable edges.

use super::{Edge, EdgeCell, Orientation, OwnershipState, Player};
use derive_more::{Display, Error};
use serde::Serialize;
use std::sync::Arc;
use strum::IntoEnumIterator;
use tracing::instrument;

/// Grid size used when nothing else is configured.
pub const DEFAULT_GRID_SIZE: u32 = 5;

/// Immutable `size × size` lattice of [`EdgeCell`]s, indexed `[row][col]`.
///
/// Rows sit behind [`Arc`] so that a transition can hand back a new grid
/// that shares every row it did not touch with its predecessor.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct GridState {
    size: u32,
    cells: Vec<Arc<[EdgeCell]>>,
}

impl GridState {
    /// Creates an empty grid of `size × size` dots.
    #[instrument]
    pub fn new(size: u32) -> Result<Self, GridError> {
        if size < 1 {
            return Err(GridError::new(format!("Grid size must be at least 1, got {size}")));
        }
        Ok(Self::empty(size))
    }

    // Each cell is built on its own; no row or cell is a broadcast copy of a shared one.
    fn empty(size: u32) -> Self {
        let cells = (0..size)
            .map(|_| (0..size).map(|_| EdgeCell::EMPTY).collect::<Arc<[EdgeCell]>>())
            .collect();
        Self { size, cells }
    }

    /// Number of dots along each side.
    pub fn size(&self) -> u32 {
        self.size
    }

    /// Rows of cells, top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[EdgeCell]> {
        self.cells.iter().map(|row| &row[..])
    }

    /// Returns the cell at column `x`, row `y`.
    pub fn cell(&self, x: u32, y: u32) -> Option<&EdgeCell> {
        self.cells.get(y as usize)?.get(x as usize)
    }

    /// Returns the owner of an edge, `None` if the anchor is off the grid.
    pub fn edge(&self, orientation: Orientation, x: u32, y: u32) -> Option<OwnershipState> {
        self.cell(x, y).map(|cell| cell.edge(orientation))
    }

    /// True if `edge` has both endpoints on the lattice.
    pub fn contains_edge(&self, edge: Edge) -> bool {
        let (max_x, max_y) = match edge.orientation {
            Orientation::Horizontal => (self.size.checked_sub(2), Some(self.size - 1)),
            Orientation::Vertical => (Some(self.size - 1), self.size.checked_sub(2)),
        };
        matches!((max_x, max_y), (Some(mx), Some(my)) if edge.x <= mx && edge.y <= my)
    }

    /// Counts edges claimed by anyone.
    pub fn claimed_edge_count(&self) -> usize {
        self.rows()
            .flatten()
            .map(|cell| {
                usize::from(!cell.horizontal_edge.is_unclaimed())
                    + usize::from(!cell.vertical_edge.is_unclaimed())
            })
            .sum()
    }

    /// Counts edges claimed by `player`.
    pub fn edges_owned_by(&self, player: Player) -> usize {
        let owner = OwnershipState::from(player);
        self.rows()
            .flatten()
            .map(|cell| {
                usize::from(cell.horizontal_edge == owner) + usize::from(cell.vertical_edge == owner)
            })
            .sum()
    }

    /// Every in-bounds edge that nobody has claimed yet.
    #[instrument(skip(self), fields(size = self.size))]
    pub fn unclaimed_edges(&self) -> Vec<Edge> {
        let mut edges = Vec::new();
        for y in 0..self.size {
            for x in 0..self.size {
                for orientation in Orientation::iter() {
                    let edge = Edge::new(orientation, x, y);
                    if self.contains_edge(edge)
                        && self.edge(orientation, x, y) == Some(OwnershipState::Nobody)
                    {
                        edges.push(edge);
                    }
                }
            }
        }
        edges
    }

    /// True if row `y` of both grids is the same allocation.
    pub fn shares_row_with(&self, other: &GridState, y: u32) -> bool {
        match (self.cells.get(y as usize), other.cells.get(y as usize)) {
            (Some(a), Some(b)) => Arc::ptr_eq(a, b),
            _ => false,
        }
    }

    /// Returns a new grid with one cell replaced; every other row is shared.
    pub(crate) fn with_cell(&self, x: u32, y: u32, cell: EdgeCell) -> GridState {
        let mut cells = self.cells.clone();
        let mut row = cells[y as usize].to_vec();
        row[x as usize] = cell;
        cells[y as usize] = row.into();
        GridState {
            size: self.size,
            cells,
        }
    }
}

impl Default for GridState {
    fn default() -> Self {
        Self::empty(DEFAULT_GRID_SIZE)
    }
}

impl std::fmt::Display for GridState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (y, row) in self.rows().enumerate() {
            let mut dots = String::new();
            let mut links = String::new();
            for cell in row {
                dots.push('o');
                dots.push_str(match cell.horizontal_edge {
                    OwnershipState::Nobody => "   ",
                    OwnershipState::Player1 => "-1-",
                    OwnershipState::Player2 => "-2-",
                });
                links.push(match cell.vertical_edge {
                    OwnershipState::Nobody => ' ',
                    OwnershipState::Player1 => '1',
                    OwnershipState::Player2 => '2',
                });
                links.push_str("   ");
            }
            writeln!(f, "{}", dots.trim_end())?;
            if y + 1 < self.size as usize {
                writeln!(f, "{}", links.trim_end())?;
            }
        }
        Ok(())
    }
}

/// Grid construction error.
#[derive(Debug, Clone, Display, Error)]
#[display("Grid error: {} at {}:{}", message, file, line)]
pub struct GridError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl GridError {
    /// Creates a new grid error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

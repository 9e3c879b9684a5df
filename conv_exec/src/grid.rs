//! # Grid
//!
//! Cells of the solver's grid and the per-agent paths through them.

// ---------------------------------------------------------------------------
// IMPORTS
// ---------------------------------------------------------------------------

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// DATA STRUCTURES
// ---------------------------------------------------------------------------

/// A cell of the grid.
///
/// `x` is the row (increasing downwards) and `y` the column (increasing to the
/// right), as printed by the solver.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridCell {
    pub x: i32,
    pub y: i32,
}

/// The cells visited by a single agent, one per timestep.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AgentPath {
    cells: Vec<GridCell>,
}

// ---------------------------------------------------------------------------
// IMPLEMENTATIONS
// ---------------------------------------------------------------------------

impl GridCell {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Map a cell of a double resolution ("contracted") grid back onto the
    /// true grid.
    ///
    /// Cells with an odd coordinate are edge midpoints and have no true cell,
    /// in which case `None` is returned. Otherwise both coordinates are halved.
    pub fn contract(self) -> Option<Self> {
        if self.x % 2 != 0 || self.y % 2 != 0 {
            None
        } else {
            Some(Self::new(self.x / 2, self.y / 2))
        }
    }
}

impl AgentPath {
    /// Create a path from an ordered list of cells.
    pub fn new(cells: Vec<GridCell>) -> Self {
        Self { cells }
    }

    /// Add a cell at the end of the path.
    pub fn push(&mut self, cell: GridCell) {
        self.cells.push(cell)
    }

    pub fn cells(&self) -> &[GridCell] {
        &self.cells
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    /// Iterate over every pair of consecutive cells, as `(from, to)`.
    pub fn transitions(&self) -> impl Iterator<Item = (GridCell, GridCell)> + '_ {
        self.cells.windows(2).map(|w| (w[0], w[1]))
    }
}

impl From<Vec<(i32, i32)>> for AgentPath {
    fn from(cells: Vec<(i32, i32)>) -> Self {
        Self::new(cells.into_iter().map(|(x, y)| GridCell::new(x, y)).collect())
    }
}

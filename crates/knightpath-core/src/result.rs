//! Search outcomes and statistics

use serde::{Deserialize, Serialize};

use crate::grid::{Cell, Grid};
use crate::search::SearchQuery;

/// Outcome of one search
///
/// Exceeding the move budget and being unreachable are ordinary outcomes,
/// not errors.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "outcome", rename_all = "snake_case")]
pub enum SearchResult {
    /// Target reached within the budget
    Found { path: Vec<Cell>, move_count: u32 },

    /// Target reachable, but only in more moves than allowed
    ExceedsLimit { move_count: u32 },

    /// No sequence of knight moves connects start and target
    Unreachable,
}

impl SearchResult {
    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    /// Minimum move count, when the target is reachable at all
    pub fn move_count(&self) -> Option<u32> {
        match self {
            Self::Found { move_count, .. } | Self::ExceedsLimit { move_count } => {
                Some(*move_count)
            }
            Self::Unreachable => None,
        }
    }

    pub fn path(&self) -> Option<&[Cell]> {
        match self {
            Self::Found { path, .. } => Some(path),
            _ => None,
        }
    }
}

/// Search statistics
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchStats {
    /// Cells taken off the frontier
    pub cells_expanded: usize,
    /// Cells marked visited, including the start
    pub cells_discovered: usize,
    pub max_depth_reached: u32,
    pub target_reached: bool,
}

/// Query, outcome and statistics of one search
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchReport {
    pub query: SearchQuery,
    pub result: SearchResult,
    pub stats: SearchStats,
}

/// Distance from one start cell to every cell of the board
#[derive(Debug, Clone, Serialize)]
pub struct DistanceMap {
    pub grid: Grid,
    pub start: Cell,
    /// Row-major; `None` marks unreachable cells
    pub distances: Vec<Option<u32>>,
}

impl DistanceMap {
    pub fn distance(&self, cell: Cell) -> Option<u32> {
        self.grid
            .index(cell)
            .and_then(|i| self.distances.get(i).copied().flatten())
    }

    /// Cells reachable from the start, the start included
    pub fn reachable_count(&self) -> usize {
        self.distances.iter().filter(|d| d.is_some()).count()
    }

    /// Largest finite distance from the start
    pub fn eccentricity(&self) -> u32 {
        self.distances.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn is_connected(&self) -> bool {
        self.reachable_count() == self.distances.len()
    }

    /// Distances split into board rows
    pub fn rows(&self) -> impl Iterator<Item = &[Option<u32>]> {
        self.distances.chunks(self.grid.dimension() as usize)
    }
}

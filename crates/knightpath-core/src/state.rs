//! Per-search bookkeeping

use crate::grid::{Cell, Grid};

/// What one search knows about one cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchRecord {
    pub visited: bool,

    /// Moves from the start; `None` until the cell is visited
    pub distance: Option<u32>,

    /// Cell this one was first discovered from; `None` for the start
    pub predecessor: Option<Cell>,
}

/// One record per cell, stored in a flat row-major table
///
/// A state belongs to a single search call. Records are written once: after
/// a cell is visited, later discoveries of it are ignored, so predecessor
/// links can never form a cycle.
#[derive(Debug, Clone)]
pub struct SearchState {
    grid: Grid,
    records: Vec<SearchRecord>,
    visited: usize,
}

impl SearchState {
    pub fn new(grid: Grid) -> Self {
        Self {
            grid,
            records: vec![SearchRecord::default(); grid.cell_count()],
            visited: 0,
        }
    }

    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Forget every visit so the table can be reused
    pub fn reset(&mut self) {
        self.records.fill(SearchRecord::default());
        self.visited = 0;
    }

    pub fn record(&self, cell: Cell) -> Option<&SearchRecord> {
        self.grid.index(cell).map(|i| &self.records[i])
    }

    pub fn is_visited(&self, cell: Cell) -> bool {
        self.record(cell).is_some_and(|r| r.visited)
    }

    pub fn distance(&self, cell: Cell) -> Option<u32> {
        self.record(cell).and_then(|r| r.distance)
    }

    pub fn predecessor(&self, cell: Cell) -> Option<Cell> {
        self.record(cell).and_then(|r| r.predecessor)
    }

    pub fn visited_count(&self) -> usize {
        self.visited
    }

    /// Record the first visit of `cell`
    ///
    /// Returns `false` without touching anything if the cell was already
    /// visited or is off the board.
    pub fn mark_visited(&mut self, cell: Cell, distance: u32, predecessor: Option<Cell>) -> bool {
        let Some(index) = self.grid.index(cell) else {
            return false;
        };
        let record = &mut self.records[index];
        if record.visited {
            return false;
        }
        *record = SearchRecord {
            visited: true,
            distance: Some(distance),
            predecessor,
        };
        self.visited += 1;
        true
    }

    /// Distances for every cell in row-major order
    pub(crate) fn distances(&self) -> Vec<Option<u32>> {
        self.records.iter().map(|r| r.distance).collect()
    }
}

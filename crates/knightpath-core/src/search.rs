//! Bounded breadth-first knight search

use serde::{Deserialize, Serialize};
use std::collections::VecDeque;

use crate::error::Result;
use crate::grid::{Cell, Grid};
use crate::limits::{
    validate_cell, validate_max_depth, ValidationError, DEFAULT_DIMENSION, DEFAULT_MAX_DEPTH,
};
use crate::moves::neighbors;
use crate::path::reconstruct;
use crate::result::{DistanceMap, SearchReport, SearchResult, SearchStats};
use crate::state::SearchState;

/// Search query builder
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchQuery {
    /// Cell the knight starts on
    pub start: Cell,

    /// Cell the knight has to reach
    pub target: Cell,

    /// Board edge length
    #[serde(default = "default_dimension")]
    pub dimension: i32,

    /// Largest move count reported as found
    #[serde(default = "default_max_depth")]
    pub max_depth: i32,
}

fn default_dimension() -> i32 {
    DEFAULT_DIMENSION
}

fn default_max_depth() -> i32 {
    DEFAULT_MAX_DEPTH
}

impl SearchQuery {
    pub fn new(start: impl Into<Cell>, target: impl Into<Cell>) -> Self {
        Self {
            start: start.into(),
            target: target.into(),
            dimension: default_dimension(),
            max_depth: default_max_depth(),
        }
    }

    /// Set the board size
    pub fn on_board(mut self, dimension: i32) -> Self {
        self.dimension = dimension;
        self
    }

    /// Set the move budget
    pub fn with_max_depth(mut self, max_depth: i32) -> Self {
        self.max_depth = max_depth;
        self
    }

    /// Check every precondition and return the board
    pub fn validate(&self) -> std::result::Result<Grid, ValidationError> {
        let grid = Grid::new(self.dimension)?;
        validate_cell(self.start, self.dimension)?;
        validate_cell(self.target, self.dimension)?;
        validate_max_depth(self.max_depth)?;
        Ok(grid)
    }
}

/// Knight search engine
pub struct SearchEngine;

impl SearchEngine {
    /// Minimum knight path from `start` to `target`, bounded by `max_depth`
    pub fn search(
        dimension: i32,
        start: Cell,
        target: Cell,
        max_depth: i32,
    ) -> Result<SearchResult> {
        let query = SearchQuery::new(start, target)
            .on_board(dimension)
            .with_max_depth(max_depth);
        Ok(Self::execute(&query)?.result)
    }

    /// Execute a search query
    pub fn execute(query: &SearchQuery) -> Result<SearchReport> {
        let grid = query.validate()?;

        tracing::debug!(
            "Executing search: start={}, target={}, dimension={}, max_depth={}",
            query.start,
            query.target,
            query.dimension,
            query.max_depth
        );

        let mut state = SearchState::new(grid);
        let stats = Self::bfs(&mut state, query.start, Some(query.target));
        let result = Self::classify(&state, query)?;

        tracing::debug!(
            "Search finished: move_count={:?}, expanded {} cells, discovered {}",
            result.move_count(),
            stats.cells_expanded,
            stats.cells_discovered
        );

        Ok(SearchReport {
            query: query.clone(),
            result,
            stats,
        })
    }

    /// Distance from `start` to every cell of the board
    pub fn distances_from(dimension: i32, start: Cell) -> Result<DistanceMap> {
        let grid = Grid::new(dimension)?;
        validate_cell(start, dimension)?;

        let mut state = SearchState::new(grid);
        let stats = Self::bfs(&mut state, start, None);

        tracing::debug!(
            "Distance map from {} visited {} of {} cells",
            start,
            stats.cells_discovered,
            grid.cell_count()
        );

        Ok(DistanceMap {
            grid,
            start,
            distances: state.distances(),
        })
    }

    /// Layered BFS from `start`, stopping once `target` leaves the frontier
    fn bfs(state: &mut SearchState, start: Cell, target: Option<Cell>) -> SearchStats {
        let dimension = state.grid().dimension();
        let mut stats = SearchStats::default();
        let mut queue: VecDeque<(Cell, u32)> = VecDeque::new();

        state.mark_visited(start, 0, None);
        stats.cells_discovered += 1;
        queue.push_back((start, 0));

        while let Some((current, depth)) = queue.pop_front() {
            stats.cells_expanded += 1;
            if depth > stats.max_depth_reached {
                tracing::trace!("Entering layer {} ({} cells queued)", depth, queue.len() + 1);
                stats.max_depth_reached = depth;
            }

            if Some(current) == target {
                stats.target_reached = true;
                tracing::trace!("Target {} dequeued at depth {}", current, depth);
                break;
            }

            for next in neighbors(current, dimension) {
                if state.mark_visited(next, depth + 1, Some(current)) {
                    stats.cells_discovered += 1;
                    queue.push_back((next, depth + 1));
                }
            }
        }

        stats
    }

    fn classify(state: &SearchState, query: &SearchQuery) -> Result<SearchResult> {
        let Some(move_count) = state.distance(query.target) else {
            return Ok(SearchResult::Unreachable);
        };

        // max_depth is validated non-negative
        if i64::from(move_count) > i64::from(query.max_depth) {
            return Ok(SearchResult::ExceedsLimit { move_count });
        }

        let path = reconstruct(state, query.start, query.target)?;
        Ok(SearchResult::Found { path, move_count })
    }
}

/// Minimum knight path from `start` to `target` on a `dimension` board
///
/// Shorthand for [`SearchEngine::search`].
pub fn search(dimension: i32, start: Cell, target: Cell, max_depth: i32) -> Result<SearchResult> {
    SearchEngine::search(dimension, start, target, max_depth)
}

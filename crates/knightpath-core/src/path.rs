//! Path reconstruction from predecessor links

use crate::error::{Error, Result};
use crate::grid::Cell;
use crate::state::SearchState;

/// Walk predecessor links from `target` back to `start`
///
/// The returned path starts with `start` and ends with `target`, so it holds
/// `distance(target) + 1` cells.
pub fn reconstruct(state: &SearchState, start: Cell, target: Cell) -> Result<Vec<Cell>> {
    if !state.is_visited(target) {
        return Err(Error::TargetNotVisited(target));
    }

    // A chain longer than the board has a cycle or a foreign link.
    let limit = state.grid().cell_count();
    let mut path = vec![target];
    let mut current = target;

    while current != start {
        let prev = state
            .predecessor(current)
            .ok_or(Error::BrokenPath { start, target })?;
        path.push(prev);
        current = prev;

        if path.len() > limit {
            return Err(Error::BrokenPath { start, target });
        }
    }

    path.reverse();
    Ok(path)
}

//! Knight move generation

use crate::grid::{contains, Cell};

/// Squared length of every knight move (1² + 2²)
pub const KNIGHT_SQUARED_DISTANCE: i64 = 5;

/// The eight knight offsets, in the fixed order neighbors are expanded
///
/// Search tie-breaking depends on this order: when two cells at the same
/// distance can both discover a cell, the one expanded first wins.
pub const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// True iff `a` and `b` are one knight move apart
pub fn is_knight_move(a: Cell, b: Cell) -> bool {
    a.squared_distance(b) == KNIGHT_SQUARED_DISTANCE
}

/// All on-board knight destinations from `cell`, in [`KNIGHT_OFFSETS`] order
///
/// An off-board `cell` has no neighbors.
pub fn neighbors(cell: Cell, dimension: i32) -> Vec<Cell> {
    if !contains(cell, dimension) {
        return Vec::new();
    }
    KNIGHT_OFFSETS
        .iter()
        .filter_map(|&offset| cell.offset(offset))
        .filter(|&next| contains(next, dimension))
        .filter(|&next| is_knight_move(cell, next))
        .collect()
}

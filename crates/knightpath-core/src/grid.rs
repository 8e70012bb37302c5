//! Board coordinates and the square grid domain

use serde::{Deserialize, Serialize};
use std::str::FromStr;
use thiserror::Error;

use crate::limits::{validate_dimension, ValidationError};

/// A `(row, col)` coordinate on a square board
///
/// Coordinates are signed so that off-board input can be represented and
/// rejected rather than wrapped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Cell {
    pub row: i32,
    pub col: i32,
}

impl Cell {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Cell reached by applying a `(row, col)` offset, `None` on overflow
    pub fn offset(self, (dr, dc): (i32, i32)) -> Option<Self> {
        Some(Self::new(self.row.checked_add(dr)?, self.col.checked_add(dc)?))
    }

    /// Squared Euclidean distance between two cells
    pub fn squared_distance(self, other: Cell) -> i64 {
        let dr = i64::from(other.row) - i64::from(self.row);
        let dc = i64::from(other.col) - i64::from(self.col);
        // full-range differences square past i64::MAX
        dr.saturating_mul(dr).saturating_add(dc.saturating_mul(dc))
    }

    /// Algebraic name such as `b3` (file from the column, rank from the row)
    ///
    /// Returns `None` when the column has no letter (`col >= 26`) or either
    /// coordinate is negative.
    pub fn to_algebraic(self) -> Option<String> {
        if self.row < 0 || !(0..26).contains(&self.col) {
            return None;
        }
        let file = char::from(b'a' + self.col as u8);
        Some(format!("{}{}", file, self.row + 1))
    }

    /// Parse an algebraic name such as `b3` or `P16`
    pub fn from_algebraic(s: &str) -> Option<Self> {
        let mut chars = s.chars();
        let file = chars.next()?.to_ascii_lowercase();
        if !file.is_ascii_lowercase() {
            return None;
        }
        let digits = chars.as_str();
        if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
            return None;
        }
        let rank: i32 = digits.parse().ok()?;
        if rank < 1 {
            return None;
        }
        Some(Self::new(rank - 1, file as i32 - 'a' as i32))
    }
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

impl From<(i32, i32)> for Cell {
    fn from((row, col): (i32, i32)) -> Self {
        Self::new(row, col)
    }
}

/// Error returned when a cell cannot be parsed from text
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("Invalid cell '{0}': expected 'row,col' or an algebraic name like 'b3'")]
pub struct ParseCellError(pub String);

impl FromStr for Cell {
    type Err = ParseCellError;

    /// Accepts `row,col` (optionally parenthesised) or algebraic notation
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let inner = trimmed
            .strip_prefix('(')
            .and_then(|rest| rest.strip_suffix(')'))
            .unwrap_or(trimmed);

        if let Some((row, col)) = inner.split_once(',') {
            let row = row.trim().parse().map_err(|_| ParseCellError(s.to_string()))?;
            let col = col.trim().parse().map_err(|_| ParseCellError(s.to_string()))?;
            return Ok(Self::new(row, col));
        }

        Self::from_algebraic(inner).ok_or_else(|| ParseCellError(s.to_string()))
    }
}

/// True iff `0 <= row < dimension` and `0 <= col < dimension`
pub fn contains(cell: Cell, dimension: i32) -> bool {
    (0..dimension).contains(&cell.row) && (0..dimension).contains(&cell.col)
}

/// A validated `dimension x dimension` board
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Grid {
    dimension: i32,
}

impl Grid {
    pub fn new(dimension: i32) -> Result<Self, ValidationError> {
        validate_dimension(dimension)?;
        Ok(Self { dimension })
    }

    pub fn dimension(&self) -> i32 {
        self.dimension
    }

    pub fn contains(&self, cell: Cell) -> bool {
        contains(cell, self.dimension)
    }

    /// Number of cells on the board
    pub fn cell_count(&self) -> usize {
        let edge = self.dimension as usize;
        edge * edge
    }

    /// Row-major slot of a cell in a flat per-cell table
    pub fn index(&self, cell: Cell) -> Option<usize> {
        if !self.contains(cell) {
            return None;
        }
        Some(cell.row as usize * self.dimension as usize + cell.col as usize)
    }

    /// Inverse of [`Grid::index`]
    pub fn cell_at(&self, index: usize) -> Option<Cell> {
        if index >= self.cell_count() {
            return None;
        }
        let edge = self.dimension as usize;
        Some(Cell::new((index / edge) as i32, (index % edge) as i32))
    }

    /// All cells in row-major order
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let dimension = self.dimension;
        (0..dimension).flat_map(move |row| (0..dimension).map(move |col| Cell::new(row, col)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains_bounds() {
        assert!(contains(Cell::new(0, 0), 8));
        assert!(contains(Cell::new(7, 7), 8));
        assert!(!contains(Cell::new(8, 7), 8));
        assert!(!contains(Cell::new(7, 8), 8));
        assert!(!contains(Cell::new(-1, 0), 8));
        assert!(!contains(Cell::new(0, -1), 8));
        assert!(!contains(Cell::new(0, 0), 0));
    }

    #[test]
    fn test_last_row_is_on_board() {
        // every row up to dimension - 1 is inside, including the last one
        for row in 0..6 {
            assert!(contains(Cell::new(row, 3), 6));
        }
    }

    #[test]
    fn test_grid_rejects_bad_dimension() {
        assert!(Grid::new(0).is_err());
        assert!(Grid::new(-3).is_err());
        assert_eq!(Grid::new(1).unwrap().cell_count(), 1);
    }

    #[test]
    fn test_index_is_row_major() {
        let grid = Grid::new(5).unwrap();
        assert_eq!(grid.index(Cell::new(0, 0)), Some(0));
        assert_eq!(grid.index(Cell::new(1, 0)), Some(5));
        assert_eq!(grid.index(Cell::new(4, 4)), Some(24));
        assert_eq!(grid.index(Cell::new(5, 0)), None);

        for (i, cell) in grid.cells().enumerate() {
            assert_eq!(grid.index(cell), Some(i));
            assert_eq!(grid.cell_at(i), Some(cell));
        }
        assert_eq!(grid.cell_at(25), None);
    }

    #[test]
    fn test_parse_cell() {
        assert_eq!("2,3".parse::<Cell>().unwrap(), Cell::new(2, 3));
        assert_eq!(" (0, 1) ".parse::<Cell>().unwrap(), Cell::new(0, 1));
        assert_eq!("-1,0".parse::<Cell>().unwrap(), Cell::new(-1, 0));
        assert_eq!("a1".parse::<Cell>().unwrap(), Cell::new(0, 0));
        assert_eq!("H8".parse::<Cell>().unwrap(), Cell::new(7, 7));
        assert_eq!("p16".parse::<Cell>().unwrap(), Cell::new(15, 15));
        assert!("".parse::<Cell>().is_err());
        assert!("a0".parse::<Cell>().is_err());
        assert!("1;2".parse::<Cell>().is_err());
        assert!("knight".parse::<Cell>().is_err());
        assert!("a+3".parse::<Cell>().is_err());
        assert!("a-3".parse::<Cell>().is_err());
        assert!("a 3".parse::<Cell>().is_err());
        assert_eq!(Cell::from_algebraic("a+3"), None);
    }

    #[test]
    fn test_algebraic_names() {
        assert_eq!(Cell::new(0, 0).to_algebraic().as_deref(), Some("a1"));
        assert_eq!(Cell::new(2, 1).to_algebraic().as_deref(), Some("b3"));
        assert_eq!(Cell::new(0, 26).to_algebraic(), None);
        assert_eq!(Cell::new(-1, 0).to_algebraic(), None);
    }

    #[test]
    fn test_squared_distance() {
        let origin = Cell::new(0, 0);
        assert_eq!(origin.squared_distance(Cell::new(1, 2)), 5);
        assert_eq!(origin.squared_distance(Cell::new(2, 2)), 8);
        assert_eq!(Cell::new(3, 3).squared_distance(Cell::new(1, 4)), 5);
    }

    #[test]
    fn test_extreme_coordinates_do_not_overflow() {
        let far = Cell::new(i32::MAX, i32::MIN);
        assert!(far.squared_distance(Cell::new(i32::MIN, i32::MAX)) > 5);
        assert_eq!(Cell::new(0, 0).squared_distance(Cell::new(50_000, 0)), 2_500_000_000);
        assert_eq!(Cell::new(i32::MAX, 0).offset((1, 0)), None);
        assert_eq!(Cell::new(0, i32::MIN).offset((0, -2)), None);
        assert_eq!(Cell::new(3, 3).offset((-2, 1)), Some(Cell::new(1, 4)));
    }
}

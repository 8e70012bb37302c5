//! Knightpath Core - Bounded knight shortest-path search
//!
//! This crate finds the fewest knight moves between two cells of a square
//! board, reconstructs one such move sequence, and reports whether the
//! target is within a move budget, beyond it, or unreachable.

pub mod error;
pub mod grid;
pub mod limits;
pub mod moves;
pub mod path;
pub mod result;
pub mod search;
pub mod state;

pub use error::{Error, Result};
pub use grid::{contains, Cell, Grid, ParseCellError};
pub use limits::ValidationError;
pub use moves::{is_knight_move, neighbors, KNIGHT_OFFSETS};
pub use path::reconstruct;
pub use result::{DistanceMap, SearchReport, SearchResult, SearchStats};
pub use search::{search, SearchEngine, SearchQuery};
pub use state::{SearchRecord, SearchState};

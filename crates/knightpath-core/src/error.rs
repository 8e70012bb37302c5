//! Error types for Knightpath Core

use thiserror::Error;

use crate::grid::Cell;
use crate::limits::ValidationError;

/// Result type alias using Knightpath's Error
pub type Result<T> = std::result::Result<T, Error>;

/// Knightpath error types
///
/// Only malformed calls are errors. A target that is out of the move
/// budget or not reachable at all is reported through
/// [`SearchResult`](crate::SearchResult) instead.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("Invalid input: {0}")]
    InvalidInput(#[from] ValidationError),

    #[error("Target {0} was not visited by the search")]
    TargetNotVisited(Cell),

    #[error("Predecessor chain from {target} does not lead back to {start}")]
    BrokenPath { start: Cell, target: Cell },
}

impl Error {
    /// True for caller mistakes that can be fixed by re-validating input
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, Self::InvalidInput(_))
    }
}

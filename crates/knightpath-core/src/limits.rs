//! Input validation limits for search calls

use crate::grid::Cell;

/// Smallest board edge accepted (1)
pub const MIN_DIMENSION: i32 = 1;

/// Largest board edge accepted (1024, about one million cells)
pub const MAX_DIMENSION: i32 = 1024;

/// Board edge used when the caller does not pick one (8)
pub const DEFAULT_DIMENSION: i32 = 8;

/// Move budget used when the caller does not pick one (3)
pub const DEFAULT_MAX_DEPTH: i32 = 3;

/// Board sizes offered to interactive users (6..=16)
pub const RECOMMENDED_DIMENSIONS: std::ops::RangeInclusive<i32> = 6..=16;

/// Validation error type
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    DimensionTooSmall { dimension: i32, min: i32 },
    DimensionTooLarge { dimension: i32, max: i32 },
    CellOutOfBounds { cell: Cell, dimension: i32 },
    NegativeDepth { depth: i32 },
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DimensionTooSmall { dimension, min } => {
                write!(f, "Board dimension too small: {} (min {})", dimension, min)
            }
            Self::DimensionTooLarge { dimension, max } => {
                write!(f, "Board dimension too large: {} (max {})", dimension, max)
            }
            Self::CellOutOfBounds { cell, dimension } => {
                write!(
                    f,
                    "Cell {} is outside a {}x{} board",
                    cell, dimension, dimension
                )
            }
            Self::NegativeDepth { depth } => {
                write!(f, "Maximum depth cannot be negative: {}", depth)
            }
        }
    }
}

impl std::error::Error for ValidationError {}

/// Validate board dimension
pub fn validate_dimension(dimension: i32) -> Result<(), ValidationError> {
    if dimension < MIN_DIMENSION {
        return Err(ValidationError::DimensionTooSmall {
            dimension,
            min: MIN_DIMENSION,
        });
    }
    if dimension > MAX_DIMENSION {
        return Err(ValidationError::DimensionTooLarge {
            dimension,
            max: MAX_DIMENSION,
        });
    }
    Ok(())
}

/// Validate that a cell lies on the board
pub fn validate_cell(cell: Cell, dimension: i32) -> Result<(), ValidationError> {
    if !crate::grid::contains(cell, dimension) {
        return Err(ValidationError::CellOutOfBounds { cell, dimension });
    }
    Ok(())
}

/// Validate the move budget
pub fn validate_max_depth(depth: i32) -> Result<(), ValidationError> {
    if depth < 0 {
        return Err(ValidationError::NegativeDepth { depth });
    }
    Ok(())
}

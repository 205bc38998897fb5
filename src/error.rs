//! Errors raised while building or addressing a [`Grid`](crate::grid::Grid)

use crate::constants::MIN_DIMENSION;
use thiserror::Error;

/// Errors from grid construction and cell access
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum MazeError {
    /// Width or height is too small or even
    #[error("invalid maze dimensions {width}x{height}: both must be odd and at least {min}", min = MIN_DIMENSION)]
    InvalidDimension {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// Width times height does not fit in memory
    #[error("maze dimensions {width}x{height} are too large")]
    TooLarge {
        /// Requested width
        width: usize,
        /// Requested height
        height: usize,
    },
    /// A coordinate outside of the grid was accessed
    #[error("({x}, {y}) is outside of the {width}x{height} grid")]
    OutOfBounds {
        /// Requested column
        x: usize,
        /// Requested row
        y: usize,
        /// Grid width
        width: usize,
        /// Grid height
        height: usize,
    },
    /// Rows handed to [`Grid::try_from`](crate::grid::Grid) are not all the same length
    #[error("row {row} has {len} cells, expected {expected}")]
    Ragged {
        /// Index of the offending row
        row: usize,
        /// Its length
        len: usize,
        /// Length of the first row
        expected: usize,
    },
}

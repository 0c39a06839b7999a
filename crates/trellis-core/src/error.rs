//! Error types for grid construction and replacement.
//!
//! Out-of-range *queries* are not errors: they come back as `None`.
//! Only construction and `Grid::replace` report a `GridError`.

use crate::location::Location;
use std::error::Error;
use std::fmt;

/// Errors arising from grid construction or copy-on-write replacement.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GridError {
    /// A row's length differs from the first row's length.
    InvalidShape {
        /// Index of the first offending row.
        row: usize,
        /// Column count established by row 0.
        expected: usize,
        /// Column count of the offending row.
        found: usize,
    },
    /// A location lies outside `[0, rows) x [0, cols)`.
    OutOfBounds {
        /// The offending location.
        location: Location,
        /// Row count of the grid.
        rows: usize,
        /// Column count of the grid.
        cols: usize,
    },
    /// Attempted to construct a grid with no rows or no columns.
    EmptyGrid,
    /// A dimension cannot be addressed by `i32` coordinates.
    DimensionTooLarge {
        /// Which dimension (`"rows"` or `"cols"`).
        name: &'static str,
        /// The requested size.
        value: usize,
        /// The maximum allowed size.
        max: usize,
    },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidShape {
                row,
                expected,
                found,
            } => write!(
                f,
                "grid is not uniform: row {row} has {found} columns, expected {expected}"
            ),
            Self::OutOfBounds {
                location,
                rows,
                cols,
            } => write!(
                f,
                "location {location} out of bounds: [0, {rows}) x [0, {cols})"
            ),
            Self::EmptyGrid => write!(f, "grid must have at least one row and one column"),
            Self::DimensionTooLarge { name, value, max } => {
                write!(f, "{name} dimension {value} exceeds maximum {max}")
            }
        }
    }
}

impl Error for GridError {}

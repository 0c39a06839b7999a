//! Trellis: immutable rectangular grids for grid-walking algorithms.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Trellis sub-crates. For most users, adding `trellis` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use trellis::prelude::*;
//!
//! let grid = Grid::<char>::from_lines(["XMAS", "MASX", "ASXM"], |line| line.chars().collect()).unwrap();
//!
//! // Directional lookups are absent, not errors, past the edge.
//! let origin = Location::new(0, 0);
//! assert_eq!(grid.element_at(origin, Direction::SouthEast, 2), Some(&'X'));
//! assert_eq!(grid.element_at(origin, Direction::North, 1), None);
//!
//! // Runs are all-or-nothing.
//! assert_eq!(grid.collect(origin, Direction::East, 4), Some("XMAS".chars().collect()));
//! assert_eq!(grid.collect(origin, Direction::East, 5), None);
//!
//! // Replacement returns a new grid and leaves the original alone.
//! let edited = grid.replace(origin, '.').unwrap();
//! assert_eq!(grid[origin], 'X');
//! assert_eq!(edited[origin], '.');
//! assert!(matches!(
//!     grid.replace(Location::new(9, 9), '.'),
//!     Err(GridError::OutOfBounds { .. })
//! ));
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`types`] | `trellis-core` | `Location`, `Direction`, `GridError` |
//! | [`grid`] | `trellis-grid` | `Grid` and its iterators |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Coordinate, direction, and error types (`trellis-core`).
pub use trellis_core as types;

/// The grid container and its iterators (`trellis-grid`).
///
/// Provides [`grid::Grid`] plus the lazy [`grid::Locations`] and
/// [`grid::Run`] iterators it hands out.
pub use trellis_grid as grid;

/// Common imports for typical Trellis usage.
///
/// ```rust
/// use trellis::prelude::*;
/// ```
pub mod prelude {
    pub use trellis_core::{Direction, GridError, Location};
    pub use trellis_grid::Grid;
}

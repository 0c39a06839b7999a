//! Row/column coordinates.

use crate::direction::Direction;
use std::fmt;
use std::ops::Add;

/// A `(row, col)` coordinate on a grid.
///
/// A location carries no bounds of its own: either component may be
/// negative or past the edge of any particular grid. Validity is checked
/// by the grid that consumes it.
///
/// Ordering is row-major, so sorting locations yields the same sequence
/// a grid traversal produces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Location {
    /// Row index, zero at the top.
    pub row: i32,
    /// Column index, zero at the left.
    pub col: i32,
}

impl Location {
    /// Create a location from its row and column.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// Move `distance` steps in `direction`.
    ///
    /// A distance of zero returns `self`; a negative distance moves
    /// against the direction. Never fails: any result representable as
    /// `i32` is exact, anything else clamps to the `i32` limits, which lie
    /// outside every grid.
    pub const fn offset(self, direction: Direction, distance: i32) -> Self {
        let (dr, dc) = direction.delta();
        Self {
            row: clamped_sum(self.row, dr, distance),
            col: clamped_sum(self.col, dc, distance),
        }
    }

    /// Move a single step in `direction`.
    pub const fn step(self, direction: Direction) -> Self {
        self.offset(direction, 1)
    }
}

/// `base + delta * distance`, computed in `i64` and clamped into `i32`.
const fn clamped_sum(base: i32, delta: i32, distance: i32) -> i32 {
    let exact = base as i64 + delta as i64 * distance as i64;
    if exact > i32::MAX as i64 {
        i32::MAX
    } else if exact < i32::MIN as i64 {
        i32::MIN
    } else {
        exact as i32
    }
}

impl From<(i32, i32)> for Location {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

impl Add<Direction> for Location {
    type Output = Location;

    fn add(self, direction: Direction) -> Location {
        self.step(direction)
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{Row: {}, Col: {}}}", self.row, self.col)
    }
}

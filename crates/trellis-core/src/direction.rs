//! The eight compass directions and their unit step vectors.

use std::fmt;

/// One of the eight compass directions on a row/column grid.
///
/// Each direction maps to a fixed unit vector `(row_delta, col_delta)` with
/// both components in `{-1, 0, 1}` and never both zero. Rows grow
/// downward, so [`North`](Direction::North) is `(-1, 0)` and
/// [`East`](Direction::East) is `(0, 1)`.
///
/// # Examples
///
/// ```
/// use trellis_core::Direction;
///
/// assert_eq!(Direction::NorthEast.delta(), (-1, 1));
/// assert_eq!(Direction::NorthEast.opposite(), Direction::SouthWest);
/// assert_eq!(Direction::ALL.len(), 8);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Direction {
    /// Up one row.
    North,
    /// Up one row, right one column.
    NorthEast,
    /// Right one column.
    East,
    /// Down one row, right one column.
    SouthEast,
    /// Down one row.
    South,
    /// Down one row, left one column.
    SouthWest,
    /// Left one column.
    West,
    /// Up one row, left one column.
    NorthWest,
}

impl Direction {
    /// All eight directions, clockwise from North.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::NorthEast,
        Direction::East,
        Direction::SouthEast,
        Direction::South,
        Direction::SouthWest,
        Direction::West,
        Direction::NorthWest,
    ];

    /// The four axis-aligned directions: N, E, S, W.
    pub const CARDINAL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The four diagonal directions: NE, SE, SW, NW.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthEast,
        Direction::SouthEast,
        Direction::SouthWest,
        Direction::NorthWest,
    ];

    /// The unit step vector as `(row_delta, col_delta)`.
    pub const fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::NorthEast => (-1, 1),
            Direction::East => (0, 1),
            Direction::SouthEast => (1, 1),
            Direction::South => (1, 0),
            Direction::SouthWest => (1, -1),
            Direction::West => (0, -1),
            Direction::NorthWest => (-1, -1),
        }
    }

    /// Row component of [`delta`](Self::delta).
    pub const fn row_delta(self) -> i32 {
        self.delta().0
    }

    /// Column component of [`delta`](Self::delta).
    pub const fn col_delta(self) -> i32 {
        self.delta().1
    }

    /// Position of this direction within [`Direction::ALL`].
    const fn index(self) -> usize {
        self as usize
    }

    /// The direction pointing the other way (rotated 180°).
    pub const fn opposite(self) -> Direction {
        Self::ALL[(self.index() + 4) % 8]
    }

    /// The next direction clockwise (rotated 45°).
    pub const fn rotate_clockwise(self) -> Direction {
        Self::ALL[(self.index() + 1) % 8]
    }

    /// The next direction counter-clockwise (rotated −45°).
    pub const fn rotate_counter_clockwise(self) -> Direction {
        Self::ALL[(self.index() + 7) % 8]
    }

    /// `true` for the four diagonal directions.
    pub const fn is_diagonal(self) -> bool {
        let (dr, dc) = self.delta();
        dr != 0 && dc != 0
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Direction::North => "North",
            Direction::NorthEast => "NorthEast",
            Direction::East => "East",
            Direction::SouthEast => "SouthEast",
            Direction::South => "South",
            Direction::SouthWest => "SouthWest",
            Direction::West => "West",
            Direction::NorthWest => "NorthWest",
        };
        f.write_str(name)
    }
}

//! Row-major traversal: `(0,0), (0,1), ..., (rows-1, cols-1)`.

use crate::grid::Grid;
use std::iter::FusedIterator;
use trellis_core::Location;

/// Lazy row-major iterator over every [`Location`] of a grid.
///
/// Created by [`Grid::locations`]. Holds only the grid's shape, so it
/// never borrows the grid and always yields exactly `rows * cols` items.
#[derive(Clone, Debug)]
pub struct Locations {
    next: usize,
    end: usize,
    cols: usize,
}

impl Locations {
    pub(crate) fn new(rows: usize, cols: usize) -> Self {
        Self {
            next: 0,
            end: rows * cols,
            cols,
        }
    }

    fn location_at(&self, rank: usize) -> Location {
        // Both axes are bounded by Grid::MAX_DIM, so the casts are lossless.
        Location::new((rank / self.cols) as i32, (rank % self.cols) as i32)
    }
}

impl Iterator for Locations {
    type Item = Location;

    fn next(&mut self) -> Option<Location> {
        if self.next >= self.end {
            return None;
        }
        let loc = self.location_at(self.next);
        self.next += 1;
        Some(loc)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.end - self.next;
        (n, Some(n))
    }

    fn nth(&mut self, n: usize) -> Option<Location> {
        self.next = self.next.saturating_add(n).min(self.end);
        self.next()
    }
}

impl DoubleEndedIterator for Locations {
    fn next_back(&mut self) -> Option<Location> {
        if self.next >= self.end {
            return None;
        }
        self.end -= 1;
        Some(self.location_at(self.end))
    }
}

impl ExactSizeIterator for Locations {}

impl FusedIterator for Locations {}

impl<T> Grid<T> {
    /// Every location in row-major order.
    ///
    /// Each call starts a fresh enumeration.
    pub fn locations(&self) -> Locations {
        Locations::new(self.row_count(), self.cols)
    }

    /// Call `visit` once for every location, in row-major order.
    pub fn traverse(&self, visit: impl FnMut(Location)) {
        self.locations().for_each(visit);
    }

    /// Every `(location, element)` pair in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = (Location, &T)> + '_ {
        self.locations()
            .zip(self.rows.iter().flat_map(|row| row.iter()))
    }

    /// Row-major rank of `location`: `row * col_count() + col`.
    ///
    /// Returns `None` if `location` is out of bounds.
    pub fn rank(&self, location: impl Into<Location>) -> Option<usize> {
        let (r, c) = self.index_of(location.into())?;
        Some(r * self.cols + c)
    }
}

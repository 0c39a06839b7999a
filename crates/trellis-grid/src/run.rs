//! Directional lookups and contiguous runs of cells.
//!
//! A run starts at a location and proceeds one unit step at a time in a
//! single [`Direction`]. Runs are all-or-nothing: if the final cell falls
//! outside the grid the whole run is rejected, never truncated.

use crate::grid::Grid;
use std::iter::FusedIterator;
use trellis_core::{Direction, Location};

/// Lazy iterator over the elements of an in-bounds run.
///
/// Created by [`Grid::run`]. Every location it visits has already been
/// validated, so iteration cannot fail.
#[derive(Clone, Debug)]
pub struct Run<'a, T> {
    grid: &'a Grid<T>,
    at: Location,
    direction: Direction,
    remaining: usize,
}

impl<'a, T> Iterator for Run<'a, T> {
    type Item = &'a T;

    fn next(&mut self) -> Option<&'a T> {
        if self.remaining == 0 {
            return None;
        }
        let item = self.grid.get(self.at);
        self.remaining -= 1;
        self.at = self.at.step(self.direction);
        item
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<T> ExactSizeIterator for Run<'_, T> {}

impl<T> FusedIterator for Run<'_, T> {}

impl<T> Grid<T> {
    /// The element `distance` steps from `from` in `direction`.
    ///
    /// A distance of zero looks at `from` itself; a negative distance
    /// looks against the direction. Returns `None` when the target is out
    /// of bounds.
    pub fn element_at(
        &self,
        from: impl Into<Location>,
        direction: Direction,
        distance: i32,
    ) -> Option<&T> {
        self.get(from.into().offset(direction, distance))
    }

    /// The `count` cells starting at `from` (inclusive) and stepping in
    /// `direction`.
    ///
    /// Returns `None` if the last cell of the run, or `from` itself, is
    /// out of bounds, and also for `count == 0`: an empty run has no cell
    /// to anchor it. A `count` of 1 yields just the element at `from`.
    pub fn run(
        &self,
        from: impl Into<Location>,
        direction: Direction,
        count: usize,
    ) -> Option<Run<'_, T>> {
        let from = from.into();
        let last = i32::try_from(count.checked_sub(1)?).ok()?;
        if !self.is_in_bounds(from) || !self.is_in_bounds(from.offset(direction, last)) {
            return None;
        }
        Some(Run {
            grid: self,
            at: from,
            direction,
            remaining: count,
        })
    }

    /// Owned version of [`run`](Self::run): the run's elements as a `Vec`.
    pub fn collect(
        &self,
        from: impl Into<Location>,
        direction: Direction,
        count: usize,
    ) -> Option<Vec<T>>
    where
        T: Clone,
    {
        self.run(from, direction, count)
            .map(|run| run.cloned().collect())
    }
}

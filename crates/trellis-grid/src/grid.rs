//! The immutable rectangular [`Grid`] and its bounds-checked access.

use std::ops::Index;
use std::sync::Arc;
use trellis_core::{GridError, Location};

/// An immutable, rectangular grid of `T`.
///
/// Each cell has coordinate `(row, col)` with `0 <= row < row_count()` and
/// `0 <= col < col_count()`. Every row holds exactly `col_count()`
/// elements; construction rejects anything else.
///
/// Rows are stored as reference-counted slices. Cloning a grid, or
/// producing a new one with [`replace`](Grid::replace), shares all rows
/// that were not changed, so a grid and its descendants can be read from
/// many threads at once without locking.
///
/// # Examples
///
/// ```
/// use trellis_grid::{Direction, Grid, Location};
///
/// let grid = Grid::new(vec![vec![1, 2, 3], vec![4, 5, 6], vec![7, 8, 9]]).unwrap();
/// assert_eq!(grid.element_at(Location::new(0, 0), Direction::East, 2), Some(&3));
/// assert_eq!(grid.collect(Location::new(0, 0), Direction::SouthEast, 3), Some(vec![1, 5, 9]));
///
/// let edited = grid.replace(Location::new(0, 0), 99).unwrap();
/// assert_eq!(grid[(0, 0)], 1);
/// assert_eq!(edited[(0, 0)], 99);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Grid<T> {
    pub(crate) rows: Vec<Arc<[T]>>,
    pub(crate) cols: usize,
}

impl<T> Grid<T> {
    /// Largest row or column count: coordinates use `i32`, so each axis must fit.
    pub const MAX_DIM: usize = i32::MAX as usize;

    /// Build a grid from rows of elements.
    ///
    /// Returns `Err(GridError::EmptyGrid)` if there are no rows or the
    /// first row is empty, `Err(GridError::InvalidShape)` naming the first
    /// row whose length differs from row 0, or
    /// `Err(GridError::DimensionTooLarge)` if either axis exceeds
    /// [`MAX_DIM`](Self::MAX_DIM).
    pub fn new(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        let cols = match rows.first() {
            Some(first) if !first.is_empty() => first.len(),
            _ => {
                tracing::debug!(rows = rows.len(), "rejected empty grid");
                return Err(GridError::EmptyGrid);
            }
        };
        if let Some((row, found)) = rows
            .iter()
            .map(Vec::len)
            .enumerate()
            .find(|&(_, len)| len != cols)
        {
            tracing::debug!(row, expected = cols, found, "rejected non-rectangular grid");
            return Err(GridError::InvalidShape {
                row,
                expected: cols,
                found,
            });
        }
        Self::check_dims(rows.len(), cols)?;
        tracing::trace!(rows = rows.len(), cols, "grid constructed");
        Ok(Self {
            rows: rows.into_iter().map(Arc::from).collect(),
            cols,
        })
    }

    /// Build a grid by converting each input line into a row.
    ///
    /// `convert` turns one line into that row's elements, e.g.
    /// `|line| line.chars().collect()`. The resulting rows go through the
    /// same validation as [`Grid::new`].
    pub fn from_lines<I, S, F>(lines: I, mut convert: F) -> Result<Self, GridError>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
        F: FnMut(&str) -> Vec<T>,
    {
        let rows = lines
            .into_iter()
            .map(|line| convert(line.as_ref()))
            .collect();
        Self::new(rows)
    }

    /// Reject either axis exceeding [`MAX_DIM`](Self::MAX_DIM).
    fn check_dims(rows: usize, cols: usize) -> Result<(), GridError> {
        if rows > Self::MAX_DIM {
            return Err(Self::too_large("rows", rows));
        }
        if cols > Self::MAX_DIM {
            return Err(Self::too_large("cols", cols));
        }
        Ok(())
    }

    fn too_large(name: &'static str, value: usize) -> GridError {
        tracing::debug!(name, value, max = Self::MAX_DIM, "rejected oversized grid");
        GridError::DimensionTooLarge {
            name,
            value,
            max: Self::MAX_DIM,
        }
    }

    /// Number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns.
    pub fn col_count(&self) -> usize {
        self.cols
    }

    /// Total number of cells, `row_count() * col_count()`.
    pub fn cell_count(&self) -> usize {
        self.rows.len() * self.cols
    }

    /// `true` iff `0 <= row < row_count()` and `0 <= col < col_count()`.
    pub fn is_in_bounds(&self, location: impl Into<Location>) -> bool {
        self.index_of(location.into()).is_some()
    }

    /// Convert an in-bounds location to `(row, col)` storage indices.
    pub(crate) fn index_of(&self, location: Location) -> Option<(usize, usize)> {
        let r = usize::try_from(location.row).ok()?;
        let c = usize::try_from(location.col).ok()?;
        (r < self.rows.len() && c < self.cols).then_some((r, c))
    }

    /// The element at `location`, or `None` if it is out of bounds.
    ///
    /// Use indexing (`grid[location]`) when the caller has already
    /// established the location is in bounds.
    pub fn get(&self, location: impl Into<Location>) -> Option<&T> {
        let (r, c) = self.index_of(location.into())?;
        Some(&self.rows[r][c])
    }

    /// Iterate over the rows as slices, top to bottom.
    pub fn rows(&self) -> impl ExactSizeIterator<Item = &[T]> + '_ {
        self.rows.iter().map(|row| &row[..])
    }

    /// A new grid equal to this one except `location` holds `element`.
    ///
    /// Only the affected row is copied; every other row is shared with
    /// `self`, which is left unchanged. Returns
    /// `Err(GridError::OutOfBounds)` if `location` is outside the grid.
    pub fn replace(&self, location: impl Into<Location>, element: T) -> Result<Self, GridError>
    where
        T: Clone,
    {
        let location = location.into();
        let Some((r, c)) = self.index_of(location) else {
            tracing::debug!(
                %location,
                rows = self.row_count(),
                cols = self.cols,
                "replace out of bounds"
            );
            return Err(GridError::OutOfBounds {
                location,
                rows: self.row_count(),
                cols: self.cols,
            });
        };
        let mut row = self.rows[r].to_vec();
        row[c] = element;
        let mut rows = self.rows.clone();
        rows[r] = Arc::from(row);
        Ok(Self {
            rows,
            cols: self.cols,
        })
    }

    /// Apply `f` to every cell, producing a grid of the same shape.
    pub fn map<U>(&self, mut f: impl FnMut(&T) -> U) -> Grid<U> {
        Grid {
            rows: self
                .rows
                .iter()
                .map(|row| row.iter().map(&mut f).collect())
                .collect(),
            cols: self.cols,
        }
    }
}

impl<T> TryFrom<Vec<Vec<T>>> for Grid<T> {
    type Error = GridError;

    fn try_from(rows: Vec<Vec<T>>) -> Result<Self, GridError> {
        Self::new(rows)
    }
}

/// Raw indexing. Panics if `location` is out of bounds.
impl<T> Index<Location> for Grid<T> {
    type Output = T;

    fn index(&self, location: Location) -> &T {
        match self.index_of(location) {
            Some((r, c)) => &self.rows[r][c],
            None => panic!(
                "location {location} out of bounds: [0, {}) x [0, {})",
                self.row_count(),
                self.cols
            ),
        }
    }
}

/// Raw `(row, col)` indexing. Panics if either index is out of range.
impl<T> Index<(usize, usize)> for Grid<T> {
    type Output = T;

    fn index(&self, (row, col): (usize, usize)) -> &T {
        assert!(
            row < self.rows.len(),
            "row {row} out of bounds: grid has {} rows",
            self.rows.len()
        );
        assert!(
            col < self.cols,
            "column {col} out of bounds: grid has {} columns",
            self.cols
        );
        &self.rows[row][col]
    }
}

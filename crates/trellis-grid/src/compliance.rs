//! Grid invariant compliance helpers.
//!
//! These functions verify that a grid satisfies the invariants every
//! query relies on. Reused across the test modules of this crate on grids
//! of several shapes.

use crate::grid::Grid;
use indexmap::IndexSet;
use std::fmt::Debug;
use trellis_core::{Direction, Location};

/// Assert every row has `col_count` elements and the counts multiply out.
pub fn assert_rectangular<T>(grid: &Grid<T>) {
    for (i, row) in grid.rows().enumerate() {
        assert_eq!(
            row.len(),
            grid.col_count(),
            "row {i} has {} columns, expected {}",
            row.len(),
            grid.col_count()
        );
    }
    assert_eq!(grid.rows().len(), grid.row_count());
    assert_eq!(grid.cell_count(), grid.row_count() * grid.col_count());
}

/// Assert `locations` covers exactly `cell_count` unique in-bounds cells.
pub fn assert_traversal_complete<T>(grid: &Grid<T>) {
    let visited: IndexSet<Location> = grid.locations().collect();
    assert_eq!(
        visited.len(),
        grid.cell_count(),
        "traversal visited {} unique cells, expected {}",
        visited.len(),
        grid.cell_count()
    );
    for loc in &visited {
        assert!(grid.is_in_bounds(*loc), "traversal left the grid at {loc}");
    }
}

/// Assert traversal order is row-major and agrees with `rank`.
pub fn assert_traversal_row_major<T>(grid: &Grid<T>) {
    let mut prev: Option<Location> = None;
    for (i, loc) in grid.locations().enumerate() {
        if let Some(p) = prev {
            assert!(p < loc, "traversal not row-major: {p} before {loc}");
        }
        assert_eq!(grid.rank(loc), Some(i), "rank({loc}) != {i}");
        prev = Some(loc);
    }
}

/// Assert two traversals yield the same sequence.
pub fn assert_traversal_deterministic<T>(grid: &Grid<T>) {
    let a: Vec<_> = grid.locations().collect();
    let b: Vec<_> = grid.locations().collect();
    assert_eq!(a, b, "locations() is non-deterministic");
}

/// Assert `get`, indexing, and `cells` agree for every cell.
pub fn assert_indexing_consistent<T: PartialEq + Debug>(grid: &Grid<T>) {
    for (loc, value) in grid.cells() {
        assert_eq!(grid.get(loc), Some(value), "get({loc}) disagrees with cells()");
        assert_eq!(&grid[loc], value, "grid[{loc}] disagrees with cells()");
    }
}

/// Assert the ring of cells just outside the grid is out of bounds.
pub fn assert_border_out_of_bounds<T>(grid: &Grid<T>) {
    let rows = grid.row_count() as i32;
    let cols = grid.col_count() as i32;
    for r in -1..=rows {
        for c in [-1, cols] {
            assert!(!grid.is_in_bounds((r, c)), "({r}, {c}) reported in bounds");
            assert!(grid.get((r, c)).is_none());
        }
    }
    for c in -1..=cols {
        for r in [-1, rows] {
            assert!(!grid.is_in_bounds((r, c)), "({r}, {c}) reported in bounds");
        }
    }
}

/// Assert a single-cell run from every location yields just that cell.
pub fn assert_unit_runs<T: PartialEq + Debug>(grid: &Grid<T>) {
    for (loc, value) in grid.cells() {
        for d in Direction::ALL {
            let run: Vec<&T> = grid
                .run(loc, d, 1)
                .unwrap_or_else(|| panic!("unit run at {loc} toward {d} rejected"))
                .collect();
            assert_eq!(run, vec![value]);
        }
    }
}

/// Run all compliance checks on a grid.
pub fn run_full_compliance<T: PartialEq + Debug>(grid: &Grid<T>) {
    assert_rectangular(grid);
    assert_traversal_complete(grid);
    assert_traversal_row_major(grid);
    assert_traversal_deterministic(grid);
    assert_indexing_consistent(grid);
    assert_border_out_of_bounds(grid);
    assert_unit_runs(grid);
}

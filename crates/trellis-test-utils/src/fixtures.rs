//! Reusable grid fixtures.
//!
//! - [`NINE`] / [`numbered_grid`]: cells hold consecutive integers in row-major order.
//! - [`char_grid`]: one row per line of text, one cell per `char`.
//! - [`seeded_grid`]: deterministic pseudo-random letters, for benches.

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use trellis_grid::Grid;

/// The 3x3 grid `[[1,2,3],[4,5,6],[7,8,9]]` used throughout the docs.
pub fn nine() -> Grid<i32> {
    numbered_grid(3, 3, 1)
}

/// Rows of [`nine`], for tests that need the raw input.
pub const NINE: [[i32; 3]; 3] = [[1, 2, 3], [4, 5, 6], [7, 8, 9]];

/// A `rows x cols` grid whose cell `(r, c)` holds `start + r * cols + c`.
///
/// Panics if `rows` or `cols` is zero.
pub fn numbered_grid(rows: usize, cols: usize, start: i32) -> Grid<i32> {
    let data = (0..rows)
        .map(|r| {
            (0..cols)
                .map(|c| start + (r * cols + c) as i32)
                .collect()
        })
        .collect();
    Grid::new(data).expect("numbered_grid requires non-zero dimensions")
}

/// A grid of characters, one row per line.
///
/// Panics if the lines are empty or ragged; fixtures are expected to be
/// well-formed.
pub fn char_grid(lines: &[&str]) -> Grid<char> {
    Grid::from_lines(lines, |line| line.chars().collect())
        .expect("char_grid fixture must be rectangular")
}

/// A `rows x cols` grid of letters drawn from `alphabet`, seeded so the
/// same arguments always produce the same grid.
pub fn seeded_grid(rows: usize, cols: usize, alphabet: &[char], seed: u64) -> Grid<char> {
    assert!(!alphabet.is_empty(), "alphabet must not be empty");
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    let data = (0..rows)
        .map(|_| {
            (0..cols)
                .map(|_| alphabet[rng.next_u32() as usize % alphabet.len()])
                .collect()
        })
        .collect();
    Grid::new(data).expect("seeded_grid requires non-zero dimensions")
}

#[cfg(test)]
mod tests {
    use super::*;
    use trellis_core::Location;

    #[test]
    fn nine_matches_raw_rows() {
        let g = nine();
        for (r, row) in NINE.iter().enumerate() {
            for (c, &v) in row.iter().enumerate() {
                assert_eq!(g[(r, c)], v);
            }
        }
    }

    #[test]
    fn numbered_grid_is_row_major() {
        let g = numbered_grid(2, 4, 0);
        assert_eq!(g[Location::new(1, 2)], 6);
    }

    #[test]
    fn char_grid_splits_lines() {
        let g = char_grid(&["ab", "cd", "ef"]);
        assert_eq!(g.row_count(), 3);
        assert_eq!(g[(2, 1)], 'f');
    }

    #[test]
    fn seeded_grid_is_deterministic() {
        let a = seeded_grid(8, 8, &['X', 'M', 'A', 'S'], 42);
        let b = seeded_grid(8, 8, &['X', 'M', 'A', 'S'], 42);
        assert_eq!(a, b);
        assert!(a.cells().all(|(_, ch)| "XMAS".contains(*ch)));
    }
}

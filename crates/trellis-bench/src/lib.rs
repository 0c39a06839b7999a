//! Benchmark profiles and a reference consumer for Trellis grids.
//!
//! - [`reference_grid`]: 100x100 letter grid (10K cells)
//! - [`stress_grid`]: 316x316 letter grid (~100K cells)
//! - [`count_word`]: word search in all eight directions, the workload
//!   the benches and the `word_search` example drive

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use trellis_core::Direction;
use trellis_grid::Grid;
use trellis_test_utils::seeded_grid;

/// Letters used by the benchmark grids.
pub const ALPHABET: [char; 4] = ['X', 'M', 'A', 'S'];

/// Build the reference benchmark grid: 100x100 letters from [`ALPHABET`].
pub fn reference_grid(seed: u64) -> Grid<char> {
    seeded_grid(100, 100, &ALPHABET, seed)
}

/// Build the stress benchmark grid: 316x316 letters from [`ALPHABET`].
///
/// Same content distribution as [`reference_grid`] at 10x the cell count.
pub fn stress_grid(seed: u64) -> Grid<char> {
    seeded_grid(316, 316, &ALPHABET, seed)
}

/// Count occurrences of `word` starting at any cell and reading in any of
/// the eight directions.
///
/// Palindromes and single letters are counted once per direction they
/// read in, so a one-letter word matches eight times per cell.
pub fn count_word<T: PartialEq>(grid: &Grid<T>, word: &[T]) -> usize {
    grid.locations()
        .flat_map(|loc| Direction::ALL.map(|d| (loc, d)))
        .filter(|&(loc, d)| {
            grid.run(loc, d, word.len())
                .is_some_and(|run| run.eq(word.iter()))
        })
        .count()
}

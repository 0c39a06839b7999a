//! Word search over a seeded grid, with grid events logged via `tracing`.
//!
//! ```text
//! RUST_LOG=debug cargo run -p trellis-bench --example word_search
//! ```

use tracing_subscriber::EnvFilter;
use trellis_bench::{count_word, reference_grid};
use trellis_core::{GridError, Location};
use trellis_grid::Grid;

fn main() -> Result<(), GridError> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let grid = reference_grid(42);
    let word: Vec<char> = "XMAS".chars().collect();
    let found = count_word(&grid, &word);
    tracing::info!(
        rows = grid.row_count(),
        cols = grid.col_count(),
        found,
        "searched reference grid"
    );

    // Blank out every X; the original grid is untouched.
    let mut blanked = grid.clone();
    for (loc, _) in grid.cells().filter(|(_, ch)| **ch == 'X') {
        blanked = blanked.replace(loc, '.')?;
    }
    tracing::info!(
        before = found,
        after = count_word(&blanked, &word),
        "blanked every X"
    );

    // Rejections are reported, not panics.
    if let Err(err) = grid.replace(Location::new(-1, 0), '?') {
        tracing::warn!(%err, "replace rejected");
    }
    if let Err(err) = Grid::from_lines(["XMAS", "XM"], |line| line.chars().collect::<Vec<_>>()) {
        tracing::warn!(%err, "construction rejected");
    }

    println!("{found} occurrences of XMAS in a {}x{} grid", grid.row_count(), grid.col_count());
    Ok(())
}

//! Test fixtures for Trellis development.
//!
//! Provides ready-made grids for tests and benchmarks, see [`fixtures`].

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{char_grid, nine, numbered_grid, seeded_grid, NINE};

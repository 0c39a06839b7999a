//! Immutable two-dimensional grids for Trellis.
//!
//! This crate defines [`Grid`], a rectangular container of arbitrary
//! elements addressed by [`Location`]. A grid is validated once at
//! construction and never mutated afterwards; [`Grid::replace`] returns a
//! new grid that shares every untouched row with the original.
//!
//! # Queries
//!
//! - Bounds: [`Grid::is_in_bounds`], [`Grid::get`], and panicking `Index`.
//! - Directional: [`Grid::element_at`], [`Grid::run`], [`Grid::collect`].
//! - Traversal: [`Grid::locations`], [`Grid::traverse`], [`Grid::cells`].
//! - Adjacency: [`Grid::neighbours`].
//!
//! Out-of-bounds directional queries return `None`; they are an expected
//! outcome, not an error.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod grid;
pub mod neighbours;
pub mod run;
pub mod traverse;

#[cfg(test)]
pub(crate) mod compliance;

pub use grid::Grid;
pub use run::Run;
pub use traverse::Locations;
pub use trellis_core::{Direction, GridError, Location};

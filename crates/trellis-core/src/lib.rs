//! Core value types for the Trellis grid abstraction.
//!
//! This is the leaf crate with zero internal dependencies. It defines the
//! coordinate model shared by every grid operation: [`Location`] (a
//! possibly out-of-range `(row, col)` pair), [`Direction`] (the eight
//! compass unit steps), and the [`GridError`] taxonomy.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod direction;
pub mod error;
pub mod location;

pub use direction::Direction;
pub use error::GridError;
pub use location::Location;

//! Character-grid model for the Prism puzzle engines.
//!
//! This is the leaf crate with no internal dependencies. It owns the
//! rectangular grid of single characters that both engines operate on,
//! along with bounds checking, 8-connected neighbour queries, and the
//! copy-on-write primitives the engines use to derive new grid states.
//!
//! Grids are immutable once constructed: operations that "modify" a grid
//! ([`Grid::with_cleared`]) produce a new value and leave the original
//! untouched.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod cell;
pub mod error;
pub mod grid;
pub mod position;

pub use cell::Cell;
pub use error::GridError;
pub use grid::Grid;
pub use position::{Position, OFFSETS_8};

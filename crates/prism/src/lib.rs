//! Prism: grid-puzzle simulation engines.
//!
//! This is the top-level facade crate that re-exports the public API from
//! the Prism sub-crates. For most users, adding `prism` as a single
//! dependency is sufficient.
//!
//! # Quick start
//!
//! ```rust
//! use prism::prelude::*;
//!
//! let grid = Grid::parse(".S.\n...\n.^.").unwrap();
//! let engine = BeamPropagation::builder().build().unwrap();
//! let outcome = engine.run(&grid).unwrap();
//! assert_eq!(outcome.splits, 1);
//!
//! let rolls = Grid::parse("@@@\n@@@\n@@@").unwrap();
//! let reduction = AccessibilityReduction::builder().build().unwrap();
//! assert_eq!(reduction.reduce(&rolls).removed, 9);
//! ```
//!
//! # Modules
//!
//! | Module | Sub-crate | Contents |
//! |--------|-----------|----------|
//! | [`grid`] | `prism-grid` | Grid model, positions, cell classification |
//! | [`engine`] | `prism-engine` | Beam propagation and accessibility reduction |

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

/// Grid model, positions, and cell classification (`prism-grid`).
pub use prism_grid as grid;

/// The beam propagation and accessibility reduction engines
/// (`prism-engine`).
pub use prism_engine as engine;

/// Common imports for typical Prism usage.
///
/// ```rust
/// use prism::prelude::*;
/// ```
pub mod prelude {
    // Grid model
    pub use prism_grid::{Cell, Grid, GridError, Position};

    // Engines and outcomes
    pub use prism_engine::{
        AccessibilityReduction, BeamPropagation, PropagationError, PropagationMetrics,
        PropagationOutcome, ReductionMetrics, ReductionOutcome, SurveyOutcome,
    };
}

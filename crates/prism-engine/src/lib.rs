//! Simulation engines for the Prism grid puzzles.
//!
//! Two independent engines share the [`prism_grid`] data model and a
//! deterministic iteration discipline:
//!
//! - [`BeamPropagation`]: a branching downward signal over the grid,
//!   counting each splitter's first activation.
//! - [`AccessibilityReduction`]: iterative batch removal of filled cells
//!   whose neighbour count falls below a threshold, to a fixed point.
//!
//! Both are pure functions from a grid to a result: no I/O, no retries, no
//! shared state. Run diagnostics come back as structured
//! [metrics](crate::metrics) rather than side-effect logging.

#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![forbid(unsafe_code)]

pub mod beam;
pub mod error;
pub mod limits;
pub mod metrics;
pub mod reduction;

pub use beam::{BeamPropagation, BeamPropagationBuilder, PropagationOutcome};
pub use error::PropagationError;
pub use limits::{MAX_PROPAGATION_STEPS, MAX_REDUCTION_PASSES};
pub use metrics::{PropagationMetrics, ReductionMetrics};
pub use reduction::{
    AccessibilityReduction, AccessibilityReductionBuilder, ReductionOutcome, SurveyOutcome,
};

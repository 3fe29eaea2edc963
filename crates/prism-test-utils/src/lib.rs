//! Shared grid fixtures for Prism tests and benchmarks.
//!
//! Holds the reference sample grids with their published results so that
//! engine tests, CLI tests, and benchmarks all exercise the same inputs.

#![forbid(unsafe_code)]
#![allow(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

pub mod fixtures;

pub use fixtures::{
    beam_sample_grid, roll_sample_grid, BEAM_SAMPLE, BEAM_SAMPLE_SPLITS, ROLL_SAMPLE,
    ROLL_SAMPLE_ACCESSIBLE, ROLL_SAMPLE_REMOVED,
};

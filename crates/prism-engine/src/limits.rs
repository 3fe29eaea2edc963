//! Iteration safety bounds for the engines.
//!
//! Well-formed grids never reach these limits: beam propagation advances
//! one row per step and every reduction pass removes at least one filled
//! cell, so both loops are bounded by the grid size. The caps exist as a
//! backstop against malformed input; hitting one is reported through the
//! run metrics, never as an error.

/// Maximum propagation steps before the beam engine bails out with a
/// best-effort count. A frontier advances exactly one row per step, so any
/// grid with fewer rows than this terminates on its own.
pub const MAX_PROPAGATION_STEPS: usize = 100_000;

/// Maximum reduction passes before the accessibility engine bails out with
/// a best-effort total. Each pass removes at least one filled cell, so any
/// grid with fewer filled cells than this terminates on its own.
pub const MAX_REDUCTION_PASSES: usize = 100_000;

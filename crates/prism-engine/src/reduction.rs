//! Iterative batch removal of accessible cells to a fixed point.
//!
//! A filled cell is *accessible* when strictly fewer than a threshold of
//! its 8 neighbours are filled. One pass removes every accessible cell at
//! once, producing a new grid value and leaving the input untouched; the
//! loop repeats until no accessible cells remain. Termination: every
//! non-empty pass removes at least one filled cell, so the filled count
//! strictly decreases toward zero.
//!
//! Constructed via the builder pattern: [`AccessibilityReduction::builder`].

use crate::limits::MAX_REDUCTION_PASSES;
use crate::metrics::ReductionMetrics;
use indexmap::IndexSet;
use prism_grid::{Grid, Position};

/// Default neighbour-count threshold below which a filled cell is
/// accessible.
const DEFAULT_NEIGHBOUR_THRESHOLD: usize = 4;

/// The accessibility reduction engine.
///
/// Stateless and reusable; both operations are deterministic functions of
/// the grid they are given.
#[derive(Clone, Debug)]
pub struct AccessibilityReduction {
    filled_marker: char,
    accessible_marker: char,
    neighbour_threshold: usize,
    max_passes: usize,
}

/// Builder for [`AccessibilityReduction`].
///
/// Defaults match the puzzle input format: `'@'` rolls, `'x'` rendering
/// marker, threshold 4, and the documented pass cap.
#[derive(Clone, Debug)]
pub struct AccessibilityReductionBuilder {
    filled_marker: char,
    accessible_marker: char,
    neighbour_threshold: usize,
    max_passes: usize,
}

/// Result of a single-pass survey.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SurveyOutcome {
    /// Number of accessible cells in the grid as given.
    pub accessible: usize,
    /// Three-way rendering: accessible cells as the accessible marker,
    /// everything else unchanged, rows joined by line breaks.
    pub rendering: String,
}

/// Result of an iterative reduction run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ReductionOutcome {
    /// Total cells removed across all passes.
    pub removed: usize,
    /// Run diagnostics.
    pub metrics: ReductionMetrics,
}

impl AccessibilityReduction {
    /// Create a new builder for configuring an `AccessibilityReduction`
    /// engine.
    pub fn builder() -> AccessibilityReductionBuilder {
        AccessibilityReductionBuilder {
            filled_marker: '@',
            accessible_marker: 'x',
            neighbour_threshold: DEFAULT_NEIGHBOUR_THRESHOLD,
            max_passes: MAX_REDUCTION_PASSES,
        }
    }

    /// Every filled cell whose filled-neighbour count is strictly below
    /// the threshold, in row-major order.
    pub fn accessible(&self, grid: &Grid) -> IndexSet<Position> {
        grid.positions()
            .filter(|&pos| grid.get(pos) == Some(self.filled_marker))
            .filter(|&pos| {
                grid.count_neighbours(pos, |ch| ch == self.filled_marker)
                    < self.neighbour_threshold
            })
            .collect()
    }

    /// Single-pass accessibility count with a rendering of the result.
    ///
    /// An empty grid yields a count of 0 and an empty rendering.
    pub fn survey(&self, grid: &Grid) -> SurveyOutcome {
        let accessible = self.accessible(grid);
        let rendering = grid.render_with(&accessible, self.accessible_marker);
        SurveyOutcome {
            accessible: accessible.len(),
            rendering,
        }
    }

    /// Remove accessible cells in batches until none remain, returning the
    /// cumulative total removed.
    ///
    /// Each pass operates on an owned copy of the grid; the caller's grid
    /// is never mutated. If the pass cap is reached the current total is
    /// returned as a best-effort result and
    /// [`ReductionMetrics::pass_limit_hit`](crate::ReductionMetrics) is
    /// set. A well-formed grid cannot reach the cap, because every pass
    /// strictly decreases the filled-cell count.
    pub fn reduce(&self, grid: &Grid) -> ReductionOutcome {
        let mut current = grid.clone();
        let mut metrics = ReductionMetrics::default();
        let mut removed = 0;

        loop {
            let accessible = self.accessible(&current);
            if accessible.is_empty() {
                break;
            }
            if metrics.passes >= self.max_passes {
                metrics.pass_limit_hit = true;
                break;
            }
            metrics.passes += 1;
            metrics.removed_per_pass.push(accessible.len());
            removed += accessible.len();
            current = current.with_cleared(&accessible);
        }

        ReductionOutcome { removed, metrics }
    }
}

impl AccessibilityReductionBuilder {
    /// Set the filled marker (default: `'@'`).
    pub fn filled_marker(mut self, marker: char) -> Self {
        self.filled_marker = marker;
        self
    }

    /// Set the rendering marker for accessible cells (default: `'x'`).
    pub fn accessible_marker(mut self, marker: char) -> Self {
        self.accessible_marker = marker;
        self
    }

    /// Set the neighbour-count threshold (default: 4). Must be >= 1.
    pub fn neighbour_threshold(mut self, threshold: usize) -> Self {
        self.neighbour_threshold = threshold;
        self
    }

    /// Set the reduction pass cap (default: [`MAX_REDUCTION_PASSES`]).
    /// Must be >= 1.
    pub fn max_passes(mut self, max_passes: usize) -> Self {
        self.max_passes = max_passes;
        self
    }

    /// Build the engine, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `filled_marker` and `accessible_marker` are equal
    /// - `neighbour_threshold` is 0
    /// - `max_passes` is 0
    pub fn build(self) -> Result<AccessibilityReduction, String> {
        if self.filled_marker == self.accessible_marker {
            return Err(format!(
                "filled_marker and accessible_marker must differ, both are '{}'",
                self.filled_marker
            ));
        }
        if self.neighbour_threshold == 0 {
            return Err("neighbour_threshold must be >= 1".to_string());
        }
        if self.max_passes == 0 {
            return Err("max_passes must be >= 1".to_string());
        }
        Ok(AccessibilityReduction {
            filled_marker: self.filled_marker,
            accessible_marker: self.accessible_marker,
            neighbour_threshold: self.neighbour_threshold,
            max_passes: self.max_passes,
        })
    }
}

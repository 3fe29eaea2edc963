//! Branching downward beam propagation with splitter deduplication.
//!
//! A beam is a grid position that moves one row down per step. Hitting a
//! splitter halts the beam and spawns up to two child beams immediately
//! left and right of the splitter; each splitter is counted the first time
//! it is activated and never again. The frontier is a set, so two beams
//! landing on the same cell in the same step collapse to one. This is required
//! for the termination argument, not merely an optimization.
//!
//! Constructed via the builder pattern: [`BeamPropagation::builder`].

use crate::error::PropagationError;
use crate::limits::MAX_PROPAGATION_STEPS;
use crate::metrics::PropagationMetrics;
use indexmap::IndexSet;
use prism_grid::{Cell, Grid, Position};

/// The beam propagation engine.
///
/// Stateless and reusable: each [`run`](BeamPropagation::run) is an
/// independent, deterministic computation over the grid it is given.
#[derive(Clone, Debug)]
pub struct BeamPropagation {
    splitter_marker: char,
    start_marker: char,
    max_steps: usize,
}

/// Builder for [`BeamPropagation`].
///
/// All fields have defaults matching the puzzle input format: `'^'`
/// splitters, `'S'` start, and the documented step cap.
#[derive(Clone, Debug)]
pub struct BeamPropagationBuilder {
    splitter_marker: char,
    start_marker: char,
    max_steps: usize,
}

/// Result of a propagation run.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PropagationOutcome {
    /// Count of distinct splitter cells ever activated.
    pub splits: usize,
    /// Run diagnostics.
    pub metrics: PropagationMetrics,
}

impl BeamPropagation {
    /// Create a new builder for configuring a `BeamPropagation` engine.
    pub fn builder() -> BeamPropagationBuilder {
        BeamPropagationBuilder {
            splitter_marker: '^',
            start_marker: 'S',
            max_steps: MAX_PROPAGATION_STEPS,
        }
    }

    /// Simulate beam propagation from the grid's start marker.
    ///
    /// Returns the count of distinct splitters activated, with run
    /// diagnostics. If the step cap is reached the current count is
    /// returned as a best-effort result and
    /// [`PropagationMetrics::step_limit_hit`] is set. A well-formed grid
    /// cannot reach the cap, because the frontier advances exactly one row
    /// per step.
    ///
    /// # Errors
    ///
    /// Returns [`PropagationError::MissingStart`] when the grid contains
    /// no start marker. A grid with a start but no splitters is not an
    /// error; it yields a count of 0.
    pub fn run(&self, grid: &Grid) -> Result<PropagationOutcome, PropagationError> {
        let start = grid
            .find(self.start_marker)
            .ok_or(PropagationError::MissingStart {
                marker: self.start_marker,
            })?;

        let mut frontier: IndexSet<Position> = IndexSet::new();
        frontier.insert(start);

        let mut visited: IndexSet<Position> = IndexSet::new();
        let mut activated: IndexSet<Position> = IndexSet::new();
        let mut metrics = PropagationMetrics::default();

        while !frontier.is_empty() {
            if metrics.steps >= self.max_steps {
                metrics.step_limit_hit = true;
                break;
            }
            metrics.steps += 1;
            metrics.peak_frontier = metrics.peak_frontier.max(frontier.len());

            let mut next_frontier: IndexSet<Position> = IndexSet::new();
            for &beam in &frontier {
                if !visited.insert(beam) {
                    continue;
                }
                metrics.beams_processed += 1;

                let next = beam.below();
                if !grid.in_bounds(next) {
                    // Beam exits the grid.
                    continue;
                }
                // A ragged short row has no character here; the beam drops.
                let Some(ch) = grid.get(next) else {
                    continue;
                };
                match Cell::classify(ch, self.splitter_marker, self.start_marker) {
                    Cell::Filled => {
                        // First activation counts; later hits are no-ops.
                        activated.insert(next);
                        let left = next.left();
                        if grid.in_bounds(left) {
                            next_frontier.insert(left);
                        }
                        let right = next.right();
                        if grid.in_bounds(right) {
                            next_frontier.insert(right);
                        }
                    }
                    Cell::Empty | Cell::Start | Cell::Unknown => {
                        next_frontier.insert(next);
                    }
                }
            }
            frontier = next_frontier;
        }

        Ok(PropagationOutcome {
            splits: activated.len(),
            metrics,
        })
    }
}

impl BeamPropagationBuilder {
    /// Set the splitter marker (default: `'^'`).
    pub fn splitter_marker(mut self, marker: char) -> Self {
        self.splitter_marker = marker;
        self
    }

    /// Set the start marker (default: `'S'`).
    pub fn start_marker(mut self, marker: char) -> Self {
        self.start_marker = marker;
        self
    }

    /// Set the propagation step cap (default:
    /// [`MAX_PROPAGATION_STEPS`]). Must be >= 1.
    pub fn max_steps(mut self, max_steps: usize) -> Self {
        self.max_steps = max_steps;
        self
    }

    /// Build the engine, validating all configuration.
    ///
    /// # Errors
    ///
    /// Returns `Err` if:
    /// - `splitter_marker` and `start_marker` are equal
    /// - either marker is the empty-cell marker `'.'`
    /// - `max_steps` is 0
    pub fn build(self) -> Result<BeamPropagation, String> {
        if self.splitter_marker == self.start_marker {
            return Err(format!(
                "splitter_marker and start_marker must differ, both are '{}'",
                self.splitter_marker
            ));
        }
        if self.splitter_marker == Cell::EMPTY_MARKER || self.start_marker == Cell::EMPTY_MARKER {
            return Err("markers must not be the empty-cell marker '.'".to_string());
        }
        if self.max_steps == 0 {
            return Err("max_steps must be >= 1".to_string());
        }
        Ok(BeamPropagation {
            splitter_marker: self.splitter_marker,
            start_marker: self.start_marker,
            max_steps: self.max_steps,
        })
    }
}

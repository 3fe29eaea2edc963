//! Puzzle solvers bridging raw input text to JSON-ready reports.
//!
//! Empty input is the defined "no data" case: the beam puzzle reports
//! nulls (mirroring a missing start), the roll puzzle reports zeros with
//! an empty rendering. Neither is an error.

use anyhow::{anyhow, Result};
use prism::prelude::*;
use serde::Serialize;
use tracing::warn;

/// JSON report for one puzzle run.
#[derive(Debug, Serialize)]
pub struct PuzzleReport {
    pub part1: Option<usize>,
    pub part2: Option<usize>,
    #[serde(rename = "additional-info", skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<AdditionalInfo>,
}

/// Extra payload for reports that carry a grid rendering.
#[derive(Debug, Serialize)]
pub struct AdditionalInfo {
    pub grid: String,
}

/// Solve the beam propagation puzzle.
///
/// A missing start marker is malformed input rather than a zero-splitter
/// grid; it is logged and reported as nulls, matching the empty-input
/// case.
pub fn beam(text: &str) -> Result<PuzzleReport> {
    let grid = match Grid::parse(text) {
        Ok(grid) => grid,
        Err(GridError::EmptyInput) => {
            return Ok(PuzzleReport {
                part1: None,
                part2: None,
                additional_info: None,
            })
        }
    };
    let engine = BeamPropagation::builder()
        .build()
        .map_err(|reason| anyhow!(reason))?;
    match engine.run(&grid) {
        Ok(outcome) => {
            if outcome.metrics.step_limit_hit {
                warn!(
                    steps = outcome.metrics.steps,
                    "propagation stopped at the step cap; count is best-effort"
                );
            }
            Ok(PuzzleReport {
                part1: Some(outcome.splits),
                part2: None,
                additional_info: None,
            })
        }
        Err(err @ PropagationError::MissingStart { .. }) => {
            warn!("{err}");
            Ok(PuzzleReport {
                part1: None,
                part2: None,
                additional_info: None,
            })
        }
    }
}

/// Solve the roll accessibility puzzle: single-pass survey for part 1,
/// iterative removal total for part 2, with the survey rendering attached.
pub fn rolls(text: &str) -> Result<PuzzleReport> {
    let grid = match Grid::parse(text) {
        Ok(grid) => grid,
        Err(GridError::EmptyInput) => {
            return Ok(PuzzleReport {
                part1: Some(0),
                part2: Some(0),
                additional_info: Some(AdditionalInfo {
                    grid: String::new(),
                }),
            })
        }
    };
    let engine = AccessibilityReduction::builder()
        .build()
        .map_err(|reason| anyhow!(reason))?;
    let survey = engine.survey(&grid);
    let reduction = engine.reduce(&grid);
    if reduction.metrics.pass_limit_hit {
        warn!(
            passes = reduction.metrics.passes,
            "reduction stopped at the pass cap; total is best-effort"
        );
    }
    Ok(PuzzleReport {
        part1: Some(survey.accessible),
        part2: Some(reduction.removed),
        additional_info: Some(AdditionalInfo {
            grid: survey.rendering,
        }),
    })
}

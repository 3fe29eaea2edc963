//! Error types for engine runs.

use std::fmt;

/// Errors from a beam propagation run.
///
/// A grid with zero splitters is not an error; it legitimately yields a
/// count of 0. Absence of the start marker is malformed input and is
/// surfaced distinctly rather than coerced to zero.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropagationError {
    /// No start marker was found in the grid.
    MissingStart {
        /// The start marker that was searched for.
        marker: char,
    },
}

impl fmt::Display for PropagationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingStart { marker } => {
                write!(f, "no start marker '{marker}' found in grid")
            }
        }
    }
}

impl std::error::Error for PropagationError {}

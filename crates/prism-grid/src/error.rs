//! Error types for grid construction.

use std::fmt;

/// Errors arising from parsing grid text.
///
/// Recoverable by callers: an empty grid is a valid "no data" case and
/// should map to zero-valued results, not a crash.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GridError {
    /// The input text yields zero rows after normalization.
    EmptyInput,
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::EmptyInput => write!(f, "grid input contains no rows"),
        }
    }
}

impl std::error::Error for GridError {}

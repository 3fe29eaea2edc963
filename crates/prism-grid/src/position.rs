//! Grid positions and the 8-connected neighbourhood offset table.

/// All 8 offsets: N, S, W, E, NW, NE, SW, SE.
///
/// The set is fixed and order-independent for counting purposes; the order
/// here only determines the order in which [`Grid::neighbours`] yields
/// candidates.
///
/// [`Grid::neighbours`]: crate::Grid::neighbours
pub const OFFSETS_8: [(i32, i32); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, -1),
    (1, 1),
];

/// A 0-indexed grid position, row increasing downward.
///
/// Positions are plain values: structural equality, hashable, never a
/// reference into a grid. Coordinates are `i32` so that offset arithmetic
/// near the top and left edges stays total; out-of-range positions are
/// simply not in bounds.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    /// Row index, increasing downward.
    pub row: i32,
    /// Column index, increasing rightward.
    pub col: i32,
}

impl Position {
    /// Create a position from row and column indices.
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The position one row down, same column.
    pub const fn below(self) -> Self {
        Self {
            row: self.row + 1,
            col: self.col,
        }
    }

    /// The position one column to the left, same row.
    pub const fn left(self) -> Self {
        Self {
            row: self.row,
            col: self.col - 1,
        }
    }

    /// The position one column to the right, same row.
    pub const fn right(self) -> Self {
        Self {
            row: self.row,
            col: self.col + 1,
        }
    }

    /// The position displaced by `(dr, dc)`.
    pub const fn offset(self, dr: i32, dc: i32) -> Self {
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }
}

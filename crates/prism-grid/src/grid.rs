//! The rectangular character grid and its adjacency queries.

use crate::cell::Cell;
use crate::error::GridError;
use crate::position::{Position, OFFSETS_8};
use indexmap::IndexSet;
use smallvec::SmallVec;

/// A rectangular grid of single characters.
///
/// Constructed once per puzzle invocation from parsed text and read-only
/// thereafter. Column bounds are taken from the first row; ragged input is
/// accepted, with per-cell reads ([`Grid::get`]) returning `None` for
/// positions a short row does not cover.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    rows: Vec<Vec<char>>,
    cols: usize,
}

impl Grid {
    /// Parse raw multi-line text into a grid.
    ///
    /// Splits on line breaks, strips trailing whitespace from each line,
    /// and drops lines that are empty after stripping.
    ///
    /// # Errors
    ///
    /// Returns [`GridError::EmptyInput`] only if zero rows remain. Callers
    /// must treat that as a valid "no data" case yielding zero-valued
    /// results, not as a hard failure.
    pub fn parse(text: &str) -> Result<Self, GridError> {
        let rows: Vec<Vec<char>> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .map(|line| line.chars().collect())
            .collect();
        if rows.is_empty() {
            return Err(GridError::EmptyInput);
        }
        Ok(Self::from_rows(rows))
    }

    /// Build a grid directly from rows of characters.
    ///
    /// No validation is performed; an empty `rows` produces a zero-cell
    /// grid, which every query treats as fully out of bounds.
    pub fn from_rows(rows: Vec<Vec<char>>) -> Self {
        let cols = rows.first().map_or(0, Vec::len);
        Self { rows, cols }
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows.len()
    }

    /// Number of columns, taken from the first row.
    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Whether the grid holds no rows.
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// The character at `pos`, or `None` when out of bounds (including
    /// positions a ragged short row does not cover).
    pub fn get(&self, pos: Position) -> Option<char> {
        if pos.row < 0 || pos.col < 0 {
            return None;
        }
        self.rows
            .get(pos.row as usize)?
            .get(pos.col as usize)
            .copied()
    }

    /// Whether `pos` lies inside the grid's rectangular bounds.
    pub fn in_bounds(&self, pos: Position) -> bool {
        pos.row >= 0
            && (pos.row as usize) < self.rows.len()
            && pos.col >= 0
            && (pos.col as usize) < self.cols
    }

    /// Row-major scan for the first occurrence of `marker`.
    pub fn find(&self, marker: char) -> Option<Position> {
        self.rows.iter().enumerate().find_map(|(r, row)| {
            row.iter()
                .position(|&ch| ch == marker)
                .map(|c| Position::new(r as i32, c as i32))
        })
    }

    /// Iterate every in-bounds position in row-major order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        let cols = self.cols as i32;
        (0..self.rows.len() as i32)
            .flat_map(move |r| (0..cols).map(move |c| Position::new(r, c)))
    }

    /// The in-bounds members of the 8-connected neighbourhood of `pos`.
    pub fn neighbours(&self, pos: Position) -> SmallVec<[Position; 8]> {
        OFFSETS_8
            .iter()
            .map(|&(dr, dc)| pos.offset(dr, dc))
            .filter(|&nb| self.in_bounds(nb))
            .collect()
    }

    /// Count the 8-connected neighbours of `pos` whose character satisfies
    /// `pred`. Out-of-bounds offsets are silently skipped.
    pub fn count_neighbours(&self, pos: Position, pred: impl Fn(char) -> bool) -> usize {
        OFFSETS_8
            .iter()
            .filter(|&&(dr, dc)| self.get(pos.offset(dr, dc)).is_some_and(&pred))
            .count()
    }

    /// A copy of this grid with every listed position replaced by the
    /// empty marker. The original grid is left untouched.
    pub fn with_cleared<'a, I>(&self, positions: I) -> Self
    where
        I: IntoIterator<Item = &'a Position>,
    {
        let mut rows = self.rows.clone();
        for pos in positions {
            if pos.row < 0 || pos.col < 0 {
                continue;
            }
            if let Some(cell) = rows
                .get_mut(pos.row as usize)
                .and_then(|row| row.get_mut(pos.col as usize))
            {
                *cell = Cell::EMPTY_MARKER;
            }
        }
        Self {
            rows,
            cols: self.cols,
        }
    }

    /// Render the grid with every position in `marked` drawn as `marker`
    /// and all other cells unchanged, rows joined by line breaks.
    pub fn render_with(&self, marked: &IndexSet<Position>, marker: char) -> String {
        self.rows
            .iter()
            .enumerate()
            .map(|(r, row)| {
                row.iter()
                    .enumerate()
                    .map(|(c, &ch)| {
                        if marked.contains(&Position::new(r as i32, c as i32)) {
                            marker
                        } else {
                            ch
                        }
                    })
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn p(row: i32, col: i32) -> Position {
        Position::new(row, col)
    }

    // ── Parsing ─────────────────────────────────────────────────

    #[test]
    fn parse_basic() {
        let grid = Grid::parse("...\n.S.\n.^.").unwrap();
        assert_eq!(grid.rows(), 3);
        assert_eq!(grid.cols(), 3);
        assert_eq!(grid.get(p(1, 1)), Some('S'));
        assert_eq!(grid.get(p(2, 1)), Some('^'));
    }

    #[test]
    fn parse_drops_blank_lines_and_trailing_whitespace() {
        let grid = Grid::parse("..@@  \n\n   \n@@@.\n").unwrap();
        assert_eq!(grid.rows(), 2);
        assert_eq!(grid.cols(), 4);
        assert_eq!(grid.get(p(1, 0)), Some('@'));
    }

    #[test]
    fn parse_empty_input_is_an_error() {
        assert_eq!(Grid::parse(""), Err(GridError::EmptyInput));
        assert_eq!(Grid::parse("\n  \n\t\n"), Err(GridError::EmptyInput));
    }

    #[test]
    fn from_rows_empty_grid() {
        let grid = Grid::from_rows(vec![]);
        assert!(grid.is_empty());
        assert_eq!(grid.cols(), 0);
        assert!(!grid.in_bounds(p(0, 0)));
        assert_eq!(grid.positions().count(), 0);
    }

    // ── Bounds and lookup ───────────────────────────────────────

    #[test]
    fn in_bounds_rectangle() {
        let grid = Grid::parse("...\n...\n...").unwrap();
        assert!(grid.in_bounds(p(0, 0)));
        assert!(grid.in_bounds(p(2, 2)));
        assert!(!grid.in_bounds(p(-1, 0)));
        assert!(!grid.in_bounds(p(0, -1)));
        assert!(!grid.in_bounds(p(3, 0)));
        assert!(!grid.in_bounds(p(0, 3)));
    }

    #[test]
    fn get_on_ragged_short_row_is_none() {
        // Column bounds come from row 0; the short second row simply has
        // no character at column 2.
        let grid = Grid::parse("...\n..").unwrap();
        assert!(grid.in_bounds(p(1, 2)));
        assert_eq!(grid.get(p(1, 2)), None);
        assert_eq!(grid.get(p(1, 1)), Some('.'));
    }

    #[test]
    fn find_first_in_row_major_order() {
        let grid = Grid::parse(".S.\n.S.").unwrap();
        assert_eq!(grid.find('S'), Some(p(0, 1)));
        assert_eq!(grid.find('X'), None);
    }

    // ── Neighbourhood ───────────────────────────────────────────

    #[test]
    fn neighbours_interior_corner_edge() {
        let grid = Grid::parse("...\n...\n...").unwrap();
        assert_eq!(grid.neighbours(p(1, 1)).len(), 8);
        assert_eq!(grid.neighbours(p(0, 0)).len(), 3);
        assert_eq!(grid.neighbours(p(0, 1)).len(), 5);
    }

    #[test]
    fn count_neighbours_corner() {
        let grid = Grid::parse("@@.\n@..\n...").unwrap();
        assert_eq!(grid.count_neighbours(p(0, 0), |ch| ch == '@'), 2);
    }

    #[test]
    fn count_neighbours_interior_full() {
        let grid = Grid::parse("@@@\n@@@\n@@@").unwrap();
        assert_eq!(grid.count_neighbours(p(1, 1), |ch| ch == '@'), 8);
    }

    #[test]
    fn count_neighbours_skips_out_of_bounds() {
        let grid = Grid::parse("@@\n@@").unwrap();
        // Corner cell: only 3 of the 8 offsets land in bounds.
        assert_eq!(grid.count_neighbours(p(0, 0), |ch| ch == '@'), 3);
    }

    // ── Copy-on-write and rendering ─────────────────────────────

    #[test]
    fn with_cleared_leaves_original_untouched() {
        let grid = Grid::parse("@@@\n@@@").unwrap();
        let cleared: IndexSet<Position> = [p(0, 0), p(1, 2)].into_iter().collect();
        let next = grid.with_cleared(&cleared);
        assert_eq!(next.get(p(0, 0)), Some('.'));
        assert_eq!(next.get(p(1, 2)), Some('.'));
        assert_eq!(next.get(p(0, 1)), Some('@'));
        // Original unchanged.
        assert_eq!(grid.get(p(0, 0)), Some('@'));
    }

    #[test]
    fn with_cleared_ignores_out_of_bounds_positions() {
        let grid = Grid::parse("@@").unwrap();
        let cleared: IndexSet<Position> = [p(-1, 0), p(5, 5)].into_iter().collect();
        assert_eq!(grid.with_cleared(&cleared), grid);
    }

    #[test]
    fn render_with_three_way_substitution() {
        let grid = Grid::parse("..@@\n@@@.").unwrap();
        let marked: IndexSet<Position> = [p(0, 2), p(1, 0)].into_iter().collect();
        assert_eq!(grid.render_with(&marked, 'x'), "..x@\nx@@.");
    }

    #[test]
    fn render_with_empty_grid_is_empty_string() {
        let grid = Grid::from_rows(vec![]);
        assert_eq!(grid.render_with(&IndexSet::new(), 'x'), "");
    }

    // ── Properties ──────────────────────────────────────────────

    proptest! {
        #[test]
        fn neighbour_symmetry(
            rows in 1usize..9,
            cols in 1usize..9,
            r in 0i32..9,
            c in 0i32..9,
        ) {
            let r = r % rows as i32;
            let c = c % cols as i32;
            let grid = Grid::from_rows(vec![vec!['.'; cols]; rows]);
            let pos = Position::new(r, c);
            for nb in grid.neighbours(pos) {
                prop_assert!(
                    grid.neighbours(nb).contains(&pos),
                    "neighbour symmetry violated between {:?} and {:?}",
                    pos, nb,
                );
            }
        }

        #[test]
        fn count_neighbours_never_exceeds_eight(
            rows in 1usize..9,
            cols in 1usize..9,
            r in 0i32..9,
            c in 0i32..9,
        ) {
            let r = r % rows as i32;
            let c = c % cols as i32;
            let grid = Grid::from_rows(vec![vec!['@'; cols]; rows]);
            let n = grid.count_neighbours(Position::new(r, c), |ch| ch == '@');
            prop_assert!(n <= 8);
            prop_assert_eq!(n, grid.neighbours(Position::new(r, c)).len());
        }
    }
}

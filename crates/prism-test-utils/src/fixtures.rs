//! Reference sample grids and their expected results.

use prism_grid::Grid;

/// 16-row beam propagation sample: a pyramid of splitters under the start.
pub const BEAM_SAMPLE: &str = "\
.......S.......
...............
.......^.......
...............
......^.^......
...............
.....^.^.^.....
...............
....^.^...^....
...............
...^.^...^.^...
...............
..^...^.....^..
...............
.^.^.^.^.^...^.
...............";

/// Distinct splitters activated in [`BEAM_SAMPLE`].
pub const BEAM_SAMPLE_SPLITS: usize = 21;

/// 10x10 accessibility reduction sample.
pub const ROLL_SAMPLE: &str = "\
..@@.@@@@.
@@@.@.@.@@
@@@@@.@.@@
@.@@@@..@.
@@.@@@@.@@
.@@@@@@@.@
.@.@.@.@@@
@.@@@.@@@@
.@@@@@@@@.
@.@.@@@.@.";

/// Accessible cells in [`ROLL_SAMPLE`] on the first pass.
pub const ROLL_SAMPLE_ACCESSIBLE: usize = 13;

/// Total cells removed from [`ROLL_SAMPLE`] by iterative reduction.
pub const ROLL_SAMPLE_REMOVED: usize = 43;

/// Parse [`BEAM_SAMPLE`] into a grid.
pub fn beam_sample_grid() -> Grid {
    Grid::parse(BEAM_SAMPLE).expect("beam sample parses")
}

/// Parse [`ROLL_SAMPLE`] into a grid.
pub fn roll_sample_grid() -> Grid {
    Grid::parse(ROLL_SAMPLE).expect("roll sample parses")
}

//! The 4x4 tile board and the compress/merge/rotate move algorithm

use crate::direction::Direction;
use rand::Rng;

/// Board edge length in cells
pub const GRID_SIZE: usize = 4;

/// Row-major grid of tile values; 0 is an empty cell
pub type Grid = [[u32; GRID_SIZE]; GRID_SIZE];

/// Probability that a spawned tile is a 4 rather than a 2
pub const FOUR_TILE_CHANCE: f32 = 0.1;

/// The puzzle board: a fixed 4x4 grid plus merge-derived counters.
///
/// All mutation goes through [`Board::shift`], [`Board::make_move`],
/// [`Board::spawn_tile`] and [`Board::reset`]. Randomness is injected so
/// callers that need reproducible games can pass a seeded RNG.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Board {
    grid: Grid,
    score: u32,
    max_tile: u32,
}

/// What a merge pass did to one row
#[derive(Clone, Copy, Debug, Default)]
struct MergeOutcome {
    changed: bool,
    gained: u32,
    largest: u32,
}

impl Board {
    /// Create an all-empty board with zeroed counters
    pub fn empty() -> Self {
        Self {
            grid: [[0; GRID_SIZE]; GRID_SIZE],
            score: 0,
            max_tile: 0,
        }
    }

    /// Create a board from explicit grid contents, counters zeroed.
    ///
    /// Intended for setting up known positions (tests, puzzles, replays).
    pub fn from_grid(grid: Grid) -> Self {
        Self {
            grid,
            score: 0,
            max_tile: 0,
        }
    }

    /// Create a freshly-seeded board: empty grid plus two spawned tiles
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut board = Self::empty();
        board.reset(rng);
        board
    }

    /// Reinitialize: clear the grid and counters, then spawn two tiles
    pub fn reset<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.clear();
        self.spawn_tile(rng);
        self.spawn_tile(rng);
    }

    /// Clear the grid and zero the counters without spawning
    pub fn clear(&mut self) {
        self.grid = [[0; GRID_SIZE]; GRID_SIZE];
        self.score = 0;
        self.max_tile = 0;
    }

    /// Snapshot of the grid contents
    pub fn grid(&self) -> Grid {
        self.grid
    }

    /// Sum of all values produced by merges so far
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Largest value ever produced by a merge (historical peak, not
    /// necessarily still on the grid)
    pub fn max_tile(&self) -> u32 {
        self.max_tile
    }

    /// Value at (row, col)
    pub fn tile(&self, row: usize, col: usize) -> u32 {
        self.grid[row][col]
    }

    /// Number of empty cells
    pub fn empty_count(&self) -> usize {
        self.grid.iter().flatten().filter(|&&v| v == 0).count()
    }

    /// Slide and merge tiles toward `direction` without spawning.
    ///
    /// Returns whether any tile moved or merged. Score and max-tile are
    /// updated by the merges performed. A no-op move leaves the board
    /// untouched.
    pub fn shift(&mut self, direction: Direction) -> bool {
        let (before, after) = rotations_for(direction);
        for _ in 0..before {
            self.grid = rotate_cw(self.grid);
        }

        let mut changed = false;
        let mut gained = 0;
        let mut largest = 0;
        for row in self.grid.iter_mut() {
            let compressed = compress_row(row);
            let merge = merge_row(row);
            changed |= compressed || merge.changed;
            gained += merge.gained;
            largest = largest.max(merge.largest);
        }

        for _ in 0..after {
            self.grid = rotate_cw(self.grid);
        }

        self.score += gained;
        if largest > self.max_tile {
            self.max_tile = largest;
        }
        changed
    }

    /// Apply a full move: shift toward `direction`, then spawn one tile
    /// if (and only if) the shift changed the board.
    ///
    /// Returns whether the board changed.
    pub fn make_move<R: Rng + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> bool {
        self.make_move_with_chance(direction, rng, FOUR_TILE_CHANCE)
    }

    /// [`Board::make_move`] with an explicit 4-tile probability
    pub fn make_move_with_chance<R: Rng + ?Sized>(
        &mut self,
        direction: Direction,
        rng: &mut R,
        four_chance: f32,
    ) -> bool {
        let changed = self.shift(direction);
        if changed {
            self.spawn_tile_with_chance(rng, four_chance);
        }
        changed
    }

    /// Place a 2 (90%) or 4 (10%) in a uniformly chosen empty cell.
    ///
    /// No-op when the grid is full.
    pub fn spawn_tile<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.spawn_tile_with_chance(rng, FOUR_TILE_CHANCE);
    }

    /// [`Board::spawn_tile`] with an explicit 4-tile probability
    pub fn spawn_tile_with_chance<R: Rng + ?Sized>(&mut self, rng: &mut R, four_chance: f32) {
        let empty: Vec<(usize, usize)> = (0..GRID_SIZE)
            .flat_map(|r| (0..GRID_SIZE).map(move |c| (r, c)))
            .filter(|&(r, c)| self.grid[r][c] == 0)
            .collect();
        if empty.is_empty() {
            return;
        }
        let (row, col) = empty[rng.gen_range(0..empty.len())];
        self.grid[row][col] = if rng.gen::<f32>() < four_chance { 4 } else { 2 };
    }

    /// Whether any move can still change the board: true if an empty cell
    /// exists or any two adjacent cells (horizontally or vertically) hold
    /// equal values. Always computed from the current grid.
    pub fn can_move(&self) -> bool {
        if self.grid.iter().flatten().any(|&v| v == 0) {
            return true;
        }
        for i in 0..GRID_SIZE {
            for j in 0..GRID_SIZE - 1 {
                if self.grid[i][j] == self.grid[i][j + 1]
                    || self.grid[j][i] == self.grid[j + 1][i]
                {
                    return true;
                }
            }
        }
        false
    }
}

/// Rotate a grid 90 degrees clockwise. Pure coordinate transform; four
/// applications reproduce the input exactly.
pub(crate) fn rotate_cw(grid: Grid) -> Grid {
    let mut rotated = [[0; GRID_SIZE]; GRID_SIZE];
    for (i, row) in rotated.iter_mut().enumerate() {
        for (j, cell) in row.iter_mut().enumerate() {
            *cell = grid[GRID_SIZE - 1 - j][i];
        }
    }
    rotated
}

/// Clockwise rotations to apply (before, after) so the canonical
/// leftward pass handles `direction`
fn rotations_for(direction: Direction) -> (usize, usize) {
    match direction {
        Direction::Left => (0, 0),
        Direction::Right => (2, 2),
        Direction::Up => (3, 1),
        Direction::Down => (1, 3),
    }
}

/// Slide non-zero values toward index 0, preserving order. Returns
/// whether anything moved.
fn compress_row(row: &mut [u32; GRID_SIZE]) -> bool {
    let mut changed = false;
    let mut write = 0;
    for read in 0..GRID_SIZE {
        if row[read] != 0 {
            if write != read {
                row[write] = row[read];
                row[read] = 0;
                changed = true;
            }
            write += 1;
        }
    }
    changed
}

/// Merge equal adjacent pairs in a compressed row, leftmost first.
///
/// Each merge doubles the left tile, consumes the right one, and closes
/// the gap by shifting the tail one cell left immediately. The scan then
/// continues with the next pair, so a merge product is never compared
/// again within the same pass.
fn merge_row(row: &mut [u32; GRID_SIZE]) -> MergeOutcome {
    let mut outcome = MergeOutcome::default();
    for i in 0..GRID_SIZE - 1 {
        if row[i] != 0 && row[i] == row[i + 1] {
            row[i] *= 2;
            outcome.gained += row[i];
            outcome.largest = outcome.largest.max(row[i]);
            for j in i + 1..GRID_SIZE - 1 {
                row[j] = row[j + 1];
            }
            row[GRID_SIZE - 1] = 0;
            outcome.changed = true;
        }
    }
    outcome
}

//! Puzzle generation: randomized backtracking fill, then clue removal.
//!
//! The fill visits empty cells in row-major order and tries the digits 1-9 in
//! a freshly shuffled order at each cell, backtracking on dead ends. The
//! removal step blanks a fixed number of distinct random cells. It does not
//! check that the remaining puzzle has a unique solution.

use serde::{Deserialize, Serialize};

use super::board::Board;
use crate::core::{GameRng, SudokuConfig};

type Grid = [[u8; 9]; 9];

/// Puzzle difficulty, which sets how many cells are blanked.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Number of cells to blank under `config`, capped at 81.
    #[must_use]
    pub fn removals(self, config: &SudokuConfig) -> usize {
        let count = match self {
            Difficulty::Easy => config.easy_removals,
            Difficulty::Medium => config.medium_removals,
            Difficulty::Hard => config.hard_removals,
        };
        count.min(81)
    }
}

/// Generate a puzzle with the stock removal counts (30 / 40 / 50).
#[must_use]
pub fn generate(difficulty: Difficulty, rng: &mut GameRng) -> Board {
    generate_with(&SudokuConfig::default(), difficulty, rng)
}

/// Generate a puzzle with removal counts taken from `config`.
#[must_use]
pub fn generate_with(config: &SudokuConfig, difficulty: Difficulty, rng: &mut GameRng) -> Board {
    let mut grid: Grid = [[0; 9]; 9];
    let mut backtracks = 0u64;
    let filled = fill(&mut grid, 0, rng, &mut backtracks);
    debug_assert!(filled, "an empty 9x9 grid always has a solution");

    let removals = difficulty.removals(config);
    remove_clues(&mut grid, removals, rng);

    tracing::debug!(?difficulty, backtracks, removals, "generated sudoku");
    Board::from_digits(grid)
}

fn can_place(grid: &Grid, row: usize, col: usize, num: u8) -> bool {
    if grid[row].contains(&num) || grid.iter().any(|r| r[col] == num) {
        return false;
    }
    let (box_row, box_col) = (row / 3 * 3, col / 3 * 3);
    !grid[box_row..box_row + 3]
        .iter()
        .any(|r| r[box_col..box_col + 3].contains(&num))
}

/// Fill every empty cell from index `from` onward. Returns false on a dead end.
fn fill(grid: &mut Grid, from: usize, rng: &mut GameRng, backtracks: &mut u64) -> bool {
    let Some(index) = (from..81).find(|&i| grid[i / 9][i % 9] == 0) else {
        return true;
    };
    let (row, col) = (index / 9, index % 9);

    let mut digits: [u8; 9] = [1, 2, 3, 4, 5, 6, 7, 8, 9];
    rng.shuffle(&mut digits);

    for num in digits {
        if can_place(grid, row, col, num) {
            grid[row][col] = num;
            if fill(grid, index + 1, rng, backtracks) {
                return true;
            }
            grid[row][col] = 0;
            *backtracks += 1;
        }
    }
    false
}

/// Blank `count` distinct filled cells chosen uniformly at random.
fn remove_clues(grid: &mut Grid, count: usize, rng: &mut GameRng) {
    let count = count.min(grid.iter().flatten().filter(|&&v| v != 0).count());
    let mut removed = 0;
    while removed < count {
        let row = rng.gen_range_usize(0..9);
        let col = rng.gen_range_usize(0..9);
        if grid[row][col] != 0 {
            grid[row][col] = 0;
            removed += 1;
        }
    }
}

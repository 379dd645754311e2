//! Engine configuration.
//!
//! Everything here is plain data with defaults matching the stock game
//! rules. Hosts may load it from any serde format.

use serde::{Deserialize, Serialize};

use super::rng::GameRng;

/// Top-level configuration for a play session.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Fixed RNG seed for reproducible sessions. `None` seeds from entropy.
    pub seed: Option<u64>,

    /// Sudoku generator settings.
    pub sudoku: SudokuConfig,

    /// Opponent pacing used by the presentation layer.
    pub pacing: PacingConfig,
}

impl EngineConfig {
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn with_sudoku(mut self, sudoku: SudokuConfig) -> Self {
        self.sudoku = sudoku;
        self
    }

    pub fn with_pacing(mut self, pacing: PacingConfig) -> Self {
        self.pacing = pacing;
        self
    }

    /// Build the RNG this configuration describes.
    #[must_use]
    pub fn rng(&self) -> GameRng {
        match self.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        }
    }
}

/// How many solved cells the sudoku generator blanks out per difficulty.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SudokuConfig {
    pub easy_removals: usize,
    pub medium_removals: usize,
    pub hard_removals: usize,
}

impl Default for SudokuConfig {
    fn default() -> Self {
        Self {
            easy_removals: 30,
            medium_removals: 40,
            hard_removals: 50,
        }
    }
}

impl SudokuConfig {
    pub fn with_removals(mut self, easy: usize, medium: usize, hard: usize) -> Self {
        self.easy_removals = easy;
        self.medium_removals = medium;
        self.hard_removals = hard;
        self
    }
}

/// Delays the presentation layer waits before applying an AI move.
///
/// Engines never sleep; these values are handed to the caller's scheduler.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PacingConfig {
    pub tictactoe_delay_ms: u64,
    pub chess_delay_ms: u64,
    /// Refresh interval for the sudoku clock display.
    pub sudoku_tick_ms: u64,
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            tictactoe_delay_ms: 500,
            chess_delay_ms: 800,
            sudoku_tick_ms: 1000,
        }
    }
}

impl PacingConfig {
    #[must_use]
    pub fn tictactoe_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tictactoe_delay_ms)
    }

    #[must_use]
    pub fn chess_delay(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.chess_delay_ms)
    }
}

//! A sudoku session: puzzle, difficulty, completion and clock.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use super::board::{Board, Pos};
use super::generator::{generate_with, Difficulty};
use crate::core::{GameKind, GameOutcome, GameResult, GameRng, Reportable, SudokuConfig};

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SudokuGame {
    pub board: Board,
    pub difficulty: Difficulty,
    /// Set once the board is full and error-free. Never cleared.
    pub is_complete: bool,
    pub start_time: SystemTime,
}

impl SudokuGame {
    /// Generate a fresh puzzle and start the clock now.
    #[must_use]
    pub fn new(difficulty: Difficulty, rng: &mut GameRng) -> Self {
        Self::with_config(&SudokuConfig::default(), difficulty, rng)
    }

    #[must_use]
    pub fn with_config(config: &SudokuConfig, difficulty: Difficulty, rng: &mut GameRng) -> Self {
        let board = generate_with(config, difficulty, rng);
        Self::from_board(board, difficulty, SystemTime::now())
    }

    /// Wrap an existing board, e.g. a hand-made puzzle or a restored game.
    #[must_use]
    pub fn from_board(board: Board, difficulty: Difficulty, start_time: SystemTime) -> Self {
        let is_complete = board.is_complete();
        Self {
            board,
            difficulty,
            is_complete,
            start_time,
        }
    }

    /// Write a digit. Ignored once the puzzle is complete.
    #[must_use]
    pub fn set_value(mut self, pos: Pos, value: u8) -> Self {
        if self.is_complete {
            return self;
        }
        self.board = self.board.set_value(pos, value);
        self.is_complete = self.board.is_complete();
        self
    }

    /// Empty a cell. Ignored once the puzzle is complete.
    #[must_use]
    pub fn clear(mut self, pos: Pos) -> Self {
        if self.is_complete {
            return self;
        }
        self.board = self.board.clear(pos);
        self
    }

    /// Whole seconds between `start_time` and `now`, 0 if `now` is earlier.
    #[must_use]
    pub fn elapsed_secs(&self, now: SystemTime) -> u64 {
        now.duration_since(self.start_time)
            .map(|d| d.as_secs())
            .unwrap_or(0)
    }
}

impl Reportable for SudokuGame {
    fn outcome(&self, now: SystemTime) -> Option<GameOutcome> {
        self.is_complete.then(|| {
            GameOutcome::new(GameKind::Sudoku, GameResult::Win).with_elapsed(self.elapsed_secs(now))
        })
    }

    fn is_terminal(&self) -> bool {
        self.is_complete
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn one_blank() -> (Board, Pos, u8) {
        let mut rng = GameRng::new(5);
        let solved = generate_with(&SudokuConfig::default().with_removals(0, 0, 0), Difficulty::Easy, &mut rng);
        let mut digits = solved.digits();
        let answer = digits[2][6];
        digits[2][6] = 0;
        (Board::from_digits(digits), Pos::new(2, 6), answer)
    }

    #[test]
    fn test_new_game() {
        let mut rng = GameRng::new(3);
        let game = SudokuGame::new(Difficulty::Hard, &mut rng);
        assert_eq!(game.board.empty_count(), 50);
        assert!(!game.is_complete);
        assert_eq!(game.difficulty, Difficulty::Hard);
    }

    #[test]
    fn test_completion_is_sticky() {
        let (board, pos, answer) = one_blank();
        let start = SystemTime::UNIX_EPOCH;
        let game = SudokuGame::from_board(board, Difficulty::Easy, start);
        assert!(!game.is_complete);

        let game = game.set_value(pos, answer);
        assert!(game.is_complete);

        let game = game.clear(pos);
        assert!(game.is_complete);
        assert_eq!(game.board.value(pos), answer);
    }

    #[test]
    fn test_wrong_digit_does_not_complete() {
        let (board, pos, answer) = one_blank();
        let wrong = answer % 9 + 1;
        let game = SudokuGame::from_board(board, Difficulty::Easy, SystemTime::now()).set_value(pos, wrong);
        assert!(!game.is_complete);
        assert!(game.board.cell(pos).is_error);
    }

    #[test]
    fn test_outcome_reports_elapsed_time() {
        let (board, pos, answer) = one_blank();
        let start = SystemTime::UNIX_EPOCH + Duration::from_secs(1_000);
        let game = SudokuGame::from_board(board, Difficulty::Medium, start);
        let now = start + Duration::from_millis(95_700);

        assert_eq!(game.outcome(now), None);

        let game = game.set_value(pos, answer);
        let outcome = game.outcome(now).unwrap();
        assert_eq!(outcome.game, GameKind::Sudoku);
        assert_eq!(outcome.result, GameResult::Win);
        assert_eq!(outcome.elapsed_secs, Some(95));
    }

    #[test]
    fn test_elapsed_never_negative() {
        let start = SystemTime::UNIX_EPOCH + Duration::from_secs(10);
        let game = SudokuGame::from_board(Board::empty(), Difficulty::Easy, start);
        assert_eq!(game.elapsed_secs(SystemTime::UNIX_EPOCH), 0);
    }
}

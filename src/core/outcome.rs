//! Game outcomes and the seam to the external stats collaborator.
//!
//! Engine functions stay pure. A host threads states through the engine and
//! calls [`report_transition`] after each move; the outcome is handed to an
//! [`OutcomeSink`] exactly once, on the step where the game ends.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// Which engine produced an outcome.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    TicTacToe,
    Sudoku,
    Chess,
}

impl GameKind {
    /// Every game kind, in menu order.
    pub const ALL: [GameKind; 3] = [GameKind::TicTacToe, GameKind::Sudoku, GameKind::Chess];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            GameKind::TicTacToe => "tictactoe",
            GameKind::Sudoku => "sudoku",
            GameKind::Chess => "chess",
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a finished game, from the human player's side.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GameResult {
    Win,
    Loss,
    Draw,
}

/// What a finished game reports to the stats collaborator.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    pub game: GameKind,
    pub result: GameResult,
    /// Whole seconds from start to finish, for timed games.
    pub elapsed_secs: Option<u64>,
}

impl GameOutcome {
    #[must_use]
    pub fn new(game: GameKind, result: GameResult) -> Self {
        Self {
            game,
            result,
            elapsed_secs: None,
        }
    }

    #[must_use]
    pub fn with_elapsed(mut self, secs: u64) -> Self {
        self.elapsed_secs = Some(secs);
        self
    }
}

/// Receiver of finished-game outcomes (profile/stat storage).
pub trait OutcomeSink {
    fn record(&mut self, outcome: &GameOutcome);
}

impl OutcomeSink for Vec<GameOutcome> {
    fn record(&mut self, outcome: &GameOutcome) {
        self.push(outcome.clone());
    }
}

/// A game state that can say how the game ended.
pub trait Reportable {
    /// `Some` once the game is over. `now` is used by timed games.
    fn outcome(&self, now: SystemTime) -> Option<GameOutcome>;

    fn is_terminal(&self) -> bool {
        self.outcome(SystemTime::UNIX_EPOCH).is_some()
    }
}

/// Record the outcome if `after` ended a game that `before` had not.
///
/// Returns whether an outcome was recorded.
pub fn report_transition<S: Reportable>(
    before: &S,
    after: &S,
    now: SystemTime,
    sink: &mut dyn OutcomeSink,
) -> bool {
    if before.is_terminal() {
        return false;
    }
    match after.outcome(now) {
        Some(outcome) => {
            tracing::debug!(game = %outcome.game, result = ?outcome.result, "game finished");
            sink.record(&outcome);
            true
        }
        None => false,
    }
}

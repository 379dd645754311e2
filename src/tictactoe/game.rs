//! Tic-Tac-Toe state machine.

use serde::{Deserialize, Serialize};
use std::time::SystemTime;

use super::board::{Board, Mark};
use crate::core::{GameKind, GameOutcome, GameResult, Reportable};

/// Complete Tic-Tac-Toe state.
///
/// `game_over` is true exactly when there is a winner or a draw. Once over,
/// the state is absorbing: [`TicTacToeState::apply_move`] returns it unchanged.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TicTacToeState {
    pub board: Board,
    pub current_player: Mark,
    pub winner: Option<Mark>,
    pub is_draw: bool,
    pub game_over: bool,
}

impl Default for TicTacToeState {
    fn default() -> Self {
        Self::initial()
    }
}

impl TicTacToeState {
    /// Empty board, X to move.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            current_player: Mark::X,
            winner: None,
            is_draw: false,
            game_over: false,
        }
    }

    /// Place the current player's mark at `index` (0-8, row-major).
    ///
    /// Returns the state unchanged if the cell is occupied or the game is
    /// over. The turn passes to the other player after every accepted move.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    #[must_use]
    pub fn apply_move(self, index: usize) -> Self {
        assert!(index < 9, "tic-tac-toe cell index {index} out of range");

        if self.game_over {
            tracing::trace!(index, "move ignored: game over");
            return self;
        }
        let Some(board) = self.board.with_mark(index, self.current_player) else {
            tracing::trace!(index, "move ignored: cell occupied");
            return self;
        };

        let winner = board.winner();
        let is_draw = winner.is_none() && board.is_full();

        Self {
            board,
            current_player: self.current_player.other(),
            winner,
            is_draw,
            game_over: winner.is_some() || is_draw,
        }
    }

    /// Result for the human, who always plays X.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        match (self.winner, self.is_draw) {
            (Some(Mark::X), _) => Some(GameResult::Win),
            (Some(Mark::O), _) => Some(GameResult::Loss),
            (None, true) => Some(GameResult::Draw),
            (None, false) => None,
        }
    }
}

impl Reportable for TicTacToeState {
    fn outcome(&self, _now: SystemTime) -> Option<GameOutcome> {
        self.result()
            .map(|result| GameOutcome::new(GameKind::TicTacToe, result))
    }

    fn is_terminal(&self) -> bool {
        self.game_over
    }
}

//! Chess game state and move notation.

use im::Vector;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::str::FromStr;

use super::board::{Board, Pos};
use super::movegen::{generate_moves, MoveList};
use super::piece::Color;
use crate::core::NotationError;

/// Opponent strength chosen at game start. Stored with the game; the random
/// opponent plays the same at every level.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
}

/// A move from one square to another.
///
/// Displays as file/rank pairs, e.g. `E2E4`: files `A`-`H` by column, rank
/// `8 - row`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub from: Pos,
    pub to: Pos,
}

impl Move {
    #[must_use]
    pub const fn new(from: Pos, to: Pos) -> Self {
        Self { from, to }
    }
}

fn write_square(f: &mut std::fmt::Formatter<'_>, pos: Pos) -> std::fmt::Result {
    let file = (b'A' + pos.col() as u8) as char;
    write!(f, "{file}{}", 8 - pos.row())
}

fn parse_square(file: char, rank: char) -> Result<Pos, NotationError> {
    let col = match file.to_ascii_uppercase() {
        f @ 'A'..='H' => f as usize - 'A' as usize,
        _ => return Err(NotationError::File(file)),
    };
    let row = match rank {
        r @ '1'..='8' => 8 - (r as usize - '0' as usize),
        _ => return Err(NotationError::Rank(rank)),
    };
    Ok(Pos::new(row, col))
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write_square(f, self.from)?;
        write_square(f, self.to)
    }
}

impl FromStr for Move {
    type Err = NotationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: SmallVec<[char; 4]> = s.chars().collect();
        match chars.as_slice() {
            &[ff, fr, tf, tr] => Ok(Self {
                from: parse_square(ff, fr)?,
                to: parse_square(tf, tr)?,
            }),
            _ => Err(NotationError::Length(s.to_string())),
        }
    }
}

/// Complete chess state, threaded by value through [`ChessState::apply_move`].
///
/// `game_over` is never set by this engine: check, checkmate and stalemate
/// are not modelled.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChessState {
    pub board: Board,
    pub current_player: Color,
    pub selected_square: Option<Pos>,
    pub move_history: Vector<String>,
    pub game_over: bool,
    pub difficulty: Difficulty,
}

impl ChessState {
    /// Standard starting position, white to move.
    #[must_use]
    pub fn initial(difficulty: Difficulty) -> Self {
        Self::from_board(Board::starting(), Color::White, difficulty)
    }

    /// Start from an arbitrary position.
    #[must_use]
    pub fn from_board(board: Board, to_move: Color, difficulty: Difficulty) -> Self {
        Self {
            board,
            current_player: to_move,
            selected_square: None,
            move_history: Vector::new(),
            game_over: false,
            difficulty,
        }
    }

    /// Move the piece on `from` to `to`, replacing whatever stood there.
    ///
    /// No legality check happens here; `to` should come from
    /// [`generate_moves`]. The turn passes, the selection clears and the move
    /// is appended to the history.
    #[must_use]
    pub fn apply_move(mut self, from: Pos, to: Pos) -> Self {
        let piece = self.board.piece_at(from);
        self.board.set(to, piece);
        self.board.set(from, None);

        let token = Move::new(from, to).to_string();
        tracing::trace!(%token, player = %self.current_player, "chess move");

        self.move_history.push_back(token);
        self.current_player = self.current_player.opponent();
        self.selected_square = None;
        self
    }

    /// Destinations for the piece on `pos`, for the side to move.
    #[must_use]
    pub fn moves_from(&self, pos: Pos) -> MoveList {
        generate_moves(&self.board, pos, self.current_player)
    }

    /// Handle a square press from the side to move.
    ///
    /// Pressing one of your own pieces selects it, even if it is already
    /// selected. Any other square clears the selection.
    #[must_use]
    pub fn select(mut self, pos: Pos) -> Self {
        let own_piece = self
            .board
            .piece_at(pos)
            .is_some_and(|p| p.color == self.current_player);

        self.selected_square = own_piece.then_some(pos);
        self
    }

    /// Destinations for the selected piece, empty when nothing is selected.
    #[must_use]
    pub fn selected_moves(&self) -> MoveList {
        self.selected_square
            .map(|pos| self.moves_from(pos))
            .unwrap_or_default()
    }
}

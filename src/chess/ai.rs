//! Random-move opponent. The AI always plays black.

use smallvec::SmallVec;

use super::board::Board;
use super::game::{ChessState, Move};
use super::movegen::generate_moves;
use super::piece::Color;
use crate::core::GameRng;

/// The color the AI plays.
pub const AI_COLOR: Color = Color::Black;

/// Every pseudo-legal move for `color`, in board order.
#[must_use]
pub fn all_moves(board: &Board, color: Color) -> SmallVec<[Move; 64]> {
    board
        .pieces()
        .filter(|(_, piece)| piece.color == color)
        .flat_map(|(from, _)| {
            generate_moves(board, from, color)
                .into_iter()
                .map(move |to| Move::new(from, to))
        })
        .collect()
}

/// Pick one of black's pseudo-legal moves uniformly at random.
///
/// `None` means black cannot move; without check detection this covers both
/// checkmate-like and stalemate-like positions.
#[must_use]
pub fn select_move(state: &ChessState, rng: &mut GameRng) -> Option<Move> {
    let moves = all_moves(&state.board, AI_COLOR);
    let chosen = rng.choose(&moves).copied();
    match chosen {
        Some(mv) => tracing::debug!(%mv, candidates = moves.len(), "chess AI move"),
        None => tracing::debug!("chess AI has no moves"),
    }
    chosen
}

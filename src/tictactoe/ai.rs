//! Exhaustive minimax opponent. The AI always plays O.
//!
//! Scores are from O's point of view: `10 - depth` for an O win,
//! `depth - 10` for an X win, 0 for a draw, where `depth` counts plies after
//! the candidate move. O therefore prefers the fastest win and the slowest
//! loss. The full game tree is under 9! nodes, so no pruning or caching is
//! needed.

use super::board::{Board, Mark};

const WIN_SCORE: i32 = 10;

/// Pick O's move for `board`, or `None` if no cell is empty.
///
/// Deterministic: ties go to the lowest index.
#[must_use]
pub fn select_move(board: &Board) -> Option<usize> {
    let mut best: Option<(usize, i32)> = None;

    for index in board.available_moves() {
        let Some(next) = board.with_mark(index, Mark::O) else {
            continue;
        };
        let score = minimax(&next, 0, Mark::X);
        if best.map_or(true, |(_, best_score)| score > best_score) {
            best = Some((index, score));
        }
    }

    if let Some((index, score)) = best {
        tracing::debug!(index, score, "tic-tac-toe AI move");
    }
    best.map(|(index, _)| index)
}

/// Minimax value of `board` with `to_move` about to play.
fn minimax(board: &Board, depth: i32, to_move: Mark) -> i32 {
    match board.winner() {
        Some(Mark::O) => return WIN_SCORE - depth,
        Some(Mark::X) => return depth - WIN_SCORE,
        None if board.is_full() => return 0,
        None => {}
    }

    let scores = board.available_moves().filter_map(|index| {
        board
            .with_mark(index, to_move)
            .map(|next| minimax(&next, depth + 1, to_move.other()))
    });

    match to_move {
        Mark::O => scores.max().unwrap_or(0),
        Mark::X => scores.min().unwrap_or(0),
    }
}

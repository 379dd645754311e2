//! Pseudo-legal move generation.
//!
//! Moves obey piece movement and occupancy only. Nothing here checks whether
//! a move leaves the mover's king attacked, and there is no castling, en
//! passant or promotion.

use smallvec::SmallVec;

use super::board::{Board, Pos};
use super::piece::{Color, PieceKind};

/// Destinations for one piece. A queen in the open reaches at most 27.
pub type MoveList = SmallVec<[Pos; 28]>;

const KNIGHT_OFFSETS: [(i32, i32); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const ORTHOGONALS: [(i32, i32); 4] = [(0, -1), (0, 1), (-1, 0), (1, 0)];
const DIAGONALS: [(i32, i32); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Destinations for the piece on `from`, if it belongs to `mover`.
///
/// Empty when the square is empty or holds an opposing piece.
#[must_use]
pub fn generate_moves(board: &Board, from: Pos, mover: Color) -> MoveList {
    let mut moves = MoveList::new();
    let Some(piece) = board.piece_at(from) else {
        return moves;
    };
    if piece.color != mover {
        return moves;
    }

    match piece.kind {
        PieceKind::Pawn => pawn_moves(board, from, mover, &mut moves),
        PieceKind::Knight => step_moves(board, from, mover, &KNIGHT_OFFSETS, &mut moves),
        PieceKind::Bishop => ray_moves(board, from, mover, &DIAGONALS, &mut moves),
        PieceKind::Rook => ray_moves(board, from, mover, &ORTHOGONALS, &mut moves),
        PieceKind::Queen => {
            ray_moves(board, from, mover, &ORTHOGONALS, &mut moves);
            ray_moves(board, from, mover, &DIAGONALS, &mut moves);
        }
        PieceKind::King => {
            step_moves(board, from, mover, &ORTHOGONALS, &mut moves);
            step_moves(board, from, mover, &DIAGONALS, &mut moves);
        }
    }
    moves
}

fn is_opponent(board: &Board, pos: Pos, mover: Color) -> bool {
    board.piece_at(pos).is_some_and(|p| p.color != mover)
}

fn pawn_moves(board: &Board, from: Pos, mover: Color, out: &mut MoveList) {
    let dir = mover.forward();

    if let Some(one) = from.offset(dir, 0) {
        if board.piece_at(one).is_none() {
            out.push(one);
            if from.row() == mover.pawn_row() {
                if let Some(two) = from.offset(2 * dir, 0) {
                    if board.piece_at(two).is_none() {
                        out.push(two);
                    }
                }
            }
        }
    }

    for d_col in [-1, 1] {
        if let Some(target) = from.offset(dir, d_col) {
            if is_opponent(board, target, mover) {
                out.push(target);
            }
        }
    }
}

/// Single-step pieces: any on-board target not held by the mover.
fn step_moves(board: &Board, from: Pos, mover: Color, offsets: &[(i32, i32)], out: &mut MoveList) {
    for &(d_row, d_col) in offsets {
        if let Some(target) = from.offset(d_row, d_col) {
            if board.piece_at(target).map_or(true, |p| p.color != mover) {
                out.push(target);
            }
        }
    }
}

/// Sliding pieces: walk each ray until the edge, a friendly piece
/// (excluded) or an opposing piece (included).
fn ray_moves(board: &Board, from: Pos, mover: Color, dirs: &[(i32, i32)], out: &mut MoveList) {
    for &(d_row, d_col) in dirs {
        let mut current = from;
        while let Some(next) = current.offset(d_row, d_col) {
            match board.piece_at(next) {
                None => out.push(next),
                Some(p) if p.color != mover => {
                    out.push(next);
                    break;
                }
                Some(_) => break,
            }
            current = next;
        }
    }
}

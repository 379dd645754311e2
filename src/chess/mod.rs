//! Simplified chess engine.
//!
//! - `Piece` / `Board`: explicit `{kind, color}` pieces on an 8x8 grid
//! - `generate_moves`: pseudo-legal destinations per piece
//! - `ChessState`: move application, selection and `E2E4` history
//! - `select_move`: uniformly random opponent playing black
//!
//! Check, checkmate, stalemate, castling, en passant and promotion are not
//! modelled. `ChessState::game_over` exists but is never set.
//!
//! ```
//! use rust_parlor::chess::{generate_moves, ChessState, Color, Difficulty, Pos};
//!
//! let state = ChessState::initial(Difficulty::Easy);
//! let moves = generate_moves(&state.board, Pos::new(6, 4), Color::White);
//! assert_eq!(moves.len(), 2);
//!
//! let state = state.apply_move(Pos::new(6, 4), Pos::new(4, 4));
//! assert_eq!(state.move_history.back().map(String::as_str), Some("E2E4"));
//! ```

mod ai;
mod board;
mod game;
mod movegen;
mod piece;

pub use ai::{all_moves, select_move, AI_COLOR};
pub use board::{Board, Pos, Square};
pub use game::{ChessState, Difficulty, Move};
pub use movegen::{generate_moves, MoveList};
pub use piece::{Color, Piece, PieceKind};

//! Tic-Tac-Toe engine.
//!
//! - `Board`: nine cells, line detection
//! - `TicTacToeState`: in-progress / terminal state machine, threaded by value
//! - `select_move`: optimal minimax opponent playing O
//!
//! ```
//! use rust_parlor::tictactoe::{select_move, Mark, TicTacToeState};
//!
//! let state = TicTacToeState::initial().apply_move(0);
//! let reply = select_move(&state.board).unwrap();
//! let state = state.apply_move(reply);
//! assert_eq!(state.board.get(reply), Some(Mark::O));
//! ```

mod ai;
mod board;
mod game;

pub use ai::select_move;
pub use board::{Board, Mark, LINES};
pub use game::TicTacToeState;

//! Sudoku engine.
//!
//! - `Board` / `Cell`: the 9x9 grid, placement validity, fixed clues
//! - `generate`: randomized backtracking fill plus difficulty-based removal
//! - `SudokuGame`: a session with completion tracking and a start time
//!
//! ```
//! use rust_parlor::core::GameRng;
//! use rust_parlor::sudoku::{generate, Difficulty, Pos};
//!
//! let mut rng = GameRng::new(1);
//! let board = generate(Difficulty::Easy, &mut rng);
//! assert_eq!(board.empty_count(), 30);
//!
//! let pos = board.iter().find(|(_, c)| c.is_empty()).map(|(p, _)| p).unwrap();
//! let board = board.set_value(pos, 5);
//! assert_eq!(board.value(pos), 5);
//! ```

mod board;
mod game;
mod generator;

pub use board::{related_cells, Board, Cell, Pos, RelatedCells};
pub use game::SudokuGame;
pub use generator::{generate, generate_with, Difficulty};

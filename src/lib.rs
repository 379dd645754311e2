//! # rust-parlor
//!
//! Deterministic engines for three turn-based games: Tic-Tac-Toe, Sudoku and
//! a simplified Chess.
//!
//! ## Design Principles
//!
//! 1. **Value in, value out**: every engine state is a plain value. Mutators
//!    consume the old state and return the new one; engines keep nothing
//!    between calls.
//!
//! 2. **Illegal input is a no-op**: occupied cells, fixed clues and finished
//!    games return the state unchanged. Exhausted moves come back as `None`.
//!    Out-of-range coordinates are rejected when the coordinate is built.
//!
//! 3. **Borrowed randomness**: sudoku generation and the chess opponent take
//!    a `&mut GameRng`, so a seed reproduces a whole session.
//!
//! 4. **Outcomes leave through a seam**: engines never touch stats. Hosts call
//!    `report_transition` with an `OutcomeSink` after each move.
//!
//! ## Modules
//!
//! - `core`: coordinates, RNG, outcomes, configuration, errors, snapshots
//! - `tictactoe`: 3x3 board, state machine, minimax opponent
//! - `sudoku`: 9x9 board, generator, game session
//! - `chess`: pseudo-legal move generation, move history, random opponent
//! - `stats`: per-game counters implementing `OutcomeSink`

pub mod core;
pub mod tictactoe;
pub mod sudoku;
pub mod chess;
pub mod stats;

// Re-export commonly used types
pub use crate::core::{
    Coord, GameRng, GameRngState,
    EngineConfig, PacingConfig, SudokuConfig,
    GameKind, GameOutcome, GameResult, OutcomeSink, Reportable, report_transition,
    CoordError, NotationError, SnapshotError,
};

pub use crate::tictactoe::{Mark, TicTacToeState};
pub use crate::sudoku::SudokuGame;
pub use crate::chess::{ChessState, Move};
pub use crate::stats::{GameStat, StatsBook};

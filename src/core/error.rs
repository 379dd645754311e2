//! Error types shared across the engines.
//!
//! Gameplay never fails: illegal requests are absorbed as no-ops. These
//! errors cover malformed input at the edges (coordinates, notation, saved
//! snapshots).

use thiserror::Error;

/// A row or column outside the board.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CoordError {
    #[error("coordinate ({row}, {col}) out of range for a {size}x{size} board")]
    OutOfRange { row: usize, col: usize, size: usize },
}

/// A chess move token that is not of the form `E2E4`.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum NotationError {
    #[error("move token {0:?} must be exactly four characters")]
    Length(String),
    #[error("invalid file {0:?}, expected A-H")]
    File(char),
    #[error("invalid rank {0:?}, expected 1-8")]
    Rank(char),
}

/// Failure to encode or decode a saved game.
#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("snapshot encoding failed: {0}")]
    Encode(#[source] bincode::Error),
    #[error("snapshot decoding failed: {0}")]
    Decode(#[source] bincode::Error),
}

//! The 8x8 board. Row 0 is black's back rank, row 7 is white's.

use serde::{Deserialize, Serialize};

use super::piece::{Color, Piece, PieceKind};
use crate::core::Coord;

/// A chess board position.
pub type Pos = Coord<8>;

const START_ROWS: [&str; 8] = [
    "rnbqkbnr",
    "pppppppp",
    "........",
    "........",
    "........",
    "........",
    "PPPPPPPP",
    "RNBQKBNR",
];

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Square {
    pub piece: Option<Piece>,
}

#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    squares: [[Square; 8]; 8],
}

impl Default for Board {
    fn default() -> Self {
        Self::starting()
    }
}

impl Board {
    /// A board with no pieces.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            squares: [[Square::default(); 8]; 8],
        }
    }

    /// The standard starting position.
    #[must_use]
    pub fn starting() -> Self {
        Self::from_rows(&START_ROWS)
    }

    /// Build a board from eight rows of letter-case symbols, `.` for empty,
    /// top row (black's back rank) first.
    ///
    /// # Panics
    ///
    /// Panics if a row is not eight characters or holds an unknown symbol.
    #[must_use]
    pub fn from_rows(rows: &[&str; 8]) -> Self {
        let mut board = Self::empty();
        for (r, row) in rows.iter().enumerate() {
            assert_eq!(row.chars().count(), 8, "row {r} must have 8 squares");
            for (c, symbol) in row.chars().enumerate() {
                board.squares[r][c].piece = match symbol {
                    '.' => None,
                    s => Some(
                        Piece::from_symbol(s)
                            .unwrap_or_else(|| panic!("unknown piece symbol {s:?}")),
                    ),
                };
            }
        }
        board
    }

    #[must_use]
    pub fn piece_at(&self, pos: Pos) -> Option<Piece> {
        self.squares[pos.row()][pos.col()].piece
    }

    #[must_use]
    pub fn square(&self, pos: Pos) -> &Square {
        &self.squares[pos.row()][pos.col()]
    }

    pub(crate) fn set(&mut self, pos: Pos, piece: Option<Piece>) {
        self.squares[pos.row()][pos.col()].piece = piece;
    }

    /// Occupied squares with their pieces, row-major.
    pub fn pieces(&self) -> impl Iterator<Item = (Pos, Piece)> + '_ {
        Pos::all().filter_map(move |pos| self.piece_at(pos).map(|p| (pos, p)))
    }

    #[must_use]
    pub fn king_count(&self, color: Color) -> usize {
        self.pieces()
            .filter(|(_, p)| p.color == color && p.kind == PieceKind::King)
            .count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in &self.squares {
            for square in row {
                match square.piece {
                    Some(piece) => write!(f, "{piece}")?,
                    None => f.write_str(".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

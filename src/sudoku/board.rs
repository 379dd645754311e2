//! The 9x9 sudoku board and its constraint checks.

use serde::{Deserialize, Deserializer, Serialize};
use smallvec::SmallVec;

use crate::core::Coord;

/// A sudoku cell position.
pub type Pos = Coord<9>;

/// Cells sharing a row, column or box with some cell. Always 20 entries.
pub type RelatedCells = SmallVec<[Pos; 20]>;

/// One sudoku cell.
///
/// `value` is 0 for empty. A fixed cell (a clue) never changes after the
/// board is built. `is_error` reflects conflicts at the moment the value was
/// last written.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
pub struct Cell {
    pub value: u8,
    pub is_fixed: bool,
    pub is_error: bool,
}

impl Cell {
    #[must_use]
    pub const fn clue(value: u8) -> Self {
        Self {
            value,
            is_fixed: true,
            is_error: false,
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.value == 0
    }
}

impl<'de> Deserialize<'de> for Cell {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename = "Cell")]
        struct Raw {
            value: u8,
            is_fixed: bool,
            is_error: bool,
        }

        let raw = Raw::deserialize(deserializer)?;
        if raw.value > 9 {
            return Err(serde::de::Error::custom(format!(
                "sudoku digit {} out of range",
                raw.value
            )));
        }
        Ok(Self {
            value: raw.value,
            is_fixed: raw.is_fixed,
            is_error: raw.is_error,
        })
    }
}

/// A 9x9 grid of cells.
///
/// Mutators take `self` by value and return the new board, so the previous
/// board can never alias the next one.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [[Cell; 9]; 9],
}

impl Board {
    /// An empty board with no clues.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Build a puzzle from digits; every non-zero digit becomes a fixed clue.
    ///
    /// # Panics
    ///
    /// Panics if any digit is greater than 9.
    #[must_use]
    pub fn from_digits(digits: [[u8; 9]; 9]) -> Self {
        let mut board = Self::empty();
        for (r, row) in digits.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                assert!(value <= 9, "sudoku digit {value} out of range");
                if value != 0 {
                    board.cells[r][c] = Cell::clue(value);
                }
            }
        }
        board
    }

    /// The current values, 0 for empty.
    #[must_use]
    pub fn digits(&self) -> [[u8; 9]; 9] {
        let mut out = [[0u8; 9]; 9];
        for pos in Pos::all() {
            out[pos.row()][pos.col()] = self.cell(pos).value;
        }
        out
    }

    #[must_use]
    pub fn cell(&self, pos: Pos) -> &Cell {
        &self.cells[pos.row()][pos.col()]
    }

    #[must_use]
    pub fn value(&self, pos: Pos) -> u8 {
        self.cell(pos).value
    }

    /// Iterate over `(position, cell)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Pos, &Cell)> + '_ {
        Pos::all().map(move |pos| (pos, self.cell(pos)))
    }

    #[must_use]
    pub fn empty_count(&self) -> usize {
        self.iter().filter(|(_, cell)| cell.is_empty()).count()
    }

    /// True if `num` appears nowhere else in the row, column or box of `pos`.
    /// The cell at `pos` itself is ignored.
    #[must_use]
    pub fn is_valid_placement(&self, pos: Pos, num: u8) -> bool {
        peers(pos).all(|other| self.value(other) != num)
    }

    /// Write `value` (0 clears) into a non-fixed cell and flag it if it
    /// conflicts. Fixed cells are left untouched.
    ///
    /// # Panics
    ///
    /// Panics if `value` is greater than 9.
    #[must_use]
    pub fn set_value(mut self, pos: Pos, value: u8) -> Self {
        assert!(value <= 9, "sudoku digit {value} out of range");

        if self.cell(pos).is_fixed {
            tracing::trace!(%pos, "write ignored: fixed cell");
            return self;
        }
        let is_error = value != 0 && !self.is_valid_placement(pos, value);
        self.cells[pos.row()][pos.col()] = Cell {
            value,
            is_fixed: false,
            is_error,
        };
        self
    }

    /// Empty a non-fixed cell and clear its error flag.
    #[must_use]
    pub fn clear(mut self, pos: Pos) -> Self {
        if self.cell(pos).is_fixed {
            tracing::trace!(%pos, "clear ignored: fixed cell");
            return self;
        }
        self.cells[pos.row()][pos.col()] = Cell::default();
        self
    }

    /// Every cell is filled and none is flagged as an error.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.iter()
            .all(|(_, cell)| !cell.is_empty() && !cell.is_error)
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for r in 0..9 {
            if r > 0 && r % 3 == 0 {
                writeln!(f, "------+-------+------")?;
            }
            for c in 0..9 {
                if c > 0 && c % 3 == 0 {
                    f.write_str("| ")?;
                }
                match self.cells[r][c].value {
                    0 => f.write_str(".")?,
                    v => write!(f, "{v}")?,
                }
                if c < 8 {
                    f.write_str(" ")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

/// Top-left corner of the box containing `pos`.
fn box_origin(pos: Pos) -> (usize, usize) {
    (pos.row() / 3 * 3, pos.col() / 3 * 3)
}

/// Row, column and box peers of `pos`, each listed once.
fn peers(pos: Pos) -> impl Iterator<Item = Pos> {
    let (row, col) = (pos.row(), pos.col());
    let (box_row, box_col) = box_origin(pos);

    let in_row = (0..9).filter(move |&c| c != col).map(move |c| Pos::new(row, c));
    let in_col = (0..9).filter(move |&r| r != row).map(move |r| Pos::new(r, col));
    let in_box = (box_row..box_row + 3)
        .flat_map(move |r| (box_col..box_col + 3).map(move |c| (r, c)))
        .filter(move |&(r, c)| r != row && c != col)
        .map(|(r, c)| Pos::new(r, c));

    in_row.chain(in_col).chain(in_box)
}

/// The 20 cells sharing a row, column or 3x3 box with `pos`, excluding `pos`.
#[must_use]
pub fn related_cells(pos: Pos) -> RelatedCells {
    peers(pos).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const SOLVED: [[u8; 9]; 9] = [
        [5, 3, 4, 6, 7, 8, 9, 1, 2],
        [6, 7, 2, 1, 9, 5, 3, 4, 8],
        [1, 9, 8, 3, 4, 2, 5, 6, 7],
        [8, 5, 9, 7, 6, 1, 4, 2, 3],
        [4, 2, 6, 8, 5, 3, 7, 9, 1],
        [7, 1, 3, 9, 2, 4, 8, 5, 6],
        [9, 6, 1, 5, 3, 7, 2, 8, 4],
        [2, 8, 7, 4, 1, 9, 6, 3, 5],
        [3, 4, 5, 2, 8, 6, 1, 7, 9],
    ];

    #[test]
    fn test_related_cells() {
        let related = related_cells(Pos::new(4, 4));
        assert_eq!(related.len(), 20);
        assert!(!related.contains(&Pos::new(4, 4)));
        assert!(related.contains(&Pos::new(4, 0)));
        assert!(related.contains(&Pos::new(8, 4)));
        assert!(related.contains(&Pos::new(3, 3)));
        assert!(!related.contains(&Pos::new(2, 2)));

        let mut dedup = related.to_vec();
        dedup.sort();
        dedup.dedup();
        assert_eq!(dedup.len(), 20);
    }

    #[test]
    fn test_valid_placement_ignores_own_cell() {
        let board = Board::from_digits(SOLVED);
        for (pos, cell) in board.iter() {
            assert!(board.is_valid_placement(pos, cell.value));
        }
    }

    #[test]
    fn test_valid_placement_detects_conflicts() {
        let mut digits = [[0u8; 9]; 9];
        digits[0][0] = 5;
        let board = Board::from_digits(digits);

        assert!(!board.is_valid_placement(Pos::new(0, 8), 5)); // row
        assert!(!board.is_valid_placement(Pos::new(8, 0), 5)); // column
        assert!(!board.is_valid_placement(Pos::new(2, 2), 5)); // box
        assert!(board.is_valid_placement(Pos::new(4, 4), 5));
        assert!(board.is_valid_placement(Pos::new(0, 8), 4));
    }

    #[test]
    fn test_set_value_flags_conflict_but_stores() {
        let mut digits = [[0u8; 9]; 9];
        digits[0][0] = 5;
        let board = Board::from_digits(digits).set_value(Pos::new(0, 5), 5);

        let cell = board.cell(Pos::new(0, 5));
        assert_eq!(cell.value, 5);
        assert!(cell.is_error);
        assert!(!cell.is_fixed);

        let board = board.set_value(Pos::new(0, 5), 4);
        assert!(!board.cell(Pos::new(0, 5)).is_error);
    }

    #[test]
    fn test_fixed_cells_are_immutable() {
        let board = Board::from_digits(SOLVED);
        let pos = Pos::new(3, 3);

        let after = board.clone().set_value(pos, 1);
        assert_eq!(after, board);

        let after = board.clone().clear(pos);
        assert_eq!(after.value(pos), 7);
    }

    #[test]
    fn test_clear_resets_error() {
        let mut digits = [[0u8; 9]; 9];
        digits[0][0] = 5;
        let pos = Pos::new(0, 1);
        let board = Board::from_digits(digits).set_value(pos, 5).clear(pos);
        assert_eq!(*board.cell(pos), Cell::default());
    }

    #[test]
    fn test_complete_board() {
        let board = Board::from_digits(SOLVED);
        assert!(board.is_complete());
        assert_eq!(board.empty_count(), 0);
    }

    #[test]
    fn test_incomplete_with_empty_cell() {
        let mut digits = SOLVED;
        digits[8][8] = 0;
        let board = Board::from_digits(digits);
        assert!(!board.is_complete());

        let board = board.set_value(Pos::new(8, 8), 9);
        assert!(board.is_complete());
    }

    #[test]
    fn test_display() {
        let text = Board::from_digits(SOLVED).to_string();
        assert!(text.starts_with("5 3 4 | 6 7 8 | 9 1 2\n"));
        assert_eq!(text.lines().count(), 11);
    }

    #[test]
    fn test_cell_deserialize_rejects_large_digit() {
        let cell: Cell = serde_json::from_str(r#"{"value":9,"is_fixed":true,"is_error":false}"#).unwrap();
        assert_eq!(cell, Cell::clue(9));

        let bad = r#"{"value":12,"is_fixed":true,"is_error":false}"#;
        assert!(serde_json::from_str::<Cell>(bad).is_err());
    }
}

//! The 3x3 board and line detection.

use serde::{Deserialize, Serialize};

/// A player's mark.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Mark {
    X,
    O,
}

impl Mark {
    /// The opposing mark.
    #[must_use]
    pub const fn other(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

impl std::fmt::Display for Mark {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Mark::X => f.write_str("X"),
            Mark::O => f.write_str("O"),
        }
    }
}

/// The eight winning lines: rows, columns, diagonals.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8],
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8],
    [0, 4, 8],
    [2, 4, 6],
];

/// Nine cells in row-major order; `None` is empty.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Board {
    cells: [Option<Mark>; 9],
}

impl Board {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a board from a 9-character string of `X`, `O` and `.`.
    ///
    /// # Panics
    ///
    /// Panics on any other character or length.
    #[must_use]
    pub fn from_str_cells(cells: &str) -> Self {
        assert_eq!(cells.chars().count(), 9, "board needs exactly 9 cells");
        let mut board = Self::new();
        for (i, c) in cells.chars().enumerate() {
            board.cells[i] = match c {
                'X' => Some(Mark::X),
                'O' => Some(Mark::O),
                '.' => None,
                other => panic!("invalid cell character {other:?}"),
            };
        }
        board
    }

    /// Mark at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index >= 9`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<Mark> {
        self.cells[index]
    }

    #[must_use]
    pub fn cells(&self) -> &[Option<Mark>; 9] {
        &self.cells
    }

    /// Copy of this board with `mark` at `index`, or `None` if occupied.
    #[must_use]
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Self> {
        if self.cells[index].is_some() {
            return None;
        }
        let mut next = *self;
        next.cells[index] = Some(mark);
        Some(next)
    }

    /// Indices of empty cells, ascending.
    pub fn available_moves(&self) -> impl Iterator<Item = usize> + '_ {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| i)
    }

    #[must_use]
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    /// The first completed line, if any.
    #[must_use]
    pub fn winning_line(&self) -> Option<[usize; 3]> {
        LINES.iter().copied().find(|&[a, b, c]| {
            self.cells[a].is_some() && self.cells[a] == self.cells[b] && self.cells[a] == self.cells[c]
        })
    }

    /// The mark owning a completed line, if any.
    #[must_use]
    pub fn winner(&self) -> Option<Mark> {
        self.winning_line().and_then(|[a, _, _]| self.cells[a])
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in self.cells.chunks(3) {
            for cell in row {
                match cell {
                    Some(mark) => write!(f, "{mark}")?,
                    None => f.write_str(".")?,
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

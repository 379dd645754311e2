//! Square-grid coordinates with range checking.
//!
//! `Coord<N>` addresses one cell of an `N x N` board. Every engine indexes its
//! board through this type, so an out-of-range row or column is rejected when
//! the coordinate is built rather than when the board is read.
//!
//! ```
//! use rust_parlor::core::Coord;
//!
//! let c: Coord<9> = Coord::new(4, 7);
//! assert_eq!(c.row(), 4);
//! assert_eq!(c.col(), 7);
//!
//! assert!(Coord::<9>::try_new(9, 0).is_err());
//! ```

use serde::{Deserialize, Deserializer, Serialize};

use super::error::CoordError;

/// A (row, col) position on an `N x N` grid. Row 0 is the top row.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Coord<const N: usize> {
    row: u8,
    col: u8,
}

impl<const N: usize> Coord<N> {
    /// Board side length.
    pub const SIZE: usize = N;

    /// Build a coordinate, rejecting out-of-range input.
    pub fn try_new(row: usize, col: usize) -> Result<Self, CoordError> {
        if row >= N || col >= N {
            return Err(CoordError::OutOfRange { row, col, size: N });
        }
        Ok(Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Build a coordinate.
    ///
    /// # Panics
    ///
    /// Panics if `row` or `col` is not below `N`.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Self {
        match Self::try_new(row, col) {
            Ok(coord) => coord,
            Err(err) => panic!("{err}"),
        }
    }

    /// Build a coordinate from a row-major index (`row * N + col`).
    pub fn from_index(index: usize) -> Result<Self, CoordError> {
        Self::try_new(index / N, index % N)
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index of this coordinate.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * N + self.col as usize
    }

    /// Step by a signed offset, returning `None` when the result leaves the board.
    #[must_use]
    pub fn offset(self, d_row: i32, d_col: i32) -> Option<Self> {
        let row = self.row as i32 + d_row;
        let col = self.col as i32 + d_col;
        if row < 0 || col < 0 {
            return None;
        }
        Self::try_new(row as usize, col as usize).ok()
    }

    /// Iterate over every coordinate of the grid in row-major order.
    pub fn all() -> impl Iterator<Item = Self> {
        (0..N * N).map(|i| Self {
            row: (i / N) as u8,
            col: (i % N) as u8,
        })
    }
}

// Decoded coordinates go through `try_new`, so a tampered save cannot index
// past the board.
impl<'de, const N: usize> Deserialize<'de> for Coord<N> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        #[derive(Deserialize)]
        #[serde(rename = "Coord")]
        struct Raw {
            row: u8,
            col: u8,
        }

        let raw = Raw::deserialize(deserializer)?;
        Self::try_new(raw.row.into(), raw.col.into()).map_err(serde::de::Error::custom)
    }
}

impl<const N: usize> std::fmt::Display for Coord<N> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_try_new_bounds() {
        assert!(Coord::<8>::try_new(7, 7).is_ok());
        assert_eq!(
            Coord::<8>::try_new(8, 0),
            Err(CoordError::OutOfRange { row: 8, col: 0, size: 8 })
        );
        assert!(Coord::<3>::try_new(0, 3).is_err());
    }

    #[test]
    #[should_panic(expected = "out of range")]
    fn test_new_panics_out_of_range() {
        let _ = Coord::<9>::new(0, 9);
    }

    #[test]
    fn test_index_round_trip() {
        for coord in Coord::<9>::all() {
            assert_eq!(Coord::<9>::from_index(coord.index()), Ok(coord));
        }
        assert_eq!(Coord::<9>::all().count(), 81);
    }

    #[test]
    fn test_offset() {
        let c = Coord::<8>::new(0, 0);
        assert_eq!(c.offset(1, 2), Some(Coord::new(1, 2)));
        assert_eq!(c.offset(-1, 0), None);
        assert_eq!(Coord::<8>::new(7, 7).offset(0, 1), None);
    }

    #[test]
    fn test_deserialize_checks_range() {
        let c: Coord<9> = serde_json::from_str(r#"{"row":8,"col":2}"#).unwrap();
        assert_eq!(c, Coord::new(8, 2));

        let err = serde_json::from_str::<Coord<9>>(r#"{"row":9,"col":2}"#).unwrap_err();
        assert!(err.to_string().contains("out of range"));
        assert!(serde_json::from_str::<Coord<8>>(r#"{"row":0,"col":200}"#).is_err());
    }
}

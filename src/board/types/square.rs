//! Square types and utilities.
//!
//! Squares are addressed as `(row, column)` the way the board grid is
//! printed: row 0 is rank 8 (Black's back rank) and column 0 is file `a`.

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::error::SquareError;

/// Row index of an algebraic rank character (`'8'` → 0, `'1'` → 7).
fn rank_to_row(rank: char) -> usize {
    8 - ((rank as usize) - ('0' as usize))
}

/// Column index of an algebraic file character (`'a'` → 0).
fn file_to_column(file: char) -> usize {
    file as usize - ('a' as usize)
}

/// A square on the chess board, represented as (row, column).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Square(pub usize, pub usize); // (row, column)

impl Square {
    /// Create a new square with bounds checking
    #[must_use]
    pub fn new(row: usize, column: usize) -> Option<Self> {
        if row < 8 && column < 8 {
            Some(Square(row, column))
        } else {
            None
        }
    }

    /// Whether both coordinates lie on the board
    #[inline]
    #[must_use]
    pub const fn is_on_board(self) -> bool {
        self.0 < 8 && self.1 < 8
    }

    /// Get the row (0-7, where 0 = rank 8)
    #[inline]
    #[must_use]
    pub const fn row(self) -> usize {
        self.0
    }

    /// Get the column (0-7, where 0 = file a)
    #[inline]
    #[must_use]
    pub const fn column(self) -> usize {
        self.1
    }

    /// Get the square's index (0-63, a8=0, b8=1, ..., h1=63)
    #[inline]
    #[must_use]
    pub const fn as_index(self) -> usize {
        self.0 * 8 + self.1
    }

    /// Create a square from an index (0-63)
    #[must_use]
    pub const fn from_index(idx: usize) -> Self {
        Square(idx / 8, idx % 8)
    }

    /// Step by a (row, column) delta, or `None` when that leaves the board.
    #[inline]
    #[must_use]
    pub fn offset(self, d_row: isize, d_column: isize) -> Option<Self> {
        let row = self.0 as isize + d_row;
        let column = self.1 as isize + d_column;
        if (0..8).contains(&row) && (0..8).contains(&column) {
            Some(Square(row as usize, column as usize))
        } else {
            None
        }
    }

    /// All 64 squares, row by row from a8 to h1.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square::from_index)
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", (self.1 as u8 + b'a') as char, 8 - self.0)
    }
}

impl PartialOrd for Square {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Square {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.as_index().cmp(&other.as_index())
    }
}

impl TryFrom<(usize, usize)> for Square {
    type Error = SquareError;

    fn try_from((row, column): (usize, usize)) -> Result<Self, Self::Error> {
        if row >= 8 {
            return Err(SquareError::RowOutOfBounds { row });
        }
        if column >= 8 {
            return Err(SquareError::ColumnOutOfBounds { column });
        }
        Ok(Square(row, column))
    }
}

impl FromStr for Square {
    type Err = SquareError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let chars: Vec<char> = s.chars().collect();
        if chars.len() != 2
            || !('a'..='h').contains(&chars[0])
            || !('1'..='8').contains(&chars[1])
        {
            return Err(SquareError::InvalidNotation {
                notation: s.to_string(),
            });
        }

        Ok(Square(rank_to_row(chars[1]), file_to_column(chars[0])))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_algebraic_to_square() {
        assert_eq!("a8".parse::<Square>().unwrap(), Square(0, 0));
        assert_eq!("h1".parse::<Square>().unwrap(), Square(7, 7));
        assert_eq!("e2".parse::<Square>().unwrap(), Square(6, 4));
        assert_eq!("d6".parse::<Square>().unwrap(), Square(2, 3));
    }

    #[test]
    fn test_square_to_algebraic() {
        assert_eq!(Square(7, 4).to_string(), "e1");
        assert_eq!(Square(0, 4).to_string(), "e8");
        assert_eq!(Square(5, 2).to_string(), "c3");
    }

    #[test]
    fn test_every_square_round_trips_through_algebraic() {
        for sq in Square::all() {
            assert_eq!(sq.to_string().parse::<Square>().unwrap(), sq);
        }
    }

    #[test]
    fn test_invalid_notation() {
        for bad in ["", "e", "i1", "a9", "a0", "e22", "E2"] {
            assert!(
                matches!(bad.parse::<Square>(), Err(SquareError::InvalidNotation { .. })),
                "{bad} should not parse"
            );
        }
    }

    #[test]
    fn test_offset_stays_on_board() {
        assert_eq!(Square(0, 0).offset(-1, 0), None);
        assert_eq!(Square(0, 0).offset(0, -1), None);
        assert_eq!(Square(7, 7).offset(1, 1), None);
        assert_eq!(Square(4, 4).offset(-2, 1), Some(Square(2, 5)));
    }

    #[test]
    fn test_try_from_bounds() {
        assert_eq!(Square::try_from((3, 4)), Ok(Square(3, 4)));
        assert_eq!(
            Square::try_from((8, 0)),
            Err(SquareError::RowOutOfBounds { row: 8 })
        );
        assert_eq!(
            Square::try_from((0, 9)),
            Err(SquareError::ColumnOutOfBounds { column: 9 })
        );
        assert_eq!(Square::new(8, 8), None);
    }

    #[test]
    fn test_index_round_trip() {
        for idx in 0..64 {
            assert_eq!(Square::from_index(idx).as_index(), idx);
        }
    }
}

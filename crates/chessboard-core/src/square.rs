//! Board square representation.

use std::fmt;
use thiserror::Error;

/// Error returned when a row or column falls outside the board.
#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("square ({row}, {col}) is off the board")]
pub struct SquareError {
    pub row: i32,
    pub col: i32,
}

/// A square on the board, addressed by row and column.
///
/// Row 0 is Black's back row and row 7 is White's. Internally the square is
/// stored as `row * 8 + col`, so the value is always in 0-63.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square(u8);

impl Square {
    /// Creates a square from row and column, or `None` if either is past 7.
    #[inline]
    pub const fn new(row: u8, col: u8) -> Option<Self> {
        if row < 8 && col < 8 {
            Some(Square(row * 8 + col))
        } else {
            None
        }
    }

    /// Creates a square from signed coordinates, reporting out-of-range input.
    pub fn try_new(row: i32, col: i32) -> Result<Self, SquareError> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square((row * 8 + col) as u8))
        } else {
            Err(SquareError { row, col })
        }
    }

    /// Creates a square from index (0-63).
    #[inline]
    pub const fn from_index(index: u8) -> Option<Self> {
        if index < 64 {
            Some(Square(index))
        } else {
            None
        }
    }

    /// Iterates over all 64 squares, row 0 first.
    pub fn all() -> impl Iterator<Item = Square> {
        (0..64).map(Square)
    }

    /// Returns the index (0-63).
    #[inline]
    pub const fn index(self) -> u8 {
        self.0
    }

    /// Returns the row (0-7), counted from Black's back row.
    #[inline]
    pub const fn row(self) -> u8 {
        self.0 / 8
    }

    /// Returns the column (0-7), file `a` first.
    #[inline]
    pub const fn col(self) -> u8 {
        self.0 % 8
    }

    /// Returns the square shifted by the given row and column deltas, if it
    /// stays on the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Self> {
        let Some(row) = (self.row() as i8).checked_add(d_row) else {
            return None;
        };
        let Some(col) = (self.col() as i8).checked_add(d_col) else {
            return None;
        };
        if row < 0 || row > 7 || col < 0 || col > 7 {
            return None;
        }
        Some(Square((row * 8 + col) as u8))
    }

    /// Returns `(to.row - self.row, to.col - self.col)`.
    #[inline]
    pub const fn delta(self, to: Square) -> (i8, i8) {
        (
            to.row() as i8 - self.row() as i8,
            to.col() as i8 - self.col() as i8,
        )
    }

    /// Returns true for light squares: those where row + col is even.
    #[inline]
    pub const fn is_light(self) -> bool {
        (self.row() + self.col()) % 2 == 0
    }

    /// Returns the algebraic notation for this square.
    pub fn to_algebraic(self) -> String {
        let file = (b'a' + self.col()) as char;
        let rank = (b'8' - self.row()) as char;
        format!("{}{}", file, rank)
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self.to_algebraic())
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_algebraic())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn square_new() {
        let sq = Square::new(6, 4).unwrap();
        assert_eq!(sq.row(), 6);
        assert_eq!(sq.col(), 4);
        assert_eq!(sq.index(), 52);
        assert_eq!(Square::new(8, 0), None);
        assert_eq!(Square::new(0, 8), None);
    }

    #[test]
    fn square_try_new() {
        assert_eq!(Square::try_new(7, 7), Ok(Square::new(7, 7).unwrap()));
        assert_eq!(
            Square::try_new(-1, 3),
            Err(SquareError { row: -1, col: 3 })
        );
        let err = Square::try_new(2, 9).unwrap_err();
        assert_eq!(err.to_string(), "square (2, 9) is off the board");
    }

    #[test]
    fn algebraic_uses_row_zero_as_rank_eight() {
        assert_eq!(Square::new(0, 0).unwrap().to_algebraic(), "a8");
        assert_eq!(Square::new(6, 4).unwrap().to_algebraic(), "e2");
        assert_eq!(Square::new(7, 7).unwrap().to_algebraic(), "h1");
    }

    #[test]
    fn offset_stays_on_board() {
        let sq = Square::new(0, 0).unwrap();
        assert_eq!(sq.offset(1, 2), Square::new(1, 2));
        assert_eq!(sq.offset(-1, 0), None);
        assert_eq!(sq.offset(0, -1), None);
        assert_eq!(Square::new(7, 7).unwrap().offset(1, 0), None);
    }

    #[test]
    fn offset_saturating_deltas() {
        let corner = Square::new(7, 7).unwrap();
        assert_eq!(corner.offset(i8::MAX, 0), None);
        assert_eq!(corner.offset(0, i8::MAX), None);
        assert_eq!(Square::new(0, 0).unwrap().offset(i8::MIN, i8::MIN), None);
        assert_eq!(corner.offset(-7, -7), Square::new(0, 0));
    }

    #[test]
    fn delta() {
        let from = Square::new(7, 1).unwrap();
        let to = Square::new(5, 2).unwrap();
        assert_eq!(from.delta(to), (-2, 1));
        assert_eq!(to.delta(from), (2, -1));
    }

    #[test]
    fn shading() {
        assert!(Square::new(0, 0).unwrap().is_light());
        assert!(!Square::new(0, 1).unwrap().is_light());
        assert!(Square::new(7, 7).unwrap().is_light());
    }

    #[test]
    fn all_squares() {
        let squares: Vec<_> = Square::all().collect();
        assert_eq!(squares.len(), 64);
        assert_eq!(squares[0], Square::new(0, 0).unwrap());
        assert_eq!(squares[63], Square::new(7, 7).unwrap());
    }

    #[test]
    fn debug_display() {
        let sq = Square::new(4, 4).unwrap();
        assert_eq!(format!("{:?}", sq), "Square(e4)");
        assert_eq!(format!("{}", sq), "e4");
    }

    mod prop {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn offset_by_delta_reaches_target(a in 0u8..64, b in 0u8..64) {
                let from = Square::from_index(a).unwrap();
                let to = Square::from_index(b).unwrap();
                let (dr, dc) = from.delta(to);
                prop_assert_eq!(from.offset(dr, dc), Some(to));
            }

            #[test]
            fn offset_never_panics(a in 0u8..64, dr in any::<i8>(), dc in any::<i8>()) {
                let from = Square::from_index(a).unwrap();
                let expected = Square::try_new(
                    from.row() as i32 + dr as i32,
                    from.col() as i32 + dc as i32,
                ).ok();
                prop_assert_eq!(from.offset(dr, dc), expected);
            }

            #[test]
            fn try_new_matches_bounds(row in -3i32..11, col in -3i32..11) {
                let on_board = (0..8).contains(&row) && (0..8).contains(&col);
                prop_assert_eq!(Square::try_new(row, col).is_ok(), on_board);
            }
        }
    }
}

//! Board squares addressed by (row, column).

use std::fmt;

use crate::error::RuleError;

/// A square on the board.
///
/// Row 0 is Black's back rank (rank 8) and row 7 is White's back rank (rank 1);
/// column 0 is the a-file. Both coordinates are always in `0..8`.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    row: u8,
    col: u8,
}

impl Square {
    /// Construct a square, rejecting coordinates outside `0..8`.
    pub fn new(row: i32, col: i32) -> Result<Square, RuleError> {
        if (0..8).contains(&row) && (0..8).contains(&col) {
            Ok(Square::raw(row as u8, col as u8))
        } else {
            Err(RuleError::OutOfBounds { row, col })
        }
    }

    /// Construct a square from in-range coordinates.
    ///
    /// # Panics
    ///
    /// Debug-asserts that both coordinates are below 8.
    #[inline]
    const fn raw(row: u8, col: u8) -> Square {
        debug_assert!(row < 8 && col < 8);
        Square { row, col }
    }

    /// Create a square from a row-major index (`row * 8 + col`), returning `None` if out of range.
    #[inline]
    pub const fn from_index(index: u8) -> Option<Square> {
        if index < 64 {
            Some(Square::raw(index / 8, index % 8))
        } else {
            None
        }
    }

    /// Parse an algebraic notation string (e.g. "e4") into a square.
    pub fn from_algebraic(s: &str) -> Option<Square> {
        let bytes = s.as_bytes();
        if bytes.len() != 2 {
            return None;
        }

        let file_byte = bytes[0];
        let rank_byte = bytes[1];

        if !(b'a'..=b'h').contains(&file_byte) || !(b'1'..=b'8').contains(&rank_byte) {
            return None;
        }

        Some(Square::raw(b'8' - rank_byte, file_byte - b'a'))
    }

    #[inline]
    pub const fn row(self) -> u8 {
        self.row
    }

    #[inline]
    pub const fn col(self) -> u8 {
        self.col
    }

    /// Step by `(d_row, d_col)`, returning `None` when the result leaves the board.
    #[inline]
    pub const fn offset(self, d_row: i8, d_col: i8) -> Option<Square> {
        let row = self.row as i8 + d_row;
        let col = self.col as i8 + d_col;
        if row >= 0 && row < 8 && col >= 0 && col < 8 {
            Some(Square::raw(row as u8, col as u8))
        } else {
            None
        }
    }

    /// Iterate over all 64 squares in row-major order (a8, b8, ..., h1).
    pub fn all() -> impl Iterator<Item = Square> {
        (0u8..64).map(|i| Square::raw(i / 8, i % 8))
    }

    // Named square constants
    pub const A8: Square = Square::raw(0, 0);
    pub const B8: Square = Square::raw(0, 1);
    pub const C8: Square = Square::raw(0, 2);
    pub const D8: Square = Square::raw(0, 3);
    pub const E8: Square = Square::raw(0, 4);
    pub const F8: Square = Square::raw(0, 5);
    pub const G8: Square = Square::raw(0, 6);
    pub const H8: Square = Square::raw(0, 7);
    pub const A7: Square = Square::raw(1, 0);
    pub const B7: Square = Square::raw(1, 1);
    pub const C7: Square = Square::raw(1, 2);
    pub const D7: Square = Square::raw(1, 3);
    pub const E7: Square = Square::raw(1, 4);
    pub const F7: Square = Square::raw(1, 5);
    pub const G7: Square = Square::raw(1, 6);
    pub const H7: Square = Square::raw(1, 7);
    pub const A6: Square = Square::raw(2, 0);
    pub const B6: Square = Square::raw(2, 1);
    pub const C6: Square = Square::raw(2, 2);
    pub const D6: Square = Square::raw(2, 3);
    pub const E6: Square = Square::raw(2, 4);
    pub const F6: Square = Square::raw(2, 5);
    pub const G6: Square = Square::raw(2, 6);
    pub const H6: Square = Square::raw(2, 7);
    pub const A5: Square = Square::raw(3, 0);
    pub const B5: Square = Square::raw(3, 1);
    pub const C5: Square = Square::raw(3, 2);
    pub const D5: Square = Square::raw(3, 3);
    pub const E5: Square = Square::raw(3, 4);
    pub const F5: Square = Square::raw(3, 5);
    pub const G5: Square = Square::raw(3, 6);
    pub const H5: Square = Square::raw(3, 7);
    pub const A4: Square = Square::raw(4, 0);
    pub const B4: Square = Square::raw(4, 1);
    pub const C4: Square = Square::raw(4, 2);
    pub const D4: Square = Square::raw(4, 3);
    pub const E4: Square = Square::raw(4, 4);
    pub const F4: Square = Square::raw(4, 5);
    pub const G4: Square = Square::raw(4, 6);
    pub const H4: Square = Square::raw(4, 7);
    pub const A3: Square = Square::raw(5, 0);
    pub const B3: Square = Square::raw(5, 1);
    pub const C3: Square = Square::raw(5, 2);
    pub const D3: Square = Square::raw(5, 3);
    pub const E3: Square = Square::raw(5, 4);
    pub const F3: Square = Square::raw(5, 5);
    pub const G3: Square = Square::raw(5, 6);
    pub const H3: Square = Square::raw(5, 7);
    pub const A2: Square = Square::raw(6, 0);
    pub const B2: Square = Square::raw(6, 1);
    pub const C2: Square = Square::raw(6, 2);
    pub const D2: Square = Square::raw(6, 3);
    pub const E2: Square = Square::raw(6, 4);
    pub const F2: Square = Square::raw(6, 5);
    pub const G2: Square = Square::raw(6, 6);
    pub const H2: Square = Square::raw(6, 7);
    pub const A1: Square = Square::raw(7, 0);
    pub const B1: Square = Square::raw(7, 1);
    pub const C1: Square = Square::raw(7, 2);
    pub const D1: Square = Square::raw(7, 3);
    pub const E1: Square = Square::raw(7, 4);
    pub const F1: Square = Square::raw(7, 5);
    pub const G1: Square = Square::raw(7, 6);
    pub const H1: Square = Square::raw(7, 7);
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = (b'8' - self.row) as char;
        write!(f, "{file}{rank}")
    }
}

impl fmt::Debug for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Square({})", self)
    }
}

#[cfg(test)]
mod tests {
    use super::Square;
    use crate::error::RuleError;

    #[test]
    fn new_and_accessors() {
        let sq = Square::new(6, 4).unwrap();
        assert_eq!(sq, Square::E2);
        assert_eq!(sq.row(), 6);
        assert_eq!(sq.col(), 4);
        assert_eq!(Square::from_index(52), Some(sq));
    }

    #[test]
    fn new_out_of_bounds() {
        assert_eq!(Square::new(8, 0), Err(RuleError::OutOfBounds { row: 8, col: 0 }));
        assert_eq!(Square::new(0, -1), Err(RuleError::OutOfBounds { row: 0, col: -1 }));
        assert!(Square::new(7, 7).is_ok());
    }

    #[test]
    fn from_index_roundtrip() {
        for sq in Square::all() {
            assert_eq!(Square::from_index(sq.row() * 8 + sq.col()), Some(sq));
        }
        assert!(Square::from_index(64).is_none());
    }

    #[test]
    fn algebraic_notation() {
        assert_eq!(Square::from_algebraic("a8"), Some(Square::A8));
        assert_eq!(Square::from_algebraic("e4"), Some(Square::E4));
        assert_eq!(Square::from_algebraic("h1"), Some(Square::H1));
        assert_eq!(Square::E4.row(), 4);
        assert_eq!(format!("{}", Square::E4), "e4");
        assert_eq!(format!("{}", Square::A8), "a8");
        assert_eq!(format!("{}", Square::H1), "h1");
    }

    #[test]
    fn algebraic_invalid() {
        assert!(Square::from_algebraic("i1").is_none());
        assert!(Square::from_algebraic("a9").is_none());
        assert!(Square::from_algebraic("").is_none());
        assert!(Square::from_algebraic("a1b").is_none());
    }

    #[test]
    fn offset_stays_on_board() {
        assert_eq!(Square::E2.offset(-2, 0), Some(Square::E4));
        assert_eq!(Square::A8.offset(-1, 0), None);
        assert_eq!(Square::H1.offset(0, 1), None);
        assert_eq!(Square::B1.offset(-2, 1), Some(Square::C3));
    }

    #[test]
    fn all_iterator_count() {
        assert_eq!(Square::all().count(), 64);
        assert_eq!(Square::all().last(), Some(Square::H1));
    }

    #[test]
    fn debug_shows_algebraic() {
        assert_eq!(format!("{:?}", Square::E4), "Square(e4)");
    }
}

//! Piece-placement text (the first FEN field) for [`Board`].

use std::fmt;
use std::str::FromStr;

use crate::board::{Board, Cell};
use crate::error::PlacementError;
use crate::piece::Piece;
use crate::square::Square;

/// Placement text of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = PlacementError;

    fn from_str(placement: &str) -> Result<Board, PlacementError> {
        let rows: Vec<&str> = placement.trim().split('/').collect();
        if rows.len() != 8 {
            return Err(PlacementError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();

        // Placement rows run from rank 8 to rank 1, which is row 0 to row 7.
        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(PlacementError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                } else {
                    let piece = Piece::from_char_code(c)
                        .ok_or(PlacementError::InvalidPieceChar { character: c })?;

                    if col >= 8 {
                        return Err(PlacementError::BadRowLength {
                            row,
                            length: col + 1,
                        });
                    }

                    let sq = Square::from_index((row * 8 + col) as u8)
                        .ok_or(PlacementError::BadRowLength { row, length: col + 1 })?;
                    board.set(sq, Cell::Occupied(piece));
                    col += 1;
                }
            }

            if col != 8 {
                return Err(PlacementError::BadRowLength { row, length: col });
            }
        }

        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_idx, row) in self.rows().iter().enumerate() {
            let mut empty_count = 0u8;
            for cell in row {
                match cell.piece() {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{}", piece.char_code())?;
                    }
                    None => empty_count += 1,
                }
            }
            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if row_idx < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}

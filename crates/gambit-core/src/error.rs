//! Error types for rule enforcement, placement parsing, and board validation.

use crate::chess_move::Move;
use crate::color::Color;

/// A rejected request to the rule engine. The engine state is unchanged after any of these.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuleError {
    /// Square indices outside `0..8`.
    #[error("square ({row}, {col}) is off the board")]
    OutOfBounds {
        /// Requested row.
        row: i32,
        /// Requested column.
        col: i32,
    },
    /// The moving piece belongs to the side that is not on move.
    #[error("it is not {color}'s turn")]
    WrongTurn {
        /// Color of the piece that was asked to move.
        color: Color,
    },
    /// The destination is not a legal destination for the piece (or the origin is empty).
    #[error("illegal move {mv}")]
    IllegalMove {
        /// The rejected move.
        mv: Move,
    },
    /// A move was submitted after checkmate.
    #[error("the game is already over")]
    GameAlreadyOver,
}

/// Errors that occur when parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PlacementError {
    /// The placement does not have exactly 8 `/`-separated rows.
    #[error("expected 8 rows in piece placement, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 cells.
    #[error("row {row} describes {length} cells, expected 8")]
    BadRowLength {
        /// Zero-based row index.
        row: usize,
        /// Number of cells described.
        length: usize,
    },
    /// An unrecognized character appeared in the placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side does not have exactly one king.
    #[error("expected 1 king for {color}, found {count}")]
    InvalidKingCount {
        /// Which side has the wrong king count.
        color: Color,
        /// Number of kings found.
        count: usize,
    },
    /// Pawns occupy row 0 or row 7.
    #[error("pawns found on back rank")]
    PawnsOnBackRank,
    /// The side not to move is in check, so its king could be captured.
    #[error("{color} is in check but it is not their move")]
    WaitingSideInCheck {
        /// The side in check.
        color: Color,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, PlacementError, RuleError};
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn rule_error_display() {
        let err = RuleError::OutOfBounds { row: 8, col: -1 };
        assert_eq!(format!("{err}"), "square (8, -1) is off the board");

        let err = RuleError::WrongTurn { color: Color::Black };
        assert_eq!(format!("{err}"), "it is not black's turn");

        let err = RuleError::IllegalMove {
            mv: Move::new(Square::E2, Square::E5),
        };
        assert_eq!(format!("{err}"), "illegal move e2e5");
    }

    #[test]
    fn placement_error_display() {
        let err = PlacementError::WrongRowCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 8 rows in piece placement, found 4");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::InvalidKingCount {
            color: Color::White,
            count: 0,
        };
        assert_eq!(format!("{err}"), "expected 1 king for white, found 0");
        assert_eq!(format!("{}", BoardError::PawnsOnBackRank), "pawns found on back rank");
    }
}

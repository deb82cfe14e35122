//! The 8×8 board: cell storage, copy, and access.

use std::fmt;

use crate::chess_move::Move;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The contents of one square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied(Piece),
}

impl Cell {
    /// Return the piece in this cell, if any.
    #[inline]
    pub const fn piece(self) -> Option<Piece> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(piece) => Some(piece),
        }
    }

    /// Return `true` if the cell holds a piece of `color`.
    #[inline]
    pub fn holds(self, color: Color) -> bool {
        matches!(self, Cell::Occupied(piece) if piece.color() == color)
    }
}

/// Piece placement on an 8×8 grid, row-major, row 0 = Black's back rank.
///
/// `Board` is `Copy`: every copy is an independent grid of 64 cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    cells: [[Cell; 8]; 8],
}

const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

impl Board {
    /// Return a board with no pieces.
    pub const fn empty() -> Board {
        Board {
            cells: [[Cell::Empty; 8]; 8],
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_row() as usize;
            let pawns = color.pawn_row() as usize;
            for (col, kind) in BACK_ROW.into_iter().enumerate() {
                board.cells[back][col] = Cell::Occupied(Piece::new(kind, color));
                board.cells[pawns][col] = Cell::Occupied(Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Return the contents of `sq`.
    #[inline]
    pub fn get(&self, sq: Square) -> Cell {
        self.cells[sq.row() as usize][sq.col() as usize]
    }

    /// Overwrite the contents of `sq`.
    #[inline]
    pub fn set(&mut self, sq: Square, cell: Cell) {
        self.cells[sq.row() as usize][sq.col() as usize] = cell;
    }

    /// Move whatever stands on `mv.from()` to `mv.to()`, leaving the origin empty.
    ///
    /// Returns the previous contents of the destination. No legality checks.
    #[inline]
    pub fn move_piece(&mut self, mv: Move) -> Cell {
        let moving = self.get(mv.from());
        let captured = self.get(mv.to());
        self.set(mv.to(), moving);
        self.set(mv.from(), Cell::Empty);
        captured
    }

    /// Return the piece on `sq`, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.get(sq).piece()
    }

    /// Borrow the grid row by row, row 0 first.
    #[inline]
    pub fn rows(&self) -> &[[Cell; 8]; 8] {
        &self.cells
    }

    /// Iterate over the squares and pieces of `color`, in row-major order.
    pub fn pieces(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.get(sq) {
            Cell::Occupied(piece) if piece.color() == color => Some((sq, piece)),
            _ => None,
        })
    }

    /// Return the square of `color`'s king, or `None` if it has none.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::new(PieceKind::King, color);
        Square::all().find(|&sq| self.get(sq) == Cell::Occupied(king))
    }

    /// Validate the structural integrity of the board.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self
                .pieces(color)
                .filter(|(_, piece)| piece.kind() == PieceKind::King)
                .count();
            if count != 1 {
                return Err(BoardError::InvalidKingCount { color, count });
            }
        }

        let pawn_on_back_row = [0usize, 7].into_iter().any(|row| {
            self.cells[row]
                .iter()
                .any(|cell| matches!(cell.piece(), Some(p) if p.kind() == PieceKind::Pawn))
        });
        if pawn_on_back_row {
            return Err(BoardError::PawnsOnBackRank);
        }

        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

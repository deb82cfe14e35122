//! Pseudo-legal destination generation, one generator per piece kind.
//!
//! Generators follow piece geometry only; they do not ask whether the move
//! would leave the mover's own king attacked. That filter lives in
//! [`legality`](crate::legality).

mod king;
mod knights;
mod pawns;
mod sliders;

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::{BISHOP_DIRECTIONS, QUEEN_DIRECTIONS, ROOK_DIRECTIONS, gen_slider};

/// Stack-allocated buffer of destination squares. Capacity 32 covers a queen's maximum of 27.
#[derive(Clone)]
pub struct SquareList {
    squares: [Square; 32],
    len: u8,
}

impl SquareList {
    /// Create an empty list.
    pub fn new() -> SquareList {
        SquareList {
            squares: [Square::A8; 32],
            len: 0,
        }
    }

    /// Push a square onto the list.
    #[inline]
    pub fn push(&mut self, sq: Square) {
        debug_assert!((self.len as usize) < 32);
        self.squares[self.len as usize] = sq;
        self.len += 1;
    }

    /// Keep only the squares for which `keep` returns `true`, preserving order.
    pub fn retain(&mut self, mut keep: impl FnMut(Square) -> bool) {
        let mut write = 0usize;
        for read in 0..self.len as usize {
            let sq = self.squares[read];
            if keep(sq) {
                self.squares[write] = sq;
                write += 1;
            }
        }
        self.len = write as u8;
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    #[inline]
    pub fn contains(&self, sq: Square) -> bool {
        self.as_slice().contains(&sq)
    }

    #[inline]
    pub fn as_slice(&self) -> &[Square] {
        &self.squares[..self.len as usize]
    }
}

impl Default for SquareList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for SquareList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

impl std::ops::Index<usize> for SquareList {
    type Output = Square;
    #[inline]
    fn index(&self, index: usize) -> &Square {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a SquareList {
    type Item = &'a Square;
    type IntoIter = std::slice::Iter<'a, Square>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

/// Generate the pseudo-legal destinations of `piece` standing on `from`.
pub fn piece_destinations(board: &Board, piece: Piece, from: Square) -> SquareList {
    let mut list = SquareList::new();
    let color: Color = piece.color();
    match piece.kind() {
        PieceKind::Pawn => gen_pawn(board, color, from, &mut list),
        PieceKind::Knight => gen_knight(board, color, from, &mut list),
        PieceKind::Bishop => gen_slider(board, color, from, &BISHOP_DIRECTIONS, &mut list),
        PieceKind::Rook => gen_slider(board, color, from, &ROOK_DIRECTIONS, &mut list),
        PieceKind::Queen => gen_slider(board, color, from, &QUEEN_DIRECTIONS, &mut list),
        PieceKind::King => gen_king(board, color, from, &mut list),
    }
    list
}

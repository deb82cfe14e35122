//! Attack detection: is a side's king attacked by any opposing piece?

use crate::board::Board;
use crate::color::Color;
use crate::movegen::piece_destinations;

/// Return `true` if `color`'s king is attacked on `board`.
///
/// Every opposing piece's pseudo-legal destinations are generated and tested for
/// the king square; the scan stops at the first hit. Pawn pushes never reach an
/// occupied square, so only pawn captures can register here.
///
/// # Panics
///
/// Panics if `color` has no king. Boards reach the engine validated, so a missing
/// king means the board was corrupted outside the engine's own mutation path.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    let king_sq = board
        .king_square(color)
        .expect("board must have a king for each side");
    board
        .pieces(color.flip())
        .any(|(sq, piece)| piece_destinations(board, piece, sq).contains(king_sq))
}

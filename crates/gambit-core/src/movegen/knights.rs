//! Knight destination generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::SquareList;

/// The eight knight jumps as `(d_row, d_col)`.
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// Generate knight destinations: every on-board jump not landing on a friendly piece.
pub(super) fn gen_knight(board: &Board, color: Color, from: Square, list: &mut SquareList) {
    for (d_row, d_col) in KNIGHT_OFFSETS {
        if let Some(dst) = from.offset(d_row, d_col)
            && !board.get(dst).holds(color)
        {
            list.push(dst);
        }
    }
}

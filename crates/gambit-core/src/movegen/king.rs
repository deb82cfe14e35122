//! King destination generation.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

use super::SquareList;

/// The eight adjacent steps as `(d_row, d_col)`.
const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Generate king steps onto empty or enemy-occupied neighbours.
///
/// Whether the destination is attacked is not considered here.
pub(super) fn gen_king(board: &Board, color: Color, from: Square, list: &mut SquareList) {
    for (d_row, d_col) in KING_OFFSETS {
        if let Some(dst) = from.offset(d_row, d_col)
            && !board.get(dst).holds(color)
        {
            list.push(dst);
        }
    }
}

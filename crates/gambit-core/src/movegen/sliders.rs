//! Sliding piece (bishop, rook, queen) destination generation.

use crate::board::{Board, Cell};
use crate::color::Color;
use crate::square::Square;

use super::SquareList;

/// Orthogonal ray directions as `(d_row, d_col)`.
pub(super) const ROOK_DIRECTIONS: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Diagonal ray directions as `(d_row, d_col)`.
pub(super) const BISHOP_DIRECTIONS: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// All eight ray directions.
pub(super) const QUEEN_DIRECTIONS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Walk each ray from `from` until the board edge or the first occupied cell.
///
/// An enemy piece ends the ray and is included (capture); a friendly piece ends it
/// and is excluded.
pub(super) fn gen_slider(
    board: &Board,
    color: Color,
    from: Square,
    directions: &[(i8, i8)],
    list: &mut SquareList,
) {
    for &(d_row, d_col) in directions {
        let mut cursor = from;
        while let Some(next) = cursor.offset(d_row, d_col) {
            match board.get(next) {
                Cell::Empty => list.push(next),
                Cell::Occupied(piece) => {
                    if piece.color() != color {
                        list.push(next);
                    }
                    break;
                }
            }
            cursor = next;
        }
    }
}

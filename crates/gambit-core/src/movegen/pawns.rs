//! Pawn destination generation.

use crate::board::{Board, Cell};
use crate::color::Color;
use crate::square::Square;

use super::SquareList;

/// Generate pawn pushes and diagonal captures.
///
/// Pushes only onto empty cells (the double step also needs the intermediate
/// cell empty and the pawn on its starting row); captures only onto enemy pieces.
pub(super) fn gen_pawn(board: &Board, color: Color, from: Square, list: &mut SquareList) {
    // A pawn never stands on row 0 or 7 on a correctly tracked board.
    if from.row() == 0 || from.row() == 7 {
        return;
    }

    let forward = color.forward();

    // --- Pushes ---
    if let Some(one) = from.offset(forward, 0)
        && board.get(one) == Cell::Empty
    {
        list.push(one);

        if from.row() == color.pawn_row()
            && let Some(two) = one.offset(forward, 0)
            && board.get(two) == Cell::Empty
        {
            list.push(two);
        }
    }

    // --- Captures ---
    for d_col in [-1, 1] {
        if let Some(dst) = from.offset(forward, d_col)
            && board.get(dst).holds(color.flip())
        {
            list.push(dst);
        }
    }
}

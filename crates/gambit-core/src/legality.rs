//! Legal move filtering and checkmate detection by in-place simulation.
//!
//! A candidate move is played directly on the board, the mover's king is tested,
//! and the two touched cells are put back. Restoration is owned by [`TrialMove`]'s
//! `Drop`, so it happens on every exit path whatever the test returned.

use crate::board::{Board, Cell};
use crate::check::is_in_check;
use crate::chess_move::Move;
use crate::color::Color;
use crate::movegen::{SquareList, piece_destinations};
use crate::square::Square;

/// A move temporarily played on a board; dropping it restores both cells.
struct TrialMove<'a> {
    board: &'a mut Board,
    mv: Move,
    origin: Cell,
    target: Cell,
}

impl<'a> TrialMove<'a> {
    fn play(board: &'a mut Board, mv: Move) -> TrialMove<'a> {
        let origin = board.get(mv.from());
        let target = board.move_piece(mv);
        TrialMove {
            board,
            mv,
            origin,
            target,
        }
    }

    fn board(&self) -> &Board {
        self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.set(self.mv.from(), self.origin);
        self.board.set(self.mv.to(), self.target);
    }
}

/// Return `true` if playing `mv` leaves `mover`'s king unattacked.
///
/// `board` is identical to its prior state when this returns.
pub(crate) fn leaves_king_safe(board: &mut Board, mv: Move, mover: Color) -> bool {
    let trial = TrialMove::play(board, mv);
    !is_in_check(trial.board(), mover)
}

/// Filter the pseudo-legal destinations from `from` down to the legal ones, in place.
fn filter_legal(board: &mut Board, from: Square) -> SquareList {
    let Some(piece) = board.piece_on(from) else {
        return SquareList::new();
    };
    let mut list = piece_destinations(board, piece, from);
    list.retain(|to| leaves_king_safe(board, Move::new(from, to), piece.color()));
    list
}

/// Return `true` if any piece of `color` has at least one legal move.
fn any_legal_move(board: &mut Board, color: Color) -> bool {
    for from in Square::all() {
        let Some(piece) = board.piece_on(from) else {
            continue;
        };
        if piece.color() != color {
            continue;
        }
        let candidates = piece_destinations(board, piece, from);
        for &to in &candidates {
            if leaves_king_safe(board, Move::new(from, to), color) {
                return true;
            }
        }
    }
    false
}

/// Return the legal destinations of the piece on `from`; empty for an empty square.
pub fn legal_destinations(board: &Board, from: Square) -> SquareList {
    let mut scratch = *board;
    filter_legal(&mut scratch, from)
}

/// Return every legal move of `color`, in row-major order of origin square.
pub fn legal_moves(board: &Board, color: Color) -> Vec<Move> {
    let mut scratch = *board;
    let mut moves = Vec::new();
    for from in Square::all() {
        if !scratch.get(from).holds(color) {
            continue;
        }
        for &to in &filter_legal(&mut scratch, from) {
            moves.push(Move::new(from, to));
        }
    }
    moves
}

/// Return `true` if `color` is checkmated: in check, with no move escaping it.
///
/// A pure function of `board` and `color`; whose turn it is plays no part.
pub fn is_checkmate(board: &Board, color: Color) -> bool {
    if !is_in_check(board, color) {
        return false;
    }
    let mut scratch = *board;
    !any_legal_move(&mut scratch, color)
}

//! The rule engine: board ownership, turn order, and move application.

use std::fmt;

use tracing::{debug, info};

use crate::board::{Board, Cell};
use crate::check::is_in_check;
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::{BoardError, RuleError};
use crate::legality::{is_checkmate, legal_destinations};
use crate::movegen::SquareList;
use crate::piece::Piece;
use crate::square::Square;

/// Where the game stands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Phase {
    WhiteToMove,
    BlackToMove,
    /// Terminal: the side to move was checkmated.
    GameOver {
        /// The side that delivered mate.
        winner: Color,
    },
}

/// Check status of the side to move after a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveStatus {
    Normal,
    Check,
    Checkmate,
}

impl MoveStatus {
    /// Lowercase name, as used in protocol responses.
    pub const fn name(self) -> &'static str {
        match self {
            MoveStatus::Normal => "normal",
            MoveStatus::Check => "check",
            MoveStatus::Checkmate => "checkmate",
        }
    }
}

impl fmt::Display for MoveStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Result of a successfully applied move.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// The board after the move.
    pub board: Board,
    /// The side to move next.
    pub side_to_move: Color,
    /// Whether the side to move is in check or checkmated.
    pub status: MoveStatus,
    /// The piece removed from the destination square, if any.
    pub captured: Option<Piece>,
}

/// Read-only view of the game for the request-handling layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoardSnapshot {
    /// Row-major grid, row 0 = Black's back rank.
    pub cells: [[Option<Piece>; 8]; 8],
    pub white_to_move: bool,
    pub phase: Phase,
}

/// A single game: owns its board and enforces turn order and legality.
///
/// The board is only ever changed by [`RuleEngine::apply_move`], and only after the
/// move has passed the legality filter.
#[derive(Debug, Clone)]
pub struct RuleEngine {
    board: Board,
    side_to_move: Color,
    /// Set once the side to move is checkmated.
    winner: Option<Color>,
}

impl RuleEngine {
    /// Start a game from the standard initial position, White to move.
    pub fn new() -> RuleEngine {
        RuleEngine {
            board: Board::starting_position(),
            side_to_move: Color::White,
            winner: None,
        }
    }

    /// Start a game from a custom position.
    ///
    /// The board must validate, and the side not on move must not be in check. A
    /// position where the side to move is already checkmated starts in
    /// [`Phase::GameOver`].
    pub fn from_position(board: Board, side_to_move: Color) -> Result<RuleEngine, BoardError> {
        board.validate()?;
        let waiting = side_to_move.flip();
        if is_in_check(&board, waiting) {
            return Err(BoardError::WaitingSideInCheck { color: waiting });
        }
        let winner = is_checkmate(&board, side_to_move).then_some(waiting);
        Ok(RuleEngine {
            board,
            side_to_move,
            winner,
        })
    }

    #[inline]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[inline]
    pub fn white_to_move(&self) -> bool {
        self.side_to_move == Color::White
    }

    pub fn phase(&self) -> Phase {
        match (self.winner, self.side_to_move) {
            (Some(winner), _) => Phase::GameOver { winner },
            (None, Color::White) => Phase::WhiteToMove,
            (None, Color::Black) => Phase::BlackToMove,
        }
    }

    /// Check status of the side to move.
    pub fn status(&self) -> MoveStatus {
        if self.winner.is_some() {
            MoveStatus::Checkmate
        } else if is_in_check(&self.board, self.side_to_move) {
            MoveStatus::Check
        } else {
            MoveStatus::Normal
        }
    }

    /// Copy out the grid, the turn, and the phase.
    pub fn snapshot(&self) -> BoardSnapshot {
        let mut cells = [[None; 8]; 8];
        for (row, cells_row) in self.board.rows().iter().enumerate() {
            for (col, cell) in cells_row.iter().enumerate() {
                cells[row][col] = cell.piece();
            }
        }
        BoardSnapshot {
            cells,
            white_to_move: self.white_to_move(),
            phase: self.phase(),
        }
    }

    /// Legal destinations of the piece on `from`, whichever side it belongs to.
    ///
    /// Empty for an empty square. Never changes the game.
    pub fn legal_destinations(&self, from: Square) -> SquareList {
        legal_destinations(&self.board, from)
    }

    /// Return `true` if `color`'s king is attacked.
    pub fn is_in_check(&self, color: Color) -> bool {
        is_in_check(&self.board, color)
    }

    /// Return `true` if `color` is checkmated on the current board.
    pub fn is_checkmate(&self, color: Color) -> bool {
        is_checkmate(&self.board, color)
    }

    /// Validate and apply `mv`, then hand the turn to the other side.
    ///
    /// On error the board and turn are unchanged.
    pub fn apply_move(&mut self, mv: Move) -> Result<MoveOutcome, RuleError> {
        if self.winner.is_some() {
            return Err(RuleError::GameAlreadyOver);
        }

        let piece = match self.board.get(mv.from()) {
            Cell::Occupied(piece) => piece,
            Cell::Empty => return Err(RuleError::IllegalMove { mv }),
        };
        if piece.color() != self.side_to_move {
            return Err(RuleError::WrongTurn {
                color: piece.color(),
            });
        }
        if !legal_destinations(&self.board, mv.from()).contains(mv.to()) {
            debug!(%mv, "rejected move outside the legal set");
            return Err(RuleError::IllegalMove { mv });
        }

        let captured = self.board.move_piece(mv).piece();
        let mover = self.side_to_move;
        self.side_to_move = mover.flip();
        debug!(%mv, %mover, captured = ?captured, "move applied");

        let status = if !is_in_check(&self.board, self.side_to_move) {
            MoveStatus::Normal
        } else if is_checkmate(&self.board, self.side_to_move) {
            self.winner = Some(mover);
            info!(winner = %mover, "checkmate");
            MoveStatus::Checkmate
        } else {
            MoveStatus::Check
        };

        Ok(MoveOutcome {
            board: self.board,
            side_to_move: self.side_to_move,
            status,
            captured,
        })
    }
}

impl Default for RuleEngine {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::piece::Piece;

    fn mv(from: Square, to: Square) -> Move {
        Move::new(from, to)
    }

    #[test]
    fn new_game_state() {
        let engine = RuleEngine::new();
        assert!(engine.white_to_move());
        assert_eq!(engine.phase(), Phase::WhiteToMove);
        assert_eq!(engine.status(), MoveStatus::Normal);
        assert_eq!(*engine.board(), Board::starting_position());
    }

    #[test]
    fn turn_flips_after_each_move() {
        let mut engine = RuleEngine::new();
        let outcome = engine.apply_move(mv(Square::E2, Square::E4)).unwrap();
        assert_eq!(outcome.side_to_move, Color::Black);
        assert_eq!(engine.phase(), Phase::BlackToMove);

        let outcome = engine.apply_move(mv(Square::E7, Square::E5)).unwrap();
        assert_eq!(outcome.side_to_move, Color::White);
        assert!(engine.white_to_move());
    }

    #[test]
    fn empty_origin_is_illegal() {
        let mut engine = RuleEngine::new();
        let err = engine.apply_move(mv(Square::E4, Square::E5)).unwrap_err();
        assert_eq!(err, RuleError::IllegalMove { mv: mv(Square::E4, Square::E5) });
        assert!(engine.white_to_move());
    }

    #[test]
    fn illegal_geometry_is_rejected() {
        let mut engine = RuleEngine::new();
        let before = *engine.board();
        let err = engine.apply_move(mv(Square::E2, Square::E5)).unwrap_err();
        assert!(matches!(err, RuleError::IllegalMove { .. }));
        assert_eq!(*engine.board(), before);
        assert!(engine.white_to_move());
    }

    #[test]
    fn capture_is_reported() {
        let mut engine = RuleEngine::new();
        engine.apply_move(mv(Square::E2, Square::E4)).unwrap();
        engine.apply_move(mv(Square::D7, Square::D5)).unwrap();
        let outcome = engine.apply_move(mv(Square::E4, Square::D5)).unwrap();
        assert_eq!(outcome.captured, Some(Piece::BLACK_PAWN));
        assert_eq!(outcome.board.piece_on(Square::D5), Some(Piece::WHITE_PAWN));
        assert_eq!(outcome.board.get(Square::E4), Cell::Empty);
    }

    #[test]
    fn check_is_reported_for_side_to_move() {
        // 1. e4 f6 2. Qh5+
        let mut engine = RuleEngine::new();
        engine.apply_move(mv(Square::E2, Square::E4)).unwrap();
        engine.apply_move(mv(Square::F7, Square::F6)).unwrap();
        let outcome = engine.apply_move(mv(Square::D1, Square::H5)).unwrap();
        assert_eq!(outcome.status, MoveStatus::Check);
        assert_eq!(engine.status(), MoveStatus::Check);
        assert!(engine.is_in_check(Color::Black));
        assert_eq!(engine.phase(), Phase::BlackToMove);
    }

    #[test]
    fn from_position_validates() {
        let no_king: Board = "8/8/8/8/8/8/8/4K3".parse().unwrap();
        assert!(matches!(
            RuleEngine::from_position(no_king, Color::White),
            Err(BoardError::InvalidKingCount { color: Color::Black, .. })
        ));

        // Black is in check but it is White's move.
        let waiting_in_check: Board = "3k4/8/8/8/8/8/8/3QK3".parse().unwrap();
        assert_eq!(
            RuleEngine::from_position(waiting_in_check, Color::White).unwrap_err(),
            BoardError::WaitingSideInCheck { color: Color::Black }
        );
        let engine = RuleEngine::from_position(waiting_in_check, Color::Black).unwrap();
        assert_eq!(engine.status(), MoveStatus::Check);
    }

    #[test]
    fn from_position_detects_existing_mate() {
        let board: Board = "rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR".parse().unwrap();
        let engine = RuleEngine::from_position(board, Color::White).unwrap();
        assert_eq!(engine.phase(), Phase::GameOver { winner: Color::Black });
        assert_eq!(engine.status(), MoveStatus::Checkmate);
    }

    #[test]
    fn snapshot_mirrors_board() {
        let engine = RuleEngine::new();
        let snapshot = engine.snapshot();
        assert!(snapshot.white_to_move);
        assert_eq!(snapshot.cells[7][4], Some(Piece::WHITE_KING));
        assert_eq!(snapshot.cells[0][3], Some(Piece::BLACK_QUEEN));
        assert_eq!(snapshot.cells[4][4], None);
        assert_eq!(snapshot.phase, Phase::WhiteToMove);
    }

    #[test]
    fn legal_destination_query_ignores_turn() {
        let engine = RuleEngine::new();
        let list = engine.legal_destinations(Square::G8);
        assert_eq!(list.len(), 2);
        assert!(list.contains(Square::F6));
        assert!(list.contains(Square::H6));
    }
}

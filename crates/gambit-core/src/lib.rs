//! Core chess types: board representation, move generation, and game rules.

mod board;
mod check;
mod chess_move;
mod color;
mod error;
mod legality;
pub mod movegen;
pub mod perft;
mod piece;
mod piece_kind;
mod placement;
mod rules;
mod square;

pub use board::{Board, Cell};
pub use check::is_in_check;
pub use chess_move::Move;
pub use color::Color;
pub use error::{BoardError, PlacementError, RuleError};
pub use legality::{is_checkmate, legal_destinations, legal_moves};
pub use movegen::SquareList;
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use placement::STARTING_PLACEMENT;
pub use rules::{BoardSnapshot, MoveOutcome, MoveStatus, Phase, RuleEngine};
pub use square::Square;

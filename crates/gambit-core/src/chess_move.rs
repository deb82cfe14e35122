//! Move representation: an origin and a destination square.

use std::fmt;

use crate::square::Square;

/// A move from one square to another.
///
/// Carries no capture information; whether a move captures is decided by the
/// destination cell when the move is applied.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    from: Square,
    to: Square,
}

impl Move {
    /// Create a move.
    pub const fn new(from: Square, to: Square) -> Move {
        Move { from, to }
    }

    /// Extract the origin square.
    pub const fn from(self) -> Square {
        self.from
    }

    /// Extract the destination square.
    pub const fn to(self) -> Square {
        self.to
    }

}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({})", self)
    }
}

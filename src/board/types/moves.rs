//! Move type.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::piece::{Piece, PieceKind};
use super::square::Square;

/// A fully described move.
///
/// Together with the board it was generated on, a `Move` determines the
/// board after it is played, and the board before it when undoing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Move {
    pub from: Square,
    pub to: Square,
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub is_castle: bool,
    pub is_en_passant: bool,
}

impl Move {
    /// Returns true if this move captures a piece (including en passant)
    #[inline]
    #[must_use]
    pub const fn is_capture(&self) -> bool {
        self.captured.is_some()
    }

    /// Returns true if this move is a pawn promotion
    #[inline]
    #[must_use]
    pub const fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Returns true if this is kingside castling (O-O)
    #[inline]
    #[must_use]
    pub const fn is_castle_kingside(&self) -> bool {
        self.is_castle && self.to.file() == 6
    }

    /// Pawn moves and captures reset the fifty-move counter
    #[inline]
    #[must_use]
    pub(crate) fn resets_halfmove_clock(&self) -> bool {
        self.piece.kind == PieceKind::Pawn || self.is_capture()
    }

    /// Square of the pawn removed by an en passant capture
    #[inline]
    #[must_use]
    pub(crate) fn en_passant_victim(&self) -> Square {
        Square::at(self.from.row(), self.to.file())
    }

    /// Rook (from, to) squares for a castling move
    #[inline]
    #[must_use]
    pub(crate) fn castle_rook_squares(&self) -> (Square, Square) {
        let row = self.to.row();
        if self.to.file() == 6 {
            (Square::at(row, 7), Square::at(row, 5))
        } else {
            (Square::at(row, 0), Square::at(row, 3))
        }
    }
}

/// Long algebraic notation: "e2e4", "e7e8q"
impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.to_char())?;
        }
        Ok(())
    }
}

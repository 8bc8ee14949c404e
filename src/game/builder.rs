//! Fluent builder for constructing game positions.
//!
//! Allows seeding a game piece by piece instead of from the start position.
//!
//! # Example
//! ```
//! use chess_session::board::{Color, PieceKind, Square};
//! use chess_session::game::{GameBuilder, GameStatus};
//!
//! let state = GameBuilder::new()
//!     .piece(Square::E1, Color::White, PieceKind::King)
//!     .piece(Square::E8, Color::Black, PieceKind::King)
//!     .side_to_move(Color::White)
//!     .build();
//! assert_eq!(state.status(), GameStatus::DrawByInsufficientMaterial);
//! ```

use crate::board::{Board, CastlingRights, Color, Piece, PieceKind, Square};

use super::GameState;

/// A fluent builder for constructing `GameState` positions.
#[derive(Clone, Debug)]
pub struct GameBuilder {
    pieces: Vec<(Square, Piece)>,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
}

impl Default for GameBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl GameBuilder {
    /// Create a new empty board builder.
    #[must_use]
    pub fn new() -> Self {
        GameBuilder {
            pieces: Vec::new(),
            side_to_move: Color::White,
            castling_rights: CastlingRights::none(),
            en_passant_target: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Create a builder starting from the standard initial position.
    #[must_use]
    pub fn starting_position() -> Self {
        let mut builder = Self::new();
        builder.pieces = Board::new().pieces().collect();
        builder.castling_rights = CastlingRights::all();
        builder
    }

    /// Place a piece, replacing whatever was there.
    #[must_use]
    pub fn piece(mut self, sq: Square, color: Color, kind: PieceKind) -> Self {
        self.pieces.retain(|(s, _)| *s != sq);
        self.pieces.push((sq, Piece::new(color, kind)));
        self
    }

    /// Remove any piece from a square.
    #[must_use]
    pub fn clear(mut self, sq: Square) -> Self {
        self.pieces.retain(|(s, _)| *s != sq);
        self
    }

    #[must_use]
    pub fn side_to_move(mut self, color: Color) -> Self {
        self.side_to_move = color;
        self
    }

    /// Grant a castling right. Rights whose king or rook is not on its
    /// original square are dropped by [`GameBuilder::build`].
    #[must_use]
    pub fn castling(mut self, color: Color, kingside: bool) -> Self {
        self.castling_rights.grant(color, kingside);
        self
    }

    /// Set the en passant target. [`GameBuilder::build`] drops it unless the
    /// square is empty, on the right rank, and has the pawn that just
    /// double-pushed standing in front of it.
    #[must_use]
    pub fn en_passant(mut self, sq: Option<Square>) -> Self {
        self.en_passant_target = sq;
        self
    }

    #[must_use]
    pub fn halfmove_clock(mut self, clock: u32) -> Self {
        self.halfmove_clock = clock;
        self
    }

    #[must_use]
    pub fn fullmove_number(mut self, number: u32) -> Self {
        self.fullmove_number = number.max(1);
        self
    }

    /// Build the game state; its status is evaluated immediately.
    #[must_use]
    pub fn build(self) -> GameState {
        let mut board = Board::empty();
        for (sq, piece) in &self.pieces {
            board.set(*sq, Some(*piece));
        }

        let mut rights = self.castling_rights;
        for color in Color::BOTH {
            let row = color.back_row();
            let holds = |file: usize, kind: PieceKind| {
                board.get(Square::at(row, file)) == Some(Piece::new(color, kind))
            };
            if !holds(4, PieceKind::King) {
                rights.revoke_all(color);
            }
            if !holds(7, PieceKind::Rook) {
                rights.revoke(color, true);
            }
            if !holds(0, PieceKind::Rook) {
                rights.revoke(color, false);
            }
        }

        let side = self.side_to_move;
        let pushed = Piece::new(side.opponent(), PieceKind::Pawn);
        let en_passant_target = self.en_passant_target.filter(|&target| {
            target.row() == en_passant_row(side)
                && !board.is_occupied(target)
                && target
                    .offset(-side.pawn_direction(), 0)
                    .is_some_and(|victim| board.get(victim) == Some(pushed))
        });

        GameState::from_parts(
            board,
            side,
            rights,
            en_passant_target,
            self.halfmove_clock,
            self.fullmove_number,
        )
    }
}

/// Row of an en passant target when `side` is the one that may capture.
fn en_passant_row(side: Color) -> usize {
    match side {
        Color::White => 2,
        Color::Black => 5,
    }
}

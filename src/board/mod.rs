//! Chess board representation and move rules.
//!
//! An 8x8 mailbox of optional pieces with occupancy queries, plus fully
//! legal move generation: piece geometry, blocking, captures, castling,
//! en passant and promotion, filtered for own-king safety.
//!
//! # Example
//! ```
//! use chess_session::board::{legal_moves, Board, MoveContext, Square};
//!
//! let board = Board::new();
//! let moves = legal_moves(&board, Square::E2, &MoveContext::default());
//! assert_eq!(moves.len(), 2);
//! ```

mod error;
pub(crate) mod make_unmake;
pub mod movegen;
mod state;
mod types;

pub use error::{GameError, MoveParseError, SquareError};
pub use movegen::{
    all_legal_moves, has_legal_move, is_in_check, is_square_attacked, legal_moves, pseudo_moves,
    MoveContext,
};
pub use state::Board;
pub use types::{CastlingRights, Color, Move, Piece, PieceKind, Square};

pub(crate) use types::PROMOTION_PIECES;

#[cfg(test)]
mod tests;

//! Core chess types.
//!
//! This module contains the fundamental value types used throughout the engine:
//! - `PieceKind`, `Color` and `Piece` - chess pieces
//! - `Square` - board square with its algebraic label
//! - `Move` - a fully described move
//! - `CastlingRights` - castling state

mod castling;
mod moves;
mod piece;
mod square;

pub use castling::CastlingRights;
pub use moves::Move;
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use piece::PROMOTION_PIECES;

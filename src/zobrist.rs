//! Zobrist hashing for chess positions.
//!
//! Keys a position (placement, side to move, castling rights, en passant
//! target) for the repetition table.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::{Board, CastlingRights, Color, Square};

pub(crate) struct ZobristKeys {
    // piece_keys[piece_kind][color][square_index]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    pub(crate) black_to_move_key: u64,
    // castling_keys[bit] following the CastlingRights bit layout
    pub(crate) castling_keys: [u64; 4],
    // en_passant_keys[file_index] (only file matters for EP target)
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64); // Use a fixed seed for reproducibility
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [0; 4];
        let mut en_passant_keys = [0; 8];

        for piece in &mut piece_keys {
            for color in piece.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for key in &mut castling_keys {
            *key = rng.gen();
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

/// Hash of everything that makes two positions "the same" for repetition.
pub(crate) fn position_hash(
    board: &Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
) -> u64 {
    let mut hash: u64 = 0;

    for (sq, piece) in board.pieces() {
        hash ^= ZOBRIST.piece_keys[piece.kind.index()][piece.color.index()][sq.index()];
    }

    if side_to_move == Color::Black {
        hash ^= ZOBRIST.black_to_move_key;
    }

    let rights = castling_rights.as_u8();
    for (bit, key) in ZOBRIST.castling_keys.iter().enumerate() {
        if rights & (1 << bit) != 0 {
            hash ^= key;
        }
    }

    if let Some(ep_square) = en_passant_target {
        hash ^= ZOBRIST.en_passant_keys[ep_square.file()];
    }

    hash
}

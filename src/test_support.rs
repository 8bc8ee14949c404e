//! Helpers shared by unit tests.

use crate::board::{Color, PieceKind, Square};
use crate::game::{GameBuilder, GameState, MoveText};

/// Seed a game from a diagram in FEN placement order plus the remaining
/// FEN fields: `"r3k2r/8/8/8/8/8/8/R3K2R w KQkq -"`. Test-only: the engine
/// itself always starts from the standard position or a builder.
pub(crate) fn position(diagram: &str) -> GameState {
    let fields: Vec<&str> = diagram.split_whitespace().collect();
    let mut builder = GameBuilder::new();

    for (row, rank) in fields[0].split('/').enumerate() {
        let mut file = 0;
        for c in rank.chars() {
            if let Some(skip) = c.to_digit(10) {
                file += skip as usize;
                continue;
            }
            let color = if c.is_ascii_uppercase() {
                Color::White
            } else {
                Color::Black
            };
            let kind = PieceKind::from_char(c).expect("bad piece letter");
            let sq = Square::new(row, file).expect("diagram overflows the board");
            builder = builder.piece(sq, color, kind);
            file += 1;
        }
    }

    let side = match fields.get(1) {
        Some(&"b") => Color::Black,
        _ => Color::White,
    };
    builder = builder.side_to_move(side);

    for c in fields.get(2).copied().unwrap_or("-").chars() {
        builder = match c {
            'K' => builder.castling(Color::White, true),
            'Q' => builder.castling(Color::White, false),
            'k' => builder.castling(Color::Black, true),
            'q' => builder.castling(Color::Black, false),
            _ => builder,
        };
    }

    if let Some(ep) = fields.get(3).filter(|f| **f != "-") {
        builder = builder.en_passant(Some(ep.parse().expect("bad en passant square")));
    }
    if let Some(halfmove) = fields.get(4) {
        builder = builder.halfmove_clock(halfmove.parse().expect("bad halfmove clock"));
    }

    builder.build()
}

/// Play a sequence of long-algebraic moves, panicking on the first illegal one.
pub(crate) fn play_all(game: &mut GameState, moves: &[&str]) {
    for text in moves {
        let mv: MoveText = text.parse().expect("bad move text");
        if let Err(e) = game.play(mv.from, mv.to, mv.promotion) {
            panic!("{text}: {e}");
        }
    }
}

pub(crate) fn sq(label: &str) -> Square {
    label.parse().expect("bad square label")
}

//! Draw detection tests: fifty-move rule, threefold repetition and
//! insufficient material.

use crate::board::{Color, PieceKind, Square};
use crate::game::{GameBuilder, GameState, GameStatus};
use crate::test_support::{play_all, position, sq};

const KNIGHT_SHUFFLE: [&str; 4] = ["g1f3", "g8f6", "f3g1", "f6g8"];

#[test]
fn test_fifty_move_rule() {
    let mut game = position("4k3/8/8/8/8/8/8/R3K3 w - - 99");
    assert_eq!(game.status(), GameStatus::InProgress);

    let status = game.play(Square::A1, sq("a2"), None).unwrap();
    assert_eq!(status, GameStatus::DrawByFiftyMove);
}

#[test]
fn test_pawn_move_resets_halfmove_clock() {
    let mut game = position("4k3/8/8/8/8/8/P7/4K3 w - - 99");
    game.play(sq("a2"), sq("a3"), None).unwrap();
    assert_eq!(game.halfmove_clock(), 0);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_capture_resets_halfmove_clock() {
    let mut game = position("4k3/8/8/8/8/8/r7/R3K3 w - - 40");
    game.play(Square::A1, sq("a2"), None).unwrap();
    assert_eq!(game.halfmove_clock(), 0);
}

#[test]
fn test_threefold_repetition() {
    let mut game = GameState::new();
    play_all(&mut game, &KNIGHT_SHUFFLE);
    assert_eq!(game.status(), GameStatus::InProgress);

    play_all(&mut game, &KNIGHT_SHUFFLE[..3]);
    assert_eq!(game.status(), GameStatus::InProgress);

    let status = game.play(sq("f6"), sq("g8"), None).unwrap();
    assert_eq!(status, GameStatus::DrawByRepetition);
}

#[test]
fn test_undo_unwinds_repetition_count() {
    let mut game = GameState::new();
    play_all(&mut game, &KNIGHT_SHUFFLE);
    play_all(&mut game, &KNIGHT_SHUFFLE);
    assert_eq!(game.status(), GameStatus::DrawByRepetition);

    game.undo_last().unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);

    // Replaying reaches the third occurrence again.
    game.play(sq("f6"), sq("g8"), None).unwrap();
    assert_eq!(game.status(), GameStatus::DrawByRepetition);

    game.undo_last().unwrap();
    game.undo_last().unwrap();
    game.play(sq("f3"), sq("g1"), None).unwrap();
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_repetition_requires_same_side_to_move() {
    // Same placement, different side to move, is a different position.
    let mut game = GameState::new();
    play_all(&mut game, &["g1f3", "g8f6", "f3g1", "f6g8", "g1f3"]);
    assert_eq!(game.status(), GameStatus::InProgress);
}

#[test]
fn test_lone_kings() {
    let game = GameBuilder::new()
        .piece(Square::E1, Color::White, PieceKind::King)
        .piece(Square::E8, Color::Black, PieceKind::King)
        .build();
    assert_eq!(game.status(), GameStatus::DrawByInsufficientMaterial);
    assert!(game.all_legal_moves().is_empty());
}

#[test]
fn test_single_minor_piece_is_insufficient() {
    assert_eq!(
        position("4k3/8/8/8/8/8/8/2B1K3 w - -").status(),
        GameStatus::DrawByInsufficientMaterial
    );
    assert_eq!(
        position("4k3/8/8/8/8/8/8/1N2K3 b - -").status(),
        GameStatus::DrawByInsufficientMaterial
    );
}

#[test]
fn test_sufficient_material() {
    assert_eq!(
        position("4k3/8/8/8/8/8/8/R3K3 w - -").status(),
        GameStatus::InProgress
    );
    assert_eq!(
        position("4k3/8/8/8/8/8/P7/4K3 w - -").status(),
        GameStatus::InProgress
    );
    // Bishops on opposite square colours can still mate.
    assert_eq!(
        position("4kb2/8/8/8/8/8/8/3BK3 w - -").status(),
        GameStatus::InProgress
    );
}

#[test]
fn test_capture_into_insufficient_material() {
    let mut game = position("4k3/8/8/8/8/8/3q4/4K3 w - -");
    assert_eq!(game.status(), GameStatus::Check);

    let status = game.play(Square::E1, sq("d2"), None).unwrap();
    assert_eq!(status, GameStatus::DrawByInsufficientMaterial);
}

#[test]
fn test_repetition_after_double_push() {
    // 1. e4 leaves an e3 target nobody can capture, so the position after
    // it recurs when the knights return.
    let mut game = GameState::new();
    play_all(&mut game, &["e2e4"]);
    assert_eq!(game.en_passant_target(), Some(sq("e3")));
    assert_eq!(game.capturable_en_passant(), None);

    let out_and_back = ["g8f6", "g1f3", "f6g8", "f3g1"];
    play_all(&mut game, &out_and_back);
    assert_eq!(game.status(), GameStatus::InProgress);

    play_all(&mut game, &out_and_back);
    assert_eq!(game.status(), GameStatus::DrawByRepetition);
}

#[test]
fn test_capturable_en_passant_makes_position_distinct() {
    let mut game = position("4k3/8/8/8/3p4/8/4P3/4K3 w - -");
    play_all(&mut game, &["e2e4"]);
    assert_eq!(game.capturable_en_passant(), Some(sq("e3")));

    let same_placement = position("4k3/8/8/8/3pP3/8/8/4K3 b - -");
    assert_ne!(game.hash(), same_placement.hash());
    assert_eq!(game.board(), same_placement.board());
}

#[test]
fn test_pinned_pawn_cannot_claim_en_passant() {
    // The d4 pawn is pinned against the king on a4 by the rook on h4 once
    // the e-pawn lands beside it.
    let mut game = position("8/8/8/8/k2p3R/8/4P3/4K3 w - -");
    play_all(&mut game, &["e2e4"]);
    assert_eq!(game.en_passant_target(), Some(sq("e3")));
    assert_eq!(game.capturable_en_passant(), None);
}

//! Board-level make/unmake of a single move.
//!
//! Only piece placement changes here. Side to move, castling rights and the
//! en passant target belong to the game state, which snapshots them per move.

use super::{Board, Move, Piece};

/// Play `mv` on `board`: rook relocation for castling, victim removal for
/// en passant, piece swap for promotion.
pub(crate) fn place_move(board: &mut Board, mv: &Move) {
    let moved = board.take(mv.from);
    debug_assert_eq!(moved, Some(mv.piece), "make_move: 'from' does not hold the mover");

    if mv.is_en_passant {
        board.set(mv.en_passant_victim(), None);
    }

    if mv.is_castle {
        let (rook_from, rook_to) = mv.castle_rook_squares();
        let rook = board.take(rook_from);
        board.set(rook_to, rook);
    }

    let placed = match mv.promotion {
        Some(kind) => Piece::new(mv.piece.color, kind),
        None => mv.piece,
    };
    board.set(mv.to, Some(placed));
}

/// Reverse [`place_move`], restoring the exact prior cell contents.
pub(crate) fn unplace_move(board: &mut Board, mv: &Move) {
    board.set(mv.from, Some(mv.piece));

    if mv.is_castle {
        let (rook_from, rook_to) = mv.castle_rook_squares();
        let rook = board.take(rook_to);
        board.set(rook_from, rook);
    }

    if mv.is_en_passant {
        board.set(mv.to, None);
        board.set(mv.en_passant_victim(), mv.captured);
    } else {
        board.set(mv.to, mv.captured);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::movegen::{legal_moves, MoveContext};
    use crate::board::{CastlingRights, Color, PieceKind, Square};

    fn find(board: &Board, ctx: &MoveContext, text: &str) -> Move {
        let from: Square = text[0..2].parse().unwrap();
        legal_moves(board, from, ctx)
            .into_iter()
            .find(|m| m.to_string() == text)
            .expect("Expected move not found")
    }

    #[test]
    fn test_castling_place_unplace() {
        let mut board = Board::empty();
        board.set(Square::E1, Some(Piece::new(Color::White, PieceKind::King)));
        board.set(Square::H1, Some(Piece::new(Color::White, PieceKind::Rook)));
        board.set(Square::E8, Some(Piece::new(Color::Black, PieceKind::King)));
        let ctx = MoveContext {
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
        };
        let original = board.clone();

        let mv = find(&board, &ctx, "e1g1");
        place_move(&mut board, &mv);
        assert_eq!(board.get(Square::G1).map(|p| p.kind), Some(PieceKind::King));
        assert_eq!(board.get(Square::F1).map(|p| p.kind), Some(PieceKind::Rook));
        assert!(!board.is_occupied(Square::H1));

        unplace_move(&mut board, &mv);
        assert_eq!(board, original);
    }

    #[test]
    fn test_en_passant_place_unplace() {
        let mut board = Board::empty();
        let e5: Square = "e5".parse().unwrap();
        let d5: Square = "d5".parse().unwrap();
        board.set(e5, Some(Piece::new(Color::White, PieceKind::Pawn)));
        board.set(d5, Some(Piece::new(Color::Black, PieceKind::Pawn)));
        let ctx = MoveContext {
            castling_rights: CastlingRights::none(),
            en_passant_target: Some("d6".parse().unwrap()),
        };
        let original = board.clone();

        let mv = find(&board, &ctx, "e5d6");
        place_move(&mut board, &mv);
        assert!(!board.is_occupied(d5));
        assert!(board.is_occupied_by_color("d6".parse().unwrap(), Color::White));

        unplace_move(&mut board, &mv);
        assert_eq!(board, original);
    }

    #[test]
    fn test_promotion_capture_place_unplace() {
        let mut board = Board::empty();
        board.set(Square::B1, Some(Piece::new(Color::White, PieceKind::Rook)));
        board.set("a2".parse().unwrap(), Some(Piece::new(Color::Black, PieceKind::Pawn)));
        let original = board.clone();

        let mv = find(&board, &MoveContext::default(), "a2b1n");
        assert_eq!(mv.captured, Some(Piece::new(Color::White, PieceKind::Rook)));
        place_move(&mut board, &mv);
        assert_eq!(
            board.get(Square::B1),
            Some(Piece::new(Color::Black, PieceKind::Knight))
        );
        unplace_move(&mut board, &mv);
        assert_eq!(board, original);
    }
}

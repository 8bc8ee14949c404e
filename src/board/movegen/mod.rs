//! Move generation.
//!
//! Pseudo-moves follow piece geometry only. Legal moves additionally drop
//! every candidate that would leave the mover's own king attacked, checked
//! by playing the candidate on a scratch copy of the board.

mod attacks;
mod kings;
mod knights;
mod pawns;
mod sliders;

pub use attacks::is_square_attacked;

use super::make_unmake::place_move;
use super::{Board, CastlingRights, Color, Move, Piece, PieceKind, Square};

/// Position state beyond piece placement that move generation depends on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Default)]
pub struct MoveContext {
    pub castling_rights: CastlingRights,
    pub en_passant_target: Option<Square>,
}

/// Candidate moves for the piece on `from`, ignoring own-king safety.
///
/// Returns an empty list for an empty square. Pawn moves reaching the last
/// rank are expanded into one move per promotion kind.
#[must_use]
pub fn pseudo_moves(board: &Board, from: Square, ctx: &MoveContext) -> Vec<Move> {
    let Some(piece) = board.get(from) else {
        return Vec::new();
    };

    let mut moves = Vec::new();
    match piece.kind {
        PieceKind::Pawn => pawns::pawn_moves(board, from, piece, ctx, &mut moves),
        PieceKind::Knight => knights::knight_moves(board, from, piece, &mut moves),
        PieceKind::Bishop => {
            sliders::sliding_moves(board, from, piece, &sliders::BISHOP_DIRECTIONS, &mut moves)
        }
        PieceKind::Rook => {
            sliders::sliding_moves(board, from, piece, &sliders::ROOK_DIRECTIONS, &mut moves)
        }
        PieceKind::Queen => {
            sliders::sliding_moves(board, from, piece, &sliders::QUEEN_DIRECTIONS, &mut moves)
        }
        PieceKind::King => kings::king_moves(board, from, piece, ctx, &mut moves),
    }
    moves
}

/// Pseudo-moves from `from` that do not leave the mover's king attacked.
#[must_use]
pub fn legal_moves(board: &Board, from: Square, ctx: &MoveContext) -> Vec<Move> {
    let mut moves = pseudo_moves(board, from, ctx);
    moves.retain(|mv| !leaves_king_attacked(board, mv));
    moves
}

/// Legal moves for every piece of `color`, in row-major order of origin square.
#[must_use]
pub fn all_legal_moves(board: &Board, color: Color, ctx: &MoveContext) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|(sq, _)| legal_moves(board, sq, ctx))
        .collect()
}

/// True when `color` has at least one legal move; stops at the first one found.
#[must_use]
pub fn has_legal_move(board: &Board, color: Color, ctx: &MoveContext) -> bool {
    board.pieces_of(color).any(|(sq, _)| {
        pseudo_moves(board, sq, ctx)
            .iter()
            .any(|mv| !leaves_king_attacked(board, mv))
    })
}

/// Returns true if `color`'s king is attacked. A board without that king is
/// never in check.
#[must_use]
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .find_king(color)
        .is_some_and(|king_sq| is_square_attacked(board, king_sq, color.opponent()))
}

fn leaves_king_attacked(board: &Board, mv: &Move) -> bool {
    let mut scratch = board.clone();
    place_move(&mut scratch, mv);
    is_in_check(&scratch, mv.piece.color)
}

/// Build a move from `from` to `to`, reading the mover and any captured
/// piece off the board.
fn create_move(
    board: &Board,
    mover: Piece,
    from: Square,
    to: Square,
    promotion: Option<PieceKind>,
    is_castle: bool,
    is_en_passant: bool,
) -> Move {
    let captured = if is_en_passant {
        Some(Piece::new(mover.color.opponent(), PieceKind::Pawn))
    } else if is_castle {
        None
    } else {
        board.get(to)
    };

    Move {
        from,
        to,
        piece: mover,
        captured,
        promotion,
        is_castle,
        is_en_passant,
    }
}

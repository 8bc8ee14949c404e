use super::super::{Board, Move, Piece, Square, PROMOTION_PIECES};
use super::{create_move, MoveContext};

pub(super) fn pawn_moves(
    board: &Board,
    from: Square,
    mover: Piece,
    ctx: &MoveContext,
    moves: &mut Vec<Move>,
) {
    let color = mover.color;
    let dir = color.pawn_direction();

    let push = |to: Square, is_en_passant: bool, moves: &mut Vec<Move>| {
        if to.row() == color.promotion_row() {
            for promo in PROMOTION_PIECES {
                moves.push(create_move(board, mover, from, to, Some(promo), false, false));
            }
        } else {
            moves.push(create_move(board, mover, from, to, None, false, is_en_passant));
        }
    };

    if let Some(forward_sq) = from.offset(dir, 0) {
        if !board.is_occupied(forward_sq) {
            push(forward_sq, false, moves);
            if from.row() == color.pawn_start_row() {
                if let Some(double_sq) = forward_sq.offset(dir, 0) {
                    if !board.is_occupied(double_sq) {
                        push(double_sq, false, moves);
                    }
                }
            }
        }
    }

    for df in [-1, 1] {
        let Some(target_sq) = from.offset(dir, df) else {
            continue;
        };
        match board.get(target_sq) {
            Some(target) if target.color != color => push(target_sq, false, moves),
            Some(_) => {}
            None if Some(target_sq) == ctx.en_passant_target => push(target_sq, true, moves),
            None => {}
        }
    }
}

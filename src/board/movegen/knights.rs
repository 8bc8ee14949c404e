use super::super::{Board, Move, Piece, Square};
use super::attacks::KNIGHT_TARGETS;
use super::create_move;

pub(super) fn knight_moves(board: &Board, from: Square, mover: Piece, moves: &mut Vec<Move>) {
    for &to in &KNIGHT_TARGETS[from.index()] {
        if !board.is_occupied_by_color(to, mover.color) {
            moves.push(create_move(board, mover, from, to, None, false, false));
        }
    }
}

use super::super::{Board, Move, Piece, Square};
use super::create_move;

pub(super) const BISHOP_DIRECTIONS: [(isize, isize); 4] = [(1, 1), (1, -1), (-1, 1), (-1, -1)];
pub(super) const ROOK_DIRECTIONS: [(isize, isize); 4] = [(1, 0), (-1, 0), (0, 1), (0, -1)];
pub(super) const QUEEN_DIRECTIONS: [(isize, isize); 8] = [
    (1, 0),
    (-1, 0),
    (0, 1),
    (0, -1),
    (1, 1),
    (1, -1),
    (-1, 1),
    (-1, -1),
];

/// Walk each ray until the first occupied square; an enemy there is a
/// capture, a friendly piece ends the ray without one.
pub(super) fn sliding_moves(
    board: &Board,
    from: Square,
    mover: Piece,
    directions: &[(isize, isize)],
    moves: &mut Vec<Move>,
) {
    for &(dr, df) in directions {
        let mut cur = from;
        while let Some(to) = cur.offset(dr, df) {
            match board.get(to) {
                None => moves.push(create_move(board, mover, from, to, None, false, false)),
                Some(target) => {
                    if target.color != mover.color {
                        moves.push(create_move(board, mover, from, to, None, false, false));
                    }
                    break;
                }
            }
            cur = to;
        }
    }
}

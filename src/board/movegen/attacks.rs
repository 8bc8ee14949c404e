use once_cell::sync::Lazy;

use super::sliders::{BISHOP_DIRECTIONS, ROOK_DIRECTIONS};
use super::super::{Board, Color, PieceKind, Square};

const KNIGHT_OFFSETS: [(isize, isize); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

const KING_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

fn build_step_table(offsets: &[(isize, isize)]) -> [Vec<Square>; 64] {
    std::array::from_fn(|idx| {
        let from = Square::from_index(idx);
        offsets
            .iter()
            .filter_map(|&(dr, df)| from.offset(dr, df))
            .collect()
    })
}

/// Knight destinations per square index
pub(super) static KNIGHT_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| build_step_table(&KNIGHT_OFFSETS));

/// King single-step destinations per square index
pub(super) static KING_TARGETS: Lazy<[Vec<Square>; 64]> =
    Lazy::new(|| build_step_table(&KING_OFFSETS));

/// Returns true if any piece of `by` could capture on `target`.
///
/// Occupancy of `target` itself is ignored, so the answer is the same for
/// an empty square, an enemy piece, or the attacker's own piece.
#[must_use]
pub fn is_square_attacked(board: &Board, target: Square, by: Color) -> bool {
    let holds = |sq: Square, kind: PieceKind| {
        matches!(board.get(sq), Some(p) if p.color == by && p.kind == kind)
    };

    // A pawn of `by` attacks one row ahead of itself, so look one row behind.
    let back = -by.pawn_direction();
    for df in [-1, 1] {
        if let Some(sq) = target.offset(back, df) {
            if holds(sq, PieceKind::Pawn) {
                return true;
            }
        }
    }

    if KNIGHT_TARGETS[target.index()]
        .iter()
        .any(|&sq| holds(sq, PieceKind::Knight))
    {
        return true;
    }

    if KING_TARGETS[target.index()]
        .iter()
        .any(|&sq| holds(sq, PieceKind::King))
    {
        return true;
    }

    let slider_hits = |directions: &[(isize, isize)], kinds: [PieceKind; 2]| {
        directions.iter().any(|&(dr, df)| {
            let mut cur = target;
            while let Some(next) = cur.offset(dr, df) {
                if let Some(piece) = board.get(next) {
                    return piece.color == by && kinds.contains(&piece.kind);
                }
                cur = next;
            }
            false
        })
    };

    slider_hits(&ROOK_DIRECTIONS, [PieceKind::Rook, PieceKind::Queen])
        || slider_hits(&BISHOP_DIRECTIONS, [PieceKind::Bishop, PieceKind::Queen])
}

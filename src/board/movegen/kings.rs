use super::super::{Board, Move, Piece, PieceKind, Square};
use super::attacks::{is_square_attacked, KING_TARGETS};
use super::{create_move, MoveContext};

pub(super) fn king_moves(
    board: &Board,
    from: Square,
    mover: Piece,
    ctx: &MoveContext,
    moves: &mut Vec<Move>,
) {
    let color = mover.color;

    for &to in &KING_TARGETS[from.index()] {
        if !board.is_occupied_by_color(to, color) {
            moves.push(create_move(board, mover, from, to, None, false, false));
        }
    }

    let back_row = color.back_row();
    if from != Square::at(back_row, 4) {
        return;
    }

    let enemy = color.opponent();
    let rook = Some(Piece::new(color, PieceKind::Rook));
    let empty = |files: &[usize]| files.iter().all(|&f| !board.is_occupied(Square::at(back_row, f)));
    let safe = |files: &[usize]| {
        files
            .iter()
            .all(|&f| !is_square_attacked(board, Square::at(back_row, f), enemy))
    };

    if ctx.castling_rights.has(color, true)
        && board.get(Square::at(back_row, 7)) == rook
        && empty(&[5, 6])
        && safe(&[4, 5, 6])
    {
        let to = Square::at(back_row, 6);
        moves.push(create_move(board, mover, from, to, None, true, false));
    }

    if ctx.castling_rights.has(color, false)
        && board.get(Square::at(back_row, 0)) == rook
        && empty(&[1, 2, 3])
        && safe(&[4, 3, 2])
    {
        let to = Square::at(back_row, 2);
        moves.push(create_move(board, mover, from, to, None, true, false));
    }
}

#[cfg(test)]
mod tests {
    use crate::board::movegen::{legal_moves, pseudo_moves, MoveContext};
    use crate::board::{Board, CastlingRights, Color, Piece, PieceKind, Square};

    fn castling_board() -> Board {
        let mut board = Board::empty();
        board.set(Square::E1, Some(Piece::new(Color::White, PieceKind::King)));
        board.set(Square::A1, Some(Piece::new(Color::White, PieceKind::Rook)));
        board.set(Square::H1, Some(Piece::new(Color::White, PieceKind::Rook)));
        board.set(Square::E8, Some(Piece::new(Color::Black, PieceKind::King)));
        board
    }

    fn castles(board: &Board, ctx: &MoveContext) -> Vec<Square> {
        pseudo_moves(board, Square::E1, ctx)
            .into_iter()
            .filter(|m| m.is_castle)
            .map(|m| m.to)
            .collect()
    }

    fn full_rights() -> MoveContext {
        MoveContext {
            castling_rights: CastlingRights::all(),
            en_passant_target: None,
        }
    }

    #[test]
    fn test_both_castles_available() {
        let board = castling_board();
        assert_eq!(castles(&board, &full_rights()), vec![Square::G1, Square::C1]);
        assert!(castles(&board, &MoveContext::default()).is_empty());
    }

    #[test]
    fn test_cannot_castle_through_attacked_square() {
        let mut board = castling_board();
        board.set(Square::F8, Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert_eq!(castles(&board, &full_rights()), vec![Square::C1]);
    }

    #[test]
    fn test_cannot_castle_out_of_check() {
        let mut board = castling_board();
        board.set(Square::E5, Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert!(castles(&board, &full_rights()).is_empty());
    }

    #[test]
    fn test_queenside_b_file_only_needs_to_be_empty() {
        let mut board = castling_board();
        board.set(Square::B8, Some(Piece::new(Color::Black, PieceKind::Rook)));
        assert_eq!(castles(&board, &full_rights()), vec![Square::G1, Square::C1]);

        board.set(Square::B1, Some(Piece::new(Color::White, PieceKind::Knight)));
        assert_eq!(castles(&board, &full_rights()), vec![Square::G1]);
    }

    #[test]
    fn test_king_cannot_step_into_attack() {
        let mut board = castling_board();
        board.set(Square::D8, Some(Piece::new(Color::Black, PieceKind::Rook)));
        let moves = legal_moves(&board, Square::E1, &MoveContext::default());
        assert!(moves.iter().all(|m| m.to.file() != 3));
        assert!(moves.iter().any(|m| m.to == Square::F1));
    }
}

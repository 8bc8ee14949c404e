use log::{debug, info};

use crate::board::make_unmake::{place_move, unplace_move};
use crate::board::movegen::{self, MoveContext};
use crate::board::{Board, CastlingRights, Color, GameError, Move, Piece, PieceKind, Square};
use crate::zobrist::position_hash;

use super::history::{HistoryEntry, RepetitionTable, UnmakeInfo};
use super::{GameStatus, MoveText, MoveTextError};

/// Authoritative state of one game.
///
/// Owns its board exclusively. The move history is a stack: every applied
/// move is pushed with a snapshot of the state it overwrote, and
/// [`GameState::undo_last`] pops it back off.
#[derive(Clone, Debug)]
pub struct GameState {
    board: Board,
    side_to_move: Color,
    castling_rights: CastlingRights,
    en_passant_target: Option<Square>,
    halfmove_clock: u32,
    fullmove_number: u32,
    history: Vec<HistoryEntry>,
    hash: u64,
    repetitions: RepetitionTable,
    status: GameStatus,
}

impl GameState {
    /// A new game from the standard starting position.
    #[must_use]
    pub fn new() -> Self {
        GameState::from_parts(
            Board::new(),
            Color::White,
            CastlingRights::all(),
            None,
            0,
            1,
        )
    }

    pub(crate) fn from_parts(
        board: Board,
        side_to_move: Color,
        castling_rights: CastlingRights,
        en_passant_target: Option<Square>,
        halfmove_clock: u32,
        fullmove_number: u32,
    ) -> Self {
        let mut state = GameState {
            board,
            side_to_move,
            castling_rights,
            en_passant_target,
            halfmove_clock,
            fullmove_number,
            history: Vec::new(),
            hash: 0,
            repetitions: RepetitionTable::new(),
            status: GameStatus::InProgress,
        };
        state.hash = state.compute_hash();
        state.repetitions.set(state.hash, 1);
        state.status = state.evaluate_status();
        state
    }

    #[must_use]
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    #[must_use]
    pub fn castling_rights(&self) -> CastlingRights {
        self.castling_rights
    }

    #[must_use]
    pub fn en_passant_target(&self) -> Option<Square> {
        self.en_passant_target
    }

    #[must_use]
    pub fn halfmove_clock(&self) -> u32 {
        self.halfmove_clock
    }

    #[must_use]
    pub fn fullmove_number(&self) -> u32 {
        self.fullmove_number
    }

    #[must_use]
    pub fn hash(&self) -> u64 {
        self.hash
    }

    /// Status computed after the most recent apply or undo.
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    #[must_use]
    pub fn history(&self) -> &[HistoryEntry] {
        &self.history
    }

    /// Moves played so far, oldest first.
    pub fn moves(&self) -> impl Iterator<Item = &Move> + '_ {
        self.history.iter().map(|entry| &entry.mv)
    }

    #[must_use]
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|entry| &entry.mv)
    }

    #[must_use]
    pub fn move_context(&self) -> MoveContext {
        MoveContext {
            castling_rights: self.castling_rights,
            en_passant_target: self.en_passant_target,
        }
    }

    /// Legal moves for the piece on `square`.
    ///
    /// Empty when the square is empty, holds a piece of the side not to
    /// move, or the game has ended.
    #[must_use]
    pub fn legal_moves(&self, square: Square) -> Vec<Move> {
        if self.status.is_terminal() || !self.board.is_occupied_by_color(square, self.side_to_move)
        {
            return Vec::new();
        }
        movegen::legal_moves(&self.board, square, &self.move_context())
    }

    /// Legal moves for every piece of the side to move.
    #[must_use]
    pub fn all_legal_moves(&self) -> Vec<Move> {
        if self.status.is_terminal() {
            return Vec::new();
        }
        movegen::all_legal_moves(&self.board, self.side_to_move, &self.move_context())
    }

    /// Diagnostic mode: candidate moves for the piece on `square` without
    /// the own-king safety filter. Never accepted by [`GameState::apply_move`].
    #[must_use]
    pub fn pseudo_legal_moves(&self, square: Square) -> Vec<Move> {
        movegen::pseudo_moves(&self.board, square, &self.move_context())
    }

    #[must_use]
    pub fn is_in_check(&self, color: Color) -> bool {
        movegen::is_in_check(&self.board, color)
    }

    #[must_use]
    pub fn is_square_attacked(&self, square: Square, by: Color) -> bool {
        movegen::is_square_attacked(&self.board, square, by)
    }

    /// Look up the legal move from `from` to `to`.
    ///
    /// A promotion without a requested kind becomes a queen. Asking for a
    /// promotion on a move that does not promote, or for a kind a pawn
    /// cannot become, is illegal.
    pub fn find_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<Move, GameError> {
        if self.status.is_terminal() {
            return Err(GameError::GameOver);
        }

        let illegal = GameError::IllegalMove { from, to };
        let candidates: Vec<Move> = self
            .legal_moves(from)
            .into_iter()
            .filter(|m| m.to == to)
            .collect();

        let Some(first) = candidates.first() else {
            return Err(illegal);
        };

        if first.is_promotion() {
            let kind = promotion.unwrap_or(PieceKind::Queen);
            candidates
                .into_iter()
                .find(|m| m.promotion == Some(kind))
                .ok_or(illegal)
        } else if promotion.is_some() {
            Err(illegal)
        } else {
            Ok(*first)
        }
    }

    /// Resolve long-algebraic text ("e2e4", "e7e8n") to a legal move.
    pub fn parse_move(&self, text: &str) -> Result<Move, MoveTextError> {
        let MoveText {
            from,
            to,
            promotion,
        } = text.parse::<MoveText>()?;
        Ok(self.find_move(from, to, promotion)?)
    }

    /// Validate `mv` against the legal set and play it.
    ///
    /// On failure nothing is mutated. Returns the new status.
    pub fn apply_move(&mut self, mv: Move) -> Result<GameStatus, GameError> {
        let legal = self.find_move(mv.from, mv.to, mv.promotion)?;
        if legal.piece != mv.piece
            || legal.captured != mv.captured
            || legal.is_castle != mv.is_castle
            || legal.is_en_passant != mv.is_en_passant
        {
            return Err(GameError::IllegalMove {
                from: mv.from,
                to: mv.to,
            });
        }
        Ok(self.commit(legal))
    }

    /// Play the legal move from `from` to `to`; see [`GameState::find_move`].
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<PieceKind>,
    ) -> Result<GameStatus, GameError> {
        let mv = self.find_move(from, to, promotion)?;
        Ok(self.commit(mv))
    }

    /// Take back the last move, restoring the exact prior state.
    pub fn undo_last(&mut self) -> Result<Move, GameError> {
        let entry = self.history.pop().ok_or(GameError::EmptyHistory)?;
        self.unmake(&entry);
        debug!("undid {} ({} to move)", entry.mv, self.side_to_move);
        Ok(entry.mv)
    }

    /// Count leaf nodes of the legal move tree to `depth` plies.
    ///
    /// Draw statuses are ignored, as perft counts move-generation paths.
    pub fn perft(&mut self, depth: usize) -> u64 {
        if depth == 0 {
            return 1;
        }

        let moves =
            movegen::all_legal_moves(&self.board, self.side_to_move, &self.move_context());
        if depth == 1 {
            return moves.len() as u64;
        }

        let mut nodes = 0;
        for mv in moves {
            self.make(mv);
            nodes += self.perft(depth - 1);
            if let Some(entry) = self.history.pop() {
                self.unmake(&entry);
            }
        }
        nodes
    }

    fn commit(&mut self, mv: Move) -> GameStatus {
        self.make(mv);
        self.status = self.evaluate_status();

        debug!(
            "applied {} ({} to move, halfmove {})",
            mv, self.side_to_move, self.halfmove_clock
        );
        if self.status.is_terminal() {
            info!("game over after {}: {}", mv, self.status);
        }
        self.status
    }

    fn make(&mut self, mv: Move) {
        let color = mv.piece.color;
        let previous_castling_rights = self.castling_rights;
        let previous_en_passant_target = self.en_passant_target;
        let previous_halfmove_clock = self.halfmove_clock;
        let previous_fullmove_number = self.fullmove_number;
        let previous_hash = self.hash;
        let previous_status = self.status;

        place_move(&mut self.board, &mv);

        if mv.piece.kind == PieceKind::King {
            self.castling_rights.revoke_all(color);
        } else if mv.piece.kind == PieceKind::Rook {
            revoke_for_corner(&mut self.castling_rights, mv.from, color);
        }
        if let Some(captured) = mv.captured {
            if captured.kind == PieceKind::Rook {
                revoke_for_corner(&mut self.castling_rights, mv.to, captured.color);
            }
        }

        self.en_passant_target = None;
        if mv.piece.kind == PieceKind::Pawn && mv.from.row().abs_diff(mv.to.row()) == 2 {
            let ep_row = (mv.from.row() + mv.to.row()) / 2;
            self.en_passant_target = Some(Square::at(ep_row, mv.from.file()));
        }

        if mv.resets_halfmove_clock() {
            self.halfmove_clock = 0;
        } else {
            self.halfmove_clock = self.halfmove_clock.saturating_add(1);
        }
        if color == Color::Black {
            self.fullmove_number += 1;
        }

        self.side_to_move = color.opponent();
        self.hash = self.compute_hash();

        let made_hash = self.hash;
        let previous_repetition_count = self.repetitions.get(made_hash);
        self.repetitions.increment(made_hash);

        self.history.push(HistoryEntry {
            mv,
            undo: UnmakeInfo {
                previous_castling_rights,
                previous_en_passant_target,
                previous_halfmove_clock,
                previous_fullmove_number,
                previous_hash,
                previous_status,
                made_hash,
                previous_repetition_count,
            },
        });
    }

    fn unmake(&mut self, entry: &HistoryEntry) {
        let info = &entry.undo;
        self.repetitions
            .set(info.made_hash, info.previous_repetition_count);

        unplace_move(&mut self.board, &entry.mv);
        self.side_to_move = entry.mv.piece.color;
        self.castling_rights = info.previous_castling_rights;
        self.en_passant_target = info.previous_en_passant_target;
        self.halfmove_clock = info.previous_halfmove_clock;
        self.fullmove_number = info.previous_fullmove_number;
        self.hash = info.previous_hash;
        self.status = info.previous_status;
    }

    /// The en passant target as repetition sees it: present only when the
    /// side to move has a legal en passant capture onto it.
    pub(crate) fn capturable_en_passant(&self) -> Option<Square> {
        let target = self.en_passant_target?;
        let side = self.side_to_move;
        let victim = target.offset(-side.pawn_direction(), 0)?;
        let ctx = self.move_context();

        [-1, 1]
            .into_iter()
            .filter_map(|d_file| victim.offset(0, d_file))
            .filter(|&sq| self.board.get(sq) == Some(Piece::new(side, PieceKind::Pawn)))
            .any(|sq| {
                movegen::legal_moves(&self.board, sq, &ctx)
                    .iter()
                    .any(|m| m.is_en_passant)
            })
            .then_some(target)
    }

    fn compute_hash(&self) -> u64 {
        position_hash(
            &self.board,
            self.side_to_move,
            self.castling_rights,
            self.capturable_en_passant(),
        )
    }

    fn evaluate_status(&self) -> GameStatus {
        let ctx = self.move_context();
        let in_check = movegen::is_in_check(&self.board, self.side_to_move);

        if !movegen::has_legal_move(&self.board, self.side_to_move, &ctx) {
            return if in_check {
                GameStatus::Checkmate
            } else {
                GameStatus::Stalemate
            };
        }
        if self.board.is_insufficient_material() {
            return GameStatus::DrawByInsufficientMaterial;
        }
        if self.halfmove_clock >= 100 {
            return GameStatus::DrawByFiftyMove;
        }
        if self.repetitions.get(self.hash) >= 3 {
            return GameStatus::DrawByRepetition;
        }
        if in_check {
            GameStatus::Check
        } else {
            GameStatus::InProgress
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        GameState::new()
    }
}

/// A rook leaving or captured on its original corner costs that side's right.
fn revoke_for_corner(rights: &mut CastlingRights, sq: Square, color: Color) {
    if sq == Square::at(color.back_row(), 0) {
        rights.revoke(color, false);
    } else if sq == Square::at(color.back_row(), 7) {
        rights.revoke(color, true);
    }
}

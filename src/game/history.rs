use std::collections::HashMap;

use crate::board::{CastlingRights, Move, Square};

use super::GameStatus;

#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct RepetitionTable {
    counts: HashMap<u64, u32>,
}

impl RepetitionTable {
    pub(crate) fn new() -> Self {
        RepetitionTable {
            counts: HashMap::new(),
        }
    }

    pub(crate) fn get(&self, hash: u64) -> u32 {
        self.counts.get(&hash).copied().unwrap_or(0)
    }

    pub(crate) fn set(&mut self, hash: u64, count: u32) {
        if count == 0 {
            self.counts.remove(&hash);
        } else {
            self.counts.insert(hash, count);
        }
    }

    pub(crate) fn increment(&mut self, hash: u64) -> u32 {
        let next = self.get(hash).saturating_add(1);
        self.set(hash, next);
        next
    }
}

/// State that a move destroys and that cannot be re-derived from the move
/// itself, captured before the move is made.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) struct UnmakeInfo {
    pub(crate) previous_castling_rights: CastlingRights,
    pub(crate) previous_en_passant_target: Option<Square>,
    pub(crate) previous_halfmove_clock: u32,
    pub(crate) previous_fullmove_number: u32,
    pub(crate) previous_hash: u64,
    pub(crate) previous_status: GameStatus,
    pub(crate) made_hash: u64,
    pub(crate) previous_repetition_count: u32,
}

/// One ply of the game record.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HistoryEntry {
    pub mv: Move,
    pub(crate) undo: UnmakeInfo,
}

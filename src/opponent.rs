//! Automated opponent that plays uniformly random legal moves.

use log::debug;
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

use crate::board::{Move, PieceKind};
use crate::game::GameState;

/// Picks a uniformly random legal move for the side to move.
///
/// Generic over the random source so games can be replayed from a seed.
/// Promotions are always to a queen; under-promotions are not offered as
/// separate choices, so a promoting pawn counts as one candidate like any
/// other move.
#[derive(Debug)]
pub struct RandomOpponent<R: Rng = StdRng> {
    rng: R,
}

impl<R: Rng> RandomOpponent<R> {
    pub fn new(rng: R) -> Self {
        RandomOpponent { rng }
    }

    /// A random legal move, or `None` when the side to move has none
    /// (including every terminal status).
    pub fn choose_move(&mut self, game: &GameState) -> Option<Move> {
        let candidates: Vec<Move> = game
            .all_legal_moves()
            .into_iter()
            .filter(|mv| mv.promotion.map_or(true, |kind| kind == PieceKind::Queen))
            .collect();

        let choice = candidates.choose(&mut self.rng).copied();
        if let Some(mv) = choice {
            debug!("opponent picked {} of {} candidates", mv, candidates.len());
        }
        choice
    }
}

impl RandomOpponent<StdRng> {
    /// Deterministic opponent for reproducible games.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        RandomOpponent::new(StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        RandomOpponent::new(StdRng::from_entropy())
    }
}

impl Default for RandomOpponent<StdRng> {
    fn default() -> Self {
        RandomOpponent::from_entropy()
    }
}

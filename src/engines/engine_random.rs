//! Random-successor engine.
//!
//! Picks uniformly among the legal successors. Used as the default player and
//! for exercising the protocol session; it makes no attempt at good play.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::debug;

use crate::checkers_errors::{CheckersError, CheckersResult};
use crate::engines::engine_trait::Engine;
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_generator::LegalMoveGenerator;
use crate::move_generation::move_generator::MoveGenerator;
use crate::utils::deadline::Deadline;

pub struct RandomEngine {
    move_generator: LegalMoveGenerator,
    rng: StdRng,
}

impl RandomEngine {
    pub fn new() -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::from_os_rng(),
        }
    }

    /// Deterministic engine for reproducible games.
    pub fn with_seed(seed: u64) -> Self {
        Self {
            move_generator: LegalMoveGenerator,
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine for RandomEngine {
    fn name(&self) -> &str {
        "Random"
    }

    fn choose_successor(&mut self, game_state: &GameState, deadline: &Deadline) -> CheckersResult<GameState> {
        let successors = self.move_generator.find_possible_moves(game_state);
        debug!(
            successors = successors.len(),
            time_left_ms = deadline.time_until().num_milliseconds(),
            "random engine choosing"
        );

        successors
            .choose(&mut self.rng)
            .cloned()
            .ok_or(CheckersError::NoSuccessors)
    }
}

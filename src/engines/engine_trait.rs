//! Move-selection abstraction used by the protocol session.
//!
//! An engine receives a non-terminal state and the deadline for its reply and
//! returns exactly one of the state's legal successors.

use crate::checkers_errors::CheckersResult;
use crate::game_state::game_state::GameState;
use crate::utils::deadline::Deadline;

pub trait Engine: Send {
    fn name(&self) -> &str;

    fn choose_successor(&mut self, game_state: &GameState, deadline: &Deadline) -> CheckersResult<GameState>;
}

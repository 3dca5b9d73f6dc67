use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_apply::apply_move;
use crate::moves::checkers_move::Move;

pub trait MoveGenerator: Send + Sync {
    /// Every legal move for the side to move, including the sentinel that
    /// ends the game when no ordinary move exists.
    fn generate_moves(&self, game_state: &GameState) -> Vec<Move>;

    /// The successor state of each generated move, in the same order.
    fn find_possible_moves(&self, game_state: &GameState) -> Vec<GameState> {
        self.generate_moves(game_state)
            .iter()
            .map(|mv| apply_move(game_state, mv))
            .collect()
    }
}

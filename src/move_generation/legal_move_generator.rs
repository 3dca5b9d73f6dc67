//! Full legal move generation pipeline.
//!
//! Finished games produce nothing and an exhausted draw counter produces the
//! draw. Otherwise every piece of the side to move is searched for capture
//! chains in ascending cell order; if any capture exists anywhere, captures
//! are the only legal moves. Without captures the simple steps are legal,
//! and a side left with neither loses.

use tracing::debug;

use crate::game_state::checkers_types::{Cell, Player};
use crate::game_state::game_state::GameState;
use crate::move_generation::legal_move_jumps::generate_jumps;
use crate::move_generation::legal_move_steps::generate_steps;
use crate::move_generation::move_generator::MoveGenerator;
use crate::moves::checkers_move::Move;

pub struct LegalMoveGenerator;

impl MoveGenerator for LegalMoveGenerator {
    fn generate_moves(&self, game_state: &GameState) -> Vec<Move> {
        if game_state.last_move().is_eog() {
            return Vec::new();
        }

        if game_state.moves_until_draw() == 0 {
            debug!("draw counter exhausted");
            return vec![Move::DRAW];
        }

        let player = game_state.next_player();
        let own_cells: Vec<Cell> = game_state
            .board()
            .occupants()
            .filter(|(_, occupant)| occupant.belongs_to(player))
            .map(|(cell, _)| cell)
            .collect();

        let mut scratch = *game_state.board();
        let mut moves = Vec::<Move>::with_capacity(16);
        let mut capture_found = false;
        for &cell in &own_cells {
            capture_found |= generate_jumps(&mut scratch, player, cell, &mut moves);
        }
        debug_assert_eq!(&scratch, game_state.board());

        if !capture_found {
            for &cell in &own_cells {
                generate_steps(game_state.board(), player, cell, &mut moves);
            }
        }

        if moves.is_empty() {
            debug!(%player, "no legal move, conceding");
            moves.push(match player {
                Player::Red => Move::WHITE_WINS,
                Player::White => Move::RED_WINS,
            });
        } else {
            debug!(%player, count = moves.len(), capture_found, "generated moves");
        }

        moves
    }
}

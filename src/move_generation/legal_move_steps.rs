//! Simple one-step moves onto empty diagonal neighbours.

use crate::game_state::board::{row_col_to_cell, Board};
use crate::game_state::checkers_types::{Cell, Occupant, Player};
use crate::move_generation::legal_move_shared::{cell_coordinates, piece_directions};
use crate::moves::checkers_move::Move;

pub fn generate_steps(board: &Board, player: Player, from: Cell, moves: &mut Vec<Move>) {
    let (row, col) = cell_coordinates(from);
    let is_king = board.get(from).is_king();

    for (dr, dc) in piece_directions(player, is_king) {
        if board.get_row_col(row + dr, col + dc) != Occupant::EMPTY {
            continue;
        }
        if let Some(to) = row_col_to_cell(row + dr, col + dc) {
            moves.push(Move::Simple { from, to });
        }
    }
}

#[cfg(test)]
mod tests {
    use super::generate_steps;
    use crate::game_state::checkers_types::Player;
    use crate::game_state::game_state::GameState;
    use crate::moves::checkers_move::Move;

    #[test]
    fn edge_man_has_one_step_and_king_has_two() {
        let man = GameState::from_message("............r...............w... BOG r 50")
            .expect("message should parse");
        let king = GameState::from_message("............R...............w... BOG r 50")
            .expect("message should parse");

        let mut man_moves = Vec::new();
        generate_steps(man.board(), Player::Red, 13, &mut man_moves);
        assert_eq!(man_moves, vec![Move::Simple { from: 13, to: 17 }]);

        let mut king_moves = Vec::new();
        generate_steps(king.board(), Player::Red, 13, &mut king_moves);
        assert_eq!(
            king_moves,
            vec![Move::Simple { from: 13, to: 17 }, Move::Simple { from: 13, to: 9 }]
        );
    }

    #[test]
    fn occupied_targets_block_steps() {
        let game = GameState::new_game();
        let mut moves = Vec::new();
        generate_steps(game.board(), Player::Red, 5, &mut moves);
        assert!(moves.is_empty());
    }
}
